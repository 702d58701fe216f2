//! Simulation layer
//!
//! An in-memory [`ContainerBackend`](slotkeys_core::ContainerBackend), a
//! scripted [`UiHost`](slotkeys_core::UiHost) and the TOML scenario format
//! that drives them.

mod container;
mod host;
mod scenario;

pub use container::{SharedCursor, SimContainer};
pub use host::SimHost;
pub use scenario::{ContainerKind, CursorEntry, Hover, Scenario, ScenarioError, SlotEntry, Tick};
