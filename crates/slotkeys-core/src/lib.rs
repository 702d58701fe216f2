// Slotkeys Core Library
// Shortcut resolution and slot-transfer engine for container UIs

pub mod action;
pub mod backend;
pub mod bindings;
pub mod dispatch;
pub mod host;
pub mod key;
pub mod latch;
pub mod region;
pub mod routing;
pub mod stack;
pub mod transfer;

pub use action::{Bias, ShortcutAction, TransferMode};
pub use backend::{BackendError, ContainerBackend};
pub use bindings::{ShortcutBindings, PROP_SHORTCUT_PREFIX, VALUE_DEFAULT};
pub use dispatch::{DispatchError, ShortcutDispatcher};
pub use host::{HoverTarget, UiHost};
pub use key::{key_from_name, key_name, Key};
pub use latch::LatchTracker;
pub use region::{Region, SlotRef};
pub use routing::{available_regions, resolve_destination, AvailabilityList};
pub use stack::ItemStack;
pub use transfer::{TransferEngine, TransferError, TransferOutcome, TransferRequest};
