// Slotkeys Container Backend
// The seam between the engine and the container/inventory data layer

use thiserror::Error;

use crate::region::{Region, SlotRef};
use crate::stack::ItemStack;

/// Failure inside the container layer itself, as opposed to an operation
/// the layer carried out and refused (`Ok(false)`). Backend errors abort
/// the current shortcut invocation at the dispatcher boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("slot {0} is not part of the open container")]
    UnknownSlot(usize),

    #[error("region {0} is not available for the open container")]
    RegionUnavailable(Region),

    #[error("container operation failed: {0}")]
    OperationFailed(String),
}

/// Interface to the container/inventory data layer.
///
/// The backend is a trusted transactional collaborator: every call is
/// synchronous and individually atomic, and the engine never rolls back a
/// partial multi-slot operation. A handle is expected to be opened fresh
/// for each dispatcher invocation rather than cached across ticks.
///
/// `Region::Inventory` is a composite destination: its index space covers
/// `InventoryNotHotbar` first, then `InventoryHotbar`, in that order.
/// Backends must honor that mapping for queries and mutations alike; slots
/// themselves always report one of the two concrete regions.
pub trait ContainerBackend {
    /// Region owning a host slot id
    fn slot_region(&self, slot: usize) -> Option<Region>;

    /// Index of a host slot id within its region
    fn slot_index(&self, slot: usize) -> Option<usize>;

    /// Whether the open container exposes a region
    fn is_region_available(&self, region: Region) -> bool;

    /// Slot capacity of a region (0 when unavailable)
    fn region_size(&self, region: Region) -> usize;

    /// Contents of a slot, `None` when empty or out of range
    fn stack_at(&self, region: Region, index: usize) -> Option<ItemStack>;

    /// First empty slot index in a region's natural order
    fn first_empty_index(&self, region: Region) -> Option<usize>;

    /// Move a whole stack. `Ok(false)` means the container refused the move
    /// (e.g. destination rules); the stacks are then left untouched.
    fn move_stack(&mut self, from: SlotRef, to: SlotRef) -> Result<bool, BackendError>;

    /// Move up to `count` items, merging into a compatible stack at the
    /// destination when one is present
    fn move_some(&mut self, from: SlotRef, to: SlotRef, count: u32) -> Result<bool, BackendError>;

    /// Primitive UI click: pick up the slot's stack onto the cursor, or put
    /// the cursor stack down (merge/swap per container rules). A slot may
    /// refuse a put-down (e.g. a crafting output), leaving the cursor
    /// stack in place.
    fn left_click(&mut self, at: SlotRef) -> Result<(), BackendError>;

    /// Remove a stack from the container entirely.
    /// `Ok(false)` when the slot was already empty.
    fn drop_stack(&mut self, at: SlotRef) -> Result<bool, BackendError>;
}
