// Slotkeys Host Interface
// The seam between the engine and the game's screen/input layer

use crate::key::Key;
use crate::stack::ItemStack;

/// The slot currently under the pointer, with its contents.
///
/// Carrying the stack here lets the dispatcher reject an empty hover
/// without touching the container backend.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverTarget {
    /// Host-assigned slot id, resolvable through the container backend
    pub slot: usize,
    /// Contents of the hovered slot, `None` when empty
    pub stack: Option<ItemStack>,
}

/// Interface to the host game's rendering/input loop.
///
/// The engine depends only on this trait, never on host internals. All
/// queries reflect the state of the current poll tick; the host owns and
/// refreshes them.
pub trait UiHost {
    /// Raw hardware state for a single key, unbuffered
    fn is_key_down(&self, key: Key) -> bool;

    /// Pointer coordinates in UI space
    fn pointer_pos(&self) -> (i32, i32);

    /// The UI slot under the current pointer position, if any
    fn hovered_slot(&self) -> Option<HoverTarget>;

    /// The stack held on the cursor, if any
    fn cursor_stack(&self) -> Option<ItemStack>;

    /// Reset the pointer device's transient state. Called after a shortcut
    /// fires so the host's own default click handling does not run on top
    /// of it.
    fn reset_pointer(&mut self);

    /// Reposition the pointer; pairs with [`reset_pointer`](Self::reset_pointer)
    /// to restore the pre-reset coordinates.
    fn set_pointer_pos(&mut self, x: i32, y: i32);

    /// Surface a message in the host's user-visible log
    fn show_status(&mut self, message: &str);
}
