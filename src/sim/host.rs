// Scripted UI host for scenario replay

use std::collections::HashSet;

use slotkeys_core::{HoverTarget, ItemStack, Key, Region, UiHost};

use super::container::{SharedCursor, SimContainer};

/// A headless stand-in for the game screen.
///
/// Key and pointer state is set from the scenario before each tick; the
/// host records pointer resets and status messages so the replay can
/// print them.
pub struct SimHost {
    down: HashSet<u16>,
    pointer: (i32, i32),
    hover: Option<HoverTarget>,
    cursor: SharedCursor,
    resets: u32,
    messages: Vec<String>,
}

impl SimHost {
    pub fn new(cursor: SharedCursor) -> Self {
        Self {
            down: HashSet::new(),
            pointer: (0, 0),
            hover: None,
            cursor,
            resets: 0,
            messages: Vec::new(),
        }
    }

    /// Replace the held-key set for the coming tick
    pub fn set_keys(&mut self, keys: &[Key]) {
        self.down = keys.iter().map(|k| k.0).collect();
    }

    /// Point at a slot of `container`, or clear the hover with `None`
    pub fn set_hover(&mut self, container: &SimContainer, target: Option<(Region, usize)>) {
        self.hover = target.and_then(|(region, index)| {
            Some(HoverTarget {
                slot: container.slot_id(region, index)?,
                stack: container.get(region, index),
            })
        });
    }

    pub fn reset_count(&self) -> u32 {
        self.resets
    }

    /// Status messages surfaced since the last call, draining the buffer
    pub fn take_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }
}

impl UiHost for SimHost {
    fn is_key_down(&self, key: Key) -> bool {
        self.down.contains(&key.0)
    }

    fn pointer_pos(&self) -> (i32, i32) {
        self.pointer
    }

    fn hovered_slot(&self) -> Option<HoverTarget> {
        self.hover.clone()
    }

    fn cursor_stack(&self) -> Option<ItemStack> {
        *self.cursor.lock()
    }

    fn reset_pointer(&mut self) {
        self.resets += 1;
        self.pointer = (0, 0);
    }

    fn set_pointer_pos(&mut self, x: i32, y: i32) {
        self.pointer = (x, y);
    }

    fn show_status(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}
