// Slotkeys Item Stacks
// Identity + quantity + metadata of the items occupying a slot

use std::fmt;

use serde::{Deserialize, Serialize};

/// The items occupying one slot.
///
/// An empty slot is represented as `None` at the backend, never as a stack
/// with `count == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    /// Item identity
    pub id: u16,
    /// Quantity, always > 0 in an occupied slot
    pub count: u32,
    /// Damage / variant metadata, part of merge identity
    #[serde(default)]
    pub damage: i16,
}

impl ItemStack {
    pub fn new(id: u16, count: u32, damage: i16) -> Self {
        Self { id, count, damage }
    }

    /// Two stacks are mergeable iff identity and metadata match.
    /// Quantity plays no part.
    pub fn is_item_equal(&self, other: &ItemStack) -> bool {
        self.id == other.id && self.damage == other.damage
    }
}

impl fmt::Display for ItemStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.damage != 0 {
            write!(f, "{}x#{}:{}", self.count, self.id, self.damage)
        } else {
            write!(f, "{}x#{}", self.count, self.id)
        }
    }
}
