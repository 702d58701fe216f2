// Slotkeys Regions
// Logical slot groupings within an open container screen

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// A logical group of slots within the currently open container.
///
/// This is a closed, ordered set; the container backend decides which
/// regions are available for a given screen. A concrete slot belongs to
/// exactly one concrete region. `Inventory` is special: it is never the
/// region of a concrete slot but serves as a composite destination covering
/// `InventoryNotHotbar` followed by `InventoryHotbar` (see
/// [`ContainerBackend`](crate::backend::ContainerBackend)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Composite of the two player inventory regions
    Inventory,
    /// Player inventory minus the hotbar row
    InventoryNotHotbar,
    /// The hotbar row
    InventoryHotbar,
    /// External storage (chest, dispenser, ...)
    Chest,
    /// Crafting grid input
    CraftingIn,
    /// Crafting result slot
    CraftingOut,
    /// Furnace smelting input
    FurnaceIn,
    /// Furnace fuel slot
    FurnaceFuel,
    /// Furnace result slot
    FurnaceOut,
    /// Worn armor slots
    Armor,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Region::Inventory => "inventory",
            Region::InventoryNotHotbar => "inventory_not_hotbar",
            Region::InventoryHotbar => "inventory_hotbar",
            Region::Chest => "chest",
            Region::CraftingIn => "crafting_in",
            Region::CraftingOut => "crafting_out",
            Region::FurnaceIn => "furnace_in",
            Region::FurnaceFuel => "furnace_fuel",
            Region::FurnaceOut => "furnace_out",
            Region::Armor => "armor",
        };
        write!(f, "{}", name)
    }
}

/// A (region, index) pair addressing a single slot.
///
/// The index is zero-based within the region's capacity and is only valid
/// while that region is available for the open container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotRef {
    pub region: Region,
    pub index: usize,
}

impl SlotRef {
    pub fn new(region: Region, index: usize) -> Self {
        Self { region, index }
    }
}

impl fmt::Display for SlotRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.region, self.index)
    }
}
