// Slotkeys Destination Routing
// Region availability ordering and cyclic destination selection

use smallvec::SmallVec;

use crate::action::Bias;
use crate::backend::ContainerBackend;
use crate::region::Region;

/// Ordered list of regions eligible for cyclic destination selection
pub type AvailabilityList = SmallVec<[Region; 3]>;

/// Build the availability list for the open container.
///
/// At most one special region leads the list, checked in priority order
/// chest > crafting input > furnace input, followed by the two player
/// inventory regions. The resulting order is the cyclic neighborhood the
/// up/down shortcuts walk; its length is always 2 or 3.
pub fn available_regions<B: ContainerBackend>(backend: &B) -> AvailabilityList {
    let mut list = AvailabilityList::new();
    if backend.is_region_available(Region::Chest) {
        list.push(Region::Chest);
    } else if backend.is_region_available(Region::CraftingIn) {
        list.push(Region::CraftingIn);
    } else if backend.is_region_available(Region::FurnaceIn) {
        list.push(Region::FurnaceIn);
    }
    list.push(Region::InventoryNotHotbar);
    list.push(Region::InventoryHotbar);
    list
}

/// Pick the destination region for a transfer out of `source`.
///
/// Without a bias the default-adjacency rule applies and always yields a
/// destination. With a bias the source must itself be in the availability
/// list; the destination is the cyclically adjacent entry. `None` means the
/// shortcut is inapplicable this tick.
pub fn resolve_destination(
    source: Region,
    bias: Option<Bias>,
    available: &[Region],
) -> Option<Region> {
    match bias {
        None => Some(default_adjacency(source, available)),
        Some(bias) => {
            let src_index = available.iter().position(|r| *r == source)?;
            let len = available.len() as isize;
            let dest = (src_index as isize + bias.offset()).rem_euclid(len);
            Some(available[dest as usize])
        }
    }
}

/// The no-bias rule: main inventory exchanges with the special region when
/// one is open (falling back to the hotbar), the hotbar always targets the
/// head of the list, and anything else lands in the generic inventory.
fn default_adjacency(source: Region, available: &[Region]) -> Region {
    match source {
        Region::InventoryNotHotbar => {
            if available.first() != Some(&Region::InventoryNotHotbar) {
                available[0]
            } else {
                Region::InventoryHotbar
            }
        }
        Region::InventoryHotbar => available[0],
        _ => Region::Inventory,
    }
}
