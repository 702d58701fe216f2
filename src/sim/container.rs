// In-memory container backend for the simulator

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use slotkeys_core::{BackendError, ContainerBackend, ItemStack, Region, SlotRef};

use super::scenario::ContainerKind;

/// Cursor stack shared between the simulated screen and the container,
/// the way the real game shares it.
pub type SharedCursor = Arc<Mutex<Option<ItemStack>>>;

/// A fully in-memory container screen.
///
/// Slot ids are assigned in region declaration order; `Region::Inventory`
/// is handled as the composite the backend contract requires (main
/// inventory first, then the hotbar).
pub struct SimContainer {
    regions: Vec<(Region, Vec<Option<ItemStack>>)>,
    cursor: SharedCursor,
}

impl SimContainer {
    pub fn new(kind: ContainerKind, cursor: SharedCursor) -> Self {
        let mut regions: Vec<(Region, Vec<Option<ItemStack>>)> = Vec::new();
        match kind {
            ContainerKind::Player => {}
            ContainerKind::Chest { rows } => {
                regions.push((Region::Chest, vec![None; rows as usize * 9]));
            }
            ContainerKind::Crafting => {
                regions.push((Region::CraftingOut, vec![None; 1]));
                regions.push((Region::CraftingIn, vec![None; 9]));
            }
            ContainerKind::Furnace => {
                regions.push((Region::FurnaceIn, vec![None; 1]));
                regions.push((Region::FurnaceFuel, vec![None; 1]));
                regions.push((Region::FurnaceOut, vec![None; 1]));
            }
        }
        regions.push((Region::InventoryNotHotbar, vec![None; 27]));
        regions.push((Region::InventoryHotbar, vec![None; 9]));
        Self { regions, cursor }
    }

    pub fn set(&mut self, region: Region, index: usize, stack: ItemStack) {
        let (region, index) = self.resolve(region, index);
        if let Some(slots) = self.slots_mut(region) {
            if index < slots.len() {
                slots[index] = Some(stack);
            }
        }
    }

    pub fn get(&self, region: Region, index: usize) -> Option<ItemStack> {
        let (region, index) = self.resolve(region, index);
        self.slots(region)?.get(index).copied().flatten()
    }

    /// Host slot id for a (region, index) pair
    pub fn slot_id(&self, region: Region, index: usize) -> Option<usize> {
        let (region, index) = self.resolve(region, index);
        let mut id = 0;
        for (r, slots) in &self.regions {
            if *r == region {
                return (index < slots.len()).then_some(id + index);
            }
            id += slots.len();
        }
        None
    }

    fn slots(&self, region: Region) -> Option<&Vec<Option<ItemStack>>> {
        self.regions
            .iter()
            .find(|(r, _)| *r == region)
            .map(|(_, slots)| slots)
    }

    fn slots_mut(&mut self, region: Region) -> Option<&mut Vec<Option<ItemStack>>> {
        self.regions
            .iter_mut()
            .find(|(r, _)| *r == region)
            .map(|(_, slots)| slots)
    }

    fn region_len(&self, region: Region) -> usize {
        if region == Region::Inventory {
            self.region_len(Region::InventoryNotHotbar) + self.region_len(Region::InventoryHotbar)
        } else {
            self.slots(region).map_or(0, Vec::len)
        }
    }

    fn resolve(&self, region: Region, index: usize) -> (Region, usize) {
        if region == Region::Inventory {
            let main = self.region_len(Region::InventoryNotHotbar);
            if index < main {
                (Region::InventoryNotHotbar, index)
            } else {
                (Region::InventoryHotbar, index - main)
            }
        } else {
            (region, index)
        }
    }

    fn clear(&mut self, region: Region, index: usize) {
        let (region, index) = self.resolve(region, index);
        if let Some(slots) = self.slots_mut(region) {
            if index < slots.len() {
                slots[index] = None;
            }
        }
    }
}

impl ContainerBackend for SimContainer {
    fn slot_region(&self, slot: usize) -> Option<Region> {
        let mut id = 0;
        for (region, slots) in &self.regions {
            if slot < id + slots.len() {
                return Some(*region);
            }
            id += slots.len();
        }
        None
    }

    fn slot_index(&self, slot: usize) -> Option<usize> {
        let mut id = 0;
        for (_, slots) in &self.regions {
            if slot < id + slots.len() {
                return Some(slot - id);
            }
            id += slots.len();
        }
        None
    }

    fn is_region_available(&self, region: Region) -> bool {
        if region == Region::Inventory {
            self.slots(Region::InventoryNotHotbar).is_some()
                && self.slots(Region::InventoryHotbar).is_some()
        } else {
            self.slots(region).is_some()
        }
    }

    fn region_size(&self, region: Region) -> usize {
        self.region_len(region)
    }

    fn stack_at(&self, region: Region, index: usize) -> Option<ItemStack> {
        if index >= self.region_len(region) {
            return None;
        }
        self.get(region, index)
    }

    fn first_empty_index(&self, region: Region) -> Option<usize> {
        (0..self.region_len(region)).find(|&index| self.get(region, index).is_none())
    }

    fn move_stack(&mut self, from: SlotRef, to: SlotRef) -> Result<bool, BackendError> {
        let Some(stack) = self.get(from.region, from.index) else {
            return Ok(false);
        };
        match self.get(to.region, to.index) {
            None => self.set(to.region, to.index, stack),
            Some(dest) if dest.is_item_equal(&stack) => {
                self.set(
                    to.region,
                    to.index,
                    ItemStack::new(dest.id, dest.count + stack.count, dest.damage),
                );
            }
            Some(_) => return Ok(false),
        }
        self.clear(from.region, from.index);
        Ok(true)
    }

    fn move_some(&mut self, from: SlotRef, to: SlotRef, count: u32) -> Result<bool, BackendError> {
        let Some(stack) = self.get(from.region, from.index) else {
            return Ok(false);
        };
        let count = count.min(stack.count);
        match self.get(to.region, to.index) {
            None => self.set(to.region, to.index, ItemStack::new(stack.id, count, stack.damage)),
            Some(dest) if dest.is_item_equal(&stack) => {
                self.set(
                    to.region,
                    to.index,
                    ItemStack::new(dest.id, dest.count + count, dest.damage),
                );
            }
            Some(_) => return Ok(false),
        }
        if stack.count > count {
            self.set(
                from.region,
                from.index,
                ItemStack::new(stack.id, stack.count - count, stack.damage),
            );
        } else {
            self.clear(from.region, from.index);
        }
        Ok(true)
    }

    fn left_click(&mut self, at: SlotRef) -> Result<(), BackendError> {
        let (concrete, _) = self.resolve(at.region, at.index);
        let shared = Arc::clone(&self.cursor);
        let mut cursor = shared.lock();
        match cursor.take() {
            Some(held) => {
                if concrete == Region::CraftingOut || concrete == Region::FurnaceOut {
                    // Output slots never accept a put-down
                    *cursor = Some(held);
                    return Ok(());
                }
                match self.get(at.region, at.index) {
                    None => self.set(at.region, at.index, held),
                    Some(dest) if dest.is_item_equal(&held) => {
                        self.set(
                            at.region,
                            at.index,
                            ItemStack::new(dest.id, dest.count + held.count, dest.damage),
                        );
                    }
                    Some(dest) => {
                        self.set(at.region, at.index, held);
                        *cursor = Some(dest);
                    }
                }
            }
            None => {
                *cursor = self.get(at.region, at.index);
                self.clear(at.region, at.index);
            }
        }
        Ok(())
    }

    fn drop_stack(&mut self, at: SlotRef) -> Result<bool, BackendError> {
        let had_stack = self.get(at.region, at.index).is_some();
        self.clear(at.region, at.index);
        Ok(had_stack)
    }
}

impl fmt::Display for SimContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (region, slots) in &self.regions {
            write!(f, "  {:<22}", region.to_string())?;
            for slot in slots {
                match slot {
                    Some(stack) => write!(f, " [{}]", stack)?,
                    None => write!(f, " [  ]")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
