// Shared fixtures: an in-memory container backend and a scriptable host
#![allow(dead_code)]

use std::cell::Cell;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::Mutex;

use slotkeys_core::{
    BackendError, ContainerBackend, HoverTarget, ItemStack, Key, Region, SlotRef, UiHost,
};

/// Cursor stack shared between host and container, the way the real game
/// shares it between screen and inventory.
pub type SharedCursor = Arc<Mutex<Option<ItemStack>>>;

pub struct MockContainer {
    /// Concrete regions in slot-id order; `Region::Inventory` never appears
    regions: IndexMap<Region, Vec<Option<ItemStack>>>,
    cursor: SharedCursor,
    /// Moves into these regions report refusal (`Ok(false)`)
    pub refuse_moves_into: HashSet<Region>,
    /// Put-down clicks in these regions leave the cursor stack in place
    pub refuse_clicks_in: HashSet<Region>,
    /// Every trait call, queries included
    pub calls: Cell<usize>,
    /// Stacks removed via drop_stack
    pub dropped: Vec<ItemStack>,
}

impl MockContainer {
    pub fn new(regions: &[(Region, usize)], cursor: SharedCursor) -> Self {
        let regions = regions
            .iter()
            .map(|(region, size)| (*region, vec![None; *size]))
            .collect();
        Self {
            regions,
            cursor,
            refuse_moves_into: HashSet::new(),
            refuse_clicks_in: HashSet::new(),
            calls: Cell::new(0),
            dropped: Vec::new(),
        }
    }

    /// Chest screen: 27 chest slots, 27 main inventory slots, 9 hotbar slots
    pub fn chest(cursor: SharedCursor) -> Self {
        Self::new(
            &[
                (Region::Chest, 27),
                (Region::InventoryNotHotbar, 27),
                (Region::InventoryHotbar, 9),
            ],
            cursor,
        )
    }

    /// Crafting screen: output, 2x2 input grid, then the player regions
    pub fn crafting(cursor: SharedCursor) -> Self {
        Self::new(
            &[
                (Region::CraftingOut, 1),
                (Region::CraftingIn, 4),
                (Region::InventoryNotHotbar, 27),
                (Region::InventoryHotbar, 9),
            ],
            cursor,
        )
    }

    /// Furnace screen: input, fuel, output, then the player regions
    pub fn furnace(cursor: SharedCursor) -> Self {
        Self::new(
            &[
                (Region::FurnaceIn, 1),
                (Region::FurnaceFuel, 1),
                (Region::FurnaceOut, 1),
                (Region::InventoryNotHotbar, 27),
                (Region::InventoryHotbar, 9),
            ],
            cursor,
        )
    }

    pub fn set(&mut self, region: Region, index: usize, stack: ItemStack) {
        let (region, index) = self.resolve(region, index);
        self.regions.get_mut(&region).unwrap()[index] = Some(stack);
    }

    pub fn get(&self, region: Region, index: usize) -> Option<ItemStack> {
        let (region, index) = self.resolve(region, index);
        self.regions[&region][index]
    }

    pub fn count_stacks(&self, region: Region) -> usize {
        let mut n = 0;
        for index in 0..self.region_len(region) {
            if self.get(region, index).is_some() {
                n += 1;
            }
        }
        n
    }

    /// Host slot id of (region, index), following insertion order
    pub fn slot_id(&self, region: Region, index: usize) -> usize {
        let (region, index) = self.resolve(region, index);
        let mut id = 0;
        for (r, slots) in &self.regions {
            if *r == region {
                return id + index;
            }
            id += slots.len();
        }
        panic!("region {} not in container", region);
    }

    fn region_len(&self, region: Region) -> usize {
        if region == Region::Inventory {
            self.regions
                .get(&Region::InventoryNotHotbar)
                .map_or(0, Vec::len)
                + self
                    .regions
                    .get(&Region::InventoryHotbar)
                    .map_or(0, Vec::len)
        } else {
            self.regions.get(&region).map_or(0, Vec::len)
        }
    }

    /// Map the `Inventory` composite onto its concrete region + index
    fn resolve(&self, region: Region, index: usize) -> (Region, usize) {
        if region == Region::Inventory {
            let main = self
                .regions
                .get(&Region::InventoryNotHotbar)
                .map_or(0, Vec::len);
            if index < main {
                (Region::InventoryNotHotbar, index)
            } else {
                (Region::InventoryHotbar, index - main)
            }
        } else {
            (region, index)
        }
    }

    fn bump(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl ContainerBackend for MockContainer {
    fn slot_region(&self, slot: usize) -> Option<Region> {
        self.bump();
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
        self.bump();
        let mut id = 0;
        for slots in self.regions.values() {
            if slot < id + slots.len() {
                return Some(slot - id);
            }
            id += slots.len();
        }
        None
    }

    fn is_region_available(&self, region: Region) -> bool {
        self.bump();
        if region == Region::Inventory {
            self.regions.contains_key(&Region::InventoryNotHotbar)
                && self.regions.contains_key(&Region::InventoryHotbar)
        } else {
            self.regions.contains_key(&region)
        }
    }

    fn region_size(&self, region: Region) -> usize {
        self.bump();
        self.region_len(region)
    }

    fn stack_at(&self, region: Region, index: usize) -> Option<ItemStack> {
        self.bump();
        if index >= self.region_len(region) {
            return None;
        }
        self.get(region, index)
    }

    fn first_empty_index(&self, region: Region) -> Option<usize> {
        self.bump();
        (0..self.region_len(region)).find(|&index| self.get(region, index).is_none())
    }

    fn move_stack(&mut self, from: SlotRef, to: SlotRef) -> Result<bool, BackendError> {
        self.bump();
        let (to_region, _) = self.resolve(to.region, to.index);
        if self.refuse_moves_into.contains(&to_region) {
            return Ok(false);
        }
        let Some(stack) = self.get(from.region, from.index) else {
            return Ok(false);
        };
        match self.get(to.region, to.index) {
            None => {
                self.set(to.region, to.index, stack);
            }
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
        self.bump();
        let (to_region, _) = self.resolve(to.region, to.index);
        if self.refuse_moves_into.contains(&to_region) {
            return Ok(false);
        }
        let Some(stack) = self.get(from.region, from.index) else {
            return Ok(false);
        };
        let count = count.min(stack.count);
        match self.get(to.region, to.index) {
            None => {
                self.set(to.region, to.index, ItemStack::new(stack.id, count, stack.damage));
            }
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
        self.bump();
        let (concrete, _) = self.resolve(at.region, at.index);
        let shared = Arc::clone(&self.cursor);
        let mut cursor = shared.lock();
        match cursor.take() {
            Some(held) => {
                if self.refuse_clicks_in.contains(&concrete) {
                    // Slot refuses a put-down; the cursor keeps the stack
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
                        // Swap
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
        self.bump();
        match self.get(at.region, at.index) {
            Some(stack) => {
                self.dropped.push(stack);
                self.clear(at.region, at.index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl MockContainer {
    fn clear(&mut self, region: Region, index: usize) {
        let (region, index) = self.resolve(region, index);
        self.regions.get_mut(&region).unwrap()[index] = None;
    }
}

pub struct MockHost {
    pub down: HashSet<u16>,
    pub pointer: (i32, i32),
    pub hover: Option<HoverTarget>,
    pub cursor: SharedCursor,
    pub resets: usize,
    pub repositions: Vec<(i32, i32)>,
    pub messages: Vec<String>,
}

impl MockHost {
    pub fn new(cursor: SharedCursor) -> Self {
        Self {
            down: HashSet::new(),
            pointer: (120, 80),
            hover: None,
            cursor,
            resets: 0,
            repositions: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn press(&mut self, name: &str) {
        let key: Key = name.parse().unwrap();
        self.down.insert(key.code());
    }

    pub fn hover_over(&mut self, container: &MockContainer, region: Region, index: usize) {
        self.hover = Some(HoverTarget {
            slot: container.slot_id(region, index),
            stack: container.get(region, index),
        });
    }
}

impl UiHost for MockHost {
    fn is_key_down(&self, key: Key) -> bool {
        self.down.contains(&key.code())
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
        self.repositions.push((x, y));
        self.pointer = (x, y);
    }

    fn show_status(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Host + container pair wired to the same cursor
pub fn chest_setup() -> (MockHost, MockContainer) {
    let cursor: SharedCursor = Arc::new(Mutex::new(None));
    (
        MockHost::new(cursor.clone()),
        MockContainer::chest(cursor),
    )
}

pub fn crafting_setup() -> (MockHost, MockContainer) {
    let cursor: SharedCursor = Arc::new(Mutex::new(None));
    (
        MockHost::new(cursor.clone()),
        MockContainer::crafting(cursor),
    )
}

pub fn furnace_setup() -> (MockHost, MockContainer) {
    let cursor: SharedCursor = Arc::new(Mutex::new(None));
    (
        MockHost::new(cursor.clone()),
        MockContainer::furnace(cursor),
    )
}

/// Properties map from literal pairs
pub fn props(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
