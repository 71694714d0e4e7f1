//! Inventories, slots and slot lookup keys.
//!
//! The mod never owns slot contents. It holds [`SlotRef`] lookup keys
//! (inventory id + index) and re-reads the slot through the host every time
//! it acts, so a re-created inventory at worst invalidates a key instead of
//! leaving a dangling reference.

use std::collections::HashMap;
use std::fmt;

use strum::{Display, EnumIter};

use crate::item::{DressType, ItemStack};

/// Background icons the game client paints on character armor slots.
pub mod icons {
    pub const ARMOR_HEAD: &str = "armorhead";
    pub const ARMOR_BODY: &str = "armorbody";
    pub const ARMOR_LEGS: &str = "armorlegs";
}

/// The player inventories the mod reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum InventoryId {
    /// Worn equipment and clothing.
    Character,
    /// The hand bar, including the off-hand slot.
    Hotbar,
    /// Carried pack space.
    Backpack,
}

/// Lookup key for a single slot: inventory id plus index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotRef {
    pub inventory: InventoryId,
    pub index: usize,
}

impl SlotRef {
    pub const fn new(inventory: InventoryId, index: usize) -> Self {
        Self { inventory, index }
    }
}

impl fmt::Display for SlotRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.inventory, self.index)
    }
}

/// A single addressable inventory position.
#[derive(Debug, Clone, Default)]
pub struct Slot {
    /// Contents, at most one stack.
    pub stack: Option<ItemStack>,
    /// Icon painted behind an empty slot; classification fallback.
    pub background_icon: Option<String>,
    /// Restriction: only items wearable at this location may be placed.
    pub restriction: Option<DressType>,
    /// Marks the hotbar off-hand position.
    pub offhand: bool,
    /// Locked slots refuse all transfers.
    pub locked: bool,
}

impl Slot {
    /// A plain unrestricted slot.
    pub fn plain() -> Self {
        Slot::default()
    }

    /// A character armor slot for the given location, with its icon.
    pub fn armor(dress: DressType) -> Self {
        let icon = match dress {
            DressType::Head => icons::ARMOR_HEAD,
            DressType::Body => icons::ARMOR_BODY,
            DressType::Legs => icons::ARMOR_LEGS,
        };
        Slot {
            background_icon: Some(icon.to_string()),
            restriction: Some(dress),
            ..Slot::default()
        }
    }

    /// The hotbar off-hand slot.
    pub fn offhand() -> Self {
        Slot {
            offhand: true,
            ..Slot::default()
        }
    }

    /// A plain slot holding the given stack.
    pub fn holding(stack: ItemStack) -> Self {
        Slot {
            stack: Some(stack),
            ..Slot::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_none()
    }

    /// Check whether this slot's restriction allows the given stack.
    pub fn accepts(&self, stack: &ItemStack) -> bool {
        match self.restriction {
            None => true,
            Some(dress) => stack.is_dress_type(dress),
        }
    }
}

/// A named container of slots.
#[derive(Debug, Clone)]
pub struct Inventory {
    pub id: InventoryId,
    pub slots: Vec<Slot>,
}

impl Inventory {
    pub fn new(id: InventoryId, slots: Vec<Slot>) -> Self {
        Self { id, slots }
    }

    pub fn get(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Slot> {
        self.slots.get_mut(index)
    }

    /// Index of the first slot matching a predicate.
    pub fn find<F>(&self, predicate: F) -> Option<usize>
    where
        F: Fn(&Slot) -> bool,
    {
        self.slots.iter().position(predicate)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// All inventories the host exposes for one player.
#[derive(Debug, Clone, Default)]
pub struct InventorySet {
    inventories: HashMap<InventoryId, Inventory>,
}

impl InventorySet {
    /// Loose-item search order: hand bar before pack.
    pub const SEARCH_ORDER: [InventoryId; 2] = [InventoryId::Hotbar, InventoryId::Backpack];

    pub fn new() -> Self {
        InventorySet::default()
    }

    pub fn insert(&mut self, inventory: Inventory) {
        self.inventories.insert(inventory.id, inventory);
    }

    pub fn get(&self, id: InventoryId) -> Option<&Inventory> {
        self.inventories.get(&id)
    }

    pub fn get_mut(&mut self, id: InventoryId) -> Option<&mut Inventory> {
        self.inventories.get_mut(&id)
    }

    /// Resolve a slot ref to the live slot, if it still exists.
    pub fn slot(&self, slot_ref: SlotRef) -> Option<&Slot> {
        self.get(slot_ref.inventory)?.get(slot_ref.index)
    }

    /// Resolve a slot ref to the live slot, mutably.
    pub fn slot_mut(&mut self, slot_ref: SlotRef) -> Option<&mut Slot> {
        self.get_mut(slot_ref.inventory)?.get_mut(slot_ref.index)
    }

    /// First slot in search order whose stack matches a predicate.
    pub fn find_item<F>(&self, predicate: F) -> Option<SlotRef>
    where
        F: Fn(&ItemStack) -> bool,
    {
        for id in Self::SEARCH_ORDER {
            let Some(inventory) = self.get(id) else {
                continue;
            };
            if let Some(index) = inventory.find(|slot| slot.stack.as_ref().is_some_and(&predicate))
            {
                return Some(SlotRef::new(id, index));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemClass;

    fn make_set() -> InventorySet {
        let mut set = InventorySet::new();
        set.insert(Inventory::new(
            InventoryId::Hotbar,
            vec![Slot::plain(), Slot::plain(), Slot::offhand()],
        ));
        set.insert(Inventory::new(
            InventoryId::Backpack,
            vec![Slot::plain(), Slot::plain(), Slot::plain(), Slot::plain()],
        ));
        set
    }

    #[test]
    fn test_slot_ref_display() {
        let r = SlotRef::new(InventoryId::Hotbar, 3);
        assert_eq!(r.to_string(), "hotbar[3]");
    }

    #[test]
    fn test_armor_slot_accepts() {
        let slot = Slot::armor(DressType::Head);
        assert!(slot.accepts(&ItemStack::armor("plate-helmet", DressType::Head)));
        assert!(!slot.accepts(&ItemStack::armor("plate-body", DressType::Body)));
        assert!(!slot.accepts(&ItemStack::new("torch", ItemClass::Torch)));
        assert_eq!(slot.background_icon.as_deref(), Some(icons::ARMOR_HEAD));
    }

    #[test]
    fn test_plain_slot_accepts_anything() {
        let slot = Slot::plain();
        assert!(slot.accepts(&ItemStack::new("torch", ItemClass::Torch)));
        assert!(slot.accepts(&ItemStack::armor("plate-body", DressType::Body)));
    }

    #[test]
    fn test_find_item_prefers_hotbar() {
        let mut set = make_set();
        set.get_mut(InventoryId::Backpack).unwrap().slots[1].stack =
            Some(ItemStack::new("torch", ItemClass::Torch));
        set.get_mut(InventoryId::Hotbar).unwrap().slots[1].stack =
            Some(ItemStack::new("torch", ItemClass::Torch));

        let found = set.find_item(|s| s.class == ItemClass::Torch).unwrap();
        assert_eq!(found.inventory, InventoryId::Hotbar);
        assert_eq!(found.index, 1);
    }

    #[test]
    fn test_find_item_falls_back_to_backpack() {
        let mut set = make_set();
        set.get_mut(InventoryId::Backpack).unwrap().slots[2].stack =
            Some(ItemStack::new("lantern", ItemClass::Lantern));

        let found = set.find_item(|s| s.class == ItemClass::Lantern).unwrap();
        assert_eq!(found, SlotRef::new(InventoryId::Backpack, 2));
    }

    #[test]
    fn test_stale_slot_ref_resolves_to_none() {
        let set = make_set();
        assert!(set.slot(SlotRef::new(InventoryId::Hotbar, 99)).is_none());
        assert!(set.slot(SlotRef::new(InventoryId::Character, 0)).is_none());
    }
}
