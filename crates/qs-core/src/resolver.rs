//! Locating the character's armor and off-hand slots.

use crate::inventory::{InventoryId, InventorySet, Slot, SlotRef, icons};
use crate::item::DressType;

/// Cached lookup keys for the four slots the mod operates on.
///
/// Refs are resolved lazily and kept until invalidated; the slots behind
/// them are still re-read through the host on every use.
#[derive(Debug, Clone, Copy, Default)]
pub struct EquipmentSlots {
    pub head: Option<SlotRef>,
    pub body: Option<SlotRef>,
    pub legs: Option<SlotRef>,
    pub offhand: Option<SlotRef>,
}

impl EquipmentSlots {
    pub fn new() -> Self {
        EquipmentSlots::default()
    }

    /// All four refs are known.
    pub fn is_resolved(&self) -> bool {
        self.head.is_some() && self.body.is_some() && self.legs.is_some() && self.offhand.is_some()
    }

    /// Forget all cached refs, e.g. after the host re-created inventories.
    pub fn invalidate(&mut self) {
        *self = EquipmentSlots::default();
    }

    /// The armor ref for a body location.
    pub fn armor_ref(&self, dress: DressType) -> Option<SlotRef> {
        match dress {
            DressType::Head => self.head,
            DressType::Body => self.body,
            DressType::Legs => self.legs,
        }
    }

    /// Scan the inventories unless every ref is already known.
    ///
    /// Character slots are classified by the dress type of the item they
    /// hold, falling back to the background icon for empty slots. When two
    /// slots classify the same the later one wins; the host does not
    /// guarantee uniqueness.
    ///
    /// Returns `true` when all four refs are resolved afterwards.
    pub fn resolve(&mut self, inventories: &InventorySet) -> bool {
        if self.is_resolved() {
            return true;
        }

        if let Some(character) = inventories.get(InventoryId::Character) {
            for (index, slot) in character.slots.iter().enumerate() {
                let slot_ref = SlotRef::new(InventoryId::Character, index);
                match classify(slot) {
                    Some(DressType::Head) => self.head = Some(slot_ref),
                    Some(DressType::Body) => self.body = Some(slot_ref),
                    Some(DressType::Legs) => self.legs = Some(slot_ref),
                    None => {}
                }
            }
        }

        if let Some(hotbar) = inventories.get(InventoryId::Hotbar) {
            for (index, slot) in hotbar.slots.iter().enumerate() {
                if slot.offhand {
                    self.offhand = Some(SlotRef::new(InventoryId::Hotbar, index));
                }
            }
        }

        self.is_resolved()
    }
}

fn classify(slot: &Slot) -> Option<DressType> {
    if let Some(stack) = &slot.stack {
        if let Some(dress) = stack.dress {
            return Some(dress);
        }
    }
    match slot.background_icon.as_deref() {
        Some(icons::ARMOR_HEAD) => Some(DressType::Head),
        Some(icons::ARMOR_BODY) => Some(DressType::Body),
        Some(icons::ARMOR_LEGS) => Some(DressType::Legs),
        _ => None,
    }
}
