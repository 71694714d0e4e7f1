//! Host client boundary.
//!
//! The game client owns the inventories and performs all slot transfers;
//! the mod only issues requests. A transfer may be refused (locked slot, no
//! capacity, restriction mismatch) and the refusal is reported as `false`,
//! never as an error: callers treat it as a no-op.

use crate::inventory::{InventorySet, SlotRef};
use crate::item::ItemStack;

/// Services the game client provides to the mod.
pub trait HostClient {
    /// The player inventories, re-read on every call.
    fn inventories(&self) -> &InventorySet;

    /// Move the whole stack at `src` into `dst`, merging with identical
    /// contents. Returns `false` when the host refuses.
    fn try_transfer(&mut self, src: SlotRef, dst: SlotRef) -> bool;

    /// Move the stack at `src` into any free compatible carry slot, hand bar
    /// before pack, skipping the off-hand. Returns `false` when no
    /// destination is available.
    fn try_transfer_away(&mut self, src: SlotRef) -> bool;

    /// Print a line to the in-game chat.
    fn show_chat(&mut self, text: &str);
}

/// In-memory host with the transfer rules of a real client: single stack
/// per slot, merge of identical stacks, dress-type restrictions on armor
/// slots, locked slots refusing everything.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClient {
    inventories: InventorySet,
    chat: Vec<String>,
}

impl InMemoryClient {
    pub fn new(inventories: InventorySet) -> Self {
        Self {
            inventories,
            chat: Vec::new(),
        }
    }

    /// Chat lines printed so far, oldest first.
    pub fn chat_log(&self) -> &[String] {
        &self.chat
    }

    /// Mutable inventory access for scenario setup.
    pub fn inventories_mut(&mut self) -> &mut InventorySet {
        &mut self.inventories
    }

    /// Validate a transfer of `stack` into `dst`; `true` means the slot can
    /// receive the whole stack right now.
    fn can_receive(&self, dst: SlotRef, stack: &ItemStack) -> bool {
        let Some(slot) = self.inventories.slot(dst) else {
            return false;
        };
        if slot.locked || !slot.accepts(stack) {
            return false;
        }
        match &slot.stack {
            None => true,
            Some(existing) => existing.can_merge(stack),
        }
    }

    /// Take the stack out of `src` if the slot exists, is unlocked and full.
    fn lift(&mut self, src: SlotRef) -> Option<ItemStack> {
        let slot = self.inventories.slot_mut(src)?;
        if slot.locked {
            return None;
        }
        slot.stack.take()
    }

    fn place(&mut self, dst: SlotRef, stack: ItemStack) {
        if let Some(slot) = self.inventories.slot_mut(dst) {
            match &mut slot.stack {
                Some(existing) => existing.merge(stack),
                None => slot.stack = Some(stack),
            }
        }
    }
}

impl HostClient for InMemoryClient {
    fn inventories(&self) -> &InventorySet {
        &self.inventories
    }

    fn try_transfer(&mut self, src: SlotRef, dst: SlotRef) -> bool {
        if src == dst {
            return false;
        }
        let Some(stack) = self.inventories.slot(src).and_then(|s| {
            if s.locked { None } else { s.stack.clone() }
        }) else {
            return false;
        };
        if !self.can_receive(dst, &stack) {
            return false;
        }
        if self.lift(src).is_none() {
            return false;
        }
        self.place(dst, stack);
        true
    }

    fn try_transfer_away(&mut self, src: SlotRef) -> bool {
        let Some(stack) = self.inventories.slot(src).and_then(|s| {
            if s.locked { None } else { s.stack.clone() }
        }) else {
            return false;
        };

        let mut destination = None;
        'search: for id in InventorySet::SEARCH_ORDER {
            let Some(inventory) = self.inventories.get(id) else {
                continue;
            };
            for (index, slot) in inventory.slots.iter().enumerate() {
                let dst = SlotRef::new(id, index);
                if dst == src || slot.offhand {
                    continue;
                }
                if self.can_receive(dst, &stack) {
                    destination = Some(dst);
                    break 'search;
                }
            }
        }

        let Some(dst) = destination else {
            return false;
        };
        if self.lift(src).is_none() {
            return false;
        }
        self.place(dst, stack);
        true
    }

    fn show_chat(&mut self, text: &str) {
        self.chat.push(text.to_string());
    }
}
