//! Internal error type for host boundary calls.

use thiserror::Error;

use crate::inventory::{InventoryId, SlotRef};

/// Unexpected host state. These never arise during normal play; they mean
/// the host changed under the mod (inventory gone, slot index out of range)
/// between resolution and use. They are caught at the hotkey dispatch
/// boundary and their message is printed to chat.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModError {
    #[error("inventory {0} is not available")]
    MissingInventory(InventoryId),

    #[error("slot {0} no longer exists")]
    StaleSlot(SlotRef),
}
