//! Equipping and stripping armor.
//!
//! The decision tree: a full or empty set of armor slots is decisive on its
//! own; a partial set follows the last recorded [`ToggleState`], and an
//! unknown state equips.

use strum::{Display, IntoEnumIterator};

use super::ActionResult;
use crate::error::ModError;
use crate::host::HostClient;
use crate::inventory::SlotRef;
use crate::item::DressType;
use crate::lang::MessageId;
use crate::resolver::EquipmentSlots;

/// The mod's memory of what it last did, used to break ties when only some
/// armor pieces are worn. Never persisted; resets to `Unknown` on reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum ToggleState {
    #[default]
    Unknown,
    Stripped,
    Equipped,
}

/// Which way a toggle resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Equip,
    Strip,
}

/// Number of filled armor slots, 0 to 3. Unresolved or stale refs count as
/// empty.
pub fn count_equipped(client: &impl HostClient, slots: &EquipmentSlots) -> usize {
    DressType::iter()
        .filter(|dress| {
            slots
                .armor_ref(*dress)
                .and_then(|r| client.inventories().slot(r))
                .is_some_and(|slot| !slot.is_empty())
        })
        .count()
}

/// Resolve a toggle request into equip or strip.
///
/// Equip is the safe default for the `Unknown` state.
pub fn decide(armor_count: usize, state: ToggleState) -> ToggleAction {
    match (armor_count, state) {
        (3.., _) => ToggleAction::Strip,
        (0, _) => ToggleAction::Equip,
        (_, ToggleState::Equipped) => ToggleAction::Strip,
        (_, ToggleState::Stripped) => ToggleAction::Equip,
        (_, ToggleState::Unknown) => ToggleAction::Equip,
    }
}

/// Toggle between worn and stored armor. Returns the action taken and its
/// result.
pub fn toggle_equipment(
    client: &mut impl HostClient,
    slots: &EquipmentSlots,
    state: &mut ToggleState,
) -> Result<(ToggleAction, ActionResult), ModError> {
    let action = decide(count_equipped(client, slots), *state);
    let result = match action {
        ToggleAction::Strip => strip_armor(client, slots, state),
        ToggleAction::Equip => equip_armor(client, slots, state)?,
    };
    Ok((action, result))
}

/// Fill every empty armor slot from the hand bar or pack. The state moves
/// to `Equipped` only when at least one piece landed.
pub fn equip_armor(
    client: &mut impl HostClient,
    slots: &EquipmentSlots,
    state: &mut ToggleState,
) -> Result<ActionResult, ModError> {
    let mut moved = 0;
    for dress in DressType::iter() {
        let Some(dst) = slots.armor_ref(dress) else {
            continue;
        };
        let empty = client
            .inventories()
            .slot(dst)
            .ok_or(ModError::StaleSlot(dst))?
            .is_empty();
        if !empty {
            continue;
        }
        if equip_piece(client, slots, dress)? {
            moved += 1;
        }
    }

    if moved > 0 {
        *state = ToggleState::Equipped;
        Ok(ActionResult::Success)
    } else {
        Ok(ActionResult::NoChange)
    }
}

/// Transfer every worn armor piece away. The state moves to `Stripped`
/// whether or not the host accepted the transfers.
pub fn strip_armor(
    client: &mut impl HostClient,
    slots: &EquipmentSlots,
    state: &mut ToggleState,
) -> ActionResult {
    let mut moved = 0;
    for dress in DressType::iter() {
        let Some(src) = slots.armor_ref(dress) else {
            continue;
        };
        let occupied = client
            .inventories()
            .slot(src)
            .is_some_and(|slot| !slot.is_empty());
        if occupied && client.try_transfer_away(src) {
            moved += 1;
        }
    }

    *state = ToggleState::Stripped;
    if moved > 0 {
        ActionResult::Success
    } else {
        ActionResult::NoChange
    }
}

/// Toggle only the head slot: clear it when worn, otherwise equip a spare
/// head piece.
pub fn toggle_helmet(
    client: &mut impl HostClient,
    slots: &EquipmentSlots,
) -> Result<ActionResult, ModError> {
    let Some(head) = slots.head else {
        return Ok(ActionResult::NoChange);
    };
    let worn = !client
        .inventories()
        .slot(head)
        .ok_or(ModError::StaleSlot(head))?
        .is_empty();

    if worn {
        if client.try_transfer_away(head) {
            Ok(ActionResult::Success)
        } else {
            Ok(ActionResult::NoChange)
        }
    } else if equip_piece(client, slots, DressType::Head)? {
        Ok(ActionResult::Success)
    } else {
        Ok(ActionResult::Failed(MessageId::MissingPiece))
    }
}

/// Find a spare piece for the given location and move it into the armor
/// slot. The night-vision device is never picked up here.
pub(crate) fn equip_piece(
    client: &mut impl HostClient,
    slots: &EquipmentSlots,
    dress: DressType,
) -> Result<bool, ModError> {
    let Some(dst) = slots.armor_ref(dress) else {
        return Ok(false);
    };
    let Some(src) = client
        .inventories()
        .find_item(|stack| stack.is_dress_type(dress) && !stack.is_night_vision())
    else {
        return Ok(false);
    };
    Ok(equip_into(client, src, dst))
}

/// Move the stack at `src` into `dst`, clearing `dst` first when occupied.
/// A destination that cannot be cleared makes the transfer fail, which is
/// reported as `false` like any other host refusal.
pub(crate) fn equip_into(client: &mut impl HostClient, src: SlotRef, dst: SlotRef) -> bool {
    let occupied = client
        .inventories()
        .slot(dst)
        .is_some_and(|slot| !slot.is_empty());
    if occupied {
        client.try_transfer_away(dst);
    }
    client.try_transfer(src, dst)
}
