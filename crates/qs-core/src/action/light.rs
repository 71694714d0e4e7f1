//! Night-vision and hand-light toggling.

use super::ActionResult;
use super::swap::{self, ToggleState};
use crate::error::ModError;
use crate::host::HostClient;
use crate::item::{DressType, ItemClass, ItemStack};
use crate::lang::MessageId;
use crate::resolver::EquipmentSlots;

/// Toggle a light source on or off.
///
/// The night-vision device takes priority: worn, it comes off (and a spare
/// head armor piece goes back on when the armor state says the player is
/// dressed); stored, it goes onto the head, displacing whatever is there.
/// With no device anywhere, hand lights are tried class by class (lantern
/// before torch), swapped through the off-hand slot. Nothing found at all
/// is reported as the no-light miss.
pub fn toggle_accessory(
    client: &mut impl HostClient,
    slots: &EquipmentSlots,
    state: ToggleState,
) -> Result<ActionResult, ModError> {
    let Some(head) = slots.head else {
        return Ok(ActionResult::NoChange);
    };

    let wearing_nv = client
        .inventories()
        .slot(head)
        .ok_or(ModError::StaleSlot(head))?
        .stack
        .as_ref()
        .is_some_and(ItemStack::is_night_vision);
    if wearing_nv {
        client.try_transfer_away(head);
        if state == ToggleState::Equipped {
            swap::equip_piece(client, slots, DressType::Head)?;
        }
        return Ok(ActionResult::Success);
    }
    if let Some(src) = client.inventories().find_item(ItemStack::is_night_vision) {
        swap::equip_into(client, src, head);
        return Ok(ActionResult::Success);
    }

    let Some(offhand) = slots.offhand else {
        return Ok(ActionResult::NoChange);
    };
    for class in ItemClass::LIGHT_CLASSES {
        let holding = client
            .inventories()
            .slot(offhand)
            .ok_or(ModError::StaleSlot(offhand))?
            .stack
            .as_ref()
            .is_some_and(|stack| stack.class == class);
        if holding {
            client.try_transfer_away(offhand);
            return Ok(ActionResult::Success);
        }
        if let Some(src) = client.inventories().find_item(|stack| stack.class == class) {
            swap::equip_into(client, src, offhand);
            return Ok(ActionResult::Success);
        }
    }

    Ok(ActionResult::Failed(MessageId::NoLight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::InMemoryClient;
    use crate::inventory::{Inventory, InventoryId, InventorySet, Slot, SlotRef};

    fn make_client() -> (InMemoryClient, EquipmentSlots) {
        let mut set = InventorySet::new();
        set.insert(Inventory::new(
            InventoryId::Character,
            vec![
                Slot::armor(DressType::Head),
                Slot::armor(DressType::Body),
                Slot::armor(DressType::Legs),
            ],
        ));
        set.insert(Inventory::new(
            InventoryId::Hotbar,
            vec![Slot::plain(), Slot::plain(), Slot::offhand()],
        ));
        set.insert(Inventory::new(
            InventoryId::Backpack,
            vec![Slot::plain(), Slot::plain(), Slot::plain()],
        ));
        let mut client = InMemoryClient::new(set);
        let mut slots = EquipmentSlots::new();
        assert!(slots.resolve(client.inventories()));
        (client, slots)
    }

    fn put(client: &mut InMemoryClient, slot_ref: SlotRef, stack: ItemStack) {
        client.inventories_mut().slot_mut(slot_ref).unwrap().stack = Some(stack);
    }

    fn stack_code(client: &InMemoryClient, slot_ref: SlotRef) -> Option<String> {
        client
            .inventories()
            .slot(slot_ref)
            .and_then(|slot| slot.stack.as_ref())
            .map(|stack| stack.code.clone())
    }

    #[test]
    fn test_equips_stored_night_vision_onto_head() {
        let (mut client, slots) = make_client();
        put(
            &mut client,
            SlotRef::new(InventoryId::Backpack, 0),
            ItemStack::night_vision(),
        );

        let result = toggle_accessory(&mut client, &slots, ToggleState::Unknown).unwrap();
        assert_eq!(result, ActionResult::Success);
        assert_eq!(
            stack_code(&client, slots.head.unwrap()).as_deref(),
            Some("nightvisiondevice")
        );
    }

    #[test]
    fn test_night_vision_displaces_worn_helmet() {
        let (mut client, slots) = make_client();
        put(
            &mut client,
            slots.head.unwrap(),
            ItemStack::armor("plate-helmet", DressType::Head),
        );
        put(
            &mut client,
            SlotRef::new(InventoryId::Backpack, 0),
            ItemStack::night_vision(),
        );

        toggle_accessory(&mut client, &slots, ToggleState::Equipped).unwrap();
        assert_eq!(
            stack_code(&client, slots.head.unwrap()).as_deref(),
            Some("nightvisiondevice")
        );
        // The helmet went back to carry space.
        assert!(
            client
                .inventories()
                .find_item(|s| s.code == "plate-helmet")
                .is_some()
        );
    }

    #[test]
    fn test_removing_night_vision_reequips_helmet_when_dressed() {
        let (mut client, slots) = make_client();
        put(&mut client, slots.head.unwrap(), ItemStack::night_vision());
        put(
            &mut client,
            SlotRef::new(InventoryId::Backpack, 0),
            ItemStack::armor("plate-helmet", DressType::Head),
        );

        toggle_accessory(&mut client, &slots, ToggleState::Equipped).unwrap();
        assert_eq!(
            stack_code(&client, slots.head.unwrap()).as_deref(),
            Some("plate-helmet")
        );
    }

    #[test]
    fn test_removing_night_vision_leaves_head_bare_when_stripped() {
        let (mut client, slots) = make_client();
        put(&mut client, slots.head.unwrap(), ItemStack::night_vision());
        put(
            &mut client,
            SlotRef::new(InventoryId::Backpack, 0),
            ItemStack::armor("plate-helmet", DressType::Head),
        );

        toggle_accessory(&mut client, &slots, ToggleState::Stripped).unwrap();
        assert_eq!(stack_code(&client, slots.head.unwrap()), None);
    }

    #[test]
    fn test_lantern_swaps_into_offhand() {
        let (mut client, slots) = make_client();
        put(
            &mut client,
            SlotRef::new(InventoryId::Backpack, 1),
            ItemStack::new("lantern", ItemClass::Lantern),
        );

        let result = toggle_accessory(&mut client, &slots, ToggleState::Unknown).unwrap();
        assert_eq!(result, ActionResult::Success);
        assert_eq!(
            stack_code(&client, slots.offhand.unwrap()).as_deref(),
            Some("lantern")
        );

        // Second toggle puts it back into carry space.
        toggle_accessory(&mut client, &slots, ToggleState::Unknown).unwrap();
        assert_eq!(stack_code(&client, slots.offhand.unwrap()), None);
    }

    #[test]
    fn test_lantern_beats_torch() {
        let (mut client, slots) = make_client();
        put(
            &mut client,
            SlotRef::new(InventoryId::Hotbar, 0),
            ItemStack::new("torch", ItemClass::Torch),
        );
        put(
            &mut client,
            SlotRef::new(InventoryId::Backpack, 0),
            ItemStack::new("lantern", ItemClass::Lantern),
        );

        toggle_accessory(&mut client, &slots, ToggleState::Unknown).unwrap();
        assert_eq!(
            stack_code(&client, slots.offhand.unwrap()).as_deref(),
            Some("lantern")
        );
    }

    #[test]
    fn test_night_vision_beats_hand_lights() {
        let (mut client, slots) = make_client();
        put(
            &mut client,
            SlotRef::new(InventoryId::Hotbar, 0),
            ItemStack::new("lantern", ItemClass::Lantern),
        );
        put(
            &mut client,
            SlotRef::new(InventoryId::Backpack, 0),
            ItemStack::night_vision(),
        );

        toggle_accessory(&mut client, &slots, ToggleState::Unknown).unwrap();
        assert_eq!(
            stack_code(&client, slots.head.unwrap()).as_deref(),
            Some("nightvisiondevice")
        );
        assert_eq!(stack_code(&client, slots.offhand.unwrap()), None);
    }

    #[test]
    fn test_no_light_anywhere_reports_miss() {
        let (mut client, slots) = make_client();
        let result = toggle_accessory(&mut client, &slots, ToggleState::Unknown).unwrap();
        assert_eq!(result, ActionResult::Failed(MessageId::NoLight));
    }
}
