//! Per-player toggle controller.
//!
//! Owns the mod's few pieces of state and sits between the host's input and
//! notification callbacks and the toggle operations. All chat output is
//! decided here; the operations themselves only move items.

use crate::action::ActionResult;
use crate::action::keybindings::{Hotkey, HotkeyBindings, KeyCombination};
use crate::action::light;
use crate::action::swap::{self, ToggleAction, ToggleState};
use crate::config::ModConfig;
use crate::error::ModError;
use crate::host::HostClient;
use crate::hurt::{HURT_ATTRIBUTE, HurtMonitor};
use crate::lang::{Lang, MessageId};
use crate::resolver::EquipmentSlots;

/// The toggle controller for one player.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    config: ModConfig,
    lang: Lang,
    bindings: HotkeyBindings,
    slots: EquipmentSlots,
    state: ToggleState,
    hurt: HurtMonitor,
}

impl Controller {
    pub fn new(config: ModConfig) -> Self {
        Controller {
            config: config.sanitized(),
            ..Controller::default()
        }
    }

    /// Replace the message catalog.
    pub fn with_lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }

    pub fn config(&self) -> &ModConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ModConfig) {
        self.config = config.sanitized();
    }

    pub fn bindings(&self) -> &HotkeyBindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut HotkeyBindings {
        &mut self.bindings
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    /// The resolved equipment slot refs, for display purposes.
    pub fn slots(&self) -> &EquipmentSlots {
        &self.slots
    }

    /// The host signalled that the player entity was (re)created: every
    /// cached slot ref is now stale.
    pub fn on_player_ready(&mut self) {
        self.slots.invalidate();
    }

    /// Dispatch a pressed key combination. Returns `true` when a hotkey was
    /// bound to it and handled.
    pub fn handle_key(&mut self, combo: KeyCombination, client: &mut impl HostClient) -> bool {
        match self.bindings.lookup(combo) {
            Some(hotkey) => self.handle_hotkey(hotkey, client),
            None => false,
        }
    }

    /// Run a hotkey. Internal errors are caught here and their message is
    /// printed to chat; the handler itself never fails.
    pub fn handle_hotkey(&mut self, hotkey: Hotkey, client: &mut impl HostClient) -> bool {
        if !self.slots.resolve(client.inventories()) {
            return false;
        }
        match self.run(hotkey, client) {
            Ok(()) => true,
            Err(err) => {
                client.show_chat(&err.to_string());
                true
            }
        }
    }

    fn run(&mut self, hotkey: Hotkey, client: &mut impl HostClient) -> Result<(), ModError> {
        match hotkey {
            Hotkey::SwapEquipment => {
                let (action, result) =
                    swap::toggle_equipment(client, &self.slots, &mut self.state)?;
                match action {
                    ToggleAction::Strip => client.show_chat(self.lang.get(MessageId::Stripped)),
                    ToggleAction::Equip if result == ActionResult::Success => {
                        client.show_chat(self.lang.get(MessageId::Equipped));
                    }
                    ToggleAction::Equip => {}
                }
            }
            Hotkey::ToggleLight => {
                let result = light::toggle_accessory(client, &self.slots, self.state)?;
                self.report_miss(result, client);
            }
            Hotkey::ToggleHelmet => {
                let result = swap::toggle_helmet(client, &self.slots)?;
                self.report_miss(result, client);
            }
        }
        Ok(())
    }

    fn report_miss(&self, result: ActionResult, client: &mut impl HostClient) {
        if let ActionResult::Failed(id) = result {
            client.show_chat(self.lang.get(id));
        }
    }

    /// Entity attribute notification hook. Only the damage attribute is
    /// acted on; everything else is someone else's business.
    pub fn on_attribute_changed(
        &mut self,
        attribute: &str,
        counter: u64,
        damage: f32,
        client: &mut impl HostClient,
    ) {
        if attribute != HURT_ATTRIBUTE {
            return;
        }
        if !self.hurt.observe(counter, damage, &self.config) {
            return;
        }
        if !self.slots.resolve(client.inventories()) {
            return;
        }
        match swap::equip_armor(client, &self.slots, &mut self.state) {
            Ok(ActionResult::Success) => client.show_chat(self.lang.get(MessageId::Panic)),
            Ok(_) => {}
            Err(err) => client.show_chat(&err.to_string()),
        }
    }
}
