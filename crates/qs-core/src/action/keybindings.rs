//! Hotkey registry.
//!
//! Maps the mod's hotkeys to key combinations and back. The frontend feeds
//! pressed combinations through [`HotkeyBindings::lookup`] and dispatches
//! the returned hotkey to the controller.

use std::collections::HashMap;
use std::fmt;

use bitflags::bitflags;
use strum::{Display, EnumIter};

bitflags! {
    /// Modifier keys held together with the base key.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const CTRL = 1;
        const ALT = 2;
        const SHIFT = 4;
    }
}

/// A bindable key combination: one character key plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombination {
    pub key: char,
    pub mods: Modifiers,
}

impl KeyCombination {
    pub const fn new(key: char, mods: Modifiers) -> Self {
        Self { key, mods }
    }

    pub const fn plain(key: char) -> Self {
        Self::new(key, Modifiers::empty())
    }

    pub const fn ctrl(key: char) -> Self {
        Self::new(key, Modifiers::CTRL)
    }
}

impl fmt::Display for KeyCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mods.contains(Modifiers::CTRL) {
            write!(f, "Ctrl-")?;
        }
        if self.mods.contains(Modifiers::ALT) {
            write!(f, "Alt-")?;
        }
        if self.mods.contains(Modifiers::SHIFT) {
            write!(f, "Shift-")?;
        }
        write!(f, "{}", self.key.to_uppercase())
    }
}

/// The hotkeys the mod registers with the input system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Hotkey {
    /// Toggle the whole armor set on or off.
    SwapEquipment,
    /// Toggle night vision or a hand light.
    ToggleLight,
    /// Toggle only the head slot.
    ToggleHelmet,
}

impl Hotkey {
    /// Human-readable label for binding screens.
    pub const fn label(&self) -> &'static str {
        match self {
            Hotkey::SwapEquipment => "Swap equipment",
            Hotkey::ToggleLight => "Toggle light / night vision",
            Hotkey::ToggleHelmet => "Toggle helmet",
        }
    }
}

/// Forward and reverse hotkey binding maps.
#[derive(Debug, Clone)]
pub struct HotkeyBindings {
    bindings: HashMap<Hotkey, KeyCombination>,
    reverse: HashMap<KeyCombination, Hotkey>,
}

impl Default for HotkeyBindings {
    fn default() -> Self {
        let mut bindings = HotkeyBindings {
            bindings: HashMap::new(),
            reverse: HashMap::new(),
        };
        bindings.bind(Hotkey::SwapEquipment, KeyCombination::ctrl('x'));
        bindings.bind(Hotkey::ToggleLight, KeyCombination::plain('v'));
        bindings.bind(Hotkey::ToggleHelmet, KeyCombination::ctrl('h'));
        bindings
    }
}

impl HotkeyBindings {
    pub fn new() -> Self {
        HotkeyBindings::default()
    }

    /// Bind a hotkey to a combination, displacing any hotkey previously on
    /// that combination and any combination previously on that hotkey.
    pub fn bind(&mut self, hotkey: Hotkey, combo: KeyCombination) {
        if let Some(old_hotkey) = self.reverse.remove(&combo) {
            self.bindings.remove(&old_hotkey);
        }
        if let Some(old_combo) = self.bindings.insert(hotkey, combo) {
            self.reverse.remove(&old_combo);
        }
        self.reverse.insert(combo, hotkey);
    }

    /// The combination bound to a hotkey, if any.
    pub fn combo_for(&self, hotkey: Hotkey) -> Option<KeyCombination> {
        self.bindings.get(&hotkey).copied()
    }

    /// The hotkey bound to a pressed combination, if any.
    pub fn lookup(&self, combo: KeyCombination) -> Option<Hotkey> {
        self.reverse.get(&combo).copied()
    }

    /// Remove a hotkey's binding.
    pub fn unbind(&mut self, hotkey: Hotkey) -> Option<KeyCombination> {
        let combo = self.bindings.remove(&hotkey)?;
        self.reverse.remove(&combo);
        Some(combo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = HotkeyBindings::new();
        assert_eq!(
            bindings.lookup(KeyCombination::ctrl('x')),
            Some(Hotkey::SwapEquipment)
        );
        assert_eq!(
            bindings.lookup(KeyCombination::plain('v')),
            Some(Hotkey::ToggleLight)
        );
        assert_eq!(
            bindings.lookup(KeyCombination::ctrl('h')),
            Some(Hotkey::ToggleHelmet)
        );
        assert_eq!(bindings.lookup(KeyCombination::plain('x')), None);
    }

    #[test]
    fn test_rebind_displaces_old_combo() {
        let mut bindings = HotkeyBindings::new();
        bindings.bind(Hotkey::SwapEquipment, KeyCombination::plain('z'));
        assert_eq!(bindings.lookup(KeyCombination::ctrl('x')), None);
        assert_eq!(
            bindings.lookup(KeyCombination::plain('z')),
            Some(Hotkey::SwapEquipment)
        );
    }

    #[test]
    fn test_rebind_steals_combo_from_other_hotkey() {
        let mut bindings = HotkeyBindings::new();
        bindings.bind(Hotkey::ToggleHelmet, KeyCombination::plain('v'));
        assert_eq!(
            bindings.lookup(KeyCombination::plain('v')),
            Some(Hotkey::ToggleHelmet)
        );
        assert_eq!(bindings.combo_for(Hotkey::ToggleLight), None);
    }

    #[test]
    fn test_unbind() {
        let mut bindings = HotkeyBindings::new();
        assert_eq!(
            bindings.unbind(Hotkey::ToggleLight),
            Some(KeyCombination::plain('v'))
        );
        assert_eq!(bindings.lookup(KeyCombination::plain('v')), None);
        assert_eq!(bindings.unbind(Hotkey::ToggleLight), None);
    }

    #[test]
    fn test_combination_display() {
        assert_eq!(KeyCombination::ctrl('x').to_string(), "Ctrl-X");
        assert_eq!(KeyCombination::plain('v').to_string(), "V");
        let combo = KeyCombination::new('h', Modifiers::CTRL | Modifiers::SHIFT);
        assert_eq!(combo.to_string(), "Ctrl-Shift-H");
    }
}
