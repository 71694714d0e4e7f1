//! Input handling - convert key events to simulation commands.
//!
//! A few keys drive the simulation itself; everything else is offered to
//! the hotkey bindings as a key combination.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use qs_core::action::keybindings::{KeyCombination, Modifiers};

/// What a key press asks the simulation to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    /// Leave the simulation.
    Quit,
    /// Deliver a fresh damage notification.
    SimulateHurt,
    /// Re-deliver the previous damage notification unchanged.
    RepeatHurt,
    /// Simulate the host re-creating the player inventories.
    ResetPlayer,
    /// Offer the combination to the hotkey bindings.
    Hotkey(KeyCombination),
}

/// Convert a key event to a simulation command.
pub fn key_to_command(key: KeyEvent) -> Option<UiCommand> {
    // Reserved simulation keys, unmodified only, so Ctrl-bound hotkeys on
    // the same letters keep working.
    if key.modifiers.is_empty() {
        match key.code {
            KeyCode::Char('q') => return Some(UiCommand::Quit),
            KeyCode::Char('d') => return Some(UiCommand::SimulateHurt),
            KeyCode::Char('u') => return Some(UiCommand::RepeatHurt),
            KeyCode::Char('r') => return Some(UiCommand::ResetPlayer),
            _ => {}
        }
    }
    to_combination(key).map(UiCommand::Hotkey)
}

fn to_combination(key: KeyEvent) -> Option<KeyCombination> {
    let KeyCode::Char(c) = key.code else {
        return None;
    };
    let mut mods = Modifiers::empty();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        mods |= Modifiers::CTRL;
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        mods |= Modifiers::ALT;
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        mods |= Modifiers::SHIFT;
    }
    Some(KeyCombination::new(c.to_ascii_lowercase(), mods))
}
