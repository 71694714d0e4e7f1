//! Application state and terminal UI.

use crossterm::event::Event;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use qs_core::action::keybindings::Hotkey;
use qs_core::config::ModConfig;
use qs_core::host::{HostClient, InMemoryClient};
use qs_core::inventory::{InventoryId, Slot};
use qs_core::lang::Lang;
use qs_core::{Controller, HURT_ATTRIBUTE};

use crate::input::{UiCommand, key_to_command};
use crate::scenario::{DamageRoller, demo_client};

/// The simulation: one controller, one in-memory host, one damage source.
pub struct App {
    client: InMemoryClient,
    controller: Controller,
    roller: DamageRoller,
    status: String,
    should_quit: bool,
}

impl App {
    pub fn new(config: ModConfig, lang: Lang, seed: u64) -> Self {
        Self {
            client: demo_client(),
            controller: Controller::new(config).with_lang(lang),
            roller: DamageRoller::new(seed),
            status: String::from("ready"),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if let Some(command) = key_to_command(key) {
                self.run(command);
            }
        }
    }

    fn run(&mut self, command: UiCommand) {
        match command {
            UiCommand::Quit => self.should_quit = true,
            UiCommand::SimulateHurt => {
                let (counter, damage) = self.roller.next_event();
                self.status = format!("onHurt #{counter}: {damage:.2} damage");
                self.controller
                    .on_attribute_changed(HURT_ATTRIBUTE, counter, damage, &mut self.client);
            }
            UiCommand::RepeatHurt => match self.roller.repeat_event() {
                Some((counter, damage)) => {
                    self.status = format!("onHurt #{counter} delivered again");
                    self.controller.on_attribute_changed(
                        HURT_ATTRIBUTE,
                        counter,
                        damage,
                        &mut self.client,
                    );
                }
                None => self.status = String::from("no damage event to repeat yet"),
            },
            UiCommand::ResetPlayer => {
                // Slot contents survive; only the cached refs go stale.
                self.controller.on_player_ready();
                self.status = String::from("player re-created, slot refs dropped");
            }
            UiCommand::Hotkey(combo) => {
                if self.controller.handle_key(combo, &mut self.client) {
                    self.status = format!("{combo} handled");
                } else {
                    self.status = format!("{combo} not handled");
                }
            }
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(4)])
            .split(frame.area());
        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(outer[0]);
        let panels = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7),
                Constraint::Length(7),
                Constraint::Min(0),
            ])
            .split(main[0]);

        self.draw_inventory(frame, panels[0], InventoryId::Character);
        self.draw_inventory(frame, panels[1], InventoryId::Hotbar);
        self.draw_inventory(frame, panels[2], InventoryId::Backpack);
        self.draw_chat(frame, main[1]);
        self.draw_footer(frame, outer[1]);
    }

    fn draw_inventory(&self, frame: &mut Frame, area: Rect, id: InventoryId) {
        let items: Vec<ListItem> = match self.client.inventories().get(id) {
            Some(inventory) => inventory
                .slots
                .iter()
                .enumerate()
                .map(|(index, slot)| ListItem::new(slot_line(index, slot)))
                .collect(),
            None => vec![ListItem::new("<missing>")],
        };
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(id.to_string()),
        );
        frame.render_widget(list, area);
    }

    fn draw_chat(&self, frame: &mut Frame, area: Rect) {
        let visible = area.height.saturating_sub(2) as usize;
        let log = self.client.chat_log();
        let start = log.len().saturating_sub(visible);
        let items: Vec<ListItem> = log[start..]
            .iter()
            .map(|line| ListItem::new(line.as_str()))
            .collect();
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title("chat"));
        frame.render_widget(list, area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let config = self.controller.config();
        let combo = |hotkey| {
            self.controller
                .bindings()
                .combo_for(hotkey)
                .map(|c| c.to_string())
                .unwrap_or_else(|| String::from("unbound"))
        };
        let text = format!(
            "state: {}  auto-equip: {}  threshold: {:.1}  |  {}\n\
             {} swap  {} light  {} helmet  D hurt  U repeat  R reset  Q quit",
            self.controller.state(),
            config.equip_on_damage,
            config.damage_threshold,
            self.status,
            combo(Hotkey::SwapEquipment),
            combo(Hotkey::ToggleLight),
            combo(Hotkey::ToggleHelmet),
        );
        let footer =
            Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("quickstrip"));
        frame.render_widget(footer, area);
    }
}

fn slot_line(index: usize, slot: &Slot) -> String {
    let mut line = format!("{index:2} ");
    match &slot.stack {
        Some(stack) if stack.quantity > 1 => {
            line.push_str(&format!("{} x{}", stack.code, stack.quantity));
        }
        Some(stack) => line.push_str(&stack.code),
        None => line.push('-'),
    }
    if slot.is_empty() {
        if let Some(icon) = &slot.background_icon {
            line.push_str(&format!("  [{icon}]"));
        }
    }
    if slot.offhand {
        line.push_str("  (offhand)");
    }
    if slot.locked {
        line.push_str("  (locked)");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use qs_core::ToggleState;

    fn press(app: &mut App, code: char, modifiers: KeyModifiers) {
        app.handle_event(Event::Key(KeyEvent::new(KeyCode::Char(code), modifiers)));
    }

    #[test]
    fn test_swap_hotkey_drives_controller() {
        let mut app = App::new(ModConfig::default(), Lang::new(), 7);
        press(&mut app, 'x', KeyModifiers::CONTROL);
        assert_eq!(app.controller.state(), ToggleState::Equipped);
        assert!(!app.client.chat_log().is_empty());
    }

    #[test]
    fn test_quit_key() {
        let mut app = App::new(ModConfig::default(), Lang::new(), 7);
        assert!(!app.should_quit());
        press(&mut app, 'q', KeyModifiers::NONE);
        assert!(app.should_quit());
    }

    #[test]
    fn test_repeated_damage_event_equips_only_once() {
        // Threshold 0 so every rolled damage triggers.
        let config = ModConfig {
            equip_on_damage: true,
            damage_threshold: 0.0,
        };
        let mut app = App::new(config, Lang::new(), 7);

        press(&mut app, 'd', KeyModifiers::NONE);
        let chats = app.client.chat_log().len();
        assert!(chats > 0);

        press(&mut app, 'u', KeyModifiers::NONE);
        assert_eq!(app.client.chat_log().len(), chats);
    }

    #[test]
    fn test_reset_player_invalidates_and_recovers() {
        let mut app = App::new(ModConfig::default(), Lang::new(), 7);
        press(&mut app, 'x', KeyModifiers::CONTROL);
        press(&mut app, 'r', KeyModifiers::NONE);
        assert!(!app.controller.slots().is_resolved());

        // The next hotkey press re-resolves against the live inventories.
        press(&mut app, 'x', KeyModifiers::CONTROL);
        assert!(app.controller.slots().is_resolved());
        assert_eq!(app.controller.state(), ToggleState::Stripped);
    }
}
