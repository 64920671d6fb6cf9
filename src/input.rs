//! Keyboard to command mapping
//!
//! Each key press yields at most one command. There is no auto-repeat
//! handling here; a held key only repeats if the terminal sends presses.

use crate::game::Command;
use crate::settings::Settings;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Key bindings configuration - supports multiple keys per command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub move_left: Vec<KeyCode>,
    pub move_right: Vec<KeyCode>,
    pub soft_drop: Vec<KeyCode>,
    pub rotate_cw: Vec<KeyCode>,
    pub reset: Vec<KeyCode>,
    pub exit_to_menu: Vec<KeyCode>,
}

impl KeyBindings {
    /// Parse a key string into KeyCode; None for names we don't know
    fn parse_key(s: &str) -> Option<KeyCode> {
        let code = match s.to_lowercase().as_str() {
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "space" => KeyCode::Char(' '),
            "enter" => KeyCode::Enter,
            "tab" => KeyCode::Tab,
            "backspace" => KeyCode::Backspace,
            "esc" | "escape" => KeyCode::Esc,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };
        Some(code)
    }

    /// Parse a list of key strings into KeyCodes, skipping unknown names
    fn parse_keys(keys: &[String]) -> Vec<KeyCode> {
        keys.iter()
            .filter_map(|s| {
                let code = Self::parse_key(s);
                if code.is_none() {
                    tracing::warn!("unknown key name in settings: {:?}", s);
                }
                code
            })
            .collect()
    }

    /// Create keybindings from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            move_left: Self::parse_keys(&settings.keys.move_left),
            move_right: Self::parse_keys(&settings.keys.move_right),
            soft_drop: Self::parse_keys(&settings.keys.soft_drop),
            rotate_cw: Self::parse_keys(&settings.keys.rotate_cw),
            reset: Self::parse_keys(&settings.keys.reset),
            exit_to_menu: Self::parse_keys(&settings.keys.exit_to_menu),
        }
    }

    /// Command bound to a key code, if any
    pub fn command_for(&self, code: KeyCode) -> Option<Command> {
        let code = normalize_key(code);
        let table = [
            (&self.move_left, Command::MoveLeft),
            (&self.move_right, Command::MoveRight),
            (&self.soft_drop, Command::SoftDrop),
            (&self.rotate_cw, Command::RotateCw),
            (&self.reset, Command::Reset),
            (&self.exit_to_menu, Command::ExitToMenu),
        ];
        table
            .into_iter()
            .find(|(keys, _)| keys.contains(&code))
            .map(|(_, command)| command)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Translates terminal key events into game commands
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    bindings: KeyBindings,
}

impl InputHandler {
    /// Create input handler from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            bindings: KeyBindings::from_settings(settings),
        }
    }

    /// Command for a key event. Releases, repeats and unbound keys give None.
    /// Ctrl+C always exits to the menu.
    pub fn command(&self, key: KeyEvent) -> Option<Command> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Command::ExitToMenu);
        }
        self.bindings.command_for(key.code)
    }
}

/// Normalize key codes for consistent handling
fn normalize_key(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}
