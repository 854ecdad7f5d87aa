//! Settings screen: keyboard layout selection.

use input::{Action, FrameInput, KeyboardLayout};

use crate::config::GameConfig;

/// Settings screen state. The only setting today is the keyboard layout the
/// key hints are rendered for.
#[derive(Debug, Default)]
pub struct SettingsScreen {
    layout_index: usize,
}

impl SettingsScreen {
    pub fn new(config: &GameConfig) -> Self {
        let layout_index = KeyboardLayout::ALL
            .iter()
            .position(|l| *l == config.keyboard_layout)
            .unwrap_or_default();
        Self { layout_index }
    }

    /// Cycle the layout per this tick's intents. Returns true when the player
    /// leaves the screen.
    pub fn update(&mut self, input: &FrameInput) -> bool {
        let len = KeyboardLayout::ALL.len();
        if input.menu_left {
            self.layout_index = (self.layout_index + len - 1) % len;
        }
        if input.menu_right {
            self.layout_index = (self.layout_index + 1) % len;
        }
        input.confirm || input.cancel
    }

    pub fn layout(&self) -> KeyboardLayout {
        KeyboardLayout::ALL[self.layout_index]
    }

    /// One "action: key" line per rebindable action, for the active layout.
    pub fn mapping_lines(&self) -> Vec<String> {
        let layout = self.layout();
        Action::ALL
            .iter()
            .map(|action| format!("{}: {}", action.label(), layout.key_name(*action)))
            .collect()
    }
}
