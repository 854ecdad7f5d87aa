//! Main menu and game-creation menu.

use input::FrameInput;
use procgen::{random_seed, MAX_SEED_LEN};

/// Main-menu entries, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    NewGame,
    Settings,
    Credits,
    Exit,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 4] = [
        MenuEntry::NewGame,
        MenuEntry::Settings,
        MenuEntry::Credits,
        MenuEntry::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuEntry::NewGame => "New game",
            MenuEntry::Settings => "Settings",
            MenuEntry::Credits => "Credits",
            MenuEntry::Exit => "Exit",
        }
    }
}

/// Vertical menu with wrapping selection.
#[derive(Debug, Default)]
pub struct MainMenu {
    selected: usize,
}

impl MainMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the selection per this tick's intents; returns the entry when
    /// confirmed.
    pub fn update(&mut self, input: &FrameInput) -> Option<MenuEntry> {
        let len = MenuEntry::ALL.len();
        if input.menu_up {
            self.selected = (self.selected + len - 1) % len;
        }
        if input.menu_down {
            self.selected = (self.selected + 1) % len;
        }
        if input.confirm {
            return Some(MenuEntry::ALL[self.selected]);
        }
        None
    }

    pub fn selected(&self) -> MenuEntry {
        MenuEntry::ALL[self.selected]
    }

    /// Returning from a finished session puts the cursor back on "New game".
    pub fn reset_to_new_game(&mut self) {
        self.selected = 0;
    }
}

// ── Game creation ───────────────────────────────────────────────────────────

/// How many ticks a full cursor blink cycle lasts.
const BLINK_PERIOD: u32 = 60;

/// Seed entry screen. Opens with a fresh random seed; the player can edit it
/// character by character before confirming.
#[derive(Debug, Default)]
pub struct GameCreationMenu {
    seed: String,
    blink: u32,
    error: Option<String>,
}

impl GameCreationMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called on entry from the main menu.
    pub fn open(&mut self) {
        self.seed = random_seed();
        self.blink = 0;
        self.error = None;
    }

    /// Apply this tick's typed characters and edits; returns the seed string
    /// when confirmed.
    pub fn update(&mut self, input: &FrameInput) -> Option<String> {
        for &c in &input.typed {
            if (c.is_ascii_lowercase() || c.is_ascii_digit()) && self.seed.len() < MAX_SEED_LEN {
                self.seed.push(c);
                self.error = None;
            }
        }
        if input.backspace {
            self.seed.pop();
            self.error = None;
        }
        self.blink = (self.blink + 1) % BLINK_PERIOD;
        if input.confirm {
            return Some(self.seed.clone());
        }
        None
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Keep the player on this screen with an explanation when the confirmed
    /// seed is rejected.
    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The text cursor blinks while there is room for more characters.
    pub fn cursor_visible(&self) -> bool {
        self.seed.len() < MAX_SEED_LEN && self.blink < BLINK_PERIOD / 2
    }

    #[cfg(test)]
    pub(crate) fn force_seed(&mut self, seed: &str) {
        self.seed = seed.to_string();
    }
}
