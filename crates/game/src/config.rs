//! Game tuning configuration. Loaded from config.ron at startup.

use input::KeyboardLayout;
use serde::{Deserialize, Serialize};

/// Tunable gameplay constants. Loaded from `config.ron` in the current
/// directory; any missing field falls back to its default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Ship displacement per tick along each pressed axis, in space units.
    #[serde(default = "default_ship_speed")]
    pub ship_speed: f64,
    /// Distance within which a ship scans a planet (and the HUD names it).
    #[serde(default = "default_interaction_radius")]
    pub interaction_radius: f64,
    /// Scan progress speed in percentage points per second.
    #[serde(default = "default_scan_speed")]
    pub scan_speed: f64,
    /// Doomsday countdown speed in percentage points per second.
    #[serde(default = "default_countdown_speed")]
    pub countdown_speed: f64,
    /// Scanned-worlds score that wins the game.
    #[serde(default = "default_win_score")]
    pub win_score: u32,
    /// Number of probe ships in a session.
    #[serde(default = "default_ship_count")]
    pub ship_count: usize,
    /// Keyboard layout the key hints are rendered for.
    #[serde(default)]
    pub keyboard_layout: KeyboardLayout,
}

fn default_ship_speed() -> f64 {
    3.0
}
fn default_interaction_radius() -> f64 {
    50.0
}
fn default_scan_speed() -> f64 {
    50.0
}
fn default_countdown_speed() -> f64 {
    // 125 seconds to reach 100%.
    4.0 / 5.0
}
fn default_win_score() -> u32 {
    10
}
fn default_ship_count() -> usize {
    2
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ship_speed: default_ship_speed(),
            interaction_radius: default_interaction_radius(),
            scan_speed: default_scan_speed(),
            countdown_speed: default_countdown_speed(),
            win_score: default_win_score(),
            ship_count: default_ship_count(),
            keyboard_layout: KeyboardLayout::default(),
        }
    }
}

impl GameConfig {
    /// Load config from `config.ron`. If the file is missing or invalid,
    /// returns default config.
    pub fn load() -> Self {
        let path = config_path();
        if let Ok(data) = std::fs::read_to_string(&path) {
            match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }

    /// Save current config to `config.ron`. Logs on error.
    pub fn save(&self) {
        let path = config_path();
        if let Ok(s) = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()) {
            if let Err(e) = std::fs::write(&path, s) {
                log::warn!("Could not write config to {:?}: {}", path, e);
            }
        }
    }
}

fn config_path() -> std::path::PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| std::path::PathBuf::from("."))
        .join("config.ron")
}
