//! Per-tick input intents and keyboard-layout display tables.
//!
//! The game core never sees key codes. The windowing host translates raw
//! keyboard events into a [`FrameInput`] once per tick; the core consumes the
//! bundle and stays testable without a window.

/// Input intents gathered by the host for one tick.
///
/// Movement flags are "held" state; everything else is "just pressed" this
/// tick. `typed` carries raw characters for seed entry.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Held movement intents. Opposing pairs cancel in the world tick.
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,

    /// Cycle ship selection.
    pub previous_ship: bool,
    pub next_ship: bool,

    /// Halve / double the view zoom.
    pub zoom_in: bool,
    pub zoom_out: bool,

    /// Validate the current menu entry, dismiss a screen, confirm the intro.
    pub confirm: bool,
    /// Leave the current screen without confirming.
    pub cancel: bool,

    /// Menu navigation.
    pub menu_up: bool,
    pub menu_down: bool,
    /// Cycle a horizontal setting (keyboard layout).
    pub menu_left: bool,
    pub menu_right: bool,

    /// Erase the last seed character (with the host's key-repeat applied).
    pub backspace: bool,
    /// Characters typed this tick, in order.
    pub typed: Vec<char>,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear per-tick state. The host calls this at the start of each tick
    /// before feeding new events.
    pub fn begin_frame(&mut self) {
        *self = Self {
            // held state survives across ticks
            up: self.up,
            down: self.down,
            left: self.left,
            right: self.right,
            ..Self::default()
        };
    }

    /// Whether any movement intent is held.
    pub fn any_movement(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

// ── Keyboard layouts ────────────────────────────────────────────────────────

/// Game actions with a rebindable physical key. Used by the settings screen
/// to render the active mapping; the mapping itself lives in the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    PreviousShip,
    NextShip,
    ZoomIn,
    ZoomOut,
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::PreviousShip,
        Action::NextShip,
        Action::ZoomIn,
        Action::ZoomOut,
        Action::Up,
        Action::Down,
        Action::Left,
        Action::Right,
    ];

    /// Human-readable label for the settings screen.
    pub fn label(&self) -> &'static str {
        match self {
            Action::PreviousShip => "Select previous ship",
            Action::NextShip => "Select next ship",
            Action::ZoomIn => "Zoom in",
            Action::ZoomOut => "Zoom out",
            Action::Up => "Go up",
            Action::Down => "Go down",
            Action::Left => "Go left",
            Action::Right => "Go right",
        }
    }
}

/// Physical keyboard layouts the settings screen can display key names for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum KeyboardLayout {
    Azerty,
    #[default]
    Qwerty,
}

impl KeyboardLayout {
    pub const ALL: [KeyboardLayout; 2] = [KeyboardLayout::Azerty, KeyboardLayout::Qwerty];

    pub fn name(&self) -> &'static str {
        match self {
            KeyboardLayout::Azerty => "AZERTY",
            KeyboardLayout::Qwerty => "QWERTY",
        }
    }

    /// Display name of the key bound to `action` on this layout. The default
    /// binding is QWERTY A/D for ship cycling, W/S for zoom, arrows for
    /// movement; AZERTY shows the physically-identical keys.
    pub fn key_name(&self, action: Action) -> &'static str {
        match (self, action) {
            (KeyboardLayout::Azerty, Action::PreviousShip) => "Q",
            (KeyboardLayout::Qwerty, Action::PreviousShip) => "A",
            (_, Action::NextShip) => "D",
            (KeyboardLayout::Azerty, Action::ZoomIn) => "Z",
            (KeyboardLayout::Qwerty, Action::ZoomIn) => "W",
            (_, Action::ZoomOut) => "S",
            (_, Action::Up) => "Up",
            (_, Action::Down) => "Down",
            (_, Action::Left) => "Left",
            (_, Action::Right) => "Right",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_frame_clears_pressed_but_keeps_held() {
        let mut input = FrameInput {
            up: true,
            confirm: true,
            typed: vec!['a'],
            ..FrameInput::default()
        };
        input.begin_frame();
        assert!(input.up);
        assert!(!input.confirm);
        assert!(input.typed.is_empty());
    }

    #[test]
    fn layouts_differ_only_on_remapped_keys() {
        assert_eq!(KeyboardLayout::Qwerty.key_name(Action::PreviousShip), "A");
        assert_eq!(KeyboardLayout::Azerty.key_name(Action::PreviousShip), "Q");
        assert_eq!(KeyboardLayout::Qwerty.key_name(Action::Up), "Up");
        assert_eq!(KeyboardLayout::Azerty.key_name(Action::Up), "Up");
    }
}
