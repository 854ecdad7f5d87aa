//! View state shared with the external renderer.

use input::FrameInput;

/// Margin in space units added around the viewport when culling sprites.
/// Should be at least half the side length of the biggest sprite to avoid
/// clipping at the edges.
pub const VIEWPORT_BORDER_MARGIN: f64 = 32.0;

/// Camera state the core owns and the renderer reads. Passed explicitly
/// into update calls instead of living in a process-wide global.
#[derive(Debug, Clone, Copy)]
pub struct ViewState {
    /// Zoom factor applied to all world-space rendering. Doubles/halves on
    /// zoom intents.
    pub zoom: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { zoom: 1.0 }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply this tick's zoom intents.
    pub fn apply(&mut self, input: &FrameInput) {
        if input.zoom_in {
            self.zoom *= 2.0;
        }
        if input.zoom_out {
            self.zoom /= 2.0;
        }
    }
}
