//! Celestial bodies placed by chunk generation.

use engine_core::Position;

/// Orbit radius of a moon around its planet, in space units.
pub const MOON_ORBIT_RADIUS: f64 = 45.0;

/// A scannable world in the starfield.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    /// Cosmetic survey designation, e.g. "Kepler 4221 c".
    pub name: String,
    pub position: Position,
    /// Flips permanently to true once a scan completes.
    pub looted: bool,
    /// Rendering tint in [0, 2π).
    pub hue: f64,
    pub moons: Vec<Moon>,
}

impl Planet {
    pub fn new(name: String, position: Position, hue: f64) -> Self {
        Self {
            name,
            position,
            looted: false,
            hue,
            moons: Vec::new(),
        }
    }

    /// The player's home world, seeded at world creation. Already looted so
    /// it never counts toward the score, and anchored at the origin.
    pub fn earth() -> Self {
        Self {
            name: "Earth".to_string(),
            position: Position::ORIGIN,
            looted: true,
            hue: 0.0,
            moons: Vec::new(),
        }
    }

    /// Attach a moon at the fixed orbit radius and the given angle (radians).
    pub fn add_moon(&mut self, angle: f64) {
        self.moons.push(Moon {
            position: Position::new(
                self.position.x + MOON_ORBIT_RADIUS * angle.cos(),
                self.position.y + MOON_ORBIT_RADIUS * angle.sin(),
            ),
        });
    }
}

/// A moon, fixed in place relative to its planet at creation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moon {
    pub position: Position,
}

/// A wormhole. Currently decorative: generated and rendered, no gameplay
/// effect attached yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WormHole {
    pub position: Position,
}
