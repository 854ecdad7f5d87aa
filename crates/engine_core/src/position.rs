//! Spatial value types: continuous space positions and 8-way ship facings.

use glam::DVec2;

/// A point in continuous space coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        DVec2::new(self.x, self.y).distance(DVec2::new(other.x, other.y))
    }

    /// Display form used by the HUD, e.g. "(120, -45)".
    pub fn display(&self) -> String {
        format!("({}, {})", self.x.round() as i64, self.y.round() as i64)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Position> for DVec2 {
    fn from(p: Position) -> Self {
        DVec2::new(p.x, p.y)
    }
}

/// One of eight compass facings. Stored per ship and used only for sprite
/// rotation by an external renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    North,
    Northwest,
    West,
    Southwest,
    South,
    Southeast,
    East,
    Northeast,
}

impl Direction {
    /// Resolve a facing from the four movement flags. Opposing pairs are
    /// expected to be cancelled by the caller before this is called; if both
    /// flags of a pair are set the axis simply contributes nothing.
    /// Returns `None` when there is no net movement.
    pub fn from_movement(up: bool, down: bool, left: bool, right: bool) -> Option<Direction> {
        let north = up && !down;
        let south = down && !up;
        let west = left && !right;
        let east = right && !left;

        match (north, south, west, east) {
            (true, _, true, _) => Some(Direction::Northwest),
            (_, true, true, _) => Some(Direction::Southwest),
            (_, true, _, true) => Some(Direction::Southeast),
            (true, _, _, true) => Some(Direction::Northeast),
            (true, _, _, _) => Some(Direction::North),
            (_, _, true, _) => Some(Direction::West),
            (_, true, _, _) => Some(Direction::South),
            (_, _, _, true) => Some(Direction::East),
            _ => None,
        }
    }

    /// Index in counter-clockwise eighth turns from North. The renderer
    /// rotates the ship sprite by `-TAU / 8 * index`.
    pub fn eighth_turns(&self) -> u8 {
        match self {
            Direction::North => 0,
            Direction::Northwest => 1,
            Direction::West => 2,
            Direction::Southwest => 3,
            Direction::South => 4,
            Direction::Southeast => 5,
            Direction::East => 6,
            Direction::Northeast => 7,
        }
    }

    /// Sprite rotation in radians for a north-facing base sprite.
    pub fn sprite_rotation(&self) -> f64 {
        -std::f64::consts::TAU / 8.0 * f64::from(self.eighth_turns())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
    }

    #[test]
    fn direction_from_single_axis() {
        assert_eq!(
            Direction::from_movement(true, false, false, false),
            Some(Direction::North)
        );
        assert_eq!(
            Direction::from_movement(false, false, false, true),
            Some(Direction::East)
        );
    }

    #[test]
    fn direction_from_diagonals() {
        assert_eq!(
            Direction::from_movement(true, false, true, false),
            Some(Direction::Northwest)
        );
        assert_eq!(
            Direction::from_movement(false, true, false, true),
            Some(Direction::Southeast)
        );
    }

    #[test]
    fn opposing_flags_cancel() {
        assert_eq!(Direction::from_movement(true, true, false, false), None);
        assert_eq!(
            Direction::from_movement(true, true, true, false),
            Some(Direction::West)
        );
        assert_eq!(Direction::from_movement(false, false, false, false), None);
    }
}
