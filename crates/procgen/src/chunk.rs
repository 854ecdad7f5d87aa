//! Chunked lazy generation of the starfield.
//!
//! The infinite grid is split into square chunks of `CHUNK_SIZE` cells, each
//! cell `CELL_SIZE` space units wide. A chunk is generated at most once,
//! when a ship first comes within one chunk of it; the contents of a chunk
//! are a pure function of (seed, chunk coordinate), so revisiting a region
//! in any order reproduces the same universe.

use std::collections::HashSet;

use engine_core::Position;

use crate::body::{Planet, WormHole};
use crate::field::StarfieldNoise;
use crate::naming::planet_name;

/// Physical side length of one grid cell, in space units.
pub const CELL_SIZE: f64 = 50.0;
/// Number of cells along one side of a chunk.
pub const CHUNK_SIZE: i32 = 32;

/// Placement-noise band for planets. Values at or above this place a planet.
pub const PLANET_THRESHOLD: f64 = 0.92;
/// Planets whose placement value also reaches this get one moon.
pub const MOON_THRESHOLD: f64 = 0.96;
/// Values strictly below this place a wormhole. Disjoint from the planet
/// band by construction; both are tuning constants, not derived.
pub const WORMHOLE_THRESHOLD: f64 = 0.02;

/// Integer coordinate of a chunk on the infinite grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkCoord {
    pub x: i32,
    pub y: i32,
}

impl ChunkCoord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chunk containing a space position (floor division per axis).
    pub fn containing(p: &Position) -> Self {
        let span = CELL_SIZE * f64::from(CHUNK_SIZE);
        Self {
            x: (p.x / span).floor() as i32,
            y: (p.y / span).floor() as i32,
        }
    }
}

/// Bodies produced by generating one chunk.
#[derive(Debug, Clone, Default)]
pub struct ChunkContents {
    pub planets: Vec<Planet>,
    pub wormholes: Vec<WormHole>,
}

/// Deterministic chunk generator over a seeded noise field.
#[derive(Debug, Clone)]
pub struct ChunkGenerator {
    field: StarfieldNoise,
}

impl ChunkGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            field: StarfieldNoise::new(seed),
        }
    }

    /// Generate the bodies of one chunk. Bit-identical for the same
    /// (seed, coordinate) on every call.
    pub fn generate(&self, coord: ChunkCoord) -> ChunkContents {
        let mut contents = ChunkContents::default();

        for i in 0..CHUNK_SIZE {
            for j in 0..CHUNK_SIZE {
                let gx = i + coord.x * CHUNK_SIZE;
                let gy = j + coord.y * CHUNK_SIZE;
                let value = self.field.value_at(f64::from(gx), f64::from(gy));
                let position = Position::new(CELL_SIZE * f64::from(gx), CELL_SIZE * f64::from(gy));

                if value >= PLANET_THRESHOLD {
                    let hue = self.field.hue_at(f64::from(gx), f64::from(gy));
                    let mut planet = Planet::new(planet_name(value), position, hue);
                    if value >= MOON_THRESHOLD {
                        planet.add_moon((value - MOON_THRESHOLD) * 100.0);
                    }
                    contents.planets.push(planet);
                } else if value < WORMHOLE_THRESHOLD {
                    contents.wormholes.push(WormHole { position });
                }
            }
        }

        contents
    }
}

/// Records which chunks have ever been generated.
///
/// Keys are composite (x, y) coordinates in a single set, so the "generated
/// at most once" invariant is a plain set-insert check.
#[derive(Debug, Default)]
pub struct ChunkTracker {
    generated: HashSet<ChunkCoord>,
}

impl ChunkTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark every chunk of the 3×3 neighborhood around `p` as generated and
    /// return the coordinates that were not already marked, in row-major
    /// order. Idempotent: repeated calls over overlapping neighborhoods
    /// never yield a coordinate twice.
    ///
    /// The one-chunk margin means a ship can never cross into ungenerated
    /// space in a single tick.
    pub fn ensure_around(&mut self, p: &Position) -> Vec<ChunkCoord> {
        let center = ChunkCoord::containing(p);
        let mut fresh = Vec::new();
        for x in center.x - 1..=center.x + 1 {
            for y in center.y - 1..=center.y + 1 {
                let coord = ChunkCoord::new(x, y);
                if self.generated.insert(coord) {
                    fresh.push(coord);
                }
            }
        }
        fresh
    }

    pub fn is_generated(&self, coord: ChunkCoord) -> bool {
        self.generated.contains(&coord)
    }

    pub fn generated_count(&self) -> usize {
        self.generated.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_of_position_uses_floor_division() {
        let span = CELL_SIZE * f64::from(CHUNK_SIZE);
        assert_eq!(
            ChunkCoord::containing(&Position::new(0.0, 0.0)),
            ChunkCoord::new(0, 0)
        );
        assert_eq!(
            ChunkCoord::containing(&Position::new(span - 0.001, span - 0.001)),
            ChunkCoord::new(0, 0)
        );
        assert_eq!(
            ChunkCoord::containing(&Position::new(-0.001, span)),
            ChunkCoord::new(-1, 1)
        );
    }

    #[test]
    fn generation_is_deterministic() {
        let seed = crate::seed::seed_to_u64("abc123").unwrap();
        let gen1 = ChunkGenerator::new(seed);
        let gen2 = ChunkGenerator::new(seed);
        for coord in [ChunkCoord::new(0, 0), ChunkCoord::new(-3, 7), ChunkCoord::new(100, -100)] {
            let a = gen1.generate(coord);
            let b = gen2.generate(coord);
            assert_eq!(a.planets, b.planets);
            assert_eq!(a.wormholes, b.wormholes);
        }
    }

    #[test]
    fn bodies_land_on_their_cell_positions() {
        let generator = ChunkGenerator::new(12345);
        let coord = ChunkCoord::new(2, -1);
        let contents = generator.generate(coord);
        let span = CELL_SIZE * f64::from(CHUNK_SIZE);
        for planet in &contents.planets {
            // Cell-aligned and inside the chunk's area.
            assert_eq!(planet.position.x % CELL_SIZE, 0.0);
            assert_eq!(planet.position.y % CELL_SIZE, 0.0);
            assert!(planet.position.x >= f64::from(coord.x) * span);
            assert!(planet.position.x < f64::from(coord.x + 1) * span);
            assert!(planet.position.y >= f64::from(coord.y) * span);
            assert!(planet.position.y < f64::from(coord.y + 1) * span);
            assert!(!planet.looted);
            assert!(!planet.name.is_empty());
            assert!((0.0..std::f64::consts::TAU).contains(&planet.hue));
        }
    }

    #[test]
    fn planet_and_wormhole_bands_do_not_overlap() {
        assert!(WORMHOLE_THRESHOLD < PLANET_THRESHOLD);
        assert!(PLANET_THRESHOLD < MOON_THRESHOLD);
    }

    #[test]
    fn ensure_around_covers_the_nine_neighbors() {
        let mut tracker = ChunkTracker::new();
        let fresh = tracker.ensure_around(&Position::new(0.0, 0.0));
        assert_eq!(fresh.len(), 9);
        for x in -1..=1 {
            for y in -1..=1 {
                assert!(tracker.is_generated(ChunkCoord::new(x, y)));
            }
        }
        assert!(!tracker.is_generated(ChunkCoord::new(2, 0)));
    }

    #[test]
    fn ensure_around_is_idempotent() {
        let mut tracker = ChunkTracker::new();
        assert_eq!(tracker.ensure_around(&Position::new(10.0, 10.0)).len(), 9);
        assert!(tracker.ensure_around(&Position::new(10.0, 10.0)).is_empty());
        assert!(tracker.ensure_around(&Position::new(500.0, 500.0)).is_empty());
        assert_eq!(tracker.generated_count(), 9);
    }

    #[test]
    fn overlapping_neighborhoods_never_regenerate() {
        let span = CELL_SIZE * f64::from(CHUNK_SIZE);
        let mut tracker = ChunkTracker::new();
        tracker.ensure_around(&Position::new(0.0, 0.0));
        // One chunk to the east: neighborhoods share six chunks.
        let fresh = tracker.ensure_around(&Position::new(span, 0.0));
        assert_eq!(fresh.len(), 3);
        assert!(fresh.iter().all(|c| c.x == 2));
        assert_eq!(tracker.generated_count(), 12);
    }
}
