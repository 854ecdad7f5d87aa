//! Procedural generation for the openprobe starfield.
//!
//! **Seed-based determinism:** everything here is a pure function of the
//! session seed, so a shared seed string reproduces the exact same universe
//! (planet positions, hues, names, moons, wormholes) on any machine.

pub mod body;
pub mod chunk;
pub mod field;
pub mod naming;
pub mod seed;

pub use body::*;
pub use chunk::*;
pub use field::*;
pub use naming::*;
pub use seed::*;
