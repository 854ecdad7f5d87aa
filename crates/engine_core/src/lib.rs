//! Core engine types for openprobe.
//!
//! This crate provides the foundational types used across all game systems:
//! - Spatial value types (Position, Direction)
//! - Timed-progress operations (scans, countdowns)
//! - Frame time management

pub mod operation;
pub mod position;
pub mod time;

pub use operation::*;
pub use position::*;
pub use time::*;

// Re-export commonly used math types
pub use glam::DVec2;
