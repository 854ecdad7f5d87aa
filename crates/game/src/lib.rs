//! Game core: world simulation, procedural starfield streaming, and the
//! screen state machine. Rendering, audio playback, and window input are
//! host concerns behind the [`assets::Sounds`] and [`input::FrameInput`]
//! seams.

pub mod assets;
pub mod config;
pub mod credits;
pub mod intro;
pub mod menu;
pub mod settings;
pub mod state;
pub mod view;
pub mod world;

pub use config::GameConfig;
pub use state::{Game, GameSignal, Screen};
pub use view::ViewState;
pub use world::{World, WorldStatus};
