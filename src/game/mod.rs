pub mod combat;
pub mod config;
pub mod enemy_fire;
pub mod entities;
pub mod formation;
pub mod geometry;
pub mod particles;
pub mod sparkles;
pub mod state;

pub use config::Variant;
pub use geometry::{overlaps, Rect};
pub use state::{tick, Command, Phase, Session, SimulationState};
