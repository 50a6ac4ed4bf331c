//! Deterministic simulation module
//!
//! All robot logic lives here. This module must be pure and deterministic:
//! - One fixed-length step per tick, independent of frame time
//! - Seeded RNG only
//! - Fixed update order (first robot, then second)
//! - No rendering or platform dependencies

pub mod agent;
pub mod geometry;
pub mod obstacles;
pub mod rng;
pub mod state;
pub mod tick;

pub use agent::{Agent, AgentId, StepOutcome};
pub use geometry::{overlaps, point_in_box, segment_intersects_box};
pub use obstacles::{Obstacle, ObstacleField};
pub use rng::{RngState, UniformSource};
pub use state::{Arena, ArenaEvent, ArenaStats};
pub use tick::{UPDATE_ORDER, tick};
