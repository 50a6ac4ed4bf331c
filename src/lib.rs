//! Robot Hunt - two robots hunting each other across an obstacle field
//!
//! Core modules:
//! - `sim`: Deterministic simulation (visibility, hiding, steering, respawn)
//! - `render`: Read-only scene snapshot for a renderer
//! - `settings`: Data-driven simulation parameters
//! - `error`: Error types surfaced to the shell

pub mod error;
pub mod render;
pub mod settings;
pub mod sim;

pub use error::SimError;
pub use settings::{Settings, SettingsPreset};

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Arena dimensions (ground spans [-half, half] on both axes)
    pub const ARENA_HALF_EXTENT: f32 = 50.0;

    /// Obstacle defaults
    pub const OBSTACLE_COUNT: usize = 5;
    pub const OBSTACLE_MIN_SIZE: f32 = 5.0;
    pub const OBSTACLE_MAX_SIZE: f32 = 10.0;
    /// Obstacle centres stay this far inside the arena edge
    pub const OBSTACLE_EDGE_MARGIN: f32 = 10.0;

    /// Robot defaults
    pub const AGENT_SPEED: f32 = 0.2;
    pub const AGENT_SIZE: f32 = 2.0;

    /// Clearance between a hiding robot and the obstacle it hides behind
    pub const HIDING_MARGIN: f32 = 1.0;
    /// Below this distance a robot counts as already at its target
    pub const STEP_EPSILON: f32 = 0.01;
    /// Sample count for the line-of-sight test (20 intervals)
    pub const SEGMENT_SAMPLES: usize = 21;

    /// Rejection-sampling cap for spawn placement
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;
}
