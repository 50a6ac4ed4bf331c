//! Errors surfaced to the shell.
//!
//! Geometry and steering never fail: degenerate vectors resolve to "hold
//! position". Only configuration problems and unsatisfiable spawn placement
//! reach this type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Rejection sampling found no free spot for a square of `size`.
    ///
    /// Recoverable: the respawn that needed it is aborted and the robots stay
    /// where they were.
    #[error("no free position for size {size} after {attempts} attempts")]
    PlacementExhausted { attempts: u32, size: f32 },

    /// Settings failed validation.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimError {
    /// Returns true if the simulation can keep running after this error.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::PlacementExhausted { .. })
    }
}
