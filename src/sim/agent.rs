//! Robot agents
//!
//! A robot has no memory between ticks. Each tick it looks at its opponent:
//! if the line of sight is clear it charges, otherwise it heads for the
//! nearest spot behind an obstacle. Then it takes one fixed-length step.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::segment_intersects_box;
use super::obstacles::ObstacleField;
use crate::consts::*;

/// Which of the two robots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentId {
    First,
    Second,
}

impl AgentId {
    pub fn opponent(self) -> Self {
        match self {
            AgentId::First => AgentId::Second,
            AgentId::Second => AgentId::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            AgentId::First => 0,
            AgentId::Second => 1,
        }
    }
}

/// Result of a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    /// Already within `STEP_EPSILON` of the target
    AtTarget,
    /// The step would have overlapped an obstacle
    Blocked,
}

impl StepOutcome {
    pub fn moved(self) -> bool {
        self == StepOutcome::Moved
    }
}

/// A hunting robot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub position: Vec2,
    /// Display color (RGBA), ignored by the simulation
    pub color: [f32; 4],
    /// Distance moved per tick
    pub speed: f32,
    /// Cube edge length, also used as the touch distance
    pub size: f32,
    /// Clearance kept from an obstacle when hiding
    pub hiding_margin: f32,
}

impl Agent {
    pub fn new(id: AgentId, position: Vec2, color: [f32; 4]) -> Self {
        Self {
            id,
            position,
            color,
            speed: AGENT_SPEED,
            size: AGENT_SIZE,
            hiding_margin: HIDING_MARGIN,
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_hiding_margin(mut self, margin: f32) -> Self {
        self.hiding_margin = margin;
        self
    }

    /// True if no obstacle cuts the segment between the two robots
    pub fn can_see(&self, other: &Agent, obstacles: &ObstacleField) -> bool {
        !obstacles
            .iter()
            .any(|obs| segment_intersects_box(self.position, other.position, obs.position, obs.size))
    }

    /// Pick the closest spot on the far side of an obstacle from `other`
    ///
    /// Each candidate sits on the ray from the opponent through an obstacle
    /// centre, far enough past the centre that this robot's square clears the
    /// obstacle by `hiding_margin` on the dominant axis. Candidates blocked by
    /// any obstacle are dropped. With no candidate left the robot holds still.
    /// On diagonal rays the spot is up to ~1.41x further out than a plain
    /// `clearance` offset along the ray.
    pub fn choose_hiding_spot(&self, other: &Agent, obstacles: &ObstacleField) -> Vec2 {
        obstacles
            .iter()
            .filter_map(|obs| {
                let to_obs = obs.position - other.position;
                let dist = to_obs.length();
                if dist == 0.0 {
                    return None;
                }
                let dir = to_obs / dist;
                let clearance = obs.size / 2.0 + self.size / 2.0 + self.hiding_margin;
                // Stretch diagonal rays so the square still clears the obstacle
                let dominant = dir.x.abs().max(dir.y.abs());
                let candidate = obs.position + dir * (clearance / dominant);
                (!obstacles.is_position_blocked(candidate, self.size)).then_some(candidate)
            })
            .min_by(|a, b| {
                a.distance_squared(self.position)
                    .partial_cmp(&b.distance_squared(self.position))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or(self.position)
    }

    /// Chase the opponent if visible, otherwise hide
    pub fn decide_target(&self, other: &Agent, obstacles: &ObstacleField) -> Vec2 {
        if self.can_see(other, obstacles) {
            other.position
        } else {
            self.choose_hiding_spot(other, obstacles)
        }
    }

    /// Take one `speed`-length step toward `target`
    ///
    /// The move is dropped entirely if it would overlap an obstacle.
    pub fn step(&mut self, target: Vec2, obstacles: &ObstacleField) -> StepOutcome {
        let to_target = target - self.position;
        let dist = to_target.length();
        if dist <= STEP_EPSILON {
            return StepOutcome::AtTarget;
        }

        let candidate = self.position + to_target / dist * self.speed;
        if obstacles.is_position_blocked(candidate, self.size) {
            log::trace!("{:?} step blocked at {:?}", self.id, candidate);
            return StepOutcome::Blocked;
        }
        self.position = candidate;
        StepOutcome::Moved
    }
}
