//! Static obstacle field
//!
//! Obstacles are grey cubes scattered once at session start. They block both
//! movement and line of sight and never change afterwards.

use std::ops::RangeInclusive;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::overlaps;
use super::rng::UniformSource;
use crate::error::SimError;

/// A square obstacle footprint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub position: Vec2,
    /// Edge length
    pub size: f32,
}

impl Obstacle {
    pub fn new(position: Vec2, size: f32) -> Self {
        Self { position, size }
    }
}

/// The fixed set of obstacles for one session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    /// Build a field from explicit obstacles
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        Self { obstacles }
    }

    /// Scatter `count` obstacles uniformly over the arena
    ///
    /// Centres stay `edge_margin` inside the arena edge. Obstacles may overlap
    /// one another.
    pub fn generate(
        count: usize,
        arena_half_extent: f32,
        edge_margin: f32,
        size_range: RangeInclusive<f32>,
        rng: &mut impl UniformSource,
    ) -> Self {
        let bound = (arena_half_extent - edge_margin).max(0.0);
        let obstacles = (0..count)
            .map(|_| {
                let x = rng.uniform(-bound..=bound);
                let y = rng.uniform(-bound..=bound);
                let size = rng.uniform(size_range.clone());
                Obstacle::new(Vec2::new(x, y), size)
            })
            .collect();
        Self { obstacles }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    /// True if a square of `size` centred at `pos` overlaps any obstacle
    pub fn is_position_blocked(&self, pos: Vec2, size: f32) -> bool {
        self.obstacles
            .iter()
            .any(|obs| overlaps(pos, size, obs.position, obs.size))
    }

    /// Rejection-sample a free spot for a square of `size` anywhere in the arena
    ///
    /// Gives up after `max_attempts` draws, which only happens when obstacles
    /// cover (nearly) the whole arena.
    pub fn random_valid_position(
        &self,
        arena_half_extent: f32,
        size: f32,
        max_attempts: u32,
        rng: &mut impl UniformSource,
    ) -> Result<Vec2, SimError> {
        let bound = arena_half_extent;
        for _ in 0..max_attempts {
            let pos = Vec2::new(rng.uniform(-bound..=bound), rng.uniform(-bound..=bound));
            if !self.is_position_blocked(pos, size) {
                return Ok(pos);
            }
        }
        Err(SimError::PlacementExhausted {
            attempts: max_attempts,
            size,
        })
    }
}
