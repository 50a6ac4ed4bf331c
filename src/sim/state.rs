//! Arena state
//!
//! The arena owns everything the simulation touches: both robots, the
//! obstacle field and the seeded RNG. Nothing lives in ambient globals.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::agent::{Agent, AgentId};
use super::obstacles::ObstacleField;
use super::rng::RngState;
use crate::error::SimError;
use crate::settings::Settings;

/// Transient notifications for the shell, drained each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ArenaEvent {
    /// The robots touched at these positions
    Collision { tick: u64, first: Vec2, second: Vec2 },
    /// Both robots were moved to fresh spawn points
    Respawned { tick: u64, first: Vec2, second: Vec2 },
    /// No spawn point was found; robots were left in place
    RespawnFailed { tick: u64, attempts: u32 },
    /// Line of sight between the robots opened or closed
    SightChanged { tick: u64, visible: bool },
}

/// Running counters for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaStats {
    /// Simulation tick counter
    pub ticks: u64,
    pub respawns: u64,
    /// Ticks that started with a clear line of sight
    pub visible_ticks: u64,
    /// Steps dropped because they would have hit an obstacle
    pub blocked_steps: u64,
}

impl ArenaStats {
    /// Fraction of ticks with a clear line of sight
    pub fn visibility_ratio(&self) -> f32 {
        if self.ticks == 0 {
            0.0
        } else {
            self.visible_ticks as f32 / self.ticks as f32
        }
    }
}

/// The two robots, their obstacle field and everything needed to step them
#[derive(Debug, Clone)]
pub struct Arena {
    pub settings: Settings,
    pub rng_state: RngState,
    /// Robots in update order: first, then second
    pub agents: [Agent; 2],
    pub obstacles: ObstacleField,
    pub stats: ArenaStats,
    /// Pending events (newest last)
    pub events: Vec<ArenaEvent>,
    /// Line of sight at the start of the last tick
    pub(crate) last_visible: Option<bool>,
    rng: Pcg32,
}

impl Arena {
    /// Start a session: scatter obstacles, then place both robots
    pub fn new(settings: Settings) -> Result<Self, SimError> {
        settings.validate()?;

        let rng_state = RngState::new(settings.seed);
        let mut rng = rng_state.to_rng();

        let obstacles = ObstacleField::generate(
            settings.obstacle_count,
            settings.arena_half_extent,
            settings.obstacle_edge_margin,
            settings.obstacle_size_range(),
            &mut rng,
        );

        let mut spawn = || {
            obstacles.random_valid_position(
                settings.arena_half_extent,
                settings.agent_size,
                settings.max_placement_attempts,
                &mut rng,
            )
        };
        let first = spawn()?;
        let second = spawn()?;

        log::info!(
            "Arena seed {}: {} obstacles, robots at {:?} and {:?}",
            settings.seed,
            obstacles.len(),
            first,
            second
        );

        let agents = Self::build_agents(&settings, first, second);
        Ok(Self {
            settings,
            rng_state,
            agents,
            obstacles,
            stats: ArenaStats::default(),
            events: Vec::new(),
            last_visible: None,
            rng,
        })
    }

    /// Build an arena with a fixed layout instead of a random one
    ///
    /// The RNG is still seeded from `settings` and drives later respawns.
    pub fn with_layout(
        settings: Settings,
        obstacles: ObstacleField,
        first: Vec2,
        second: Vec2,
    ) -> Result<Self, SimError> {
        settings.validate()?;
        let rng_state = RngState::new(settings.seed);
        let rng = rng_state.to_rng();
        let agents = Self::build_agents(&settings, first, second);
        Ok(Self {
            settings,
            rng_state,
            agents,
            obstacles,
            stats: ArenaStats::default(),
            events: Vec::new(),
            last_visible: None,
            rng,
        })
    }

    fn build_agents(settings: &Settings, first: Vec2, second: Vec2) -> [Agent; 2] {
        let make = |id, pos, color| {
            Agent::new(id, pos, color)
                .with_speed(settings.agent_speed)
                .with_size(settings.agent_size)
                .with_hiding_margin(settings.hiding_margin)
        };
        [
            make(AgentId::First, first, settings.first_color),
            make(AgentId::Second, second, settings.second_color),
        ]
    }

    pub fn agent(&self, id: AgentId) -> &Agent {
        &self.agents[id.index()]
    }

    pub fn agent_mut(&mut self, id: AgentId) -> &mut Agent {
        &mut self.agents[id.index()]
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<ArenaEvent> {
        std::mem::take(&mut self.events)
    }

    /// Distance between the two robots' centres
    pub fn separation(&self) -> f32 {
        self.agents[0].position.distance(self.agents[1].position)
    }

    /// Move both robots to fresh, unblocked spawn points
    ///
    /// Both points are drawn before either is committed, so on failure
    /// neither robot moves.
    pub fn respawn(&mut self) -> Result<(), SimError> {
        let half = self.settings.arena_half_extent;
        let attempts = self.settings.max_placement_attempts;

        let mut positions = [Vec2::ZERO; 2];
        for (slot, agent) in positions.iter_mut().zip(self.agents.iter()) {
            match self
                .obstacles
                .random_valid_position(half, agent.size, attempts, &mut self.rng)
            {
                Ok(pos) => *slot = pos,
                Err(err) => {
                    log::warn!("Respawn aborted: {}", err);
                    self.events.push(ArenaEvent::RespawnFailed {
                        tick: self.stats.ticks,
                        attempts,
                    });
                    return Err(err);
                }
            }
        }

        for (agent, pos) in self.agents.iter_mut().zip(positions) {
            agent.position = pos;
        }
        self.stats.respawns += 1;
        self.events.push(ArenaEvent::Respawned {
            tick: self.stats.ticks,
            first: positions[0],
            second: positions[1],
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacles::Obstacle;

    #[test]
    fn test_new_places_robots_clear_of_obstacles() {
        let arena = Arena::new(Settings::default()).unwrap();
        assert_eq!(arena.obstacles.len(), Settings::default().obstacle_count);
        for agent in &arena.agents {
            assert!(!arena.obstacles.is_position_blocked(agent.position, agent.size));
        }
        assert_eq!(arena.agents[0].id, AgentId::First);
        assert_eq!(arena.agents[1].id, AgentId::Second);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = Arena::new(Settings::default()).unwrap();
        let b = Arena::new(Settings::default()).unwrap();
        assert_eq!(a.obstacles, b.obstacles);
        assert_eq!(a.agents, b.agents);
    }

    #[test]
    fn test_new_rejects_invalid_settings() {
        let settings = Settings {
            agent_size: -1.0,
            ..Settings::default()
        };
        assert!(matches!(
            Arena::new(settings),
            Err(SimError::InvalidSettings(_))
        ));
    }

    #[test]
    fn test_respawn_failure_leaves_robots_in_place() {
        let settings = Settings {
            max_placement_attempts: 5,
            ..Settings::default()
        };
        let wall = ObstacleField::new(vec![Obstacle::new(Vec2::ZERO, 1000.0)]);
        let first = Vec2::new(1.0, 2.0);
        let second = Vec2::new(3.0, 4.0);
        let mut arena = Arena::with_layout(settings, wall, first, second).unwrap();

        let err = arena.respawn().unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(arena.agents[0].position, first);
        assert_eq!(arena.agents[1].position, second);
        assert_eq!(arena.stats.respawns, 0);
        assert!(matches!(
            arena.drain_events().as_slice(),
            [ArenaEvent::RespawnFailed { attempts: 5, .. }]
        ));
    }

    #[test]
    fn test_respawn_keeps_attributes() {
        let mut arena = Arena::new(Settings::default()).unwrap();
        let colors = [arena.agents[0].color, arena.agents[1].color];
        arena.respawn().unwrap();
        assert_eq!(arena.agents[0].color, colors[0]);
        assert_eq!(arena.agents[1].color, colors[1]);
        assert_eq!(arena.agents[0].speed, arena.settings.agent_speed);
        assert_eq!(arena.stats.respawns, 1);
    }

    #[test]
    fn test_visibility_ratio() {
        let stats = ArenaStats {
            ticks: 4,
            visible_ticks: 1,
            ..Default::default()
        };
        assert_eq!(stats.visibility_ratio(), 0.25);
        assert_eq!(ArenaStats::default().visibility_ratio(), 0.0);
    }
}
