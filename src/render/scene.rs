//! Per-frame scene snapshot
//!
//! Everything a renderer needs, copied out of the arena. The simulation never
//! reads any of it back.

use glam::Vec2;

use super::instance::{QuadInstance, colors};
use crate::sim::Arena;

/// Render-ready view of one frame
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub clear_color: [f32; 4],
    pub ground: Option<QuadInstance>,
    /// Obstacles, fixed for the session
    pub obstacles: Vec<QuadInstance>,
    /// Robots in update order
    pub robots: Vec<QuadInstance>,
}

impl Scene {
    /// Snapshot the arena
    pub fn capture(arena: &Arena) -> Self {
        let half = arena.settings.arena_half_extent;
        Self {
            clear_color: colors::SKY,
            ground: Some(QuadInstance::flat(Vec2::ZERO, half * 2.0, colors::GROUND)),
            obstacles: arena
                .obstacles
                .iter()
                .map(|obs| QuadInstance::cube(obs.position, obs.size, colors::OBSTACLE))
                .collect(),
            robots: arena
                .agents
                .iter()
                .map(|agent| QuadInstance::cube(agent.position, agent.size, agent.color))
                .collect(),
        }
    }

    /// All instances in draw order (ground, obstacles, robots)
    pub fn instances(&self) -> Vec<QuadInstance> {
        self.ground
            .iter()
            .chain(self.obstacles.iter())
            .chain(self.robots.iter())
            .copied()
            .collect()
    }

    /// Instance data as raw bytes for a GPU instance buffer
    pub fn instance_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice::<QuadInstance, u8>(&self.instances()).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_capture_matches_arena() {
        let arena = Arena::new(Settings::default()).unwrap();
        let scene = Scene::capture(&arena);

        assert_eq!(scene.obstacles.len(), arena.obstacles.len());
        assert_eq!(scene.robots.len(), 2);
        assert_eq!(scene.robots[0].color, colors::RED_ROBOT);
        assert_eq!(scene.robots[1].color, colors::BLUE_ROBOT);
        assert_eq!(scene.robots[0].center, arena.agents[0].position.to_array());

        let ground = scene.ground.unwrap();
        assert_eq!(ground.size, 100.0);
        assert_eq!(ground.height, 0.0);
    }

    #[test]
    fn test_instance_bytes() {
        let arena = Arena::new(Settings::default()).unwrap();
        let scene = Scene::capture(&arena);
        let count = 1 + arena.obstacles.len() + 2;
        assert_eq!(scene.instances().len(), count);
        assert_eq!(
            scene.instance_bytes().len(),
            count * std::mem::size_of::<QuadInstance>()
        );
    }
}
