//! Simulation tick
//!
//! One tick: both robots decide and step, then touching robots respawn.

use super::agent::{AgentId, StepOutcome};
use super::state::{Arena, ArenaEvent};
use crate::error::SimError;

/// Fixed update order within a tick
pub const UPDATE_ORDER: [AgentId; 2] = [AgentId::First, AgentId::Second];

/// Advance the arena by one tick
///
/// Both robots decide from the positions as they stood before the tick, so
/// the second robot does not react to the first robot's move until the next
/// tick. `dt` is accepted for the frame loop's benefit only; every step is
/// exactly one `speed` long.
///
/// A failed respawn is returned after the tick's moves are committed; the
/// robots are left where they collided.
pub fn tick(arena: &mut Arena, _dt: f32) -> Result<(), SimError> {
    arena.stats.ticks += 1;
    let tick_no = arena.stats.ticks;

    let snapshot = arena.agents.clone();

    let visible = snapshot[0].can_see(&snapshot[1], &arena.obstacles);
    if visible {
        arena.stats.visible_ticks += 1;
    }
    if arena.last_visible != Some(visible) {
        log::debug!(
            "Tick {}: line of sight {}",
            tick_no,
            if visible { "open, chasing" } else { "blocked, hiding" }
        );
        arena.events.push(ArenaEvent::SightChanged {
            tick: tick_no,
            visible,
        });
        arena.last_visible = Some(visible);
    }

    for id in UPDATE_ORDER {
        let me = &snapshot[id.index()];
        let opponent = &snapshot[id.opponent().index()];
        let target = me.decide_target(opponent, &arena.obstacles);

        if arena.agents[id.index()].step(target, &arena.obstacles) == StepOutcome::Blocked {
            arena.stats.blocked_steps += 1;
        }
    }

    // Touch distance is the first robot's size
    if arena.separation() < arena.agents[0].size {
        let first = arena.agents[0].position;
        let second = arena.agents[1].position;
        log::info!("Robot collision at tick {}! Resetting positions.", tick_no);
        arena.events.push(ArenaEvent::Collision {
            tick: tick_no,
            first,
            second,
        });
        arena.respawn()?;
    }

    Ok(())
}
