use glam::Vec2;
use proptest::prelude::*;

use robot_hunt::sim::{Agent, AgentId, Obstacle, ObstacleField, StepOutcome};

fn point() -> impl Strategy<Value = Vec2> {
    (-50.0f32..50.0, -50.0f32..50.0).prop_map(|(x, y)| Vec2::new(x, y))
}

fn obstacle() -> impl Strategy<Value = Obstacle> {
    (point(), 1.0f32..10.0).prop_map(|(pos, size)| Obstacle::new(pos, size))
}

fn field() -> impl Strategy<Value = ObstacleField> {
    prop::collection::vec(obstacle(), 0..8).prop_map(ObstacleField::new)
}

fn agent(id: AgentId, pos: Vec2) -> Agent {
    Agent::new(id, pos, [1.0; 4])
}

proptest! {
    #[test]
    fn can_see_is_symmetric(a in point(), b in point(), field in field()) {
        let first = agent(AgentId::First, a);
        let second = agent(AgentId::Second, b);
        prop_assert_eq!(first.can_see(&second, &field), second.can_see(&first, &field));
    }

    #[test]
    fn empty_field_always_visible(a in point(), b in point()) {
        prop_assume!(a != b);
        let field = ObstacleField::default();
        prop_assert!(agent(AgentId::First, a).can_see(&agent(AgentId::Second, b), &field));
    }

    #[test]
    fn hiding_spot_is_never_blocked(a in point(), b in point(), field in field()) {
        let me = agent(AgentId::First, a);
        prop_assume!(!field.is_position_blocked(a, me.size));
        let spot = me.choose_hiding_spot(&agent(AgentId::Second, b), &field);
        prop_assert!(!field.is_position_blocked(spot, me.size));
    }

    #[test]
    fn step_never_enters_obstacle(start in point(), target in point(), field in field()) {
        let mut me = agent(AgentId::First, start);
        prop_assume!(!field.is_position_blocked(start, me.size));
        for _ in 0..20 {
            me.step(target, &field);
            prop_assert!(!field.is_position_blocked(me.position, me.size));
        }
    }

    #[test]
    fn step_to_current_position_is_noop(start in point(), field in field()) {
        let mut me = agent(AgentId::First, start);
        prop_assert_eq!(me.step(start, &field), StepOutcome::AtTarget);
        prop_assert_eq!(me.position, start);
    }

    #[test]
    fn empty_field_never_blocks(pos in point(), size in 0.1f32..100.0) {
        prop_assert!(!ObstacleField::default().is_position_blocked(pos, size));
    }
}
