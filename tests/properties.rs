//! Invariant checks over seeded runs

use proptest::prelude::*;

use water_bubble::sim::{Bubble, ContainerGeometry, Rect, SimState, tick};
use water_bubble::SimConfig;

fn check_bubble(bubble: &Bubble, config: &SimConfig, geometry: &ContainerGeometry) {
    assert!(bubble.radius >= config.min_radius as f32);
    assert!(bubble.radius < config.max_radius as f32);
    assert!(bubble.speed_y >= 1.0 && bubble.speed_y < config.max_speed_y);
    assert!(bubble.speed_x != 0.0 && bubble.speed_x.abs() < 1.0);
    assert!(bubble.pos.x.is_finite() && bubble.pos.y.is_finite());
    // Live bubbles stay below the surface line
    assert!(bubble.pos.y > geometry.surface_limit(bubble.radius));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn field_stays_bounded_and_valid(seed in any::<u64>(), ticks in 1usize..800, chance in 0.0f32..=1.0) {
        let config = SimConfig { spawn_chance: chance, ..Default::default() };
        let geometry = ContainerGeometry::new(Rect::new(0.0, 0.0, 120.0, 400.0), 8.0);
        let mut state = SimState::new(config.clone(), seed).unwrap();

        for _ in 0..ticks {
            prop_assert!(state.field.len() <= config.max_count);
            tick(&mut state, Some(&geometry));
            prop_assert!(state.field.len() <= config.max_count);
            for bubble in state.field.bubbles() {
                check_bubble(bubble, &config, &geometry);
            }
        }
    }

    #[test]
    fn removed_bubbles_never_return(seed in any::<u64>()) {
        let config = SimConfig { spawn_chance: 0.5, ..Default::default() };
        let geometry = ContainerGeometry::new(Rect::new(0.0, 0.0, 100.0, 150.0), 8.0);
        let mut state = SimState::new(config, seed).unwrap();
        let mut gone = std::collections::HashSet::new();

        for _ in 0..400 {
            let before: Vec<u64> = state.field.bubbles().iter().map(|b| b.id).collect();
            tick(&mut state, Some(&geometry));
            let after: std::collections::HashSet<u64> =
                state.field.bubbles().iter().map(|b| b.id).collect();

            for id in &after {
                prop_assert!(!gone.contains(id));
            }
            gone.extend(before.into_iter().filter(|id| !after.contains(id)));
        }
    }

    #[test]
    fn drift_is_clamped_to_walls(
        x in 0.0f32..100.0,
        radius in 5u32..30,
        speed_x in -60.0f32..60.0,
    ) {
        let geometry = ContainerGeometry::new(Rect::new(0.0, 0.0, 100.0, 200.0), 8.0);
        let radius = radius as f32;
        let bubble = Bubble { id: 0, pos: glam::Vec2::new(x, 150.0), radius, speed_x, speed_y: 1.0 };
        let next = bubble.stepped(&geometry);

        let left = geometry.left_limit(radius);
        let right = geometry.right_limit(radius);
        let target = x + speed_x;
        if target <= left {
            prop_assert_eq!(next.pos.x, left);
        } else if target >= right {
            prop_assert_eq!(next.pos.x, right);
        } else {
            prop_assert_eq!(next.pos.x, target);
        }
        prop_assert_eq!(next.pos.y, 149.0);
    }
}
