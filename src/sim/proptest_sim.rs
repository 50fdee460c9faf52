//! Property-based tests for the gameplay core using proptest.

use glam::Vec2;
use proptest::prelude::*;

use super::body::MovableBody;
use super::gate::{GateLineDetector, is_on_left_side};
use super::launch::{DragGesture, DragOutcome, launch_force};
use crate::point_segment_distance;
use crate::tuning::LaunchTuning;

fn vec2(range: f32) -> impl Strategy<Value = Vec2> {
    (-range..range, -range..range).prop_map(|(x, y)| Vec2::new(x, y))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any accepted drag yields a force inside the configured range.
    #[test]
    fn prop_force_within_range(
        distance in 0.3f32..2.0,
        duration in 0.0f32..30.0,
    ) {
        let t = LaunchTuning::default();
        let force = launch_force(distance, duration, &t);
        prop_assert!(force >= t.min_force && force <= t.max_force, "force {force}");
    }

    /// Releases under the minimum distance never launch.
    #[test]
    fn prop_short_drag_cancels(
        start in vec2(5.0),
        angle in 0.0f32..std::f32::consts::TAU,
        length in 0.0f32..0.299,
        now in 0.0f32..10.0,
    ) {
        let t = LaunchTuning::default();
        let mut gesture = DragGesture::new(0, start, 0.0);
        gesture.current = start + Vec2::from_angle(angle) * length;
        prop_assert_eq!(gesture.release(now, &t), DragOutcome::Cancelled);
    }

    /// Swapping the gate endpoints flips the side of any off-line point.
    #[test]
    fn prop_side_is_antisymmetric(p in vec2(10.0), a in vec2(10.0), b in vec2(10.0)) {
        let cross = crate::cross2(a, b, p);
        prop_assume!(cross.abs() > 1e-2);
        prop_assert_ne!(is_on_left_side(p, a, b), is_on_left_side(p, b, a));
    }

    /// A zero-length segment measures plain point distance.
    #[test]
    fn prop_degenerate_segment_is_point_distance(p in vec2(10.0), a in vec2(10.0)) {
        let d = point_segment_distance(p, a, a);
        prop_assert!((d - p.distance(a)).abs() < 1e-5);
    }

    /// Segment distance never exceeds the distance to either endpoint.
    #[test]
    fn prop_segment_distance_bounded(p in vec2(10.0), a in vec2(10.0), b in vec2(10.0)) {
        let d = point_segment_distance(p, a, b);
        prop_assert!(d <= p.distance(a) + 1e-4);
        prop_assert!(d <= p.distance(b) + 1e-4);
    }

    /// However the body wanders during one launch, it scores at most once.
    #[test]
    fn prop_one_validated_crossing_per_launch(
        path in prop::collection::vec(vec2(4.0), 1..40),
    ) {
        let mut bodies = vec![
            MovableBody::new(0, Vec2::new(0.0, -3.0), 0.1, 1.0),
            MovableBody::new(1, Vec2::new(-1.0, 0.0), 0.1, 1.0),
            MovableBody::new(2, Vec2::new(1.0, 0.0), 0.1, 1.0),
        ];
        let mut detector = GateLineDetector::new();
        detector.engage(&bodies, 0);
        bodies[0].is_moving = true;

        let mut validated = 0;
        for p in path {
            bodies[0].pos = p;
            if detector.update(&mut bodies) == Some(super::gate::Crossing::Validated) {
                validated += 1;
            }
        }
        prop_assert!(validated <= 1);
    }
}
