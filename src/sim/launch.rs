//! Drag gesture to launch impulse
//!
//! The body flies in the drag direction. Force blends how far the pointer
//! was dragged with how fast it was dragged.

use glam::Vec2;

use crate::consts::MIN_DRAG_DURATION;
use crate::tuning::LaunchTuning;

use super::body::BodyId;

/// An in-progress drag, alive between press and release
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    pub body: BodyId,
    pub start: Vec2,
    pub current: Vec2,
    /// Sim time at press (seconds)
    pub start_time: f32,
}

/// What a released drag turns into
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Too short to count; selection and preview are dropped
    Cancelled,
    Launch { direction: Vec2, force: f32 },
}

impl DragGesture {
    pub fn new(body: BodyId, start: Vec2, start_time: f32) -> Self {
        Self {
            body,
            start,
            current: start,
            start_time,
        }
    }

    /// Raw drag vector from press point to the pointer
    #[inline]
    pub fn vector(&self) -> Vec2 {
        self.current - self.start
    }

    /// Drag vector clamped to the maximum drag length
    pub fn clamped_vector(&self, tuning: &LaunchTuning) -> Vec2 {
        self.vector().clamp_length_max(tuning.max_drag_distance)
    }

    /// Direction and force for the pointer's current position.
    ///
    /// Used both for the live preview and for the final launch.
    pub fn aim(&self, now: f32, tuning: &LaunchTuning) -> (Vec2, f32) {
        let drag = self.clamped_vector(tuning);
        let force = launch_force(drag.length(), now - self.start_time, tuning);
        (launch_direction(drag), force)
    }

    /// Resolve the gesture on release
    pub fn release(&self, now: f32, tuning: &LaunchTuning) -> DragOutcome {
        let distance = self.vector().length();
        if distance < tuning.min_drag_distance {
            log::debug!("Drag distance {distance:.2} too small, not launching");
            return DragOutcome::Cancelled;
        }

        let (direction, force) = self.aim(now, tuning);
        log::debug!(
            "Launch - distance: {:.2}, force: {force:.2}",
            distance.min(tuning.max_drag_distance)
        );
        DragOutcome::Launch { direction, force }
    }
}

/// Unit launch direction for a drag vector (zero for a zero drag)
#[inline]
pub fn launch_direction(drag: Vec2) -> Vec2 {
    drag.normalize_or_zero()
}

/// Impulse magnitude for a drag of `distance` lasting `duration` seconds.
///
/// Always lands in `[min_force, max_force]`.
pub fn launch_force(distance: f32, duration: f32, tuning: &LaunchTuning) -> f32 {
    let distance = distance.clamp(0.0, tuning.max_drag_distance);

    let normalized_distance = (distance / tuning.max_drag_distance).clamp(0.0, 1.0);
    let distance_force = lerp(0.0, tuning.max_force, normalized_distance);

    let drag_speed = distance / duration.max(MIN_DRAG_DURATION);
    let normalized_speed = (drag_speed / tuning.velocity_normalization).clamp(0.0, 1.0);
    let velocity_force = normalized_speed * tuning.max_force;

    let combined =
        distance_force * tuning.distance_weight + velocity_force * tuning.velocity_weight;
    combined.clamp(tuning.min_force, tuning.max_force)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuning() -> LaunchTuning {
        LaunchTuning::default()
    }

    #[test]
    fn test_full_drag_slow_release() {
        // Max distance over 10 seconds: distance force is full, speed is 0.2 u/s
        let t = tuning();
        let force = launch_force(2.0, 10.0, &t);
        let expected = 20.0 * 0.6 + (0.2 / 10.0) * 20.0 * 0.4;
        assert!((force - expected).abs() < 1e-4);
    }

    #[test]
    fn test_fast_full_drag_hits_max() {
        let t = tuning();
        assert_eq!(launch_force(2.0, 0.05, &t), t.max_force);
    }

    #[test]
    fn test_tiny_slow_drag_floors_at_min() {
        let t = tuning();
        assert_eq!(launch_force(0.3, 100.0, &t), t.min_force);
    }

    #[test]
    fn test_overlong_drag_is_clamped() {
        let t = tuning();
        assert_eq!(launch_force(50.0, 10.0, &t), launch_force(2.0, 10.0, &t));
    }

    #[test]
    fn test_zero_duration_does_not_divide_by_zero() {
        let t = tuning();
        let force = launch_force(1.0, 0.0, &t);
        assert!(force.is_finite());
        assert!(force >= t.min_force && force <= t.max_force);
    }

    #[test]
    fn test_direction_follows_drag() {
        let dir = launch_direction(Vec2::new(0.0, -3.0));
        assert!((dir - Vec2::new(0.0, -1.0)).length() < 1e-6);
        assert_eq!(launch_direction(Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn test_short_release_cancels() {
        let t = tuning();
        let mut gesture = DragGesture::new(0, Vec2::ZERO, 0.0);
        gesture.current = Vec2::new(0.2, 0.0);
        assert_eq!(gesture.release(1.0, &t), DragOutcome::Cancelled);
    }

    #[test]
    fn test_release_launches_along_drag() {
        let t = tuning();
        let mut gesture = DragGesture::new(1, Vec2::new(1.0, 1.0), 2.0);
        gesture.current = Vec2::new(1.0, 4.0);

        match gesture.release(2.5, &t) {
            DragOutcome::Launch { direction, force } => {
                assert!((direction - Vec2::Y).length() < 1e-6);
                assert!(force >= t.min_force && force <= t.max_force);
            }
            DragOutcome::Cancelled => panic!("expected launch"),
        }
    }

    #[test]
    fn test_clamped_vector_keeps_direction() {
        let t = tuning();
        let mut gesture = DragGesture::new(0, Vec2::ZERO, 0.0);
        gesture.current = Vec2::new(6.0, 8.0);
        let v = gesture.clamped_vector(&t);
        assert!((v.length() - t.max_drag_distance).abs() < 1e-5);
        assert!((v.normalize() - Vec2::new(0.6, 0.8)).length() < 1e-5);
    }
}
