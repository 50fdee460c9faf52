//! Trajectory prediction for the aim preview
//!
//! The preview and the reference solver advance motion through the same
//! `MotionModel`, so what the player sees is what the body does (up to
//! step size). Prediction is visual only and has no authority over physics.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{DRAG_COEFFICIENT, GRAVITY};

/// How a free body moves between impulses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MotionModel {
    /// Top-down play: velocity decays by `1 - drag * dt` each step
    Damped { drag: f32 },
    /// Side-on play: constant downward acceleration, no decay
    Ballistic { gravity: f32 },
}

impl Default for MotionModel {
    fn default() -> Self {
        MotionModel::Damped {
            drag: DRAG_COEFFICIENT,
        }
    }
}

impl MotionModel {
    /// Side-on variant with standard gravity
    pub fn ballistic() -> Self {
        MotionModel::Ballistic { gravity: GRAVITY }
    }

    /// Whether a free body eventually comes to rest.
    ///
    /// A ballistic body is momentarily slow at the top of its arc, so only
    /// damped motion may be treated as stopped on low speed.
    pub fn settles(&self) -> bool {
        matches!(self, MotionModel::Damped { .. })
    }

    /// Advance one step, returning the new (position, velocity)
    #[inline]
    pub fn advance(&self, pos: Vec2, vel: Vec2, dt: f32) -> (Vec2, Vec2) {
        let vel = match *self {
            // Clamp so a huge dt stops the body instead of reversing it
            MotionModel::Damped { drag } => vel * (1.0 - drag * dt).max(0.0),
            MotionModel::Ballistic { gravity } => vel + Vec2::new(0.0, -gravity) * dt,
        };
        (pos + vel * dt, vel)
    }
}

/// Finite sequence of predicted positions.
///
/// The first point is the start position. Cloning restarts the sequence
/// from wherever the clone was taken.
#[derive(Debug, Clone)]
pub struct Trajectory {
    pos: Vec2,
    vel: Vec2,
    remaining: usize,
    step_duration: f32,
    model: MotionModel,
}

impl Iterator for Trajectory {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let point = self.pos;
        (self.pos, self.vel) = self.model.advance(self.pos, self.vel, self.step_duration);
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Trajectory {}

/// Predict `step_count` positions starting at `start`
pub fn predict(
    start: Vec2,
    initial_velocity: Vec2,
    step_count: usize,
    step_duration: f32,
    model: MotionModel,
) -> Trajectory {
    Trajectory {
        pos: start,
        vel: initial_velocity,
        remaining: step_count,
        step_duration,
        model,
    }
}
