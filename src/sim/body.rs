//! Movable bodies
//!
//! Position and velocity are written by the physics step; the round only
//! reads them, applies launch impulses, and flips the gameplay flags.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Index of a body within the round (0..BODY_COUNT)
pub type BodyId = usize;

/// A launchable, growable circle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovableBody {
    pub id: BodyId,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Radius before growth is applied
    pub base_radius: f32,
    pub mass: f32,
    /// Cumulative scale from validated passes (starts at 1.0)
    pub growth: f32,
    /// True from launch until the speed drops under the stop threshold
    pub is_moving: bool,
    /// Set once per launch after a validated crossing
    pub has_crossed_gate: bool,
    /// Highlight state for presentation
    pub selected: bool,
}

impl MovableBody {
    pub fn new(id: BodyId, pos: Vec2, base_radius: f32, mass: f32) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            base_radius,
            mass,
            growth: 1.0,
            is_moving: false,
            has_crossed_gate: false,
            selected: false,
        }
    }

    /// Collision radius including growth
    #[inline]
    pub fn radius(&self) -> f32 {
        self.base_radius * self.growth
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Whether a world point lies on this body
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.distance_squared(point) <= self.radius() * self.radius()
    }

    /// Replace current motion with an instantaneous impulse
    pub fn launch(&mut self, impulse: Vec2) {
        self.vel = Vec2::ZERO;
        self.vel += impulse / self.mass;
        self.is_moving = true;
        self.has_crossed_gate = false;
        self.selected = false;
    }

    pub fn grow(&mut self, multiplier: f32) {
        self.growth *= multiplier;
    }

    /// Moving, but slower than `stop_threshold`
    pub fn is_settling(&self, stop_threshold: f32) -> bool {
        self.is_moving && self.speed() < stop_threshold
    }

    /// Bring the body to rest and release it for the next launch
    pub fn stop(&mut self) {
        self.vel = Vec2::ZERO;
        self.is_moving = false;
        self.has_crossed_gate = false;
    }
}
