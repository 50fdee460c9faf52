//! Pass Line - launch one body between the other two
//!
//! Core modules:
//! - `sim`: Deterministic simulation (launch, prediction, gate crossing, round state)
//! - `game`: Frame loop wrapper owning the round, physics, and input queue
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Number of movable bodies in a round (one launched, two gates)
    pub const BODY_COUNT: usize = 3;

    /// Arena half extents (world units, centered on origin)
    pub const ARENA_HALF_WIDTH: f32 = 3.0;
    pub const ARENA_HALF_HEIGHT: f32 = 5.0;

    /// Body defaults
    pub const BODY_RADIUS: f32 = 0.5;
    pub const BODY_MASS: f32 = 1.0;
    /// Closest two body centers may spawn, in body radii
    pub const SPAWN_SEPARATION: f32 = 4.0;

    /// Launch force range (impulse units)
    pub const MIN_LAUNCH_FORCE: f32 = 5.0;
    pub const MAX_LAUNCH_FORCE: f32 = 20.0;
    /// Drag distance range (world units)
    pub const MIN_DRAG_DISTANCE: f32 = 0.3;
    pub const MAX_DRAG_DISTANCE: f32 = 2.0;
    /// Drag speed mapped to full velocity force (units/sec)
    pub const VELOCITY_NORMALIZATION: f32 = 10.0;
    /// Floor for drag duration when computing drag speed
    pub const MIN_DRAG_DURATION: f32 = 0.01;
    pub const DISTANCE_WEIGHT: f32 = 0.6;
    pub const VELOCITY_WEIGHT: f32 = 0.4;

    /// Below this speed a moving body counts as stopped
    pub const STOP_VELOCITY_THRESHOLD: f32 = 0.1;
    /// Linear drag applied by the decay motion model
    pub const DRAG_COEFFICIENT: f32 = 2.0;
    /// Downward acceleration of the ballistic motion model
    pub const GRAVITY: f32 = 9.81;
    /// Scale multiplier applied on every validated pass
    pub const GROWTH_MULTIPLIER: f32 = 1.1;

    /// Trajectory preview sampling
    pub const TRAJECTORY_STEP_COUNT: usize = 20;
    pub const TRAJECTORY_STEP_DURATION: f32 = 0.05;

    /// How long the gate line stays visible after selection (seconds)
    pub const GATE_LINE_DURATION: f32 = 0.5;
    /// Delay between game over and restart (seconds)
    pub const RESTART_DELAY: f32 = 1.0;
}

/// Signed area of the parallelogram spanned by `b - a` and `p - a`.
///
/// Positive when `p` lies to the left of the directed line `a -> b`.
#[inline]
pub fn cross2(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Closest point to `p` on the segment `[a, b]`.
///
/// A degenerate segment (`a == b`) resolves to `a`.
#[inline]
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let line = b - a;
    let len_sq = line.length_squared();
    if len_sq == 0.0 {
        return a;
    }
    let t = ((p - a).dot(line) / len_sq).clamp(0.0, 1.0);
    a + line * t
}

/// Distance from `p` to the segment `[a, b]`
#[inline]
pub fn point_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    p.distance(closest_point_on_segment(p, a, b))
}
