//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by body index)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod gate;
pub mod input;
pub mod launch;
pub mod layout;
pub mod physics;
pub mod round;
pub mod state;
pub mod tick;
pub mod trajectory;

#[cfg(test)]
mod proptest_sim;

pub use body::{BodyId, MovableBody};
pub use collision::{Arena, Contact, ContactTarget};
pub use gate::{Crossing, GateLineDetector, GatePartition, is_on_left_side};
pub use input::{InputEvent, InputQueue, TickInput};
pub use launch::{DragGesture, DragOutcome, launch_direction, launch_force};
pub use physics::{PhysicsStep, ReferenceSolver};
pub use round::RoundController;
pub use state::{GameEvent, GamePhase, GameState, Score};
pub use tick::{FixedStep, tick};
pub use trajectory::{MotionModel, Trajectory, predict};
