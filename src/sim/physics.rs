//! Physics step seam
//!
//! The round never integrates motion itself. A host plugs in its rigid-body
//! solver through `PhysicsStep`; `ReferenceSolver` is a minimal one used by
//! the native driver and the tests.

use super::body::MovableBody;
use super::collision::{Arena, Contact, find_contacts};
use super::trajectory::MotionModel;

/// One integration step over all bodies.
///
/// Implementations write `pos`/`vel` and push every contact that exists
/// after the step.
pub trait PhysicsStep {
    fn step(&mut self, bodies: &mut [MovableBody], dt: f32, contacts: &mut Vec<Contact>);
}

/// Integrates free bodies with the tuned motion model and reports contacts
#[derive(Debug, Clone)]
pub struct ReferenceSolver {
    pub model: MotionModel,
    pub arena: Arena,
}

impl ReferenceSolver {
    pub fn new(model: MotionModel, arena: Arena) -> Self {
        Self { model, arena }
    }
}

impl PhysicsStep for ReferenceSolver {
    fn step(&mut self, bodies: &mut [MovableBody], dt: f32, contacts: &mut Vec<Contact>) {
        for body in bodies.iter_mut().filter(|b| b.is_moving) {
            (body.pos, body.vel) = self.model.advance(body.pos, body.vel, dt);
        }
        find_contacts(bodies, &self.arena, contacts);
    }
}
