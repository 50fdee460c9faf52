//! Fixed timestep simulation tick
//!
//! Within one tick: input edges, then exactly one physics step, then
//! contacts, then the gate check on post-step positions, then stop
//! detection, then the restart clock.

use super::collision::Contact;
use super::input::{InputEvent, TickInput};
use super::physics::PhysicsStep;
use super::round::RoundController;

/// Advance the round by one fixed timestep
pub fn tick<P: PhysicsStep>(
    round: &mut RoundController,
    physics: &mut P,
    input: &TickInput,
    dt: f32,
) {
    // Input is ignored while the round is over; bodies keep coasting
    if round.state.is_playing() {
        for event in &input.events {
            match *event {
                InputEvent::PointerMove(p) => round.on_pointer_moved(p),
                InputEvent::PressStarted(p) => {
                    round.on_pointer_moved(p);
                    round.on_press_started(p);
                }
                InputEvent::PressReleased(p) => round.on_press_released(p),
            }
        }
        round.refresh_preview();
    }

    let mut contacts: Vec<Contact> = Vec::new();
    physics.step(&mut round.bodies, dt, &mut contacts);
    round.apply_contacts(&contacts);

    round.check_gate();
    round.check_stopped();
    round.advance_clock(dt);
}

/// Fixed-step accumulator for variable frame times
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    /// Largest frame time accepted (long stalls are dropped)
    pub const MAX_FRAME: f32 = 0.1;

    pub fn new() -> Self {
        Self::default()
    }

    /// Bank a frame's time and return how many ticks of `step` to run
    pub fn advance(&mut self, frame_dt: f32, step: f32, max_substeps: u32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, Self::MAX_FRAME);
        let mut substeps = 0;
        while self.accumulator >= step && substeps < max_substeps {
            self.accumulator -= step;
            substeps += 1;
        }
        substeps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
