//! Frame-driven wrapper around the fixed-step simulation
//!
//! Owns the round, the physics step, and the input queue. The host pushes
//! input as it arrives, calls `update` once per frame, and drains events.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::sim::{
    Arena, FixedStep, GameEvent, InputEvent, InputQueue, PhysicsStep, ReferenceSolver,
    RoundController, TickInput, tick,
};
use crate::tuning::Tuning;

pub struct Game<P: PhysicsStep> {
    pub round: RoundController,
    pub physics: P,
    input: InputQueue,
    clock: FixedStep,
}

impl Game<ReferenceSolver> {
    /// Game driven by the built-in solver
    pub fn with_reference_solver(tuning: Tuning, arena: Arena, seed: u64) -> Self {
        let tuning = tuning.validated();
        let physics = ReferenceSolver::new(tuning.motion, arena);
        Self::new(RoundController::new(tuning, arena, seed), physics)
    }
}

impl<P: PhysicsStep> Game<P> {
    pub fn new(round: RoundController, physics: P) -> Self {
        Self {
            round,
            physics,
            input: InputQueue::new(),
            clock: FixedStep::new(),
        }
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run as many ticks as `frame_dt` covers. Returns the tick count.
    pub fn update(&mut self, frame_dt: f32) -> u32 {
        let substeps = self.clock.advance(frame_dt, SIM_DT, MAX_SUBSTEPS);
        if substeps == 0 {
            return 0;
        }
        // Queued edges go to the first tick only
        let first = self.input.take();
        let empty = TickInput::default();
        for i in 0..substeps {
            let input = if i == 0 { &first } else { &empty };
            tick(&mut self.round, &mut self.physics, input, SIM_DT);
        }
        substeps
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.round.drain_events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_waits_for_a_tick() {
        let mut game = Game::with_reference_solver(Tuning::default(), Arena::default(), 3);
        let target = game.round.bodies[1].pos;
        game.push_input(InputEvent::PressStarted(target));

        // Not enough time for a tick yet
        assert_eq!(game.update(SIM_DT * 0.5), 0);
        assert!(game.round.drag().is_none());

        assert_eq!(game.update(SIM_DT * 0.6), 1);
        assert_eq!(game.round.drag().map(|d| d.body), Some(1));
        assert!(
            game.drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::ShowTrajectoryPreview(_)))
        );
    }

    #[test]
    fn test_long_frame_runs_many_ticks() {
        let mut game = Game::with_reference_solver(Tuning::default(), Arena::default(), 3);
        let before = game.round.time;
        let ticks = game.update(SIM_DT * 6.5);
        assert_eq!(ticks, 6);
        assert!((game.round.time - before - 6.0 * SIM_DT).abs() < 1e-5);
    }
}
