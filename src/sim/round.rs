//! Round orchestration
//!
//! Owns the bodies, the gate detector, the active drag, the phase machine
//! and the score for one run. Everything that happens in a round goes
//! through here and comes out as `GameEvent`s.

use glam::Vec2;

use super::body::{BodyId, MovableBody};
use super::collision::{Arena, Contact, ContactTarget};
use super::gate::{Crossing, GateLineDetector};
use super::launch::{DragGesture, DragOutcome};
use super::layout::{round_seed, spawn_bodies};
use super::state::{GameEvent, GameState, Score};
use super::trajectory::predict;
use crate::tuning::Tuning;

pub struct RoundController {
    pub tuning: Tuning,
    pub arena: Arena,
    pub bodies: Vec<MovableBody>,
    pub state: GameState,
    pub score: Score,
    /// Sim time since the round started (seconds)
    pub time: f32,
    detector: GateLineDetector,
    drag: Option<DragGesture>,
    run_seed: u64,
    round_index: u32,
    events: Vec<GameEvent>,
}

impl RoundController {
    /// Start a run with seeded body placement
    pub fn new(tuning: Tuning, arena: Arena, run_seed: u64) -> Self {
        let tuning = tuning.validated();
        let bodies = spawn_bodies(
            round_seed(run_seed, 0),
            &arena,
            tuning.body_radius,
            tuning.body_mass,
        );
        Self::with_bodies(tuning, arena, bodies, run_seed)
    }

    /// Start a run from explicit bodies (restarts still use seeded placement)
    pub fn with_bodies(tuning: Tuning, arena: Arena, bodies: Vec<MovableBody>, run_seed: u64) -> Self {
        Self {
            tuning: tuning.validated(),
            arena,
            bodies,
            state: GameState::new(),
            score: Score::default(),
            time: 0.0,
            detector: GateLineDetector::new(),
            drag: None,
            run_seed,
            round_index: 0,
            events: Vec::new(),
        }
    }

    /// Take everything emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn drag(&self) -> Option<&DragGesture> {
        self.drag.as_ref()
    }

    pub fn detector(&self) -> &GateLineDetector {
        &self.detector
    }

    /// Body under a world point, lowest index first
    pub fn body_at(&self, point: Vec2) -> Option<BodyId> {
        self.bodies.iter().find(|b| b.contains(point)).map(|b| b.id)
    }

    // === Input ===

    pub fn on_press_started(&mut self, pointer: Vec2) {
        let Some(id) = self.body_at(pointer) else {
            return;
        };
        if self.on_body_selected(id) {
            self.drag = Some(DragGesture::new(id, pointer, self.time));
        }
    }

    pub fn on_pointer_moved(&mut self, pointer: Vec2) {
        if let Some(drag) = self.drag.as_mut() {
            drag.current = pointer;
        }
    }

    pub fn on_press_released(&mut self, pointer: Vec2) {
        let Some(mut drag) = self.drag.take() else {
            return;
        };
        drag.current = pointer;

        if !self.state.is_playing() {
            self.cancel_drag(drag.body);
            return;
        }

        match drag.release(self.time, &self.tuning.launch) {
            DragOutcome::Cancelled => self.cancel_drag(drag.body),
            DragOutcome::Launch { direction, force } => {
                let impulse = direction * force;
                self.bodies[drag.body].launch(impulse);
                log::info!("Body {} launched with force {force:.2}", drag.body);
                self.events.push(GameEvent::HideTrajectoryPreview);
                self.events.push(GameEvent::Launched {
                    body: drag.body,
                    impulse,
                });
            }
        }
    }

    fn cancel_drag(&mut self, body: BodyId) {
        self.bodies[body].selected = false;
        self.events.push(GameEvent::HideTrajectoryPreview);
    }

    // === Round contract ===

    /// Pick `id` as the launched body. Returns false if rejected.
    pub fn on_body_selected(&mut self, id: BodyId) -> bool {
        if !self.state.is_playing() {
            log::debug!("Selection of body {id} rejected: round over");
            return false;
        }
        let Some(body) = self.bodies.get(id) else {
            return false;
        };
        if body.is_moving {
            log::debug!("Selection of body {id} rejected: still moving");
            return false;
        }

        for body in &mut self.bodies {
            body.selected = body.id == id;
        }
        let partition = self.detector.engage(&self.bodies, id);
        let [a, b] = partition.gates;
        self.events.push(GameEvent::BodySelected(id));
        self.events.push(GameEvent::ShowGateLine {
            a: self.bodies[a].pos,
            b: self.bodies[b].pos,
            duration: self.tuning.gate_line_duration,
        });
        true
    }

    pub fn on_body_stopped(&mut self, id: BodyId) {
        self.bodies[id].stop();
        log::debug!("Body {id} came to rest");
    }

    /// Any touch involving a moving body ends the round
    pub fn on_body_collided(&mut self, body: BodyId, other: ContactTarget) {
        let moving = self.bodies[body].is_moving
            || matches!(other, ContactTarget::Body(o) if self.bodies[o].is_moving);
        if !moving {
            return;
        }
        match other {
            ContactTarget::Wall => log::info!("Body {body} hit a wall"),
            ContactTarget::Body(o) => log::info!("Body {body} hit body {o}"),
        }
        self.game_over();
    }

    pub fn game_over(&mut self) {
        let delay = self.tuning.restart_delay;
        if !self.state.game_over(delay) {
            return;
        }
        log::info!("Game over! Final score: {}", self.score.value());

        self.detector.disengage();
        if let Some(drag) = self.drag.take() {
            self.cancel_drag(drag.body);
        }
        self.events.push(GameEvent::GameOver);
        self.events.push(GameEvent::RestartScheduled { delay });
    }

    /// Fully reinitialise the round with a fresh layout
    pub fn restart(&mut self) {
        self.round_index += 1;
        self.bodies = spawn_bodies(
            round_seed(self.run_seed, self.round_index),
            &self.arena,
            self.tuning.body_radius,
            self.tuning.body_mass,
        );
        self.state.reset();
        self.score = Score::default();
        self.detector = GateLineDetector::new();
        self.drag = None;
        self.time = 0.0;
        log::info!("Round {} started", self.round_index);
        self.events.push(GameEvent::Restarted);
        self.events.push(GameEvent::ScoreChanged(0));
    }

    // === Per-tick phases, called by `tick` in order ===

    /// Re-aim the preview for the active drag
    pub(crate) fn refresh_preview(&mut self) {
        let Some(drag) = self.drag else {
            return;
        };
        let (direction, force) = drag.aim(self.time, &self.tuning.launch);
        let body = &self.bodies[drag.body];
        let velocity = direction * force / body.mass;
        let preview = &self.tuning.preview;
        let points = predict(
            body.pos,
            velocity,
            preview.step_count,
            preview.step_duration,
            self.tuning.motion,
        )
        .collect();
        self.events.push(GameEvent::ShowTrajectoryPreview(points));
    }

    pub(crate) fn apply_contacts(&mut self, contacts: &[Contact]) {
        for contact in contacts {
            self.on_body_collided(contact.body, contact.other);
        }
    }

    pub(crate) fn check_gate(&mut self) {
        if !self.state.is_playing() {
            return;
        }
        let Some(partition) = self.detector.partition() else {
            return;
        };
        match self.detector.update(&mut self.bodies) {
            Some(Crossing::Validated) => self.on_successful_pass(partition.launched),
            Some(Crossing::NearMiss { gate, .. }) => self.events.push(GameEvent::NearMiss {
                body: partition.launched,
                gate,
            }),
            None => {}
        }
    }

    fn on_successful_pass(&mut self, id: BodyId) {
        let body = &mut self.bodies[id];
        body.grow(self.tuning.growth_multiplier);
        let growth = body.growth;
        let score = self.score.add(1);
        log::info!("Body {id} passed through! Score: {score}, growth {growth:.3}");
        self.events.push(GameEvent::BodyGrew { body: id, growth });
        self.events.push(GameEvent::ScoreChanged(score));
    }

    pub(crate) fn check_stopped(&mut self) {
        if !self.tuning.motion.settles() {
            return;
        }
        let threshold = self.tuning.stop_velocity_threshold;
        for id in 0..self.bodies.len() {
            if self.bodies[id].is_settling(threshold) {
                self.on_body_stopped(id);
            }
        }
    }

    /// Returns true if the round restarted
    pub(crate) fn advance_clock(&mut self, dt: f32) -> bool {
        self.time += dt;
        if self.state.advance(dt) {
            self.restart();
            return true;
        }
        false
    }
}
