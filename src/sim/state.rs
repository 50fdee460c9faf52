//! Round phase, score, and presentation events

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::BodyId;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Launches and selections accepted
    #[default]
    Playing,
    /// Round ended; waiting out the restart delay
    GameOver,
}

/// Two-state round machine with a scheduled restart
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameState {
    phase: GamePhase,
    /// Seconds left until restart (only while GameOver)
    restart_in: Option<f32>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The single gate for selection and launch acceptance
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// End the round. Returns true only on the first call.
    pub fn game_over(&mut self, restart_delay: f32) -> bool {
        if self.phase == GamePhase::GameOver {
            return false;
        }
        self.phase = GamePhase::GameOver;
        self.restart_in = Some(restart_delay);
        true
    }

    /// Count down the restart delay. Returns true when the restart is due.
    pub fn advance(&mut self, dt: f32) -> bool {
        let Some(remaining) = self.restart_in.as_mut() else {
            return false;
        };
        *remaining -= dt;
        if *remaining <= 0.0 {
            self.restart_in = None;
            return true;
        }
        false
    }

    pub fn restart_pending(&self) -> bool {
        self.restart_in.is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Monotonic score accumulator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score(u32);

impl Score {
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Add points, returning the new total
    pub fn add(&mut self, amount: u32) -> u32 {
        self.0 = self.0.saturating_add(amount);
        self.0
    }
}

/// Everything the presentation layer needs to react to, in emission order
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    ShowTrajectoryPreview(Vec<Vec2>),
    HideTrajectoryPreview,
    ShowGateLine { a: Vec2, b: Vec2, duration: f32 },
    BodySelected(BodyId),
    Launched { body: BodyId, impulse: Vec2 },
    NearMiss { body: BodyId, gate: BodyId },
    BodyGrew { body: BodyId, growth: f32 },
    ScoreChanged(u32),
    GameOver,
    RestartScheduled { delay: f32 },
    Restarted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_playing() {
        let state = GameState::new();
        assert!(state.is_playing());
        assert!(!state.restart_pending());
    }

    #[test]
    fn test_game_over_is_idempotent() {
        let mut state = GameState::new();
        assert!(state.game_over(1.0));
        assert!(!state.game_over(1.0));
        assert_eq!(state.phase(), GamePhase::GameOver);
        assert!(state.restart_pending());
    }

    #[test]
    fn test_second_game_over_does_not_extend_delay() {
        let mut state = GameState::new();
        state.game_over(1.0);
        assert!(!state.advance(0.6));
        state.game_over(1.0);
        assert!(state.advance(0.5));
    }

    #[test]
    fn test_advance_while_playing_is_noop() {
        let mut state = GameState::new();
        assert!(!state.advance(10.0));
        assert!(state.is_playing());
    }

    #[test]
    fn test_reset() {
        let mut state = GameState::new();
        state.game_over(1.0);
        state.reset();
        assert!(state.is_playing());
        assert!(!state.restart_pending());
    }

    #[test]
    fn test_score_accumulates() {
        let mut score = Score::default();
        assert_eq!(score.add(1), 1);
        assert_eq!(score.add(1), 2);
        assert_eq!(score.value(), 2);
    }
}
