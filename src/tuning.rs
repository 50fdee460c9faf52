//! Game balance and tuning values
//!
//! Everything a designer might tweak lives here. Loaded from JSON; any field
//! missing from the file keeps its default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::MotionModel;

/// Allowed slack when checking that the force weights sum to 1.0
const WEIGHT_TOLERANCE: f32 = 1e-3;

/// Reasons a tuning file is rejected
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("force weights must sum to 1.0 (distance {distance} + velocity {velocity})")]
    Weights { distance: f32, velocity: f32 },
    #[error("{name}: min {min} is greater than max {max}")]
    InvertedRange { name: &'static str, min: f32, max: f32 },
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },
}

/// Drag-to-impulse mapping
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchTuning {
    pub min_force: f32,
    pub max_force: f32,
    /// Releases shorter than this cancel the drag
    pub min_drag_distance: f32,
    /// Drags are clamped to this length
    pub max_drag_distance: f32,
    /// Drag speed (units/sec) that maps to the full velocity force
    pub velocity_normalization: f32,
    pub distance_weight: f32,
    pub velocity_weight: f32,
}

impl Default for LaunchTuning {
    fn default() -> Self {
        Self {
            min_force: MIN_LAUNCH_FORCE,
            max_force: MAX_LAUNCH_FORCE,
            min_drag_distance: MIN_DRAG_DISTANCE,
            max_drag_distance: MAX_DRAG_DISTANCE,
            velocity_normalization: VELOCITY_NORMALIZATION,
            distance_weight: DISTANCE_WEIGHT,
            velocity_weight: VELOCITY_WEIGHT,
        }
    }
}

/// Trajectory preview sampling
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewTuning {
    pub step_count: usize,
    pub step_duration: f32,
}

impl Default for PreviewTuning {
    fn default() -> Self {
        Self {
            step_count: TRAJECTORY_STEP_COUNT,
            step_duration: TRAJECTORY_STEP_DURATION,
        }
    }
}

/// Complete tuning set for one game variant
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub launch: LaunchTuning,
    pub preview: PreviewTuning,
    /// Shared by the trajectory preview and the reference solver
    pub motion: MotionModel,
    pub stop_velocity_threshold: f32,
    pub growth_multiplier: f32,
    pub body_radius: f32,
    pub body_mass: f32,
    pub gate_line_duration: f32,
    pub restart_delay: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            launch: LaunchTuning::default(),
            preview: PreviewTuning::default(),
            motion: MotionModel::default(),
            stop_velocity_threshold: STOP_VELOCITY_THRESHOLD,
            growth_multiplier: GROWTH_MULTIPLIER,
            body_radius: BODY_RADIUS,
            body_mass: BODY_MASS,
            gate_line_duration: GATE_LINE_DURATION,
            restart_delay: RESTART_DELAY,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        let l = &self.launch;

        // Comparisons are written so NaN fails them
        if !(((l.distance_weight + l.velocity_weight) - 1.0).abs() <= WEIGHT_TOLERANCE) {
            return Err(TuningError::Weights {
                distance: l.distance_weight,
                velocity: l.velocity_weight,
            });
        }
        if !(l.min_force <= l.max_force) {
            return Err(TuningError::InvertedRange {
                name: "launch force",
                min: l.min_force,
                max: l.max_force,
            });
        }
        if !(l.min_drag_distance <= l.max_drag_distance) {
            return Err(TuningError::InvertedRange {
                name: "drag distance",
                min: l.min_drag_distance,
                max: l.max_drag_distance,
            });
        }

        let positive = [
            ("max_drag_distance", l.max_drag_distance),
            ("velocity_normalization", l.velocity_normalization),
            ("step_duration", self.preview.step_duration),
            ("growth_multiplier", self.growth_multiplier),
            ("body_radius", self.body_radius),
            ("body_mass", self.body_mass),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(TuningError::NotPositive { name, value });
            }
        }

        let motion = match self.motion {
            MotionModel::Damped { drag } => ("drag", drag),
            MotionModel::Ballistic { gravity } => ("gravity", gravity),
        };
        let non_negative = [
            ("min_force", l.min_force),
            ("min_drag_distance", l.min_drag_distance),
            ("stop_velocity_threshold", self.stop_velocity_threshold),
            ("gate_line_duration", self.gate_line_duration),
            ("restart_delay", self.restart_delay),
            motion,
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0) {
                return Err(TuningError::Negative { name, value });
            }
        }

        Ok(())
    }

    /// This tuning if it validates, otherwise the defaults
    pub fn validated(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                log::warn!("Rejected tuning: {e}; using defaults");
                Self::default()
            }
        }
    }

    /// Load from a file, falling back to defaults on any problem
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Invalid tuning in {}: {e}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "growth_multiplier": 1.25 }"#).unwrap();
        assert_eq!(tuning.growth_multiplier, 1.25);
        assert_eq!(tuning.launch.max_force, MAX_LAUNCH_FORCE);
        assert_eq!(tuning.preview.step_count, TRAJECTORY_STEP_COUNT);
    }

    #[test]
    fn test_json_round_trip() {
        let json = Tuning::default().to_json().unwrap();
        let back = Tuning::from_json(&json).unwrap();
        assert_eq!(back.launch.min_drag_distance, MIN_DRAG_DISTANCE);
        assert_eq!(back.motion, MotionModel::default());
    }

    #[test]
    fn test_rejects_bad_weights() {
        let err = Tuning::from_json(r#"{ "launch": { "distance_weight": 0.9 } }"#).unwrap_err();
        assert!(matches!(err, TuningError::Weights { .. }));
    }

    #[test]
    fn test_rejects_inverted_force_range() {
        let mut tuning = Tuning::default();
        tuning.launch.min_force = 30.0;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::InvertedRange { name: "launch force", .. })
        ));
    }

    #[test]
    fn test_rejects_zero_radius() {
        let mut tuning = Tuning::default();
        tuning.body_radius = 0.0;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NotPositive { name: "body_radius", .. })
        ));
    }

    #[test]
    fn test_rejects_nan_values() {
        let mut tuning = Tuning::default();
        tuning.body_mass = f32::NAN;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NotPositive { name: "body_mass", .. })
        ));

        let mut tuning = Tuning::default();
        tuning.launch.distance_weight = f32::NAN;
        assert!(matches!(tuning.validate(), Err(TuningError::Weights { .. })));

        let mut tuning = Tuning::default();
        tuning.launch.max_force = f32::NAN;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::InvertedRange { name: "launch force", .. })
        ));

        let mut tuning = Tuning::default();
        tuning.restart_delay = f32::NAN;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::Negative { name: "restart_delay", .. })
        ));
    }

    #[test]
    fn test_rejects_negative_drag() {
        let mut tuning = Tuning::default();
        tuning.motion = MotionModel::Damped { drag: -1.0 };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::Negative { name: "drag", .. })
        ));
    }

    #[test]
    fn test_validated_falls_back_to_defaults() {
        let mut tuning = Tuning::default();
        tuning.launch.min_force = 30.0;
        let tuning = tuning.validated();
        assert_eq!(tuning.launch.min_force, MIN_LAUNCH_FORCE);

        let mut kept = Tuning::default();
        kept.growth_multiplier = 1.5;
        assert_eq!(kept.validated().growth_multiplier, 1.5);
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn test_ballistic_motion_from_json() {
        let tuning = Tuning::from_json(r#"{ "motion": { "Ballistic": { "gravity": 4.0 } } }"#)
            .unwrap();
        assert_eq!(tuning.motion, MotionModel::Ballistic { gravity: 4.0 });
    }
}
