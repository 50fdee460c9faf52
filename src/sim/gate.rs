//! Gate line crossing detection
//!
//! The launched body scores by crossing the line through the two gate
//! bodies. Crossings are detected as a flip of side between ticks, then
//! checked against the swept path so that skimming a gate body does not
//! count.

use glam::Vec2;

use crate::consts::BODY_COUNT;
use crate::{cross2, point_segment_distance};

use super::body::{BodyId, MovableBody};

/// Whether `p` lies strictly left of the directed line `a -> b`
#[inline]
pub fn is_on_left_side(p: Vec2, a: Vec2, b: Vec2) -> bool {
    cross2(a, b, p) > 0.0
}

/// Result of a side flip
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Crossing {
    /// Clean pass between the gates
    Validated,
    /// Swept path came within touching distance of a gate body
    NearMiss { gate: BodyId, distance: f32 },
}

/// The launched body and its two gates for the current selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GatePartition {
    pub launched: BodyId,
    pub gates: [BodyId; 2],
}

impl GatePartition {
    /// Split the round's bodies into one launched body and the other two, in index order
    pub fn around(launched: BodyId) -> Self {
        debug_assert!(launched < BODY_COUNT);
        let mut gates = [0; 2];
        let mut i = 0;
        for id in 0..BODY_COUNT {
            if id != launched {
                gates[i] = id;
                i += 1;
            }
        }
        Self { launched, gates }
    }
}

/// Frame-persistent side tracking for one launch
#[derive(Debug, Clone, Default)]
pub struct GateLineDetector {
    partition: Option<GatePartition>,
    previous_pos: Vec2,
    was_on_left: bool,
}

impl GateLineDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current partition, if a body has been selected and not yet scored
    pub fn partition(&self) -> Option<GatePartition> {
        self.partition
    }

    /// Engage for a newly selected body
    pub fn engage(&mut self, bodies: &[MovableBody], launched: BodyId) -> GatePartition {
        let partition = GatePartition::around(launched);
        let [a, b] = partition.gates;
        self.previous_pos = bodies[launched].pos;
        self.was_on_left = is_on_left_side(self.previous_pos, bodies[a].pos, bodies[b].pos);
        self.partition = Some(partition);
        partition
    }

    pub fn disengage(&mut self) {
        self.partition = None;
    }

    /// Inspect post-integration positions for one tick.
    ///
    /// Only runs while the launched body is moving and has not yet scored
    /// this launch. A validated crossing marks the body and disengages.
    pub fn update(&mut self, bodies: &mut [MovableBody]) -> Option<Crossing> {
        let partition = self.partition?;
        let launched = &bodies[partition.launched];
        if !launched.is_moving || launched.has_crossed_gate {
            return None;
        }

        let [a, b] = partition.gates;
        let current = launched.pos;
        let on_left = is_on_left_side(current, bodies[a].pos, bodies[b].pos);

        let mut result = None;
        if on_left != self.was_on_left {
            result = Some(match swept_near_miss(self.previous_pos, current, bodies, partition) {
                Some((gate, distance)) => {
                    log::debug!("Too close to body {gate}: distance {distance:.3}");
                    Crossing::NearMiss { gate, distance }
                }
                None => {
                    bodies[partition.launched].has_crossed_gate = true;
                    Crossing::Validated
                }
            });
        }

        self.previous_pos = current;
        self.was_on_left = on_left;
        if result == Some(Crossing::Validated) {
            self.disengage();
        }
        result
    }
}

/// First gate body the segment `[from, to]` passes within touching distance of
pub fn swept_near_miss(
    from: Vec2,
    to: Vec2,
    bodies: &[MovableBody],
    partition: GatePartition,
) -> Option<(BodyId, f32)> {
    let launched_radius = bodies[partition.launched].radius();
    partition.gates.iter().find_map(|&gate| {
        let body = &bodies[gate];
        let distance = point_segment_distance(body.pos, from, to);
        (distance < launched_radius + body.radius()).then_some((gate, distance))
    })
}
