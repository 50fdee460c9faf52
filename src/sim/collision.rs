//! Contact detection for circles in a rectangular arena
//!
//! Only detection lives here. Any touch while a body is moving ends the
//! round, so there is no response beyond reporting the contact.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{BodyId, MovableBody};
use crate::consts::{ARENA_HALF_HEIGHT, ARENA_HALF_WIDTH};

/// Axis-aligned play area centered on the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub half_extents: Vec2,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            half_extents: Vec2::new(ARENA_HALF_WIDTH, ARENA_HALF_HEIGHT),
        }
    }
}

/// What a body touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactTarget {
    Wall,
    Body(BodyId),
}

/// A touch reported by the physics step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub body: BodyId,
    pub other: ContactTarget,
}

/// Whether a circle pokes past any arena wall
pub fn circle_hits_wall(pos: Vec2, radius: f32, arena: &Arena) -> bool {
    let h = arena.half_extents;
    pos.x.abs() + radius > h.x || pos.y.abs() + radius > h.y
}

/// Whether two circles overlap (touching edges do not count)
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let reach = ra + rb;
    a.distance_squared(b) < reach * reach
}

/// Collect every wall and pair contact among `bodies`, in index order
pub fn find_contacts(bodies: &[MovableBody], arena: &Arena, contacts: &mut Vec<Contact>) {
    for (i, body) in bodies.iter().enumerate() {
        if circle_hits_wall(body.pos, body.radius(), arena) {
            contacts.push(Contact {
                body: body.id,
                other: ContactTarget::Wall,
            });
        }
        for other in &bodies[i + 1..] {
            if circles_overlap(body.pos, body.radius(), other.pos, other.radius()) {
                contacts.push(Contact {
                    body: body.id,
                    other: ContactTarget::Body(other.id),
                });
            }
        }
    }
}
