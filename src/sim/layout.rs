//! Seeded placement of the three bodies at round start

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::body::MovableBody;
use super::collision::Arena;
use crate::consts::{BODY_COUNT, SPAWN_SEPARATION};

/// Candidate draws per body before giving up on random placement
const MAX_ATTEMPTS: u32 = 64;

/// Seed for the `round`-th round of a run
pub fn round_seed(run_seed: u64, round: u32) -> u64 {
    run_seed ^ (round as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Place bodies inside the arena, keeping them apart and off the walls
pub fn spawn_bodies(seed: u64, arena: &Arena, radius: f32, mass: f32) -> Vec<MovableBody> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let margin = radius * 2.0;
    let max = (arena.half_extents - Vec2::splat(margin)).max(Vec2::ZERO);
    let min_sep = radius * SPAWN_SEPARATION;

    let mut placed: Vec<Vec2> = Vec::with_capacity(BODY_COUNT);
    for _ in 0..BODY_COUNT {
        let spot = (0..MAX_ATTEMPTS)
            .map(|_| {
                Vec2::new(
                    rng.random_range(-max.x..=max.x),
                    rng.random_range(-max.y..=max.y),
                )
            })
            .find(|p| placed.iter().all(|q| q.distance(*p) >= min_sep));
        match spot {
            Some(p) => placed.push(p),
            None => {
                log::warn!("Random layout failed for seed {seed}, using fixed layout");
                return fixed_layout(arena, radius, mass);
            }
        }
    }

    placed
        .into_iter()
        .enumerate()
        .map(|(id, pos)| MovableBody::new(id, pos, radius, mass))
        .collect()
}

/// Triangle in the middle of the arena
pub fn fixed_layout(arena: &Arena, radius: f32, mass: f32) -> Vec<MovableBody> {
    let h = arena.half_extents;
    let spots = [
        Vec2::new(0.0, -h.y * 0.5),
        Vec2::new(-h.x * 0.5, h.y * 0.25),
        Vec2::new(h.x * 0.5, h.y * 0.25),
    ];
    spots
        .into_iter()
        .enumerate()
        .map(|(id, pos)| MovableBody::new(id, pos, radius, mass))
        .collect()
}
