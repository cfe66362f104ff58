#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::MAX_DEPTH;

const W: f64 = 800.0;
const H: f64 = 600.0;

fn field() -> Field {
    Field::with_seed(W, H, 1234)
}

// =============================================================
// Pool
// =============================================================

#[test]
fn new_field_holds_exactly_one_hundred_particles() {
    let f = field();
    assert_eq!(f.len(), 100);
    assert!(!f.is_empty());
}

#[test]
fn pool_size_is_stable_across_many_frames() {
    let mut f = field();
    for _ in 0..2_000 {
        f.step();
        assert_eq!(f.len(), PARTICLE_COUNT);
    }
}

#[test]
fn depth_stays_in_range_across_many_frames() {
    let mut f = field();
    for frame in 0..3_000 {
        f.step();
        for p in f.particles() {
            assert!(p.z > 0.0 && p.z <= MAX_DEPTH, "frame {frame}: z={}", p.z);
        }
    }
}

#[test]
fn every_particle_respawns_within_a_full_depth_cycle() {
    let mut f = field();
    let respawned: usize = (0..1_001).map(|_| f.step()).sum();
    assert!(respawned >= PARTICLE_COUNT);
}

// =============================================================
// Determinism
// =============================================================

#[test]
fn same_seed_replays_identical_trajectories() {
    let mut a = Field::with_seed(W, H, 99);
    let mut b = Field::with_seed(W, H, 99);
    for _ in 0..500 {
        a.step();
        b.step();
    }
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn different_seeds_diverge() {
    let a = Field::with_seed(W, H, 1);
    let b = Field::with_seed(W, H, 2);
    assert_ne!(a.particles(), b.particles());
}

#[test]
fn step_is_deterministic_for_a_hand_built_particle() {
    let mut f = field();
    f.particles_mut()[0] =
        Particle { x: W - 0.1, y: 300.0, z: 500.0, size: 2.0, velocity_x: 0.5, velocity_y: 0.0, velocity_z: 1.0 };

    f.step();
    let p = f.particles()[0];
    assert!(p.x > W);
    assert_eq!(p.velocity_x, -0.5);
    assert_eq!(p.z, 499.0);

    f.step();
    assert!(f.particles()[0].x < p.x);
}

#[test]
fn respawn_through_field_lands_in_bounds() {
    let mut f = field();
    f.particles_mut()[3] =
        Particle { x: -40.0, y: 900.0, z: 1.5, size: 2.0, velocity_x: 0.0, velocity_y: 0.0, velocity_z: 2.0 };
    f.step();
    let p = f.particles()[3];
    assert_eq!(p.z, 1000.0);
    assert!((0.0..W).contains(&p.x));
    assert!((0.0..H).contains(&p.y));
}

// =============================================================
// Resize
// =============================================================

#[test]
fn resize_updates_size_and_keeps_pool() {
    let mut f = field();
    let before = f.particles().to_vec();
    f.resize(320.0, 240.0);
    assert_eq!(f.size(), (320.0, 240.0));
    assert_eq!(f.len(), PARTICLE_COUNT);
    assert_eq!(f.particles(), before.as_slice());
}

#[test]
fn resize_to_zero_keeps_stepping_without_panicking() {
    let mut f = field();
    f.resize(0.0, 0.0);
    for _ in 0..1_200 {
        f.step();
    }
    assert_eq!(f.len(), PARTICLE_COUNT);
}

#[test]
fn shrunk_field_recovers_after_respawn_cycle() {
    let mut f = field();
    f.resize(100.0, 80.0);
    for _ in 0..1_001 {
        f.step();
    }
    for p in f.particles() {
        assert!(p.x >= -0.5 && p.x <= 100.5, "x={}", p.x);
        assert!(p.y >= -0.5 && p.y <= 80.5, "y={}", p.y);
    }
}

// =============================================================
// Sprites
// =============================================================

#[test]
fn sprites_follow_pool_order() {
    let f = field();
    let sprites: Vec<_> = f.sprites().collect();
    assert_eq!(sprites.len(), PARTICLE_COUNT);
    for (sprite, p) in sprites.iter().zip(f.particles()) {
        assert_eq!(*sprite, p.project(W, H));
    }
}

#[test]
fn sprite_scale_orders_by_depth() {
    let f = field();
    let mut pairs: Vec<_> = f.particles().iter().map(|p| (p.z, p.project(W, H).scale)).collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
    for w in pairs.windows(2) {
        if w[0].0 < w[1].0 {
            assert!(w[0].1 > w[1].1);
        }
    }
}
