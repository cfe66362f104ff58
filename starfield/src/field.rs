//! The particle pool: a fixed set of stars plus the random source that seeds
//! and respawns them.
//!
//! DESIGN
//! ======
//! The random source is injected so a seeded field replays exactly; the
//! browser seeds from `Math.random`, tests seed with a constant.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::consts::PARTICLE_COUNT;
use crate::particle::Particle;
use crate::perspective::Sprite;

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

/// Fixed-size particle pool bound to a surface size.
///
/// Particles are created once in [`Field::new`] and only ever mutated in
/// place; the pool length never changes.
#[derive(Debug, Clone)]
pub struct Field<R = SmallRng> {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    rng: R,
}

impl Field<SmallRng> {
    /// Field driven by a [`SmallRng`] seeded with `seed`.
    #[must_use]
    pub fn with_seed(width: f64, height: f64, seed: u64) -> Self {
        Self::new(width, height, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Field<R> {
    /// Seed [`PARTICLE_COUNT`] particles inside a `width × height` surface.
    #[must_use]
    pub fn new(width: f64, height: f64, mut rng: R) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::spawn(&mut rng, width, height))
            .collect();
        Self { particles, width, height, rng }
    }

    /// Track a new surface size. Particles keep their positions; any left
    /// outside the new bounds are handled by the bounce check.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Advance every particle one frame, in pool order. Returns how many
    /// respawned at the far plane.
    pub fn step(&mut self) -> usize {
        let (width, height) = (self.width, self.height);
        let rng = &mut self.rng;
        self.particles
            .iter_mut()
            .map(|p| p.advance(rng, width, height))
            .filter(|&respawned| respawned)
            .count()
    }
}

impl<R> Field<R> {
    /// Projected sprites in pool order.
    #[must_use]
    pub fn sprites(&self) -> impl Iterator<Item = Sprite> + '_ {
        self.particles.iter().map(|p| p.project(self.width, self.height))
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable view of the pool. A slice, so the pool cannot grow or shrink.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Surface size the field currently simulates against.
    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}
