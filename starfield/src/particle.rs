//! A single star: planar drift, depth decay, elastic bounce and respawn.

#[cfg(test)]
#[path = "particle_test.rs"]
mod particle_test;

use rand::Rng;

use crate::consts::{DEPTH_SPEED_RANGE, DRIFT_RANGE, MAX_DEPTH, SIZE_RANGE};
use crate::perspective::{Point, Sprite, perspective_scale, project_point};

/// One simulated particle in surface pixel space.
///
/// `z` stays in `(0, MAX_DEPTH]`. `x`/`y` are kept inside the surface by
/// flipping velocity after a crossing, so a particle may sit just outside the
/// bounds for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub size: f64,
    pub velocity_x: f64,
    pub velocity_y: f64,
    pub velocity_z: f64,
}

impl Particle {
    /// Create a particle with independently randomized state inside a
    /// `width × height` surface.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
        Self {
            x: uniform(rng, (0.0, width)),
            y: uniform(rng, (0.0, height)),
            // (0, MAX_DEPTH]: a fresh particle never starts on the viewer.
            z: MAX_DEPTH - uniform(rng, (0.0, MAX_DEPTH)),
            size: uniform(rng, SIZE_RANGE),
            velocity_x: uniform(rng, DRIFT_RANGE),
            velocity_y: uniform(rng, DRIFT_RANGE),
            velocity_z: uniform(rng, DEPTH_SPEED_RANGE),
        }
    }

    /// Advance one frame against the current surface size.
    ///
    /// Returns `true` when the particle passed the viewer and respawned at
    /// the far plane.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R, width: f64, height: f64) -> bool {
        self.z -= self.velocity_z;
        let respawned = self.z <= 0.0;
        if respawned {
            self.z = MAX_DEPTH;
            self.x = uniform(rng, (0.0, width));
            self.y = uniform(rng, (0.0, height));
        }

        self.x += self.velocity_x;
        self.y += self.velocity_y;

        if self.x < 0.0 || self.x > width {
            self.velocity_x = -self.velocity_x;
        }
        if self.y < 0.0 || self.y > height {
            self.velocity_y = -self.velocity_y;
        }

        respawned
    }

    /// Project onto a `width × height` surface.
    #[must_use]
    pub fn project(&self, width: f64, height: f64) -> Sprite {
        let scale = perspective_scale(self.z);
        Sprite {
            center: project_point(Point::new(self.x, self.y), scale, width, height),
            radius: self.size * scale,
            scale,
        }
    }
}

/// Uniform draw from `[lo, hi)`; an empty range yields `lo`.
fn uniform<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    if hi > lo { rng.random_range(lo..hi) } else { lo }
}
