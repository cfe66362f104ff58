#[cfg(test)]
#[path = "perspective_test.rs"]
mod perspective_test;

use crate::consts::FOCAL_LENGTH;

/// A point in surface pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A particle after projection: where and how large to draw it.
///
/// `scale` is the perspective factor in `(0, 1]` and also drives glow opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub center: Point,
    pub radius: f64,
    pub scale: f64,
}

/// Perspective factor for a depth: `1` at the viewer, approaching `0` far away.
#[must_use]
pub fn perspective_scale(z: f64) -> f64 {
    FOCAL_LENGTH / (FOCAL_LENGTH + z)
}

/// Pull `point` toward the center of a `width × height` surface by `scale`.
#[must_use]
pub fn project_point(point: Point, scale: f64, width: f64, height: f64) -> Point {
    let half_w = width / 2.0;
    let half_h = height / 2.0;
    Point {
        x: (point.x - half_w) * scale + half_w,
        y: (point.y - half_h) * scale + half_h,
    }
}
