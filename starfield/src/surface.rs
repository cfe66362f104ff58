//! The drawing-surface contract the renderer paints into.
//!
//! The browser implementation lives in [`crate::web`]; tests use recording
//! fakes. Only three primitives are needed: size, filled rectangles, and
//! radial-gradient discs.

use std::fmt;

use thiserror::Error;

use crate::perspective::Point;

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

/// Failure reported by a drawing primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("gradient rejected: {0}")]
    Gradient(String),
    #[error("path rejected: {0}")]
    Path(String),
}

/// An sRGB color with straight alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with alpha multiplied by `factor`.
    #[must_use]
    pub fn fade(self, factor: f64) -> Self {
        Self { a: self.a * factor, ..self }
    }
}

/// CSS `rgba(...)` notation, accepted by canvas fill styles and color stops.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// One color stop of a radial gradient; `offset` is in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgba,
}

/// A filled disc shaded by a radial gradient from its center to its rim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub center: Point,
    pub radius: f64,
    pub stops: [GradientStop; 3],
}

/// A 2D raster target sized in pixels.
pub trait Surface {
    /// Current `(width, height)`.
    fn size(&self) -> (f64, f64);

    /// Change the pixel size. Implementations may discard prior contents.
    fn resize(&mut self, width: f64, height: f64);

    /// Fill an axis-aligned rectangle with a flat color, blending over what
    /// is already there.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backend rejects the call.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) -> Result<(), SurfaceError>;

    /// Fill a circle with a radial gradient.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backend cannot build the gradient or path.
    fn fill_glow(&mut self, glow: &Glow) -> Result<(), SurfaceError>;
}
