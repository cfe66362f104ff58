//! Shared numeric constants for the starfield crate.

use crate::surface::Rgba;

// ── Pool ────────────────────────────────────────────────────────

/// Number of particles alive for the whole lifetime of a field.
pub const PARTICLE_COUNT: usize = 100;

// ── Depth ───────────────────────────────────────────────────────

/// Farthest depth; respawned particles start here.
pub const MAX_DEPTH: f64 = 1000.0;

/// Focal length of the perspective projection.
pub const FOCAL_LENGTH: f64 = 1000.0;

// ── Spawn ranges ────────────────────────────────────────────────

/// Base glow radius range in pixels, `[min, max)`.
pub const SIZE_RANGE: (f64, f64) = (1.0, 4.0);

/// Planar drift range per frame, `[min, max)`.
pub const DRIFT_RANGE: (f64, f64) = (-0.25, 0.25);

/// Depth decrease per frame, `[min, max)`.
pub const DEPTH_SPEED_RANGE: (f64, f64) = (1.0, 3.0);

// ── Palette ─────────────────────────────────────────────────────

/// Translucent overlay painted each frame instead of clearing.
pub const TRAIL_OVERLAY: Rgba = Rgba::new(10, 15, 30, 0.1);

/// Glow center color; alpha is scaled by depth.
pub const GLOW_CORE: Rgba = Rgba::new(59, 130, 246, 0.8);

/// Glow mid-radius color; alpha is scaled by depth.
pub const GLOW_HALO: Rgba = Rgba::new(14, 165, 233, 0.5);

/// Glow edge color, always fully transparent.
pub const GLOW_EDGE: Rgba = Rgba::new(6, 182, 212, 0.0);

/// Gradient offset of the mid-radius stop.
pub const GLOW_HALO_OFFSET: f64 = 0.5;
