//! Rendering: paints one frame of a [`Field`] onto a [`Surface`].
//!
//! Read-only over the field; it produces pixels and mutates nothing else.
//! Fallible surface calls propagate via `Result<(), SurfaceError>` and the
//! frame loop in [`crate::animator`] decides what to do with a failure.

use crate::consts::{GLOW_CORE, GLOW_EDGE, GLOW_HALO, GLOW_HALO_OFFSET, TRAIL_OVERLAY};
use crate::field::Field;
use crate::perspective::Sprite;
use crate::surface::{Glow, GradientStop, Surface, SurfaceError};

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

/// Draw the full frame: trail overlay first, then one glow per particle in
/// pool order.
///
/// The overlay is translucent so earlier frames fade out instead of being
/// cleared.
///
/// # Errors
///
/// Returns the first error reported by the surface.
pub fn draw_frame<S, R>(surface: &mut S, field: &Field<R>) -> Result<(), SurfaceError>
where
    S: Surface + ?Sized,
{
    let (width, height) = surface.size();
    surface.fill_rect(0.0, 0.0, width, height, TRAIL_OVERLAY)?;

    for sprite in field.sprites() {
        surface.fill_glow(&glow_for(&sprite))?;
    }
    Ok(())
}

/// Glow description for a projected particle; nearer sprites are more opaque.
#[must_use]
pub fn glow_for(sprite: &Sprite) -> Glow {
    Glow {
        center: sprite.center,
        radius: sprite.radius,
        stops: [
            GradientStop { offset: 0.0, color: GLOW_CORE.fade(sprite.scale) },
            GradientStop { offset: GLOW_HALO_OFFSET, color: GLOW_HALO.fade(sprite.scale) },
            GradientStop { offset: 1.0, color: GLOW_EDGE },
        ],
    }
}
