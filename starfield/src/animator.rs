//! Frame-loop lifecycle: mount, per-frame update, resize, teardown.
//!
//! ARCHITECTURE
//! ============
//! [`Animator`] holds all lifecycle logic and talks to the outside world only
//! through [`Host`], so it runs under `cargo test` with a fake host. The
//! browser host lives in [`crate::web`].
//!
//! The loop is driven by the host's refresh-synchronized callback: every
//! [`Animator::on_frame`] schedules the next one and keeps its handle, so
//! [`Animator::teardown`] can cancel it. A `mounted` flag is checked at the
//! top of each callback as well, for hosts that deliver a frame already in
//! flight after cancellation.

use rand::Rng;
use rand::rngs::SmallRng;

use crate::field::Field;
use crate::render;
use crate::surface::Surface;

#[cfg(test)]
#[path = "animator_test.rs"]
mod animator_test;

/// Opaque id of a scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Everything the animator needs from its environment.
pub trait Host {
    type Surface: Surface;

    /// Current viewport `(width, height)` in pixels.
    fn viewport(&self) -> (f64, f64);

    /// Obtain the drawing surface, or `None` if the host cannot provide one.
    fn acquire_surface(&mut self) -> Option<Self::Surface>;

    /// Ask for [`Animator::on_frame`] on the next display refresh.
    fn request_frame(&mut self) -> Option<FrameHandle>;

    /// Cancel a callback returned by [`Host::request_frame`].
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Start delivering [`Animator::on_resize`] on viewport changes.
    /// Returns `false` if the listener could not be attached.
    fn listen_resize(&mut self) -> bool;

    /// Stop delivering resize notifications.
    fn unlisten_resize(&mut self);
}

struct Running<S, R> {
    surface: S,
    field: Field<R>,
    pending: Option<FrameHandle>,
    listening: bool,
}

/// The particle field animator bound to a host.
///
/// An animator whose host had no surface is *inert*: it never schedules a
/// frame, never listens for resize, and ignores every callback.
pub struct Animator<H: Host, R = SmallRng> {
    host: H,
    running: Option<Running<H::Surface, R>>,
    mounted: bool,
}

impl<H: Host, R: Rng> Animator<H, R> {
    /// Size the surface to the viewport, seed the field, attach the resize
    /// listener and schedule the first frame.
    #[must_use = "dropping the animator tears it down"]
    pub fn mount(mut host: H, rng: R) -> Self {
        let Some(mut surface) = host.acquire_surface() else {
            log::debug!("starfield: no drawing surface; background animation disabled");
            return Self { host, running: None, mounted: false };
        };

        let (width, height) = host.viewport();
        surface.resize(width, height);
        let field = Field::new(width, height, rng);
        let listening = host.listen_resize();
        let pending = host.request_frame();
        log::debug!(
            "starfield: mounted {width}x{height} with {} particles (frame scheduled: {})",
            field.len(),
            pending.is_some()
        );

        Self { host, running: Some(Running { surface, field, pending, listening }), mounted: true }
    }

    /// One display refresh: step the field, draw it, schedule the next frame.
    ///
    /// A draw failure is logged and the loop continues; the trail overlay
    /// repaints over any partial frame.
    pub fn on_frame(&mut self) {
        if !self.mounted {
            return;
        }
        let Some(run) = self.running.as_mut() else {
            return;
        };

        run.pending = None;
        run.field.step();
        if let Err(err) = render::draw_frame(&mut run.surface, &run.field) {
            log::warn!("starfield: frame draw failed: {err}");
        }
        run.pending = self.host.request_frame();
    }

    /// Match the surface and field to the current viewport. Resizing the
    /// surface discards its contents; particles are left where they are.
    pub fn on_resize(&mut self) {
        if !self.mounted {
            return;
        }
        let Some(run) = self.running.as_mut() else {
            return;
        };

        let (width, height) = self.host.viewport();
        run.surface.resize(width, height);
        run.field.resize(width, height);
    }
}

impl<H: Host, R> Animator<H, R> {
    /// Cancel the pending frame and detach the resize listener. Safe to call
    /// more than once.
    pub fn teardown(&mut self) {
        if let Some(run) = self.running.as_mut() {
            if let Some(handle) = run.pending.take() {
                self.host.cancel_frame(handle);
            }
            if run.listening {
                self.host.unlisten_resize();
                run.listening = false;
            }
        }
        if self.mounted {
            log::debug!("starfield: torn down");
        }
        self.mounted = false;
    }

    /// `true` while mounted with a surface and not yet torn down.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.mounted && self.running.is_some()
    }

    #[must_use]
    pub fn field(&self) -> Option<&Field<R>> {
        self.running.as_ref().map(|run| &run.field)
    }

    /// Mutable pool access, e.g. for replaying a hand-built scenario.
    pub fn field_mut(&mut self) -> Option<&mut Field<R>> {
        self.running.as_mut().map(|run| &mut run.field)
    }

    #[must_use]
    pub fn surface(&self) -> Option<&H::Surface> {
        self.running.as_ref().map(|run| &run.surface)
    }

    /// Handle of the frame currently scheduled, if any.
    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.running.as_ref().and_then(|run| run.pending)
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }
}

impl<H: Host, R> Drop for Animator<H, R> {
    fn drop(&mut self) {
        self.teardown();
    }
}
