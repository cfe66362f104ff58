//! Browser binding over `web-sys`.
//!
//! This module is the only place that touches the DOM: the 2D canvas context,
//! `requestAnimationFrame` / `cancelAnimationFrame`, and the window `resize`
//! event. Everything it drives lives in [`crate::animator`].
//!
//! All fallible DOM calls are mapped to [`SurfaceError`] or logged; none of
//! them abort the page.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::{Rc, Weak};

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::animator::{Animator, FrameHandle, Host};
use crate::surface::{Glow, Rgba, Surface, SurfaceError};

#[cfg(test)]
#[path = "web_test.rs"]
mod web_test;

/// A `<canvas>` element and its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap `canvas`, or `None` if it has no 2D context.
    #[must_use]
    pub fn from_canvas(canvas: HtmlCanvasElement) -> Option<Self> {
        let Ok(Some(context)) = canvas.get_context("2d") else {
            return None;
        };
        let Ok(ctx) = context.dyn_into::<CanvasRenderingContext2d>() else {
            return None;
        };
        Some(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (f64::from(self.canvas.width()), f64::from(self.canvas.height()))
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.canvas.set_width(to_px(width));
        self.canvas.set_height(to_px(height));
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) -> Result<(), SurfaceError> {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill_rect(x, y, width, height);
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn fill_glow(&mut self, glow: &Glow) -> Result<(), SurfaceError> {
        let Glow { center, radius, stops } = *glow;
        let gradient = self
            .ctx
            .create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius)
            .map_err(|e| SurfaceError::Gradient(describe(&e)))?;
        for stop in stops {
            gradient
                .add_color_stop(stop.offset as f32, &stop.color.to_string())
                .map_err(|e| SurfaceError::Gradient(describe(&e)))?;
        }

        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        self.ctx
            .arc(center.x, center.y, radius, 0.0, TAU)
            .map_err(|e| SurfaceError::Path(describe(&e)))?;
        self.ctx.fill();
        Ok(())
    }
}

/// [`Host`] backed by the browser window.
///
/// The frame and resize callbacks are created once and hold only a weak
/// reference to the animator, so the animator can own its host.
pub struct BrowserHost {
    window: Window,
    canvas: HtmlCanvasElement,
    on_frame: Closure<dyn FnMut(f64)>,
    on_resize: Closure<dyn FnMut()>,
}

impl BrowserHost {
    fn new(window: Window, canvas: HtmlCanvasElement, target: &Weak<RefCell<Animator<BrowserHost>>>) -> Self {
        let frame_target = Weak::clone(target);
        let on_frame = Closure::wrap(Box::new(move |_ts: f64| {
            if let Some(animator) = frame_target.upgrade() {
                animator.borrow_mut().on_frame();
            }
        }) as Box<dyn FnMut(f64)>);

        let resize_target = Weak::clone(target);
        let on_resize = Closure::wrap(Box::new(move || {
            if let Some(animator) = resize_target.upgrade() {
                animator.borrow_mut().on_resize();
            }
        }) as Box<dyn FnMut()>);

        Self { window, canvas, on_frame, on_resize }
    }
}

impl Host for BrowserHost {
    type Surface = CanvasSurface;

    fn viewport(&self) -> (f64, f64) {
        (read_px(self.window.inner_width()), read_px(self.window.inner_height()))
    }

    fn acquire_surface(&mut self) -> Option<CanvasSurface> {
        CanvasSurface::from_canvas(self.canvas.clone())
    }

    fn request_frame(&mut self) -> Option<FrameHandle> {
        match self.window.request_animation_frame(self.on_frame.as_ref().unchecked_ref()) {
            Ok(id) => Some(FrameHandle(id)),
            Err(err) => {
                log::warn!("starfield: requestAnimationFrame failed: {}", describe(&err));
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Err(err) = self.window.cancel_animation_frame(handle.0) {
            log::debug!("starfield: cancelAnimationFrame failed: {}", describe(&err));
        }
    }

    fn listen_resize(&mut self) -> bool {
        self.window
            .add_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
            .is_ok()
    }

    fn unlisten_resize(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
        {
            log::debug!("starfield: removing resize listener failed: {}", describe(&err));
        }
    }
}

/// A running background animation. Dropping it (or calling
/// [`BrowserAnimator::teardown`]) stops the frame loop and the resize listener.
pub struct BrowserAnimator {
    inner: Rc<RefCell<Animator<BrowserHost>>>,
}

impl BrowserAnimator {
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.inner.borrow().is_running()
    }

    pub fn teardown(&self) {
        self.inner.borrow_mut().teardown();
    }
}

/// Start the star field on `canvas`, sized to the window.
///
/// `seed` fixes the particle trajectories; `None` draws one from
/// `Math.random`. Returns `None` outside a browser window. If the canvas has
/// no 2D context the returned animator is inert.
#[must_use]
pub fn mount(canvas: HtmlCanvasElement, seed: Option<u64>) -> Option<BrowserAnimator> {
    let window = web_sys::window()?;
    let rng = SmallRng::seed_from_u64(seed.unwrap_or_else(entropy_seed));
    let inner = Rc::new_cyclic(|weak| {
        let host = BrowserHost::new(window, canvas, weak);
        RefCell::new(Animator::mount(host, rng))
    });
    Some(BrowserAnimator { inner })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn entropy_seed() -> u64 {
    (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_px(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round().min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

fn read_px(value: Result<JsValue, JsValue>) -> f64 {
    match value {
        Ok(v) => v.as_f64().unwrap_or(0.0),
        Err(_) => 0.0,
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
