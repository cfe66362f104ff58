//! Full-viewport decoration layered behind the page.
//!
//! ARCHITECTURE
//! ============
//! [`Background`] picks one decoration from [`BackgroundKind`]. The particle
//! variant is a bridge to the imperative `starfield` animator: it mounts on
//! the client once the canvas exists and tears the animator down when the
//! component is cleaned up, cancelling the frame loop and the resize listener.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::config::BackgroundKind;
use crate::content::{EDGES, ILLUSTRATION_VIEWBOX, NODES};

/// Decoration selected by configuration.
#[component]
pub fn Background(kind: BackgroundKind, #[prop(default = None)] seed: Option<u64>) -> impl IntoView {
    match kind {
        BackgroundKind::Particles => view! { <ParticleBackground seed=seed/> }.into_any(),
        BackgroundKind::Illustration => view! { <IllustrationBackground/> }.into_any(),
    }
}

/// Animated star field drawn on a fixed canvas.
///
/// Renders nothing but the empty canvas when the browser has no 2D context;
/// the page content is unaffected.
#[component]
pub fn ParticleBackground(#[prop(default = None)] seed: Option<u64>) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "csr")]
    {
        let animator = StoredValue::new_local(None::<starfield::web::BrowserAnimator>);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if animator.with_value(Option::is_some) {
                return;
            }
            let mounted = starfield::web::mount(canvas, seed);
            if !mounted.as_ref().is_some_and(starfield::web::BrowserAnimator::is_running) {
                log::debug!("site: star field unavailable; showing static background");
            }
            animator.set_value(mounted);
        });
        on_cleanup(move || {
            animator.update_value(|slot| {
                if let Some(running) = slot.take() {
                    running.teardown();
                }
            });
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = seed;

    view! {
        <canvas class="background background--particles" node_ref=canvas_ref aria-hidden="true"></canvas>
        <div class="background__tint" aria-hidden="true"></div>
    }
}

/// Static SVG graphic: members linked by skill exchanges.
#[component]
pub fn IllustrationBackground() -> impl IntoView {
    let view_box = format!("0 0 {ILLUSTRATION_VIEWBOX} {ILLUSTRATION_VIEWBOX}");
    let edges = EDGES
        .iter()
        .map(|&(a, b)| {
            let (from, to) = (NODES[a], NODES[b]);
            view! {
                <line
                    class="illustration__edge"
                    x1={from.x.to_string()}
                    y1={from.y.to_string()}
                    x2={to.x.to_string()}
                    y2={to.y.to_string()}
                ></line>
            }
        })
        .collect_view();
    let nodes = NODES
        .iter()
        .map(|node| {
            view! {
                <circle class="illustration__node" cx={node.x.to_string()} cy={node.y.to_string()} r={node.r.to_string()} fill=node.accent.hex()></circle>
            }
        })
        .collect_view();

    view! {
        <div class="background background--illustration" aria-hidden="true">
            <svg class="illustration" viewBox=view_box preserveAspectRatio="xMidYMid slice">
                <g>{edges}</g>
                <g>{nodes}</g>
            </svg>
        </div>
        <div class="background__tint" aria-hidden="true"></div>
    }
}
