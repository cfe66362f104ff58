//! # site
//!
//! Leptos + WASM landing page for SkillSwap, a peer-to-peer skill exchange.
//!
//! The page is static markup (navigation, hero, sample profiles) layered over
//! a pluggable background decoration: the animated `starfield` canvas or a
//! static SVG illustration, chosen by [`config::SiteConfig`].
//!
//! Browser-only code is gated behind the `csr` feature; the default build
//! compiles the markup and pure helpers so they can be tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod pages;

/// WASM entry point: install logging, read the query-string config, mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;
    use crate::config::SiteConfig;

    console_error_panic_hook::set_once();

    let query = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let (config, errors) = SiteConfig::from_query_lossy(&query);

    if let Some(level) = config.log_level.to_level() {
        let _ = console_log::init_with_level(level);
    }
    for err in &errors {
        log::warn!("site: ignoring query parameter: {err}");
    }
    log::debug!("site: starting with {config:?}");

    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}
