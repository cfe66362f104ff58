//! The landing page: background decoration plus the static marketing content.

use leptos::prelude::*;

use crate::components::background::Background;
use crate::components::hero::Hero;
use crate::components::nav_bar::NavBar;
use crate::components::profile_grid::ProfileGrid;
use crate::config::SiteConfig;

/// Landing page.
///
/// Reads [`SiteConfig`] from context (falling back to defaults) to choose the
/// background. Nothing else on the page depends on the background.
#[component]
pub fn LandingPage() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    view! {
        <div class="landing">
            <Background kind=config.background seed=config.seed/>
            <NavBar/>
            <main class="landing__main">
                <Hero/>
                <ProfileGrid/>
            </main>
        </div>
    }
}
