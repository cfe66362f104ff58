//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::config::SiteConfig;
use crate::content::BRAND;
use crate::pages::landing::LandingPage;

/// Root application component.
///
/// Provides the site config as context so any component can read it, then
/// renders the single landing page.
#[component]
pub fn App(#[prop(default = SiteConfig::default())] config: SiteConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(config);

    view! {
        <Title text=BRAND/>
        <Meta name="description" content="Dive into SkillSwap and connect effortlessly with peers."/>
        <LandingPage/>
    }
}
