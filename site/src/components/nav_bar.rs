//! Top navigation: brand, in-page anchors, and account buttons.

use leptos::prelude::*;

use crate::content::{BRAND, Icon, NAV_LINKS};

/// Site header.
///
/// The account buttons are presentational; the landing page has no sign-in
/// flow.
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <header class="nav-bar">
            <nav class="nav-bar__inner">
                <a class="nav-bar__brand" href="#home">
                    <span class="nav-bar__logo accent--ocean" aria-hidden="true">{Icon::Users.glyph()}</span>
                    <span class="nav-bar__name">{BRAND}</span>
                </a>
                <div class="nav-bar__links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <a class="nav-bar__link" href=link.href()>{link.label}</a> })
                        .collect_view()}
                </div>
                <div class="nav-bar__actions">
                    <button class="button button--ghost" type="button">"Log In"</button>
                    <button class="button button--primary" type="button">"Sign Up"</button>
                </div>
            </nav>
        </header>
    }
}
