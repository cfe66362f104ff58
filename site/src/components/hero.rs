//! Hero section: headline, invitation, call to action, and feature card.

use leptos::prelude::*;

use crate::content::{
    FEATURES, Feature, HERO_CTA, HERO_HEADLINE, HERO_HIGHLIGHT, HERO_INVITE, HERO_INVITE_EMPHASIS, HERO_LEDE, Icon,
};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero__copy">
                <h1 class="hero__headline">
                    {HERO_HEADLINE.iter().map(|line| view! { <span>{*line}</span><br/> }).collect_view()}
                    <span class="hero__highlight">{HERO_HIGHLIGHT}</span>
                </h1>
                <p class="hero__lede">
                    {HERO_LEDE}
                    <br/>
                    {HERO_INVITE}
                    " "
                    <span class="hero__emphasis">{HERO_INVITE_EMPHASIS}</span>
                </p>
                <a class="button button--primary button--large hero__cta" href="#features">
                    {HERO_CTA}
                    <span class="hero__cta-arrow" aria-hidden="true">"→"</span>
                </a>
            </div>
            <FeatureCard/>
        </section>
    }
}

/// Glass card with the video badge and one row per feature.
#[component]
fn FeatureCard() -> impl IntoView {
    view! {
        <div id="features" class="feature-card">
            <div class="feature-card__glow feature-card__glow--warm" aria-hidden="true"></div>
            <div class="feature-card__glow feature-card__glow--cool" aria-hidden="true"></div>
            <div class="feature-card__body">
                <div class="feature-card__badge accent--ocean" title={Icon::Video.label()}>
                    {Icon::Video.glyph()}
                </div>
                <ul class="feature-card__rows">
                    {FEATURES.iter().map(feature_row).collect_view()}
                </ul>
            </div>
        </div>
    }
}

fn feature_row(feature: &Feature) -> impl IntoView + use<> {
    let badge_class = format!("feature-row__icon {}", feature.accent.css_class());
    view! {
        <li class="feature-row">
            <span class=badge_class title={feature.icon.label()}>{feature.icon.glyph()}</span>
            <span class="feature-row__text">
                <span class="feature-row__title">{feature.title}</span>
                <span class="feature-row__caption">{feature.caption}</span>
            </span>
        </li>
    }
}
