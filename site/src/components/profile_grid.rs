//! Grid of sample member profiles.

use leptos::prelude::*;

use crate::content::{PROFILES, Profile};

#[component]
pub fn ProfileGrid() -> impl IntoView {
    view! {
        <section id="feed" class="profile-grid">
            {PROFILES.iter().map(|profile| view! { <ProfileCard profile={*profile}/> }).collect_view()}
        </section>
    }
}

/// One member: monogram avatar, what they teach, what they want to learn.
#[component]
pub fn ProfileCard(profile: Profile) -> impl IntoView {
    let avatar_class = format!("profile-card__avatar {}", profile.accent.css_class());
    view! {
        <article class="profile-card">
            <div class=avatar_class aria-hidden="true">{profile.initial()}</div>
            <h3 class="profile-card__name">{profile.name}</h3>
            <p class="profile-card__skill">
                <span class="profile-card__label profile-card__label--teaching">"Teaching:"</span>
                " "
                {profile.teaching}
            </p>
            <p class="profile-card__skill">
                <span class="profile-card__label profile-card__label--learning">"Learning:"</span>
                " "
                {profile.learning}
            </p>
        </article>
    }
}
