//! Landing hero: avatar, name, cycling roles and the connect link.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

use leptos::prelude::*;

use crate::content::profile;

/// Number of decorative shapes floating behind the hero.
pub const SHAPE_COUNT: usize = 20;

/// Placement of one decorative shape, in percent of the hero box and seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeLayout {
    pub top_pct: usize,
    pub left_pct: usize,
    pub delay_s: f64,
    pub duration_s: usize,
}

/// Deterministic shape layout; identical on server and client so hydration matches.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn shape_layout(count: usize) -> Vec<ShapeLayout> {
    (0..count)
        .map(|i| ShapeLayout {
            top_pct: 15 + (i * 4) % 70,
            left_pct: 10 + (i * 5) % 80,
            delay_s: i as f64 * 0.4,
            duration_s: 18 + i % 12,
        })
        .collect()
}

#[component]
pub fn Hero() -> impl IntoView {
    let avatar_failed = RwSignal::new(false);

    let shapes = shape_layout(SHAPE_COUNT)
        .into_iter()
        .map(|s| {
            let style = format!(
                "top: {}%; left: {}%; animation-delay: {:.1}s; animation-duration: {}s;",
                s.top_pct, s.left_pct, s.delay_s, s.duration_s
            );
            view! { <div class="hero__shape" style=style></div> }
        })
        .collect_view();

    view! {
        <div class="hero">
            <div class="hero__shapes" aria-hidden="true">{shapes}</div>
            <div class="hero__content">
                <div class="hero__avatar-wrap">
                    <Show
                        when=move || !avatar_failed.get()
                        fallback=|| view! { <div class="hero__initials">{profile::INITIALS}</div> }
                    >
                        <img
                            class="hero__avatar"
                            src=profile::AVATAR_PATH
                            alt=profile::NAME
                            on:error=move |_| avatar_failed.set(true)
                        />
                    </Show>
                </div>
                <h1 class="hero__name">{profile::NAME}</h1>
                <div class="hero__roles">
                    <div class="hero__roles-track">
                        {profile::ROLES.iter().map(|role| view! { <p class="hero__role">{*role}</p> }).collect_view()}
                    </div>
                </div>
                <p class="hero__tagline">{profile::TAGLINE}</p>
                <div class="hero__actions">
                    <a class="btn btn--outline" href=profile::LINKEDIN_URL target="_blank" rel="noopener noreferrer">
                        "Let's Connect"
                    </a>
                </div>
            </div>
        </div>
    }
}
