//! Fixed top navigation with section highlighting and a mobile menu.
//!
//! Clicks only record a scroll request in [`NavState`]; the home page owns
//! the section elements and performs the scroll. From another route the
//! navbar first routes to `/`, and the home page picks the request up once
//! it has mounted.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::content::profile;
use crate::state::nav::{NavState, Section};
use crate::util::dom;

#[component]
pub fn Navbar(nav: RwSignal<NavState>) -> impl IntoView {
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    // Route home when a section was requested from another page.
    Effect::new(move || {
        let pending = nav.with(|n| n.pending.is_some());
        if pending && pathname.get() != "/" {
            navigate("/", NavigateOptions::default());
        }
    });

    // Any route change closes the mobile menu.
    Effect::new(move || {
        pathname.track();
        nav.update(NavState::close_menu);
    });

    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && nav.with_untracked(|n| n.menu_open) {
            nav.update(NavState::close_menu);
        }
    });
    on_cleanup(move || handle.remove());

    // Scroll flags follow the window on every route, not just the home page.
    let scroll = window_event_listener(leptos::ev::scroll, move |_| {
        nav.update(|n| n.observe_flags(dom::scroll_y()));
    });
    on_cleanup(move || scroll.remove());

    let go = move |section: Section| {
        nav.update(|n| {
            n.request(section);
        });
    };
    let is_active = move |section: Section| nav.with(|n| n.active == section) && pathname.get() == "/";

    view! {
        <nav class="navbar" class:navbar--scrolled=move || nav.with(|n| n.scrolled)>
            <div class="navbar__inner">
                <button class="navbar__brand" on:click=move |_| go(Section::Home) aria-label="Navigate to Home">
                    <span class="navbar__logo">{profile::BRAND}</span>
                </button>

                <div class="navbar__links">
                    {Section::NAV_ITEMS
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    class="navbar__link"
                                    class:navbar__link--active=move || is_active(section)
                                    on:click=move |_| go(section)
                                    aria-label=format!("Navigate to {}", section.label())
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                    <A href="/about" attr:class="navbar__link">"About"</A>
                    <A href="/blog" attr:class="navbar__link">"Blog"</A>
                </div>

                <button
                    class="btn btn--primary navbar__contact"
                    class:navbar__link--active=move || is_active(Section::Contact)
                    on:click=move |_| go(Section::Contact)
                    aria-label="Navigate to Contact"
                >
                    "Contact"
                </button>

                <button
                    class="navbar__menu-toggle"
                    on:click=move |_| nav.update(NavState::toggle_menu)
                    aria-label="Toggle menu"
                    aria-expanded=move || nav.with(|n| n.menu_open).to_string()
                >
                    {move || if nav.with(|n| n.menu_open) { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || nav.with(|n| n.menu_open)>
                <div class="mobile-menu__backdrop" on:click=move |_| nav.update(NavState::close_menu)>
                    <div class="mobile-menu" on:click=move |ev| ev.stop_propagation()>
                        {Section::NAV_ITEMS
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        class="mobile-menu__item"
                                        class:mobile-menu__item--active=move || is_active(section)
                                        on:click=move |_| go(section)
                                        aria-label=format!("Navigate to {}", section.label())
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                        <A href="/about" attr:class="mobile-menu__item">
                            "About"
                        </A>
                        <A href="/blog" attr:class="mobile-menu__item">
                            "Blog"
                        </A>
                        <button
                            class="btn btn--primary mobile-menu__contact"
                            on:click=move |_| go(Section::Contact)
                            aria-label="Navigate to Contact"
                        >
                            "Contact"
                        </button>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
