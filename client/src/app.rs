//! Root application component with routing and the shared chrome.
//!
//! DESIGN
//! ======
//! Navigation state lives here, above the router, because both the navbar
//! (on every route) and the home page (which owns the section elements) need
//! it. It is handed down as an `RwSignal<NavState>` prop rather than through
//! context so each consumer's dependency is visible in its signature.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{
    footer::Footer, loading_screen::LoadingScreen, navbar::Navbar, scroll_up_nav::ScrollUpNav,
};
use crate::content::profile;
use crate::pages::{about::AboutPage, blog::BlogPage, home::HomePage, not_found::NotFoundPage};
use crate::state::{nav::NavState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let nav = RwSignal::new(NavState::default());
    let ui = RwSignal::new(UiState::default());

    #[cfg(feature = "hydrate")]
    {
        let guard = crate::util::liveness::MountGuard::new();
        leptos::task::spawn_local(async move {
            while let Some(dwell) = ui.get_untracked().loading.dwell_ms() {
                gloo_timers::future::TimeoutFuture::new(dwell).await;
                if !guard.is_alive() {
                    return;
                }
                ui.update(|u| u.loading = u.loading.advance());
            }
        });
    }

    let loading = Signal::derive(move || ui.get().loading);
    let scroll_up_visible = Signal::derive(move || nav.with(|n| n.scroll_up_visible));

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text=profile::NAME/>

        <Router>
            <Show when=move || loading.get().is_mounted()>
                <LoadingScreen phase=loading/>
            </Show>
            <Navbar nav=nav/>
            <ScrollUpNav visible=scroll_up_visible/>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=move || view! { <HomePage nav=nav/> }/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("blog") view=BlogPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
