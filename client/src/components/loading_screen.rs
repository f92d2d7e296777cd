//! Full-screen overlay shown while the page settles after first load.

use leptos::prelude::*;

use crate::content::profile;
use crate::state::ui::LoadingPhase;

#[component]
pub fn LoadingScreen(phase: Signal<LoadingPhase>) -> impl IntoView {
    view! {
        <div class=move || phase.get().class() aria-busy="true">
            <div class="loading-screen__content">
                <div class="loading-screen__badge">{profile::INITIALS}</div>
                <h1 class="loading-screen__name">{profile::NAME}</h1>
                <div class="loading-screen__dots">
                    <span class="loading-screen__dot"></span>
                    <span class="loading-screen__dot"></span>
                    <span class="loading-screen__dot"></span>
                </div>
                <p class="loading-screen__label">"Loading..."</p>
            </div>
        </div>
    }
}
