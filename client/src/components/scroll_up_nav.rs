//! Compact profile bar revealed while scrolling back up the page.

use leptos::prelude::*;

use crate::content::profile;

#[component]
pub fn ScrollUpNav(visible: Signal<bool>) -> impl IntoView {
    let avatar_failed = RwSignal::new(false);

    view! {
        <div class="scroll-up-nav" class:scroll-up-nav--visible=move || visible.get() aria-hidden=move || (!visible.get()).to_string()>
            <div class="scroll-up-nav__inner">
                <div class="scroll-up-nav__identity">
                    <Show when=move || !avatar_failed.get()>
                        <img
                            class="scroll-up-nav__avatar"
                            src=profile::AVATAR_PATH
                            alt="Profile"
                            on:error=move |_| avatar_failed.set(true)
                        />
                    </Show>
                    <div class="scroll-up-nav__text">
                        <span class="scroll-up-nav__name">{profile::NAME}</span>
                        <span class="scroll-up-nav__motto">{profile::MOTTO}</span>
                    </div>
                </div>
                <a class="btn btn--primary" href=profile::CV_PATH download=profile::CV_DOWNLOAD_NAME>
                    "Download Resume"
                </a>
            </div>
        </div>
    }
}
