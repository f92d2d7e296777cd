//! Site footer.

use leptos::prelude::*;

use crate::content::profile;
use crate::util::schedule::now_utc;

#[component]
pub fn Footer() -> impl IntoView {
    let year = now_utc().year();
    view! {
        <footer class="site-footer">
            <p class="site-footer__text">{profile::copyright(year)}</p>
        </footer>
    }
}
