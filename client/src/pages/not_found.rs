use leptos::prelude::*;
use leptos_router::components::A;

/// Fallback for unknown paths.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"This page doesn't exist."</p>
            <A href="/" attr:class="btn btn--primary">"Back to home"</A>
        </div>
    }
}
