//! Skills grid with a horizontally scrollable category filter bar.

use leptos::html;
use leptos::prelude::*;

use crate::content::skills::{FILTER_SCROLL_STEP_PX, ScrollArrows, SkillFilter, filters, visible_skills};

#[component]
pub fn Skills() -> impl IntoView {
    let active = RwSignal::new(SkillFilter::All);
    let arrows = RwSignal::new(ScrollArrows::default());
    let bar_ref = NodeRef::<html::Div>::new();

    let measure = move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = bar_ref.get_untracked() {
                let next = crate::content::skills::scroll_arrows(
                    f64::from(el.scroll_left()),
                    f64::from(el.client_width()),
                    f64::from(el.scroll_width()),
                );
                arrows.set(next);
            }
        }
    };

    // First measurement once the bar is in the DOM.
    Effect::new(move || {
        if bar_ref.get().is_some() {
            measure();
        }
    });

    let scroll_by = move |dx: f64| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = bar_ref.get_untracked() {
                crate::util::dom::smooth_scroll_by_x(&el, dx);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = dx;
        }
    };

    view! {
        <div class="skills">
            <div class="section-title">"Skills"</div>
            <div class="skills__filter-wrap">
                <Show when=move || arrows.get().left>
                    <button
                        class="skills__arrow skills__arrow--left"
                        on:click=move |_| scroll_by(-FILTER_SCROLL_STEP_PX)
                        aria-label="Scroll filters left"
                    >
                        "‹"
                    </button>
                </Show>
                <Show when=move || arrows.get().right>
                    <button
                        class="skills__arrow skills__arrow--right"
                        on:click=move |_| scroll_by(FILTER_SCROLL_STEP_PX)
                        aria-label="Scroll filters right"
                    >
                        "›"
                    </button>
                </Show>
                <div class="skills__filter-bar" node_ref=bar_ref on:scroll=move |_| measure()>
                    {filters()
                        .into_iter()
                        .map(|filter| {
                            view! {
                                <button
                                    class="skills__filter"
                                    class:skills__filter--active=move || active.get() == filter
                                    on:click=move |_| active.set(filter)
                                >
                                    {filter.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="skills__grid">
                {move || {
                    visible_skills(active.get())
                        .into_iter()
                        .map(|name| view! { <div class="skills__item">{name}</div> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
