//! Home route: the stacked portfolio sections.
//!
//! The page owns one node ref per [`Section`]. It measures them on every
//! window scroll to keep the navbar highlight current (the navbar tracks the
//! scroll flags itself), and it resolves nav
//! clicks recorded in [`NavState::pending`] into smooth scrolls. A request
//! made from another route is resolved by the first effect run after this
//! page mounts.

use leptos::html;
use leptos::prelude::*;

use crate::components::{
    certifications::Certifications, contact::Contact, hero::Hero, project_showcase::ProjectShowcase,
    skills::Skills,
};
use crate::state::nav::{NavState, Section, SectionBounds};
use crate::util::{dom, schedule};

type SectionRefs = [(Section, NodeRef<html::Section>); 5];

/// Bounds of every section currently rendered.
fn measure(refs: &SectionRefs) -> Vec<SectionBounds> {
    #[cfg(feature = "hydrate")]
    {
        refs.iter()
            .filter_map(|(section, node)| node.get_untracked().map(|el| dom::section_bounds(*section, &el)))
            .collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = refs;
        Vec::new()
    }
}

#[component]
pub fn HomePage(nav: RwSignal<NavState>) -> impl IntoView {
    let refs: SectionRefs = Section::ALL.map(|section| (section, NodeRef::new()));
    let node = move |section: Section| refs[section as usize].1;

    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        let bounds = measure(&refs);
        nav.update(|n| n.observe_sections(dom::scroll_y(), &bounds, schedule::now_ms()));
    });
    on_cleanup(move || handle.remove());

    let pending = Memo::new(move |_| nav.with(|n| n.pending));
    Effect::new(move || {
        if pending.get().is_none() {
            return;
        }
        let Some(request) = nav.try_update(NavState::take_pending).flatten() else {
            return;
        };
        let target = measure(&refs).into_iter().find(|b| b.section == request.section);
        let scroll_to = nav.try_update(|n| n.navigate_to(request.section, target, schedule::now_ms())).flatten();
        if let Some(top) = scroll_to {
            dom::smooth_scroll_to(top);
        }
    });

    view! {
        <section id=Section::Home.id() class="page-section page-section--hero" node_ref=node(Section::Home)>
            <Hero/>
        </section>
        <section id=Section::Skills.id() class="page-section" node_ref=node(Section::Skills)>
            <Skills/>
        </section>
        <section id=Section::Projects.id() class="page-section" node_ref=node(Section::Projects)>
            <ProjectShowcase/>
        </section>
        <section id=Section::Certifications.id() class="page-section" node_ref=node(Section::Certifications)>
            <Certifications/>
        </section>
        <section id=Section::Contact.id() class="page-section" node_ref=node(Section::Contact)>
            <Contact/>
        </section>
    }
}
