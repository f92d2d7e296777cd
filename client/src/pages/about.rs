//! About route: bio, proficiency bars and the résumé download.

use leptos::prelude::*;

use crate::content::profile;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <div class="section-title">"About Me"</div>
            <div class="about-page__grid">
                <div class="about-page__bio">
                    <h3>"Who I Am"</h3>
                    {profile::BIO.iter().map(|para| view! { <p>{*para}</p> }).collect_view()}
                    <a class="btn btn--primary" href=profile::RESUME_PATH download="">
                        "Download Resume"
                    </a>
                </div>
                <div class="about-page__skills">
                    <h3>"My Skills"</h3>
                    {profile::PROFICIENCIES
                        .iter()
                        .map(|p| {
                            let width = format!("width: {}%;", p.level);
                            view! {
                                <div class="proficiency">
                                    <div class="proficiency__header">
                                        <span>{p.name}</span>
                                        <span>{format!("{}%", p.level)}</span>
                                    </div>
                                    <div class="proficiency__track">
                                        <div class="proficiency__fill" style=width></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
