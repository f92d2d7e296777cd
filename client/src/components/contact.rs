//! Contact section: reach-out details beside a validated message form.

use leptos::prelude::*;

use crate::content::profile;
use crate::state::contact::{ContactState, Field, GENERIC_FAILURE, SubmitStatus};

#[component]
pub fn Contact() -> impl IntoView {
    let state = RwSignal::new(ContactState::default());

    #[cfg(feature = "hydrate")]
    let guard = crate::util::liveness::MountGuard::new();

    let on_submit = Callback::new(move |()| {
        let Some(request) = state.try_update(ContactState::begin_submit).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let guard = guard.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::submit_contact(&request).await;
                if let Err(e) = &outcome {
                    log::warn!("contact submission failed: {e}");
                }
                if guard.is_alive() {
                    state.update(|s| s.finish_submit(outcome));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    });

    let status = Memo::new(move |_| state.with(|s| s.status));

    view! {
        <div class="contact">
            <div class="section-title">"Get In Touch"</div>
            <div class="contact__grid">
                <div class="contact__info">
                    <h3>"Let's talk about your project"</h3>
                    <p>
                        "Have a project in mind or want to explore collaboration opportunities? "
                        "Feel free to reach out using the form or through my contact information."
                    </p>
                    <ul class="contact__lines">
                        {profile::CONTACT_LINES
                            .iter()
                            .map(|line| {
                                view! {
                                    <li class="contact__line">
                                        <span class="contact__line-label">{line.label}</span>
                                        {match line.href {
                                            Some(href) => view! { <a href=href>{line.value}</a> }.into_any(),
                                            None => view! { <span>{line.value}</span> }.into_any(),
                                        }}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <div class="contact__socials">
                        {profile::SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a class="contact__social" href=link.href target="_blank" rel="noopener noreferrer" title=link.title>
                                        {link.title}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="contact__form-wrap">
                    <Show
                        when=move || status.get() == SubmitStatus::Success
                        fallback=move || {
                            view! {
                                <form
                                    class="contact__form"
                                    novalidate=true
                                    on:submit=move |ev| {
                                        ev.prevent_default();
                                        on_submit.run(());
                                    }
                                >
                                    <FormField state=state field=Field::Name label="Your Name" kind="text"/>
                                    <FormField state=state field=Field::Email label="Your Email" kind="email"/>
                                    <FormField state=state field=Field::Subject label="Subject" kind="text"/>
                                    <FormField state=state field=Field::Message label="Message" kind="textarea"/>
                                    <Show when=move || status.get() == SubmitStatus::Error>
                                        <div class="contact__error">{GENERIC_FAILURE}</div>
                                    </Show>
                                    <button
                                        class="btn btn--primary contact__submit"
                                        type="submit"
                                        disabled=move || status.get() == SubmitStatus::Submitting
                                    >
                                        {move || if status.get() == SubmitStatus::Submitting { "Sending..." } else { "Send Message" }}
                                    </button>
                                </form>
                            }
                        }
                    >
                        <div class="contact__success">
                            <h3>"Message sent successfully!"</h3>
                            <p>"Thank you for reaching out. I'll get back to you as soon as possible."</p>
                            <button class="btn btn--ghost" on:click=move |_| state.update(ContactState::reset_to_editing)>
                                "Send another message"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
fn FormField(state: RwSignal<ContactState>, field: Field, label: &'static str, kind: &'static str) -> impl IntoView {
    let value = move || state.with(|s| s.form.get(field).to_owned());
    let error = move || state.with(|s| s.errors.get(field));
    let on_input = move |ev: leptos::ev::Event| state.update(|s| s.set_field(field, event_target_value(&ev)));

    let input = if kind == "textarea" {
        view! {
            <textarea
                class="contact__input"
                class:contact__input--invalid=move || error().is_some()
                placeholder=label
                rows="5"
                prop:value=value
                on:input=on_input
            ></textarea>
        }
            .into_any()
    } else {
        view! {
            <input
                class="contact__input"
                class:contact__input--invalid=move || error().is_some()
                type=kind
                placeholder=label
                prop:value=value
                on:input=on_input
            />
        }
            .into_any()
    };

    view! {
        <div class="contact__field">
            {input}
            {move || error().map(|msg| view! { <span class="contact__field-error">{msg}</span> })}
        </div>
    }
}
