//! Contact section: contact cards and the inquiry form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns one `ContactFormState` signal and drives its async edges: delivery
//! via `net::api::send_contact`, then the deferred return to idle. Both
//! continuations carry the ticket issued by the state machine, so a reset
//! scheduled for an older submission never clobbers a newer status.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use crate::content::CONTACT_INFO;
use crate::state::contact::{ContactField, ContactFormState, FormStatus};

/// Modifier class for the status banner.
fn status_class(status: FormStatus) -> &'static str {
    match status {
        FormStatus::Idle => "contact-status",
        FormStatus::Loading => "contact-status contact-status--loading",
        FormStatus::Success => "contact-status contact-status--success",
        FormStatus::Error => "contact-status contact-status--error",
    }
}

fn status_icon(status: FormStatus) -> &'static str {
    match status {
        FormStatus::Idle => "",
        FormStatus::Loading => "⟳",
        FormStatus::Success => "✓",
        FormStatus::Error => "!",
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let contact = RwSignal::new(ContactFormState::default());

    let value_of = move |field: ContactField| contact.with(|s| s.form().field(field).to_owned());
    let status = move || contact.with(ContactFormState::status);
    let busy = move || contact.with(ContactFormState::is_busy);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some((ticket, payload)) = contact.try_update(ContactFormState::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::send_contact(&payload).await;
            if let Err(e) = &outcome {
                log::warn!("contact delivery failed: {e}");
            }
            let reset = contact.try_update(|s| s.finish_submit(ticket, outcome)).flatten();
            if let Some(reset) = reset {
                gloo_timers::future::sleep(crate::state::contact::RESET_DELAY).await;
                contact.update(|s| {
                    s.expire(reset);
                });
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (ticket, payload);
    };

    view! {
        <section id="contact" class="section contact">
            <div class="container">
                <header class="section__header">
                    <p class="section__eyebrow">"Contact"</p>
                    <h2 class="section__title">"Get in touch"</h2>
                    <p class="section__lead">"Reach out any time about new projects or collaboration."</p>
                </header>

                <div class="contact__grid">
                    <div class="contact__info">
                        <h3 class="section__subtitle">"Contact details"</h3>
                        <p class="contact__blurb">
                            "Project inquiries, collaboration ideas, or just a hello are all welcome. I'll reply as soon as I can."
                        </p>
                        {CONTACT_INFO
                            .into_iter()
                            .map(|info| {
                                let card = view! {
                                    <div class="card contact-card">
                                        <span class="contact-card__icon">{info.icon}</span>
                                        <div>
                                            <div class="contact-card__title">{info.title}</div>
                                            <div class="contact-card__value">{info.value}</div>
                                        </div>
                                    </div>
                                };
                                match info.link {
                                    Some(href) => view! { <a class="contact-card__link" href=href>{card}</a> }.into_any(),
                                    None => card.into_any(),
                                }
                            })
                            .collect_view()}
                    </div>

                    <form class="contact-form" on:submit=on_submit novalidate>
                        <div class="contact-form__row">
                            <label class="contact-form__field">
                                <span class="contact-form__label">"Name *"</span>
                                <input
                                    class="input"
                                    type="text"
                                    name="name"
                                    placeholder="Jane Doe"
                                    prop:value=move || value_of(ContactField::Name)
                                    on:input=move |ev| contact.update(|s| s.set_field(ContactField::Name, event_target_value(&ev)))
                                />
                            </label>
                            <label class="contact-form__field">
                                <span class="contact-form__label">"Email *"</span>
                                <input
                                    class="input"
                                    type="email"
                                    name="email"
                                    placeholder="contact@example.com"
                                    prop:value=move || value_of(ContactField::Email)
                                    on:input=move |ev| contact.update(|s| s.set_field(ContactField::Email, event_target_value(&ev)))
                                />
                            </label>
                        </div>
                        <label class="contact-form__field">
                            <span class="contact-form__label">"Subject *"</span>
                            <input
                                class="input"
                                type="text"
                                name="subject"
                                placeholder="Project inquiry"
                                prop:value=move || value_of(ContactField::Subject)
                                on:input=move |ev| contact.update(|s| s.set_field(ContactField::Subject, event_target_value(&ev)))
                            />
                        </label>
                        <label class="contact-form__field">
                            <span class="contact-form__label">"Message *"</span>
                            <textarea
                                class="input contact-form__message"
                                name="message"
                                rows="6"
                                placeholder="Hi! I'd like to talk about a project..."
                                prop:value=move || value_of(ContactField::Message)
                                on:input=move |ev| contact.update(|s| s.set_field(ContactField::Message, event_target_value(&ev)))
                            ></textarea>
                        </label>

                        <Show when=move || status() != FormStatus::Idle>
                            <div class=move || status_class(status()) role="status">
                                <span class="contact-status__icon">{move || status_icon(status())}</span>
                                <span>{move || contact.with(|s| s.message().to_owned())}</span>
                            </div>
                        </Show>

                        <button class="btn btn--primary contact-form__submit" type="submit" disabled=busy>
                            {move || {
                                if busy() {
                                    view! { <span class="spinner" aria-hidden="true"></span> "Sending..." }.into_any()
                                } else {
                                    view! { "✈ Send message" }.into_any()
                                }
                            }}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
