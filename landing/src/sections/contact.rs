use cafe::validate::{ContactForm, Field, live_message};
use leptos::prelude::*;
use tracing::{info, warn};

use super::{Notice, flash};

/// One labelled input with live validation.
#[component]
fn FormField(
    field: Field,
    label: &'static str,
    value: RwSignal<String>,
    error: RwSignal<Option<String>>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let id = field.id();
    let check = move || error.set(live_message(field, &value.get_untracked()));
    let on_input = move |ev: leptos::ev::Event| {
        value.set(event_target_value(&ev));
        check();
    };

    let input = if multiline {
        view! {
            <textarea
                id=id
                name=id
                rows="5"
                prop:value=move || value.get()
                on:input=on_input
                on:blur=move |_| check()
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id
                name=id
                type=if field == Field::Email { "email" } else { "text" }
                prop:value=move || value.get()
                on:input=on_input
                on:blur=move |_| check()
            />
        }
        .into_any()
    };

    view! {
        <div class=move || if error.with(Option::is_some) { "form-group error" } else { "form-group" }>
            <label for=id>{label}</label>
            {input}
            <span class="error-message">{move || error.get().unwrap_or_default()}</span>
        </div>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let name_error = RwSignal::new(None::<String>);
    let email_error = RwSignal::new(None::<String>);
    let message_error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<Notice>);

    let error_slot = move |field: Field| match field {
        Field::Name => name_error,
        Field::Email => email_error,
        Field::Message => message_error,
    };

    view! {
        <section id="contact" class="section contact" data-section="contact">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Get in touch"</h2>
                    <p class="section-subtitle">"Table bookings, events, wholesale beans."</p>
                </div>

                <form
                    id="contact-form"
                    class="contact-form"
                    novalidate=true
                    on:submit=move |ev| {
                        ev.prevent_default();
                        let form = ContactForm {
                            name: name.get_untracked(),
                            email: email.get_untracked(),
                            message: message.get_untracked(),
                        };
                        for field in [Field::Name, Field::Email, Field::Message] {
                            error_slot(field).set(None);
                        }
                        match form.validate() {
                            Ok(submission) => {
                                info!(name = %submission.name, email = %submission.email, "contact form sent");
                                name.set(String::new());
                                email.set(String::new());
                                message.set(String::new());
                                flash(notice, Notice::Success(format!(
                                    "Thanks, {}! We'll get back to you soon.",
                                    submission.name
                                )));
                            }
                            Err(errors) => {
                                warn!(count = errors.len(), "contact form rejected");
                                for e in &errors {
                                    error_slot(e.field()).set(Some(e.to_string()));
                                }
                                flash(notice, Notice::Error("Please fix the highlighted fields.".into()));
                            }
                        }
                    }
                >
                    <FormField field=Field::Name label="Name" value=name error=name_error />
                    <FormField field=Field::Email label="Email" value=email error=email_error />
                    <FormField
                        field=Field::Message
                        label="Message"
                        value=message
                        error=message_error
                        multiline=true
                    />
                    <button type="submit" class="btn btn-primary">"Send message"</button>
                    {move || {
                        notice
                            .get()
                            .map(|n| view! { <div class=n.class("form")>{n.text().to_string()}</div> })
                    }}
                </form>
            </div>
        </section>
    }
}
