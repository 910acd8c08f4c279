//! Contact form with client-side validation and a simulated send.

use leptos::prelude::*;

use crate::consts::{CONTACT_FORM_ID, FORM_STATUS_ID};
use crate::dispatch::Dispatcher;
use crate::state::contact::{ContactEvent, ContactField};
use crate::state::site::SiteEvent;

#[component]
pub fn ContactForm() -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let state = dispatcher.state();

    let value = move |field: ContactField| state.with(|s| s.contact.draft.get(field).to_owned());
    let error = move |field: ContactField| state.with(|s| s.contact.error(field));
    let edit = move |field: ContactField, value: String| {
        dispatcher.send(SiteEvent::Contact(ContactEvent::FieldEdited { field, value }));
    };
    let busy = move || state.with(|s| s.contact.is_busy());
    let status_text = move || state.with(|s| s.contact.status.text.clone());
    let status_color = move || state.with(|s| s.contact.status.tone.color());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        dispatcher.send(SiteEvent::Contact(ContactEvent::Submitted));
    };

    view! {
        <form id=CONTACT_FORM_ID class="contact-form" novalidate=true on:submit=on_submit>
            <label class="field">
                <span class="field__label">"Name"</span>
                <input
                    name={ContactField::Name.name()}
                    type="text"
                    autocomplete="name"
                    prop:value=move || value(ContactField::Name)
                    on:input=move |ev| edit(ContactField::Name, event_target_value(&ev))
                />
                <span id={ContactField::Name.error_id()} class="field__error" aria-live="polite">
                    {move || error(ContactField::Name)}
                </span>
            </label>
            <label class="field">
                <span class="field__label">"Email"</span>
                <input
                    name={ContactField::Email.name()}
                    type="email"
                    autocomplete="email"
                    prop:value=move || value(ContactField::Email)
                    on:input=move |ev| edit(ContactField::Email, event_target_value(&ev))
                />
                <span id={ContactField::Email.error_id()} class="field__error" aria-live="polite">
                    {move || error(ContactField::Email)}
                </span>
            </label>
            <label class="field">
                <span class="field__label">"Message"</span>
                <textarea
                    name={ContactField::Message.name()}
                    rows="5"
                    prop:value=move || value(ContactField::Message)
                    on:input=move |ev| edit(ContactField::Message, event_target_value(&ev))
                ></textarea>
                <span id={ContactField::Message.error_id()} class="field__error" aria-live="polite">
                    {move || error(ContactField::Message)}
                </span>
            </label>
            <button type="submit" class="btn btn--primary" disabled=busy>
                "Send message"
            </button>
            <p id=FORM_STATUS_ID class="form-status" role="status" style:color=status_color>
                {status_text}
            </p>
        </form>
    }
}
