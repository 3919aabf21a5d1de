//! Contact form wired to the form-relay controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ContactSignals` is the reactive `FormSurface`: field values, the busy
//! flag driving the submit button, and the shared toast slot. The component
//! only forwards submit events; the lifecycle lives in `state::contact`.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::components::toast::show_toast;
use crate::config::SiteConfig;
use crate::net::relay::BrowserTransport;
use crate::state::contact::{ContactController, ContactFields, FormSurface};
use crate::state::notification::{Notification, ToastState};

/// Reactive form surface backed by signals.
#[derive(Clone, Copy)]
pub struct ContactSignals {
    pub fields: RwSignal<ContactFields>,
    pub submitting: RwSignal<bool>,
    pub toasts: RwSignal<ToastState>,
}

impl FormSurface for ContactSignals {
    fn read_fields(&self) -> ContactFields {
        self.fields.get_untracked()
    }

    fn set_submitting(&self, submitting: bool) {
        self.submitting.set(submitting);
    }

    fn reset_fields(&self) {
        self.fields.set(ContactFields::default());
    }

    fn show_notification(&self, notification: Notification) {
        show_toast(self.toasts, notification);
    }
}

/// Icon class and label for the submit button.
fn submit_button_content(submitting: bool) -> (&'static str, &'static str) {
    if submitting {
        ("fas fa-spinner fa-spin", "Sending...")
    } else {
        ("fas fa-paper-plane", "Send Message")
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let surface = ContactSignals {
        fields: RwSignal::new(ContactFields::default()),
        submitting: RwSignal::new(false),
        toasts,
    };
    let fields = surface.fields;
    let submitting = surface.submitting;

    let controller = ContactController::new(config.contact_endpoint.as_deref(), BrowserTransport).map(Rc::new);
    let action = controller.as_ref().map(|c| c.endpoint().to_owned());
    let controller = StoredValue::new_local(controller);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(controller) = controller.with_value(Clone::clone) else {
            log::debug!("contact form disabled: no relay endpoint on page");
            return;
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            controller.submit(&surface).await;
        });
        #[cfg(not(feature = "csr"))]
        drop(controller);
    };

    view! {
        <form id="contact-form" class="contact-form" method="POST" action=action on:submit=on_submit>
            <div class="form-group">
                <input
                    type="text"
                    name="name"
                    placeholder="Your Name"
                    prop:value=move || fields.get().name
                    on:input=move |ev| fields.update(|f| f.name = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <input
                    type="email"
                    name="email"
                    placeholder="Your Email"
                    prop:value=move || fields.get().email
                    on:input=move |ev| fields.update(|f| f.email = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <input
                    type="text"
                    name="subject"
                    placeholder="Subject"
                    prop:value=move || fields.get().subject
                    on:input=move |ev| fields.update(|f| f.subject = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <textarea
                    name="message"
                    rows="5"
                    placeholder="Your Message"
                    prop:value=move || fields.get().message
                    on:input=move |ev| fields.update(|f| f.message = event_target_value(&ev))
                ></textarea>
            </div>
            <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                {move || {
                    let (icon, label) = submit_button_content(submitting.get());
                    view! {
                        <i class=icon></i>
                        " "
                        {label}
                    }
                }}
            </button>
        </form>
    }
}
