//! Contact section.
//!
//! The form is bound to a [`SubmissionController`]; delivery runs on a
//! spawned task and the controller only leaves `Submitting` when that task
//! hands back its completion.

use dioxus::prelude::*;
use folio_core::{ContactField, SubmissionController, SubmitError};
use folio_ui::{Button, ButtonVariant, Input, TextArea};

use super::Reveal;
use crate::content::{CONTACT_INFO, SOCIAL_LINKS};
use crate::context::{show_toast, use_sender, use_toasts};

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { id: "contact", class: "section",
            div { class: "container",
                div { class: "section-heading",
                    Reveal { id: "contact.title",
                        h2 { class: "section-title", "Get In Touch" }
                    }
                    p { class: "section-subtitle", "Let's work together" }
                }

                div { class: "contact-grid",
                    Reveal { id: "contact.form", class: "glass-card contact-card", delay_ms: 200,
                        h3 { class: "card-title", "Send Me a Message" }
                        ContactForm {}
                    }

                    Reveal { id: "contact.info", delay_ms: 400,
                        h3 { class: "card-title", "Contact Information" }
                        ContactDetails {}
                        SocialLinks {}
                    }
                }
            }
        }
    }
}

#[component]
fn ContactForm() -> Element {
    let mut form = use_signal(SubmissionController::new);
    let sender = use_sender();
    let toasts = use_toasts();

    let submitting = form.read().is_submitting();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let pending = match form.write().submit() {
            Ok(pending) => pending,
            Err(SubmitError::AlreadySubmitting) => return,
            Err(SubmitError::Invalid(err)) => {
                // Native `required` attributes already point at the field
                tracing::debug!(missing = ?err.missing, "Contact form incomplete");
                return;
            }
        };

        let sender = sender.clone();
        spawn(async move {
            let completion = pending.deliver(sender.as_ref()).await;
            let notification = form.write().complete(completion.id, completion.outcome);
            if let Some(notification) = notification {
                show_toast(toasts, notification);
            }
        });
    };

    rsx! {
        form { class: "contact-form", onsubmit: on_submit,
            for field in ContactField::all().iter().copied() {
                if field == ContactField::Message {
                    TextArea {
                        key: "{field}",
                        name: field.as_str().to_string(),
                        label: field.label().to_string(),
                        value: form.read().field(field).to_string(),
                        oninput: move |value: String| apply_edit(&mut form.write(), field, value),
                        rows: 5,
                        required: true,
                        disabled: submitting,
                    }
                } else {
                    Input {
                        key: "{field}",
                        name: field.as_str().to_string(),
                        label: field.label().to_string(),
                        input_type: input_type(field).to_string(),
                        value: form.read().field(field).to_string(),
                        oninput: move |value: String| apply_edit(&mut form.write(), field, value),
                        required: true,
                        disabled: submitting,
                    }
                }
            }

            Button {
                variant: ButtonVariant::Primary,
                button_type: "submit".to_string(),
                class: "w-full btn-hover".to_string(),
                disabled: submitting,
                if submitting {
                    span { class: "animate-pulse", "Sending..." }
                } else {
                    span { "Send Message" }
                    span { class: "send-icon", "\u{27A4}" }
                }
            }
        }
    }
}

/// Edits are refused while a message is in flight; the field keeps its
/// submitted value.
fn apply_edit(form: &mut SubmissionController, field: ContactField, value: String) {
    if let Err(err) = form.update_field(field, value) {
        tracing::trace!(%field, error = %err, "Dropped form edit");
    }
}

fn input_type(field: ContactField) -> &'static str {
    match field {
        ContactField::Email => "email",
        _ => "text",
    }
}

#[component]
fn ContactDetails() -> Element {
    rsx! {
        div { class: "glass-card contact-card",
            div { class: "contact-info",
                for info in CONTACT_INFO {
                    div { key: "{info.title}", class: "contact-info-row",
                        div { class: "icon-badge", "{info.icon}" }
                        div {
                            h4 { class: "contact-info-title", "{info.title}" }
                            if let Some(link) = info.link {
                                a { class: "muted link-hover", href: "{link}", "{info.value}" }
                            } else {
                                p { class: "muted", "{info.value}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SocialLinks() -> Element {
    rsx! {
        div { class: "glass-card contact-card",
            h3 { class: "card-title", "Let's Connect" }
            p { class: "muted",
                "Follow along for new projects and the occasional write-up."
            }
            div { class: "social-links",
                for social in SOCIAL_LINKS {
                    a {
                        key: "{social.label}",
                        class: "icon-badge icon-badge--link",
                        href: "{social.href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "aria-label": "{social.label}",
                        "{social.glyph}"
                    }
                }
            }
        }
    }
}
