//! Toast viewport
//!
//! Renders the visible entries of a [`ToastQueue`](folio_core::ToastQueue).
//! Expiry is driven by the owner of the queue; this component only draws
//! and forwards dismiss clicks.

use dioxus::prelude::*;
use folio_core::{Toast, ToastId};

#[component]
pub fn ToastViewport(toasts: Vec<Toast>, on_dismiss: EventHandler<ToastId>) -> Element {
    rsx! {
        ol { class: "toast-viewport",
            for toast in toasts {
                {
                    let id = toast.id;
                    let class = format!("toast {}", toast.notification.kind.class());
                    rsx! {
                        li {
                            key: "{id}",
                            class: "{class}",
                            role: "status",
                            div { class: "toast-body",
                                div { class: "toast-title", "{toast.notification.title}" }
                                div { class: "toast-description", "{toast.notification.description}" }
                            }
                            button {
                                class: "toast-close",
                                r#type: "button",
                                "aria-label": "Dismiss",
                                onclick: move |_| on_dismiss.call(id),
                                "\u{00D7}"
                            }
                        }
                    }
                }
            }
        }
    }
}
