use chrono::Datelike;
use dioxus::prelude::*;
use folio_ui::{Button, ButtonVariant};

use crate::content::SITE_NAME;
use crate::dom;

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "site-footer",
            div { class: "container footer-inner",
                Button {
                    variant: ButtonVariant::Icon,
                    aria_label: "Scroll to top".to_string(),
                    onclick: move |_| dom::scroll_to_top(),
                    "\u{2191}"
                }

                div { class: "footer-brand",
                    h3 { "{SITE_NAME}" }
                    p { class: "muted",
                        "Creating beautiful digital experiences through thoughtful design and development."
                    }
                }

                div { class: "divider" }

                p { class: "copyright muted", "\u{00A9} {year} {SITE_NAME}. All rights reserved." }
            }
        }
    }
}
