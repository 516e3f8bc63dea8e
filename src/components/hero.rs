use dioxus::prelude::*;
use folio_ui::{Button, ButtonVariant};

use super::Reveal;
use crate::dom;

/// Full-height banner.
#[component]
pub fn Hero() -> Element {
    rsx! {
        section { id: "home", class: "hero hero-gradient",
            div { class: "container hero-inner",
                span { class: "hero-badge animate-fade-in", "Welcome to my portfolio" }

                Reveal { id: "hero.title", delay_ms: 200,
                    h1 { class: "hero-title",
                        span { class: "block", "Creative" }
                        span { class: "block", "Designer & Developer" }
                    }
                }

                Reveal { id: "hero.subtitle", delay_ms: 400,
                    p { class: "hero-subtitle",
                        "I build elegant, functional software that people remember for the right reasons."
                    }
                }

                Reveal { id: "hero.cta", delay_ms: 600,
                    Button {
                        variant: ButtonVariant::Pill,
                        class: "btn-hover".to_string(),
                        onclick: move |_| dom::scroll_to_section("projects"),
                        "View My Work"
                    }
                }

                a {
                    class: "scroll-hint animate-fade-in",
                    href: "#about",
                    onclick: move |e| {
                        e.prevent_default();
                        dom::scroll_to_section("about");
                    },
                    span { "Scroll Down" }
                    span { class: "animate-bounce", "\u{2193}" }
                }
            }
        }
    }
}
