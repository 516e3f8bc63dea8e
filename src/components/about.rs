use dioxus::prelude::*;
use folio_ui::{Button, ButtonVariant};

use super::Reveal;
use crate::content::{ABOUT_PARAGRAPHS, STATS};
use crate::dom;

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: "about", class: "section section--tinted",
            div { class: "container",
                div { class: "section-heading",
                    Reveal { id: "about.title",
                        h2 { class: "section-title", "About Me" }
                    }
                    p { class: "section-subtitle", "Get to know me better" }
                }

                div { class: "about-grid",
                    Reveal { id: "about.content", delay_ms: 200,
                        h3 { class: "about-lead",
                            "Creating digital experiences with passion and purpose"
                        }
                        div { class: "about-copy",
                            for (i, paragraph) in ABOUT_PARAGRAPHS.iter().enumerate() {
                                p { key: "{i}", "{paragraph}" }
                            }
                        }
                        div { class: "about-cta",
                            Button {
                                variant: ButtonVariant::Pill,
                                class: "btn-hover".to_string(),
                                onclick: move |_| dom::scroll_to_section("contact"),
                                "Get In Touch"
                            }
                        }
                    }

                    div { class: "stats-grid",
                        for (i, stat) in STATS.iter().enumerate() {
                            Reveal {
                                key: "{stat.label}",
                                id: format!("about.stat.{}", i),
                                class: "glass-card stat-card",
                                delay_ms: 300 + (i as u32) * 100,
                                span { class: "stat-icon", "{stat.icon}" }
                                span { class: "stat-value", "{stat.value}" }
                                span { class: "stat-label", "{stat.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
