use dioxus::prelude::*;

use super::Reveal;
use crate::content::{Project, MAX_PROJECT_TAGS, PROJECTS};

/// Project gallery.
#[component]
pub fn Projects() -> Element {
    rsx! {
        section { id: "projects", class: "section",
            div { class: "container",
                div { class: "section-heading",
                    Reveal { id: "projects.title",
                        h2 { class: "section-title", "My Projects" }
                    }
                    p { class: "section-subtitle", "Some of my recent work" }
                }

                div { class: "card-grid",
                    for (i, project) in PROJECTS.iter().enumerate() {
                        Reveal {
                            key: "{project.title}",
                            id: format!("projects.card.{}", i),
                            class: "glass-card project-card",
                            delay_ms: 200 + (i as u32) * 100,
                            ProjectCard { project: *project }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    rsx! {
        div { class: "project-image",
            img { src: "{project.image}", alt: "{project.title}" }
        }
        div { class: "project-body",
            div { class: "tag-list",
                for tag in project.tags.iter().take(MAX_PROJECT_TAGS) {
                    span { key: "{tag}", class: "tag", "{tag}" }
                }
            }
            h3 { class: "project-title", "{project.title}" }
            p { class: "project-description", "{project.description}" }
            div { class: "project-links",
                if let Some(live) = project.live {
                    a {
                        class: "project-link",
                        href: "{live}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "\u{2197} Live Demo"
                    }
                }
                if let Some(source) = project.source {
                    a {
                        class: "project-link",
                        href: "{source}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "</> Source Code"
                    }
                }
            }
        }
    }
}
