use dioxus::prelude::*;

use super::Reveal;
use crate::content::{SkillCategory, SKILL_CATEGORIES};

#[component]
pub fn Skills() -> Element {
    rsx! {
        section { id: "skills", class: "section section--tinted",
            div { class: "container",
                div { class: "section-heading",
                    Reveal { id: "skills.title",
                        h2 { class: "section-title", "My Skills" }
                    }
                    p { class: "section-subtitle", "What I bring to the table" }
                }

                div { class: "card-grid",
                    for (i, category) in SKILL_CATEGORIES.iter().enumerate() {
                        Reveal {
                            key: "{category.name}",
                            id: format!("skills.category.{}", i),
                            class: "glass-card skill-card",
                            delay_ms: 200 + (i as u32) * 150,
                            SkillList { category: *category }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SkillList(category: SkillCategory) -> Element {
    rsx! {
        h3 { class: "skill-category", "{category.name}" }
        div { class: "skill-list",
            for skill in category.skills {
                div { key: "{skill.name}", class: "skill",
                    div { class: "skill-row",
                        span { class: "skill-name", "{skill.name}" }
                        span { class: "skill-level", "{skill.level}%" }
                    }
                    div { class: "skill-track",
                        div {
                            class: "skill-bar",
                            style: "width: {skill.level}%;",
                        }
                    }
                }
            }
        }
    }
}
