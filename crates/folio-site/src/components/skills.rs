//! Skills section.

use dioxus::prelude::*;

use crate::content::{SkillCategory, SKILLS_HEADING, SKILL_ROWS};

/// Skill categories laid out in rows of cards.
#[component]
pub fn Skills() -> Element {
    rsx! {
        section {
            id: "skills",
            class: "skills",
            h2 { "{SKILLS_HEADING}" }

            for (row_index, row) in SKILL_ROWS.iter().enumerate() {
                div {
                    key: "{row_index}",
                    class: "skills-row",
                    for category in row.iter().copied() {
                        SkillCard { key: "{category.title}", category }
                    }
                }
            }
        }
    }
}

#[component]
fn SkillCard(category: SkillCategory) -> Element {
    rsx! {
        div {
            class: "skills-card",
            h3 { "{category.title}" }
            div {
                class: "skills-list",
                for tag in category.tags.iter() {
                    span { key: "{tag}", class: "skill-bubble", "{tag}" }
                }
            }
        }
    }
}
