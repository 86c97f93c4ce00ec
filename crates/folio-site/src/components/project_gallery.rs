//! Project gallery grid.

use dioxus::prelude::*;

use crate::content::{Project, ProjectCatalog};

/// Grid of project cards; clicking one reports its catalog index.
#[component]
pub fn ProjectGallery(catalog: ProjectCatalog, on_select: EventHandler<usize>) -> Element {
    rsx! {
        section {
            id: "projects",
            class: "projects",
            h2 { "PROJECTS" }

            if catalog.is_empty() {
                div {
                    class: "projects-empty",
                    p { "No projects to show yet." }
                }
            } else {
                div {
                    class: "projects-grid",
                    for (index, project) in catalog.iter().cloned().enumerate() {
                        ProjectCard {
                            key: "{index}",
                            project,
                            on_click: move |_| on_select.call(index),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project, on_click: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "project-card",
            onclick: move |_| on_click.call(()),

            if let Some(cover) = project.cover() {
                img {
                    class: "project-card-cover",
                    src: "{cover}",
                    alt: "{project.title}",
                }
            } else {
                div { class: "project-card-cover project-card-placeholder" }
            }

            h3 { class: "project-card-title", "{project.title}" }

            div {
                class: "project-card-tags",
                for (i, competence) in project.competences.iter().enumerate() {
                    span { key: "{i}", class: "competence-item", "{competence}" }
                }
            }
        }
    }
}
