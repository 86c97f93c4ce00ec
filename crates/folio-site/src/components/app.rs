//! Root page component.

use dioxus::prelude::*;

use crate::content::{ProjectCatalog, PROFILE};
use crate::theme::{ThemeToggle, ThemedRoot};

use super::{Description, ProjectGallery, ProjectModal, Skills};

/// The whole portfolio page.
///
/// Owns the selected project and the modal's open flag.
#[component]
pub fn Portfolio(catalog: ProjectCatalog) -> Element {
    let mut selected = use_signal(|| None::<usize>);
    let mut modal_open = use_signal(|| false);

    let project = selected().and_then(|index| catalog.get(index).cloned());

    rsx! {
        ThemedRoot {
            div {
                class: "portfolio",

                header {
                    class: "site-header",
                    span { class: "site-name", "{PROFILE.name}" }
                    ThemeToggle {}
                }

                main {
                    Description {}
                    Skills {}
                    ProjectGallery {
                        catalog: catalog.clone(),
                        on_select: move |index: usize| {
                            tracing::debug!(index, "Project selected");
                            selected.set(Some(index));
                            modal_open.set(true);
                        },
                    }
                    Contact {}
                }

                ProjectModal {
                    is_open: modal_open(),
                    project,
                    on_close: move |_| modal_open.set(false),
                }
            }
        }
    }
}

/// Footer section the "Contact" social link points at.
#[component]
fn Contact() -> Element {
    rsx! {
        section {
            id: "contact",
            class: "contact",
            h2 { "CONTACT" }
            p { "Want to work together? Reach out on any of these:" }
            div {
                class: "contact-links",
                for link in PROFILE.links.iter().filter(|l| l.is_external()) {
                    a {
                        key: "{link.label}",
                        href: "{link.href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{link.label}"
                    }
                }
            }
        }
    }
}
