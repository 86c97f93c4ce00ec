//! Project details overlay with an auto-advancing picture carousel.

use dioxus::prelude::*;

use crate::config::CarouselSettings;
use crate::content::Project;

use super::{use_carousel_driver, NavStep};

/// Overlay showing one project.
///
/// While open with at least one picture, the carousel advances every
/// `CarouselSettings::period()`. The timer task is cancelled whenever the
/// modal closes, the project changes or the component unmounts.
#[component]
pub fn ProjectModal(
    is_open: bool,
    #[props(!optional)] project: Option<Project>,
    on_close: EventHandler<()>,
) -> Element {
    let settings = try_use_context::<CarouselSettings>().unwrap_or_default();
    let mut driver = use_carousel_driver(is_open, project.clone(), settings);

    let mut request_close = move || driver.request_close(on_close);
    let mut navigate = move |step: NavStep| driver.navigate(step);

    if !is_open {
        return rsx! {};
    }
    let Some(project) = project else {
        return rsx! {};
    };

    let view = driver.view(&project);
    let position = view.position_label();

    rsx! {
        div {
            class: "project-modal-overlay",
            onclick: move |_| request_close(),
            div {
                class: "project-modal",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "Project Details",
                tabindex: "-1",
                autofocus: true,
                onclick: move |e| e.stop_propagation(),
                onkeydown: move |e: KeyboardEvent| match e.key() {
                    Key::Escape => request_close(),
                    Key::ArrowLeft => navigate(NavStep::Previous),
                    Key::ArrowRight => navigate(NavStep::Next),
                    _ => {}
                },

                div { class: "modal-content",
                    button {
                        class: "modal-close-icon",
                        "aria-label": "Close",
                        onclick: move |_| request_close(),
                        "\u{00d7}"
                    }

                    h2 { class: "modal-title", "{view.title}" }

                    if let Some(picture) = view.picture.clone() {
                        div { class: "modal-carousel",
                            div { class: "carousel",
                                // Keyed by index so the fade-in replays on every change
                                div {
                                    key: "{picture.index}",
                                    class: "carousel-image-container",
                                    img {
                                        class: "carousel-image",
                                        src: "{picture.src}",
                                        alt: "{picture.alt}",
                                    }
                                }
                            }
                            div { class: "carousel-controls",
                                button {
                                    class: "carousel-arrow left",
                                    "aria-label": "Previous picture",
                                    onclick: move |_| navigate(NavStep::Previous),
                                    "\u{2039}"
                                }
                                button {
                                    class: "carousel-arrow right",
                                    "aria-label": "Next picture",
                                    onclick: move |_| navigate(NavStep::Next),
                                    "\u{203a}"
                                }
                            }
                        }
                    }

                    div { class: "carousel-indicators",
                        for (i, active) in view.indicators.iter().copied().enumerate() {
                            span {
                                key: "{i}",
                                class: if active { "carousel-indicator active" } else { "carousel-indicator" },
                            }
                        }
                        if let Some(position) = position {
                            span { class: "carousel-position", "{position}" }
                        }
                    }

                    if let Some(description) = view.description.clone() {
                        p { class: "modal-description", "{description}" }
                    }

                    div { class: "competences-container",
                        for (i, competence) in view.competences.iter().enumerate() {
                            span { key: "{i}", class: "competence-item", "{competence}" }
                        }
                    }

                    if let Some(link) = view.link.clone() {
                        a {
                            class: "github-link-button",
                            href: "{link}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            span { class: "github-icon", "\u{2325}" }
                            "GitHub repository"
                        }
                    }
                }
            }
        }
    }
}
