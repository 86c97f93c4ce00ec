//! Landing section with the biography and social links.

use dioxus::prelude::*;

use crate::content::{SocialLink, PROFILE};

/// Biography block.
#[component]
pub fn Description() -> Element {
    rsx! {
        section {
            id: "home",
            class: "description",

            img {
                class: "description-portrait",
                src: "{PROFILE.portrait}",
                alt: "{PROFILE.portrait_alt}",
            }

            div {
                class: "description-text",
                h1 { "{PROFILE.name}" }
                h2 { "{PROFILE.headline}" }
                p { "{PROFILE.bio}" }

                div {
                    class: "social-buttons",
                    for link in PROFILE.links.iter().copied() {
                        SocialButton { key: "{link.label}", link }
                    }
                }
            }
        }
    }
}

#[component]
fn SocialButton(link: SocialLink) -> Element {
    let target = if link.is_external() { "_blank" } else { "_self" };

    rsx! {
        a {
            href: "{link.href}",
            target: "{target}",
            rel: if link.is_external() { "noopener noreferrer" } else { "" },
            span { class: "text-none", "{link.label}" }
            span { class: "{link.kind.icon_class()}", "{link.kind.icon()}" }
        }
    }
}
