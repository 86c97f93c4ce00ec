//! Biography shown in the landing section.

/// Kind of outbound link in the social row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Contact,
}

impl SocialKind {
    /// Glyph rendered next to the hidden text label.
    pub fn icon(&self) -> &'static str {
        match self {
            SocialKind::GitHub => "⌥",
            SocialKind::LinkedIn => "in",
            SocialKind::Contact => "✉",
        }
    }

    /// CSS class for the icon.
    pub fn icon_class(&self) -> &'static str {
        match self {
            SocialKind::GitHub | SocialKind::LinkedIn => "social-icon",
            SocialKind::Contact => "icon",
        }
    }
}

/// One link in the social row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: &'static str,
    pub href: &'static str,
}

impl SocialLink {
    /// In-page anchors stay in the current window.
    pub fn is_external(&self) -> bool {
        !self.href.starts_with('#')
    }
}

/// Biography block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub bio: &'static str,
    pub portrait: &'static str,
    pub portrait_alt: &'static str,
    pub links: &'static [SocialLink],
}

pub const PROFILE: Profile = Profile {
    name: "Camille Michel",
    headline: "Designing, coding and innovating for a better web.",
    bio: "After seven years listening to and supporting users, I naturally turned to web \
          development training so I could build solutions that fit them.",
    portrait: "/images/profile-pic.webp",
    portrait_alt: "Photo of Camille Michel",
    links: &[
        SocialLink {
            kind: SocialKind::GitHub,
            label: "GitHub",
            href: "https://github.com/CamilleMichel69",
        },
        SocialLink {
            kind: SocialKind::LinkedIn,
            label: "LinkedIn",
            href: "https://www.linkedin.com/in/camille-michel-a4364aa0/",
        },
        SocialLink {
            kind: SocialKind::Contact,
            label: "Contact",
            href: "#contact",
        },
    ],
};
