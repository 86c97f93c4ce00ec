//! Personal portfolio site.
//!
//! A Dioxus desktop application presenting a biography, grouped skill tags and
//! a project gallery whose details open in a modal with an auto-advancing
//! picture carousel.

pub mod autoplay;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod state;
pub mod theme;

pub use config::{CarouselSettings, SiteConfig, WindowConfig};
pub use content::{Project, ProjectCatalog};
pub use error::{Result, SiteError};
pub use state::{Carousel, ModalView, NavTimerPolicy, Session};

/// Shared CSS for every component.
pub const STYLES_CSS: &str = include_str!("../assets/styles.css");
