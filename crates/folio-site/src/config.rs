//! Site configuration loaded from TOML.
//!
//! Every field has a default, so an absent or partial file is fine:
//!
//! ```toml
//! theme = "dark"
//! projects_file = "projects.toml"
//!
//! [window]
//! title = "Portfolio"
//! width = 1280
//! height = 860
//!
//! [carousel]
//! period_ms = 2000
//! nav_policy = "restart-on-navigate"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::autoplay::DEFAULT_PERIOD;
use crate::error::{self, Result, SiteError};
use crate::state::NavTimerPolicy;
use crate::theme::Theme;

/// Carousel timing, shared with the modal through context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselSettings {
    pub period_ms: u64,
    pub nav_policy: NavTimerPolicy,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            period_ms: DEFAULT_PERIOD.as_millis() as u64,
            nav_policy: NavTimerPolicy::default(),
        }
    }
}

impl CarouselSettings {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }
}

/// Desktop window settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub maximized: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Camille Michel - Portfolio".to_string(),
            width: 1280,
            height: 860,
            maximized: false,
        }
    }
}

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub window: WindowConfig,
    pub carousel: CarouselSettings,
    pub theme: Theme,
    /// Replaces the built-in project catalog when set.
    pub projects_file: Option<PathBuf>,
}

impl SiteConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str, origin: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(source).map_err(|source| SiteError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file. A relative `projects_file` is resolved
    /// against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let source = error::read_to_string(path)?;
        let mut config = Self::from_toml_str(&source, &path.display().to_string())?;

        if let (Some(projects), Some(dir)) = (&config.projects_file, path.parent()) {
            if projects.is_relative() {
                config.projects_file = Some(dir.join(projects));
            }
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.carousel.period_ms == 0 {
            return Err(SiteError::InvalidConfig(
                "carousel.period_ms must be greater than zero".to_string(),
            ));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(SiteError::InvalidConfig(format!(
                "window size {}x{} is empty",
                self.window.width, self.window.height
            )));
        }
        Ok(())
    }
}
