//! Entry point for the portfolio site.
//!
//! Loads the configuration and project catalog, then launches the Dioxus
//! desktop window.

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

use folio_site::components::Portfolio;
use folio_site::theme::{Theme, CURRENT_THEME};
use folio_site::{NavTimerPolicy, ProjectCatalog, SiteConfig, STYLES_CSS};

/// Everything the root component needs, resolved before launch.
struct Site {
    config: SiteConfig,
    catalog: ProjectCatalog,
}

static SITE: OnceLock<Site> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "folio-site")]
#[command(about = "Personal portfolio: biography, skills and projects")]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to a TOML project catalog (overrides the config file)
    #[arg(short, long)]
    projects: Option<PathBuf>,

    /// Carousel auto-advance period in milliseconds
    #[arg(long)]
    period_ms: Option<u64>,

    /// Restart the carousel timer after manual navigation
    #[arg(long)]
    restart_on_navigate: bool,

    /// Initial theme (light or dark)
    #[arg(long, value_parser = parse_theme)]
    theme: Option<Theme>,
}

fn parse_theme(value: &str) -> Result<Theme, String> {
    Theme::from_css_value(value).ok_or_else(|| format!("unknown theme `{}`", value))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    let site = resolve_site(args)?;

    tracing::info!(
        projects = site.catalog.len(),
        period_ms = site.config.carousel.period_ms,
        nav_policy = site.config.carousel.nav_policy.as_str(),
        "Starting portfolio"
    );

    let window = site.config.window.clone();
    SITE.set(site).ok();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(window.title)
                        .with_inner_size(LogicalSize::new(window.width, window.height))
                        .with_maximized(window.maximized),
                )
                .with_custom_head(format!("<style>{}</style>", STYLES_CSS)),
        )
        .launch(RootApp);

    Ok(())
}

/// Merges the config file with CLI overrides and loads the catalog.
fn resolve_site(args: Args) -> anyhow::Result<Site> {
    let mut config = match &args.config {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SiteConfig::default(),
    };

    if let Some(period_ms) = args.period_ms {
        config.carousel.period_ms = period_ms;
    }
    if args.restart_on_navigate {
        config.carousel.nav_policy = NavTimerPolicy::RestartOnNavigate;
    }
    if let Some(theme) = args.theme {
        config.theme = theme;
    }
    if args.projects.is_some() {
        config.projects_file = args.projects;
    }
    config.validate()?;

    let catalog = match &config.projects_file {
        Some(path) => ProjectCatalog::load(path)
            .with_context(|| format!("loading projects {}", path.display()))?,
        None => ProjectCatalog::builtin()?,
    };

    Ok(Site { config, catalog })
}

/// Root component: applies the configured theme and shares carousel settings.
#[component]
fn RootApp() -> Element {
    let site = SITE.get();

    use_context_provider(move || site.map(|s| s.config.carousel).unwrap_or_default());
    use_hook(move || {
        if let Some(site) = site {
            *CURRENT_THEME.write() = site.config.theme;
        }
    });

    use_drop(|| {
        tracing::info!("Shutting down portfolio");
    });

    let catalog = site.map(|s| s.catalog.clone()).unwrap_or_default();

    rsx! {
        Portfolio { catalog }
    }
}
