//! Project records and the catalog they are loaded from.

use std::path::Path;

use serde::Deserialize;

use crate::error::{self, Result, SiteError};

/// Catalog shipped with the binary.
const BUILTIN_PROJECTS: &str = include_str!("../../content/projects.toml");

/// A single portfolio item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub title: String,
    /// Picture references in display order.
    #[serde(default)]
    pub pictures: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub competences: Vec<String>,
    #[serde(default, alias = "githublink")]
    pub github_link: Option<String>,
}

impl Project {
    /// First picture, used as the gallery cover.
    pub fn cover(&self) -> Option<&str> {
        self.pictures.first().map(String::as_str)
    }

    fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(SiteError::InvalidProject {
                title: self.title.clone(),
                reason: "title is empty".to_string(),
            });
        }
        if let Some(link) = &self.github_link {
            if !(link.starts_with("https://") || link.starts_with("http://")) {
                return Err(SiteError::InvalidProject {
                    title: self.title.clone(),
                    reason: format!("link `{}` is not an http(s) URL", link),
                });
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "project")]
    projects: Vec<Project>,
}

/// Ordered, validated list of projects shown in the gallery.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    /// Parses a catalog of `[[project]]` tables.
    pub fn from_toml_str(source: &str, origin: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(source).map_err(|source| SiteError::Parse {
            origin: origin.to_string(),
            source,
        })?;

        for project in &file.projects {
            project.validate()?;
            if project.pictures.is_empty() {
                tracing::warn!(title = %project.title, "Project has no pictures");
            }
        }

        Ok(Self {
            projects: file.projects,
        })
    }

    /// Loads a catalog from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let source = error::read_to_string(path)?;
        Self::from_toml_str(&source, &path.display().to_string())
    }

    /// The catalog embedded at compile time.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_PROJECTS, "built-in catalog")
    }

    pub fn get(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl From<Vec<Project>> for ProjectCatalog {
    fn from(projects: Vec<Project>) -> Self {
        Self { projects }
    }
}
