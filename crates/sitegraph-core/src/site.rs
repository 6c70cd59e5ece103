//! Site-level configuration: identity, representation, and options.

use serde::Deserialize;

use crate::options::InMemoryOptions;

/// Everything the host knows about the site itself, independent of the
/// page being rendered.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Absolute site URL. Validated when the context is built.
    pub url: String,
    /// Site name.
    pub name: String,
    /// Site tagline, rendered as the WebSite description.
    #[serde(default)]
    pub tagline: String,
    /// CMS locale such as `en_US`.
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Who the site represents; drives the publisher entity.
    #[serde(default)]
    pub represents: Represents,
    /// Site-wide options store.
    #[serde(default)]
    pub options: InMemoryOptions,
    /// Whether breadcrumb output is enabled site-wide.
    #[serde(default = "default_true")]
    pub breadcrumbs_enabled: bool,
}

fn default_locale() -> String {
    "en_US".to_string()
}

fn default_true() -> bool {
    true
}

/// The entity the site publishes as.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Represents {
    #[default]
    Nothing,
    Organization(OrganizationFacts),
    Person(PersonFacts),
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationFacts {
    pub name: String,
    #[serde(default)]
    pub logo: Option<ImageSource>,
    /// Social profile URLs, emitted as `sameAs`.
    #[serde(default)]
    pub profiles: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonFacts {
    pub name: String,
    /// Stable slug anchoring the person `@id`.
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub avatar: Option<ImageSource>,
    #[serde(default)]
    pub profiles: Vec<String>,
}

/// A host-resolved image: URL plus whatever dimensions and caption the
/// host could determine.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageSource {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub caption: Option<String>,
}
