//! The resolved content record for the page being rendered.

use serde::Deserialize;

use crate::site::ImageSource;

/// Page archetypes with distinct presentation fallback chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    /// A single content page (post, page, product, ...).
    #[default]
    Post,
    /// An archive listing all entries of one post type.
    PostTypeArchive,
    /// A static page configured to list the latest posts.
    StaticPostsPage,
}

impl PageKind {
    /// The schema.org `@type` of the WebPage node for this archetype.
    pub fn web_page_type(self) -> &'static str {
        match self {
            PageKind::Post => "WebPage",
            PageKind::PostTypeArchive | PageKind::StaticPostsPage => "CollectionPage",
        }
    }
}

/// What the host CMS resolved about the current content object.
///
/// Every field except `kind` is optional: absent values mean "not set" and
/// feed the presentation fallback chains, never an error.
#[derive(Debug, Clone, Deserialize)]
pub struct PageRecord {
    #[serde(default)]
    pub kind: PageKind,
    /// Content subtype, e.g. the post type of an archive.
    #[serde(default)]
    pub subtype: Option<String>,
    /// Explicit SEO title override.
    #[serde(default)]
    pub title: Option<String>,
    /// Explicit meta description override.
    #[serde(default)]
    pub description: Option<String>,
    /// Explicit canonical override; used verbatim when set.
    #[serde(default)]
    pub canonical: Option<String>,
    #[serde(default)]
    pub permalink: Option<String>,
    /// Explicit robots noindex override; `None` defers to options.
    #[serde(default)]
    pub robots_noindex: Option<bool>,
    #[serde(default)]
    pub robots_nofollow: Option<bool>,
    /// Primary image of the page, when the host found one.
    #[serde(default)]
    pub image: Option<ImageSource>,
    /// Article facts for post-like pages.
    #[serde(default)]
    pub article: Option<ArticleFacts>,
    /// Breadcrumb trail ending at the current page.
    #[serde(default)]
    pub breadcrumbs: Vec<Crumb>,
    /// 1-based archive page number of the current request.
    #[serde(default = "default_page")]
    pub current_page: usize,
}

fn default_page() -> usize {
    1
}

impl Default for PageRecord {
    fn default() -> Self {
        Self {
            kind: PageKind::default(),
            subtype: None,
            title: None,
            description: None,
            canonical: None,
            permalink: None,
            robots_noindex: None,
            robots_nofollow: None,
            image: None,
            article: None,
            breadcrumbs: Vec::new(),
            current_page: default_page(),
        }
    }
}

/// Facts of the underlying article, passed through as opaque values. Dates
/// are ISO 8601 strings produced by the host.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleFacts {
    /// Stable slug of the author, anchoring the author reference.
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub published: Option<String>,
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub sections: Vec<String>,
    #[serde(default)]
    pub comment_count: Option<u64>,
}

/// One entry of the breadcrumb trail.
#[derive(Debug, Clone, Deserialize)]
pub struct Crumb {
    pub url: String,
    pub text: String,
}
