//! The per-request context shared by every graph piece.
//!
//! Building the context is the only fallible step of assembly: the site
//! URL must parse. Presentation chains and extension decisions are
//! resolved here once, so pieces read plain values instead of re-running
//! fallbacks.

use anyhow::{bail, Context, Result};
use url::Url;

use crate::extensions::Extensions;
use crate::helpers::{normalize_locale, ArchivePager};
use crate::ids;
use crate::options::SiteOptions;
use crate::page::PageRecord;
use crate::presenters;
use crate::site::{OrganizationFacts, PersonFacts, Represents, SiteConfig};

/// Everything a piece may read while generating its node.
#[derive(Debug, Clone)]
pub struct SchemaContext {
    /// Site URL with a guaranteed trailing slash.
    pub site_url: String,
    pub site_name: String,
    /// Alternate site name from the options store, when configured.
    pub site_alternate_name: Option<String>,
    /// Site tagline; empty when the site has none.
    pub site_tagline: String,
    /// BCP-47 language tag for `inLanguage` fields.
    pub in_language: String,
    /// Facts of the represented organization, when the site is one.
    pub organization: Option<OrganizationFacts>,
    /// Facts of the represented person, when the site is one.
    pub person: Option<PersonFacts>,
    /// `@id` of the publisher entity, when the site represents one.
    pub publisher_id: Option<String>,
    pub breadcrumbs_enabled: bool,
    /// Whether the WebSite node advertises the site search action.
    pub search_action_enabled: bool,
    /// The resolved content record.
    pub page: PageRecord,
    /// Canonical URL after the presentation fallback chain.
    pub canonical: Option<String>,
    /// Title after the presentation fallback chain.
    pub title: Option<String>,
    /// Meta description after the presentation fallback chain.
    pub description: Option<String>,
}

impl SchemaContext {
    /// The canonical URL, or empty when none resolved. Pieces that anchor
    /// ids on the canonical check `canonical` directly.
    pub fn canonical_or_empty(&self) -> &str {
        self.canonical.as_deref().unwrap_or("")
    }
}

/// Resolves a [`SchemaContext`] from the host inputs.
pub struct ContextBuilder<'a> {
    site: &'a SiteConfig,
    page: &'a PageRecord,
    extensions: &'a Extensions,
}

impl<'a> ContextBuilder<'a> {
    pub fn new(site: &'a SiteConfig, page: &'a PageRecord, extensions: &'a Extensions) -> Self {
        Self {
            site,
            page,
            extensions,
        }
    }

    pub fn build(self) -> Result<SchemaContext> {
        let parsed = Url::parse(&self.site.url)
            .with_context(|| format!("invalid site url: {}", self.site.url))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            bail!("site url must be http or https: {}", self.site.url);
        }

        let mut site_url = self.site.url.clone();
        if !site_url.ends_with('/') {
            site_url.push('/');
        }

        let pager = ArchivePager::new(self.page.current_page);
        let presentation = presenters::for_record(self.page, &self.site.options, &pager);
        let canonical = presentation.canonical();
        let title = presentation.title();
        let description = presentation.description();

        let alternate_name = self.site.options.get("alternate_website_name", "");
        let site_alternate_name = if alternate_name.is_empty() {
            None
        } else {
            Some(alternate_name)
        };

        let (organization, person, publisher_id) = match &self.site.represents {
            Represents::Nothing => (None, None, None),
            Represents::Organization(org) => (
                Some(org.clone()),
                None,
                Some(ids::organization(&site_url)),
            ),
            Represents::Person(person) => (
                None,
                Some(person.clone()),
                Some(ids::person(&site_url, &person.slug)),
            ),
        };

        Ok(SchemaContext {
            site_url,
            site_name: self.site.name.clone(),
            site_alternate_name,
            site_tagline: self.site.tagline.clone(),
            in_language: normalize_locale(&self.site.locale),
            organization,
            person,
            publisher_id,
            breadcrumbs_enabled: self.site.breadcrumbs_enabled,
            search_action_enabled: !self.extensions.search_disabled(),
            page: self.page.clone(),
            canonical,
            title,
            description,
        })
    }
}
