//! Presentation fallback chains.
//!
//! Every outgoing field follows the same shape: an explicit value on the
//! page record wins; otherwise a derived default applies, usually an
//! options-store entry keyed by content type; otherwise the field is
//! omitted. Each page archetype supplies its own chains by overriding
//! the trait defaults.

mod archive;
mod post;
mod static_posts_page;

pub use archive::PostTypeArchivePresentation;
pub use post::PostPresentation;
pub use static_posts_page::StaticPostsPagePresentation;

use crate::helpers::Paginator;
use crate::options::SiteOptions;
use crate::page::{PageKind, PageRecord};

/// Robots directives resolved for the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
}

impl Robots {
    /// The meta tag content, e.g. `noindex, follow`.
    pub fn as_directive(&self) -> String {
        format!(
            "{}, {}",
            if self.index { "index" } else { "noindex" },
            if self.follow { "follow" } else { "nofollow" }
        )
    }
}

impl Default for Robots {
    fn default() -> Self {
        Self {
            index: true,
            follow: true,
        }
    }
}

/// Field resolution for one page archetype.
///
/// Defaults implement the single-page behavior; archive archetypes
/// override the chains that differ.
pub trait Presentation {
    fn record(&self) -> &PageRecord;
    fn options(&self) -> &dyn SiteOptions;
    fn pager(&self) -> &dyn Paginator;

    /// Options key carrying the noindex default for this archetype, when
    /// one exists.
    fn noindex_option_key(&self) -> Option<String> {
        None
    }

    fn title(&self) -> Option<String> {
        non_empty(self.record().title.clone())
    }

    fn description(&self) -> Option<String> {
        non_empty(self.record().description.clone())
    }

    /// Single pages use the permalink as-is; archive archetypes override
    /// with the paginated chain.
    fn canonical(&self) -> Option<String> {
        non_empty(self.record().canonical.clone())
            .or_else(|| non_empty(self.record().permalink.clone()))
    }

    fn robots(&self) -> Robots {
        let record = self.record();
        let index = match record.robots_noindex {
            Some(noindex) => !noindex,
            None => match self.noindex_option_key() {
                Some(key) => self.options().get(&key, "false") != "true",
                None => true,
            },
        };
        Robots {
            index,
            follow: record.robots_nofollow != Some(true),
        }
    }
}

/// Pick the presentation matching the record's archetype.
pub fn for_record<'a>(
    record: &'a PageRecord,
    options: &'a dyn SiteOptions,
    pager: &'a dyn Paginator,
) -> Box<dyn Presentation + 'a> {
    match record.kind {
        PageKind::Post => Box::new(PostPresentation {
            record,
            options,
            pager,
        }),
        PageKind::PostTypeArchive => Box::new(PostTypeArchivePresentation {
            record,
            options,
            pager,
        }),
        PageKind::StaticPostsPage => Box::new(StaticPostsPagePresentation {
            record,
            options,
            pager,
        }),
    }
}

/// Treat empty strings as absent values.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// An options-store value, or `None` when unset or empty.
fn option_value(options: &dyn SiteOptions, key: &str) -> Option<String> {
    non_empty(Some(options.get(key, "")))
}

/// Canonical chain for paginated archives: an explicit value is kept
/// verbatim; the permalink is paginated when the request is past the
/// first page; without either there is no canonical.
fn paginated_canonical(record: &PageRecord, pager: &dyn Paginator) -> Option<String> {
    if let Some(canonical) = non_empty(record.canonical.clone()) {
        return Some(canonical);
    }

    let permalink = non_empty(record.permalink.clone())?;
    let page = pager.current_page();
    if page > 1 {
        Some(pager.paginated_url(&permalink, page))
    } else {
        Some(permalink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::ArchivePager;
    use crate::options::InMemoryOptions;

    #[test]
    fn robots_directive_renders_both_parts() {
        assert_eq!(Robots::default().as_directive(), "index, follow");
        assert_eq!(
            Robots {
                index: false,
                follow: true
            }
            .as_directive(),
            "noindex, follow"
        );
    }

    #[test]
    fn explicit_noindex_beats_the_options_default() {
        let options = InMemoryOptions::new().with("noindex-post", "true");
        let pager = ArchivePager::default();
        let record = PageRecord {
            robots_noindex: Some(false),
            ..PageRecord::default()
        };
        let presentation = for_record(&record, &options, &pager);

        assert!(presentation.robots().index);
    }

    #[test]
    fn options_noindex_applies_when_record_is_silent() {
        let options = InMemoryOptions::new().with("noindex-post", "true");
        let pager = ArchivePager::default();
        let record = PageRecord::default();
        let presentation = for_record(&record, &options, &pager);

        let robots = presentation.robots();
        assert!(!robots.index);
        assert!(robots.follow);
    }

    #[test]
    fn factory_dispatches_on_the_archetype() {
        let options = InMemoryOptions::new();
        let pager = ArchivePager::new(2);
        let record = PageRecord {
            kind: PageKind::StaticPostsPage,
            permalink: Some("https://example.com/blog/".to_string()),
            ..PageRecord::default()
        };

        let presentation = for_record(&record, &options, &pager);
        assert_eq!(
            presentation.canonical().as_deref(),
            Some("https://example.com/blog/page/2/")
        );
    }
}
