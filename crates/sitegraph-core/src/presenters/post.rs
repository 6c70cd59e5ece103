use super::{non_empty, option_value, Presentation};
use crate::helpers::Paginator;
use crate::options::SiteOptions;
use crate::page::PageRecord;

/// Single posts and pages. Titles and descriptions fall back to the
/// per-content-type templates in the options store.
pub struct PostPresentation<'a> {
    pub record: &'a PageRecord,
    pub options: &'a dyn SiteOptions,
    pub pager: &'a dyn Paginator,
}

impl PostPresentation<'_> {
    fn subtype(&self) -> &str {
        self.record.subtype.as_deref().unwrap_or("post")
    }
}

impl Presentation for PostPresentation<'_> {
    fn record(&self) -> &PageRecord {
        self.record
    }

    fn options(&self) -> &dyn SiteOptions {
        self.options
    }

    fn pager(&self) -> &dyn Paginator {
        self.pager
    }

    fn noindex_option_key(&self) -> Option<String> {
        Some(format!("noindex-{}", self.subtype()))
    }

    fn title(&self) -> Option<String> {
        non_empty(self.record.title.clone())
            .or_else(|| option_value(self.options, &format!("title-{}", self.subtype())))
    }

    fn description(&self) -> Option<String> {
        non_empty(self.record.description.clone())
            .or_else(|| option_value(self.options, &format!("metadesc-{}", self.subtype())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::ArchivePager;
    use crate::options::InMemoryOptions;

    fn record() -> PageRecord {
        PageRecord {
            subtype: Some("post".to_string()),
            permalink: Some("https://example.com/permalink".to_string()),
            ..PageRecord::default()
        }
    }

    #[test]
    fn explicit_title_wins() {
        let options = InMemoryOptions::new().with("title-post", "fallback title");
        let pager = ArchivePager::default();
        let record = PageRecord {
            title: Some("post title".to_string()),
            ..record()
        };
        let presentation = PostPresentation {
            record: &record,
            options: &options,
            pager: &pager,
        };

        assert_eq!(presentation.title().as_deref(), Some("post title"));
    }

    #[test]
    fn title_falls_back_to_the_subtype_template() {
        let options = InMemoryOptions::new().with("title-post", "fallback title");
        let pager = ArchivePager::default();
        let record = record();
        let presentation = PostPresentation {
            record: &record,
            options: &options,
            pager: &pager,
        };

        assert_eq!(presentation.title().as_deref(), Some("fallback title"));
    }

    #[test]
    fn title_is_absent_without_a_template() {
        let options = InMemoryOptions::new();
        let pager = ArchivePager::default();
        let record = record();
        let presentation = PostPresentation {
            record: &record,
            options: &options,
            pager: &pager,
        };

        assert_eq!(presentation.title(), None);
    }

    #[test]
    fn canonical_prefers_the_explicit_value() {
        let options = InMemoryOptions::new();
        let pager = ArchivePager::default();
        let record = PageRecord {
            canonical: Some("https://example.com/canonical".to_string()),
            ..record()
        };
        let presentation = PostPresentation {
            record: &record,
            options: &options,
            pager: &pager,
        };

        assert_eq!(
            presentation.canonical().as_deref(),
            Some("https://example.com/canonical")
        );
    }

    #[test]
    fn canonical_falls_back_to_the_permalink() {
        let options = InMemoryOptions::new();
        let pager = ArchivePager::default();
        let record = record();
        let presentation = PostPresentation {
            record: &record,
            options: &options,
            pager: &pager,
        };

        assert_eq!(
            presentation.canonical().as_deref(),
            Some("https://example.com/permalink")
        );
    }

    #[test]
    fn description_uses_the_metadesc_template() {
        let options = InMemoryOptions::new().with("metadesc-post", "fallback description");
        let pager = ArchivePager::default();
        let record = record();
        let presentation = PostPresentation {
            record: &record,
            options: &options,
            pager: &pager,
        };

        assert_eq!(
            presentation.description().as_deref(),
            Some("fallback description")
        );
    }
}
