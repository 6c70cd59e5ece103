use super::{non_empty, option_value, paginated_canonical, Presentation};
use crate::helpers::Paginator;
use crate::options::SiteOptions;
use crate::page::PageRecord;

/// Post type archives. The options keys carry a `ptarchive-` infix and
/// canonicals are paginated past the first page.
pub struct PostTypeArchivePresentation<'a> {
    pub record: &'a PageRecord,
    pub options: &'a dyn SiteOptions,
    pub pager: &'a dyn Paginator,
}

impl PostTypeArchivePresentation<'_> {
    fn subtype(&self) -> &str {
        self.record.subtype.as_deref().unwrap_or("post")
    }
}

impl Presentation for PostTypeArchivePresentation<'_> {
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
        Some(format!("noindex-ptarchive-{}", self.subtype()))
    }

    fn title(&self) -> Option<String> {
        non_empty(self.record.title.clone())
            .or_else(|| option_value(self.options, &format!("title-ptarchive-{}", self.subtype())))
    }

    fn description(&self) -> Option<String> {
        non_empty(self.record.description.clone()).or_else(|| {
            option_value(self.options, &format!("metadesc-ptarchive-{}", self.subtype()))
        })
    }

    fn canonical(&self) -> Option<String> {
        paginated_canonical(self.record(), self.pager())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::ArchivePager;
    use crate::options::InMemoryOptions;
    use crate::page::PageKind;

    fn record() -> PageRecord {
        PageRecord {
            kind: PageKind::PostTypeArchive,
            subtype: Some("book".to_string()),
            permalink: Some("https://example.com/books/".to_string()),
            ..PageRecord::default()
        }
    }

    #[test]
    fn explicit_title_wins() {
        let options = InMemoryOptions::new().with("title-ptarchive-book", "Books archive");
        let pager = ArchivePager::default();
        let record = PageRecord {
            title: Some("All the books".to_string()),
            ..record()
        };
        let presentation = PostTypeArchivePresentation {
            record: &record,
            options: &options,
            pager: &pager,
        };

        assert_eq!(presentation.title().as_deref(), Some("All the books"));
    }

    #[test]
    fn title_falls_back_to_the_ptarchive_template() {
        let options = InMemoryOptions::new().with("title-ptarchive-book", "Books archive");
        let pager = ArchivePager::default();
        let record = record();
        let presentation = PostTypeArchivePresentation {
            record: &record,
            options: &options,
            pager: &pager,
        };

        assert_eq!(presentation.title().as_deref(), Some("Books archive"));
    }

    #[test]
    fn canonical_keeps_the_permalink_on_the_first_page() {
        let options = InMemoryOptions::new();
        let pager = ArchivePager::new(1);
        let record = record();
        let presentation = PostTypeArchivePresentation {
            record: &record,
            options: &options,
            pager: &pager,
        };

        assert_eq!(
            presentation.canonical().as_deref(),
            Some("https://example.com/books/")
        );
    }

    #[test]
    fn canonical_paginates_past_the_first_page() {
        let options = InMemoryOptions::new();
        let pager = ArchivePager::new(3);
        let record = record();
        let presentation = PostTypeArchivePresentation {
            record: &record,
            options: &options,
            pager: &pager,
        };

        assert_eq!(
            presentation.canonical().as_deref(),
            Some("https://example.com/books/page/3/")
        );
    }

    #[test]
    fn canonical_is_absent_without_a_permalink() {
        let options = InMemoryOptions::new();
        let pager = ArchivePager::new(2);
        let record = PageRecord {
            permalink: None,
            ..record()
        };
        let presentation = PostTypeArchivePresentation {
            record: &record,
            options: &options,
            pager: &pager,
        };

        assert_eq!(presentation.canonical(), None);
    }

    #[test]
    fn noindex_option_is_scoped_to_the_subtype() {
        let options = InMemoryOptions::new().with("noindex-ptarchive-book", "true");
        let pager = ArchivePager::default();
        let record = record();
        let presentation = PostTypeArchivePresentation {
            record: &record,
            options: &options,
            pager: &pager,
        };

        assert!(!presentation.robots().index);
    }
}
