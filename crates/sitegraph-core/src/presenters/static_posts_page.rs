use super::{non_empty, option_value, paginated_canonical, Presentation};
use crate::helpers::Paginator;
use crate::options::SiteOptions;
use crate::page::PageRecord;

/// The blog home when it is served by a designated static page. Behaves
/// like a single page for titles but paginates its canonical like an
/// archive.
pub struct StaticPostsPagePresentation<'a> {
    pub record: &'a PageRecord,
    pub options: &'a dyn SiteOptions,
    pub pager: &'a dyn Paginator,
}

impl Presentation for StaticPostsPagePresentation<'_> {
    fn record(&self) -> &PageRecord {
        self.record
    }

    fn options(&self) -> &dyn SiteOptions {
        self.options
    }

    fn pager(&self) -> &dyn Paginator {
        self.pager
    }

    fn title(&self) -> Option<String> {
        non_empty(self.record.title.clone())
            .or_else(|| option_value(self.options, "title-posts-page"))
    }

    fn description(&self) -> Option<String> {
        non_empty(self.record.description.clone())
            .or_else(|| option_value(self.options, "metadesc-posts-page"))
    }

    fn canonical(&self) -> Option<String> {
        paginated_canonical(self.record(), self.pager())
    }
}
