//! Small collaborator seams: HTML stripping, locale normalization, and
//! pagination.

use once_cell::sync::Lazy;
use regex::Regex;

/// Strip HTML down to readable text.
///
/// Script and style elements are removed with their contents. Remaining
/// tags become spaces; whitespace runs collapse to a single space.
pub fn strip_tags(html: &str) -> String {
    static RE_TAG_BLOCKS: Lazy<Vec<Regex>> = Lazy::new(|| {
        [
            r"(?is)<script[^>]*?>[\s\S]*?</script>",
            r"(?is)<style[^>]*?>[\s\S]*?</style>",
        ]
        .into_iter()
        .map(|pattern| Regex::new(pattern).expect("invalid block regex"))
        .collect()
    });
    static RE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").expect("invalid tag regex"));
    static RE_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("invalid whitespace regex"));

    let mut clean = html.to_string();
    for re in RE_TAG_BLOCKS.iter() {
        clean = re.replace_all(&clean, " ").into_owned();
    }
    let clean = RE_TAG.replace_all(&clean, " ");
    RE_WS.replace_all(&clean, " ").trim().to_string()
}

/// Convert a CMS locale (`en_US`) to the BCP-47 form (`en-US`) used by
/// `inLanguage` fields. Already-dashed or bare language codes pass
/// through unchanged.
pub fn normalize_locale(locale: &str) -> String {
    locale.replace('_', "-")
}

/// Pagination facts for the current request.
pub trait Paginator {
    /// 1-based page number of the current archive view.
    fn current_page(&self) -> usize;

    /// The URL of a specific page of a paginated archive.
    fn paginated_url(&self, base: &str, page: usize) -> String;
}

/// Pretty-permalink pager appending the `page/{n}/` path segment.
#[derive(Debug, Clone, Copy)]
pub struct ArchivePager {
    current: usize,
}

impl ArchivePager {
    pub fn new(current: usize) -> Self {
        Self {
            current: current.max(1),
        }
    }
}

impl Default for ArchivePager {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Paginator for ArchivePager {
    fn current_page(&self) -> usize {
        self.current
    }

    fn paginated_url(&self, base: &str, page: usize) -> String {
        format!("{}/page/{}/", base.trim_end_matches('/'), page)
    }
}
