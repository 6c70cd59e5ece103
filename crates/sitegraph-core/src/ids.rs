//! Stable `@id` anchors for graph nodes.
//!
//! Independently generated nodes reference each other through these URIs,
//! so construction must be deterministic: the same logical entity yields
//! the identical string on every call, regardless of how the base URL
//! spells its trailing slash.

/// Anchor of the WebSite node, relative to the site URL.
pub const WEBSITE: &str = "#website";
/// Anchor of the Organization node, relative to the site URL.
pub const ORGANIZATION: &str = "#organization";
/// Anchor of the organization logo ImageObject, relative to the site URL.
pub const ORGANIZATION_LOGO: &str = "#logo";
/// Anchor of the person avatar ImageObject, relative to the site URL.
pub const PERSON_LOGO: &str = "#personlogo";
/// Anchor of the primary image, relative to the page canonical.
pub const PRIMARY_IMAGE: &str = "#primaryimage";
/// Anchor of the breadcrumb trail, relative to the page canonical.
pub const BREADCRUMB: &str = "#breadcrumb";
/// Anchor of the article node, relative to the page canonical.
pub const ARTICLE: &str = "#article";

/// Join a base URL and a fragment anchor into an `@id`.
///
/// Trailing slashes on the base are normalized to exactly one separator,
/// so `https://example.com` and `https://example.com/` both produce
/// `https://example.com/#website`. An empty base is a caller contract
/// violation and is not handled defensively.
pub fn anchored(base: &str, anchor: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), anchor)
}

pub fn website(site_url: &str) -> String {
    anchored(site_url, WEBSITE)
}

pub fn organization(site_url: &str) -> String {
    anchored(site_url, ORGANIZATION)
}

pub fn organization_logo(site_url: &str) -> String {
    anchored(site_url, ORGANIZATION_LOGO)
}

pub fn person_logo(site_url: &str) -> String {
    anchored(site_url, PERSON_LOGO)
}

/// Person nodes anchor under a path-style fragment keyed by a stable,
/// caller-supplied slug.
pub fn person(site_url: &str, slug: &str) -> String {
    format!("{}/#/schema/person/{}", site_url.trim_end_matches('/'), slug)
}

pub fn primary_image(canonical: &str) -> String {
    anchored(canonical, PRIMARY_IMAGE)
}

pub fn breadcrumb(canonical: &str) -> String {
    anchored(canonical, BREADCRUMB)
}

pub fn article(canonical: &str) -> String {
    anchored(canonical, ARTICLE)
}
