use anyhow::Result;

use super::{PieceKind, SchemaPiece};
use crate::context::SchemaContext;
use crate::helpers::strip_tags;
use crate::ids;
use crate::node::{self, PotentialAction, SchemaNode, SearchAction};

/// The WebSite node. Present on every page; carries the site search
/// action unless an extension suppresses it.
pub struct WebsitePiece;

impl SchemaPiece for WebsitePiece {
    fn kind(&self) -> PieceKind {
        PieceKind::Website
    }

    fn is_needed(&self, _ctx: &SchemaContext) -> bool {
        true
    }

    fn generate(&self, ctx: &SchemaContext) -> Result<SchemaNode> {
        let mut site = node::WebSite::new(
            ids::website(&ctx.site_url),
            ctx.site_url.clone(),
            strip_tags(&ctx.site_name),
        );
        site.publisher = ctx.publisher_id.clone();
        site.alternate_name = ctx.site_alternate_name.clone();

        let description = strip_tags(&ctx.site_tagline);
        if !description.is_empty() {
            site.description = Some(description);
        }

        if ctx.search_action_enabled {
            site.potential_action = Some(vec![PotentialAction::Search(SearchAction::for_site(
                &ctx.site_url,
            ))]);
        }

        site.in_language = Some(ctx.in_language.clone());
        Ok(SchemaNode::WebSite(site))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ContextBuilder;
    use crate::extensions::Extensions;
    use crate::page::PageRecord;
    use crate::site::SiteConfig;

    fn ctx_with(site_json: &str, extensions: &Extensions) -> SchemaContext {
        let site: SiteConfig = serde_json::from_str(site_json).unwrap();
        let page = PageRecord::default();
        ContextBuilder::new(&site, &page, extensions).build().unwrap()
    }

    fn generate(site_json: &str, extensions: &Extensions) -> String {
        let node = WebsitePiece.generate(&ctx_with(site_json, extensions)).unwrap();
        serde_json::to_string(&node).unwrap()
    }

    #[test]
    fn full_node_serializes_with_exact_key_order() {
        let json = generate(
            r#"{
                "url": "https://example.com/",
                "name": "My site",
                "tagline": "description",
                "represents": {"organization": {"name": "Acme"}}
            }"#,
            &Extensions::new(),
        );

        assert_eq!(
            json,
            concat!(
                r#"{"@type":"WebSite","#,
                r#""@id":"https://example.com/#website","#,
                r#""url":"https://example.com/","#,
                r#""name":"My site","#,
                r#""publisher":"https://example.com/#organization","#,
                r#""description":"description","#,
                r#""potentialAction":[{"@type":"SearchAction","#,
                r#""target":"https://example.com/?s={search_term_string}","#,
                r#""query-input":"required name=search_term_string"}],"#,
                r#""inLanguage":"en-US"}"#,
            )
        );
    }

    #[test]
    fn repeated_generation_is_identical() {
        let extensions = Extensions::new();
        let ctx = ctx_with(
            r#"{"url": "https://example.com/", "name": "My site"}"#,
            &extensions,
        );

        let first = serde_json::to_string(&WebsitePiece.generate(&ctx).unwrap()).unwrap();
        let second = serde_json::to_string(&WebsitePiece.generate(&ctx).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn suppressed_search_action_omits_the_key_entirely() {
        let extensions = Extensions::new().with_search_disabler(|_| true);
        let json = generate(
            r#"{"url": "https://example.com/", "name": "My site"}"#,
            &extensions,
        );

        assert!(!json.contains("potentialAction"));
        assert!(!json.contains("null"));
    }

    #[test]
    fn alternate_name_comes_from_the_options_store() {
        let json = generate(
            r#"{
                "url": "https://example.com/",
                "name": "My site",
                "options": {"alternate_website_name": "Shortname"}
            }"#,
            &Extensions::new(),
        );

        assert!(json.contains(r#""alternateName":"Shortname""#));
    }

    #[test]
    fn markup_is_stripped_from_name_and_tagline() {
        let json = generate(
            r#"{
                "url": "https://example.com/",
                "name": "My <em>site</em>",
                "tagline": "<p>Just\nanother   blog</p>"
            }"#,
            &Extensions::new(),
        );

        assert!(json.contains(r#""name":"My site""#));
        assert!(json.contains(r#""description":"Just another blog""#));
    }

    #[test]
    fn empty_tagline_omits_the_description() {
        let json = generate(
            r#"{"url": "https://example.com/", "name": "My site"}"#,
            &Extensions::new(),
        );

        assert!(!json.contains("description"));
    }
}
