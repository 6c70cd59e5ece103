use anyhow::{Context, Result};

use super::{PieceKind, SchemaPiece};
use crate::context::SchemaContext;
use crate::ids;
use crate::node::{self, Graph, SchemaNode};

/// The page's primary ImageObject. Decoration links the WebPage node to
/// it once both exist.
pub struct MainImagePiece;

impl SchemaPiece for MainImagePiece {
    fn kind(&self) -> PieceKind {
        PieceKind::MainImage
    }

    fn is_needed(&self, ctx: &SchemaContext) -> bool {
        ctx.page.image.is_some() && ctx.canonical.is_some()
    }

    fn generate(&self, ctx: &SchemaContext) -> Result<SchemaNode> {
        let canonical = ctx.canonical.as_deref().context("no canonical url")?;
        let source = ctx.page.image.as_ref().context("page has no image")?;

        let mut image = node::ImageObject::new(ids::primary_image(canonical), source.url.clone());
        image.in_language = Some(ctx.in_language.clone());
        image.width = source.width;
        image.height = source.height;
        image.caption = source.caption.clone().filter(|c| !c.is_empty());

        Ok(SchemaNode::ImageObject(image))
    }

    fn decorate(&self, ctx: &SchemaContext, graph: &mut Graph) {
        let Some(canonical) = ctx.canonical.as_deref() else {
            return;
        };
        let id = ids::primary_image(canonical);
        if !graph.contains_id(&id) {
            return;
        }
        if let Some(page) = graph.web_page_mut() {
            page.primary_image_of_page = Some(id.clone());
            page.image = Some(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ContextBuilder;
    use crate::extensions::Extensions;
    use crate::page::PageRecord;
    use crate::site::SiteConfig;

    fn ctx(page: PageRecord) -> SchemaContext {
        let site: SiteConfig =
            serde_json::from_str(r#"{"url": "https://example.com/", "name": "My site"}"#).unwrap();
        let extensions = Extensions::new();
        ContextBuilder::new(&site, &page, &extensions).build().unwrap()
    }

    fn page_with_image() -> PageRecord {
        serde_json::from_str(
            r#"{
                "permalink": "https://example.com/post/",
                "image": {"url": "https://example.com/hero.jpg", "width": 1200, "height": 630, "caption": "Hero"}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn needs_both_an_image_and_a_canonical() {
        assert!(MainImagePiece.is_needed(&ctx(page_with_image())));
        assert!(!MainImagePiece.is_needed(&ctx(PageRecord::default())));

        let mut no_canonical = page_with_image();
        no_canonical.permalink = None;
        assert!(!MainImagePiece.is_needed(&ctx(no_canonical)));
    }

    #[test]
    fn anchors_on_the_canonical_url() {
        let ctx = ctx(page_with_image());
        let node = MainImagePiece.generate(&ctx).unwrap();
        let image = match node {
            SchemaNode::ImageObject(image) => image,
            other => panic!("expected an image, got {}", other.schema_type()),
        };

        assert_eq!(image.id, "https://example.com/post/#primaryimage");
        assert_eq!(image.url, "https://example.com/hero.jpg");
        assert_eq!(image.content_url, "https://example.com/hero.jpg");
        assert_eq!(image.width, Some(1200));
        assert_eq!(image.height, Some(630));
        assert_eq!(image.caption.as_deref(), Some("Hero"));
        assert_eq!(image.in_language.as_deref(), Some("en-US"));
    }

    #[test]
    fn decorate_links_the_web_page_both_ways() {
        let ctx = ctx(page_with_image());
        let mut graph = Graph::new();
        graph.push(MainImagePiece.generate(&ctx).unwrap());
        graph.push(SchemaNode::WebPage(node::WebPage::new(
            "WebPage".to_string(),
            "https://example.com/post/".to_string(),
            "https://example.com/post/".to_string(),
            "Post".to_string(),
        )));

        MainImagePiece.decorate(&ctx, &mut graph);
        let page = graph.web_page_mut().unwrap();
        assert_eq!(
            page.primary_image_of_page.as_deref(),
            Some("https://example.com/post/#primaryimage")
        );
        assert_eq!(
            page.image.as_deref(),
            Some("https://example.com/post/#primaryimage")
        );
    }

    #[test]
    fn decorate_skips_when_generation_never_ran() {
        let ctx = ctx(page_with_image());
        let mut graph = Graph::new();
        graph.push(SchemaNode::WebPage(node::WebPage::new(
            "WebPage".to_string(),
            "https://example.com/post/".to_string(),
            "https://example.com/post/".to_string(),
            "Post".to_string(),
        )));

        MainImagePiece.decorate(&ctx, &mut graph);
        assert!(graph.web_page_mut().unwrap().primary_image_of_page.is_none());
    }
}
