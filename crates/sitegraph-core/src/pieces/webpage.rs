use anyhow::{Context, Result};

use super::{PieceKind, SchemaPiece};
use crate::context::SchemaContext;
use crate::helpers::strip_tags;
use crate::ids;
use crate::node::{self, PotentialAction, ReadAction, SchemaNode};

/// The WebPage node for the current request. Its `@id` is the canonical
/// URL itself, which is what sibling pieces anchor their fragments on.
pub struct WebPagePiece;

impl SchemaPiece for WebPagePiece {
    fn kind(&self) -> PieceKind {
        PieceKind::WebPage
    }

    fn is_needed(&self, ctx: &SchemaContext) -> bool {
        ctx.canonical.is_some()
    }

    fn generate(&self, ctx: &SchemaContext) -> Result<SchemaNode> {
        let canonical = ctx.canonical.as_deref().context("no canonical url")?;

        let mut page = node::WebPage::new(
            ctx.page.kind.web_page_type().to_string(),
            canonical.to_string(),
            canonical.to_string(),
            strip_tags(ctx.title.as_deref().unwrap_or("")),
        );
        page.is_part_of = Some(ids::website(&ctx.site_url));
        page.publisher = ctx.publisher_id.clone();

        if let Some(article) = &ctx.page.article {
            page.date_published = article.published.clone();
            page.date_modified = article.modified.clone();
            page.author = article
                .author
                .as_deref()
                .map(|slug| ids::person(&ctx.site_url, slug));
        }

        if let Some(description) = ctx.description.as_deref() {
            let description = strip_tags(description);
            if !description.is_empty() {
                page.description = Some(description);
            }
        }

        page.in_language = Some(ctx.in_language.clone());
        page.potential_action = vec![PotentialAction::Read(ReadAction::new(canonical.to_string()))];

        Ok(SchemaNode::WebPage(page))
    }
}
