use anyhow::{Context, Result};

use super::{PieceKind, SchemaPiece};
use crate::context::SchemaContext;
use crate::helpers::strip_tags;
use crate::ids;
use crate::node::{self, SchemaNode};

/// The Article node for post-like pages with article facts.
pub struct ArticlePiece;

impl SchemaPiece for ArticlePiece {
    fn kind(&self) -> PieceKind {
        PieceKind::Article
    }

    fn is_needed(&self, ctx: &SchemaContext) -> bool {
        ctx.page.article.is_some() && ctx.canonical.is_some()
    }

    fn generate(&self, ctx: &SchemaContext) -> Result<SchemaNode> {
        let canonical = ctx.canonical.as_deref().context("no canonical url")?;
        let facts = ctx.page.article.as_ref().context("page has no article facts")?;

        let mut article = node::Article::new(ids::article(canonical));
        article.is_part_of = Some(canonical.to_string());
        article.author = facts
            .author
            .as_deref()
            .map(|slug| ids::person(&ctx.site_url, slug));

        let headline = strip_tags(ctx.title.as_deref().unwrap_or(""));
        if !headline.is_empty() {
            article.headline = Some(headline);
        }

        article.date_published = facts.published.clone();
        article.date_modified = facts.modified.clone();
        article.main_entity_of_page = Some(canonical.to_string());
        article.publisher = ctx.publisher_id.clone();
        if ctx.page.image.is_some() {
            article.image = Some(ids::primary_image(canonical));
        }
        article.keywords = facts.tags.clone();
        article.article_section = facts.sections.clone();
        article.in_language = Some(ctx.in_language.clone());
        article.comment_count = facts.comment_count;

        Ok(SchemaNode::Article(article))
    }
}
