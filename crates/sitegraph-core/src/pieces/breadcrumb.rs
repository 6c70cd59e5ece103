use anyhow::{Context, Result};

use super::{PieceKind, SchemaPiece};
use crate::context::SchemaContext;
use crate::helpers::strip_tags;
use crate::ids;
use crate::node::{self, Graph, ListItem, SchemaNode};

/// The BreadcrumbList for the current trail. The final entry stands for
/// the page itself and carries no URL.
pub struct BreadcrumbPiece;

impl SchemaPiece for BreadcrumbPiece {
    fn kind(&self) -> PieceKind {
        PieceKind::Breadcrumb
    }

    fn is_needed(&self, ctx: &SchemaContext) -> bool {
        ctx.breadcrumbs_enabled && !ctx.page.breadcrumbs.is_empty() && ctx.canonical.is_some()
    }

    fn generate(&self, ctx: &SchemaContext) -> Result<SchemaNode> {
        let canonical = ctx.canonical.as_deref().context("no canonical url")?;
        let crumbs = &ctx.page.breadcrumbs;
        if crumbs.is_empty() {
            anyhow::bail!("breadcrumb trail is empty");
        }

        let last = crumbs.len() - 1;
        let items = crumbs
            .iter()
            .enumerate()
            .map(|(index, crumb)| {
                let item = if index == last {
                    None
                } else {
                    Some(crumb.url.clone())
                };
                ListItem::new(index as u32 + 1, strip_tags(&crumb.text), item)
            })
            .collect();

        Ok(SchemaNode::BreadcrumbList(node::BreadcrumbList::new(
            ids::breadcrumb(canonical),
            items,
        )))
    }

    fn decorate(&self, ctx: &SchemaContext, graph: &mut Graph) {
        let Some(canonical) = ctx.canonical.as_deref() else {
            return;
        };
        let id = ids::breadcrumb(canonical);
        if !graph.contains_id(&id) {
            return;
        }
        if let Some(page) = graph.web_page_mut() {
            page.breadcrumb = Some(id);
        }
    }
}
