use anyhow::{Context, Result};

use super::{PieceKind, SchemaPiece};
use crate::context::SchemaContext;
use crate::ids;
use crate::node::{self, Graph, SchemaNode};

/// The Organization entity, emitted when the site represents one. Other
/// nodes reference it as their publisher.
pub struct OrganizationPiece;

impl SchemaPiece for OrganizationPiece {
    fn kind(&self) -> PieceKind {
        PieceKind::Organization
    }

    fn is_needed(&self, ctx: &SchemaContext) -> bool {
        ctx.organization.is_some()
    }

    fn generate(&self, ctx: &SchemaContext) -> Result<SchemaNode> {
        let facts = ctx
            .organization
            .as_ref()
            .context("site does not represent an organization")?;

        let mut org = node::Organization::new(
            ids::organization(&ctx.site_url),
            facts.name.clone(),
            ctx.site_url.clone(),
        );
        org.same_as = facts.profiles.clone();

        if let Some(source) = &facts.logo {
            let mut logo =
                node::ImageObject::new(ids::organization_logo(&ctx.site_url), source.url.clone());
            logo.in_language = Some(ctx.in_language.clone());
            logo.width = source.width;
            logo.height = source.height;
            // The organization name captions an uncaptioned logo.
            logo.caption = source.caption.clone().or_else(|| Some(facts.name.clone()));
            org.image = Some(logo.id.clone());
            org.logo = Some(logo);
        }

        Ok(SchemaNode::Organization(org))
    }

    fn decorate(&self, ctx: &SchemaContext, graph: &mut Graph) {
        let id = ids::organization(&ctx.site_url);
        if !graph.contains_id(&id) {
            return;
        }
        if let Some(site) = graph.web_site_mut() {
            site.publisher.get_or_insert_with(|| id.clone());
        }
        if let Some(page) = graph.web_page_mut() {
            page.publisher.get_or_insert_with(|| id.clone());
        }
    }
}
