use anyhow::{Context, Result};

use super::{PieceKind, SchemaPiece};
use crate::context::SchemaContext;
use crate::ids;
use crate::node::{self, Graph, SchemaNode};

/// The Person entity for sites published under a personal name.
pub struct PersonPiece;

impl SchemaPiece for PersonPiece {
    fn kind(&self) -> PieceKind {
        PieceKind::Person
    }

    fn is_needed(&self, ctx: &SchemaContext) -> bool {
        ctx.person.is_some()
    }

    fn generate(&self, ctx: &SchemaContext) -> Result<SchemaNode> {
        let facts = ctx
            .person
            .as_ref()
            .context("site does not represent a person")?;

        let mut person = node::Person::new(
            ids::person(&ctx.site_url, &facts.slug),
            facts.name.clone(),
        );
        person.description = facts.description.clone().filter(|d| !d.is_empty());
        person.same_as = facts.profiles.clone();

        if let Some(source) = &facts.avatar {
            let mut avatar =
                node::ImageObject::new(ids::person_logo(&ctx.site_url), source.url.clone());
            avatar.in_language = Some(ctx.in_language.clone());
            avatar.width = source.width;
            avatar.height = source.height;
            avatar.caption = source.caption.clone().or_else(|| Some(facts.name.clone()));
            person.image = Some(avatar);
        }

        Ok(SchemaNode::Person(person))
    }

    fn decorate(&self, ctx: &SchemaContext, graph: &mut Graph) {
        let Some(facts) = ctx.person.as_ref() else {
            return;
        };
        let id = ids::person(&ctx.site_url, &facts.slug);
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
