//! Graph pieces.
//!
//! Each piece owns one node type: it decides whether the page needs it
//! and generates the node from the context. After generation it may
//! decorate sibling nodes with links back to its own. Pieces never talk
//! to each other directly; everything they share flows through the
//! context or the assembled graph.

mod article;
mod breadcrumb;
mod main_image;
mod organization;
mod person;
mod webpage;
mod website;

pub use article::ArticlePiece;
pub use breadcrumb::BreadcrumbPiece;
pub use main_image::MainImagePiece;
pub use organization::OrganizationPiece;
pub use person::PersonPiece;
pub use webpage::WebPagePiece;
pub use website::WebsitePiece;

use anyhow::Result;

use crate::context::SchemaContext;
use crate::node::{Graph, SchemaNode};

/// The built-in piece set, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Organization,
    Person,
    Website,
    MainImage,
    WebPage,
    Breadcrumb,
    Article,
}

impl PieceKind {
    /// All kinds, ordered by ascending priority.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::Organization,
        PieceKind::Person,
        PieceKind::Website,
        PieceKind::MainImage,
        PieceKind::WebPage,
        PieceKind::Breadcrumb,
        PieceKind::Article,
    ];

    /// Generation priority. Lower runs earlier; entity pieces come before
    /// the pieces that reference them.
    pub fn priority(self) -> u8 {
        match self {
            PieceKind::Organization => 10,
            PieceKind::Person => 20,
            PieceKind::Website => 30,
            PieceKind::MainImage => 40,
            PieceKind::WebPage => 50,
            PieceKind::Breadcrumb => 60,
            PieceKind::Article => 70,
        }
    }

    /// Stable lowercase name used in log lines.
    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Organization => "organization",
            PieceKind::Person => "person",
            PieceKind::Website => "website",
            PieceKind::MainImage => "main-image",
            PieceKind::WebPage => "webpage",
            PieceKind::Breadcrumb => "breadcrumb",
            PieceKind::Article => "article",
        }
    }

    /// The kind owning a node's schema.org type.
    pub fn for_node(node: &SchemaNode) -> PieceKind {
        match node {
            SchemaNode::Organization(_) => PieceKind::Organization,
            SchemaNode::Person(_) => PieceKind::Person,
            SchemaNode::WebSite(_) => PieceKind::Website,
            SchemaNode::ImageObject(_) => PieceKind::MainImage,
            SchemaNode::WebPage(_) => PieceKind::WebPage,
            SchemaNode::BreadcrumbList(_) => PieceKind::Breadcrumb,
            SchemaNode::Article(_) => PieceKind::Article,
        }
    }
}

/// One generator in the assembly pipeline.
pub trait SchemaPiece {
    fn kind(&self) -> PieceKind;

    /// Whether this page needs the piece's node. Cheap; runs for every
    /// piece on every request.
    fn is_needed(&self, ctx: &SchemaContext) -> bool;

    /// Build the node. Only called when the piece is needed; an error
    /// skips the node without failing the rest of the graph.
    fn generate(&self, ctx: &SchemaContext) -> Result<SchemaNode>;

    /// Link sibling nodes back to this piece's node. Runs after every
    /// needed piece generated; implementations must tolerate their own
    /// node being absent.
    fn decorate(&self, _ctx: &SchemaContext, _graph: &mut Graph) {}
}

/// The built-in pieces in priority order.
pub fn default_pieces() -> Vec<Box<dyn SchemaPiece>> {
    vec![
        Box::new(OrganizationPiece),
        Box::new(PersonPiece),
        Box::new(WebsitePiece),
        Box::new(MainImagePiece),
        Box::new(WebPagePiece),
        Box::new(BreadcrumbPiece),
        Box::new(ArticlePiece),
    ]
}
