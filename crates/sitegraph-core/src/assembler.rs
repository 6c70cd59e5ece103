//! Two-phase graph assembly.
//!
//! Phase one selects the pieces this page needs and generates their
//! nodes in priority order. Phase two hands the whole graph to every
//! registered piece for link-back decoration. A piece that fails to
//! generate is logged and dropped; the rest of the graph still renders.

use crate::context::SchemaContext;
use crate::extensions::Extensions;
use crate::node::{Graph, SchemaNode};
use crate::pieces::{default_pieces, PieceKind, SchemaPiece};

/// Runs the piece pipeline for one request.
pub struct SchemaAssembler<'a> {
    pieces: Vec<Box<dyn SchemaPiece>>,
    extensions: &'a Extensions,
}

impl<'a> SchemaAssembler<'a> {
    /// Assembler over the built-in piece set.
    pub fn new(extensions: &'a Extensions) -> Self {
        Self::with_pieces(extensions, default_pieces())
    }

    /// Assembler over a custom piece list, in the order given.
    pub fn with_pieces(extensions: &'a Extensions, pieces: Vec<Box<dyn SchemaPiece>>) -> Self {
        Self { pieces, extensions }
    }

    pub fn assemble(&self, ctx: &SchemaContext) -> Graph {
        let selected: Vec<&dyn SchemaPiece> = self
            .pieces
            .iter()
            .map(|piece| piece.as_ref())
            .filter(|piece| {
                self.extensions
                    .piece_needed(piece.kind(), piece.is_needed(ctx))
            })
            .collect();

        let mut graph = Graph::new();
        for piece in selected {
            match piece.generate(ctx) {
                Ok(node) => graph.push(node),
                Err(err) => {
                    log::warn!(
                        "schema piece {} failed, dropping its node: {err:#}",
                        piece.kind().name()
                    );
                }
            }
        }

        // Every registered piece gets a decoration pass, selected or not;
        // decorators tolerate missing nodes.
        for piece in &self.pieces {
            piece.decorate(ctx, &mut graph);
        }

        let nodes: Vec<SchemaNode> = graph
            .into_nodes()
            .into_iter()
            .filter_map(|node| {
                self.extensions
                    .finish_node(PieceKind::for_node(&node), node)
            })
            .collect();
        Graph::from(nodes)
    }
}
