//! Host extension points.
//!
//! Integrations customize the graph through typed callback slots
//! registered up front instead of runtime-named hooks. Each slot covers
//! one decision; absent slots keep the built-in behavior.

use crate::node::SchemaNode;
use crate::pieces::PieceKind;

/// Decides whether the website search action is suppressed. Receives the
/// built-in default (`false`, meaning the action is emitted).
pub type SearchFilter = Box<dyn Fn(bool) -> bool + Send + Sync>;

/// Overrides piece selection. Receives the piece and the verdict its own
/// `is_needed` produced.
pub type KindFilter = Box<dyn Fn(PieceKind, bool) -> bool + Send + Sync>;

/// Rewrites or drops a generated node. Returning `None` removes it from
/// the graph.
pub type NodeFilter = Box<dyn Fn(PieceKind, SchemaNode) -> Option<SchemaNode> + Send + Sync>;

/// Registered callbacks, all optional.
#[derive(Default)]
pub struct Extensions {
    search_disabler: Option<SearchFilter>,
    kind_filter: Option<KindFilter>,
    node_filter: Option<NodeFilter>,
}

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_disabler(
        mut self,
        filter: impl Fn(bool) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.search_disabler = Some(Box::new(filter));
        self
    }

    pub fn with_kind_filter(
        mut self,
        filter: impl Fn(PieceKind, bool) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.kind_filter = Some(Box::new(filter));
        self
    }

    pub fn with_node_filter(
        mut self,
        filter: impl Fn(PieceKind, SchemaNode) -> Option<SchemaNode> + Send + Sync + 'static,
    ) -> Self {
        self.node_filter = Some(Box::new(filter));
        self
    }

    /// True when a registered callback suppresses the search action.
    pub fn search_disabled(&self) -> bool {
        match &self.search_disabler {
            Some(filter) => filter(false),
            None => false,
        }
    }

    /// Final selection verdict for a piece.
    pub fn piece_needed(&self, kind: PieceKind, default: bool) -> bool {
        match &self.kind_filter {
            Some(filter) => filter(kind, default),
            None => default,
        }
    }

    /// Last look at a generated node.
    pub fn finish_node(&self, kind: PieceKind, node: SchemaNode) -> Option<SchemaNode> {
        match &self.node_filter {
            Some(filter) => filter(kind, node),
            None => Some(node),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Person;

    fn person_node() -> Person {
        Person::new(
            "https://example.com/#/schema/person/jo".to_string(),
            "Jo".to_string(),
        )
    }

    #[test]
    fn defaults_pass_everything_through() {
        let extensions = Extensions::new();

        assert!(!extensions.search_disabled());
        assert!(extensions.piece_needed(PieceKind::Website, true));
        assert!(!extensions.piece_needed(PieceKind::Article, false));

        let node = SchemaNode::Person(person_node());
        assert!(extensions.finish_node(PieceKind::Person, node).is_some());
    }

    #[test]
    fn search_disabler_sees_the_default() {
        let extensions = Extensions::new().with_search_disabler(|default| !default);

        assert!(extensions.search_disabled());
    }

    #[test]
    fn kind_filter_can_force_a_piece_off() {
        let extensions = Extensions::new()
            .with_kind_filter(|kind, default| default && kind != PieceKind::Breadcrumb);

        assert!(extensions.piece_needed(PieceKind::Website, true));
        assert!(!extensions.piece_needed(PieceKind::Breadcrumb, true));
    }

    #[test]
    fn node_filter_can_drop_a_node() {
        let extensions = Extensions::new().with_node_filter(|kind, node| {
            if kind == PieceKind::Person {
                None
            } else {
                Some(node)
            }
        });

        let node = SchemaNode::Person(person_node());
        assert!(extensions.finish_node(PieceKind::Person, node).is_none());
    }

    #[test]
    fn node_filter_can_rewrite_a_node() {
        let extensions = Extensions::new().with_node_filter(|_, mut node| {
            if let SchemaNode::Person(person) = &mut node {
                person.name = "Renamed".to_string();
            }
            Some(node)
        });

        let node = SchemaNode::Person(person_node());
        match extensions.finish_node(PieceKind::Person, node) {
            Some(SchemaNode::Person(person)) => assert_eq!(person.name, "Renamed"),
            other => panic!("unexpected node: {:?}", other.map(|n| n.schema_type().to_string())),
        }
    }
}
