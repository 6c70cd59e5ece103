//! JSON-LD document rendering.
//!
//! The graph serializes into a `{"@context", "@graph"}` envelope,
//! optionally wrapped in a script tag for direct page embedding. An
//! empty graph or an encoding failure renders nothing at all; malformed
//! markup never leaves this module.

use serde::Serialize;

use crate::node::Graph;

/// The JSON-LD `@context` every document declares.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// CSS class on the emitted script tag.
pub const SCRIPT_CLASS: &str = "sitegraph-schema";

#[derive(Serialize)]
struct Envelope<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@graph")]
    graph: &'a Graph,
}

fn encode<F>(graph: &Graph, to_json: F) -> Option<String>
where
    F: FnOnce(&Envelope<'_>) -> serde_json::Result<String>,
{
    if graph.is_empty() {
        return None;
    }
    let envelope = Envelope {
        context: SCHEMA_CONTEXT,
        graph,
    };
    match to_json(&envelope) {
        Ok(json) => Some(json),
        Err(err) => {
            log::warn!("failed to encode the schema graph: {err}");
            None
        }
    }
}

/// The compact JSON-LD document, or `None` when there is nothing to emit.
pub fn render_document(graph: &Graph) -> Option<String> {
    encode(graph, |envelope| serde_json::to_string(envelope))
}

/// The indented JSON-LD document for human inspection.
pub fn render_document_pretty(graph: &Graph) -> Option<String> {
    encode(graph, |envelope| serde_json::to_string_pretty(envelope))
}

/// The full script tag for page embedding. `</` inside the JSON payload
/// is escaped so the document cannot close the tag early.
pub fn render_script_block(graph: &Graph) -> Option<String> {
    let json = render_document(graph)?.replace("</", r"<\/");
    Some(format!(
        r#"<script type="application/ld+json" class="{SCRIPT_CLASS}">{json}</script>"#
    ))
}
