//! # sitegraph-core
//!
//! Core library for assembling schema.org JSON-LD graphs for web pages.
//!
//! This library provides:
//! - Typed schema.org graph nodes cross-referenced by `@id`
//! - A two-phase piece pipeline (generate, then decorate) with
//!   deterministic ordering
//! - Presentation fallback chains for titles, descriptions, canonicals,
//!   and robots directives
//! - Rendering into a JSON-LD document or an embeddable script tag
//!
//! ## Example
//!
//! ```
//! use sitegraph_core::{generate_graph, renderer, Extensions, PageRecord, SiteConfig};
//!
//! # fn example() -> anyhow::Result<()> {
//! let site: SiteConfig = serde_json::from_str(
//!     r#"{"url": "https://example.com/", "name": "My site"}"#,
//! )?;
//! let page: PageRecord = serde_json::from_str(
//!     r#"{"title": "Hello world", "permalink": "https://example.com/post/"}"#,
//! )?;
//!
//! let graph = generate_graph(&site, &page, &Extensions::new())?;
//! if let Some(block) = renderer::render_script_block(&graph) {
//!     println!("{block}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod assembler;
pub mod context;
pub mod extensions;
pub mod helpers;
pub mod ids;
pub mod node;
pub mod options;
pub mod page;
pub mod pieces;
pub mod presenters;
pub mod renderer;
pub mod site;

// Re-export commonly used types
pub use assembler::SchemaAssembler;
pub use context::{ContextBuilder, SchemaContext};
pub use extensions::Extensions;
pub use node::{Graph, SchemaNode};
pub use options::{InMemoryOptions, SiteOptions};
pub use page::{PageKind, PageRecord};
pub use pieces::{PieceKind, SchemaPiece};
pub use site::SiteConfig;

use anyhow::Result;

/// Build the schema graph for one page: resolve the context, then run
/// the built-in piece pipeline over it.
pub fn generate_graph(
    site: &SiteConfig,
    page: &PageRecord,
    extensions: &Extensions,
) -> Result<Graph> {
    let ctx = ContextBuilder::new(site, page, extensions).build()?;
    Ok(SchemaAssembler::new(extensions).assemble(&ctx))
}
