//! Typed schema.org graph nodes.
//!
//! Every node variant carries its fields in serialization order; the
//! `@type` tag always comes first and cross-references to sibling nodes are
//! plain `@id` strings. The `extra` map takes rarely-used optional fields
//! without widening the typed surface.

use serde::Serialize;
use serde_json::Value as JsonValue;

/// Open extension map for optional fields a node type does not model.
pub type Extra = serde_json::Map<String, JsonValue>;

/// One node of the graph, tagged by its schema.org type.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SchemaNode {
    Organization(Organization),
    Person(Person),
    WebSite(WebSite),
    ImageObject(ImageObject),
    WebPage(WebPage),
    BreadcrumbList(BreadcrumbList),
    Article(Article),
}

impl SchemaNode {
    /// The node's `@id` anchor.
    pub fn id(&self) -> &str {
        match self {
            SchemaNode::Organization(n) => &n.id,
            SchemaNode::Person(n) => &n.id,
            SchemaNode::WebSite(n) => &n.id,
            SchemaNode::ImageObject(n) => &n.id,
            SchemaNode::WebPage(n) => &n.id,
            SchemaNode::BreadcrumbList(n) => &n.id,
            SchemaNode::Article(n) => &n.id,
        }
    }

    /// The node's `@type` value.
    pub fn schema_type(&self) -> &str {
        match self {
            SchemaNode::Organization(n) => n.schema_type,
            SchemaNode::Person(n) => n.schema_type,
            SchemaNode::WebSite(n) => n.schema_type,
            SchemaNode::ImageObject(n) => n.schema_type,
            SchemaNode::WebPage(n) => &n.schema_type,
            SchemaNode::BreadcrumbList(n) => n.schema_type,
            SchemaNode::Article(n) => &n.schema_type,
        }
    }
}

/// The ordered node list produced by one assembly pass.
///
/// Order is significant for reproducible output; consumers resolve links
/// through `@id` strings, not positions.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Graph {
    nodes: Vec<SchemaNode>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: SchemaNode) {
        self.nodes.push(node);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[SchemaNode] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SchemaNode> {
        self.nodes.iter()
    }

    pub fn into_nodes(self) -> Vec<SchemaNode> {
        self.nodes
    }

    /// Whether a node with the given `@id` is present.
    pub fn contains_id(&self, id: &str) -> bool {
        self.nodes.iter().any(|node| node.id() == id)
    }

    /// Mutable access to the WebSite node, if one was generated.
    pub fn web_site_mut(&mut self) -> Option<&mut WebSite> {
        self.nodes.iter_mut().find_map(|node| match node {
            SchemaNode::WebSite(site) => Some(site),
            _ => None,
        })
    }

    /// Mutable access to the WebPage node, if one was generated.
    pub fn web_page_mut(&mut self) -> Option<&mut WebPage> {
        self.nodes.iter_mut().find_map(|node| match node {
            SchemaNode::WebPage(page) => Some(page),
            _ => None,
        })
    }
}

impl From<Vec<SchemaNode>> for Graph {
    fn from(nodes: Vec<SchemaNode>) -> Self {
        Self { nodes }
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a SchemaNode;
    type IntoIter = std::slice::Iter<'a, SchemaNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// A `potentialAction` entry. Shapes differ per action type, so the
/// variants serialize as-is.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PotentialAction {
    Search(SearchAction),
    Read(ReadAction),
}

/// Site search entry point advertised on the WebSite node.
#[derive(Debug, Clone, Serialize)]
pub struct SearchAction {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub target: String,
    #[serde(rename = "query-input")]
    pub query_input: String,
}

impl SearchAction {
    /// The `target` template appends the search query string to the site
    /// URL exactly as configured.
    pub fn for_site(site_url: &str) -> Self {
        Self {
            schema_type: "SearchAction",
            target: format!("{site_url}?s={{search_term_string}}"),
            query_input: "required name=search_term_string".to_string(),
        }
    }
}

/// Read action pointing at the page itself.
#[derive(Debug, Clone, Serialize)]
pub struct ReadAction {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub target: Vec<String>,
}

impl ReadAction {
    pub fn new(target: String) -> Self {
        Self {
            schema_type: "ReadAction",
            target: vec![target],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WebSite {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub url: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(rename = "alternateName", skip_serializing_if = "Option::is_none")]
    pub alternate_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "potentialAction", skip_serializing_if = "Option::is_none")]
    pub potential_action: Option<Vec<PotentialAction>>,
    #[serde(rename = "inLanguage", skip_serializing_if = "Option::is_none")]
    pub in_language: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl WebSite {
    pub fn new(id: String, url: String, name: String) -> Self {
        Self {
            schema_type: "WebSite",
            id,
            url,
            name,
            publisher: None,
            alternate_name: None,
            description: None,
            potential_action: None,
            in_language: None,
            extra: Extra::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WebPage {
    #[serde(rename = "@type")]
    pub schema_type: String,
    #[serde(rename = "@id")]
    pub id: String,
    pub url: String,
    pub name: String,
    #[serde(rename = "isPartOf", skip_serializing_if = "Option::is_none")]
    pub is_part_of: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(rename = "primaryImageOfPage", skip_serializing_if = "Option::is_none")]
    pub primary_image_of_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "datePublished", skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(rename = "dateModified", skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breadcrumb: Option<String>,
    #[serde(rename = "inLanguage", skip_serializing_if = "Option::is_none")]
    pub in_language: Option<String>,
    #[serde(rename = "potentialAction", skip_serializing_if = "Vec::is_empty")]
    pub potential_action: Vec<PotentialAction>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl WebPage {
    pub fn new(schema_type: String, id: String, url: String, name: String) -> Self {
        Self {
            schema_type,
            id,
            url,
            name,
            is_part_of: None,
            publisher: None,
            primary_image_of_page: None,
            image: None,
            date_published: None,
            date_modified: None,
            author: None,
            description: None,
            breadcrumb: None,
            in_language: None,
            potential_action: Vec::new(),
            extra: Extra::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(rename = "sameAs", skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Organization {
    pub fn new(id: String, name: String, url: String) -> Self {
        Self {
            schema_type: "Organization",
            id,
            name,
            url,
            same_as: Vec::new(),
            logo: None,
            image: None,
            extra: Extra::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Person {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageObject>,
    #[serde(rename = "sameAs", skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Person {
    pub fn new(id: String, name: String) -> Self {
        Self {
            schema_type: "Person",
            id,
            name,
            description: None,
            image: None,
            same_as: Vec::new(),
            extra: Extra::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "inLanguage", skip_serializing_if = "Option::is_none")]
    pub in_language: Option<String>,
    pub url: String,
    #[serde(rename = "contentUrl")]
    pub content_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl ImageObject {
    /// `url` and `contentUrl` always carry the same value.
    pub fn new(id: String, url: String) -> Self {
        Self {
            schema_type: "ImageObject",
            id,
            in_language: None,
            content_url: url.clone(),
            url,
            width: None,
            height: None,
            caption: None,
            extra: Extra::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BreadcrumbList {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "itemListElement")]
    pub item_list_element: Vec<ListItem>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl BreadcrumbList {
    pub fn new(id: String, items: Vec<ListItem>) -> Self {
        Self {
            schema_type: "BreadcrumbList",
            id,
            item_list_element: items,
            extra: Extra::new(),
        }
    }
}

/// One breadcrumb trail entry. The last entry describes the current page
/// and carries no `item` URL.
#[derive(Debug, Clone, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub position: u32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
}

impl ListItem {
    pub fn new(position: u32, name: String, item: Option<String>) -> Self {
        Self {
            schema_type: "ListItem",
            position,
            name,
            item,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Article {
    #[serde(rename = "@type")]
    pub schema_type: String,
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "isPartOf", skip_serializing_if = "Option::is_none")]
    pub is_part_of: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(rename = "datePublished", skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(rename = "dateModified", skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(rename = "mainEntityOfPage", skip_serializing_if = "Option::is_none")]
    pub main_entity_of_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(rename = "articleSection", skip_serializing_if = "Vec::is_empty")]
    pub article_section: Vec<String>,
    #[serde(rename = "inLanguage", skip_serializing_if = "Option::is_none")]
    pub in_language: Option<String>,
    #[serde(rename = "commentCount", skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<u64>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Article {
    pub fn new(id: String) -> Self {
        Self {
            schema_type: "Article".to_string(),
            id,
            is_part_of: None,
            author: None,
            headline: None,
            date_published: None,
            date_modified: None,
            main_entity_of_page: None,
            publisher: None,
            image: None,
            keywords: Vec::new(),
            article_section: Vec::new(),
            in_language: None,
            comment_count: None,
            extra: Extra::new(),
        }
    }
}
