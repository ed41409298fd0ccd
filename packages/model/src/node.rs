use crate::id_generator::next_node_id;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

/// Id of the single root node that owns a document
pub const ROOT_ID: &str = "root";

/// Type-specific attributes (`src`, `alt`, `href`, `placeholder`, ...)
pub type Props = BTreeMap<String, String>;

/// Presentation attributes keyed by camelCase property name
pub type Styles = BTreeMap<String, StyleValue>;

/// Opaque node identifier, unique within a document
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn root() -> Self {
        Self(ROOT_ID.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == ROOT_ID
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Closed set of node types.
///
/// Tags outside the known set are kept verbatim in [`NodeType::Other`] so
/// that documents written by newer editors survive a load/save cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeType {
    Root,
    Div,
    Section,
    Card,
    Nav,
    Grid,
    Footer,
    Text,
    Heading,
    Span,
    Button,
    Image,
    Video,
    Iframe,
    Input,
    Textarea,
    Other(String),
}

impl NodeType {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "root" => NodeType::Root,
            "div" => NodeType::Div,
            "section" => NodeType::Section,
            "card" => NodeType::Card,
            "nav" => NodeType::Nav,
            "grid" => NodeType::Grid,
            "footer" => NodeType::Footer,
            "text" => NodeType::Text,
            "heading" => NodeType::Heading,
            "span" => NodeType::Span,
            "button" => NodeType::Button,
            "image" => NodeType::Image,
            "video" => NodeType::Video,
            "iframe" => NodeType::Iframe,
            "input" => NodeType::Input,
            "textarea" => NodeType::Textarea,
            other => NodeType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            NodeType::Root => "root",
            NodeType::Div => "div",
            NodeType::Section => "section",
            NodeType::Card => "card",
            NodeType::Nav => "nav",
            NodeType::Grid => "grid",
            NodeType::Footer => "footer",
            NodeType::Text => "text",
            NodeType::Heading => "heading",
            NodeType::Span => "span",
            NodeType::Button => "button",
            NodeType::Image => "image",
            NodeType::Video => "video",
            NodeType::Iframe => "iframe",
            NodeType::Input => "input",
            NodeType::Textarea => "textarea",
            NodeType::Other(tag) => tag,
        }
    }

    /// Whether commands may insert children into nodes of this type
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            NodeType::Root
                | NodeType::Div
                | NodeType::Section
                | NodeType::Card
                | NodeType::Nav
                | NodeType::Grid
                | NodeType::Footer
        )
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for NodeType {
    fn from(tag: String) -> Self {
        NodeType::parse(&tag)
    }
}

impl From<&str> for NodeType {
    fn from(tag: &str) -> Self {
        NodeType::parse(tag)
    }
}

impl From<NodeType> for String {
    fn from(node_type: NodeType) -> Self {
        node_type.as_str().to_string()
    }
}

/// A single style value: bare numbers are pixel lengths unless the property
/// is unitless
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

/// Unit of the document tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,

    #[serde(rename = "type")]
    pub node_type: NodeType,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub props: Props,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub styles: Styles,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Create an empty node with a freshly minted id
    pub fn new(node_type: NodeType) -> Self {
        Self::with_id(next_node_id(), node_type)
    }

    pub fn with_id(id: impl Into<NodeId>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            node_type,
            props: Props::new(),
            styles: Styles::new(),
            content: None,
            children: Vec::new(),
        }
    }

    /// Empty document root
    pub fn root() -> Self {
        Self::with_id(NodeId::root(), NodeType::Root)
    }

    pub fn style(mut self, property: &str, value: impl Into<StyleValue>) -> Self {
        self.styles.insert(property.to_string(), value.into());
        self
    }

    pub fn prop(mut self, name: &str, value: impl Into<String>) -> Self {
        self.props.insert(name.to_string(), value.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn is_root(&self) -> bool {
        self.id.is_root()
    }

    pub fn is_container(&self) -> bool {
        self.node_type.is_container()
    }

    /// Give this node and every descendant a fresh id
    pub fn remap_ids(&mut self) {
        self.id = next_node_id();
        for child in &mut self.children {
            child.remap_ids();
        }
    }
}
