//! HTML node tree and its serialization
//!
//! A tree is built bottom-up from [`HtmlNode::leaf`] and [`HtmlNode::parent`]
//! and rendered top-down by [`HtmlNode::to_html`]. Text is emitted verbatim;
//! callers are responsible for escaping untrusted input.
use crate::error::{Error, Result};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::fmt;

/// Attribute map that renders in insertion order.
#[derive(Debug, Clone, Default, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Attributes(Vec::new())
    }

    /// Replaces the value in place if `name` is already present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn validate(&self) -> Result<()> {
        for (name, _) in &self.0 {
            if !is_valid_attribute_name(name) {
                return Err(Error::InvalidNodeShape(format!(
                    "invalid attribute name '{}'",
                    name
                )));
            }
        }
        Ok(())
    }
}

// Compared as a mapping: order only matters for rendering.
impl PartialEq for Attributes {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

// Serialized as a map so tree dumps read like the rendered attributes.
impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}

/// Renders `key="value"` pairs joined by a single space, or `""` when empty.
pub fn attributes_to_html(attributes: &Attributes) -> String {
    attributes
        .iter()
        .map(|(name, value)| format!("{}=\"{}\"", name, value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fields are only reachable through [`HtmlNode`]'s accessors, so every leaf
/// has passed [`HtmlNode::new`]'s checks and cannot change afterwards.
///
/// ```compile_fail
/// use inline_html::html::LeafNode;
///
/// let leaf = LeafNode {
///     tag: Some("1 bad".to_string()),
///     value: Some("x".to_string()),
///     attributes: Default::default(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeafNode {
    tag: Option<String>,
    value: Option<String>,
    attributes: Attributes,
}

/// ```compile_fail
/// use inline_html::HtmlNode;
///
/// let mut node = HtmlNode::parent("p", vec![HtmlNode::leaf(None, "x").unwrap()]).unwrap();
/// if let HtmlNode::Parent(parent) = &mut node {
///     parent.tag = Some("<script>".to_string());
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentNode {
    tag: Option<String>,
    children: Vec<HtmlNode>,
    attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    /// Text leaf. A `None` tag renders `value` with no surrounding element.
    pub fn leaf(tag: Option<&str>, value: impl Into<String>) -> Result<Self> {
        HtmlNode::leaf_with_attributes(tag, value, Attributes::new())
    }

    pub fn leaf_with_attributes(
        tag: Option<&str>,
        value: impl Into<String>,
        attributes: Attributes,
    ) -> Result<Self> {
        HtmlNode::new(tag, Some(value.into()), Some(attributes), None)
    }

    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Result<Self> {
        HtmlNode::parent_with_attributes(tag, children, Attributes::new())
    }

    pub fn parent_with_attributes(
        tag: &str,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    ) -> Result<Self> {
        HtmlNode::new(Some(tag), None, Some(attributes), Some(children))
    }

    /// Picks the variant from the parts given: non-empty (or explicitly empty,
    /// value-less) children make a parent, anything else a leaf.
    ///
    /// Tag names are held to more than "any string": they must start with an
    /// ASCII letter and contain only ASCII alphanumerics or `-`, so an empty
    /// or namespaced (`svg:rect`) tag is rejected with `InvalidNodeShape`.
    /// Attribute names may not be empty or contain whitespace, quotes, `=`,
    /// `<`, `>` or `/`.
    pub fn new(
        tag: Option<&str>,
        value: Option<String>,
        attributes: Option<Attributes>,
        children: Option<Vec<HtmlNode>>,
    ) -> Result<Self> {
        if let Some(tag) = tag {
            if !is_valid_tag_name(tag) {
                return Err(Error::InvalidNodeShape(format!(
                    "invalid tag name '{}'",
                    tag
                )));
            }
        }
        let attributes = attributes.unwrap_or_default();
        attributes.validate()?;
        let tag = tag.map(str::to_string);

        match (value, children) {
            (Some(value), Some(children)) if !children.is_empty() => {
                Err(Error::InvalidNodeShape(format!(
                    "node <{}> has both a value '{}' and {} children",
                    tag.as_deref().unwrap_or(""),
                    value,
                    children.len()
                )))
            }
            (None, Some(children)) => Ok(HtmlNode::Parent(ParentNode {
                tag,
                children,
                attributes,
            })),
            (value, _) => Ok(HtmlNode::Leaf(LeafNode {
                tag,
                value,
                attributes,
            })),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.value.as_deref(),
            HtmlNode::Parent(_) => None,
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf(leaf) => &leaf.attributes,
            HtmlNode::Parent(parent) => &parent.attributes,
        }
    }

    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf(_) => &[],
            HtmlNode::Parent(parent) => &parent.children,
        }
    }

    pub fn to_html(&self) -> Result<String> {
        match self {
            HtmlNode::Leaf(leaf) => render_leaf(leaf),
            HtmlNode::Parent(parent) => render_parent(parent),
        }
    }
}

fn render_leaf(leaf: &LeafNode) -> Result<String> {
    let value = leaf.value.as_deref().ok_or_else(|| Error::MissingValue {
        tag: leaf.tag.clone(),
    })?;
    match leaf.tag.as_deref() {
        None => Ok(value.to_string()),
        Some(tag) => Ok(format!(
            "{}{}</{}>",
            open_tag(tag, &leaf.attributes),
            value,
            tag
        )),
    }
}

fn render_parent(parent: &ParentNode) -> Result<String> {
    let tag = parent.tag.as_deref().ok_or(Error::MissingTag)?;
    if parent.children.is_empty() {
        return Err(Error::MissingChildren {
            tag: tag.to_string(),
        });
    }
    let content = parent
        .children
        .iter()
        .map(HtmlNode::to_html)
        .collect::<Result<String>>()?;
    Ok(format!(
        "{}{}</{}>",
        open_tag(tag, &parent.attributes),
        content,
        tag
    ))
}

fn open_tag(tag: &str, attributes: &Attributes) -> String {
    if attributes.is_empty() {
        format!("<{}>", tag)
    } else {
        format!("<{} {}>", tag, attributes_to_html(attributes))
    }
}

fn is_valid_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
        }
        _ => false,
    }
}

fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '=' | '<' | '>' | '/'))
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attributes = self
            .attributes()
            .iter()
            .map(|(k, v)| format!("'{}': '{}'", k, v))
            .collect::<Vec<_>>()
            .join(", ");
        let children = self
            .children()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "HtmlNode(tag={}, value={}, attributes={{{}}}, children=[{}])",
            self.tag().unwrap_or("None"),
            self.value().unwrap_or("None"),
            attributes,
            children
        )
    }
}
