// Base Extractor Types for Pageflow
//
// The report data model (page objects, test cases, test steps) plus the
// tree-sitter node helpers shared by the Java collaborator.
//
// Every type here is created once per extraction run and never mutated after
// assembly; the report serializer consumes them as-is.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tree_sitter::Node;

/// String-to-string mapping that keeps insertion order
///
/// Element tie-breaks and the URL fallback both depend on enumeration order,
/// so a hash map is not an option here. Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedMap {
    entries: Vec<(String, String)>,
}

impl OrderedMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key; an existing key keeps its position and gets the new value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut slot.1, value));
        }
        self.entries.push((key, value));
        None
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OrderedMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl Serialize for OrderedMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for OrderedMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedMapVisitor;

        impl<'de> Visitor<'de> for OrderedMapVisitor {
            type Value = OrderedMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of strings to strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = OrderedMap::new();
                while let Some((k, v)) = access.next_entry::<String, String>()? {
                    map.insert(k, v);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor)
    }
}

/// A UI screen: class name plus named element selectors in declaration order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageObject {
    pub class_name: String,
    pub elements: OrderedMap,
}

impl PageObject {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            elements: OrderedMap::new(),
        }
    }

    pub fn with_elements<I, K, V>(class_name: impl Into<String>, elements: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            class_name: class_name.into(),
            elements: elements.into_iter().collect(),
        }
    }
}

/// Semantic category of a test step
///
/// Calls that match no kind produce no step at all, so there is no
/// "none" variant; classification returns `Option<ActionKind>`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Click,
    Type,
    Select,
    Wait,
    Assert,
    Verify,
    Navigate,
    Drag,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Click => "click",
            ActionKind::Type => "type",
            ActionKind::Select => "select",
            ActionKind::Wait => "wait",
            ActionKind::Assert => "assert",
            ActionKind::Verify => "verify",
            ActionKind::Navigate => "navigate",
            ActionKind::Drag => "drag",
        }
    }

    /// Assert and verify steps take the assertion-specific resolution path
    pub fn is_assertion(&self) -> bool {
        matches!(self, ActionKind::Assert | ActionKind::Verify)
    }

    /// Kind name with the first letter upper-cased ("Click", "Navigate")
    pub fn label(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified, resolved action within a test case
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestStep {
    /// 1-based, contiguous within a test case
    pub step_number: u32,
    #[serde(rename = "stepDescription")]
    pub description: String,
    pub action_type: ActionKind,
    pub element_selector: Option<String>,
    pub value: Option<String>,
}

/// A test method (or an expanded data-driven branch) with its ordered steps
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub test_name: String,
    pub class_name: String,
    pub description: String,
    pub steps: Vec<TestStep>,
    #[serde(rename = "testURL")]
    pub test_url: Option<String>,
}

/// Base implementation for tree-sitter backed collaborators
///
/// Holds the source text of one unit and offers the node-text helpers the
/// Java collaborator builds on.
pub struct BaseExtractor {
    pub file_path: String,
    pub content: String,
}

impl BaseExtractor {
    pub fn new(file_path: String, content: String) -> Self {
        Self {
            file_path,
            content,
        }
    }

    /// Get text from a tree-sitter node
    pub fn get_node_text(&self, node: &Node) -> String {
        let start_byte = node.start_byte();
        let end_byte = node.end_byte();

        // Use byte slice but handle UTF-8 boundaries properly
        let content_bytes = self.content.as_bytes();
        if start_byte < content_bytes.len() && end_byte <= content_bytes.len() {
            String::from_utf8_lossy(&content_bytes[start_byte..end_byte]).to_string()
        } else {
            String::new()
        }
    }

    /// Get field text safely
    pub fn get_field_text(&self, node: &Node, field_name: &str) -> Option<String> {
        node.child_by_field_name(field_name)
            .map(|n| self.get_node_text(&n))
    }

    /// Find first child by type
    pub fn find_child_by_type<'a>(&self, node: &Node<'a>, child_type: &str) -> Option<Node<'a>> {
        let mut cursor = node.walk();
        node.children(&mut cursor).find(|c| c.kind() == child_type)
    }

    /// Find all descendants of a type, in document order
    pub fn find_nodes_by_type<'a>(&self, node: &Node<'a>, node_type: &str) -> Vec<Node<'a>> {
        let mut nodes = Vec::new();
        self.find_nodes_by_type_recursive(node, node_type, &mut nodes);
        nodes
    }

    fn find_nodes_by_type_recursive<'a>(&self, node: &Node<'a>, node_type: &str, nodes: &mut Vec<Node<'a>>) {
        if node.kind() == node_type {
            nodes.push(*node);
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.find_nodes_by_type_recursive(&child, node_type, nodes);
        }
    }

    /// Check if node has error
    pub fn has_error(&self, node: &Node) -> bool {
        node.has_error() || node.kind() == "ERROR"
    }
}
