//! Option trees for linked and flat picker columns.
//!
//! An [`OptionNode`] holds a display label, an opaque value, and an ordered
//! list of children. A forest of nodes describes either a linked picker
//! (tree levels are columns, a column's items are the children of the
//! selection above it) or, in array mode, a set of independent flat columns.
//!
//! Nodes are built once from an [`OptionSource`] - a tagged variant decoded
//! up front so the recursive-descent builder needs no type inspection at
//! call sites - and are immutable afterwards.
//!
//! # Example
//!
//! ```
//! use spindle::options::{OptionSource, build_forest, max_level};
//!
//! let source = OptionSource::Map(vec![
//!     (
//!         "Fruit".to_string(),
//!         OptionSource::List(vec![
//!             OptionSource::Scalar("Apple".to_string()),
//!             OptionSource::Scalar("Pear".to_string()),
//!         ]),
//!     ),
//! ]);
//!
//! let forest = build_forest(&source);
//! assert_eq!(forest.len(), 1);
//! assert_eq!(max_level(&forest), 2);
//! ```

use std::fmt::Display;

/// A node in an option tree: a label, an opaque value, ordered children.
///
/// A node with an empty child list is identical to a leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionNode<T = String> {
    label: Option<String>,
    value: T,
    children: Vec<OptionNode<T>>,
}

impl<T> OptionNode<T> {
    /// Creates a leaf node carrying `value`.
    pub fn new(value: T) -> Self {
        Self {
            label: None,
            value,
            children: Vec::new(),
        }
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the child nodes.
    pub fn with_children(mut self, children: Vec<OptionNode<T>>) -> Self {
        self.children = children;
        self
    }

    /// The explicit display label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The node's value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The node's children. Empty for leaves.
    pub fn children(&self) -> &[OptionNode<T>] {
        &self.children
    }

    /// Returns `true` if the node has at least one child.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

impl<T: Display> OptionNode<T> {
    /// The label to paint: the explicit label, or the value rendered.
    pub fn display_label(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => self.value.to_string(),
        }
    }
}

/// Returns the depth of the deepest chain of non-empty child links in the
/// forest, plus one. An empty forest has level 0; a forest of leaves has
/// level 1.
pub fn max_level<T>(forest: &[OptionNode<T>]) -> usize {
    forest
        .iter()
        .map(|node| {
            if node.has_children() {
                1 + max_level(node.children())
            } else {
                1
            }
        })
        .max()
        .unwrap_or(0)
}

/// The nested source description an option forest is decoded from.
///
/// Decoding is forgiving by policy: this is developer-authored static data,
/// so malformed entries are skipped silently instead of raised (see
/// [`build_forest`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionSource {
    /// A single selectable label.
    Scalar(String),
    /// An ordered sequence of entries.
    List(Vec<OptionSource>),
    /// Ordered label -> source entries. Insertion order is column/item order.
    Map(Vec<(String, OptionSource)>),
}

impl OptionSource {
    /// Converts a JSON value into an option source, leniently.
    ///
    /// Scalars (strings, numbers, booleans) become [`OptionSource::Scalar`];
    /// arrays and objects recurse; `null` entries are dropped. Object key
    /// order is preserved.
    pub fn from_json(value: &serde_json::Value) -> Option<OptionSource> {
        use serde_json::Value;
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(OptionSource::Scalar(b.to_string())),
            Value::Number(n) => Some(OptionSource::Scalar(n.to_string())),
            Value::String(s) => Some(OptionSource::Scalar(s.clone())),
            Value::Array(items) => Some(OptionSource::List(
                items.iter().filter_map(Self::from_json).collect(),
            )),
            Value::Object(map) => Some(OptionSource::Map(
                map.iter()
                    .filter_map(|(key, value)| {
                        Self::from_json(value).map(|source| (key.clone(), source))
                    })
                    .collect(),
            )),
        }
    }
}

/// Builds a linked option forest from a source description.
///
/// - a scalar is a single leaf;
/// - a list contributes one leaf per scalar element;
/// - a map entry whose value is a non-empty list is a two-level branch;
/// - a map entry whose value is a non-empty map recurses, to any depth.
///
/// Empty lists and maps produce no node; entries of the wrong shape (a list
/// nested directly in a list, a scalar map value) are skipped silently.
pub fn build_forest(source: &OptionSource) -> Vec<OptionNode<String>> {
    match source {
        OptionSource::Scalar(s) => vec![leaf(s)],
        OptionSource::List(items) => leaves(items),
        OptionSource::Map(pairs) => pairs
            .iter()
            .filter_map(|(label, value)| branch(label, value))
            .collect(),
    }
}

/// Builds independent flat columns (array mode) from a source description.
///
/// Top-level entries are columns, not tree levels: each top-level list's
/// scalar elements become that column's item set. Map sources contribute
/// their values as columns. Entries of any other shape are skipped.
pub fn build_columns(source: &OptionSource) -> Vec<Vec<OptionNode<String>>> {
    let entries: Vec<&OptionSource> = match source {
        OptionSource::List(items) => items.iter().collect(),
        OptionSource::Map(pairs) => pairs.iter().map(|(_, value)| value).collect(),
        OptionSource::Scalar(_) => Vec::new(),
    };

    entries
        .into_iter()
        .filter_map(|entry| match entry {
            OptionSource::List(items) => {
                let column = leaves(items);
                if column.is_empty() { None } else { Some(column) }
            }
            _ => {
                tracing::debug!(
                    target: "spindle::options",
                    "skipping non-list column entry in array-mode source"
                );
                None
            }
        })
        .collect()
}

fn leaf(text: &str) -> OptionNode<String> {
    OptionNode::new(text.to_string()).with_label(text)
}

fn leaves(items: &[OptionSource]) -> Vec<OptionNode<String>> {
    items
        .iter()
        .filter_map(|item| match item {
            OptionSource::Scalar(s) => Some(leaf(s)),
            _ => None,
        })
        .collect()
}

fn branch(label: &str, value: &OptionSource) -> Option<OptionNode<String>> {
    let children = match value {
        OptionSource::List(items) => leaves(items),
        OptionSource::Map(pairs) => pairs
            .iter()
            .filter_map(|(label, value)| branch(label, value))
            .collect(),
        OptionSource::Scalar(_) => Vec::new(),
    };
    if children.is_empty() {
        return None;
    }
    Some(leaf(label).with_children(children))
}
