//! Flat and linked column adapters over option data.
//!
//! [`ArrayAdapter`] implements [`ColumnAdapter`] in two modes:
//!
//! - **Flat**: a list of independent columns, each with its own item list.
//! - **Linked**: a hierarchical option forest whose levels are columns; a
//!   column's item list is the children of the node selected in the column
//!   before it.
//!
//! Linked lookups re-descend the forest from the root on every call, so the
//! adapter itself carries no extra rebuild signal: the controller re-renders
//! every downstream column when an upstream selection changes, because those
//! item lists now come from a different subtree.

use std::fmt::Display;

use crate::adapter::{ColumnAdapter, SelectOutcome};
use crate::options::{OptionNode, OptionSource, build_columns, build_forest, max_level};

enum ArrayData<T> {
    Flat(Vec<Vec<OptionNode<T>>>),
    Linked {
        roots: Vec<OptionNode<T>>,
        levels: usize,
    },
}

/// A picker data source over flat columns or a linked option forest.
///
/// # Example
///
/// ```
/// use spindle::array::ArrayAdapter;
/// use spindle::adapter::ColumnAdapter;
/// use spindle::options::OptionSource;
///
/// let source = OptionSource::Map(vec![
///     (
///         "Fruit".to_string(),
///         OptionSource::List(vec![
///             OptionSource::Scalar("Apple".to_string()),
///             OptionSource::Scalar("Pear".to_string()),
///         ]),
///     ),
///     (
///         "Veg".to_string(),
///         OptionSource::List(vec![OptionSource::Scalar("Leek".to_string())]),
///     ),
/// ]);
///
/// let mut adapter = ArrayAdapter::linked_from_source(&source);
/// assert_eq!(adapter.column_count(), 2);
/// assert_eq!(adapter.label_at(1, 0), "Apple");
/// adapter.select(0, 1);
/// assert_eq!(adapter.label_at(1, 0), "Leek");
/// ```
pub struct ArrayAdapter<T = String> {
    data: ArrayData<T>,
    selected: Vec<usize>,
}

impl ArrayAdapter<String> {
    /// Builds a flat adapter from an array-mode source description.
    pub fn from_source(source: &OptionSource) -> Self {
        Self::from_columns(build_columns(source))
    }

    /// Builds a linked adapter from a nested source description.
    pub fn linked_from_source(source: &OptionSource) -> Self {
        Self::linked(build_forest(source))
    }
}

impl<T> ArrayAdapter<T> {
    /// Creates a flat adapter over independent columns.
    pub fn from_columns(columns: Vec<Vec<OptionNode<T>>>) -> Self {
        let selected = vec![0; columns.len()];
        Self {
            data: ArrayData::Flat(columns),
            selected,
        }
    }

    /// Creates a linked adapter over an option forest. The column count is
    /// the forest's maximum level.
    pub fn linked(roots: Vec<OptionNode<T>>) -> Self {
        let levels = max_level(&roots);
        Self {
            data: ArrayData::Linked { roots, levels },
            selected: vec![0; levels],
        }
    }

    /// The item nodes currently presented by `column`.
    ///
    /// Linked mode descends the forest along the selections of the preceding
    /// columns; the descent stops and yields an empty list as soon as an
    /// ancestor index is out of range for its level (a stale selection after
    /// data changed).
    pub fn items_for(&self, column: usize) -> &[OptionNode<T>] {
        match &self.data {
            ArrayData::Flat(columns) => columns.get(column).map_or(&[], Vec::as_slice),
            ArrayData::Linked { roots, levels } => {
                if column >= *levels {
                    return &[];
                }
                let mut nodes: &[OptionNode<T>] = roots;
                for level in 0..column {
                    let index = self.selected.get(level).copied().unwrap_or(0);
                    match nodes.get(index) {
                        Some(node) => nodes = node.children(),
                        None => return &[],
                    }
                }
                nodes
            }
        }
    }
}

impl<T: Clone> ArrayAdapter<T> {
    /// Walks the data along the current selection, collecting each level's
    /// value. Stops (without error) at the first out-of-range index, and in
    /// linked mode at the first node without children.
    pub fn selected_values(&self) -> Vec<T> {
        match &self.data {
            ArrayData::Flat(columns) => {
                let mut values = Vec::with_capacity(columns.len());
                for (column, items) in columns.iter().enumerate() {
                    let index = self.selected.get(column).copied().unwrap_or(0);
                    match items.get(index) {
                        Some(node) => values.push(node.value().clone()),
                        None => break,
                    }
                }
                values
            }
            ArrayData::Linked { roots, .. } => {
                let mut values = Vec::new();
                let mut nodes: &[OptionNode<T>] = roots;
                for level in 0..self.selected.len() {
                    let index = self.selected[level];
                    let Some(node) = nodes.get(index) else {
                        break;
                    };
                    values.push(node.value().clone());
                    if !node.has_children() {
                        break;
                    }
                    nodes = node.children();
                }
                values
            }
        }
    }
}

impl<T: Clone + Display> ColumnAdapter for ArrayAdapter<T> {
    fn column_count(&self) -> usize {
        match &self.data {
            ArrayData::Flat(columns) => columns.len(),
            ArrayData::Linked { levels, .. } => *levels,
        }
    }

    fn item_count(&self, column: usize) -> usize {
        self.items_for(column).len()
    }

    fn label_at(&self, column: usize, index: usize) -> String {
        self.items_for(column)
            .get(index)
            .map(OptionNode::display_label)
            .unwrap_or_default()
    }

    fn selected_index(&self, column: usize) -> usize {
        self.selected.get(column).copied().unwrap_or(0)
    }

    fn select(&mut self, column: usize, index: usize) -> SelectOutcome {
        if column >= self.selected.len() {
            return SelectOutcome::Updated;
        }

        let count = self.items_for(column).len();
        self.selected[column] = index.min(count.saturating_sub(1));
        tracing::trace!(
            target: "spindle::array",
            column,
            index = self.selected[column],
            "selection applied"
        );

        // A linked change moves every deeper column into a new subtree;
        // clamp those selections into the subtree they now index.
        if self.is_linked() {
            for deeper in column + 1..self.selected.len() {
                let count = self.items_for(deeper).len();
                let slot = &mut self.selected[deeper];
                *slot = (*slot).min(count.saturating_sub(1));
            }
        }

        SelectOutcome::Updated
    }

    fn is_linked(&self) -> bool {
        matches!(self.data, ArrayData::Linked { .. })
    }
}
