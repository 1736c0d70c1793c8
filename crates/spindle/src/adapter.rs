//! The column-adapter abstraction.
//!
//! This module defines [`ColumnAdapter`], the trait every data source behind
//! a wheel picker implements. The [`SelectionController`] drives an adapter
//! through this interface without knowing whether the columns come from a
//! flat list, a linked option tree, numeric ranges, or calendar arithmetic.
//!
//! Every operation takes the column index as an explicit parameter; adapters
//! hold no "current column" cursor, so calls need no sequencing ritual and
//! are safe to issue in any order.
//!
//! [`SelectionController`]: crate::controller::SelectionController

/// The adapter's per-change rebuild signal, returned by
/// [`ColumnAdapter::select`].
///
/// The controller turns this into a [`RebuildPlan`] for the host.
///
/// [`RebuildPlan`]: crate::controller::RebuildPlan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectOutcome {
    /// The selection was applied; nothing beyond the changed column is stale.
    #[default]
    Updated,
    /// The selection was applied, and exactly one other column's item range
    /// changed with it (e.g. the day column after a month change).
    RangeChanged {
        /// The column whose previously-rendered item list is now stale.
        column: usize,
    },
    /// The underlying value was clamped wholesale into its bounds; every
    /// column's selection may have moved and the host needs a full resync.
    Resync,
}

/// The core trait for wheel-picker data sources.
///
/// A picker presents `column_count()` independently-scrolling columns. For
/// each column the host queries `item_count`, paints rows with `label_at`,
/// and highlights `selected_index`. When a column settles on a new row the
/// controller calls [`select`](Self::select) and interprets the returned
/// [`SelectOutcome`] together with [`needs_rebuild`](Self::needs_rebuild) to
/// decide which column widgets must be recreated.
///
/// # Implementation Requirements
///
/// At minimum, you must implement:
/// - [`column_count`](Self::column_count) - number of columns
/// - [`item_count`](Self::item_count) - rows in one column
/// - [`label_at`](Self::label_at) - display text for a row
/// - [`selected_index`](Self::selected_index) - current row of a column
/// - [`select`](Self::select) - apply a settle event
///
/// Adapters with cross-column invalidation also override
/// [`needs_rebuild`](Self::needs_rebuild); hierarchical adapters override
/// [`is_linked`](Self::is_linked).
///
/// # Example
///
/// ```
/// use spindle::adapter::{ColumnAdapter, SelectOutcome};
///
/// struct Weekdays {
///     selected: usize,
/// }
///
/// impl ColumnAdapter for Weekdays {
///     fn column_count(&self) -> usize {
///         1
///     }
///
///     fn item_count(&self, _column: usize) -> usize {
///         7
///     }
///
///     fn label_at(&self, _column: usize, index: usize) -> String {
///         ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"][index].to_string()
///     }
///
///     fn selected_index(&self, _column: usize) -> usize {
///         self.selected
///     }
///
///     fn select(&mut self, _column: usize, index: usize) -> SelectOutcome {
///         self.selected = index.min(6);
///         SelectOutcome::Updated
///     }
/// }
/// ```
pub trait ColumnAdapter {
    /// Returns the number of columns this adapter presents.
    fn column_count(&self) -> usize;

    /// Returns the number of items in the given column.
    ///
    /// Return 0 for out-of-range columns or columns whose item list is
    /// currently empty (e.g. a stale descent through changed data).
    fn item_count(&self, column: usize) -> usize;

    /// Returns the display label for the item at `(column, index)`.
    ///
    /// Out-of-range positions return an empty string; painting a stale row
    /// must never panic.
    fn label_at(&self, column: usize, index: usize) -> String;

    /// Returns the currently-selected index of the given column.
    fn selected_index(&self, column: usize) -> usize;

    /// Returns `true` if `(column, index)` is the selected item.
    fn is_selected(&self, column: usize, index: usize) -> bool {
        self.selected_index(column) == index
    }

    /// Applies a scroll-settle event: column `column` moved to row `index`.
    ///
    /// Out-of-range indices are clamped, never an error. The returned
    /// [`SelectOutcome`] tells the controller which other columns became
    /// stale as a consequence of this change.
    fn select(&mut self, column: usize, index: usize) -> SelectOutcome;

    /// Returns `true` when the change just applied to `changed_column`
    /// invalidates columns that the [`SelectOutcome`] alone cannot describe,
    /// requiring the host to rebuild every column - including the changed
    /// one.
    ///
    /// The default returns `false`: flat and linked adapters carry their
    /// linkage through [`is_linked`](Self::is_linked) and produce no extra
    /// rebuild signal of their own.
    fn needs_rebuild(&self, _changed_column: usize) -> bool {
        false
    }

    /// Returns `true` when a column's item list depends on the selection of
    /// a preceding column, so every column after a changed one must be
    /// re-rendered.
    ///
    /// The default returns `false` (independent columns).
    fn is_linked(&self) -> bool {
        false
    }
}

impl<A: ColumnAdapter + ?Sized> ColumnAdapter for Box<A> {
    fn column_count(&self) -> usize {
        (**self).column_count()
    }

    fn item_count(&self, column: usize) -> usize {
        (**self).item_count(column)
    }

    fn label_at(&self, column: usize, index: usize) -> String {
        (**self).label_at(column, index)
    }

    fn selected_index(&self, column: usize) -> usize {
        (**self).selected_index(column)
    }

    fn is_selected(&self, column: usize, index: usize) -> bool {
        (**self).is_selected(column, index)
    }

    fn select(&mut self, column: usize, index: usize) -> SelectOutcome {
        (**self).select(column, index)
    }

    fn needs_rebuild(&self, changed_column: usize) -> bool {
        (**self).needs_rebuild(changed_column)
    }

    fn is_linked(&self) -> bool {
        (**self).is_linked()
    }
}
