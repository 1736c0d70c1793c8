//! Selection controller: the host-facing entry point of a picker.
//!
//! [`SelectionController`] owns the per-column selection vector, routes
//! scroll-settle events into the active [`ColumnAdapter`], and answers the
//! one question the rendering host cannot answer itself: *which column
//! widgets must be recreated* after a change, as opposed to merely
//! re-rendered.
//!
//! [`on_column_changed`](SelectionController::on_column_changed) is the sole
//! mutating entry point during operation. Mutating the adapter directly (via
//! [`adapter_mut`](SelectionController::adapter_mut)) bypasses rebuild-plan
//! computation and is supported only as an initialization convenience before
//! the first render.
//!
//! # Example
//!
//! ```
//! use spindle::controller::{RebuildPlan, SelectionController};
//! use spindle::array::ArrayAdapter;
//! use spindle::options::OptionSource;
//!
//! let source = OptionSource::Map(vec![
//!     (
//!         "Fruit".to_string(),
//!         OptionSource::List(vec![OptionSource::Scalar("Apple".to_string())]),
//!     ),
//!     (
//!         "Veg".to_string(),
//!         OptionSource::List(vec![OptionSource::Scalar("Leek".to_string())]),
//!     ),
//! ]);
//! let mut picker = SelectionController::new(ArrayAdapter::linked_from_source(&source));
//!
//! // Column 0 scrolled to "Veg": column 1 now shows a different subtree.
//! let plan = picker.on_column_changed(0, 1);
//! assert_eq!(plan, RebuildPlan::Columns(vec![1]));
//! ```

use spindle_core::Signal;

use crate::adapter::{ColumnAdapter, SelectOutcome};

/// Which column widgets the host must force-rebuild after a change.
///
/// Columns outside the plan may rely on their normal re-render; columns in
/// the plan have stale item lists and must be recreated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RebuildPlan {
    /// Every column is stale - including the column that was just scrolled.
    All,
    /// Exactly these columns are stale. May be empty.
    Columns(Vec<usize>),
}

impl RebuildPlan {
    /// Returns `true` when no column needs a forced rebuild.
    pub fn is_empty(&self) -> bool {
        matches!(self, RebuildPlan::Columns(columns) if columns.is_empty())
    }

    /// Returns `true` when `column` is part of the plan.
    pub fn includes(&self, column: usize) -> bool {
        match self {
            RebuildPlan::All => true,
            RebuildPlan::Columns(columns) => columns.contains(&column),
        }
    }
}

/// Host-injected label override for a `(column, index)` pair.
///
/// A non-empty result replaces the adapter's own formatting.
pub type ItemRenderer = Box<dyn Fn(usize, usize) -> Option<String> + Send + Sync>;

/// Orchestrates N picker columns over one adapter.
///
/// # Signals
///
/// - `column_changed(column, index)`: a settle event was applied
/// - `rebuild_requested(plan)`: the plan computed for that event
///
/// Both mirror the value returned by
/// [`on_column_changed`](Self::on_column_changed); hosts may poll the return
/// value instead of connecting slots.
pub struct SelectionController<A: ColumnAdapter> {
    adapter: A,
    selected: Vec<usize>,
    reset_descendants: bool,
    item_renderer: Option<ItemRenderer>,

    /// Emitted after a settle event is applied. Args: (column, index).
    pub column_changed: Signal<(usize, usize)>,
    /// Emitted with the rebuild plan of each applied settle event.
    pub rebuild_requested: Signal<RebuildPlan>,
}

impl<A: ColumnAdapter> SelectionController<A> {
    /// Creates a controller over `adapter`, mirroring its current selection.
    pub fn new(adapter: A) -> Self {
        let selected = (0..adapter.column_count())
            .map(|column| adapter.selected_index(column))
            .collect();
        Self {
            adapter,
            selected,
            reset_descendants: false,
            item_renderer: None,
            column_changed: Signal::new(),
            rebuild_requested: Signal::new(),
        }
    }

    /// Enables the reset-descendants policy: any column change resets every
    /// column to its right to index 0.
    pub fn with_reset_descendants(mut self, reset: bool) -> Self {
        self.reset_descendants = reset;
        self
    }

    /// Installs a per-item label override.
    pub fn set_item_renderer<F>(&mut self, renderer: F)
    where
        F: Fn(usize, usize) -> Option<String> + Send + Sync + 'static,
    {
        self.item_renderer = Some(Box::new(renderer));
    }

    /// The adapter.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Mutable adapter access, as an initialization convenience before the
    /// first render. Changes made here bypass rebuild-plan computation; call
    /// [`resync`](Self::resync) afterwards.
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Re-reads the whole selection vector from the adapter.
    pub fn resync(&mut self) {
        self.selected.resize(self.adapter.column_count(), 0);
        for column in 0..self.selected.len() {
            self.selected[column] = self.adapter.selected_index(column);
        }
    }

    /// The current per-column selection.
    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.adapter.column_count()
    }

    /// Items in `column`.
    pub fn item_count(&self, column: usize) -> usize {
        self.adapter.item_count(column)
    }

    /// The label to paint at `(column, index)`: the injected item renderer's
    /// non-empty override, else the adapter's formatting.
    pub fn label_at(&self, column: usize, index: usize) -> String {
        if let Some(renderer) = &self.item_renderer {
            if let Some(label) = renderer(column, index) {
                if !label.is_empty() {
                    return label;
                }
            }
        }
        self.adapter.label_at(column, index)
    }

    /// Returns `true` if `(column, index)` is the selected item.
    pub fn is_selected(&self, column: usize, index: usize) -> bool {
        self.selected.get(column).copied() == Some(index)
    }

    /// Applies a scroll-settle event and computes the rebuild plan.
    ///
    /// The plan is also emitted through
    /// [`rebuild_requested`](Self::rebuild_requested). When the adapter
    /// reports cross-column invalidation ([`ColumnAdapter::needs_rebuild`])
    /// or a wholesale clamp, the plan is [`RebuildPlan::All`] - every
    /// column, the just-changed one included.
    pub fn on_column_changed(&mut self, column: usize, index: usize) -> RebuildPlan {
        let count = self.adapter.column_count();
        if column >= count {
            tracing::warn!(
                target: "spindle::controller",
                column,
                count,
                "settle event for out-of-range column ignored"
            );
            return RebuildPlan::Columns(Vec::new());
        }

        // Stale indices from the host (data shrank under a rendered column)
        // recover by clamping, never by erroring.
        let items = self.adapter.item_count(column);
        let index = index.min(items.saturating_sub(1));

        let outcome = self.adapter.select(column, index);
        let plan = if matches!(outcome, SelectOutcome::Resync)
            || self.adapter.needs_rebuild(column)
        {
            RebuildPlan::All
        } else {
            let mut columns: Vec<usize> = if self.adapter.is_linked() {
                (column + 1..count).collect()
            } else if let SelectOutcome::RangeChanged { column: stale } = outcome {
                vec![stale]
            } else {
                vec![column]
            };

            if self.reset_descendants {
                for descendant in column + 1..count {
                    self.adapter.select(descendant, 0);
                    if !columns.contains(&descendant) {
                        columns.push(descendant);
                    }
                }
                columns.sort_unstable();
            }

            RebuildPlan::Columns(columns)
        };

        self.resync();
        tracing::debug!(
            target: "spindle::controller",
            column,
            index,
            ?plan,
            "settle event applied"
        );

        self.column_changed.emit((column, index));
        self.rebuild_requested.emit(plan.clone());
        plan
    }
}
