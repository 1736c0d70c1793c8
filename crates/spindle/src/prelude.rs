//! Prelude module for Spindle.
//!
//! Re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use spindle::prelude::*;
//! ```

// ============================================================================
// Signal/Slot System
// ============================================================================

pub use spindle_core::{ConnectionGuard, ConnectionId, Signal};

// ============================================================================
// Adapters
// ============================================================================

pub use crate::adapter::{ColumnAdapter, SelectOutcome};
pub use crate::array::ArrayAdapter;
pub use crate::calendar::{CalendarAdapter, ColumnKind, PickerLayout};
pub use crate::range::{ColumnRange, NumberAdapter, NumberColumn};

// ============================================================================
// Controller and Data
// ============================================================================

pub use crate::controller::{RebuildPlan, SelectionController};
pub use crate::error::{Error, Result};
pub use crate::locale::CalendarStrings;
pub use crate::options::{OptionNode, OptionSource};
