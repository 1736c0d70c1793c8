//! Spindle - multi-column wheel picker models.
//!
//! A picker presents N independently-scrolling columns of items. The hard
//! part is not painting them - it is keeping the columns *consistent*: a
//! linked column's items depend on the selection above it, and a calendar
//! column's valid range depends on leap years, day counts, hour bounds, and
//! meridiem folding. Spindle models exactly that part and leaves rendering,
//! scroll physics, and presentation chrome to the host.
//!
//! - [`range`]: numeric column ranges and number pickers
//! - [`options`]: option trees built from nested source descriptions
//! - [`adapter`]: the [`ColumnAdapter`](adapter::ColumnAdapter) abstraction
//! - [`array`]: flat and linked (hierarchical) adapters
//! - [`calendar`]: the date/time adapter
//! - [`controller`]: the host-facing selection controller
//! - [`locale`]: injected month-name and meridiem tables
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use spindle::prelude::*;
//!
//! let value = NaiveDate::from_ymd_opt(2024, 1, 15)
//!     .unwrap()
//!     .and_hms_opt(0, 0, 0)
//!     .unwrap();
//! let adapter = CalendarAdapter::new(PickerLayout::dmy()).with_value(value);
//! let mut picker = SelectionController::new(adapter);
//!
//! // The day column (leftmost) was painted with 31 rows; scrolling the
//! // month column to February shrinks it, so every column must rebuild.
//! let plan = picker.on_column_changed(1, 1);
//! assert_eq!(plan, RebuildPlan::All);
//! ```

pub use spindle_core::{ConnectionGuard, ConnectionId, Signal};

pub mod adapter;
pub mod array;
pub mod calendar;
pub mod controller;
pub mod error;
pub mod locale;
pub mod options;
pub mod prelude;
pub mod range;

pub use error::{Error, Result};
