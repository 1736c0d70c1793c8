//! Calendar and clock column adapter.
//!
//! [`CalendarAdapter`] maps a single `chrono::NaiveDateTime` onto a
//! configurable ordered layout of column kinds (year, month, day, hour,
//! minute, second, meridiem, 12-hour hour). Every scroll-settle event
//! recomputes the value wholesale - construct new, clamp, assign - so the
//! "did it change" and "was it clamped" signals are plain equality checks.
//!
//! The interesting invariants live here:
//!
//! - the value is always calendar-valid: the day is re-clamped against the
//!   month's day count (leap-year aware) after every year/month change;
//! - the value is always inside `[min_value, max_value]`, including at
//!   construction (out-of-bounds inputs clamp silently, they never error);
//! - when the day column sits to the *left* of the month or year column,
//!   selecting into February can shrink an already-rendered day column, so
//!   [`needs_rebuild`](CalendarAdapter::needs_rebuild) tells the controller
//!   to rebuild every column - including the one just scrolled;
//! - meridiem changes fold through the 12-hour clock with exact boundary
//!   rules at midnight and noon (see [`fold_meridiem`]).
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use spindle::adapter::ColumnAdapter;
//! use spindle::calendar::{CalendarAdapter, PickerLayout};
//!
//! let value = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let mut adapter = CalendarAdapter::new(PickerLayout::ymd()).with_value(value);
//!
//! assert_eq!(adapter.item_count(2), 31); // January
//! adapter.select(1, 1);                  // February
//! assert_eq!(adapter.item_count(2), 29); // 2024 is a leap year
//! ```

use std::collections::HashMap;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::adapter::{ColumnAdapter, SelectOutcome};
use crate::error::{Error, Result};
use crate::locale::CalendarStrings;
use crate::range::ColumnRange;

/// The semantic meaning of one picker column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Calendar year.
    Year,
    /// Calendar month, 1-12 in the value, 0-based as a column index.
    Month,
    /// Day of month, bounded by the selected year/month's day count.
    Day,
    /// Hour of day, 0-23.
    Hour,
    /// Minute, 0-59 (or a configured interval thereof).
    Minute,
    /// Second, 0-59.
    Second,
    /// Meridiem half: index 0 is AM, index 1 is PM.
    AmPm,
    /// Hour on a 12-hour clock face, 1-12.
    Hour12,
}

/// An ordered sequence of column kinds: which calendar field appears in
/// which column position.
///
/// Validated at construction: at least one kind, no duplicates. Two
/// capabilities are precomputed from the ordering and never change:
///
/// - [`needs_prev_rebuild`](Self::needs_prev_rebuild): the day column
///   precedes the month or year column, so a month/year change can shrink a
///   day column that was already painted to its left;
/// - [`ampm_before_hour12`](Self::ampm_before_hour12): the meridiem column
///   precedes the 12-hour column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerLayout {
    kinds: Vec<ColumnKind>,
    needs_prev_rebuild: bool,
    ampm_before_hour12: bool,
}

impl PickerLayout {
    /// Creates a layout from an ordered kind sequence.
    ///
    /// Fails on an empty sequence or a duplicated kind.
    pub fn new(kinds: Vec<ColumnKind>) -> Result<Self> {
        if kinds.is_empty() {
            return Err(Error::EmptyLayout);
        }
        for (i, kind) in kinds.iter().enumerate() {
            if kinds[..i].contains(kind) {
                return Err(Error::duplicate_kind(*kind));
            }
        }
        Ok(Self::from_kinds(kinds))
    }

    /// Year / month / day.
    pub fn ymd() -> Self {
        Self::from_kinds(vec![ColumnKind::Year, ColumnKind::Month, ColumnKind::Day])
    }

    /// Day / month / year (day leftmost).
    pub fn dmy() -> Self {
        Self::from_kinds(vec![ColumnKind::Day, ColumnKind::Month, ColumnKind::Year])
    }

    /// Month / day / year.
    pub fn mdy() -> Self {
        Self::from_kinds(vec![ColumnKind::Month, ColumnKind::Day, ColumnKind::Year])
    }

    /// Year / month / day / hour / minute / second.
    pub fn ymd_hms() -> Self {
        Self::from_kinds(vec![
            ColumnKind::Year,
            ColumnKind::Month,
            ColumnKind::Day,
            ColumnKind::Hour,
            ColumnKind::Minute,
            ColumnKind::Second,
        ])
    }

    /// Hour / minute / second.
    pub fn hms() -> Self {
        Self::from_kinds(vec![ColumnKind::Hour, ColumnKind::Minute, ColumnKind::Second])
    }

    /// 12-hour clock: hour / minute / meridiem.
    pub fn time_12h() -> Self {
        Self::from_kinds(vec![ColumnKind::Hour12, ColumnKind::Minute, ColumnKind::AmPm])
    }

    fn from_kinds(kinds: Vec<ColumnKind>) -> Self {
        let pos = |kind| kinds.iter().position(|&k| k == kind);
        let needs_prev_rebuild = match pos(ColumnKind::Day) {
            Some(day) => {
                pos(ColumnKind::Month).is_some_and(|month| day < month)
                    || pos(ColumnKind::Year).is_some_and(|year| day < year)
            }
            None => false,
        };
        let ampm_before_hour12 = match (pos(ColumnKind::AmPm), pos(ColumnKind::Hour12)) {
            (Some(ampm), Some(hour12)) => ampm < hour12,
            _ => false,
        };
        Self {
            kinds,
            needs_prev_rebuild,
            ampm_before_hour12,
        }
    }

    /// The ordered kinds.
    pub fn kinds(&self) -> &[ColumnKind] {
        &self.kinds
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Always false for a constructed layout.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// The kind at `column`, if in range.
    pub fn kind_at(&self, column: usize) -> Option<ColumnKind> {
        self.kinds.get(column).copied()
    }

    /// The column position of `kind`, if present.
    pub fn position_of(&self, kind: ColumnKind) -> Option<usize> {
        self.kinds.iter().position(|&k| k == kind)
    }

    /// True when the day column precedes the month or year column.
    pub fn needs_prev_rebuild(&self) -> bool {
        self.needs_prev_rebuild
    }

    /// True when the meridiem column precedes the 12-hour column.
    pub fn ampm_before_hour12(&self) -> bool {
        self.ampm_before_hour12
    }
}

/// Per-kind label formatter injected by the host.
pub type KindFormatter = Box<dyn Fn(i32) -> String + Send + Sync>;

/// A picker data source over a single date-time value.
///
/// See the [module documentation](self) for the invariants.
pub struct CalendarAdapter {
    layout: PickerLayout,
    value: NaiveDateTime,

    year_begin: i32,
    year_end: i32,
    explicit_min: Option<NaiveDateTime>,
    explicit_max: Option<NaiveDateTime>,
    min_hour: u32,
    max_hour: u32,
    minute_interval: u32,

    // Effective bounds, derived from the fields above.
    min_value: NaiveDateTime,
    max_value: NaiveDateTime,

    two_digit_year: bool,
    strings: CalendarStrings,
    suffixes: HashMap<ColumnKind, String>,
    formatters: HashMap<ColumnKind, KindFormatter>,

    selected: Vec<usize>,
}

impl CalendarAdapter {
    /// Creates an adapter over the given layout, valued at the current local
    /// date-time and bounded by the default 1900..=2100 year window.
    pub fn new(layout: PickerLayout) -> Self {
        let selected = vec![0; layout.len()];
        let mut adapter = Self {
            layout,
            value: Local::now().naive_local(),
            year_begin: 1900,
            year_end: 2100,
            explicit_min: None,
            explicit_max: None,
            min_hour: 0,
            max_hour: 23,
            minute_interval: 1,
            min_value: NaiveDateTime::MIN,
            max_value: NaiveDateTime::MAX,
            two_digit_year: false,
            strings: CalendarStrings::default(),
            suffixes: HashMap::new(),
            formatters: HashMap::new(),
            selected,
        };
        adapter.refresh();
        adapter
    }

    // =========================================================================
    // Value access
    // =========================================================================

    /// The current value.
    pub fn value(&self) -> NaiveDateTime {
        self.value
    }

    /// Replaces the value, clamping it into the bounds.
    pub fn set_value(&mut self, value: NaiveDateTime) {
        self.value = self.clamp_value(value);
        self.sync_from_value();
    }

    /// Sets the value using the builder pattern.
    pub fn with_value(mut self, value: NaiveDateTime) -> Self {
        self.set_value(value);
        self
    }

    /// The effective lower bound.
    pub fn min_value(&self) -> NaiveDateTime {
        self.min_value
    }

    /// The effective upper bound.
    pub fn max_value(&self) -> NaiveDateTime {
        self.max_value
    }

    /// The layout.
    pub fn layout(&self) -> &PickerLayout {
        &self.layout
    }

    // =========================================================================
    // Bounds and configuration
    // =========================================================================

    /// Sets the year window the year column spans. Reversed inputs are
    /// reordered; the value re-clamps into the new bounds.
    pub fn with_year_range(mut self, begin: i32, end: i32) -> Self {
        self.year_begin = begin.min(end);
        self.year_end = begin.max(end);
        self.refresh();
        self
    }

    /// Sets explicit value bounds, overriding the year/hour defaults.
    pub fn with_bounds(mut self, min: NaiveDateTime, max: NaiveDateTime) -> Self {
        self.explicit_min = Some(min.min(max));
        self.explicit_max = Some(min.max(max));
        self.refresh();
        self
    }

    /// Bounds the hour column to `min..=max` (each clamped into 0..=23).
    pub fn with_hour_range(mut self, min: u32, max: u32) -> Self {
        let lo = min.min(23);
        let hi = max.min(23);
        self.min_hour = lo.min(hi);
        self.max_hour = lo.max(hi);
        self.refresh();
        self
    }

    /// Sets the minute-column interval.
    ///
    /// The interval must be in `1..=30` and divide 60 evenly; anything else
    /// is a configuration error and leaves the previous interval in place.
    pub fn set_minute_interval(&mut self, interval: u32) -> Result<()> {
        if interval == 0 || interval > 30 || 60 % interval != 0 {
            return Err(Error::invalid_minute_interval(interval));
        }
        self.minute_interval = interval;
        self.sync_from_value();
        Ok(())
    }

    /// Sets the localization tables.
    pub fn with_strings(mut self, strings: CalendarStrings) -> Self {
        self.strings = strings;
        self
    }

    /// Renders the year column with two digits.
    pub fn with_two_digit_year(mut self, two_digit: bool) -> Self {
        self.two_digit_year = two_digit;
        self
    }

    /// Appends `suffix` to every label of the given kind.
    pub fn with_suffix(mut self, kind: ColumnKind, suffix: impl Into<String>) -> Self {
        self.suffixes.insert(kind, suffix.into());
        self
    }

    /// Installs a label formatter for one column kind. The formatter receives
    /// the column's numeric value (full year, 1-based month, 24-hour hour,
    /// meridiem index, ...) and replaces the default rendering; the suffix,
    /// if any, is still appended.
    pub fn set_formatter<F>(&mut self, kind: ColumnKind, formatter: F)
    where
        F: Fn(i32) -> String + Send + Sync + 'static,
    {
        self.formatters.insert(kind, Box::new(formatter));
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Recomputes the effective bounds and re-establishes the invariants.
    fn refresh(&mut self) {
        let default_min = NaiveDate::from_ymd_opt(self.year_begin, 1, 1)
            .and_then(|d| d.and_hms_opt(self.min_hour, 0, 0))
            .unwrap_or(NaiveDateTime::MIN);
        let default_max = NaiveDate::from_ymd_opt(self.year_end, 12, 31)
            .and_then(|d| d.and_hms_opt(self.max_hour, 59, 59))
            .unwrap_or(NaiveDateTime::MAX);

        let min = self.explicit_min.unwrap_or(default_min);
        let max = self.explicit_max.unwrap_or(default_max);
        self.min_value = min.min(max);
        self.max_value = min.max(max);

        self.value = self.clamp_value(self.value);
        self.sync_from_value();
    }

    /// Forces `value` into the bounds and the configured hour window.
    fn clamp_value(&self, value: NaiveDateTime) -> NaiveDateTime {
        let mut clamped = value.clamp(self.min_value, self.max_value);
        let hour = clamped.hour().clamp(self.min_hour, self.max_hour);
        if hour != clamped.hour() {
            clamped = clamped.with_hour(hour).unwrap_or(clamped);
        }
        clamped
    }

    fn hour_bounded(&self) -> bool {
        self.min_hour != 0 || self.max_hour != 23
    }

    /// The currently-governing meridiem half: the meridiem column's
    /// selection when the layout has one, else the value's own half.
    fn is_pm(&self) -> bool {
        match self.layout.position_of(ColumnKind::AmPm) {
            Some(column) => self.selected.get(column).copied().unwrap_or(0) == 1,
            None => self.value.hour() >= 12,
        }
    }

    /// The 24-hour values the 12-hour column offers in the `pm` half, in
    /// 24-hour order, respecting the hour bounds.
    fn hour12_values(&self, pm: bool) -> ColumnRange {
        ColumnRange::from_values(
            (self.min_hour..=self.max_hour)
                .filter(|&h| (h >= 12) == pm)
                .map(|h| h as i32)
                .collect(),
        )
    }

    /// Recomputes every column's selected index from the value.
    ///
    /// Runs at construction and after any clamp that moved the value
    /// wholesale.
    pub fn sync_from_value(&mut self) {
        let pm = self.value.hour() >= 12;
        for column in 0..self.layout.len() {
            let kind = match self.layout.kind_at(column) {
                Some(kind) => kind,
                None => continue,
            };
            self.selected[column] = match kind {
                ColumnKind::Year => {
                    (self.value.year() - self.min_value.year()).max(0) as usize
                }
                ColumnKind::Month => self.value.month0() as usize,
                ColumnKind::Day => self.value.day0() as usize,
                ColumnKind::Hour => {
                    self.value.hour().saturating_sub(self.min_hour) as usize
                }
                ColumnKind::Minute => (self.value.minute() / self.minute_interval) as usize,
                ColumnKind::Second => self.value.second() as usize,
                ColumnKind::AmPm => usize::from(pm),
                ColumnKind::Hour12 => {
                    if self.hour_bounded() {
                        self.hour12_values(pm)
                            .index_of(self.value.hour() as i32)
                            .unwrap_or(0)
                    } else {
                        clock_of(self.value.hour()) as usize - 1
                    }
                }
            };
        }
    }

    /// The numeric value displayed at `(kind, index)`.
    fn number_at(&self, kind: ColumnKind, index: usize) -> i32 {
        match kind {
            ColumnKind::Year => self.min_value.year() + index as i32,
            ColumnKind::Month => index as i32 + 1,
            ColumnKind::Day => index as i32 + 1,
            ColumnKind::Hour => (self.min_hour + index as u32) as i32,
            ColumnKind::Minute => (index as u32 * self.minute_interval) as i32,
            ColumnKind::Second => index as i32,
            ColumnKind::AmPm => index as i32,
            ColumnKind::Hour12 => {
                if self.hour_bounded() {
                    self.hour12_values(self.is_pm())
                        .value_at(index)
                        .map(|h| clock_of(h as u32) as i32)
                        .unwrap_or_default()
                } else {
                    index as i32 + 1
                }
            }
        }
    }
}

impl ColumnAdapter for CalendarAdapter {
    fn column_count(&self) -> usize {
        self.layout.len()
    }

    fn item_count(&self, column: usize) -> usize {
        let Some(kind) = self.layout.kind_at(column) else {
            return 0;
        };
        match kind {
            ColumnKind::Year => {
                (self.max_value.year() - self.min_value.year() + 1).max(0) as usize
            }
            ColumnKind::Month => 12,
            ColumnKind::Day => days_in_month(self.value.year(), self.value.month()) as usize,
            ColumnKind::Hour => (self.max_hour - self.min_hour + 1) as usize,
            ColumnKind::Minute => (60 / self.minute_interval) as usize,
            ColumnKind::Second => 60,
            ColumnKind::AmPm => 2,
            ColumnKind::Hour12 => {
                if self.hour_bounded() {
                    self.hour12_values(self.is_pm()).count()
                } else {
                    12
                }
            }
        }
    }

    fn label_at(&self, column: usize, index: usize) -> String {
        let Some(kind) = self.layout.kind_at(column) else {
            return String::new();
        };
        if index >= self.item_count(column) {
            return String::new();
        }

        let number = self.number_at(kind, index);
        let mut label = if let Some(formatter) = self.formatters.get(&kind) {
            formatter(number)
        } else {
            match kind {
                ColumnKind::Year => {
                    if self.two_digit_year {
                        format!("{:02}", number.rem_euclid(100))
                    } else {
                        number.to_string()
                    }
                }
                ColumnKind::Month => match self.strings.month_name(number as u32) {
                    Some(name) => name.to_string(),
                    None => format!("{number:02}"),
                },
                ColumnKind::AmPm => self.strings.meridiem_label(index).to_string(),
                _ => format!("{number:02}"),
            }
        };

        if let Some(suffix) = self.suffixes.get(&kind) {
            label.push_str(suffix);
        }
        label
    }

    fn selected_index(&self, column: usize) -> usize {
        self.selected.get(column).copied().unwrap_or(0)
    }

    fn select(&mut self, column: usize, index: usize) -> SelectOutcome {
        let Some(kind) = self.layout.kind_at(column) else {
            return SelectOutcome::Updated;
        };
        let count = self.item_count(column);
        if count == 0 {
            return SelectOutcome::Updated;
        }
        let index = index.min(count - 1);
        self.selected[column] = index;

        let (mut year, mut month, mut day) =
            (self.value.year(), self.value.month(), self.value.day());
        let (mut hour, mut minute, mut second) =
            (self.value.hour(), self.value.minute(), self.value.second());

        let old_day_count = days_in_month(year, month);

        match kind {
            ColumnKind::Year => year = self.min_value.year() + index as i32,
            ColumnKind::Month => month = index as u32 + 1,
            ColumnKind::Day => day = index as u32 + 1,
            ColumnKind::Hour => hour = self.min_hour + index as u32,
            ColumnKind::Minute => minute = index as u32 * self.minute_interval,
            ColumnKind::Second => second = index as u32,
            ColumnKind::AmPm => hour = fold_meridiem(hour, minute, index == 1),
            ColumnKind::Hour12 => {
                hour = if self.hour_bounded() {
                    self.hour12_values(self.is_pm())
                        .value_at(index)
                        .map(|h| h as u32)
                        .unwrap_or(hour)
                } else {
                    hour_from_clock(index as u32 + 1, self.is_pm())
                };
            }
        }

        // Re-derive the day count for the (possibly new) year/month and pull
        // the day back inside it.
        let new_day_count = days_in_month(year, month);
        if day > new_day_count {
            day = new_day_count;
        }

        let candidate = match (
            NaiveDate::from_ymd_opt(year, month, day),
            NaiveTime::from_hms_opt(hour, minute, second),
        ) {
            (Some(date), Some(time)) => NaiveDateTime::new(date, time),
            _ => self.value,
        };

        let clamped = self.clamp_value(candidate);
        let was_clamped = clamped != candidate;
        self.value = clamped;
        self.sync_from_value();

        tracing::trace!(
            target: "spindle::calendar",
            column,
            index,
            value = %self.value,
            clamped = was_clamped,
            "selection applied"
        );

        if was_clamped {
            SelectOutcome::Resync
        } else if new_day_count != old_day_count {
            match self.layout.position_of(ColumnKind::Day) {
                Some(day_column) if day_column != column => SelectOutcome::RangeChanged {
                    column: day_column,
                },
                _ => SelectOutcome::Updated,
            }
        } else {
            SelectOutcome::Updated
        }
    }

    fn needs_rebuild(&self, changed_column: usize) -> bool {
        let Some(kind) = self.layout.kind_at(changed_column) else {
            return false;
        };
        let february_to_the_left = self.layout.needs_prev_rebuild()
            && self.value.month() == 2
            && matches!(kind, ColumnKind::Month | ColumnKind::Year);
        let meridiem_to_the_left =
            self.layout.ampm_before_hour12() && kind == ColumnKind::AmPm;
        february_to_the_left || meridiem_to_the_left
    }
}

/// Days in `month` of `year`, leap-year aware.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

/// Check if a year is a leap year.
fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// The clock-face rendering of a 24-hour value (0 and 12 both show as 12).
fn clock_of(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

/// The 24-hour value of a clock-face selection in the given half.
fn hour_from_clock(clock: u32, pm: bool) -> u32 {
    if pm {
        if clock == 12 { 12 } else { clock + 12 }
    } else if clock == 12 {
        0
    } else {
        clock
    }
}

/// Folds the internal hour through a meridiem change.
///
/// The midnight/noon boundary combinations are authoritative as written and
/// deliberately asymmetric between the halves:
///
/// - to AM: `12 -> 0`; `0` with a nonzero minute `-> 12`; hours above 12
///   subtract 12; anything else keeps its hour.
/// - to PM: `1..=11 -> +12`; `12` with a nonzero minute `-> 0`; `0` with a
///   zero minute `-> 12`; anything else keeps its hour.
fn fold_meridiem(hour: u32, minute: u32, pm: bool) -> u32 {
    if pm {
        match hour {
            1..=11 => hour + 12,
            12 if minute > 0 => 0,
            0 if minute == 0 => 12,
            _ => hour,
        }
    } else {
        match hour {
            12 => 0,
            0 if minute > 0 => 12,
            h if h > 12 => h - 12,
            _ => hour,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29); // Leap year
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(1900, 2), 28); // Divisible by 100 but not 400
        assert_eq!(days_in_month(2000, 2), 29); // Divisible by 400
    }

    #[test]
    fn test_is_leap_year() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2025));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn test_layout_validation() {
        assert_eq!(PickerLayout::new(vec![]), Err(Error::EmptyLayout));
        assert_eq!(
            PickerLayout::new(vec![ColumnKind::Year, ColumnKind::Year]),
            Err(Error::duplicate_kind(ColumnKind::Year))
        );
        assert!(PickerLayout::new(vec![ColumnKind::Hour, ColumnKind::Minute]).is_ok());
    }

    #[test]
    fn test_layout_capabilities() {
        assert!(!PickerLayout::ymd().needs_prev_rebuild());
        assert!(PickerLayout::dmy().needs_prev_rebuild());
        // Day precedes year (though not month): still armed.
        assert!(PickerLayout::mdy().needs_prev_rebuild());
        assert!(!PickerLayout::time_12h().ampm_before_hour12());
        let ampm_first = PickerLayout::new(vec![
            ColumnKind::AmPm,
            ColumnKind::Hour12,
            ColumnKind::Minute,
        ])
        .unwrap();
        assert!(ampm_first.ampm_before_hour12());
    }

    #[test]
    fn test_item_counts_ymd_hms() {
        let adapter = CalendarAdapter::new(PickerLayout::ymd_hms())
            .with_year_range(2000, 2009)
            .with_value(at(2005, 1, 15, 10, 30, 0));
        assert_eq!(adapter.item_count(0), 10); // years
        assert_eq!(adapter.item_count(1), 12); // months
        assert_eq!(adapter.item_count(2), 31); // January days
        assert_eq!(adapter.item_count(3), 24); // hours
        assert_eq!(adapter.item_count(4), 60); // minutes
        assert_eq!(adapter.item_count(5), 60); // seconds
    }

    #[test]
    fn test_select_month_updates_value() {
        let mut adapter = CalendarAdapter::new(PickerLayout::dmy())
            .with_value(at(2024, 1, 15, 0, 0, 0));
        adapter.select(1, 1); // February
        assert_eq!(adapter.value().month(), 2);
        assert_eq!(adapter.value().day(), 15);
    }

    #[test]
    fn test_needs_rebuild_february_dmy() {
        let mut adapter = CalendarAdapter::new(PickerLayout::dmy())
            .with_value(at(2024, 1, 15, 0, 0, 0));
        adapter.select(1, 1); // February
        // Day sits left of month/year: both trigger the inclusive rebuild.
        assert!(adapter.needs_rebuild(1)); // month column
        assert!(adapter.needs_rebuild(2)); // year column
        assert!(!adapter.needs_rebuild(0)); // day column itself
    }

    #[test]
    fn test_no_rebuild_for_march() {
        let mut adapter = CalendarAdapter::new(PickerLayout::dmy())
            .with_value(at(2024, 1, 15, 0, 0, 0));
        adapter.select(1, 2); // March
        assert!(!adapter.needs_rebuild(0));
        assert!(!adapter.needs_rebuild(1));
        assert!(!adapter.needs_rebuild(2));
    }

    #[test]
    fn test_ymd_never_needs_rebuild() {
        let mut adapter = CalendarAdapter::new(PickerLayout::ymd())
            .with_value(at(2024, 1, 15, 0, 0, 0));
        adapter.select(1, 1); // February
        assert_eq!(adapter.value().month(), 2);
        for column in 0..3 {
            assert!(!adapter.needs_rebuild(column));
        }
    }

    #[test]
    fn test_day_clamps_when_month_shrinks() {
        let mut adapter = CalendarAdapter::new(PickerLayout::ymd())
            .with_value(at(2023, 1, 31, 0, 0, 0));
        let outcome = adapter.select(1, 3); // April
        assert_eq!(adapter.value().month(), 4);
        assert_eq!(adapter.value().day(), 30);
        assert_eq!(outcome, SelectOutcome::RangeChanged { column: 2 });
        assert_eq!(adapter.selected_index(2), 29);
    }

    #[test]
    fn test_leap_day_clamps_on_year_change() {
        let mut adapter = CalendarAdapter::new(PickerLayout::ymd())
            .with_year_range(2020, 2030)
            .with_value(at(2024, 2, 29, 0, 0, 0));
        let outcome = adapter.select(0, 5); // 2025
        assert_eq!(adapter.value(), at(2025, 2, 28, 0, 0, 0));
        assert_eq!(outcome, SelectOutcome::RangeChanged { column: 2 });
    }

    #[test]
    fn test_construction_clamps_to_min() {
        let min = at(2020, 6, 1, 8, 0, 0);
        let max = at(2021, 6, 1, 20, 0, 0);
        let adapter = CalendarAdapter::new(PickerLayout::ymd_hms())
            .with_bounds(min, max)
            .with_value(at(1999, 1, 1, 0, 0, 0));
        assert_eq!(adapter.value(), min);
    }

    #[test]
    fn test_select_clamps_to_bounds_and_resyncs() {
        let min = at(2024, 3, 10, 0, 0, 0);
        let max = at(2024, 9, 10, 23, 59, 59);
        let mut adapter = CalendarAdapter::new(PickerLayout::ymd())
            .with_bounds(min, max)
            .with_value(at(2024, 5, 20, 0, 0, 0));
        let outcome = adapter.select(1, 0); // January: before the minimum
        assert_eq!(outcome, SelectOutcome::Resync);
        assert_eq!(adapter.value(), min);
        assert_eq!(adapter.selected_index(1), 2); // March
    }

    #[test]
    fn test_meridiem_boundary_folds() {
        // Midnight, minute 0, switched to PM: noon.
        let mut adapter = CalendarAdapter::new(PickerLayout::time_12h())
            .with_value(at(2024, 1, 1, 0, 0, 0));
        adapter.select(2, 1);
        assert_eq!(adapter.value().hour(), 12);

        // Internal hour 12, minute 30, switched to AM: midnight.
        let mut adapter = CalendarAdapter::new(PickerLayout::time_12h())
            .with_value(at(2024, 1, 1, 12, 30, 0));
        adapter.select(2, 0);
        assert_eq!(adapter.value().hour(), 0);

        // Internal hour 12, minute 0, switched to PM: stays noon.
        let mut adapter = CalendarAdapter::new(PickerLayout::time_12h())
            .with_value(at(2024, 1, 1, 12, 0, 0));
        adapter.select(2, 1);
        assert_eq!(adapter.value().hour(), 12);

        // Afternoon hour switched to AM drops 12.
        let mut adapter = CalendarAdapter::new(PickerLayout::time_12h())
            .with_value(at(2024, 1, 1, 15, 45, 0));
        adapter.select(2, 0);
        assert_eq!(adapter.value().hour(), 3);
    }

    #[test]
    fn test_fold_meridiem_table() {
        // To PM.
        assert_eq!(fold_meridiem(3, 0, true), 15);
        assert_eq!(fold_meridiem(11, 59, true), 23);
        assert_eq!(fold_meridiem(12, 30, true), 0);
        assert_eq!(fold_meridiem(12, 0, true), 12);
        assert_eq!(fold_meridiem(0, 0, true), 12);
        assert_eq!(fold_meridiem(0, 30, true), 0);
        assert_eq!(fold_meridiem(17, 0, true), 17);
        // To AM.
        assert_eq!(fold_meridiem(12, 30, false), 0);
        assert_eq!(fold_meridiem(12, 0, false), 0);
        assert_eq!(fold_meridiem(0, 30, false), 12);
        assert_eq!(fold_meridiem(15, 0, false), 3);
        assert_eq!(fold_meridiem(9, 10, false), 9);
    }

    #[test]
    fn test_hour12_selection() {
        let mut adapter = CalendarAdapter::new(PickerLayout::time_12h())
            .with_value(at(2024, 1, 1, 15, 0, 0));
        // Column 0 is the 12-hour dial; index 8 is clock-hour 9, PM half.
        assert_eq!(adapter.selected_index(0), 2); // 15:00 shows clock 3
        adapter.select(0, 8);
        assert_eq!(adapter.value().hour(), 21);
        // Clock 12 in the PM half is noon.
        adapter.select(0, 11);
        assert_eq!(adapter.value().hour(), 12);
    }

    #[test]
    fn test_hour12_with_hour_bounds() {
        let adapter = CalendarAdapter::new(PickerLayout::time_12h())
            .with_hour_range(9, 17)
            .with_value(at(2024, 1, 1, 14, 0, 0));
        // PM half within 9..=17 offers 12..=17.
        assert_eq!(adapter.item_count(0), 6);
        assert_eq!(adapter.label_at(0, 0), "12");
        assert_eq!(adapter.label_at(0, 2), "02");
        assert_eq!(adapter.selected_index(0), 2); // hour 14
    }

    #[test]
    fn test_hour_column_bounds() {
        let mut adapter = CalendarAdapter::new(PickerLayout::hms())
            .with_hour_range(8, 17)
            .with_value(at(2024, 1, 1, 3, 0, 0));
        // Construction clamps the out-of-window hour upward.
        assert_eq!(adapter.value().hour(), 8);
        assert_eq!(adapter.item_count(0), 10);
        adapter.select(0, 4);
        assert_eq!(adapter.value().hour(), 12);
        assert_eq!(adapter.label_at(0, 4), "12");
    }

    #[test]
    fn test_minute_interval() {
        let mut adapter = CalendarAdapter::new(PickerLayout::hms())
            .with_value(at(2024, 1, 1, 10, 34, 0));
        assert_eq!(adapter.set_minute_interval(7), Err(Error::invalid_minute_interval(7)));
        adapter.set_minute_interval(15).unwrap();
        assert_eq!(adapter.item_count(1), 4);
        assert_eq!(adapter.selected_index(1), 2); // 34 floors to 30
        adapter.select(1, 3);
        assert_eq!(adapter.value().minute(), 45);
        assert_eq!(adapter.label_at(1, 3), "45");
    }

    #[test]
    fn test_labels() {
        let mut adapter = CalendarAdapter::new(PickerLayout::ymd())
            .with_year_range(1998, 2002)
            .with_value(at(2000, 3, 5, 0, 0, 0))
            .with_strings(CalendarStrings::english())
            .with_suffix(ColumnKind::Day, "th");
        assert_eq!(adapter.label_at(0, 0), "1998");
        assert_eq!(adapter.label_at(1, 2), "March");
        assert_eq!(adapter.label_at(2, 4), "05th");

        adapter = adapter.with_two_digit_year(true);
        assert_eq!(adapter.label_at(0, 0), "98");

        adapter.set_formatter(ColumnKind::Day, |day| format!("day {day}"));
        assert_eq!(adapter.label_at(2, 4), "day 5th");
    }

    #[test]
    fn test_numeric_month_without_table() {
        let adapter = CalendarAdapter::new(PickerLayout::ymd())
            .with_value(at(2024, 3, 5, 0, 0, 0));
        assert_eq!(adapter.label_at(1, 0), "01");
        assert_eq!(adapter.label_at(1, 11), "12");
    }

    #[test]
    fn test_sync_from_value_indices() {
        let adapter = CalendarAdapter::new(PickerLayout::ymd_hms())
            .with_year_range(2020, 2030)
            .with_value(at(2024, 2, 29, 13, 45, 6));
        assert_eq!(adapter.selected_index(0), 4); // 2024
        assert_eq!(adapter.selected_index(1), 1); // February
        assert_eq!(adapter.selected_index(2), 28); // 29th
        assert_eq!(adapter.selected_index(3), 13);
        assert_eq!(adapter.selected_index(4), 45);
        assert_eq!(adapter.selected_index(5), 6);
    }

    #[test]
    fn test_out_of_range_positions() {
        let adapter = CalendarAdapter::new(PickerLayout::ymd());
        assert_eq!(adapter.item_count(7), 0);
        assert_eq!(adapter.label_at(7, 0), "");
        assert_eq!(adapter.label_at(1, 99), "");
    }
}
