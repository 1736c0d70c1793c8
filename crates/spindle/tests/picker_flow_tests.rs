//! End-to-end picker flows: host-visible behavior across adapter,
//! controller, and rebuild plans.

use chrono::{NaiveDate, Timelike};
use spindle::prelude::*;

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

#[test]
fn test_dmy_february_flow() {
    let adapter = CalendarAdapter::new(PickerLayout::dmy()).with_value(at(2024, 1, 15, 0, 0));
    let mut picker = SelectionController::new(adapter);

    // Initial paint: 31 January days, day column selected on the 15th.
    assert_eq!(picker.item_count(0), 31);
    assert_eq!(picker.selected(), &[14, 0, 124]);
    assert_eq!(picker.label_at(0, 14), "15");

    // Scroll the month column to February. The day column sits to the left
    // and shrinks to 29 rows (2024 is a leap year), so the plan covers every
    // column - the month column itself included.
    let plan = picker.on_column_changed(1, 1);
    assert_eq!(plan, RebuildPlan::All);
    assert!(plan.includes(1));
    assert_eq!(picker.item_count(0), 29);
    assert_eq!(picker.adapter().value(), at(2024, 2, 15, 0, 0));

    // Scroll the year column to 1900: still February, still a full rebuild,
    // and the day count drops to 28 (1900 is not a leap year).
    let plan = picker.on_column_changed(2, 0);
    assert_eq!(plan, RebuildPlan::All);
    assert_eq!(picker.item_count(0), 28);
    assert_eq!(picker.adapter().value(), at(1900, 2, 15, 0, 0));
}

#[test]
fn test_ymd_quiet_flow() {
    let adapter = CalendarAdapter::new(PickerLayout::ymd()).with_value(at(2024, 1, 15, 0, 0));
    let mut picker = SelectionController::new(adapter);

    // Day is the rightmost column: February never forces a full rebuild
    // here, only the day column's range refresh.
    let plan = picker.on_column_changed(1, 1);
    assert_eq!(plan, RebuildPlan::Columns(vec![2]));

    // March back from February: day count returns to 31.
    let plan = picker.on_column_changed(1, 2);
    assert_eq!(plan, RebuildPlan::Columns(vec![2]));
    assert_eq!(picker.item_count(2), 31);
}

#[test]
fn test_meridiem_before_dial_flow() {
    // The meridiem column sits left of the 12-hour dial, so flipping it
    // invalidates a column the user never touched.
    let layout = PickerLayout::new(vec![ColumnKind::AmPm, ColumnKind::Hour12, ColumnKind::Minute])
        .unwrap();
    let adapter = CalendarAdapter::new(layout).with_value(at(2024, 6, 1, 14, 0));
    let mut picker = SelectionController::new(adapter);

    assert_eq!(picker.selected(), &[1, 1, 0]); // PM, clock 2, :00

    let plan = picker.on_column_changed(0, 0); // flip to AM
    assert_eq!(plan, RebuildPlan::All);
    assert_eq!(picker.adapter().value().hour(), 2);

    // Plain minute scrolling stays local.
    let plan = picker.on_column_changed(2, 30);
    assert_eq!(plan, RebuildPlan::Columns(vec![2]));
    assert_eq!(picker.adapter().value().minute(), 30);
}

#[test]
fn test_four_level_linked_cascade() {
    let json: serde_json::Value = serde_json::from_str(
        r#"{
            "Europe": {
                "France": {
                    "Occitanie": ["Toulouse", "Nimes"],
                    "Brittany": ["Rennes"]
                }
            },
            "Asia": {
                "Japan": {
                    "Kansai": ["Osaka", "Kyoto"]
                }
            }
        }"#,
    )
    .unwrap();
    let source = OptionSource::from_json(&json).unwrap();
    let mut picker = SelectionController::new(ArrayAdapter::linked_from_source(&source));

    assert_eq!(picker.column_count(), 4);
    assert_eq!(picker.label_at(3, 0), "Toulouse");

    // Switching the continent re-roots every downstream column.
    let plan = picker.on_column_changed(0, 1);
    assert_eq!(plan, RebuildPlan::Columns(vec![1, 2, 3]));
    assert_eq!(picker.label_at(1, 0), "Japan");
    assert_eq!(picker.label_at(3, 1), "Kyoto");

    assert_eq!(
        picker.adapter().selected_values(),
        vec![
            "Asia".to_string(),
            "Japan".to_string(),
            "Kansai".to_string(),
            "Osaka".to_string(),
        ]
    );
}

#[test]
fn test_number_picker_flow() {
    let adapter = NumberAdapter::new(vec![
        NumberColumn::new(ColumnRange::new(0, 120)).with_suffix(" kg"),
        NumberColumn::new(ColumnRange::with_step(0, 900, 100)).with_suffix(" g"),
    ]);
    let mut picker = SelectionController::new(adapter);

    assert_eq!(picker.item_count(1), 10);
    let plan = picker.on_column_changed(1, 4);
    assert_eq!(plan, RebuildPlan::Columns(vec![1]));
    assert_eq!(picker.label_at(1, 4), "400 g");
    assert_eq!(
        picker.adapter().selected_values(),
        vec![Some(0), Some(400)]
    );
}

#[test]
fn test_localized_labels_and_renderer() {
    let mut strings = CalendarStrings::default();
    strings
        .set_month_names(
            [
                "janvier", "fevrier", "mars", "avril", "mai", "juin", "juillet", "aout",
                "septembre", "octobre", "novembre", "decembre",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        )
        .unwrap();

    let adapter = CalendarAdapter::new(PickerLayout::ymd())
        .with_value(at(2024, 2, 10, 0, 0))
        .with_strings(strings);
    let mut picker = SelectionController::new(adapter);

    assert_eq!(picker.label_at(1, 1), "fevrier");

    // The host renderer wins over the adapter's formatting when non-empty.
    picker.set_item_renderer(|column, index| {
        (column == 1 && index == 1).then(|| "feb!".to_string())
    });
    assert_eq!(picker.label_at(1, 1), "feb!");
    assert_eq!(picker.label_at(1, 2), "mars");
}

#[test]
fn test_bounded_picker_clamp_flow() {
    let adapter = CalendarAdapter::new(PickerLayout::ymd())
        .with_bounds(at(2024, 3, 10, 0, 0), at(2024, 9, 10, 23, 59))
        .with_value(at(2024, 5, 20, 0, 0));
    let mut picker = SelectionController::new(adapter);

    // Scrolling to January lands before the minimum; the value clamps to
    // exactly the bound and the host repaints everything.
    let plan = picker.on_column_changed(1, 0);
    assert_eq!(plan, RebuildPlan::All);
    assert_eq!(picker.adapter().value(), at(2024, 3, 10, 0, 0));
    assert_eq!(picker.selected()[1], 2);
    assert_eq!(picker.selected()[2], 9);
}
