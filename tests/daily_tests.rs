use chrono::NaiveDate;
use stockinbound::core::daily::{
    DateMatch, PickupPolicy, count_pickup_ready, count_today, filter_today, is_on_day,
    leading_date,
};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
    data.iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}

#[test]
fn test_count_today_matches_timestamp_prefix() {
    let log = rows(&[
        &["2026-02-26 10:00:00", "ORD1", "Cat", "Ven", "http://img/1"],
        &["2026-02-25 10:00:00", "ORD2", "Cat", "Ven", "http://img/2"],
    ]);

    assert_eq!(count_today(&log, day("2026-02-26"), DateMatch::Prefix), 1);
    assert_eq!(count_today(&log, day("2026-02-24"), DateMatch::Prefix), 0);
}

#[test]
fn test_filter_today_tolerates_short_rows() {
    let log = rows(&[&["2026-02-26 08:30:00"], &["2026-02-26 09:00:00", "ORD9", "Toys"]]);

    let records = filter_today(&log, day("2026-02-26"), DateMatch::Prefix);
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].date, "2026-02-26 08:30:00");
    assert_eq!(records[0].order, "");
    assert_eq!(records[0].category, "");
    assert_eq!(records[0].vendor, "");
    assert_eq!(records[0].image_url, "");

    assert_eq!(records[1].order, "ORD9");
    assert_eq!(records[1].category, "Toys");
    assert_eq!(records[1].vendor, "");
}

#[test]
fn test_filter_today_keeps_append_order() {
    let log = rows(&[
        &["2026-02-26 11:00:00", "B"],
        &["2026-02-25 23:59:59", "X"],
        &["2026-02-26 09:00:00", "A"],
    ]);

    let orders: Vec<String> = filter_today(&log, day("2026-02-26"), DateMatch::Prefix)
        .into_iter()
        .map(|r| r.order)
        .collect();
    assert_eq!(orders, vec!["B".to_string(), "A".to_string()]);
}

#[test]
fn test_empty_rows_and_empty_date_cells_never_match() {
    let log = rows(&[&[], &[""], &["   "]]);
    assert_eq!(count_today(&log, day("2026-02-26"), DateMatch::Prefix), 0);
    assert_eq!(count_today(&log, day("2026-02-26"), DateMatch::Contains), 0);
}

#[test]
fn test_prefix_accepts_alternative_day_formats() {
    let d = day("2026-02-26");

    for cell in [
        "2026-02-26",
        "2026-02-26 10:00:00",
        "2026-02-26T10:00:00",
        "26-Feb-2026",
        "26-Feb-2026 10:00",
        "26-February-2026",
        "26/02/2026",
        "26/02/2026 17:45:00",
    ] {
        assert!(is_on_day(cell, d, DateMatch::Prefix), "{cell} should match");
    }

    // upper-case month names, some of them containing a 'T'
    for (cell, iso) in [
        ("26-OCT-2026 10:00", "2026-10-26"),
        ("26-AUGUST-2026", "2026-08-26"),
        ("26-SEPTEMBER-2026", "2026-09-26"),
    ] {
        assert!(is_on_day(cell, day(iso), DateMatch::Prefix), "{cell} should match");
    }
    assert_eq!(leading_date("26-OCT-2026"), Some(day("2026-10-26")));

    for cell in ["2026-02-25 10:00:00", "25-Feb-2026", "26/03/2026", "garbage"] {
        assert!(!is_on_day(cell, d, DateMatch::Prefix), "{cell} should not match");
    }
}

#[test]
fn test_contains_matches_embedded_dates_prefix_does_not() {
    let d = day("2026-02-26");
    let cell = "received on 2026-02-26 by night shift";

    assert!(is_on_day(cell, d, DateMatch::Contains));
    assert!(!is_on_day(cell, d, DateMatch::Prefix));
    assert!(is_on_day("note: 26/02/2026", d, DateMatch::Contains));
}

#[test]
fn test_leading_date_parses_supported_formats() {
    assert_eq!(leading_date("2026-02-26 10:00:00"), Some(day("2026-02-26")));
    assert_eq!(leading_date(" 01-Mar-2026"), Some(day("2026-03-01")));
    assert_eq!(leading_date("01/03/2026"), Some(day("2026-03-01")));
    assert_eq!(leading_date("not a date"), None);
    assert_eq!(leading_date(""), None);
}

#[test]
fn test_pickup_ready_policies() {
    // scorecard: date in column 1, order in column 2
    let score = rows(&[
        &["2026-02-26 09:00:00", "P1"],
        &["2026-02-25 09:00:00", "P2"],
        &["2026-02-26 10:00:00", "  "],
        &["2026-02-26 11:00:00"],
        &["", "P5"],
    ]);
    let d = day("2026-02-26");

    assert_eq!(
        count_pickup_ready(&score, 2, 1, d, PickupPolicy::DateFiltered, DateMatch::Prefix),
        1
    );
    assert_eq!(
        count_pickup_ready(&score, 2, 1, d, PickupPolicy::NonBlank, DateMatch::Prefix),
        3
    );
}

#[test]
fn test_pickup_ready_out_of_range_columns_are_blank() {
    let score = rows(&[&["2026-02-26", "P1"]]);
    let d = day("2026-02-26");

    assert_eq!(
        count_pickup_ready(&score, 7, 1, d, PickupPolicy::NonBlank, DateMatch::Prefix),
        0
    );
    assert_eq!(
        count_pickup_ready(&score, 2, 0, d, PickupPolicy::DateFiltered, DateMatch::Prefix),
        0
    );
}
