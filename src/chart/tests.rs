#![allow(clippy::unwrap_used)]

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::{Expense, TimeRange};

fn expense(date: &str, category: &str, amount: Decimal) -> Expense {
    Expense {
        id: format!("{category}-{date}-{amount}"),
        date: date.parse().unwrap(),
        category: category.into(),
        description: "Test".into(),
        amount,
        created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
    }
}

fn midnight(date: &str) -> NaiveDateTime {
    date.parse::<NaiveDate>().unwrap().and_time(NaiveTime::MIN)
}

// ── trend ─────────────────────────────────────────────────────

#[test]
fn test_trend_week_buckets_by_day() {
    let records = vec![
        expense("2024-06-01", "Makanan & Minuman", dec!(1000)),
        expense("2024-06-02", "Makanan & Minuman", dec!(2000)),
    ];
    let points = trend(&records, TimeRange::Week, midnight("2024-06-08"));
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].label, "Jun 1");
    assert_eq!(points[0].amount, dec!(1000));
    assert_eq!(points[1].label, "Jun 2");
    assert_eq!(points[1].amount, dec!(2000));
}

#[test]
fn test_trend_sums_within_a_bucket() {
    let records = vec![
        expense("2024-06-02", "Makanan & Minuman", dec!(1500)),
        expense("2024-06-02", "Transportasi", dec!(500)),
    ];
    let points = trend(&records, TimeRange::Week, midnight("2024-06-08"));
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].label, "Jun 2");
    assert_eq!(points[0].amount, dec!(2000));
}

#[test]
fn test_trend_month_buckets_by_month_name() {
    let records = vec![
        expense("2024-05-15", "Belanja", dec!(100)),
        expense("2024-06-01", "Belanja", dec!(200)),
        expense("2024-06-02", "Belanja", dec!(300)),
    ];
    let points = trend(&records, TimeRange::Month, midnight("2024-06-08"));
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].label, "Mei");
    assert_eq!(points[0].amount, dec!(100));
    assert_eq!(points[1].label, "Jun");
    assert_eq!(points[1].amount, dec!(500));
}

#[test]
fn test_trend_sub_day_buckets_by_hour() {
    // Dates carry no time of day, so sub-day ranges land on "00:00".
    let records = vec![
        expense("2024-06-01", "Tagihan", dec!(100)),
        expense("2024-06-02", "Tagihan", dec!(50)),
    ];
    let points = trend(&records, TimeRange::Day, midnight("2024-06-02"));
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].label, "00:00");
    assert_eq!(points[0].amount, dec!(150));
}

#[test]
fn test_trend_window_boundaries_are_inclusive() {
    let records = vec![
        expense("2024-05-31", "Belanja", dec!(1)),
        expense("2024-06-01", "Belanja", dec!(2)),
        expense("2024-06-08", "Belanja", dec!(3)),
        expense("2024-06-09", "Belanja", dec!(4)),
    ];
    let points = trend(&records, TimeRange::Week, midnight("2024-06-08"));
    let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
    // 2024-05-31 is outside the 7-day window, 2024-06-09 is in the future.
    assert_eq!(labels, vec!["Jun 1", "Jun 8"]);
}

#[test]
fn test_trend_fifteen_minute_window_keeps_today_only() {
    let records = vec![
        expense("2024-06-01", "Belanja", dec!(10)),
        expense("2024-06-02", "Belanja", dec!(20)),
    ];
    let points = trend(&records, TimeRange::Minutes15, midnight("2024-06-02"));
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].amount, dec!(20));
}

#[test]
fn test_trend_empty_input() {
    assert!(trend(&[], TimeRange::Week, midnight("2024-06-08")).is_empty());
}

#[test]
fn test_trend_nothing_in_range_yields_no_buckets() {
    let records = vec![expense("2020-01-01", "Belanja", dec!(10))];
    assert!(trend(&records, TimeRange::Year, midnight("2024-06-08")).is_empty());
}

// ── category_totals ───────────────────────────────────────────

#[test]
fn test_category_totals_sums_and_sorts_descending() {
    let records = vec![
        expense("2024-06-01", "Makanan & Minuman", dec!(10)),
        expense("2024-06-02", "Makanan & Minuman", dec!(20)),
        expense("2024-06-03", "Makanan & Minuman", dec!(30)),
        expense("2024-06-04", "Transportasi", dec!(5)),
    ];
    let slices = category_totals(&records);
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].name, "Makanan & Minuman");
    assert_eq!(slices[0].amount, dec!(60));
    assert_eq!(slices[1].name, "Transportasi");
    assert_eq!(slices[1].amount, dec!(5));
}

#[test]
fn test_category_totals_colors_follow_first_seen_order() {
    // The second-seen category keeps its color even after sorting ahead.
    let records = vec![
        expense("2024-06-01", "Hiburan", dec!(5)),
        expense("2024-06-02", "Belanja", dec!(100)),
    ];
    let slices = category_totals(&records);
    assert_eq!(slices[0].name, "Belanja");
    assert_eq!(slices[0].color, PALETTE[1]);
    assert_eq!(slices[1].name, "Hiburan");
    assert_eq!(slices[1].color, PALETTE[0]);
}

#[test]
fn test_category_totals_palette_wraps_around() {
    let records: Vec<Expense> = (0..9)
        .map(|i| expense("2024-06-01", &format!("C{i}"), dec!(1)))
        .collect();
    let slices = category_totals(&records);
    assert_eq!(slices.len(), 9);
    // Equal sums keep first-seen order, so the ninth category is last.
    assert_eq!(slices[8].name, "C8");
    assert_eq!(slices[8].color, PALETTE[0]);
}

#[test]
fn test_category_totals_is_not_time_filtered() {
    let records = vec![
        expense("1999-01-01", "Pendidikan", dec!(7)),
        expense("2024-06-01", "Pendidikan", dec!(3)),
    ];
    let slices = category_totals(&records);
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].amount, dec!(10));
}

#[test]
fn test_category_totals_empty_input() {
    assert!(category_totals(&[]).is_empty());
}

// ── summary ───────────────────────────────────────────────────

#[test]
fn test_summary_totals() {
    let records = vec![
        expense("2024-06-01", "Makanan & Minuman", dec!(10)),
        expense("2024-06-01", "Transportasi", dec!(20)),
        expense("2024-06-02", "Belanja", dec!(30)),
    ];
    let s = summary(&records);
    assert_eq!(s.total, dec!(60));
    assert_eq!(s.count, 3);
    // Two distinct spending dates.
    assert_eq!(s.average_per_day, dec!(30));
}

#[test]
fn test_summary_empty_input() {
    let s = summary(&[]);
    assert_eq!(s.total, Decimal::ZERO);
    assert_eq!(s.count, 0);
    assert_eq!(s.average_per_day, Decimal::ZERO);
}
