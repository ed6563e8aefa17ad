#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

// ── rupiah ────────────────────────────────────────────────────

#[test]
fn test_rupiah_basic() {
    assert_eq!(rupiah(dec!(1234567)), "Rp 1.234.567");
}

#[test]
fn test_rupiah_no_separator_needed() {
    assert_eq!(rupiah(dec!(999)), "Rp 999");
}

#[test]
fn test_rupiah_zero() {
    assert_eq!(rupiah(dec!(0)), "Rp 0");
}

#[test]
fn test_rupiah_rounds_to_whole_rupiah() {
    assert_eq!(rupiah(dec!(1500.4)), "Rp 1.500");
    assert_eq!(rupiah(dec!(2.6)), "Rp 3");
}

#[test]
fn test_rupiah_millions() {
    assert_eq!(rupiah(dec!(10000000)), "Rp 10.000.000");
}

#[test]
fn test_rupiah_negative() {
    assert_eq!(rupiah(dec!(-42)), "-Rp 42");
}

#[test]
fn test_rupiah_exact_group_boundary() {
    assert_eq!(rupiah(dec!(1000)), "Rp 1.000");
    assert_eq!(rupiah(dec!(100000)), "Rp 100.000");
}

// ── dates ─────────────────────────────────────────────────────

#[test]
fn test_month_short() {
    assert_eq!(month_short(date("2024-05-01")), "Mei");
    assert_eq!(month_short(date("2024-08-01")), "Agu");
    assert_eq!(month_short(date("2024-12-31")), "Des");
}

#[test]
fn test_long_date() {
    // 2024-06-08 was a Saturday, 2024-01-15 a Monday.
    assert_eq!(long_date(date("2024-06-08")), "Sab, 8 Jun 2024");
    assert_eq!(long_date(date("2024-01-15")), "Sen, 15 Jan 2024");
}
