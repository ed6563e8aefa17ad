use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

// Indexed by days since Monday.
const WEEKDAYS_SHORT: [&str; 7] = ["Sen", "Sel", "Rab", "Kam", "Jum", "Sab", "Min"];

/// Indonesian short month name ("Mei", "Agu", ...).
pub fn month_short(date: NaiveDate) -> &'static str {
    MONTHS_SHORT[date.month0() as usize]
}

/// Format an amount as whole Indonesian Rupiah with dot separators,
/// e.g. `1234567` → `"Rp 1.234.567"`. Rounding to whole rupiah happens
/// here and only here.
pub fn rupiah(amount: Decimal) -> String {
    let rounded = amount.round();
    let digits = rounded.abs().to_string();

    let grouped: String = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(".");

    if rounded < Decimal::ZERO {
        format!("-Rp {grouped}")
    } else {
        format!("Rp {grouped}")
    }
}

/// Indonesian date line for the expense list, e.g. `"Sen, 8 Jun 2026"`.
pub fn long_date(date: NaiveDate) -> String {
    let weekday = WEEKDAYS_SHORT[date.weekday().num_days_from_monday() as usize];
    format!("{weekday}, {} {} {}", date.day(), month_short(date), date.year())
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
