use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use rust_decimal::Decimal;

use crate::format;
use crate::models::{Expense, TimeRange};

/// Display colors cycled over categories in first-seen order.
pub const PALETTE: [&str; 8] = [
    "#3B82F6", "#EF4444", "#10B981", "#F59E0B", "#8B5CF6", "#EC4899", "#14B8A6", "#6B7280",
];

/// One bucket of the trend series.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub label: String,
    pub amount: Decimal,
}

/// One slice of the category distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    pub name: String,
    pub amount: Decimal,
    pub color: &'static str,
}

/// Totals for the summary cards.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total: Decimal,
    pub count: usize,
    pub average_per_day: Decimal,
}

/// Time-bucketed sums for the trend chart.
///
/// `records` is expected in chronological order (what `list_all` returns),
/// so first-seen bucket order is chronological. Records dated outside
/// `[now - window, now]` are skipped; buckets without records are omitted,
/// never emitted as zero. Sums carry full precision; rounding is a display
/// concern.
pub fn trend(records: &[Expense], range: TimeRange, now: NaiveDateTime) -> Vec<TrendPoint> {
    let window_ms = (range.window_days() * 86_400_000.0) as i64;
    let start = now - Duration::milliseconds(window_ms);

    let mut points: Vec<TrendPoint> = Vec::new();
    for record in records {
        // Dates have no time of day; they sit at midnight for windowing.
        let at = record.date.and_time(NaiveTime::MIN);
        if at < start || at > now {
            continue;
        }
        let label = bucket_label(at, range);
        match points.iter_mut().find(|point| point.label == label) {
            Some(point) => point.amount += record.amount,
            None => points.push(TrendPoint {
                label,
                amount: record.amount,
            }),
        }
    }
    points
}

/// Sub-day windows bucket by hour, a week by day, anything longer by month.
fn bucket_label(at: NaiveDateTime, range: TimeRange) -> String {
    if range.window_days() <= 1.0 {
        format!("{:02}:00", at.hour())
    } else if range == TimeRange::Week {
        format!("{} {}", format::month_short(at.date()), at.day())
    } else {
        format::month_short(at.date()).to_string()
    }
}

/// Category sums over the whole record set (never time-filtered), colored
/// by cycling [`PALETTE`] in first-seen order, then sorted by amount,
/// largest first. The sort is stable: equal sums keep first-seen order.
pub fn category_totals(records: &[Expense]) -> Vec<CategorySlice> {
    let mut slices: Vec<CategorySlice> = Vec::new();
    for record in records {
        match slices.iter_mut().find(|slice| slice.name == record.category) {
            Some(slice) => slice.amount += record.amount,
            None => slices.push(CategorySlice {
                name: record.category.clone(),
                amount: record.amount,
                color: PALETTE[slices.len() % PALETTE.len()],
            }),
        }
    }
    slices.sort_by(|a, b| b.amount.cmp(&a.amount));
    slices
}

/// Totals for the summary cards. The daily average divides by the number
/// of distinct dates carrying at least one record.
pub fn summary(records: &[Expense]) -> Summary {
    let total: Decimal = records.iter().map(|record| record.amount).sum();
    let mut dates: Vec<NaiveDate> = records.iter().map(|record| record.date).collect();
    dates.sort_unstable();
    dates.dedup();
    let average_per_day = if dates.is_empty() {
        Decimal::ZERO
    } else {
        total / Decimal::from(dates.len() as u64)
    };
    Summary {
        total,
        count: records.len(),
        average_per_day,
    }
}

#[cfg(test)]
mod tests;
