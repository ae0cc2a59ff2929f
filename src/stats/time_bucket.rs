//! Calendar bucketing for chart aggregation
//!
//! All buckets are UTC calendar units: days for the weekly histogram, months
//! for the monthly one.

use chrono::{Datelike, Days, NaiveDate};

/// Short weekday token for a daily bucket ("Mon", "Tue", ...)
pub fn day_label(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

/// "Mar 2026"-style label for a monthly bucket
pub fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|| format!("{:04}-{:02}", year, month))
}

/// Calendar month of a date as (year, month)
pub fn month_of(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}

/// The `n` calendar days ending at `end`, chronologically ascending
pub fn last_days(end: NaiveDate, n: usize) -> Vec<NaiveDate> {
    (0..n)
        .rev()
        .filter_map(|i| end.checked_sub_days(Days::new(i as u64)))
        .collect()
}

/// The `n` calendar months ending at `end`'s month, chronologically
/// ascending, as (year, month)
pub fn last_months(end: NaiveDate, n: usize) -> Vec<(i32, u32)> {
    let (mut year, mut month) = month_of(end);
    let mut buckets = Vec::with_capacity(n);
    for _ in 0..n {
        buckets.push((year, month));
        if month == 1 {
            month = 12;
            year -= 1;
        } else {
            month -= 1;
        }
    }
    buckets.reverse();
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_last_days_ascending_across_month_boundary() {
        let days = last_days(date(2026, 3, 2), 7);
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date(2026, 2, 24));
        assert_eq!(days[6], date(2026, 3, 2));
        for pair in days.windows(2) {
            assert_eq!(pair[1], pair[0].succ_opt().unwrap());
        }
    }

    #[test]
    fn test_last_months_ascending_across_year_boundary() {
        let months = last_months(date(2026, 2, 15), 4);
        assert_eq!(months, vec![(2025, 11), (2025, 12), (2026, 1), (2026, 2)]);
    }

    #[test]
    fn test_labels() {
        assert_eq!(day_label(date(2026, 3, 2)), "Mon");
        assert_eq!(month_label(2026, 3), "Mar 2026");
    }
}
