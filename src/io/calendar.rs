// src/io/calendar.rs

use chrono::{Local, NaiveDate};

/// Day 0 of the reference outbreak: 2020-01-16, the first confirmed case
/// in Japan.
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 16).expect("2020-01-16 is a valid calendar date")
}

/// Whole days elapsed from `reference` to the local current date. Negative
/// when the reference lies in the future.
pub fn elapsed_days_since(reference: NaiveDate) -> i64 {
    Local::now()
        .date_naive()
        .signed_duration_since(reference)
        .num_days()
}

/// Marker day for the chart: elapsed days since the reference outbreak
/// began, if that falls inside the plotted window.
pub fn today_marker(reference: NaiveDate, termination_day: usize) -> Option<usize> {
    let elapsed = elapsed_days_since(reference);
    if (0..termination_day as i64).contains(&elapsed) {
        Some(elapsed as usize)
    } else {
        None
    }
}
