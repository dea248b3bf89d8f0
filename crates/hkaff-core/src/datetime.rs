//! Date/time helpers for festival-local timestamps.
//!
//! All catalogue times are naive local wall-clock values (the source data
//! carries no timezone offset). Everything here is a pure function; sorting
//! and grouping return new vectors and leave their input untouched.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::catalogue::Language;

/// Parse an ISO-8601 local timestamp, with or without seconds.
///
/// Returns `None` on unparseable input rather than an error; callers treat
/// a bad timestamp like a missing one.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// Format a calendar date for display.
///
/// Traditional Chinese renders `M月D日`; English renders the weekday long
/// name plus long month and day, e.g. `Friday, March 14`.
pub fn format_date(ts: NaiveDateTime, language: Language) -> String {
    match language {
        Language::Tc => format!("{}月{}日", ts.month(), ts.day()),
        Language::En => ts.format("%A, %B %-d").to_string(),
    }
}

/// 24-hour zero-padded `HH:MM`.
pub fn format_time(ts: NaiveDateTime) -> String {
    ts.format("%H:%M").to_string()
}

/// Return a new vector sorted ascending by the extracted timestamp.
/// The sort is stable: items with equal timestamps keep their input order.
pub fn sort_by_datetime<T, F>(items: &[T], key: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> NaiveDateTime,
{
    let mut sorted = items.to_vec();
    sorted.sort_by_key(|item| key(item));
    sorted
}

/// Group items by calendar date.
///
/// Group order follows the first occurrence of each date in the input;
/// items within a group keep their input order. Callers pre-sort when
/// display order matters.
pub fn group_by_date<T, F>(items: &[T], key: F) -> Vec<(NaiveDate, Vec<T>)>
where
    T: Clone,
    F: Fn(&T) -> NaiveDateTime,
{
    let mut groups: Vec<(NaiveDate, Vec<T>)> = Vec::new();
    for item in items {
        let date = key(item).date();
        match groups.iter_mut().find(|(d, _)| *d == date) {
            Some((_, members)) => members.push(item.clone()),
            None => groups.push((date, vec![item.clone()])),
        }
    }
    groups
}

/// Compare calendar dates, ignoring time of day.
pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}
