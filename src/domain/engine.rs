// src/domain/engine.rs

use crate::domain::criteria::{DeadlineBucket, FilterCriteria};
use crate::domain::record::Record;
use chrono::{Datelike, NaiveDate};
use std::cmp::Reverse;
use std::collections::BTreeSet;

/// Days from today (inclusive) that still count as "closing soon".
pub const CLOSING_SOON_DAYS: i64 = 7;

/// Classifies a closing date against `today`. Undated records have no
/// bucket.
pub fn classify(end_date: Option<NaiveDate>, today: NaiveDate) -> Option<DeadlineBucket> {
    let delta = days_left(end_date?, today);

    Some(if delta < 0 {
        DeadlineBucket::Closed
    } else if delta <= CLOSING_SOON_DAYS {
        DeadlineBucket::ClosingWithin7Days
    } else {
        DeadlineBucket::MoreThan7Days
    })
}

pub fn days_left(end_date: NaiveDate, today: NaiveDate) -> i64 {
    (end_date - today).num_days()
}

fn intersects(values: &[String], selected: &BTreeSet<String>) -> bool {
    selected.is_empty() || values.iter().any(|v| selected.contains(v))
}

/// Whether a single record satisfies every constraint in `criteria`.
pub fn matches(record: &Record, criteria: &FilterCriteria, today: NaiveDate) -> bool {
    if let Some(agency) = &criteria.agency {
        if record.agency.as_deref() != Some(agency.as_str()) {
            return false;
        }
    }

    if !intersects(&record.categories, &criteria.categories) {
        return false;
    }

    if !intersects(&record.themes, &criteria.themes) {
        return false;
    }

    if !criteria.closing_years.is_empty() {
        let year = record.end_date.map(|d| d.year());
        if !year.is_some_and(|y| criteria.closing_years.contains(&y)) {
            return false;
        }
    }

    if !criteria.deadline.admits(classify(record.end_date, today)) {
        return false;
    }

    if !criteria.required_profiles.is_empty() {
        let profile = record.required_profile.as_ref();
        if !profile.is_some_and(|p| criteria.required_profiles.contains(p)) {
            return false;
        }
    }

    true
}

/// Applies `criteria` to `records`, keeping input order.
///
/// Accepts any iterator of record references, so an already filtered view
/// can be filtered again.
pub fn filter<'a, I>(records: I, criteria: &FilterCriteria, today: NaiveDate) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter(|r| matches(r, criteria, today))
        .collect()
}

/// Still accepting applications: undated, or closing today or later.
/// Sorted by closing date ascending, undated last.
pub fn open_view<'a>(records: &[&'a Record], today: NaiveDate) -> Vec<&'a Record> {
    let mut open: Vec<&Record> = records
        .iter()
        .copied()
        .filter(|r| r.end_date.map_or(true, |d| d >= today))
        .collect();

    open.sort_by_key(|r| (r.end_date.is_none(), r.end_date));
    open
}

/// Closed before today, most recently closed first.
pub fn closed_view<'a>(records: &[&'a Record], today: NaiveDate) -> Vec<&'a Record> {
    let mut closed: Vec<&Record> = records
        .iter()
        .copied()
        .filter(|r| r.end_date.is_some_and(|d| d < today))
        .collect();

    closed.sort_by_key(|r| Reverse(r.end_date));
    closed
}
