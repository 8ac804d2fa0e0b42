// src/domain/summary.rs

use crate::domain::record::Record;
use std::collections::HashMap;

/// Count of records per value, the data behind one summary bar chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    pub value: String,
    pub count: usize,
}

/// Counts each distinct value produced by `values` once per record.
/// Sorted by count descending, then value ascending.
pub fn tally_by<'a, F, I>(records: &[&'a Record], values: F) -> Vec<Tally>
where
    F: Fn(&'a Record) -> I,
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for &record in records {
        let mut seen: Vec<&str> = values(record).into_iter().collect();
        seen.sort_unstable();
        seen.dedup();
        for value in seen {
            *counts.entry(value).or_default() += 1;
        }
    }

    let mut tallies: Vec<Tally> = counts
        .into_iter()
        .map(|(value, count)| Tally {
            value: value.to_string(),
            count,
        })
        .collect();

    tallies.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    tallies
}

pub fn by_agency(records: &[&Record]) -> Vec<Tally> {
    tally_by(records, |r| r.agency.as_deref())
}

pub fn by_category(records: &[&Record]) -> Vec<Tally> {
    tally_by(records, |r| r.categories.iter().map(String::as_str))
}

pub fn by_theme(records: &[&Record]) -> Vec<Tally> {
    tally_by(records, |r| r.themes.iter().map(String::as_str))
}
