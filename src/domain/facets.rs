// src/domain/facets.rs

use crate::domain::record::Editais;
use chrono::Datelike;
use serde::Serialize;
use std::collections::BTreeSet;

/// Distinct values available to each filter widget, sorted.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Facets {
    pub agencies: Vec<String>,
    pub categories: Vec<String>,
    pub themes: Vec<String>,
    pub closing_years: Vec<i32>,
    /// `None` when the sheet has no required-profile column.
    pub required_profiles: Option<Vec<String>>,
}

impl Facets {
    pub fn collect(editais: &Editais) -> Self {
        let mut agencies = BTreeSet::new();
        let mut categories = BTreeSet::new();
        let mut themes = BTreeSet::new();
        let mut years = BTreeSet::new();
        let mut profiles = BTreeSet::new();

        for record in &editais.records {
            if let Some(agency) = &record.agency {
                agencies.insert(agency.clone());
            }
            categories.extend(record.categories.iter().cloned());
            themes.extend(record.themes.iter().cloned());
            if let Some(end) = record.end_date {
                years.insert(end.year());
            }
            if let Some(profile) = &record.required_profile {
                profiles.insert(profile.clone());
            }
        }

        Facets {
            agencies: agencies.into_iter().collect(),
            categories: categories.into_iter().collect(),
            themes: themes.into_iter().collect(),
            closing_years: years.into_iter().collect(),
            required_profiles: editais
                .has_required_profile
                .then(|| profiles.into_iter().collect()),
        }
    }
}
