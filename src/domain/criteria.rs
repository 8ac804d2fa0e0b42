// src/domain/criteria.rs

use std::collections::BTreeSet;

/// Where a dated record sits relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineBucket {
    /// Closes today or within the next 7 days.
    ClosingWithin7Days,
    MoreThan7Days,
    Closed,
}

impl DeadlineBucket {
    pub fn label(self) -> &'static str {
        match self {
            DeadlineBucket::ClosingWithin7Days => "Encerra em até 7 dias",
            DeadlineBucket::MoreThan7Days => "Aberto",
            DeadlineBucket::Closed => "Encerrado",
        }
    }
}

/// Label for records without a closing date.
pub const NO_DEADLINE_LABEL: &str = "Sem prazo definido";

/// The "Prazo de inscrição" selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeadlineFilter {
    #[default]
    All,
    ClosingWithin7Days,
    MoreThan7Days,
    Closed,
}

impl DeadlineFilter {
    pub const ALL: [DeadlineFilter; 4] = [
        DeadlineFilter::All,
        DeadlineFilter::ClosingWithin7Days,
        DeadlineFilter::MoreThan7Days,
        DeadlineFilter::Closed,
    ];

    /// `All` admits every record, undated ones included. The other values
    /// only admit records classified into the matching bucket.
    pub fn admits(self, bucket: Option<DeadlineBucket>) -> bool {
        match self {
            DeadlineFilter::All => true,
            DeadlineFilter::ClosingWithin7Days => bucket == Some(DeadlineBucket::ClosingWithin7Days),
            DeadlineFilter::MoreThan7Days => bucket == Some(DeadlineBucket::MoreThan7Days),
            DeadlineFilter::Closed => bucket == Some(DeadlineBucket::Closed),
        }
    }

    /// Value used in query strings.
    pub fn slug(self) -> &'static str {
        match self {
            DeadlineFilter::All => "todos",
            DeadlineFilter::ClosingWithin7Days => "ate-7-dias",
            DeadlineFilter::MoreThan7Days => "mais-de-7-dias",
            DeadlineFilter::Closed => "encerrados",
        }
    }

    pub fn from_slug(slug: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.slug() == slug)
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            DeadlineFilter::All => "Todos",
            DeadlineFilter::ClosingWithin7Days => "Até 7 dias",
            DeadlineFilter::MoreThan7Days => "Mais de 7 dias",
            DeadlineFilter::Closed => "Encerrados",
        }
    }
}

/// One user's selection. Every constraint defaults to "no constraint":
/// `agency: None` means all agencies and an empty set means the field is
/// not filtered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub agency: Option<String>,
    pub categories: BTreeSet<String>,
    pub themes: BTreeSet<String>,
    pub closing_years: BTreeSet<i32>,
    pub deadline: DeadlineFilter,
    pub required_profiles: BTreeSet<String>,
}

impl FilterCriteria {
    pub fn is_unconstrained(&self) -> bool {
        *self == FilterCriteria::default()
    }
}
