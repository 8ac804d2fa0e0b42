// src/domain/record.rs

use crate::source::{RawRow, RawSheet, PROFILE_COLUMN};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

pub const UNTITLED: &str = "Sem título";

/// Separator used by the sheet for multi-value cells.
pub const MULTI_VALUE_SEPARATOR: char = ';';

const DAY_FIRST_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y"];
const DAY_FIRST_SHORT_YEAR_FORMATS: &[&str] = &["%d/%m/%y", "%d-%m-%y"];
const ISO_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// One funding announcement, normalized from a sheet row.
///
/// Multi-value fields are always present (possibly empty), and optional
/// text fields are `None` rather than blank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub title: String,
    pub agency: Option<String>,
    pub categories: Vec<String>,
    pub themes: Vec<String>,
    pub funding_types: Vec<String>,
    pub required_profile: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub link: Option<String>,
}

impl Record {
    pub fn from_raw_row(row: &RawRow) -> Self {
        Record {
            title: non_blank(row.titulo.as_deref())
                .unwrap_or(UNTITLED)
                .to_string(),
            agency: non_blank(row.agencia.as_deref()).map(str::to_string),
            categories: split_multi(row.modalidade.as_deref()),
            themes: split_multi(row.tema.as_deref()),
            funding_types: split_multi(row.tipo_financiamento.as_deref()),
            required_profile: non_blank(row.perfil_exigido.as_deref()).map(str::to_string),
            start_date: row.data_inicio.as_deref().and_then(parse_date),
            end_date: row.data_fim.as_deref().and_then(parse_date),
            link: non_blank(row.link.as_deref()).map(str::to_string),
        }
    }
}

/// The record set loaded for the process. Never mutated after load.
#[derive(Debug, Default, Clone)]
pub struct Editais {
    pub records: Vec<Record>,
    /// Whether the sheet carries the required-profile column at all.
    pub has_required_profile: bool,
}

impl Editais {
    pub fn from_sheet(sheet: &RawSheet) -> Self {
        Editais {
            records: sheet.rows.iter().map(Record::from_raw_row).collect(),
            has_required_profile: sheet.has_column(PROFILE_COLUMN),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Splits a `;`-delimited cell into trimmed, non-empty tokens.
pub fn split_multi(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or("")
        .split(MULTI_VALUE_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses a sheet date, day-first before ISO. Any time-of-day part is
/// dropped. Unparseable text yields `None`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = value
        .trim()
        .split(|c: char| c.is_whitespace() || c == 'T')
        .next()
        .unwrap_or("");

    if date_part.is_empty() {
        return None;
    }

    // %Y happily reads "24" as the year 24, so four-digit forms must really
    // have four digits before the short-year forms get a chance.
    let try_formats = |formats: &[&str], min_year: i32| {
        formats.iter().find_map(|fmt| {
            NaiveDate::parse_from_str(date_part, fmt)
                .ok()
                .filter(|d| d.year() >= min_year)
        })
    };

    try_formats(DAY_FIRST_FORMATS, 1000)
        .or_else(|| try_formats(DAY_FIRST_SHORT_YEAR_FORMATS, i32::MIN))
        .or_else(|| try_formats(ISO_FORMATS, 1000))
}
