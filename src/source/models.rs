use crate::source::SourceError;
use serde::Deserialize;
use std::io::Read;
use tracing::warn;

/// Header of the optional required-profile column. Only later versions of
/// the sheet carry it.
pub const PROFILE_COLUMN: &str = "perfil exigido (proponente)";

/// One sheet row as delivered, every column optional.
///
/// The csv reader turns empty cells into `None`, and a column that is
/// missing from the header leaves its field `None` on every row.
#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct RawRow {
    pub titulo: Option<String>,
    pub agencia: Option<String>,
    pub modalidade: Option<String>,
    pub tema: Option<String>,
    pub tipo_financiamento: Option<String>,
    #[serde(rename = "perfil exigido (proponente)")]
    pub perfil_exigido: Option<String>,
    pub data_inicio: Option<String>,
    pub data_fim: Option<String>,
    pub link: Option<String>,
}

/// Decoded sheet: header names plus the rows that could be read.
#[derive(Debug, Default)]
pub struct RawSheet {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawSheet {
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }
}

/// Decodes CSV text into raw rows.
///
/// Only a broken header is an error. Rows the reader can't decode are
/// logged and skipped so one bad line doesn't hide the rest of the sheet.
pub fn decode_rows<R: Read>(input: R) -> Result<RawSheet, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for (i, result) in reader.deserialize::<RawRow>().enumerate() {
        match result {
            Ok(row) => rows.push(row),
            // +2: header line, then 1-based numbering
            Err(e) => warn!(line = i + 2, "skipping unreadable sheet row: {e}"),
        }
    }

    Ok(RawSheet { headers, rows })
}
