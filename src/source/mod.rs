mod fetcher;
mod models;
mod source_error;

pub use fetcher::load_editais;
#[cfg(test)]
pub use models::decode_rows;
pub use models::{RawRow, RawSheet, PROFILE_COLUMN};
pub use source_error::SourceError;
