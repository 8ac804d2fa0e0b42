// fetcher.rs
use crate::config::Config;
use crate::domain::Editais;
use crate::source::models::{decode_rows, RawSheet};
use crate::source::SourceError;
use reqwest::blocking::Client;
use std::fs::File;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

const USER_AGENT: &str = concat!("editais_dashboard/", env!("CARGO_PKG_VERSION"));

/// Downloads the published CSV export of the editais sheet.
pub struct SheetFetcher {
    client: Client,
}

impl SheetFetcher {
    pub fn new(timeout: Duration) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    pub fn fetch(&self, url: &str) -> Result<RawSheet, SourceError> {
        let start = std::time::Instant::now();

        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Http(status.as_u16()));
        }

        let bytes = resp.bytes()?;
        info!(
            "📄 Downloaded {} bytes from sheet in {:?}",
            bytes.len(),
            start.elapsed()
        );

        decode_rows(bytes.as_ref())
    }
}

pub fn read_file(path: &Path) -> Result<RawSheet, SourceError> {
    let file = File::open(path)?;
    decode_rows(file)
}

/// Loads the record set once for the process.
///
/// Never fails: an unreachable or unreadable sheet degrades to an empty
/// list so the dashboard still serves (with nothing to show).
pub fn load_editais(config: &Config) -> Editais {
    let sheet = if let Some(path) = &config.csv_file {
        read_file(path).map_err(|e| (path.display().to_string(), e))
    } else if let Some(url) = &config.sheet_url {
        SheetFetcher::new(Duration::from_secs(config.timeout_secs))
            .and_then(|fetcher| fetcher.fetch(url))
            .map_err(|e| (url.clone(), e))
    } else {
        warn!("no sheet URL or CSV file configured, starting with an empty list");
        return Editais::default();
    };

    match sheet {
        Ok(sheet) => {
            let editais = Editais::from_sheet(&sheet);
            info!("✅ Loaded {} editais", editais.records.len());
            editais
        }
        Err((origin, e)) => {
            warn!(%origin, "⚠️ Editais unavailable, starting with an empty list: {e}");
            Editais::default()
        }
    }
}
