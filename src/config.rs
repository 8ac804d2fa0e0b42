use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Command-line arguments for the editais dashboard.
///
/// When both `--csv-file` and `--sheet-url` are given the local file wins.
/// With neither, the dashboard starts with an empty list.
#[derive(Parser, Debug, Clone)]
#[command(name = "editais_dashboard")]
#[command(about = "Filterable dashboard of funding announcements published as a CSV sheet")]
#[command(version)]
pub struct Config {
    /// Published CSV export of the editais spreadsheet
    #[arg(long, env = "EDITAIS_SHEET_URL")]
    pub sheet_url: Option<String>,

    /// Read the editais from a local CSV file instead of the sheet URL
    #[arg(long, env = "EDITAIS_CSV_FILE")]
    pub csv_file: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000", env = "EDITAIS_ADDR")]
    pub addr: SocketAddr,

    /// SQLite file that stores feedback messages
    #[arg(long, default_value = "editais.sqlite3", env = "EDITAIS_DB")]
    pub db: String,

    /// Worker threads for the HTTP server
    #[arg(long, default_value_t = 8)]
    pub workers: usize,

    /// Timeout for the sheet download, in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}
