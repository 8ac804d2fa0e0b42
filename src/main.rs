use crate::config::Config;
use crate::db::{init_db, Database};
use crate::responses::error_to_response;
use crate::router::{handle, AppState};
use astra::Server;
use clap::Parser;
use tracing::{error, info};

mod config;
mod db;
mod domain;
mod errors;
mod query;
mod responses;
mod router;
mod source;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "editais_dashboard=info".into()),
        )
        .init();

    let config = Config::parse();

    // 1️⃣ Feedback storage
    let db = Database::new(config.db.clone());
    if let Err(e) = init_db(&db) {
        error!("❌ Database initialization failed: {e}");
        std::process::exit(1);
    }

    // 2️⃣ Editais, fetched once for the whole process
    let editais = source::load_editais(&config);
    let state = AppState::new(db, editais);

    // 3️⃣ Start the server
    info!("Starting server at http://{}", config.addr);
    let server = Server::bind(config.addr).max_workers(config.workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
