pub mod connection;
pub mod feedback;

pub use connection::{init_db, Database};
