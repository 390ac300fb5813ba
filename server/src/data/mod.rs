//! Data storage layer
//!
//! - `sqlite` - the embedded database service, schema, and repositories
//! - `types` - shared row types returned by the repositories

pub mod sqlite;
pub mod types;

pub use sqlite::{SqliteError, SqliteService};
