//! List the connection profiles saved in a local pgAdmin 4 database.
//!
//! # Intention
//!
//! - Locate `pgadmin4.db` under the user profile, read the `server` table
//!   read-only and print each saved connection.
//! - Passwords are printed exactly as stored. Nothing here decrypts them.
//!
//! # Architectural Boundaries
//!
//! - [`locator`] only computes a path.
//! - [`reader`] owns the SQLite handle and runs the one fixed query.
//! - [`report`] only formats records.

pub mod config;
pub mod error;
pub mod locator;
pub mod reader;
pub mod report;

use std::io::Write;

pub use config::Config;
pub use error::{Error, Result};
pub use reader::{ServerRecord, ServerStore};
pub use report::OutputFormat;

/// Locate, read and report in one pass.
///
/// Every row is fetched before anything is written, so a failing query leaves
/// `out` untouched. The database handle is released on all paths.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let path = config.database_path()?;
    let store = ServerStore::open(&path)?;
    let records = store.servers()?;
    store.close()?;
    report::write_records(out, &records, config.format)
}
