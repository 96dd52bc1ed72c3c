//! Where pgAdmin 4 keeps its configuration database.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Location of `pgadmin4.db` relative to the user profile directory.
pub const RELATIVE_DB_PATH: [&str; 4] = ["AppData", "Roaming", "pgadmin", "pgadmin4.db"];

/// Resolve the database path for the running user. The file is not checked.
pub fn database_path() -> Result<PathBuf> {
    let profile = dirs::home_dir().ok_or(Error::PathResolution)?;
    let path = database_path_in(&profile);
    tracing::debug!(path = %path.display(), "resolved pgAdmin database path");
    Ok(path)
}

pub fn database_path_in(profile: &Path) -> PathBuf {
    RELATIVE_DB_PATH
        .iter()
        .fold(profile.to_path_buf(), |path, part| path.join(part))
}
