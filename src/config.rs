use std::path::PathBuf;

use crate::error::Result;
use crate::locator;
use crate::report::OutputFormat;

/// Settings for one listing run. The default reads the located database and
/// prints text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Database file to read instead of the one under the user profile.
    pub db_path: Option<PathBuf>,
    pub format: OutputFormat,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = Some(path.into());
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.db_path {
            Some(path) => Ok(path.clone()),
            None => locator::database_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_locator() {
        let config = Config::new().with_db_path("/tmp/other.db");
        assert_eq!(config.database_path().unwrap(), PathBuf::from("/tmp/other.db"));
    }

    #[test]
    fn defaults_to_text() {
        let config = Config::new();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.db_path.is_none());
    }
}
