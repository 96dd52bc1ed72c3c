//! Read-only access to the `server` table of a pgAdmin 4 database.
//!
//! The handle is owned by [`ServerStore`] and closed when it is dropped, so
//! every exit path (including a failed query) releases the file.

use std::path::{Path, PathBuf};

use rusqlite::types::Value;
use rusqlite::{Connection, OpenFlags, Row};
use serde::Serialize;

use crate::error::{Error, Result};

/// The one query this crate ever runs.
pub const SERVERS_QUERY: &str = "SELECT name, host, username, password FROM server";

/// A column value exactly as SQLite stored it, whatever the declared type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Field {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl From<Value> for Field {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Field::Null,
            Value::Integer(i) => Field::Integer(i),
            Value::Real(r) => Field::Real(r),
            Value::Text(s) => Field::Text(s),
            Value::Blob(b) => Field::Blob(b),
        }
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Field::Text(s.to_string())
    }
}

impl Field {
    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }
}

/// A saved connection profile as stored by pgAdmin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerRecord {
    pub name: Field,
    pub host: Field,
    pub username: Field,
    /// Ciphertext exactly as stored; never decoded.
    pub encrypted_password: Field,
}

impl ServerRecord {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            name: row.get::<_, Value>(0)?.into(),
            host: row.get::<_, Value>(1)?.into(),
            username: row.get::<_, Value>(2)?.into(),
            encrypted_password: row.get::<_, Value>(3)?.into(),
        })
    }
}

pub struct ServerStore {
    path: PathBuf,
    conn: Connection,
}

impl ServerStore {
    /// Open an existing database read-only.
    ///
    /// SQLite opens lazily, so the schema version is read here to make a
    /// missing, locked or non-database file fail at open time.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let open_err = |source| Error::Open {
            path: path.clone(),
            source,
        };

        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(&path, flags).map_err(open_err)?;
        conn.query_row("PRAGMA schema_version", [], |row| row.get::<_, i64>(0))
            .map_err(open_err)?;

        tracing::debug!(path = %path.display(), "opened pgAdmin database");
        Ok(Self { path, conn })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fetch every saved server, in whatever order SQLite yields them.
    pub fn servers(&self) -> Result<Vec<ServerRecord>> {
        let mut stmt = self.conn.prepare(SERVERS_QUERY).map_err(Error::Query)?;
        let rows = stmt
            .query_map([], ServerRecord::from_row)
            .map_err(Error::Query)?;
        let records = rows
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(Error::Query)?;

        tracing::info!(count = records.len(), "read saved servers");
        Ok(records)
    }

    /// Close the handle, surfacing any error SQLite reports on close.
    pub fn close(self) -> Result<()> {
        let path = self.path;
        self.conn.close().map_err(|(_, err)| Error::Close(err))?;
        tracing::debug!(path = %path.display(), "closed pgAdmin database");
        Ok(())
    }
}
