/// Connection Management Module
///
/// Every catalog operation opens its own connection to the catalog file,
/// runs a single statement and closes the connection again. There is no
/// pooling and no transaction spanning more than one statement; SQLite's
/// autocommit mode commits each statement as it completes.

use crate::core::{Result, ShelfError};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, trace};

use super::schema::ensure_schema;

/// How long a statement waits on a locked database file before failing
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to the catalog's database file
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Opens the store at `path` and makes sure the schema exists
    ///
    /// The parent directory is created when missing. No connection is held
    /// after this returns.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Io` if the parent directory cannot be created and
    /// `ShelfError::Database` if the file cannot be opened or initialized.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let store = Store { path };
        store.with_connection(ensure_schema)?;
        Ok(store)
    }

    /// Path of the database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs `op` against a freshly opened connection
    ///
    /// The connection is closed before returning, whether `op` succeeded or
    /// not. Errors from opening, from `op` and from closing are all reported
    /// as `ShelfError::Database`.
    pub fn with_connection<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        trace!("Opening connection to {:?}", self.path);
        let conn = Connection::open(&self.path).map_err(|e| {
            error!("Failed to open {:?}: {}", self.path, e);
            ShelfError::Database(e)
        })?;
        conn.busy_timeout(BUSY_TIMEOUT)?;

        match op(&conn) {
            Ok(value) => {
                conn.close().map_err(|(_, e)| {
                    error!("Failed to close {:?}: {}", self.path, e);
                    ShelfError::Database(e)
                })?;
                trace!("Closed connection to {:?}", self.path);
                Ok(value)
            }
            Err(e) => {
                error!("Statement against {:?} failed: {}", self.path, e);
                drop(conn);
                Err(ShelfError::Database(e))
            }
        }
    }
}
