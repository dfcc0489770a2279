//! Credential store persistence
//!
//! The store is one JSON file holding the full ordered sequence of records.
//! Every operation reads the file fresh at its start; mutating operations
//! write the whole sequence back in one call. Nothing is cached between
//! invocations.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::StoreError;
use crate::record::CredentialRecord;

/// The on-disk credential store. Holds the store path as an explicit value;
/// there is no ambient path configuration.
pub struct CredStore {
    path: PathBuf,
}

impl CredStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the store file. A missing file is an error here;
    /// callers that want empty-on-absent semantics use [`load_or_empty`].
    ///
    /// [`load_or_empty`]: CredStore::load_or_empty
    pub fn load(&self) -> Result<Vec<CredentialRecord>, StoreError> {
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(StoreError::Parse)
    }

    /// Read the store, treating a missing file as the empty store.
    ///
    /// A single read is performed and only `NotFound` maps to empty, so
    /// there is no window between an existence check and the read. A
    /// corrupt or unreadable file stays an error; it must never be
    /// silently replaced by an empty store on the next save.
    pub fn load_or_empty(&self) -> Result<Vec<CredentialRecord>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content).map_err(StoreError::Parse),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "store file absent, starting empty");
                Ok(Vec::new())
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    /// Serialize the whole sequence and write it in one call, truncating
    /// any previous contents.
    ///
    /// The file is created with mode 0600; an existing file keeps its
    /// permissions. The sequence is pretty-printed so the store stays
    /// inspectable and diffable.
    pub fn save(&self, records: &[CredentialRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records).map_err(StoreError::Parse)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(&self.path)?;
        file.write_all(json.as_bytes())?;

        debug!(path = %self.path.display(), records = records.len(), "store saved");
        Ok(())
    }
}
