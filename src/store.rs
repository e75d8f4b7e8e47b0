use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::StoreError;
use crate::record::ProjectRecord;

/// JSON file holding every known project, oldest first.
///
/// There is no locking: a single running instance is assumed and a crash in
/// the middle of `save` may leave a truncated file behind.
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns an empty collection when the file does not exist yet.
    pub fn load(&self) -> Result<Vec<ProjectRecord>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("{} not found, starting empty", self.path.display());
                return Ok(vec![]);
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&text).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrites the file with the whole collection.
    pub fn save(&self, records: &[ProjectRecord]) -> Result<(), StoreError> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records
            .serialize(&mut ser)
            .map_err(|source| StoreError::Serialize {
                path: self.path.clone(),
                source,
            })?;
        fs::write(&self.path, buf).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
