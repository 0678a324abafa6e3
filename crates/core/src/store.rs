use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::document::RotationDocument;

/// Errors raised while loading or saving the persisted editor state.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("failed to read editor state {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse editor state {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize editor state {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write editor state {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Owns the on-disk editor state: the JSON-persisted rotation document and
/// the path it round-trips through.
#[derive(Debug)]
pub struct StateStore {
    path: PathBuf,
    document: RotationDocument,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>, document: RotationDocument) -> Self {
        Self {
            path: path.into(),
            document,
        }
    }

    /// Loads the state from `path`; a missing file yields a fresh document.
    /// A failed load never leaves a half-applied document behind.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StateError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Ok(Self {
                path,
                document: RotationDocument::new(),
            });
        }

        let contents = fs::read_to_string(&path).map_err(|source| StateError::Read {
            path: path.clone(),
            source,
        })?;
        let document: RotationDocument =
            serde_json::from_str(&contents).map_err(|source| StateError::Parse {
                path: path.clone(),
                source,
            })?;
        Ok(Self { path, document })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &RotationDocument {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut RotationDocument {
        &mut self.document
    }

    /// Applies an edit and persists the result.
    pub fn update<F>(&mut self, mut op: F) -> Result<(), StateError>
    where
        F: FnMut(&mut RotationDocument),
    {
        op(&mut self.document);
        self.save()
    }

    /// Replaces the whole document and persists it.
    pub fn overwrite(&mut self, document: RotationDocument) -> Result<(), StateError> {
        self.document = document;
        self.save()
    }

    pub fn save(&self) -> Result<(), StateError> {
        let encoded =
            serde_json::to_vec_pretty(&self.document).map_err(|source| StateError::Serialize {
                path: self.path.clone(),
                source,
            })?;
        write_atomic(&self.path, &encoded).map_err(|source| StateError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

pub(crate) fn write_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, data)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
