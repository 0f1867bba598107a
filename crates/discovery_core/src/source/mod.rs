//! Catalog source readers.
//!
//! # Responsibility
//! - Hand raw UTF-8 source text to the repositories by name.
//! - Keep file-system access out of decoding and querying.
//!
//! # Invariants
//! - Readers are shareable across threads (`Send + Sync`).
//! - A missing source maps to `SourceError::NotFound`, never a panic.

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub type SourceResult<T> = Result<T, SourceError>;

/// Error raised while reading a named catalog source.
#[derive(Debug)]
pub enum SourceError {
    NotFound(String),
    Io { name: String, source: io::Error },
}

impl SourceError {
    pub fn name(&self) -> &str {
        match self {
            Self::NotFound(name) | Self::Io { name, .. } => name,
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(name) => write!(f, "catalog source not found: {name}"),
            Self::Io { name, source } => {
                write!(f, "failed to read catalog source `{name}`: {source}")
            }
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Named access to raw catalog source text.
pub trait SourceReader: Send + Sync {
    fn read_source(&self, name: &str) -> SourceResult<String>;
}

impl<T: SourceReader + ?Sized> SourceReader for Arc<T> {
    fn read_source(&self, name: &str) -> SourceResult<String> {
        (**self).read_source(name)
    }
}

/// Reads sources as UTF-8 files relative to a root directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SourceReader for DirSource {
    fn read_source(&self, name: &str) -> SourceResult<String> {
        let path = self.root.join(name);
        std::fs::read_to_string(&path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound(name.to_string()),
            _ => SourceError::Io {
                name: name.to_string(),
                source: err,
            },
        })
    }
}

/// In-memory name to text map.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(name, text);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(name.into(), text.into());
    }
}

impl SourceReader for MemorySource {
    fn read_source(&self, name: &str) -> SourceResult<String> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{DirSource, MemorySource, SourceError, SourceReader};
    use std::sync::Arc;

    #[test]
    fn memory_source_reports_missing_names() {
        let source = MemorySource::new().with("a.json", "{}");
        assert_eq!(source.read_source("a.json").unwrap(), "{}");
        let err = source.read_source("b.json").unwrap_err();
        assert!(matches!(err, SourceError::NotFound(ref name) if name == "b.json"));
    }

    #[test]
    fn dir_source_maps_missing_file_to_not_found() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("sun.json"), "{\"id\":\"sun\"}").unwrap();
        let source = DirSource::new(dir.path());

        assert!(source.read_source("sun.json").unwrap().contains("sun"));
        assert!(matches!(
            source.read_source("pluto.json"),
            Err(SourceError::NotFound(_))
        ));
    }

    #[test]
    fn shared_reader_delegates() {
        let shared: Arc<dyn SourceReader> = Arc::new(MemorySource::new().with("x", "1"));
        assert_eq!(shared.read_source("x").unwrap(), "1");
    }
}
