//! Read-only catalog repositories.
//!
//! # Responsibility
//! - Own the load-once lifecycle of each in-memory catalog.
//! - Serve pure queries over the cached records.
//!
//! # Invariants
//! - Queries before a successful load fail with `RepoError::NotLoaded`.
//! - Lookup misses are `Ok(None)`, never errors.
//! - No write operations are exposed.

pub mod body_repo;
pub mod element_repo;
pub mod load_gate;

use crate::decode::DecodeError;
use crate::source::SourceError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for catalog load and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Query issued before the named catalog finished loading.
    NotLoaded(&'static str),
    Source(SourceError),
    Decode(DecodeError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotLoaded(catalog) => write!(
                f,
                "{catalog} catalog queried before load(); call load() or await readiness first"
            ),
            Self::Source(err) => write!(f, "{err}"),
            Self::Decode(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotLoaded(_) => None,
            Self::Source(err) => Some(err),
            Self::Decode(err) => Some(err),
        }
    }
}

impl From<SourceError> for RepoError {
    fn from(value: SourceError) -> Self {
        Self::Source(value)
    }
}

impl From<DecodeError> for RepoError {
    fn from(value: DecodeError) -> Self {
        Self::Decode(value)
    }
}

/// Previous and next record around an index, for sequential navigation.
#[derive(Debug, PartialEq)]
pub struct Neighbors<'a, T> {
    pub previous: Option<&'a T>,
    pub next: Option<&'a T>,
}

pub(crate) fn neighbors_in<T>(records: &[T], index: usize) -> Neighbors<'_, T> {
    Neighbors {
        previous: index.checked_sub(1).and_then(|prev| records.get(prev)),
        next: index.checked_add(1).and_then(|next| records.get(next)),
    }
}
