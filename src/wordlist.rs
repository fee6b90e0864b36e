//! Common-password list management.
//!
//! Handles loading and querying the reference list of known-weak passwords.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Failed to read word list file: {0}")]
    Read(#[from] io::Error),
}

/// Returns the default word list path.
///
/// Priority:
/// 1. Environment variable `PWD_WORDLIST_PATH`
/// 2. Default path `./assets/common-passwords.txt`
///
/// The loader itself never consults the environment; pass this (or any
/// other path) to [`CommonPasswordSet::load`] explicitly.
pub fn default_wordlist_path() -> PathBuf {
    std::env::var("PWD_WORDLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/common-passwords.txt"))
}

/// Reference collection of known-weak passwords.
///
/// Entries are stored lower-cased and lookups lower-case the probe, so
/// membership is case-insensitive exact match. Load once at process
/// start; the set is read-only afterwards and safe to share across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct CommonPasswordSet {
    entries: HashSet<String>,
}

impl CommonPasswordSet {
    /// Returns an empty set; every membership query is negative.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a set from in-memory entries, lower-casing each one.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    /// Loads the word list from a plain-text file, one password per line.
    ///
    /// Lines are trimmed and lower-cased; empty lines are dropped. A
    /// missing file yields an empty set rather than an error, so the
    /// common-password check degrades to "never flagged".
    ///
    /// # Errors
    ///
    /// Returns [`WordlistError::Read`] only when the file exists but
    /// cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WordlistError> {
        let path = path.as_ref();

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Word list not found at {:?}, using empty set", path);
                return Ok(Self::empty());
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to read word list {:?}: {}", path, e);
                return Err(WordlistError::Read(e));
            }
        };

        let set = Self::from_entries(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!("Word list loaded: {} passwords from {:?}", set.len(), path);

        Ok(set)
    }

    /// Checks whether a password is in the list (case-insensitive exact
    /// match).
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    /// Number of entries in the list.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
