//! Spectre body list
//!
//! The body list is a user-curated text file of metadata paths. A monster
//! whose metadata contains any listed path (case-insensitively) is a body
//! worth labeling.
//!
//! `WhitelistStore` owns the file location and the currently active list.
//! Loading is all-or-nothing: a failed load keeps the previous list.

mod default_list;
mod error;
mod parser;

pub use default_list::DEFAULT_BODY_LIST;
pub use error::WhitelistError;
pub use parser::{contains_metadata_path, is_comment, parse_body_list};

use std::fs;
use std::path::{Path, PathBuf};

/// Log display hint for successful loads, in seconds
const LOADED_DISPLAY_SECS: f32 = 2.0;
/// Log display hint for load failures, in seconds
const ERROR_DISPLAY_SECS: f32 = 3.0;

/// An immutable, sorted set of body patterns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Whitelist {
    /// Entries exactly as written in the file, sorted
    patterns: Vec<String>,
    /// Lowercased non-blank patterns used for matching
    needles: Vec<String>,
}

impl Whitelist {
    pub fn new(mut patterns: Vec<String>) -> Self {
        patterns.sort();
        let needles = patterns
            .iter()
            .filter(|p| !p.trim().is_empty())
            .map(|p| p.to_lowercase())
            .collect();
        Self { patterns, needles }
    }

    pub fn parse(content: &str) -> Self {
        Self::new(parse_body_list(content))
    }

    /// Whether the metadata path contains any pattern, ignoring case.
    /// A match at the very start of the path counts.
    pub fn matches(&self, metadata: &str) -> bool {
        if metadata.trim().is_empty() || self.needles.is_empty() {
            return false;
        }
        let haystack = metadata.to_lowercase();
        self.needles.iter().any(|needle| haystack.contains(needle.as_str()))
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Body list file plus the list most recently loaded from it
#[derive(Debug)]
pub struct WhitelistStore {
    path: PathBuf,
    current: Whitelist,
    loaded_from: Option<PathBuf>,
}

impl WhitelistStore {
    /// Create a store for the given file. Nothing is read until `load`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            current: Whitelist::default(),
            loaded_from: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn whitelist(&self) -> &Whitelist {
        &self.current
    }

    pub fn patterns(&self) -> &[String] {
        self.current.patterns()
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Path of the file the active list came from, if any load succeeded
    pub fn source(&self) -> Option<&Path> {
        self.loaded_from.as_deref()
    }

    /// Write the built-in default list if the file does not exist yet.
    /// Returns true if the file was created.
    pub fn ensure_default_file(&self) -> Result<bool, WhitelistError> {
        if self.path.exists() {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| WhitelistError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&self.path, DEFAULT_BODY_LIST).map_err(|source| WhitelistError::WriteDefault {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!(path = %self.path.display(), "Created default spectre body list");
        Ok(true)
    }

    /// Read and parse the file, replacing the active list on success.
    /// On failure the previous list stays active. Returns the entry count.
    pub fn load(&mut self) -> Result<usize, WhitelistError> {
        let whitelist = read_whitelist(&self.path)?;
        let count = whitelist.len();
        self.current = whitelist;
        self.loaded_from = Some(self.path.clone());
        Ok(count)
    }

    /// `load`, with the outcome reported as a log event instead of returned.
    pub fn reload_logged(&mut self) -> bool {
        match self.load() {
            Ok(count) => {
                tracing::info!(
                    count,
                    path = %self.path.display(),
                    display_secs = LOADED_DISPLAY_SECS,
                    "Loaded {} spectre bodies",
                    count
                );
                true
            }
            Err(e) => {
                log_load_error(&e);
                false
            }
        }
    }
}

fn read_whitelist(path: &Path) -> Result<Whitelist, WhitelistError> {
    if !path.exists() {
        return Err(WhitelistError::Missing {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| WhitelistError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    // Editors on Windows like to save with a byte-order mark
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
    Ok(Whitelist::parse(content))
}

pub(crate) fn log_load_error(e: &WhitelistError) {
    match e {
        WhitelistError::Missing { path } => {
            tracing::error!(
                path = %path.display(),
                display_secs = ERROR_DISPLAY_SECS,
                "Missing spectre body list file"
            );
        }
        other => {
            let source = std::error::Error::source(other)
                .map(|s| s.to_string())
                .unwrap_or_default();
            tracing::error!(
                path = %other.path().display(),
                error = %source,
                display_secs = ERROR_DISPLAY_SECS,
                "{}",
                other
            );
        }
    }
}
