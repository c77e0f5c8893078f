//! Progress store - the set of topics a learner has completed
//!
//! Progress is kept in a single UTF-8 file with one topic code per line.
//! The file is opened, read or written, and closed on every operation, so
//! separate runs of the program always see each other's changes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::curriculum::Curriculum;

/// File name used under the home directory when nothing else is configured
pub const DEFAULT_FILE_NAME: &str = ".dsa_visualizer_progress";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to read progress file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write progress file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not determine the home directory")]
    NoHomeDirectory,
}

/// Completed topic codes
///
/// Behaves as a set: inserting a code twice keeps one copy, and equality
/// ignores order. Iteration follows insertion (file) order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionSet {
    codes: Vec<String>,
}

impl CompletionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a code; returns false if it was already present
    pub fn insert(&mut self, code: impl Into<String>) -> bool {
        let code = code.into();
        if self.contains(&code) {
            return false;
        }
        self.codes.push(code);
        true
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Counts against the given curriculum
    ///
    /// Codes that no longer exist in the curriculum are not counted but are
    /// reported separately so nothing the learner stored is hidden.
    pub fn summarize(&self, curriculum: &Curriculum) -> ProgressSummary {
        let (completed, stale): (Vec<String>, Vec<String>) = self
            .codes
            .iter()
            .cloned()
            .partition(|code| curriculum.contains_topic(code));
        ProgressSummary {
            completed,
            stale,
            total: curriculum.total_topics(),
        }
    }

    fn parse(contents: &str) -> Self {
        let mut set = Self::new();
        for line in contents.lines() {
            let code = line.trim();
            if !code.is_empty() {
                set.insert(code);
            }
        }
        set
    }

    fn serialize(&self) -> String {
        self.codes.join("\n")
    }
}

impl PartialEq for CompletionSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|c| other.contains(c))
    }
}

impl Eq for CompletionSet {}

impl<S: Into<String>> FromIterator<S> for CompletionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for code in iter {
            set.insert(code);
        }
        set
    }
}

/// Completion counts for one curriculum
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    /// Completed codes present in the curriculum, in stored order
    pub completed: Vec<String>,
    /// Stored codes the curriculum no longer has
    pub stale: Vec<String>,
    pub total: usize,
}

impl ProgressSummary {
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Whole percent, rounded down
    pub fn percent(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        self.completed_count() * 100 / self.total
    }

    /// Filled cells of a bar `width` cells wide, rounded down
    pub fn filled(&self, width: usize) -> usize {
        if self.total == 0 {
            return 0;
        }
        (self.completed_count() * width / self.total).min(width)
    }
}

/// File-backed progress persistence
#[derive(Debug, Clone)]
pub struct ProgressStore {
    /// None when no location could be determined
    path: Option<PathBuf>,
}

impl ProgressStore {
    /// Create a store for an explicit file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: Some(path.into()) }
    }

    /// Create a store at `~/.dsa_visualizer_progress`
    pub fn at_home() -> Result<Self, PersistenceError> {
        Ok(Self::new(default_path()?))
    }

    /// Store with nowhere to write: loads as empty, every save fails
    pub fn unavailable() -> Self {
        Self { path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Read the completion set, reporting any I/O failure
    pub fn try_load(&self) -> Result<CompletionSet, PersistenceError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(CompletionSet::new());
        };
        if !path.exists() {
            debug!("No progress file at {}", path.display());
            return Ok(CompletionSet::new());
        }
        let contents = fs::read_to_string(path).map_err(|source| PersistenceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let set = CompletionSet::parse(&contents);
        debug!("Loaded {} completed topics from {}", set.len(), path.display());
        Ok(set)
    }

    /// Read the completion set, degrading to an empty set on failure
    pub fn load(&self) -> CompletionSet {
        match self.try_load() {
            Ok(set) => set,
            Err(e) => {
                warn!("{}; continuing with no recorded progress", e);
                CompletionSet::new()
            }
        }
    }

    /// Overwrite the file with `set`, one code per line
    pub fn save(&self, set: &CompletionSet) -> Result<(), PersistenceError> {
        let path = self.path.as_deref().ok_or(PersistenceError::NoHomeDirectory)?;
        let write_err = |source: io::Error| PersistenceError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, set.serialize()).map_err(write_err)?;
        debug!("Saved {} completed topics to {}", set.len(), path.display());
        Ok(())
    }

    /// Record `code` as completed
    ///
    /// Returns true if the code was new. A file that exists but can't be read
    /// is left untouched rather than overwritten with a partial set.
    pub fn mark_completed(&self, code: &str) -> Result<bool, PersistenceError> {
        let mut set = self.try_load()?;
        let added = set.insert(code);
        self.save(&set)?;
        if added {
            info!("Marked topic {} completed", code);
        }
        Ok(added)
    }
}

/// `~/.dsa_visualizer_progress`
pub fn default_path() -> Result<PathBuf, PersistenceError> {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_FILE_NAME))
        .ok_or(PersistenceError::NoHomeDirectory)
}
