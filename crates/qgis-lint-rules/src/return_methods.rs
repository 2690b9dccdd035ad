//! Lookup table of methods whose return value reports success or failure.
//!
//! The table is built from a JSON artifact of the form
//! `{"methods_to_check": ["QgsProject.addMapLayer", "someMethod", ...]}`.
//! `Class.method` entries register the class as a possible owner of the
//! method, anything else registers the whole entry as an unqualified method.

use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

const BUNDLED: &str = include_str!("../data/qgis_return_methods.json");

/// Errors raised by the strict loaders.
#[derive(Debug, Error)]
pub enum ReturnTableError {
    /// The artifact could not be read.
    #[error("Failed to read return-value table {path}: {source}")]
    Io {
        /// Path of the artifact.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The artifact is not a valid table.
    #[error("Invalid return-value table: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct Artifact {
    #[serde(default)]
    methods_to_check: Vec<String>,
}

/// Method name to the (possibly empty) set of classes that own it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReturnCheckTable {
    methods: HashMap<String, BTreeSet<String>>,
}

impl ReturnCheckTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `Class.method` or bare `method` entries.
    #[must_use]
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut methods: HashMap<String, BTreeSet<String>> = HashMap::new();
        for entry in entries {
            let entry = entry.as_ref();
            let parts: Vec<&str> = entry.split('.').collect();
            if let [class, method] = parts.as_slice() {
                methods
                    .entry((*method).to_string())
                    .or_default()
                    .insert((*class).to_string());
            } else {
                methods.entry(entry.to_string()).or_default();
            }
        }
        Self { methods }
    }

    /// Parses the JSON artifact.
    ///
    /// A missing `methods_to_check` key yields an empty table.
    ///
    /// # Errors
    ///
    /// Returns [`ReturnTableError::Json`] if the text is not a JSON object
    /// with a list of strings under `methods_to_check`.
    pub fn from_json(text: &str) -> Result<Self, ReturnTableError> {
        let artifact: Artifact = serde_json::from_str(text)?;
        Ok(Self::from_entries(artifact.methods_to_check))
    }

    /// Reads and parses the artifact at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ReturnTableError> {
        let text = std::fs::read_to_string(path).map_err(|source| ReturnTableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Loads the artifact at `path`, degrading to an empty table on failure.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(table) => {
                debug!("Loaded {} return-value methods from {}", table.len(), path.display());
                table
            }
            Err(e) => {
                warn!("{e}; return-value checks are disabled");
                Self::new()
            }
        }
    }

    /// The table snapshot shipped with this crate.
    #[must_use]
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED).unwrap_or_else(|e| {
            warn!("Bundled return-value table is invalid: {e}");
            Self::new()
        })
    }

    /// Returns the owning classes of `method`, if the method is registered.
    #[must_use]
    pub fn classes_for(&self, method: &str) -> Option<&BTreeSet<String>> {
        self.methods.get(method)
    }

    /// Returns true if `method` is registered.
    #[must_use]
    pub fn contains(&self, method: &str) -> bool {
        self.methods.contains_key(method)
    }

    /// Number of registered methods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Returns true if no method is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}
