//! Local stand-in for the remote content store.
//!
//! DESIGN
//! ======
//! The whole fixture document is parsed once at startup into a
//! `serde_json::Value` tree. Reads walk `/`-separated segments the way the
//! hosted store resolves REST paths: object keys by name, array elements by
//! numeric index. Missing paths and explicit `null`s both read as absent.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::path::{Path, PathBuf};

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json { path: PathBuf, source: serde_json::Error },
    #[error("invalid YAML in {}: {source}", .path.display())]
    Yaml { path: PathBuf, source: serde_yaml::Error },
}

/// Fixture document format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentStore {
    root: Value,
}

impl ContentStore {
    #[must_use]
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Load the fixture document at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let text = std::fs::read_to_string(path).map_err(|source| ContentError::Io { path: path.to_owned(), source })?;
        Self::parse(&text, DocumentFormat::for_path(path), path)
    }

    /// Parse document text; `origin` only labels errors.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is not valid in `format`.
    pub fn parse(text: &str, format: DocumentFormat, origin: &Path) -> Result<Self, ContentError> {
        let root = match format {
            DocumentFormat::Json => {
                serde_json::from_str(text).map_err(|source| ContentError::Json { path: origin.to_owned(), source })?
            }
            DocumentFormat::Yaml => {
                serde_yaml::from_str(text).map_err(|source| ContentError::Yaml { path: origin.to_owned(), source })?
            }
        };
        Ok(Self::new(root))
    }

    /// Value at `path`, or `None` if any segment is missing or the value is null.
    #[must_use]
    pub fn subtree(&self, path: &str) -> Option<&Value> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(&self.root, |node, segment| match node {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            })
            .filter(|value| !value.is_null())
    }

    /// Top-level keys present in the document.
    #[must_use]
    pub fn sections(&self) -> Vec<String> {
        match &self.root {
            Value::Object(map) => map.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }
}
