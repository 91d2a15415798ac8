//! Loading and interpreting the `manifest.json` written by `vite build`.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{ResolverError, Result};

/// Parsed build manifest keyed by source-relative entrypoint path.
///
/// Records are kept as raw JSON so that unknown fields never cause a parse failure; only
/// the pieces needed for resolution are interpreted, on lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
  entries: Map<String, Value>,
}

/// The parts of a manifest record used to build tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestEntry {
  /// Emitted script file, when the record declares a non-empty one.
  pub file: Option<String>,
  /// Emitted stylesheets in declaration order, empty strings removed.
  pub css: Vec<String>,
}

impl Manifest {
  /// Parse manifest JSON text.
  ///
  /// The top level must be an object; arrays and scalars are rejected.
  pub fn from_json(path: &Path, content: &str) -> Result<Self> {
    Self::from_slice(path, content.as_bytes())
  }

  /// Parse raw manifest bytes; invalid UTF-8 is a parse failure like any other.
  pub fn from_slice(path: &Path, content: &[u8]) -> Result<Self> {
    let value: Value =
      serde_json::from_slice(content).map_err(|err| ResolverError::ManifestMalformed {
        path: path.to_path_buf(),
        reason: err.to_string(),
        source: Some(err),
      })?;

    match value {
      Value::Object(entries) => Ok(Self { entries }),
      other => Err(ResolverError::ManifestMalformed {
        path: path.to_path_buf(),
        reason: format!("expected a JSON object at the top level, found {}", kind_of(&other)),
        source: None,
      }),
    }
  }

  /// Look up an entrypoint record.
  ///
  /// Returns `None` when the key is absent or its value is not an object.
  pub fn entry(&self, name: &str) -> Option<ManifestEntry> {
    let record = self.entries.get(name)?.as_object()?;

    let file = record
      .get("file")
      .and_then(Value::as_str)
      .filter(|file| !file.is_empty())
      .map(str::to_string);

    let css = record
      .get("css")
      .and_then(Value::as_array)
      .map(|items| {
        items
          .iter()
          .filter_map(Value::as_str)
          .filter(|path| !path.is_empty())
          .map(str::to_string)
          .collect()
      })
      .unwrap_or_default();

    Some(ManifestEntry { file, css })
  }

  /// Number of top-level records.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns `true` when the manifest has no records.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

/// Read and parse the manifest at `path`.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
  if !path.is_file() {
    return Err(ResolverError::ManifestNotFound {
      path: path.to_path_buf(),
    });
  }

  let content = fs::read(path).map_err(|source| ResolverError::ManifestUnreadable {
    path: path.to_path_buf(),
    source,
  })?;

  Manifest::from_slice(path, &content)
}

fn kind_of(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}
