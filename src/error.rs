//! Errors raised while resolving entrypoints against the build manifest.

use std::path::PathBuf;

/// Result alias used by the resolver operations.
pub type Result<T> = std::result::Result<T, ResolverError>;

/// Failures that abort a single `render_tags` call.
///
/// None of these are retried; the surrounding application decides how to surface them.
#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
  /// The manifest path does not point at a regular file.
  #[error("vite manifest not found: {}", path.display())]
  ManifestNotFound {
    /// Configured manifest location.
    path: PathBuf,
  },

  /// The manifest exists but could not be read.
  #[error("failed to read vite manifest {}: {source}", path.display())]
  ManifestUnreadable {
    /// Configured manifest location.
    path: PathBuf,
    /// Underlying I/O failure.
    source: std::io::Error,
  },

  /// The manifest is not valid JSON or its top level is not an object.
  #[error("invalid vite manifest {}: {reason}", path.display())]
  ManifestMalformed {
    /// Configured manifest location.
    path: PathBuf,
    /// Description of the structural problem.
    reason: String,
    /// JSON parse failure, absent when the JSON parsed but had the wrong shape.
    source: Option<serde_json::Error>,
  },

  /// A requested entrypoint has no usable record in the manifest.
  #[error("vite entry '{entry}' not found in manifest")]
  EntryNotFound {
    /// Entrypoint name after normalisation.
    entry: String,
  },
}
