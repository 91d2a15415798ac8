//! Resolver configuration and its optional JSON file representation.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "vite_assets.config.json";

/// Deployment environment the resolver runs in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Environment {
  /// Local development; a running dev server may be consulted.
  Dev,
  /// Production; only the build manifest is used.
  #[default]
  Prod,
}

impl Environment {
  /// Returns `true` for [`Environment::Prod`].
  pub fn is_production(self) -> bool {
    matches!(self, Self::Prod)
  }
}

impl FromStr for Environment {
  type Err = String;

  fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
    match value.trim().to_ascii_lowercase().as_str() {
      "dev" | "development" | "local" => Ok(Self::Dev),
      "prod" | "production" => Ok(Self::Prod),
      other => Err(format!("unknown environment '{other}'")),
    }
  }
}

impl TryFrom<String> for Environment {
  type Error = String;

  fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
    value.parse()
  }
}

impl fmt::Display for Environment {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Dev => "dev",
      Self::Prod => "prod",
    })
  }
}

/// Immutable settings handed to [`crate::AssetResolver`] at construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
  /// Location of the `manifest.json` written by `vite build`.
  pub manifest_path: PathBuf,
  /// Marker file whose contents are the dev server URL while it runs.
  pub hot_file: PathBuf,
  /// Explicit dev server URL taking precedence over the hot file.
  pub dev_server: Option<String>,
  /// Active environment; production never consults a dev server.
  pub environment: Environment,
  /// Public URL prefix under which built assets are served.
  pub build_base: String,
}

impl Default for ResolverConfig {
  fn default() -> Self {
    Self {
      manifest_path: PathBuf::from("public/build/manifest.json"),
      hot_file: PathBuf::from("public/hot"),
      dev_server: None,
      environment: Environment::Prod,
      build_base: "/build".into(),
    }
  }
}

impl ResolverConfig {
  /// Attempt to load configuration from the provided directory.
  ///
  /// A missing or unparsable file yields the defaults so page rendering can still proceed.
  pub fn discover(dir: &Path) -> Self {
    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    if !candidate.is_file() {
      return Self::default();
    }
    match Self::from_path(&candidate) {
      Ok(config) => config,
      Err(err) => {
        tracing::warn!(path = %candidate.display(), error = %err, "ignoring invalid resolver config");
        Self::default()
      }
    }
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Result<Self> {
    let content = fs::read_to_string(path)
      .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content)
      .with_context(|| format!("failed to parse {}", path.display()))
  }

  /// Override the manifest location.
  pub fn with_manifest_path(mut self, path: impl Into<PathBuf>) -> Self {
    self.manifest_path = path.into();
    self
  }

  /// Override the hot marker location.
  pub fn with_hot_file(mut self, path: impl Into<PathBuf>) -> Self {
    self.hot_file = path.into();
    self
  }

  /// Pin the dev server URL instead of reading the hot file.
  pub fn with_dev_server(mut self, url: impl Into<String>) -> Self {
    self.dev_server = Some(url.into());
    self
  }

  /// Select the environment.
  pub fn with_environment(mut self, environment: Environment) -> Self {
    self.environment = environment;
    self
  }

  /// Override the public build prefix.
  pub fn with_build_base(mut self, base: impl Into<String>) -> Self {
    self.build_base = base.into();
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn defaults_to_production_build() {
    let config = ResolverConfig::default();
    assert_eq!(config.environment, Environment::Prod);
    assert_eq!(config.build_base, "/build");
    assert!(config.dev_server.is_none());
  }

  #[test]
  fn parses_environment_aliases() {
    assert_eq!("DEV".parse::<Environment>().unwrap(), Environment::Dev);
    assert_eq!(" local ".parse::<Environment>().unwrap(), Environment::Dev);
    assert_eq!("production".parse::<Environment>().unwrap(), Environment::Prod);
    assert!("staging".parse::<Environment>().is_err());
  }

  #[test]
  fn from_path_fills_missing_fields_with_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
      &path,
      r#"{"environment": "dev", "dev_server": "http://localhost:5173"}"#,
    )
    .unwrap();

    let config = ResolverConfig::from_path(&path).unwrap();
    assert_eq!(config.environment, Environment::Dev);
    assert_eq!(config.dev_server.as_deref(), Some("http://localhost:5173"));
    assert_eq!(config.hot_file, PathBuf::from("public/hot"));
  }

  #[test]
  fn from_path_rejects_unknown_environment() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"environment": "staging"}"#).unwrap();

    let err = ResolverConfig::from_path(&path).unwrap_err();
    assert!(err.to_string().contains("failed to parse"));
  }

  #[test]
  fn discover_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    assert_eq!(ResolverConfig::discover(dir.path()), ResolverConfig::default());

    fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "not json").unwrap();
    assert_eq!(ResolverConfig::discover(dir.path()), ResolverConfig::default());
  }

  #[test]
  fn discover_reads_config_file() {
    let dir = tempdir().unwrap();
    fs::write(
      dir.path().join(DEFAULT_CONFIG_FILE),
      r#"{"build_base": "static/dist/"}"#,
    )
    .unwrap();

    let config = ResolverConfig::discover(dir.path());
    assert_eq!(config.build_base, "static/dist/");
  }
}
