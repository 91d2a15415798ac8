//! Detection of a running Vite dev server.

use std::fs;

use crate::config::ResolverConfig;

/// Decide whether assets should come from a dev server and return its base URL.
///
/// Production never consults a dev server. Otherwise an explicit URL wins over the hot
/// file, whose trimmed contents name the server. Trailing slashes are removed.
pub fn resolve_dev_server_url(config: &ResolverConfig) -> Option<String> {
  if config.environment.is_production() {
    return None;
  }

  if let Some(url) = config.dev_server.as_deref().filter(|url| !url.is_empty()) {
    return Some(url.trim_end_matches('/').to_string());
  }

  if !config.hot_file.is_file() {
    return None;
  }

  // A hot file that disappears before it is read counts as empty.
  let content = fs::read_to_string(&config.hot_file).unwrap_or_default();
  let url = content.trim();
  if url.is_empty() {
    return None;
  }

  Some(url.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::Environment;
  use tempfile::tempdir;

  fn dev_config(dir: &std::path::Path) -> ResolverConfig {
    ResolverConfig::default()
      .with_environment(Environment::Dev)
      .with_hot_file(dir.join("hot"))
      .with_manifest_path(dir.join("manifest.json"))
  }

  #[test]
  fn production_ignores_hot_file_and_override() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hot"), "https://vite.local").unwrap();

    let config = dev_config(dir.path())
      .with_environment(Environment::Prod)
      .with_dev_server("http://localhost:5173");
    assert_eq!(resolve_dev_server_url(&config), None);
  }

  #[test]
  fn explicit_override_wins_over_hot_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hot"), "https://vite.local").unwrap();

    let config = dev_config(dir.path()).with_dev_server("http://localhost:5173//");
    assert_eq!(
      resolve_dev_server_url(&config).as_deref(),
      Some("http://localhost:5173")
    );
  }

  #[test]
  fn empty_override_falls_through_to_hot_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hot"), "  https://vite.local/\n").unwrap();

    let config = dev_config(dir.path()).with_dev_server("");
    assert_eq!(
      resolve_dev_server_url(&config).as_deref(),
      Some("https://vite.local")
    );
  }

  #[test]
  fn blank_hot_file_means_no_dev_server() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hot"), " \n\t").unwrap();
    assert_eq!(resolve_dev_server_url(&dev_config(dir.path())), None);
  }

  #[test]
  fn missing_hot_file_means_no_dev_server() {
    let dir = tempdir().unwrap();
    assert_eq!(resolve_dev_server_url(&dev_config(dir.path())), None);
  }
}
