//! Resolver facade turning entrypoint names into embeddable markup.

use std::fs;
use std::sync::{Arc, Mutex, PoisonError};

use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::asset_paths::{
  AssetSetBuilder, Entrypoints, ResolvedAssets, join_dev_server, make_asset_url,
  strip_leading_slashes,
};
use crate::config::ResolverConfig;
use crate::dev_server::resolve_dev_server_url;
use crate::error::{ResolverError, Result};
use crate::manifest::{Manifest, load_manifest};
use crate::markup::{react_refresh_preamble, script_tag, style_tag, vite_client_url};

/// Token returned by [`AssetResolver::version`] when no manifest hash applies.
pub const DEV_VERSION: &str = "dev";

/// Where assets are served from for the current call.
#[derive(Debug, Clone)]
pub enum AssetSource {
  /// A running dev server at the given base URL, without trailing slash.
  DevServer(String),
  /// The cached production manifest.
  Manifest(Arc<Manifest>),
}

/// Resolves Vite entrypoints against either a dev server or the build manifest.
///
/// The manifest is parsed at most once per resolver and shared across threads; build a
/// new resolver to pick up a rebuilt manifest.
#[derive(Debug)]
pub struct AssetResolver {
  config: ResolverConfig,
  manifest: Mutex<Option<Arc<Manifest>>>,
}

impl AssetResolver {
  /// Create a resolver for the provided configuration.
  pub fn new(config: ResolverConfig) -> Self {
    Self {
      config,
      manifest: Mutex::new(None),
    }
  }

  /// Configuration this resolver was built with.
  pub fn config(&self) -> &ResolverConfig {
    &self.config
  }

  /// Base URL of the active dev server, if any.
  pub fn dev_server_url(&self) -> Option<String> {
    let url = resolve_dev_server_url(&self.config);
    debug!(
      environment = %self.config.environment,
      dev_server = url.as_deref().unwrap_or("-"),
      "resolved vite mode"
    );
    url
  }

  /// Returns `true` while a dev server is serving assets.
  pub fn is_running_hot(&self) -> bool {
    self.dev_server_url().is_some()
  }

  /// Pick the asset source for a render, loading the manifest when no dev server runs.
  pub fn source(&self) -> Result<AssetSource> {
    match self.dev_server_url() {
      Some(url) => Ok(AssetSource::DevServer(url)),
      None => self.manifest().map(AssetSource::Manifest),
    }
  }

  /// Return the cached manifest, reading it on first use.
  ///
  /// The lock is held across the load so concurrent callers never parse twice. A failed
  /// load leaves the slot empty.
  pub fn manifest(&self) -> Result<Arc<Manifest>> {
    let mut slot = self
      .manifest
      .lock()
      .unwrap_or_else(PoisonError::into_inner);

    if let Some(manifest) = slot.as_ref() {
      debug!("vite manifest cache hit");
      return Ok(Arc::clone(manifest));
    }

    debug!(path = %self.config.manifest_path.display(), "loading vite manifest");
    let manifest = Arc::new(load_manifest(&self.config.manifest_path)?);
    *slot = Some(Arc::clone(&manifest));
    Ok(manifest)
  }

  /// Root a build-relative asset path under the configured build base.
  pub fn asset_url(&self, file: &str) -> String {
    make_asset_url(&self.config.build_base, file)
  }

  /// Render script and stylesheet tags for the requested entrypoints, joined by newlines.
  ///
  /// Blank names are ignored; when none remain the result is empty and neither the dev
  /// server nor the manifest is consulted.
  pub fn render_tags(&self, entrypoints: impl Into<Entrypoints>) -> Result<String> {
    let entrypoints = entrypoints.into();
    if entrypoints.is_empty() {
      return Ok(String::new());
    }

    let tags = match self.source()? {
      AssetSource::DevServer(url) => render_dev_tags(&url, &entrypoints),
      AssetSource::Manifest(manifest) => {
        let assets = collect_assets(&manifest, &entrypoints)?;
        self.render_manifest_tags(&assets)
      }
    };

    Ok(tags.join("\n"))
  }

  /// Resolve entrypoints to their built stylesheets and scripts using the manifest.
  ///
  /// This always reads the manifest, even while a dev server is running.
  pub fn resolve_assets(&self, entrypoints: impl Into<Entrypoints>) -> Result<ResolvedAssets> {
    let entrypoints = entrypoints.into();
    if entrypoints.is_empty() {
      return Ok(ResolvedAssets::default());
    }
    let manifest = self.manifest()?;
    collect_assets(&manifest, &entrypoints)
  }

  /// Cache-busting version string: a manifest content hash, or `"dev"`.
  ///
  /// Never fails; a missing or unreadable manifest in production also yields `"dev"`.
  pub fn version(&self) -> String {
    if self.is_running_hot() {
      return DEV_VERSION.to_string();
    }

    let path = &self.config.manifest_path;
    if !path.is_file() {
      warn!(path = %path.display(), "vite manifest missing, using dev version");
      return DEV_VERSION.to_string();
    }

    match fs::read(path) {
      Ok(bytes) => {
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        format!("{:x}", hasher.finalize())
      }
      Err(err) => {
        warn!(path = %path.display(), error = %err, "failed to hash vite manifest, using dev version");
        DEV_VERSION.to_string()
      }
    }
  }

  /// React Fast Refresh preamble for dev mode, or an empty string.
  pub fn dev_mode_preamble(&self) -> String {
    match self.dev_server_url() {
      Some(url) => react_refresh_preamble(&url),
      None => String::new(),
    }
  }

  fn render_manifest_tags(&self, assets: &ResolvedAssets) -> Vec<String> {
    let styles = assets
      .styles
      .iter()
      .map(|file| style_tag(&self.asset_url(file)));
    let scripts = assets
      .scripts
      .iter()
      .map(|file| script_tag(&self.asset_url(file)));
    styles.chain(scripts).collect()
  }
}

fn render_dev_tags(dev_server: &str, entrypoints: &Entrypoints) -> Vec<String> {
  let mut tags = Vec::with_capacity(entrypoints.len() + 1);
  tags.push(script_tag(&vite_client_url(dev_server)));
  for entry in entrypoints.iter() {
    tags.push(script_tag(&join_dev_server(dev_server, entry)));
  }
  tags
}

fn collect_assets(manifest: &Manifest, entrypoints: &Entrypoints) -> Result<ResolvedAssets> {
  let mut builder = AssetSetBuilder::new();

  for entry in entrypoints.iter() {
    let name = strip_leading_slashes(entry);
    let record = manifest
      .entry(name)
      .ok_or_else(|| ResolverError::EntryNotFound {
        entry: name.to_string(),
      })?;

    for css in &record.css {
      builder.push_style(css);
    }
    if let Some(file) = record.file.as_deref() {
      builder.push_script(file);
    }
  }

  Ok(builder.finish())
}
