/// Normalise a build base to exactly one leading slash and no trailing slash.
///
/// An empty or slash-only base collapses to `/`, so assets resolve from the site root.
pub fn normalise_build_base(base: &str) -> String {
  format!("/{}", base.trim_matches('/'))
}

/// Remove every leading `/` from a manifest or entrypoint path.
pub fn strip_leading_slashes(path: &str) -> &str {
  path.trim_start_matches('/')
}

/// Root an asset path under the build base.
pub fn make_asset_url(build_base: &str, file: &str) -> String {
  let base = normalise_build_base(build_base);
  let file = strip_leading_slashes(file);
  if base == "/" {
    format!("/{file}")
  } else {
    format!("{base}/{file}")
  }
}

/// Point an entrypoint at the running dev server.
pub fn join_dev_server(dev_server: &str, entry: &str) -> String {
  format!("{}/{}", dev_server, strip_leading_slashes(entry))
}
