use std::collections::BTreeSet;

/// Stylesheets and scripts referenced by a set of entrypoints, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedAssets {
  /// Unique stylesheet paths relative to the build directory.
  pub styles: Vec<String>,
  /// Unique script paths relative to the build directory.
  pub scripts: Vec<String>,
}

impl ResolvedAssets {
  /// Returns `true` when nothing was collected.
  pub fn is_empty(&self) -> bool {
    self.styles.is_empty() && self.scripts.is_empty()
  }
}

/// Accumulates asset paths while entrypoints are walked.
///
/// The first occurrence of a path fixes its position; later repeats are ignored. Empty
/// paths are never recorded.
#[derive(Debug, Default)]
pub struct AssetSetBuilder {
  seen_styles: BTreeSet<String>,
  seen_scripts: BTreeSet<String>,
  result: ResolvedAssets,
}

impl AssetSetBuilder {
  /// Start an empty collection.
  pub fn new() -> Self {
    Self::default()
  }

  /// Record a stylesheet path.
  pub fn push_style(&mut self, path: &str) {
    push_unique(&mut self.seen_styles, &mut self.result.styles, path);
  }

  /// Record a script path.
  pub fn push_script(&mut self, path: &str) {
    push_unique(&mut self.seen_scripts, &mut self.result.scripts, path);
  }

  /// Finish collecting and return the ordered sets.
  pub fn finish(self) -> ResolvedAssets {
    self.result
  }
}

fn push_unique(seen: &mut BTreeSet<String>, ordered: &mut Vec<String>, path: &str) {
  if path.is_empty() {
    return;
  }
  if seen.insert(path.to_string()) {
    ordered.push(path.to_string());
  }
}
