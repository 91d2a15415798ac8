/// Normalised list of entrypoints requested by a page.
///
/// Each name is trimmed and blank names are dropped, preserving caller order. Duplicate
/// names are kept here; de-duplication happens on the resolved asset paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entrypoints {
  names: Vec<String>,
}

impl Entrypoints {
  /// Build from any sequence of string-like names.
  pub fn new<I, S>(names: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    names.into_iter().collect()
  }

  /// Returns `true` when no usable entrypoint remains.
  pub fn is_empty(&self) -> bool {
    self.names.is_empty()
  }

  /// Number of usable entrypoints.
  pub fn len(&self) -> usize {
    self.names.len()
  }

  /// Iterate over the trimmed names in caller order.
  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.names.iter().map(String::as_str)
  }
}

impl<S: AsRef<str>> FromIterator<S> for Entrypoints {
  fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
    let names = iter
      .into_iter()
      .map(|name| name.as_ref().trim().to_string())
      .filter(|name| !name.is_empty())
      .collect();
    Self { names }
  }
}

impl From<&str> for Entrypoints {
  fn from(name: &str) -> Self {
    Self::new([name])
  }
}

impl From<String> for Entrypoints {
  fn from(name: String) -> Self {
    Self::new([name])
  }
}

impl From<&String> for Entrypoints {
  fn from(name: &String) -> Self {
    Self::new([name])
  }
}

impl<S: AsRef<str>> From<&[S]> for Entrypoints {
  fn from(names: &[S]) -> Self {
    Self::new(names)
  }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for Entrypoints {
  fn from(names: [S; N]) -> Self {
    Self::new(names)
  }
}

impl<S: AsRef<str>> From<Vec<S>> for Entrypoints {
  fn from(names: Vec<S>) -> Self {
    Self::new(names)
  }
}
