//! Tag templates and the escaping primitives they rely on.

use std::borrow::Cow;

const VITE_CLIENT_PATH: &str = "/@vite/client";
const REACT_REFRESH_PATH: &str = "/@react-refresh";

/// Escape a value for use inside a quoted HTML attribute.
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
  html_escape::encode_quoted_attribute(value)
}

/// Encode a string as a JavaScript string literal safe to place in a `<script>` body.
///
/// Slashes stay unescaped except where they would form `</`.
pub fn encode_script_string(value: &str) -> String {
  serde_json::Value::from(value)
    .to_string()
    .replace("</", "<\\/")
}

/// Module script tag for `src`.
pub fn script_tag(src: &str) -> String {
  format!(
    "<script type=\"module\" src=\"{}\"></script>",
    escape_attribute(src)
  )
}

/// Stylesheet link tag for `href`.
pub fn style_tag(href: &str) -> String {
  format!("<link rel=\"stylesheet\" href=\"{}\">", escape_attribute(href))
}

/// URL of the Vite HMR client on the given dev server.
pub fn vite_client_url(dev_server: &str) -> String {
  format!("{dev_server}{VITE_CLIENT_PATH}")
}

/// Inline module that wires React Fast Refresh into the page before any entry runs.
pub fn react_refresh_preamble(dev_server: &str) -> String {
  let runtime_url = encode_script_string(&format!("{dev_server}{REACT_REFRESH_PATH}"));
  format!(
    "<script type=\"module\">\
import RefreshRuntime from {runtime_url};\
RefreshRuntime.injectIntoGlobalHook(window);\
window.$RefreshReg$ = () => {{}};\
window.$RefreshSig$ = () => (type) => type;\
window.__vite_plugin_react_preamble_installed__ = true;\
</script>"
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn escapes_attribute_values() {
    assert_eq!(
      script_tag("/build/a.js?x=1&y=\"2\""),
      "<script type=\"module\" src=\"/build/a.js?x=1&amp;y=&quot;2&quot;\"></script>"
    );
    assert!(style_tag("/build/<evil>.css").contains("&lt;evil&gt;"));
  }

  #[test]
  fn renders_style_tag() {
    assert_eq!(
      style_tag("/build/assets/app.123.css"),
      "<link rel=\"stylesheet\" href=\"/build/assets/app.123.css\">"
    );
  }

  #[test]
  fn script_strings_keep_slashes() {
    assert_eq!(
      encode_script_string("https://vite.local/@react-refresh"),
      "\"https://vite.local/@react-refresh\""
    );
    assert_eq!(encode_script_string("a\"b"), "\"a\\\"b\"");
    assert_eq!(encode_script_string("</script>"), "\"<\\/script>\"");
  }

  #[test]
  fn preamble_imports_refresh_runtime() {
    let preamble = react_refresh_preamble("https://vite.local");
    assert!(preamble.starts_with("<script type=\"module\">"));
    assert!(preamble.contains("import RefreshRuntime from \"https://vite.local/@react-refresh\";"));
    assert!(preamble.contains("RefreshRuntime.injectIntoGlobalHook(window);"));
    assert!(preamble.contains("window.$RefreshReg$ = () => {};"));
    assert!(preamble.contains("window.$RefreshSig$ = () => (type) => type;"));
    assert!(preamble.contains("window.__vite_plugin_react_preamble_installed__ = true;"));
    assert!(preamble.ends_with("</script>"));
  }
}
