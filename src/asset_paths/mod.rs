//! Helpers for normalising entrypoint names and the asset paths they resolve to.
//!
//! Responsibilities are split so that input normalisation, URL rooting and ordered
//! de-duplication can be tested independently of the resolver.

mod entries;
mod set;
mod url;

pub use entries::Entrypoints;
pub use set::{AssetSetBuilder, ResolvedAssets};
pub use url::{join_dev_server, make_asset_url, normalise_build_base, strip_leading_slashes};
