#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod config;
pub mod dev_server;
pub mod error;
pub mod manifest;
pub mod markup;
pub mod resolver;

pub use asset_paths::{Entrypoints, ResolvedAssets};
pub use config::{Environment, ResolverConfig};
pub use error::{ResolverError, Result};
pub use manifest::{Manifest, ManifestEntry};
pub use resolver::{AssetResolver, AssetSource, DEV_VERSION};
