//! Catalog and image set discovery, plus run configuration.
//!
//! A destination root holds `.xcassets` catalogs; each catalog holds
//! `.imageset` and `.appiconset` directories. Anything else is ignored.

mod config;
mod scanner;

pub use config::{Config, ResolvedPaths, CONFIG_FILENAME};
pub use scanner::{
    detect_set_kind, is_catalog, scan_catalogs, scan_image_sets, SetKind, CATALOG_EXTENSION,
};
