//! Technique and weapon catalogs plus data-file loaders.
//!
//! The compiled-in [`StaticCatalog`] is always available. With the `loaders`
//! feature (on by default) catalogs and calculator configuration can also be
//! read from RON/TOML files in a data directory.
//!
//! Content is read through [`metanin_core::TechniqueOracle`] and never stored
//! in a build.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::StaticCatalog;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogData, CatalogLoader, ConfigLoader, ContentFactory, LoadResult};
