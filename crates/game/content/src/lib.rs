//! Data-driven arena content.
//!
//! This crate houses the static configuration a session starts from:
//! - Profession loadouts (data-driven via RON)
//! - Opponent roster (data-driven via RON)
//! - Combat tuning (data-driven via TOML)
//!
//! A stock catalog is embedded in the binary, so a session can start without
//! any data files. Content is consumed by the runtime and never mutated.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{
    ActionSpec, Catalog, CatalogSpec, LoadoutSpec, OpponentSpec, OpponentTemplate,
};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, ContentFactory, LoadResult};
