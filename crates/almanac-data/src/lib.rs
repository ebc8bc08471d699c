//! Almanac Data -- catalog content loading for the Almanac engine.
//!
//! Reads catalog documents (items, building types, localized strings) from
//! RON, JSON, or TOML files and indexes them into immutable catalogs that
//! implement the `almanac-core` collaborator traits.

pub mod index;
pub mod loader;
pub mod schema;

pub use index::{BuildingIndex, CatalogSet, DuplicateKey, ItemIndex, StringTable};
pub use loader::{CatalogLoadError, load_catalogs_dir, load_catalogs_file, load_catalogs_json};
