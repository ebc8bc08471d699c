//! Serde data file structs for catalog content.
//!
//! These structs define the on-disk format for the item catalog, the
//! building-type catalog, and the localized-string table. They are
//! deserialized from RON, JSON, or TOML data files and then indexed into
//! the engine-facing catalog types by the loader.

use serde::Deserialize;

/// Top-level catalog document. Each section is optional; an absent section
/// indexes as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub items: Vec<ItemData>,
    #[serde(default)]
    pub buildings: Vec<BuildingData>,
    #[serde(default)]
    pub strings: Vec<StringData>,
}

/// An item entry: qualified id plus display name.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemData {
    pub id: String,
    pub name: String,
}

/// A building-type entry. The stored name may be a bracket-delimited
/// localization token the resolver routes through the string table.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildingData {
    pub code: String,
    pub name: String,
}

/// A localized-string entry.
#[derive(Debug, Clone, Deserialize)]
pub struct StringData {
    pub key: String,
    pub value: String,
}
