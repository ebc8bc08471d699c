//! Collaborator traits the host implements for the estimation engine.
//!
//! Every trait here is object-safe and read-only from the engine's side:
//! lookups return owned values, misses are `None` (never errors), and only
//! the localized-string service has a recoverable failure mode. The engine
//! calls each collaborator at most a few times per query.

use crate::snapshot::ItemRef;

// ---------------------------------------------------------------------------
// Item id qualification
// ---------------------------------------------------------------------------

/// Qualifier prefix for ids in the object item category.
pub const OBJECT_ID_PREFIX: &str = "(O)";

/// Qualify an unqualified object id for catalog lookup, e.g. `"388"` ->
/// `"(O)388"`.
pub fn qualify_object_id(raw_id: &str) -> String {
    format!("{OBJECT_ID_PREFIX}{raw_id}")
}

// ---------------------------------------------------------------------------
// Catalogs
// ---------------------------------------------------------------------------

/// The host's item catalog, keyed by qualified item id.
pub trait ItemCatalog {
    /// Look up an item by qualified id. `None` when the id is unknown.
    fn lookup(&self, qualified_id: &str) -> Option<ItemRef>;
}

/// A building type entry as stored in the host's building catalog.
///
/// The raw name may be a bracket-delimited localization token rather than
/// display-ready text; see `building_display_name` for the resolution chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildingType {
    pub raw_name: String,
}

/// The host's building-type catalog, keyed by type code.
pub trait BuildingCatalog {
    fn lookup(&self, type_code: &str) -> Option<BuildingType>;
}

/// Failure to resolve a localized-string key.
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("unknown string key: {0}")]
    UnknownKey(String),
}

/// The host's localized-string service.
pub trait StringCatalog {
    /// Resolve a string key to localized text.
    fn resolve(&self, key: &str) -> Result<String, LocaleError>;
}

// ---------------------------------------------------------------------------
// Tooltip sink
// ---------------------------------------------------------------------------

/// Host-owned tooltip renderer. Side-effecting; the inspector invokes it at
/// most once per frame.
pub trait TooltipSink {
    fn draw(&mut self, text: &str);
}

/// Borrowed bundle of the three catalogs, passed through the inspection
/// pipeline as one argument.
#[derive(Clone, Copy)]
pub struct Catalogs<'a> {
    pub items: &'a dyn ItemCatalog,
    pub buildings: &'a dyn BuildingCatalog,
    pub strings: &'a dyn StringCatalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualify_prepends_object_prefix() {
        assert_eq!(qualify_object_id("388"), "(O)388");
        assert_eq!(qualify_object_id(""), "(O)");
    }

    #[test]
    fn locale_error_message_names_the_key() {
        let err = LocaleError::UnknownKey("Strings\\Buildings:Coop_Name".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("Coop_Name"), "got: {msg}");
    }
}
