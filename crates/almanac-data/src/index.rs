//! Immutable catalog indices built from loaded documents.
//!
//! Each index freezes one catalog section into a hash map and implements
//! the corresponding `almanac-core` collaborator trait. Duplicates are
//! rejected at build time; after that the indices are read-only and safe to
//! share for the life of the session.

use std::collections::HashMap;

use almanac_core::catalog::{BuildingCatalog, BuildingType, ItemCatalog, LocaleError, StringCatalog};
use almanac_core::snapshot::ItemRef;

use crate::schema::CatalogDocument;

/// A duplicate key found while building an index.
#[derive(Debug, thiserror::Error)]
#[error("duplicate {kind} '{key}'")]
pub struct DuplicateKey {
    pub kind: &'static str,
    pub key: String,
}

fn index_section<V>(
    kind: &'static str,
    entries: impl IntoIterator<Item = (String, V)>,
) -> Result<HashMap<String, V>, DuplicateKey> {
    let mut map = HashMap::new();
    for (key, value) in entries {
        if map.contains_key(&key) {
            return Err(DuplicateKey { kind, key });
        }
        map.insert(key, value);
    }
    Ok(map)
}

// ---------------------------------------------------------------------------
// Item index
// ---------------------------------------------------------------------------

/// Item catalog keyed by qualified id.
#[derive(Debug, Default)]
pub struct ItemIndex {
    names: HashMap<String, String>,
}

impl ItemIndex {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl ItemCatalog for ItemIndex {
    fn lookup(&self, qualified_id: &str) -> Option<ItemRef> {
        self.names
            .get(qualified_id)
            .map(|name| ItemRef::new(qualified_id, name.clone()))
    }
}

// ---------------------------------------------------------------------------
// Building index
// ---------------------------------------------------------------------------

/// Building-type catalog keyed by type code.
#[derive(Debug, Default)]
pub struct BuildingIndex {
    raw_names: HashMap<String, String>,
}

impl BuildingIndex {
    pub fn len(&self) -> usize {
        self.raw_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw_names.is_empty()
    }
}

impl BuildingCatalog for BuildingIndex {
    fn lookup(&self, type_code: &str) -> Option<BuildingType> {
        self.raw_names.get(type_code).map(|raw_name| BuildingType {
            raw_name: raw_name.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// String table
// ---------------------------------------------------------------------------

/// Localized-string table keyed by string key.
#[derive(Debug, Default)]
pub struct StringTable {
    values: HashMap<String, String>,
}

impl StringTable {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl StringCatalog for StringTable {
    fn resolve(&self, key: &str) -> Result<String, LocaleError> {
        self.values
            .get(key)
            .cloned()
            .ok_or_else(|| LocaleError::UnknownKey(key.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Catalog set
// ---------------------------------------------------------------------------

/// All three indices built from one document.
#[derive(Debug, Default)]
pub struct CatalogSet {
    pub items: ItemIndex,
    pub buildings: BuildingIndex,
    pub strings: StringTable,
}

impl CatalogSet {
    /// Index a deserialized document, rejecting duplicate keys per section.
    pub fn from_document(doc: CatalogDocument) -> Result<Self, DuplicateKey> {
        Ok(Self {
            items: ItemIndex {
                names: index_section(
                    "item id",
                    doc.items.into_iter().map(|item| (item.id, item.name)),
                )?,
            },
            buildings: BuildingIndex {
                raw_names: index_section(
                    "building code",
                    doc.buildings.into_iter().map(|b| (b.code, b.name)),
                )?,
            },
            strings: StringTable {
                values: index_section(
                    "string key",
                    doc.strings.into_iter().map(|s| (s.key, s.value)),
                )?,
            },
        })
    }

    /// Borrow the set as the core's catalog bundle.
    pub fn as_catalogs(&self) -> almanac_core::catalog::Catalogs<'_> {
        almanac_core::catalog::Catalogs {
            items: &self.items,
            buildings: &self.buildings,
            strings: &self.strings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{BuildingData, ItemData, StringData};

    fn doc() -> CatalogDocument {
        CatalogDocument {
            items: vec![ItemData {
                id: "(O)24".to_string(),
                name: "Parsnip".to_string(),
            }],
            buildings: vec![BuildingData {
                code: "Coop".to_string(),
                name: "Coop".to_string(),
            }],
            strings: vec![StringData {
                key: "Strings\\Buildings:Coop_Name".to_string(),
                value: "Coop".to_string(),
            }],
        }
    }

    #[test]
    fn indices_serve_the_core_traits() {
        let set = CatalogSet::from_document(doc()).unwrap();

        assert_eq!(set.items.lookup("(O)24").unwrap().display_name, "Parsnip");
        assert!(set.items.lookup("(O)999").is_none());

        assert_eq!(set.buildings.lookup("Coop").unwrap().raw_name, "Coop");
        assert!(set.buildings.lookup("Barn").is_none());

        assert_eq!(
            set.strings.resolve("Strings\\Buildings:Coop_Name").unwrap(),
            "Coop"
        );
        assert!(set.strings.resolve("Strings\\Nope").is_err());
    }

    #[test]
    fn duplicate_item_id_is_rejected() {
        let mut d = doc();
        d.items.push(ItemData {
            id: "(O)24".to_string(),
            name: "Parsnip Again".to_string(),
        });
        let err = CatalogSet::from_document(d).unwrap_err();
        assert_eq!(err.kind, "item id");
        assert_eq!(err.key, "(O)24");
    }

    #[test]
    fn duplicate_building_code_is_rejected() {
        let mut d = doc();
        d.buildings.push(BuildingData {
            code: "Coop".to_string(),
            name: "Second Coop".to_string(),
        });
        assert!(CatalogSet::from_document(d).is_err());
    }

    #[test]
    fn empty_document_indexes_empty() {
        let set = CatalogSet::from_document(CatalogDocument::default()).unwrap();
        assert!(set.items.is_empty());
        assert!(set.buildings.is_empty());
        assert!(set.strings.is_empty());
    }
}
