//! Display-name resolution with fallback chains.
//!
//! Each entity kind resolves through the host catalogs first and falls back
//! to fixed code->name tables, degrading to a generic label rather than
//! failing. The fixed tables are phf maps so the full enumeration is visible
//! in one place.

use tracing::warn;

use crate::catalog::{BuildingCatalog, ItemCatalog, StringCatalog, qualify_object_id};
use crate::snapshot::{BuildingSnapshot, CropSnapshot, WildTreeSnapshot};

// ---------------------------------------------------------------------------
// Fixed tables
// ---------------------------------------------------------------------------

/// Tree type code -> mature tree name.
static TREE_NAMES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "1" => "Oak Tree",
    "2" => "Maple Tree",
    "3" => "Pine Tree",
    "6" => "Palm Tree",
    "7" => "Mushroom Tree",
    "8" => "Mahogany Tree",
    "9" => "Palm Tree",
    "10" => "Green Rain Tree (Oak)",
    "11" => "Green Rain Tree (Maple)",
    "12" => "Green Rain Fern",
    "13" => "Mystic Tree",
};

/// Tree type code -> seed/sapling name, for immature trees whose seed item
/// is not in the catalog.
static SEED_NAMES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "1" => "Oak Seed",
    "2" => "Maple Seed",
    "3" => "Pine Cone",
    "6" => "Palm Seed",
    "7" => "Mushroom Seed",
    "8" => "Mahogany Seed",
    "9" => "Palm Seed",
    "10" => "Green Rain Seed (Oak)",
    "11" => "Green Rain Seed (Maple)",
    "12" => "Green Rain Fern Spore",
    "13" => "Mystic Seed",
};

/// Forage crop variant -> name.
static FORAGE_NAMES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "1" => "Spring Onion",
    "2" => "Ginger",
};

/// Building type code -> name, for codes absent from the building catalog.
static BUILDING_NAMES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "Coop" => "Coop",
    "Barn" => "Barn",
    "Shed" => "Shed",
    "Mill" => "Mill",
    "Slime Hutch" => "Slime Hutch",
    "Stable" => "Stable",
    "Well" => "Well",
    "Fish Pond" => "Fish Pond",
    "Cabin" => "Cabin",
    "Earth Obelisk" => "Earth Obelisk",
    "Water Obelisk" => "Water Obelisk",
    "Desert Obelisk" => "Desert Obelisk",
    "Island Obelisk" => "Island Obelisk",
    "Gold Clock" => "Gold Clock",
};

// ---------------------------------------------------------------------------
// Trees
// ---------------------------------------------------------------------------

/// Resolve a wild tree's display name.
///
/// Mature trees use the fixed species table. Immature trees prefer the seed
/// item's catalog name and fall back to the fixed seed table.
pub fn tree_display_name(tree: &WildTreeSnapshot, items: &dyn ItemCatalog) -> String {
    if tree.is_mature() {
        return TREE_NAMES
            .get(tree.tree_type.as_str())
            .unwrap_or(&"Unknown Tree")
            .to_string();
    }

    if let Some(seed_id) = &tree.seed_item_id {
        if let Some(seed) = items.lookup(seed_id) {
            return seed.display_name;
        }
    }

    SEED_NAMES
        .get(tree.tree_type.as_str())
        .unwrap_or(&"Unknown Seed")
        .to_string()
}

// ---------------------------------------------------------------------------
// Crops
// ---------------------------------------------------------------------------

/// Resolve a crop's display name from its harvest item.
pub fn crop_display_name(crop: &CropSnapshot, items: &dyn ItemCatalog) -> String {
    if crop.is_forage {
        return FORAGE_NAMES
            .get(crop.forage_variant.as_str())
            .unwrap_or(&"Forage")
            .to_string();
    }

    match items.lookup(&qualify_object_id(&crop.harvest_item_id)) {
        Some(item) => item.display_name,
        None => "Unknown Crop".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Buildings
// ---------------------------------------------------------------------------

/// Extract the string key from a bracket-delimited localization token.
///
/// Catalog names like `"[LocalizedText Strings\\Buildings:Coop_Name]"` carry
/// a key instead of display text. Returns `None` when the name is already
/// plain text. The legacy `"Localized Text Strings\\"` content-path spelling
/// is normalized to `"Strings\\"`.
fn localization_key(raw_name: &str) -> Option<String> {
    if !raw_name.starts_with('[') || !raw_name.contains(']') {
        return None;
    }
    let key = raw_name
        .trim_start_matches('[')
        .split(']')
        .next()
        .unwrap_or("")
        .trim();
    let key = key
        .replace("LocalizedText ", "")
        .replace("Localized Text Strings\\", "Strings\\");
    Some(key)
}

/// Resolve a building's display name.
///
/// Catalog hit: plain names are returned as stored; localization tokens are
/// resolved through the string service, falling back to the raw stored name
/// (with a warning) when resolution fails. Catalog miss: fixed table, then
/// the raw type code.
pub fn building_display_name(
    building: &BuildingSnapshot,
    buildings: &dyn BuildingCatalog,
    strings: &dyn StringCatalog,
) -> String {
    if let Some(entry) = buildings.lookup(&building.type_code) {
        if let Some(key) = localization_key(&entry.raw_name) {
            match strings.resolve(&key) {
                Ok(name) => return name,
                Err(err) => {
                    warn!(key = %key, error = %err, "failed loading localized building name");
                }
            }
        }
        return entry.raw_name;
    }

    BUILDING_NAMES
        .get(building.type_code.as_str())
        .map(|name| name.to_string())
        .unwrap_or_else(|| building.type_code.clone())
}
