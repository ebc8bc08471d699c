//! Shared test fixtures for unit tests, integration tests, and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so the same
//! snapshot constructors and in-memory collaborators serve all three (via
//! the `test-utils` feature outside unit tests).

use std::collections::HashMap;

use crate::catalog::{
    BuildingCatalog, BuildingType, ItemCatalog, LocaleError, StringCatalog, TooltipSink,
};
use crate::snapshot::{
    BuildingSnapshot, CropSnapshot, FruitTreeSnapshot, GridPosition, ItemRef, MachineSnapshot,
    TerrainSnapshot, WildTreeSnapshot,
};

// ===========================================================================
// Snapshot constructors
// ===========================================================================

/// A growing, non-forage crop mid-phase.
pub fn crop(phase_durations: Vec<i32>, current_phase: usize, days_in_phase: i32) -> CropSnapshot {
    CropSnapshot {
        is_dead: false,
        is_forage: false,
        forage_variant: String::new(),
        harvest_item_id: "24".to_string(),
        is_fully_grown: false,
        regrow_days: None,
        current_phase,
        days_in_current_phase: days_in_phase,
        phase_durations,
    }
}

/// A healthy unfertilized oak at the given stage.
pub fn tree(growth_stage: i32, growth_chance: f32) -> WildTreeSnapshot {
    WildTreeSnapshot {
        is_stump: false,
        health: 100.0,
        growth_stage,
        is_fertilized: false,
        tree_type: "1".to_string(),
        seed_item_id: None,
        growth_chance,
        fertilized_growth_chance: growth_chance * 2.0,
        is_tapped: false,
    }
}

/// A fruit tree with the given maturity countdown and no fruit.
pub fn fruit_tree(display_name: &str, days_until_mature: i32) -> FruitTreeSnapshot {
    FruitTreeSnapshot {
        is_stump: false,
        display_name: display_name.to_string(),
        days_until_mature,
        fruit_count: 0,
        in_season: true,
    }
}

/// A building mid-construction.
pub fn building(type_code: &str, construction_days_left: i32) -> BuildingSnapshot {
    BuildingSnapshot {
        type_code: type_code.to_string(),
        construction_days_left,
        upgrade_days_left: 0,
    }
}

/// A non-tapper machine with no inference evidence attached.
pub fn machine(display_name: &str, minutes: i32, held_output: Option<ItemRef>) -> MachineSnapshot {
    MachineSnapshot {
        display_name: display_name.to_string(),
        minutes_until_ready: minutes,
        held_output,
        last_input: None,
        preserved_source_id: None,
        output_rules: Vec::new(),
        is_tapper: false,
    }
}

/// A tapper holding the given output.
pub fn tapper(minutes: i32, held_output: Option<ItemRef>) -> MachineSnapshot {
    let mut m = machine("Tapper", minutes, held_output);
    m.is_tapper = true;
    m
}

// ===========================================================================
// In-memory collaborators
// ===========================================================================

/// Hash-backed [`ItemCatalog`] for tests.
#[derive(Debug, Default)]
pub struct TestCatalog {
    items: HashMap<String, ItemRef>,
}

impl TestCatalog {
    pub fn with_items(items: impl IntoIterator<Item = ItemRef>) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|item| (item.qualified_id.clone(), item))
                .collect(),
        }
    }
}

impl ItemCatalog for TestCatalog {
    fn lookup(&self, qualified_id: &str) -> Option<ItemRef> {
        self.items.get(qualified_id).cloned()
    }
}

/// Hash-backed [`BuildingCatalog`] for tests.
#[derive(Debug, Default)]
pub struct TestBuildings {
    entries: HashMap<String, String>,
}

impl TestBuildings {
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(code, raw_name)| (code.to_string(), raw_name.to_string()))
                .collect(),
        }
    }
}

impl BuildingCatalog for TestBuildings {
    fn lookup(&self, type_code: &str) -> Option<BuildingType> {
        self.entries.get(type_code).map(|raw_name| BuildingType {
            raw_name: raw_name.clone(),
        })
    }
}

/// Hash-backed [`StringCatalog`] for tests. Unknown keys error, as the host
/// service does.
#[derive(Debug, Default)]
pub struct TestStrings {
    entries: HashMap<String, String>,
}

impl TestStrings {
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }
}

impl StringCatalog for TestStrings {
    fn resolve(&self, key: &str) -> Result<String, LocaleError> {
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| LocaleError::UnknownKey(key.to_string()))
    }
}

/// Sink that records every draw call for assertion.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub drawn: Vec<String>,
}

impl TooltipSink for RecordingSink {
    fn draw(&mut self, text: &str) {
        self.drawn.push(text.to_string());
    }
}

// ===========================================================================
// Grid world
// ===========================================================================

/// Hash-grid [`WorldView`](crate::inspect::WorldView) implementation:
/// entities are placed per tile, layers independent of each other (a tree
/// and a tapper can share a tile).
#[derive(Debug, Default)]
pub struct GridWorld {
    crops: HashMap<GridPosition, CropSnapshot>,
    buildings: HashMap<GridPosition, BuildingSnapshot>,
    terrain: HashMap<GridPosition, TerrainSnapshot>,
    objects: HashMap<GridPosition, MachineSnapshot>,
}

impl GridWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place_crop(&mut self, at: GridPosition, crop: CropSnapshot) {
        self.crops.insert(at, crop);
    }

    pub fn place_building(&mut self, at: GridPosition, building: BuildingSnapshot) {
        self.buildings.insert(at, building);
    }

    pub fn place_terrain(&mut self, at: GridPosition, terrain: TerrainSnapshot) {
        self.terrain.insert(at, terrain);
    }

    pub fn place_object(&mut self, at: GridPosition, object: MachineSnapshot) {
        self.objects.insert(at, object);
    }
}

impl crate::inspect::WorldView for GridWorld {
    fn crop_at(&self, at: GridPosition) -> Option<CropSnapshot> {
        self.crops.get(&at).cloned()
    }

    fn building_at(&self, at: GridPosition) -> Option<BuildingSnapshot> {
        self.buildings.get(&at).cloned()
    }

    fn terrain_at(&self, at: GridPosition) -> Option<TerrainSnapshot> {
        self.terrain.get(&at).cloned()
    }

    fn object_at(&self, at: GridPosition) -> Option<MachineSnapshot> {
        self.objects.get(&at).cloned()
    }
}
