//! Hover report example: a minimal host wiring for the inspection pipeline.
//!
//! Implements `WorldView` and the catalogs over a hand-built five-tile farm,
//! then sweeps the cursor across it and prints each tooltip.
//!
//! Run with: `cargo run -p almanac-core --example hover_report`

use std::collections::HashMap;

use almanac_core::catalog::{
    BuildingCatalog, BuildingType, Catalogs, ItemCatalog, LocaleError, StringCatalog, TooltipSink,
};
use almanac_core::inspect::{WorldView, render_frame};
use almanac_core::snapshot::{
    BuildingSnapshot, CropSnapshot, FruitTreeSnapshot, GridPosition, ItemRef, MachineSnapshot,
    OutputRule, OutputTrigger, TerrainSnapshot, WildTreeSnapshot,
};

// --- Host-side world: one hash map per entity layer ---

#[derive(Default)]
struct Farm {
    crops: HashMap<GridPosition, CropSnapshot>,
    buildings: HashMap<GridPosition, BuildingSnapshot>,
    terrain: HashMap<GridPosition, TerrainSnapshot>,
    objects: HashMap<GridPosition, MachineSnapshot>,
}

impl WorldView for Farm {
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

// --- Host-side catalogs ---

struct Items(HashMap<&'static str, &'static str>);

impl ItemCatalog for Items {
    fn lookup(&self, qualified_id: &str) -> Option<ItemRef> {
        self.0
            .get(qualified_id)
            .map(|name| ItemRef::new(qualified_id, *name))
    }
}

struct Buildings;

impl BuildingCatalog for Buildings {
    fn lookup(&self, type_code: &str) -> Option<BuildingType> {
        (type_code == "Barn").then(|| BuildingType {
            raw_name: "[LocalizedText Strings\\Buildings:Barn_Name]".to_string(),
        })
    }
}

struct Strings;

impl StringCatalog for Strings {
    fn resolve(&self, key: &str) -> Result<String, LocaleError> {
        match key {
            "Strings\\Buildings:Barn_Name" => Ok("Barn".to_string()),
            other => Err(LocaleError::UnknownKey(other.to_string())),
        }
    }
}

// --- Host-side sink: print instead of draw ---

struct Stdout;

impl TooltipSink for Stdout {
    fn draw(&mut self, text: &str) {
        println!("{text}");
        println!("----");
    }
}

fn main() {
    let mut farm = Farm::default();

    // Tile 0: a parsnip one day into its second phase.
    farm.crops.insert(
        GridPosition::new(0, 0),
        CropSnapshot {
            is_dead: false,
            is_forage: false,
            forage_variant: String::new(),
            harvest_item_id: "24".to_string(),
            is_fully_grown: false,
            regrow_days: None,
            current_phase: 1,
            days_in_current_phase: 1,
            phase_durations: vec![1, 2, 1, 0],
        },
    );

    // Tile 1: a barn two days from completion.
    farm.buildings.insert(
        GridPosition::new(1, 0),
        BuildingSnapshot {
            type_code: "Barn".to_string(),
            construction_days_left: 2,
            upgrade_days_left: 0,
        },
    );

    // Tile 2: a half-grown oak.
    farm.terrain.insert(
        GridPosition::new(2, 0),
        TerrainSnapshot::Tree(WildTreeSnapshot {
            is_stump: false,
            health: 100.0,
            growth_stage: 3,
            is_fertilized: false,
            tree_type: "1".to_string(),
            seed_item_id: Some("(O)309".to_string()),
            growth_chance: 0.2,
            fertilized_growth_chance: 0.4,
            is_tapped: false,
        }),
    );

    // Tile 3: a young cherry tree.
    farm.terrain.insert(
        GridPosition::new(3, 0),
        TerrainSnapshot::FruitTree(FruitTreeSnapshot {
            is_stump: false,
            display_name: "Cherry Tree".to_string(),
            days_until_mature: 12,
            fruit_count: 0,
            in_season: true,
        }),
    );

    // Tile 4: a mayonnaise machine three hours from done. The machine kept
    // no input record, so the summary leans on its output-rule triggers.
    farm.objects.insert(
        GridPosition::new(4, 0),
        MachineSnapshot {
            display_name: "Mayonnaise Machine".to_string(),
            minutes_until_ready: 180,
            held_output: Some(ItemRef::new("(O)306", "Mayonnaise")),
            last_input: None,
            preserved_source_id: None,
            output_rules: vec![OutputRule {
                triggers: vec![OutputTrigger {
                    required_item_id: Some("(O)176".to_string()),
                    required_tags: Vec::new(),
                }],
            }],
            is_tapper: false,
        },
    );

    let items = Items(HashMap::from([
        ("(O)24", "Parsnip"),
        ("(O)309", "Acorn"),
        ("(O)176", "Egg"),
    ]));
    let catalogs = Catalogs {
        items: &items,
        buildings: &Buildings,
        strings: &Strings,
    };

    let mut sink = Stdout;
    for x in 0..5 {
        render_frame(&farm, &catalogs, GridPosition::new(x, 0), &mut sink);
    }
}
