//! Read-only entity snapshots supplied by the host world.
//!
//! The estimation engine never constructs or owns world state; the host
//! builds one of these views per query and discards it after the frame.
//! All types are owned copies -- no references into host storage.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Grid position
// ---------------------------------------------------------------------------

/// A tile position on the host's 2D grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
}

impl GridPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

// ---------------------------------------------------------------------------
// Item reference
// ---------------------------------------------------------------------------

/// A resolved reference to an item: its qualified id plus user-facing name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRef {
    /// Fully qualified item id, e.g. `"(O)388"`.
    pub qualified_id: String,
    /// Localized display name as the host resolved it.
    pub display_name: String,
}

impl ItemRef {
    pub fn new(qualified_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            qualified_id: qualified_id.into(),
            display_name: display_name.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Crop
// ---------------------------------------------------------------------------

/// Snapshot of a planted crop.
///
/// Invariant: `current_phase` is a valid index into `phase_durations`
/// unless the crop is fully grown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropSnapshot {
    pub is_dead: bool,
    /// Forage crops (spring onion, ginger) have no seed-to-harvest cycle.
    pub is_forage: bool,
    /// Which forage variant this is; only meaningful when `is_forage`.
    pub forage_variant: String,
    /// Unqualified id of the item this crop yields on harvest.
    pub harvest_item_id: String,
    pub is_fully_grown: bool,
    /// Days between harvests for regrowable crops; `None` for single-harvest.
    pub regrow_days: Option<i32>,
    /// Index of the growth phase the crop is currently in.
    pub current_phase: usize,
    /// Days already spent in the current phase. For fully grown regrowable
    /// crops the host reuses this field as the regrow countdown.
    pub days_in_current_phase: i32,
    /// Duration of each growth phase in days. The final entry is a sentinel
    /// denoting maturity and carries no fixed duration.
    pub phase_durations: Vec<i32>,
}

// ---------------------------------------------------------------------------
// Wild tree
// ---------------------------------------------------------------------------

/// Growth stage at which a wild tree counts as mature.
pub const TREE_STAGE_MATURE: i32 = 5;

/// Snapshot of a wild (seed-grown) tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WildTreeSnapshot {
    pub is_stump: bool,
    pub health: f32,
    /// Growth stage 0..=5; [`TREE_STAGE_MATURE`] and above means mature.
    pub growth_stage: i32,
    pub is_fertilized: bool,
    /// Internal tree type code, e.g. `"1"` for oak.
    pub tree_type: String,
    /// Qualified id of the seed item that grows this tree, when known.
    pub seed_item_id: Option<String>,
    /// Per-day chance (0..=1) of advancing one growth stage.
    pub growth_chance: f32,
    /// Per-day advance chance when fertilized.
    pub fertilized_growth_chance: f32,
    pub is_tapped: bool,
}

impl WildTreeSnapshot {
    /// Whether the tree has reached its final growth stage.
    pub fn is_mature(&self) -> bool {
        self.growth_stage >= TREE_STAGE_MATURE
    }
}

// ---------------------------------------------------------------------------
// Fruit tree
// ---------------------------------------------------------------------------

/// Snapshot of a fruit tree. Fruit trees mature on a fixed day countdown
/// rather than stochastic stage advances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FruitTreeSnapshot {
    pub is_stump: bool,
    /// The tree's own resolved display name.
    pub display_name: String,
    pub days_until_mature: i32,
    /// Fruit currently hanging on the tree, ready to shake down.
    pub fruit_count: usize,
    /// Whether this tree bears fruit in the current location and season.
    pub in_season: bool,
}

// ---------------------------------------------------------------------------
// Building
// ---------------------------------------------------------------------------

/// Snapshot of a farm building. Only meaningful to the inspector while
/// either day counter is positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingSnapshot {
    /// Internal building type code, e.g. `"Coop"`.
    pub type_code: String,
    pub construction_days_left: i32,
    pub upgrade_days_left: i32,
}

impl BuildingSnapshot {
    /// Whether the building is mid-construction or mid-upgrade.
    pub fn is_in_progress(&self) -> bool {
        self.construction_days_left > 0 || self.upgrade_days_left > 0
    }
}

// ---------------------------------------------------------------------------
// Machine
// ---------------------------------------------------------------------------

/// One trigger condition on a machine output rule: either a concrete
/// required input item, or a set of required item tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputTrigger {
    #[serde(default)]
    pub required_item_id: Option<String>,
    #[serde(default)]
    pub required_tags: Vec<String>,
}

/// An output rule on a machine: an ordered set of triggers that start
/// production of one output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRule {
    pub triggers: Vec<OutputTrigger>,
}

/// Snapshot of a placed production machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSnapshot {
    /// The machine's own resolved display name (the summary header).
    pub display_name: String,
    pub minutes_until_ready: i32,
    /// The output item currently being produced or awaiting collection.
    pub held_output: Option<ItemRef>,
    /// The input item the machine retained a reference to, when it did.
    pub last_input: Option<ItemRef>,
    /// Unqualified id of the consumed source item, carried by the held
    /// output when the recipe preserves that information.
    pub preserved_source_id: Option<String>,
    /// Output rules from the machine's production metadata, in rule order.
    #[serde(default)]
    pub output_rules: Vec<OutputRule>,
    /// Tappers are reported through the tree they are attached to, not
    /// through the machine path.
    pub is_tapper: bool,
}

impl MachineSnapshot {
    /// Whether the machine holds an output and is still counting down.
    pub fn is_processing(&self) -> bool {
        self.minutes_until_ready > 0 && self.held_output.is_some()
    }
}

// ---------------------------------------------------------------------------
// Terrain feature
// ---------------------------------------------------------------------------

/// A terrain feature occupying a tile. One tile holds at most one, but a
/// tile can hold a terrain feature and a placed object (tree + tapper) or
/// sit inside a building footprint at the same time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TerrainSnapshot {
    Tree(WildTreeSnapshot),
    FruitTree(FruitTreeSnapshot),
}
