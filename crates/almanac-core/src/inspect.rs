//! Entity inspection: pick what the cursor is over, assemble its tooltip.
//!
//! The inspector owns no domain logic of its own. It walks the entity
//! classes in a fixed priority order, delegates to the leaf estimators and
//! resolvers, and hands the assembled text to the host's sink -- at most one
//! draw per frame.

use crate::catalog::{Catalogs, ItemCatalog, TooltipSink};
use crate::duration::format_minutes;
use crate::growth::{TreeEstimate, crop_days_remaining, tree_estimate};
use crate::inference::machine_summary;
use crate::names::{building_display_name, crop_display_name, tree_display_name};
use crate::snapshot::{
    BuildingSnapshot, CropSnapshot, FruitTreeSnapshot, GridPosition, MachineSnapshot,
    TerrainSnapshot, WildTreeSnapshot,
};

// ---------------------------------------------------------------------------
// World view
// ---------------------------------------------------------------------------

/// The host's per-frame view of what occupies a tile.
///
/// Layers are independent: one tile can answer several of these at once
/// (soil inside a building footprint, a tapper on a tree). All methods
/// return owned copies valid past the call.
pub trait WorldView {
    /// The crop planted at this tile, including soil inside a container pot.
    fn crop_at(&self, at: GridPosition) -> Option<CropSnapshot>;
    /// The building whose footprint covers this tile.
    fn building_at(&self, at: GridPosition) -> Option<BuildingSnapshot>;
    /// The terrain feature (wild or fruit tree) on this tile.
    fn terrain_at(&self, at: GridPosition) -> Option<TerrainSnapshot>;
    /// The placed object (machine, tapper) on this tile.
    fn object_at(&self, at: GridPosition) -> Option<MachineSnapshot>;
}

// ---------------------------------------------------------------------------
// Tooltip assembly per entity class
// ---------------------------------------------------------------------------

fn plural(n: i32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Crop tooltip: name plus harvest countdown.
pub fn crop_tooltip(crop: &CropSnapshot, items: &dyn ItemCatalog) -> String {
    let name = crop_display_name(crop, items);
    let days = crop_days_remaining(crop);
    if days > 0 {
        format!("{name}\n{days} day{} left", plural(days))
    } else {
        format!("{name}\nReady to harvest!")
    }
}

/// Building tooltip: construction takes precedence over upgrade when both
/// counters are positive.
pub fn building_tooltip(building: &BuildingSnapshot, catalogs: &Catalogs<'_>) -> String {
    let name = building_display_name(building, catalogs.buildings, catalogs.strings);
    let (days, status) = if building.construction_days_left > 0 {
        (building.construction_days_left, "under construction")
    } else {
        (building.upgrade_days_left, "being upgraded")
    };
    format!("{name} is {status}\n{days} day{} left", plural(days))
}

/// Tapper status lines appended under a tapped tree's tooltip.
pub fn tapper_appendix(tapper: &MachineSnapshot) -> Option<String> {
    if tapper.minutes_until_ready > 0 {
        let product = tapper
            .held_output
            .as_ref()
            .map(|output| output.display_name.as_str())
            .unwrap_or("???");
        Some(format!(
            "Tapper:\n- Producing: {product}\n- Ready in: {}",
            format_minutes(tapper.minutes_until_ready)
        ))
    } else {
        let output = tapper.held_output.as_ref()?;
        Some(format!(
            "Tapper:\n- {} is ready to collect!",
            output.display_name
        ))
    }
}

/// Wild-tree tooltip. Stumps and dead trees yield nothing. A tapped tree
/// with a tapper object on the same tile gets the tapper's status appended.
pub fn tree_tooltip(
    tree: &WildTreeSnapshot,
    at: GridPosition,
    world: &dyn WorldView,
    items: &dyn ItemCatalog,
) -> Option<String> {
    let estimate = tree_estimate(tree)?;
    let name = tree_display_name(tree, items);

    let mut text = match estimate {
        TreeEstimate::Mature => name,
        TreeEstimate::Exact(days) => format!("{name}\n{days} day{} left", plural(days)),
        TreeEstimate::Expected(days) => format!("{name}\n~{days:.1} days left (average)"),
    };

    if tree.is_tapped {
        if let Some(object) = world.object_at(at) {
            if object.is_tapper {
                if let Some(info) = tapper_appendix(&object) {
                    text.push('\n');
                    text.push_str(&info);
                }
            }
        }
    }

    Some(text)
}

/// Fruit-tree tooltip. Stumps yield nothing.
pub fn fruit_tree_tooltip(tree: &FruitTreeSnapshot) -> Option<String> {
    if tree.is_stump {
        return None;
    }

    let name = &tree.display_name;
    let text = if tree.days_until_mature > 0 {
        format!(
            "{name}\n{} day{} until mature",
            tree.days_until_mature,
            plural(tree.days_until_mature)
        )
    } else if tree.fruit_count > 0 {
        format!("{name}\nReady to harvest! ({} fruits)", tree.fruit_count)
    } else if tree.in_season {
        format!("{name}\nMature, no fruit today")
    } else {
        format!("{name}\nMature, not in season")
    };

    Some(text)
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Inspect one tile and assemble its tooltip, if any.
///
/// Priority order, first applicable entity wins:
/// 1. live crop, 2. building in progress, 3. terrain feature (wild or fruit
/// tree), 4. processing machine. A terrain feature ends the scan even when
/// its handler yields nothing: a stump must not expose the machine sitting
/// on the same tile.
pub fn tooltip_at(
    world: &dyn WorldView,
    catalogs: &Catalogs<'_>,
    at: GridPosition,
) -> Option<String> {
    if let Some(crop) = world.crop_at(at) {
        if !crop.is_dead {
            return Some(crop_tooltip(&crop, catalogs.items));
        }
    }

    if let Some(building) = world.building_at(at) {
        if building.is_in_progress() {
            return Some(building_tooltip(&building, catalogs));
        }
    }

    if let Some(terrain) = world.terrain_at(at) {
        return match terrain {
            TerrainSnapshot::Tree(tree) => tree_tooltip(&tree, at, world, catalogs.items),
            TerrainSnapshot::FruitTree(tree) => fruit_tree_tooltip(&tree),
        };
    }

    if let Some(object) = world.object_at(at) {
        if object.is_processing() {
            // Tappers attached to a tree are reported through the tree's
            // tooltip; drawing here would double-report them.
            let on_tree = matches!(world.terrain_at(at), Some(TerrainSnapshot::Tree(_)));
            if object.is_tapper && on_tree {
                return None;
            }
            return Some(machine_summary(&object, catalogs.items));
        }
    }

    None
}

/// Per-frame entry point: inspect the cursor tile and draw at most once.
pub fn render_frame(
    world: &dyn WorldView,
    catalogs: &Catalogs<'_>,
    cursor: GridPosition,
    sink: &mut dyn TooltipSink,
) {
    if let Some(text) = tooltip_at(world, catalogs, cursor) {
        sink.draw(&text);
    }
}
