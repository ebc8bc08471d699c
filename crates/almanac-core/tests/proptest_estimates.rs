//! Property-based tests for the Almanac estimation core.
//!
//! Uses proptest to generate random snapshots, then verifies shape and
//! monotonicity invariants of the formatter, the growth estimators, and
//! the assembled tooltips.

use almanac_core::catalog::Catalogs;
use almanac_core::duration::format_minutes;
use almanac_core::growth::{GROWTH_CHANCE_FLOOR, TreeEstimate, crop_days_remaining, tree_estimate};
use almanac_core::inspect::tooltip_at;
use almanac_core::snapshot::{CropSnapshot, GridPosition, TREE_STAGE_MATURE, TerrainSnapshot, WildTreeSnapshot};
use almanac_core::test_utils::*;
use proptest::prelude::*;

// ===========================================================================
// Generators
// ===========================================================================

/// A structurally valid growing crop: phase table with a trailing sentinel,
/// current phase anywhere inside the table.
fn arb_growing_crop() -> impl Strategy<Value = CropSnapshot> {
    proptest::collection::vec(0..10i32, 2..8).prop_flat_map(|mut phases| {
        *phases.last_mut().unwrap() = 0;
        let len = phases.len();
        (Just(phases), 0..len, 0..12i32)
            .prop_map(|(phases, phase, day)| crop(phases, phase, day))
    })
}

/// A healthy tree at any stage with any clamp-range chance, fertilized or
/// not.
fn arb_tree() -> impl Strategy<Value = WildTreeSnapshot> {
    (0..=TREE_STAGE_MATURE, 0.0f32..=1.0, proptest::bool::ANY).prop_map(
        |(stage, chance, fertilized)| {
            let mut t = tree(stage, chance);
            t.is_fertilized = fertilized;
            t
        },
    )
}

/// Parse a formatted duration back into (days, hours, minutes).
fn parse_duration(text: &str) -> (i32, i32, i32) {
    let (mut days, mut hours, mut minutes) = (0, 0, 0);
    for part in text.split(' ') {
        let (value, unit) = part.split_at(part.len() - 1);
        let value: i32 = value.parse().expect("numeric component");
        match unit {
            "d" => days = value,
            "h" => hours = value,
            "m" => minutes = value,
            other => panic!("unexpected unit: {other}"),
        }
    }
    (days, hours, minutes)
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every positive minute count recomposes exactly from its rendered
    /// components.
    #[test]
    fn format_recomposes_to_its_input(total in 1..400_000i32) {
        let text = format_minutes(total);
        let (days, hours, minutes) = parse_duration(&text);
        prop_assert_eq!(days * 1440 + hours * 60 + minutes, total);
        prop_assert!(hours < 24 && minutes < 60);
    }

    /// Non-positive counts always render the ready label.
    #[test]
    fn non_positive_counts_are_ready(total in -100_000..=0i32) {
        prop_assert_eq!(format_minutes(total), "Ready!");
    }

    /// Crop estimates are never negative and never grow as the crop accrues
    /// days in its current phase.
    #[test]
    fn crop_estimate_is_monotone(c in arb_growing_crop()) {
        let today = crop_days_remaining(&c);
        prop_assert!(today >= 0);

        let mut tomorrow = c.clone();
        tomorrow.days_in_current_phase += 1;
        prop_assert!(crop_days_remaining(&tomorrow) <= today);
    }

    /// Tree estimates stay inside the bounds the chance clamp implies:
    /// never below the deterministic stage count, never above the floored
    /// worst case.
    #[test]
    fn tree_estimate_is_bounded(t in arb_tree()) {
        let remaining = (TREE_STAGE_MATURE - t.growth_stage) as f32;
        match tree_estimate(&t) {
            Some(TreeEstimate::Mature) => prop_assert!(t.is_mature()),
            Some(TreeEstimate::Exact(days)) => prop_assert_eq!(days as f32, remaining),
            Some(TreeEstimate::Expected(days)) => {
                prop_assert!(days >= remaining - 1e-3);
                prop_assert!(days <= remaining / GROWTH_CHANCE_FLOOR + 1e-3);
            }
            None => prop_assert!(false, "healthy non-stump tree lost its estimate"),
        }
    }

    /// Inspection is pure: the same snapshot yields the same tooltip.
    #[test]
    fn inspection_is_idempotent(c in arb_growing_crop(), t in arb_tree()) {
        let items = TestCatalog::default();
        let buildings = TestBuildings::default();
        let strings = TestStrings::default();
        let catalogs = Catalogs {
            items: &items,
            buildings: &buildings,
            strings: &strings,
        };

        let mut world = GridWorld::new();
        world.place_crop(GridPosition::new(0, 0), c);
        world.place_terrain(GridPosition::new(1, 0), TerrainSnapshot::Tree(t));

        for x in 0..2 {
            let at = GridPosition::new(x, 0);
            prop_assert_eq!(
                tooltip_at(&world, &catalogs, at),
                tooltip_at(&world, &catalogs, at)
            );
        }
    }
}
