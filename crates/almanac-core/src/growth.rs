//! Days-remaining estimates for crops and wild trees.
//!
//! Crops advance through fixed-duration phases, so their estimate is exact.
//! Wild trees advance one stage per day with a per-day success chance, so
//! their estimate is exact only at 100% chance and an expectation otherwise.

use crate::snapshot::{CropSnapshot, WildTreeSnapshot};

/// Floor applied to per-day growth chances before dividing. Compatibility
/// clamp, not a documented game rule.
pub const GROWTH_CHANCE_FLOOR: f32 = 0.01;

// ---------------------------------------------------------------------------
// Crops
// ---------------------------------------------------------------------------

/// Exact days until this crop's next harvest.
///
/// Dead crops report zero. Fully grown regrowable crops report the regrow
/// countdown, which the host tracks in `days_in_current_phase` (the field
/// does double duty; the overlay mirrors the game rather than remodel it).
/// Growing crops report the remainder of the current phase plus every later
/// phase, excluding the final sentinel entry.
pub fn crop_days_remaining(crop: &CropSnapshot) -> i32 {
    if crop.is_dead {
        return 0;
    }

    if crop.is_fully_grown {
        if crop.regrow_days.is_some_and(|d| d > 0) {
            return crop.days_in_current_phase.max(0);
        }
        return 0;
    }

    let last = crop.phase_durations.len().saturating_sub(1);
    let mut days = 0;

    if crop.current_phase < last {
        days += (crop.phase_durations[crop.current_phase] - crop.days_in_current_phase).max(0);
    }
    for i in (crop.current_phase + 1)..last {
        days += crop.phase_durations[i].max(0);
    }

    days
}

// ---------------------------------------------------------------------------
// Wild trees
// ---------------------------------------------------------------------------

/// A wild tree's growth outlook.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TreeEstimate {
    /// Fully grown; nothing left to count down.
    Mature,
    /// Deterministic days remaining (per-day chance is 100%).
    Exact(i32),
    /// Expected days remaining under per-day Bernoulli stage advances.
    Expected(f32),
}

/// Estimate a wild tree's remaining growth time.
///
/// Stumps and dead trees return `None`; the caller skips the overlay for
/// them entirely. Each remaining stage needs one successful per-day roll,
/// so at chance `p < 1` the expectation is `remaining / p`, treating the
/// per-stage waits as i.i.d. geometric variables.
pub fn tree_estimate(tree: &WildTreeSnapshot) -> Option<TreeEstimate> {
    if tree.is_stump || tree.health <= 0.0 {
        return None;
    }
    if tree.is_mature() {
        return Some(TreeEstimate::Mature);
    }

    let remaining = crate::snapshot::TREE_STAGE_MATURE - tree.growth_stage;
    let chance = if tree.is_fertilized {
        tree.fertilized_growth_chance
    } else {
        tree.growth_chance
    };
    let chance = chance.max(GROWTH_CHANCE_FLOOR);

    if chance >= 1.0 {
        Some(TreeEstimate::Exact(remaining))
    } else {
        Some(TreeEstimate::Expected(remaining as f32 / chance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{crop, tree};

    #[test]
    fn growing_crop_sums_remaining_phases() {
        // Phase 0 of [4, 4, 4, 0], one day in: 3 left here, then 4 + 4.
        // The sentinel entry contributes nothing.
        let c = crop(vec![4, 4, 4, 0], 0, 1);
        assert_eq!(crop_days_remaining(&c), 11);

        let c = crop(vec![4, 4, 4, 4, 0], 0, 1);
        assert_eq!(crop_days_remaining(&c), 15);
    }

    #[test]
    fn crop_in_last_real_phase_counts_nothing_ahead() {
        let c = crop(vec![2, 3, 0], 1, 1);
        assert_eq!(crop_days_remaining(&c), 2);
    }

    #[test]
    fn crop_at_sentinel_phase_reports_zero() {
        let c = crop(vec![2, 3, 0], 2, 0);
        assert_eq!(crop_days_remaining(&c), 0);
    }

    #[test]
    fn dead_crop_reports_zero() {
        let mut c = crop(vec![4, 4, 0], 0, 0);
        c.is_dead = true;
        assert_eq!(crop_days_remaining(&c), 0);
    }

    #[test]
    fn fully_grown_regrowable_reads_phase_day_countdown() {
        let mut c = crop(vec![4, 4, 0], 2, 2);
        c.is_fully_grown = true;
        c.regrow_days = Some(3);
        assert_eq!(crop_days_remaining(&c), 2);
    }

    #[test]
    fn fully_grown_regrowable_clamps_negative_countdown() {
        let mut c = crop(vec![4, 4, 0], 2, -1);
        c.is_fully_grown = true;
        c.regrow_days = Some(3);
        assert_eq!(crop_days_remaining(&c), 0);
    }

    #[test]
    fn fully_grown_single_harvest_reports_zero() {
        let mut c = crop(vec![4, 4, 0], 2, 2);
        c.is_fully_grown = true;
        c.regrow_days = None;
        assert_eq!(crop_days_remaining(&c), 0);

        c.regrow_days = Some(0);
        assert_eq!(crop_days_remaining(&c), 0);
    }

    #[test]
    fn overdue_phase_day_does_not_go_negative() {
        let c = crop(vec![2, 3, 0], 0, 5);
        assert_eq!(crop_days_remaining(&c), 3);
    }

    #[test]
    fn stump_has_no_estimate() {
        let mut t = tree(3, 0.2);
        t.is_stump = true;
        assert_eq!(tree_estimate(&t), None);
    }

    #[test]
    fn dead_tree_has_no_estimate() {
        let mut t = tree(3, 0.2);
        t.health = 0.0;
        assert_eq!(tree_estimate(&t), None);
    }

    #[test]
    fn mature_tree_is_label_only() {
        let t = tree(5, 0.2);
        assert_eq!(tree_estimate(&t), Some(TreeEstimate::Mature));
    }

    #[test]
    fn certain_growth_is_exact() {
        let t = tree(4, 1.0);
        assert_eq!(tree_estimate(&t), Some(TreeEstimate::Exact(1)));
    }

    #[test]
    fn uncertain_growth_is_an_expectation() {
        let t = tree(3, 0.2);
        match tree_estimate(&t) {
            Some(TreeEstimate::Expected(days)) => assert!((days - 10.0).abs() < 1e-6),
            other => panic!("expected Expected, got: {other:?}"),
        }
    }

    #[test]
    fn fertilized_tree_uses_fertilized_chance() {
        let mut t = tree(3, 0.2);
        t.is_fertilized = true;
        t.fertilized_growth_chance = 0.5;
        match tree_estimate(&t) {
            Some(TreeEstimate::Expected(days)) => assert!((days - 4.0).abs() < 1e-6),
            other => panic!("expected Expected, got: {other:?}"),
        }
    }

    #[test]
    fn zero_chance_is_clamped_to_floor() {
        let t = tree(4, 0.0);
        match tree_estimate(&t) {
            Some(TreeEstimate::Expected(days)) => {
                assert!((days - 1.0 / GROWTH_CHANCE_FLOOR).abs() < 1e-3)
            }
            other => panic!("expected Expected, got: {other:?}"),
        }
    }
}
