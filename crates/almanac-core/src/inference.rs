//! Input inference for machine production summaries.
//!
//! Machines rarely retain a direct record of what they consumed, so the
//! "1 input -> 1 output" line is reconstructed from three tiers of evidence:
//! the output's preserved source id, the machine's retained last input, and
//! the machine's own output-rule triggers. The tiers are plain functions
//! walked in order -- first hit wins, no dynamic dispatch.

use crate::catalog::{ItemCatalog, qualify_object_id};
use crate::duration::format_minutes;
use crate::snapshot::MachineSnapshot;

/// Sentinel preserved-source id meaning "no source retained".
pub const PRESERVED_ID_NONE: &str = "-1";

/// Item tag marking the interchangeable-egg input family.
const EGG_TAG: &str = "egg_item";

// ---------------------------------------------------------------------------
// Resolver tiers
// ---------------------------------------------------------------------------

/// Outcome of a winning resolver tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResolution {
    /// The tier produced a display name for the input.
    Named(String),
    /// The tier applies but the input's name is unrecoverable (its evidence
    /// pointed at an item the catalog does not know).
    Unnamed,
}

type ResolverFn = fn(&MachineSnapshot, &dyn ItemCatalog) -> Option<InputResolution>;

/// Resolver tiers in evidence order.
const RESOLVERS: [ResolverFn; 3] = [from_preserved_source, from_last_input, from_output_rules];

/// Tier 1: the held output remembers which source item it was made from.
///
/// A present, non-sentinel id wins this tier even when the catalog lookup
/// misses -- weaker evidence below must not override a concrete source id.
fn from_preserved_source(
    machine: &MachineSnapshot,
    items: &dyn ItemCatalog,
) -> Option<InputResolution> {
    let id = machine.preserved_source_id.as_deref()?;
    if id == PRESERVED_ID_NONE {
        return None;
    }
    Some(match items.lookup(&qualify_object_id(id)) {
        Some(item) => InputResolution::Named(item.display_name),
        None => InputResolution::Unnamed,
    })
}

/// Tier 2: the machine retained a reference to the item it consumed.
fn from_last_input(machine: &MachineSnapshot, _items: &dyn ItemCatalog) -> Option<InputResolution> {
    machine
        .last_input
        .as_ref()
        .map(|item| InputResolution::Named(item.display_name.clone()))
}

/// Tier 3: scan the machine's output rules for a trigger that names an
/// input.
///
/// Within a rule, the first trigger carrying a required item id ends that
/// rule's scan whether or not the catalog knows the id; a trigger requiring
/// the egg tag yields the literal `"Unknown"` (any egg works). A rule whose
/// item id missed the catalog yields nothing and the next rule is tried.
fn from_output_rules(
    machine: &MachineSnapshot,
    items: &dyn ItemCatalog,
) -> Option<InputResolution> {
    for rule in &machine.output_rules {
        for trigger in &rule.triggers {
            if let Some(id) = &trigger.required_item_id {
                if let Some(item) = items.lookup(id) {
                    return Some(InputResolution::Named(item.display_name));
                }
                break;
            }
            if trigger.required_tags.iter().any(|tag| tag == EGG_TAG) {
                return Some(InputResolution::Named("Unknown".to_string()));
            }
        }
    }
    None
}

/// Run the resolver tiers in order; first hit wins.
pub fn resolve_input(machine: &MachineSnapshot, items: &dyn ItemCatalog) -> Option<InputResolution> {
    RESOLVERS
        .iter()
        .find_map(|resolver| resolver(machine, items))
}

// ---------------------------------------------------------------------------
// Summary text
// ---------------------------------------------------------------------------

/// Assemble the multi-line machine tooltip.
///
/// With a named input the summary reads as a recipe line; otherwise it only
/// names the output. An output-less machine reports `Empty`.
pub fn machine_summary(machine: &MachineSnapshot, items: &dyn ItemCatalog) -> String {
    let Some(output) = &machine.held_output else {
        return format!("{}\nEmpty", machine.display_name);
    };

    let time = format_minutes(machine.minutes_until_ready);
    match resolve_input(machine, items) {
        Some(InputResolution::Named(input)) => format!(
            "{}\n1 {} → 1 {}\nTime left: {}",
            machine.display_name, input, output.display_name, time
        ),
        Some(InputResolution::Unnamed) | None => format!(
            "{}\nProducing: {}\nTime left: {}",
            machine.display_name, output.display_name, time
        ),
    }
}
