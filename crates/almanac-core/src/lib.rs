//! Almanac Core -- completion-time estimation for farm-sim hover overlays.
//!
//! This crate answers one question per rendered frame: the cursor is over
//! some tile -- how long until whatever sits there finishes what it is
//! doing? Crops maturing, wild trees growing, buildings under construction,
//! machines mid-production. Everything here is a pure function over
//! read-only snapshots the host builds for one query; the host keeps
//! ownership of the world, the renderer, and the catalogs.
//!
//! # Query Pipeline
//!
//! Each call to [`inspect::render_frame`] runs one synchronous pass:
//!
//! 1. **Select** -- walk the entity classes at the cursor tile in priority
//!    order (crop, building, terrain feature, machine); first applicable
//!    wins.
//! 2. **Estimate** -- compute the remaining duration: exact phase sums for
//!    crops, exact or expected-value day counts for trees, raw minute
//!    counters for machines.
//! 3. **Resolve** -- turn type codes and item ids into display names via
//!    the host catalogs, degrading to fixed fallback tables on misses.
//! 4. **Assemble** -- build the multi-line tooltip and hand it to the
//!    host's sink, at most once per frame.
//!
//! # Key Types
//!
//! - [`inspect::WorldView`] -- host trait exposing what occupies a tile.
//! - [`catalog::Catalogs`] -- bundle of the item / building / string
//!   catalogs the resolvers consult.
//! - [`snapshot`] -- the read-only entity views the host constructs.
//! - [`growth::TreeEstimate`] -- exact vs. expected-value tree outlooks.
//! - [`inference::machine_summary`] -- three-tier input reconstruction for
//!   production machines.

pub mod catalog;
pub mod duration;
pub mod growth;
pub mod inference;
pub mod inspect;
pub mod names;
pub mod snapshot;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
