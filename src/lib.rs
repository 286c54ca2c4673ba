//! Ceasefire Core - matching and aggregation engine for the Gerrymandering
//! Ceasefire map.
//!
//! This library identifies pairs of US states whose redistricting outcomes
//! are "equal and opposite," so that reciprocal de-gerrymandering pacts can
//! be proposed. It classifies districts into competitiveness buckets, keeps
//! an immutable per-state seat-count store across map variants, searches
//! for partner states whose balance deltas nearly cancel, and recomputes
//! the 435-seat national aggregate under hypothetical map substitutions.
//!
//! Everything here is synchronous, pure, and in-memory; the rendering layer
//! and raw-data ingestion live elsewhere.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::core::{
    adjust, layout, national_totals, CancellationPolicy, LayoutPlan, LayoutSettings, MatchPolicy,
    Matcher, PairSelection, SeatCountStore, SelectionMode, TruceAdjustment,
};
pub use crate::models::{
    Bucket, DistrictLeanRow, Era, MapVariant, MatchPair, MatchStrength, RankedMatch, SeatCounts,
    StateProfile,
};
