// Core algorithm exports
pub mod adjust;
pub mod classify;
pub mod filters;
pub mod layout;
pub mod matcher;
pub mod selection;
pub mod store;

pub use adjust::{adjust, national_totals, SeatCountTable, TruceAdjustment};
pub use classify::{classify, parse_lean, tally, SAFE_SEAT_THRESHOLD};
pub use filters::{deltas_cancel, leans_compatible, signs_oppose, sizes_compatible};
pub use layout::{layout, Column, Connector, LayoutPlan, LayoutSettings, StatePosition};
pub use matcher::{CancellationPolicy, CandidateContext, MatchPolicy, Matcher};
pub use selection::{PairSelection, SelectionMode};
pub use store::{BuildDiagnostic, SeatCountStore};
