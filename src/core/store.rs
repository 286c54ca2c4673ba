use std::collections::{BTreeMap, HashMap};

use thiserror::Error;

use crate::core::classify::{self, SAFE_SEAT_THRESHOLD};
use crate::models::{DistrictLeanRow, MapVariant, SeatCounts, StateProfile};

/// Data-quality finding recorded while building the store.
///
/// None of these abort the build: alternate-map tables are routinely
/// incomplete while upstream data is being assembled, and a single bad row
/// must never disable the whole tool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildDiagnostic {
    #[error("district {district}: unparseable lean {raw:?}, defaulted to EVEN")]
    MalformedLean { district: String, raw: String },
    #[error("{state} {variant:?}: bucket sum {actual} != official district count {expected}")]
    CountMismatch {
        state: String,
        variant: MapVariant,
        actual: u16,
        expected: u16,
    },
    #[error("district rows reference unknown state {state}")]
    UnknownState { state: String },
}

/// Immutable lookup of bucket summaries per (state, map variant).
///
/// Built once from district lean rows; the matching engine and the
/// truce-adjustment aggregator only read it. A missing (state, variant)
/// entry is an explicit `None`, never a zeroed summary.
#[derive(Debug, Clone)]
pub struct SeatCountStore {
    counts: HashMap<String, BTreeMap<MapVariant, SeatCounts>>,
    diagnostics: Vec<BuildDiagnostic>,
}

impl SeatCountStore {
    /// Classify and aggregate district rows against the official per-state
    /// district counts.
    ///
    /// Every (state, variant) bucket sum is checked against the state's
    /// official count for the current era; mismatches become diagnostics.
    pub fn build(rows: &[DistrictLeanRow], states: &[StateProfile]) -> Self {
        let official: HashMap<&str, u16> = states
            .iter()
            .map(|s| (s.id.as_str(), s.districts_2022))
            .collect();

        let mut diagnostics = Vec::new();
        let mut leans: BTreeMap<(String, MapVariant), Vec<i32>> = BTreeMap::new();

        for row in rows {
            let state = row.state_id().to_string();
            let lean = match classify::parse_lean(&row.lean) {
                Some(lean) => lean,
                None => {
                    diagnostics.push(BuildDiagnostic::MalformedLean {
                        district: row.district.clone(),
                        raw: row.lean.clone(),
                    });
                    0
                }
            };
            leans.entry((state, row.variant)).or_default().push(lean);
        }

        let mut counts: HashMap<String, BTreeMap<MapVariant, SeatCounts>> = HashMap::new();
        let mut entries = 0usize;
        for ((state, variant), state_leans) in leans {
            let summary = classify::tally(&state_leans, SAFE_SEAT_THRESHOLD);
            match official.get(state.as_str()) {
                Some(&expected) if summary.total() != expected => {
                    diagnostics.push(BuildDiagnostic::CountMismatch {
                        state: state.clone(),
                        variant,
                        actual: summary.total(),
                        expected,
                    });
                }
                Some(_) => {}
                None => {
                    diagnostics.push(BuildDiagnostic::UnknownState {
                        state: state.clone(),
                    });
                }
            }
            counts.entry(state).or_default().insert(variant, summary);
            entries += 1;
        }

        for diagnostic in &diagnostics {
            tracing::warn!("seat count store: {}", diagnostic);
        }
        tracing::debug!(
            entries,
            diagnostics = diagnostics.len(),
            "built seat count store"
        );

        Self {
            counts,
            diagnostics,
        }
    }

    /// Bucket summary for a state under a variant, if that table was loaded.
    pub fn get(&self, state: &str, variant: MapVariant) -> Option<&SeatCounts> {
        self.counts.get(state)?.get(&variant)
    }

    /// All states carrying data for a variant, in deterministic order.
    pub fn variant_table(&self, variant: MapVariant) -> BTreeMap<String, SeatCounts> {
        self.counts
            .iter()
            .filter_map(|(state, by_variant)| {
                by_variant.get(&variant).map(|c| (state.clone(), *c))
            })
            .collect()
    }

    /// Net partisan seats the enacted map costs a state relative to the
    /// alternate: `balance(enacted) - balance(alternate)`. Positive favors
    /// Republicans. `None` when either table lacks the state.
    pub fn balance_delta(&self, state: &str, alternate: MapVariant) -> Option<i32> {
        let enacted = self.get(state, MapVariant::Enacted)?;
        let counterfactual = self.get(state, alternate)?;
        Some(enacted.balance() - counterfactual.balance())
    }

    /// Findings recorded at construction, for data-quality review.
    pub fn diagnostics(&self) -> &[BuildDiagnostic] {
        &self.diagnostics
    }
}
