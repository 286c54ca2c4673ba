use std::collections::BTreeMap;

use crate::core::store::SeatCountStore;
use crate::models::{MapVariant, MatchPair, SeatCounts};

/// Per-state seat summary table keyed by state id.
pub type SeatCountTable = BTreeMap<String, SeatCounts>;

/// Result of substituting alternate maps for matched states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruceAdjustment {
    /// Every state's summary after substitution; unmatched states keep
    /// their enacted counts.
    pub table: SeatCountTable,
    /// Net competitive seats gained nationwide versus the baseline.
    pub competitive_seats_added: i32,
}

/// Recompute the national table with matched states swapped to their
/// alternate-map summaries.
///
/// For every state touched by at least one pair, its counts are replaced by
/// the alternate-variant counts when available and left at baseline
/// otherwise. The baseline is never mutated; calling twice with the same
/// pair set (in any order) yields identical output. Because each
/// substitution swaps a state's own bucket distribution for another over
/// the same district count, the 435-seat national total survives.
pub fn adjust(store: &SeatCountStore, alternate: MapVariant, pairs: &[MatchPair]) -> TruceAdjustment {
    let baseline = store.variant_table(MapVariant::Enacted);
    let mut table = baseline.clone();

    for pair in pairs {
        for state in [pair.first(), pair.second()] {
            // Substitution only: a state with alternate data but no
            // enacted entry must not grow the national table.
            if !table.contains_key(state) {
                continue;
            }
            if let Some(alt) = store.get(state, alternate) {
                table.insert(state.to_string(), *alt);
            }
        }
    }

    let baseline_competitive: i32 = baseline
        .values()
        .map(|c| c.competitive_seats() as i32)
        .sum();
    let adjusted_competitive: i32 = table.values().map(|c| c.competitive_seats() as i32).sum();
    let competitive_seats_added = adjusted_competitive - baseline_competitive;

    tracing::debug!(
        pairs = pairs.len(),
        competitive_seats_added,
        "truce adjustment"
    );

    TruceAdjustment {
        table,
        competitive_seats_added,
    }
}

/// Sum a table's buckets into the national aggregate.
pub fn national_totals(table: &SeatCountTable) -> SeatCounts {
    let mut totals = SeatCounts::default();
    for counts in table.values() {
        totals.safe_d += counts.safe_d;
        totals.lean_d += counts.lean_d;
        totals.even += counts.even;
        totals.lean_r += counts.lean_r;
        totals.safe_r += counts.safe_r;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DistrictLeanRow, RedistrictingAuthority, StateProfile};

    fn profile(id: &str, districts: u16) -> StateProfile {
        StateProfile {
            id: id.to_string(),
            name: format!("State {}", id),
            districts_2022: districts,
            districts_2032: districts,
            partisan_lean: 0.0,
            efficiency_gap: 0.0,
            authority: RedistrictingAuthority::Legislature,
            governor_can_veto: true,
            has_ballot_initiative: false,
        }
    }

    fn row(district: &str, variant: MapVariant, lean: &str) -> DistrictLeanRow {
        DistrictLeanRow {
            district: district.to_string(),
            variant,
            lean: lean.to_string(),
        }
    }

    /// Two states, three districts each. OH's proportional map turns a safe
    /// seat competitive; IL has no proportional data at all.
    fn test_store() -> SeatCountStore {
        let rows = vec![
            row("OH-01", MapVariant::Enacted, "R+12"),
            row("OH-02", MapVariant::Enacted, "R+9"),
            row("OH-03", MapVariant::Enacted, "D+10"),
            row("OH-01", MapVariant::Proportional, "R+12"),
            row("OH-02", MapVariant::Proportional, "R+4"),
            row("OH-03", MapVariant::Proportional, "D+10"),
            row("IL-01", MapVariant::Enacted, "D+14"),
            row("IL-02", MapVariant::Enacted, "D+6"),
            row("IL-03", MapVariant::Enacted, "R+2"),
        ];
        let states = vec![profile("OH", 3), profile("IL", 3)];
        SeatCountStore::build(&rows, &states)
    }

    #[test]
    fn empty_pair_set_returns_baseline() {
        let store = test_store();
        let result = adjust(&store, MapVariant::Proportional, &[]);
        assert_eq!(result.table, store.variant_table(MapVariant::Enacted));
        assert_eq!(result.competitive_seats_added, 0);
    }

    #[test]
    fn matched_state_swaps_to_alternate_counts() {
        let store = test_store();
        let pair = MatchPair::new("OH", "IL").unwrap();
        let result = adjust(&store, MapVariant::Proportional, &[pair]);

        let oh = result.table["OH"];
        assert_eq!(oh.safe_r, 1);
        assert_eq!(oh.lean_r, 1);
        assert_eq!(oh.safe_d, 1);
        assert_eq!(result.competitive_seats_added, 1);
    }

    #[test]
    fn missing_alternate_falls_back_to_baseline() {
        let store = test_store();
        let pair = MatchPair::new("OH", "IL").unwrap();
        let result = adjust(&store, MapVariant::Proportional, &[pair]);

        // IL has no proportional table; its enacted counts survive.
        assert_eq!(
            result.table["IL"],
            *store.get("IL", MapVariant::Enacted).unwrap()
        );
    }

    #[test]
    fn adjustment_is_idempotent_and_order_independent() {
        let store = test_store();
        let ab = MatchPair::new("OH", "IL").unwrap();
        let ba = MatchPair::new("IL", "OH").unwrap();

        let once = adjust(&store, MapVariant::Proportional, &[ab.clone()]);
        let again = adjust(&store, MapVariant::Proportional, &[ab.clone()]);
        let flipped = adjust(&store, MapVariant::Proportional, &[ba]);
        let duplicated = adjust(&store, MapVariant::Proportional, &[ab.clone(), ab]);

        assert_eq!(once, again);
        assert_eq!(once, flipped);
        assert_eq!(once, duplicated);
    }

    #[test]
    fn alternate_only_state_never_joins_the_table() {
        // PR has proportional rows but no enacted map at all.
        let mut rows = vec![
            row("OH-01", MapVariant::Enacted, "R+12"),
            row("OH-01", MapVariant::Proportional, "EVEN"),
        ];
        rows.push(row("PR-01", MapVariant::Proportional, "D+4"));
        let states = vec![profile("OH", 1)];
        let store = SeatCountStore::build(&rows, &states);

        let pair = MatchPair::new("OH", "PR").unwrap();
        let result = adjust(&store, MapVariant::Proportional, &[pair]);

        assert!(!result.table.contains_key("PR"));
        assert_eq!(
            national_totals(&result.table).total(),
            national_totals(&store.variant_table(MapVariant::Enacted)).total()
        );
    }

    #[test]
    fn national_total_is_preserved() {
        let store = test_store();
        let baseline = national_totals(&store.variant_table(MapVariant::Enacted));
        let adjusted = adjust(
            &store,
            MapVariant::Proportional,
            &[MatchPair::new("OH", "IL").unwrap()],
        );
        assert_eq!(national_totals(&adjusted.table).total(), baseline.total());
    }
}
