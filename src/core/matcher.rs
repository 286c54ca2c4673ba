use crate::core::filters::{deltas_cancel, leans_compatible, signs_oppose, sizes_compatible};
use crate::core::store::SeatCountStore;
use crate::models::{Era, MapVariant, MatchStrength, RankedMatch, StateProfile};

/// A state as the matching policy sees it: its summary profile plus its
/// balance delta under the active alternate map, when available.
#[derive(Debug, Clone, Copy)]
pub struct CandidateContext<'a> {
    pub profile: &'a StateProfile,
    pub delta: Option<i32>,
}

impl<'a> CandidateContext<'a> {
    pub fn new(profile: &'a StateProfile, store: &SeatCountStore, alternate: MapVariant) -> Self {
        Self {
            profile,
            delta: store.balance_delta(&profile.id, alternate),
        }
    }
}

/// Swappable acceptance/ranking policy.
///
/// The project went through several mutually inconsistent pairing rules
/// (efficiency-gap tolerances, seats-impact filters, balance-delta
/// filters); threshold tuning happens inside a policy, never at call sites.
pub trait MatchPolicy {
    /// Symmetric acceptance test: must agree between (a, b) and (b, a).
    fn accepts(&self, a: &CandidateContext, b: &CandidateContext) -> bool;

    /// Display emphasis for an accepted pair.
    fn strength(&self, a: &CandidateContext, b: &CandidateContext) -> MatchStrength;
}

/// The canonical policy: partner states whose balance deltas nearly cancel.
///
/// Thresholds here are the crate's one documented tolerance set; earlier
/// revisions of the project carried several conflicting ones.
#[derive(Debug, Clone, Copy)]
pub struct CancellationPolicy {
    /// States within this many lean points of neutral are exempt from the
    /// opposite-party requirement.
    pub lean_exemption: f64,
    /// Largest allowed delegation-size ratio between partners.
    pub max_district_ratio: f64,
    /// Largest allowed `|delta(a) + delta(b)|`.
    pub cancellation_bound: i32,
    /// Pairs cancelling to within this many seats are tagged strong.
    pub strong_bound: i32,
}

impl Default for CancellationPolicy {
    fn default() -> Self {
        Self {
            lean_exemption: 3.0,
            max_district_ratio: 1.3,
            cancellation_bound: 2,
            strong_bound: 1,
        }
    }
}

impl MatchPolicy for CancellationPolicy {
    fn accepts(&self, a: &CandidateContext, b: &CandidateContext) -> bool {
        if a.profile.id == b.profile.id {
            return false;
        }
        // Single-district states are categorically ineligible.
        if !a.profile.multi_district(Era::Current2022)
            || !b.profile.multi_district(Era::Current2022)
        {
            return false;
        }
        let (delta_a, delta_b) = match (a.delta, b.delta) {
            (Some(da), Some(db)) => (da, db),
            _ => return false,
        };
        signs_oppose(delta_a, delta_b)
            && leans_compatible(
                a.profile.partisan_lean,
                b.profile.partisan_lean,
                self.lean_exemption,
            )
            && sizes_compatible(
                a.profile.districts_2022,
                b.profile.districts_2022,
                self.max_district_ratio,
            )
            && deltas_cancel(delta_a, delta_b, self.cancellation_bound)
    }

    fn strength(&self, a: &CandidateContext, b: &CandidateContext) -> MatchStrength {
        let residual = a.delta.unwrap_or(0) + b.delta.unwrap_or(0);
        if residual.abs() <= self.strong_bound {
            MatchStrength::Strong
        } else {
            MatchStrength::Viable
        }
    }
}

/// Matching orchestrator: evaluates the policy over a candidate universe
/// and ranks accepted partners by closeness to perfect cancellation.
pub struct Matcher {
    policy: Box<dyn MatchPolicy + Send + Sync>,
    alternate: MapVariant,
}

impl Matcher {
    pub fn new(policy: Box<dyn MatchPolicy + Send + Sync>, alternate: MapVariant) -> Self {
        Self { policy, alternate }
    }

    pub fn with_default_policy(alternate: MapVariant) -> Self {
        Self::new(Box::new(CancellationPolicy::default()), alternate)
    }

    /// The alternate map variant deltas are computed against.
    pub fn alternate(&self) -> MapVariant {
        self.alternate
    }

    /// Ordered partner candidates for a focal state.
    ///
    /// Returns an empty list (not an error) when the focal state is
    /// unknown, single-district, or has no delta data. Linear scan over the
    /// universe; fifty states need no indexing.
    pub fn find_matches(
        &self,
        focal_id: &str,
        universe: &[StateProfile],
        store: &SeatCountStore,
    ) -> Vec<RankedMatch> {
        let focal_profile = match universe.iter().find(|s| s.id == focal_id) {
            Some(profile) => profile,
            None => {
                tracing::debug!(state = focal_id, "focal state not in universe");
                return Vec::new();
            }
        };
        let focal = CandidateContext::new(focal_profile, store, self.alternate);
        let focal_delta = match focal.delta {
            Some(delta) => delta,
            None => {
                tracing::debug!(state = focal_id, "no delta data for focal state");
                return Vec::new();
            }
        };

        let mut matches: Vec<RankedMatch> = universe
            .iter()
            .filter_map(|other| {
                let candidate = CandidateContext::new(other, store, self.alternate);
                if !self.policy.accepts(&focal, &candidate) {
                    return None;
                }
                let delta = candidate.delta?;
                Some(RankedMatch {
                    state_id: other.id.clone(),
                    name: other.name.clone(),
                    districts: other.districts_2022,
                    delta,
                    residual: (focal_delta + delta).abs(),
                    strength: self.policy.strength(&focal, &candidate),
                })
            })
            .collect();

        // Closest to perfect cancellation first; ties broken by closeness
        // of delegation size, then id for determinism.
        matches.sort_by(|x, y| {
            x.residual
                .cmp(&y.residual)
                .then_with(|| {
                    let dx = x.districts.abs_diff(focal_profile.districts_2022);
                    let dy = y.districts.abs_diff(focal_profile.districts_2022);
                    dx.cmp(&dy)
                })
                .then_with(|| x.state_id.cmp(&y.state_id))
        });

        tracing::debug!(
            state = focal_id,
            candidates = universe.len(),
            matched = matches.len(),
            "match query"
        );
        matches
    }
}
