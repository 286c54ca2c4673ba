use serde::{Deserialize, Serialize};

/// Competitiveness bucket for a single congressional district.
///
/// Sign convention throughout the crate: positive lean = Republican,
/// negative = Democratic, matching the upstream "R+n"/"D+n" encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Bucket {
    SafeD,
    LeanD,
    Even,
    LeanR,
    SafeR,
}

/// Hypothetical map plan for a state, plus the enacted baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapVariant {
    Enacted,
    Proportional,
    Competitive,
    Compact,
}

/// Apportionment era a district count belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Era {
    /// Current maps, drawn after the 2020 census.
    Current2022,
    /// Projected counts for the post-2030 apportionment.
    Projected2032,
}

/// Per-state, per-variant bucket tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatCounts {
    pub safe_d: u16,
    pub lean_d: u16,
    pub even: u16,
    pub lean_r: u16,
    pub safe_r: u16,
}

impl SeatCounts {
    pub fn total(&self) -> u16 {
        self.safe_d + self.lean_d + self.even + self.lean_r + self.safe_r
    }

    /// Seats within the competitive window (lean-D through lean-R).
    pub fn competitive_seats(&self) -> u16 {
        self.lean_d + self.even + self.lean_r
    }

    pub fn safe_seats(&self) -> u16 {
        self.safe_d + self.safe_r
    }

    /// Net partisan seat balance: positive favors Republicans.
    pub fn balance(&self) -> i32 {
        (self.safe_r + self.lean_r) as i32 - (self.safe_d + self.lean_d) as i32
    }

    pub fn add(&mut self, bucket: Bucket) {
        match bucket {
            Bucket::SafeD => self.safe_d += 1,
            Bucket::LeanD => self.lean_d += 1,
            Bucket::Even => self.even += 1,
            Bucket::LeanR => self.lean_r += 1,
            Bucket::SafeR => self.safe_r += 1,
        }
    }
}

/// Who draws the lines in a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedistrictingAuthority {
    Legislature,
    PoliticianCommission,
    AdvisoryCommission,
    IndependentCommission,
    Court,
}

/// Per-state summary row from the frozen upstream table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateProfile {
    pub id: String,
    pub name: String,
    #[serde(rename = "districts2022")]
    pub districts_2022: u16,
    #[serde(rename = "districts2032")]
    pub districts_2032: u16,
    /// Positive = Republican lean, negative = Democratic.
    #[serde(rename = "partisanLean")]
    pub partisan_lean: f64,
    /// Signed fraction; positive = Republican advantage.
    #[serde(rename = "efficiencyGap")]
    pub efficiency_gap: f64,
    #[serde(rename = "redistrictingAuthority")]
    pub authority: RedistrictingAuthority,
    #[serde(rename = "governorCanVeto")]
    pub governor_can_veto: bool,
    #[serde(rename = "hasBallotInitiative")]
    pub has_ballot_initiative: bool,
}

impl StateProfile {
    pub fn districts(&self, era: Era) -> u16 {
        match era {
            Era::Current2022 => self.districts_2022,
            Era::Projected2032 => self.districts_2032,
        }
    }

    /// Single-district states cannot be gerrymandered.
    pub fn multi_district(&self, era: Era) -> bool {
        self.districts(era) > 1
    }
}

/// One district row of an upstream lean table.
///
/// `district` is keyed `"STATE-NN"`; `lean` is `"R+<n>"`, `"D+<n>"` or
/// `"EVEN"`. Parsing failures default to even and are recorded as
/// diagnostics, never propagated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistrictLeanRow {
    pub district: String,
    pub variant: MapVariant,
    pub lean: String,
}

impl DistrictLeanRow {
    /// State prefix of the `"STATE-NN"` key.
    pub fn state_id(&self) -> &str {
        self.district.split('-').next().unwrap_or(&self.district)
    }
}

/// Unordered pair of distinct state ids, normalized so `(a, b)` and
/// `(b, a)` compare and hash identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchPair {
    a: String,
    b: String,
}

impl MatchPair {
    /// Returns `None` when both endpoints are the same state.
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Option<Self> {
        let (x, y) = (x.into(), y.into());
        if x == y {
            return None;
        }
        if x < y {
            Some(Self { a: x, b: y })
        } else {
            Some(Self { a: y, b: x })
        }
    }

    pub fn first(&self) -> &str {
        &self.a
    }

    pub fn second(&self) -> &str {
        &self.b
    }

    pub fn touches(&self, id: &str) -> bool {
        self.a == id || self.b == id
    }

    /// Stable `"AA-BB"` key, endpoints in lexicographic order.
    pub fn key(&self) -> String {
        format!("{}-{}", self.a, self.b)
    }
}

/// Display-only emphasis tag for a ranked partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrength {
    /// Deltas cancel to within one seat.
    Strong,
    Viable,
}

/// One partner candidate returned by the matching engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch {
    #[serde(rename = "stateId")]
    pub state_id: String,
    pub name: String,
    pub districts: u16,
    /// The candidate's own balance delta.
    pub delta: i32,
    /// `|delta(focal) + delta(candidate)|`, the ranking key.
    #[serde(rename = "residualSeats")]
    pub residual: i32,
    pub strength: MatchStrength,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_counts_derived_sums() {
        let counts = SeatCounts {
            safe_d: 3,
            lean_d: 1,
            even: 1,
            lean_r: 2,
            safe_r: 5,
        };
        assert_eq!(counts.total(), 12);
        assert_eq!(counts.competitive_seats(), 4);
        assert_eq!(counts.safe_seats(), 8);
        assert_eq!(counts.balance(), 3);
    }

    #[test]
    fn match_pair_is_unordered() {
        let ab = MatchPair::new("OH", "IL").unwrap();
        let ba = MatchPair::new("IL", "OH").unwrap();
        assert_eq!(ab, ba);
        assert_eq!(ab.key(), "IL-OH");
        assert!(ab.touches("OH"));
        assert!(!ab.touches("WI"));
    }

    #[test]
    fn match_pair_rejects_self() {
        assert!(MatchPair::new("OH", "OH").is_none());
    }

    #[test]
    fn district_row_state_prefix() {
        let row = DistrictLeanRow {
            district: "AL-01".to_string(),
            variant: MapVariant::Enacted,
            lean: "R+27".to_string(),
        };
        assert_eq!(row.state_id(), "AL");
    }

    #[test]
    fn state_profile_era_counts() {
        let state = StateProfile {
            id: "AZ".to_string(),
            name: "Arizona".to_string(),
            districts_2022: 9,
            districts_2032: 10,
            partisan_lean: 2.0,
            efficiency_gap: 0.2134,
            authority: RedistrictingAuthority::IndependentCommission,
            governor_can_veto: false,
            has_ballot_initiative: true,
        };
        assert_eq!(state.districts(Era::Current2022), 9);
        assert_eq!(state.districts(Era::Projected2032), 10);
        assert!(state.multi_district(Era::Current2022));
    }
}
