// Model exports
pub mod domain;

pub use domain::{
    Bucket, DistrictLeanRow, Era, MapVariant, MatchPair, MatchStrength, RankedMatch,
    RedistrictingAuthority, SeatCounts, StateProfile,
};
