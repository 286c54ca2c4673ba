//! Acceptance predicates for the "equal and opposite" pairing test.
//!
//! Each predicate is symmetric in its two states, so the overall acceptance
//! decision agrees between (F, O) and (O, F).

/// Sign opposition on balance deltas: nonzero deltas must point at
/// different parties. A zero-delta state is a sign-agnostic wildcard.
#[inline]
pub fn signs_oppose(delta_a: i32, delta_b: i32) -> bool {
    if delta_a == 0 || delta_b == 0 {
        return true;
    }
    (delta_a > 0) != (delta_b > 0)
}

/// Partisan restriction: two clearly partisan states must lean to opposite
/// parties. States within `exemption` points of neutral are exempt from the
/// check entirely.
#[inline]
pub fn leans_compatible(lean_a: f64, lean_b: f64, exemption: f64) -> bool {
    if lean_a.abs() <= exemption || lean_b.abs() <= exemption {
        return true;
    }
    (lean_a > 0.0) != (lean_b > 0.0)
}

/// Size compatibility: the larger delegation may exceed the smaller by at
/// most `max_ratio`. Single-district states are handled upstream.
#[inline]
pub fn sizes_compatible(districts_a: u16, districts_b: u16, max_ratio: f64) -> bool {
    if districts_a == 0 || districts_b == 0 {
        return false;
    }
    let big = districts_a.max(districts_b) as f64;
    let small = districts_a.min(districts_b) as f64;
    big / small <= max_ratio
}

/// The core cancellation test: pairing the two states must leave the
/// national partisan seat balance within `bound` seats of unchanged.
#[inline]
pub fn deltas_cancel(delta_a: i32, delta_b: i32, bound: i32) -> bool {
    (delta_a + delta_b).abs() <= bound
}
