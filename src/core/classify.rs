use crate::models::{Bucket, SeatCounts};

/// Lean magnitude at which a seat stops being competitive.
///
/// The boundary is inclusive: a district at exactly R+8 is safe Republican.
pub const SAFE_SEAT_THRESHOLD: i32 = 8;

/// Parse an upstream lean encoding into a signed value.
///
/// `"R+<n>"` → `+n`, `"D+<n>"` → `-n`, `"EVEN"` → `0`. Returns `None` for
/// anything else; the store defaults those districts to even and records a
/// diagnostic rather than failing the build.
pub fn parse_lean(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if raw == "EVEN" {
        return Some(0);
    }
    let (party, magnitude) = raw.split_once('+')?;
    // Bare digits only: integer parsing would accept "+5" or "-5" here,
    // turning strings like "R+-5" into a sign-flipped seat.
    if magnitude.is_empty() || !magnitude.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let magnitude: i32 = magnitude.parse().ok()?;
    match party {
        "R" => Some(magnitude),
        "D" => Some(-magnitude),
        _ => None,
    }
}

/// Classify a signed district lean into its competitiveness bucket.
#[inline]
pub fn classify(lean: i32, threshold: i32) -> Bucket {
    if lean >= threshold {
        Bucket::SafeR
    } else if lean <= -threshold {
        Bucket::SafeD
    } else if lean > 0 {
        Bucket::LeanR
    } else if lean < 0 {
        Bucket::LeanD
    } else {
        Bucket::Even
    }
}

/// Tally a state's district leans into a bucket summary.
pub fn tally(leans: &[i32], threshold: i32) -> SeatCounts {
    let mut counts = SeatCounts::default();
    for &lean in leans {
        counts.add(classify(lean, threshold));
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_encodings() {
        assert_eq!(parse_lean("R+27"), Some(27));
        assert_eq!(parse_lean("D+3"), Some(-3));
        assert_eq!(parse_lean("EVEN"), Some(0));
        assert_eq!(parse_lean(" R+5 "), Some(5));
    }

    #[test]
    fn rejects_malformed_encodings() {
        assert_eq!(parse_lean(""), None);
        assert_eq!(parse_lean("R-5"), None);
        assert_eq!(parse_lean("X+4"), None);
        assert_eq!(parse_lean("R+"), None);
        assert_eq!(parse_lean("R+abc"), None);
    }

    #[test]
    fn rejects_signed_magnitudes() {
        // A stray sign inside the magnitude must not flip or pass the seat.
        assert_eq!(parse_lean("R+-5"), None);
        assert_eq!(parse_lean("R++5"), None);
        assert_eq!(parse_lean("D+-3"), None);
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        assert_eq!(classify(8, SAFE_SEAT_THRESHOLD), Bucket::SafeR);
        assert_eq!(classify(-8, SAFE_SEAT_THRESHOLD), Bucket::SafeD);
        assert_eq!(classify(7, SAFE_SEAT_THRESHOLD), Bucket::LeanR);
        assert_eq!(classify(-7, SAFE_SEAT_THRESHOLD), Bucket::LeanD);
        assert_eq!(classify(0, SAFE_SEAT_THRESHOLD), Bucket::Even);
    }

    #[test]
    fn tally_sums_buckets() {
        let counts = tally(&[27, 5, 0, -3, -12, -15], SAFE_SEAT_THRESHOLD);
        assert_eq!(counts.safe_r, 1);
        assert_eq!(counts.lean_r, 1);
        assert_eq!(counts.even, 1);
        assert_eq!(counts.lean_d, 1);
        assert_eq!(counts.safe_d, 2);
        assert_eq!(counts.total(), 6);
        assert_eq!(counts.competitive_seats(), 3);
        assert_eq!(counts.safe_seats(), 3);
    }
}
