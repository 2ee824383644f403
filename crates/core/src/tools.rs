//! Training-tool arithmetic: one-rep-max estimation and plate loading.

use serde::Serialize;

/// Standard plate denominations in pounds, heaviest first.
pub const PLATE_DENOMINATIONS: [f64; 6] = [45.0, 35.0, 25.0, 10.0, 5.0, 2.5];

/// Epley one-rep-max estimate: `weight * (1 + reps / 30)`.
///
/// A single rep is already a max attempt, so `reps <= 1` returns the weight
/// unchanged.
pub fn estimate_one_rep_max(weight: f64, reps: u32) -> f64 {
    if reps <= 1 {
        weight
    } else {
        weight * (1.0 + f64::from(reps) / 30.0)
    }
}

/// One plate size and how many of it to load per side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlateCount {
    pub plate: f64,
    pub count: u32,
}

/// Per-side plate loading for a target barbell weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlateBreakdown {
    /// Plates for one side of the bar, heaviest first.
    pub per_side: Vec<PlateCount>,
    /// Weight per side that cannot be made up from standard plates.
    pub remainder: f64,
}

/// Greedy per-side plate breakdown for `target` pounds on a `bar`-pound bar.
///
/// A target at or below the bar weight loads nothing.
pub fn plates_per_side(target: f64, bar: f64) -> PlateBreakdown {
    let mut remaining = ((target - bar) / 2.0).max(0.0);
    let mut per_side = Vec::new();

    for plate in PLATE_DENOMINATIONS {
        // Tolerance absorbs float drift from the 2.5 lb denomination.
        let count = ((remaining + 1e-9) / plate) as u32;
        if count > 0 {
            per_side.push(PlateCount { plate, count });
            remaining -= f64::from(count) * plate;
        }
    }

    PlateBreakdown {
        per_side,
        remainder: if remaining < 1e-9 { 0.0 } else { remaining },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epley_matches_hand_computation() {
        assert_eq!(estimate_one_rep_max(200.0, 5), 200.0 * (1.0 + 5.0 / 30.0));
        assert_eq!(estimate_one_rep_max(315.0, 1), 315.0);
        assert_eq!(estimate_one_rep_max(315.0, 0), 315.0);
    }

    #[test]
    fn plates_for_a_common_load() {
        // (225 - 45) / 2 = 90 per side = two 45s.
        let breakdown = plates_per_side(225.0, 45.0);
        assert_eq!(
            breakdown.per_side,
            vec![PlateCount { plate: 45.0, count: 2 }]
        );
        assert_eq!(breakdown.remainder, 0.0);
    }

    #[test]
    fn plates_use_smaller_denominations() {
        // (185 - 45) / 2 = 70 per side = 45 + 25.
        let breakdown = plates_per_side(185.0, 45.0);
        assert_eq!(
            breakdown.per_side,
            vec![
                PlateCount { plate: 45.0, count: 1 },
                PlateCount { plate: 25.0, count: 1 },
            ]
        );
        assert_eq!(breakdown.remainder, 0.0);
    }

    #[test]
    fn unloadable_fraction_is_reported_as_remainder() {
        // (48 - 45) / 2 = 1.5 per side; nothing fits.
        let breakdown = plates_per_side(48.0, 45.0);
        assert!(breakdown.per_side.is_empty());
        assert!((breakdown.remainder - 1.5).abs() < 1e-9);
    }

    #[test]
    fn target_below_bar_loads_nothing() {
        let breakdown = plates_per_side(30.0, 45.0);
        assert!(breakdown.per_side.is_empty());
        assert_eq!(breakdown.remainder, 0.0);
    }
}
