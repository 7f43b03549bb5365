//! Full-combo classification.

use crate::models::FcBasis;

/// Combo shortfall still counted as a full combo. Absorbs slider-end
/// quirks where a technically broken combo plays like a true FC.
pub const FC_COMBO_TOLERANCE: u32 = 7;

/// `true` iff there are no misses and `achieved >= max_combo - 7`.
pub fn is_full_combo(misses: u32, achieved: u32, max_combo: u32) -> bool {
    misses == 0 && achieved >= max_combo.saturating_sub(FC_COMBO_TOLERANCE)
}

/// Classifies a play, falling back to the miss count alone when the max
/// combo is unknown.
pub fn classify(misses: u32, achieved: u32, max_combo: Option<u32>) -> (bool, FcBasis) {
    match max_combo {
        Some(max_combo) => (
            is_full_combo(misses, achieved, max_combo),
            FcBasis::ComboTolerance,
        ),
        None => (misses == 0, FcBasis::MissCountOnly),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_combo_tolerance() {
        assert!(is_full_combo(0, 1000, 1000));
        assert!(is_full_combo(0, 994, 1000));
        assert!(is_full_combo(0, 993, 1000));
        assert!(!is_full_combo(0, 992, 1000));
        assert!(!is_full_combo(1, 1000, 1000));
    }

    #[test]
    fn test_tiny_charts_do_not_underflow() {
        assert!(is_full_combo(0, 0, 5));
        assert!(is_full_combo(0, 3, 3));
    }

    #[test]
    fn test_unknown_max_combo_uses_misses() {
        assert_eq!(classify(0, 12, None), (true, FcBasis::MissCountOnly));
        assert_eq!(classify(2, 12, None), (false, FcBasis::MissCountOnly));
        assert_eq!(classify(0, 12, Some(500)), (false, FcBasis::ComboTolerance));
    }
}
