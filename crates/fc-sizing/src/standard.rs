//! Standard manufactured culvert diameters and rounding policy.

use crate::common::check_input_finite;
use crate::error::{EngineResult, ValidationError};
use serde::{Deserialize, Serialize};

/// Allowed culvert diameters in millimetres, ascending.
pub const STANDARD_SIZES_MM: [u32; 15] = [
    300, 400, 500, 600, 700, 800, 900, 1000, 1200, 1400, 1500, 1600, 1800, 1900, 2000,
];

/// Sizes at or above this need engineering sign-off.
pub const PROFESSIONAL_DESIGN_THRESHOLD_MM: u32 = 2000;

/// Largest entry of the standard table.
pub const fn max_standard_size_mm() -> u32 {
    STANDARD_SIZES_MM[STANDARD_SIZES_MM.len() - 1]
}

pub fn is_standard_size(size_mm: u32) -> bool {
    STANDARD_SIZES_MM.binary_search(&size_mm).is_ok()
}

/// A diameter snapped to the standard table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardSize {
    pub size_mm: u32,
    pub requires_professional_design: bool,
}

/// Round up to the smallest standard size that covers `diameter_mm`.
///
/// Diameters beyond the table return the largest entry flagged for
/// professional design. Sizes at the ceiling are flagged as well.
pub fn round_to_standard_size(diameter_mm: f64) -> EngineResult<StandardSize> {
    round_with_threshold(diameter_mm, PROFESSIONAL_DESIGN_THRESHOLD_MM)
}

pub(crate) fn round_with_threshold(
    diameter_mm: f64,
    threshold_mm: u32,
) -> EngineResult<StandardSize> {
    let d = check_input_finite(diameter_mm, "diameter_mm")?;
    if d <= 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "diameter_mm",
            value: d,
            reason: "must be greater than zero",
        }
        .into());
    }

    let size = match STANDARD_SIZES_MM.iter().find(|&&s| f64::from(s) >= d) {
        Some(&s) => StandardSize {
            size_mm: s,
            requires_professional_design: s >= threshold_mm,
        },
        None => StandardSize {
            size_mm: max_standard_size_mm(),
            requires_professional_design: true,
        },
    };
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_ascending() {
        assert!(STANDARD_SIZES_MM.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(max_standard_size_mm(), 2000);
    }

    #[test]
    fn rounds_up_to_next_entry() {
        let s = round_to_standard_size(326.0).unwrap();
        assert_eq!(s.size_mm, 400);
        assert!(!s.requires_professional_design);

        assert_eq!(round_to_standard_size(1.0).unwrap().size_mm, 300);
        assert_eq!(round_to_standard_size(1000.0).unwrap().size_mm, 1000);
        assert_eq!(round_to_standard_size(1000.5).unwrap().size_mm, 1200);
        assert_eq!(round_to_standard_size(1850.0).unwrap().size_mm, 1900);
    }

    #[test]
    fn ceiling_requires_professional_design() {
        let exact = round_to_standard_size(1950.0).unwrap();
        assert_eq!(exact.size_mm, 2000);
        assert!(exact.requires_professional_design);

        let beyond = round_to_standard_size(2548.0).unwrap();
        assert_eq!(beyond.size_mm, 2000);
        assert!(beyond.requires_professional_design);
    }

    #[test]
    fn rejects_non_positive_and_non_finite() {
        assert!(round_to_standard_size(0.0).is_err());
        assert!(round_to_standard_size(-10.0).is_err());
        assert!(round_to_standard_size(f64::NAN).is_err());
        assert!(round_to_standard_size(f64::INFINITY).is_err());
    }

    #[test]
    fn membership() {
        assert!(is_standard_size(1900));
        assert!(!is_standard_size(1100));
    }
}
