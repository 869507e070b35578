//! Common utilities for sizing calculations.

use crate::error::{EngineResult, SizingError};
use fc_core::numeric::{ensure_non_negative, ensure_positive};
use fc_core::units::{m, m2, to_mm};

/// Ensure an intermediate value is finite, returning a computation error if not.
pub fn check_finite(value: f64, what: &'static str) -> EngineResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SizingError::Computation { what, value })
    }
}

/// Reject a non-finite input value as a validation failure.
pub fn check_input_finite(value: f64, field: &'static str) -> EngineResult<f64> {
    Ok(fc_core::numeric::ensure_finite(value, field)?)
}

/// Validate a strictly positive input measurement.
pub fn positive(value: f64, field: &'static str) -> EngineResult<f64> {
    Ok(ensure_positive(value, field)?)
}

/// Validate a non-negative input measurement.
pub fn non_negative(value: f64, field: &'static str) -> EngineResult<f64> {
    Ok(ensure_non_negative(value, field)?)
}

/// Validate every entry of a measurement series as strictly positive.
pub fn positive_series(values: &[f64], field: &'static str) -> EngineResult<()> {
    if values.is_empty() {
        return Err(crate::error::ValidationError::Empty { field }.into());
    }
    for &v in values {
        positive(v, field)?;
    }
    Ok(())
}

/// Diameter (mm) of a circular opening with the given area (m²).
///
/// `d = 2 * sqrt(area / π)`
pub fn diameter_from_area(area_m2: f64) -> EngineResult<f64> {
    let area_m2 = check_finite(area_m2, "opening area")?;
    if area_m2 <= 0.0 {
        return Err(SizingError::Computation {
            what: "opening area",
            value: area_m2,
        });
    }
    let area = m2(area_m2);
    let d_m = 2.0 * (area.value / std::f64::consts::PI).sqrt();
    let d_mm = to_mm(m(d_m));
    check_finite(d_mm, "computed diameter")?;
    if d_mm <= 0.0 {
        return Err(SizingError::Computation {
            what: "computed diameter",
            value: d_mm,
        });
    }
    Ok(d_mm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_diameter_from_area() {
        // Unit circle: area π m² -> 2 m diameter
        let d = diameter_from_area(std::f64::consts::PI).unwrap();
        assert!((d - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn test_diameter_from_zero_area_is_computation_error() {
        let err = diameter_from_area(0.0).unwrap_err();
        assert!(matches!(err, SizingError::Computation { .. }));
        assert!(diameter_from_area(f64::NAN).is_err());
    }

    #[test]
    fn test_positive_series() {
        assert!(positive_series(&[1.0, 2.0], "depths").is_ok());
        assert_eq!(
            positive_series(&[], "depths"),
            Err(ValidationError::Empty { field: "depths" }.into())
        );
        assert!(positive_series(&[1.0, 0.0], "depths").is_err());
    }

    #[test]
    fn test_check_finite() {
        assert!(check_finite(1.0, "test").is_ok());
        assert!(check_finite(f64::INFINITY, "test").is_err());
        assert!(check_finite(f64::NAN, "test").is_err());
    }
}
