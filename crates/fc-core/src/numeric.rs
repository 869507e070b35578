use crate::FcError;

/// Floating point type used throughout the toolkit
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, FcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(FcError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, FcError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(FcError::NonPositive { what, value: v })
    }
}

/// Finite and greater than or equal to zero.
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, FcError> {
    let v = ensure_finite(v, what)?;
    if v >= 0.0 {
        Ok(v)
    } else {
        Err(FcError::Negative { what, value: v })
    }
}

/// Arithmetic mean. Returns `None` for an empty slice.
pub fn mean(values: &[Real]) -> Option<Real> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<Real>() / values.len() as Real)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero_and_negative() {
        assert!(ensure_positive(0.5, "width").is_ok());
        assert_eq!(
            ensure_positive(0.0, "width"),
            Err(FcError::NonPositive {
                what: "width",
                value: 0.0
            })
        );
        assert!(ensure_positive(-1.0, "width").is_err());
        assert!(ensure_positive(Real::INFINITY, "width").is_err());
    }

    #[test]
    fn ensure_non_negative_accepts_zero() {
        assert_eq!(ensure_non_negative(0.0, "bottom"), Ok(0.0));
        assert!(ensure_non_negative(-0.1, "bottom").is_err());
    }

    #[test]
    fn mean_of_values() {
        assert_eq!(mean(&[]), None);
        let m = mean(&[3.0, 3.2, 2.8]).unwrap();
        assert!((m - 3.0).abs() < 1e-12);
    }

    mod props {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn mean_lies_within_bounds(values in prop::collection::vec(0.01f64..100.0, 1..8)) {
                let m = mean(&values).unwrap();
                let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
                let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                prop_assert!(m >= lo - 1e-9 && m <= hi + 1e-9);
            }

            #[test]
            fn positive_values_pass_both_guards(v in 1e-9f64..1e9) {
                prop_assert_eq!(ensure_positive(v, "v"), Ok(v));
                prop_assert_eq!(ensure_non_negative(v, "v"), Ok(v));
            }
        }
    }
}
