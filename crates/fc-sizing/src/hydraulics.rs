//! Derived hydraulic metrics for a chosen culvert diameter.
//!
//! These feed results and reports only; sizing decisions never use them.

use crate::common::{check_finite, positive};
use crate::error::EngineResult;
use fc_core::units::{mm, to_m};

/// Open area of a circular culvert (m²).
pub fn calculate_cross_sectional_area(diameter_mm: f64) -> EngineResult<f64> {
    let d_m = to_m(mm(positive(diameter_mm, "diameter_mm")?));
    check_finite(std::f64::consts::PI * (d_m / 2.0).powi(2), "culvert area")
}

/// Full-pipe flow capacity (m³/s) from Manning's equation.
///
/// `Q = (1/n) · A · R^(2/3) · S^(1/2)` with hydraulic radius `R = D/4`.
/// `slope` is a dimensionless gradient (m/m).
pub fn flow_capacity_with_roughness(
    diameter_mm: f64,
    slope: f64,
    manning_n: f64,
) -> EngineResult<f64> {
    let area = calculate_cross_sectional_area(diameter_mm)?;
    let slope = positive(slope, "slope")?;
    let n = positive(manning_n, "manning_n")?;

    let radius = to_m(mm(diameter_mm)) / 4.0;
    let q = area * radius.powf(2.0 / 3.0) * slope.sqrt() / n;
    check_finite(q, "flow capacity")
}

/// Human-readable size category for results screens and reports.
pub fn get_culvert_size_description(diameter_mm: f64) -> &'static str {
    if diameter_mm < 600.0 {
        "Small culvert"
    } else if diameter_mm < 1200.0 {
        "Medium culvert"
    } else if diameter_mm < 2000.0 {
        "Large culvert"
    } else {
        "Extra-large culvert (professional design required)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_of_one_metre_culvert() {
        let a = calculate_cross_sectional_area(1000.0).unwrap();
        assert!((a - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn area_rejects_zero_diameter() {
        assert!(calculate_cross_sectional_area(0.0).is_err());
    }

    #[test]
    fn manning_flow_reference_value() {
        // 400 mm at 2% with n = 0.024
        let q = flow_capacity_with_roughness(400.0, 0.02, 0.024).unwrap();
        assert!((q - 0.1595).abs() < 1e-3, "q = {q}");
    }

    #[test]
    fn flow_increases_with_diameter_and_slope() {
        let base = flow_capacity_with_roughness(600.0, 0.01, 0.024).unwrap();
        let wider = flow_capacity_with_roughness(800.0, 0.01, 0.024).unwrap();
        let steeper = flow_capacity_with_roughness(600.0, 0.03, 0.024).unwrap();
        assert!(wider > base);
        assert!(steeper > base);
    }

    #[test]
    fn flat_slope_is_rejected() {
        assert!(flow_capacity_with_roughness(600.0, 0.0, 0.024).is_err());
    }

    #[test]
    fn size_descriptions() {
        assert_eq!(get_culvert_size_description(400.0), "Small culvert");
        assert_eq!(get_culvert_size_description(600.0), "Medium culvert");
        assert_eq!(get_culvert_size_description(1500.0), "Large culvert");
        assert!(get_culvert_size_description(2000.0).contains("professional"));
    }
}
