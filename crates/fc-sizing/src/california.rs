//! California Method: size from surveyed stream cross-sections.

use crate::common::{check_finite, diameter_from_area, non_negative, positive_series};
use crate::config::SizingConfig;
use crate::error::{EngineResult, SizingError, ValidationError};
use crate::result::{CalculationMethod, MethodDetails, SizingResult};
use crate::standard::round_with_threshold;
use crate::traits::SizingMethod;
use fc_core::numeric::mean;
use serde::{Deserialize, Serialize};

/// Stream cross-section measurements, paired positionally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaliforniaInput {
    /// Top width at each sampled cross-section (m)
    pub top_widths_m: Vec<f64>,
    /// Channel bottom width (m), may be zero for a V-shaped channel
    pub bottom_width_m: f64,
    /// Depth at each sampled cross-section (m)
    pub depths_m: Vec<f64>,
}

impl CaliforniaInput {
    pub fn new(top_widths_m: Vec<f64>, bottom_width_m: f64, depths_m: Vec<f64>) -> Self {
        Self {
            top_widths_m,
            bottom_width_m,
            depths_m,
        }
    }

    /// Trapezoidal channel area from averaged measurements (m²).
    fn channel_area(&self) -> EngineResult<(f64, f64, f64)> {
        let avg_top = mean(&self.top_widths_m).ok_or(ValidationError::Empty {
            field: "top_widths",
        })?;
        let avg_depth = mean(&self.depths_m).ok_or(ValidationError::Empty { field: "depths" })?;

        let area = check_finite(
            ((avg_top + self.bottom_width_m) / 2.0) * avg_depth,
            "cross-sectional area",
        )?;
        if area <= 0.0 {
            return Err(SizingError::Computation {
                what: "cross-sectional area",
                value: area,
            });
        }
        Ok((avg_top, avg_depth, area))
    }
}

impl SizingMethod for CaliforniaInput {
    fn method(&self) -> CalculationMethod {
        CalculationMethod::California
    }

    fn validate(&self) -> EngineResult<()> {
        positive_series(&self.top_widths_m, "top_widths")?;
        positive_series(&self.depths_m, "depths")?;
        if self.top_widths_m.len() != self.depths_m.len() {
            return Err(ValidationError::LengthMismatch {
                left: "top_widths",
                left_len: self.top_widths_m.len(),
                right: "depths",
                right_len: self.depths_m.len(),
            }
            .into());
        }
        non_negative(self.bottom_width_m, "bottom_width")?;
        Ok(())
    }

    fn size(
        &self,
        config: &SizingConfig,
        climate_factor: Option<f64>,
    ) -> EngineResult<SizingResult> {
        self.validate()?;
        let factor = config.climate_factor(climate_factor)?;
        let threshold = config.professional_design_threshold_mm;

        let (avg_top, avg_depth, cross_section) = self.channel_area()?;
        let end_opening = check_finite(
            cross_section * config.end_opening_multiplier,
            "end opening area",
        )?;

        let area_based = round_with_threshold(diameter_from_area(end_opening)?, threshold)?;
        // No regulatory lookup table is available; the table candidate tracks
        // the area-derived size.
        let table_based = area_based;
        let base_size = area_based.size_mm.max(table_based.size_mm);

        // Climate projections scale the required opening area, not the diameter.
        let required_area = check_finite(end_opening * factor, "required area")?;
        let computed_diameter = diameter_from_area(required_area)?;
        let adjusted = round_with_threshold(computed_diameter, threshold)?;
        let final_size = base_size.max(adjusted.size_mm);

        Ok(SizingResult {
            details: MethodDetails::California {
                average_top_width_m: avg_top,
                average_depth_m: avg_depth,
                bottom_width_m: self.bottom_width_m,
                cross_sectional_area_m2: cross_section,
                end_opening_area_m2: end_opening,
                required_area_m2: required_area,
            },
            area_based_size_mm: area_based.size_mm,
            table_based_size_mm: table_based.size_mm,
            final_size_mm: final_size,
            computed_diameter_mm: computed_diameter,
            climate_projection_factor: factor,
            requires_professional_design: adjusted.requires_professional_design
                || final_size >= threshold,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn survey() -> CaliforniaInput {
        CaliforniaInput::new(vec![3.0, 3.2, 2.8], 1.0, vec![0.8, 0.9, 0.85])
    }

    #[test]
    fn wide_stream_exceeds_table() {
        let r = survey().size(&SizingConfig::default(), None).unwrap();
        match r.details {
            MethodDetails::California {
                average_top_width_m,
                average_depth_m,
                cross_sectional_area_m2,
                end_opening_area_m2,
                ..
            } => {
                assert!((average_top_width_m - 3.0).abs() < 1e-12);
                assert!((average_depth_m - 0.85).abs() < 1e-12);
                assert!((cross_sectional_area_m2 - 1.7).abs() < 1e-12);
                assert!((end_opening_area_m2 - 5.1).abs() < 1e-12);
            }
            other => panic!("unexpected details: {other:?}"),
        }
        assert!((r.computed_diameter_mm - 2548.0).abs() < 1.0);
        assert_eq!(r.final_size_mm, 2000);
        assert!(r.requires_professional_design);
    }

    #[test]
    fn small_channel_rounds_up() {
        // area = ((0.6 + 0.2) / 2) * 0.25 * 3 = 0.3 m² -> d ≈ 618 mm
        let input = CaliforniaInput::new(vec![0.6, 0.6], 0.2, vec![0.25, 0.25]);
        let r = input.size(&SizingConfig::default(), None).unwrap();
        assert_eq!(r.area_based_size_mm, 700);
        assert_eq!(r.table_based_size_mm, 700);
        assert_eq!(r.final_size_mm, 700);
        assert!(!r.requires_professional_design);
        assert_eq!(r.climate_projection_factor, 1.0);
    }

    #[test]
    fn climate_factor_scales_area() {
        let input = CaliforniaInput::new(vec![0.6, 0.6], 0.2, vec![0.25, 0.25]);
        let r = input.size(&SizingConfig::default(), Some(1.5)).unwrap();
        // 0.45 m² -> d ≈ 757 mm
        assert_eq!(r.area_based_size_mm, 700);
        assert_eq!(r.final_size_mm, 800);
        assert!((r.required_area_m2() - 0.45).abs() < 1e-12);
    }

    #[test]
    fn zero_measurements_are_rejected() {
        let input = CaliforniaInput::new(vec![0.0, 0.0], 0.0, vec![0.0, 0.0]);
        let err = input.size(&SizingConfig::default(), None).unwrap_err();
        match err {
            SizingError::Validation(v) => assert_eq!(v.field(), "top_widths"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let input = CaliforniaInput::new(vec![1.0, 1.0, 1.0], 0.5, vec![0.3, 0.3]);
        assert!(matches!(
            input.validate(),
            Err(SizingError::Validation(ValidationError::LengthMismatch { .. }))
        ));
    }

    #[test]
    fn negative_bottom_width_is_rejected() {
        let input = CaliforniaInput::new(vec![1.0], -0.1, vec![0.3]);
        let err = input.validate().unwrap_err();
        assert!(matches!(
            err,
            SizingError::Validation(ValidationError::OutOfRange {
                field: "bottom_width",
                ..
            })
        ));
    }

    #[test]
    fn underflowing_area_is_computation_error() {
        let input = CaliforniaInput::new(vec![1e-200], 0.0, vec![1e-200]);
        let err = input.size(&SizingConfig::default(), None).unwrap_err();
        assert!(matches!(err, SizingError::Computation { .. }));
    }
}
