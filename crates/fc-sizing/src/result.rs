//! Immutable output of a sizing calculation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which sizing method produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculationMethod {
    California,
    AreaBased,
}

impl CalculationMethod {
    pub fn label(self) -> &'static str {
        match self {
            CalculationMethod::California => "California Method",
            CalculationMethod::AreaBased => "Area-Based Method",
        }
    }
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CalculationMethod::California => "california",
            CalculationMethod::AreaBased => "area-based",
        })
    }
}

/// Method-specific intermediate values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculation_method", rename_all = "kebab-case")]
pub enum MethodDetails {
    California {
        average_top_width_m: f64,
        average_depth_m: f64,
        bottom_width_m: f64,
        /// Trapezoidal channel cross-section (m²)
        cross_sectional_area_m2: f64,
        /// Cross-section times the end-opening multiplier (m²)
        end_opening_area_m2: f64,
        /// End-opening area after climate scaling (m²)
        required_area_m2: f64,
    },
    AreaBased {
        runoff_coefficient: f64,
        /// Rational Method peak flow before climate scaling (m³/s)
        base_flow_m3s: f64,
        /// Design flow after climate scaling (m³/s)
        flow_capacity_m3s: f64,
        design_velocity_ms: f64,
        /// Required culvert opening (m²)
        culvert_area_m2: f64,
    },
}

/// Recommended culvert size plus the numbers that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingResult {
    pub details: MethodDetails,
    pub area_based_size_mm: u32,
    pub table_based_size_mm: u32,
    /// Recommended standard diameter
    pub final_size_mm: u32,
    /// Unrounded diameter behind `final_size_mm`
    pub computed_diameter_mm: f64,
    pub climate_projection_factor: f64,
    pub requires_professional_design: bool,
}

impl SizingResult {
    pub fn method(&self) -> CalculationMethod {
        match self.details {
            MethodDetails::California { .. } => CalculationMethod::California,
            MethodDetails::AreaBased { .. } => CalculationMethod::AreaBased,
        }
    }

    pub fn climate_adjusted(&self) -> bool {
        self.climate_projection_factor > 1.0
    }

    /// Design flow for area-based results.
    pub fn flow_capacity_m3s(&self) -> Option<f64> {
        match self.details {
            MethodDetails::AreaBased {
                flow_capacity_m3s, ..
            } => Some(flow_capacity_m3s),
            MethodDetails::California { .. } => None,
        }
    }

    /// Required opening area, whichever method produced it.
    pub fn required_area_m2(&self) -> f64 {
        match self.details {
            MethodDetails::California {
                required_area_m2, ..
            } => required_area_m2,
            MethodDetails::AreaBased {
                culvert_area_m2, ..
            } => culvert_area_m2,
        }
    }
}
