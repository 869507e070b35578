//! Design constants for the sizing engine.

use crate::error::{EngineResult, ValidationError};
use serde::{Deserialize, Serialize};

/// Tunable design assumptions.
///
/// Every field has a default so a partial YAML document is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizingConfig {
    /// California Method multiplier from channel cross-section to culvert opening
    pub end_opening_multiplier: f64,
    /// Assumed flow velocity through the culvert (m/s)
    pub design_velocity_ms: f64,
    /// Rational Method conversion from mm/hr · km² to m³/s
    pub rational_unit_factor: f64,
    /// Runoff coefficient used when none is supplied
    pub default_runoff_coefficient: f64,
    /// Climate projection factor used when adjustment is enabled without a value
    pub default_climate_factor: f64,
    /// Sizes at or above this diameter (mm) need professional review
    pub professional_design_threshold_mm: u32,
    /// Manning roughness for display flow capacity (corrugated metal pipe)
    pub manning_n: f64,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            end_opening_multiplier: 3.0,
            design_velocity_ms: 1.5,
            rational_unit_factor: 0.00278,
            default_runoff_coefficient: 0.45,
            default_climate_factor: 1.2,
            professional_design_threshold_mm: 2000,
            manning_n: 0.024,
        }
    }
}

impl SizingConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let positive = [
            ("end_opening_multiplier", self.end_opening_multiplier),
            ("design_velocity_ms", self.design_velocity_ms),
            ("rational_unit_factor", self.rational_unit_factor),
            ("manning_n", self.manning_n),
        ];
        for (field, value) in positive {
            fc_core::numeric::ensure_positive(value, field)?;
        }

        let c = self.default_runoff_coefficient;
        if !(c > 0.0 && c <= 1.0) {
            return Err(ValidationError::OutOfRange {
                field: "default_runoff_coefficient",
                value: c,
                reason: "must lie in (0, 1]",
            });
        }

        let f = self.default_climate_factor;
        if !(f.is_finite() && f >= 1.0) {
            return Err(ValidationError::OutOfRange {
                field: "default_climate_factor",
                value: f,
                reason: "must be at least 1.0",
            });
        }

        if self.professional_design_threshold_mm == 0 {
            return Err(ValidationError::OutOfRange {
                field: "professional_design_threshold_mm",
                value: 0.0,
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }

    /// Resolve an optional climate factor, rejecting values below 1.0.
    pub fn climate_factor(&self, factor: Option<f64>) -> EngineResult<f64> {
        match factor {
            None => Ok(1.0),
            Some(f) => {
                let f = crate::common::check_input_finite(f, "climate_projection_factor")?;
                if f < 1.0 {
                    return Err(ValidationError::OutOfRange {
                        field: "climate_projection_factor",
                        value: f,
                        reason: "must be at least 1.0",
                    }
                    .into());
                }
                Ok(f)
            }
        }
    }

    /// Resolve an optional runoff coefficient, defaulting when absent.
    pub fn runoff_coefficient(&self, coefficient: Option<f64>) -> EngineResult<f64> {
        check_runoff_coefficient(coefficient.unwrap_or(self.default_runoff_coefficient))
    }
}

/// A runoff coefficient must be finite and lie in (0, 1].
pub fn check_runoff_coefficient(c: f64) -> EngineResult<f64> {
    let c = crate::common::check_input_finite(c, "runoff_coefficient")?;
    if c <= 0.0 || c > 1.0 {
        return Err(ValidationError::OutOfRange {
            field: "runoff_coefficient",
            value: c,
            reason: "must lie in (0, 1]",
        }
        .into());
    }
    Ok(c)
}
