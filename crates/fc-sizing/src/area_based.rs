//! Area-Based Method: Rational Method peak flow from watershed runoff.

use crate::common::{check_finite, diameter_from_area, positive};
use crate::config::{SizingConfig, check_runoff_coefficient};
use crate::error::EngineResult;
use crate::result::{CalculationMethod, MethodDetails, SizingResult};
use crate::standard::round_with_threshold;
use crate::traits::SizingMethod;
use fc_core::units::{m3ps, mps, to_m2};
use serde::{Deserialize, Serialize};

/// Watershed measurements for Q = C·I·A.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaBasedInput {
    /// Contributing watershed area (km²)
    pub watershed_area_km2: f64,
    /// Design rainfall intensity (mm/hr)
    pub precipitation_mm_hr: f64,
    /// Runoff coefficient C in (0, 1]; config default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runoff_coefficient: Option<f64>,
}

impl AreaBasedInput {
    pub fn new(
        watershed_area_km2: f64,
        precipitation_mm_hr: f64,
        runoff_coefficient: Option<f64>,
    ) -> Self {
        Self {
            watershed_area_km2,
            precipitation_mm_hr,
            runoff_coefficient,
        }
    }
}

impl SizingMethod for AreaBasedInput {
    fn method(&self) -> CalculationMethod {
        CalculationMethod::AreaBased
    }

    fn validate(&self) -> EngineResult<()> {
        positive(self.watershed_area_km2, "watershed_area")?;
        positive(self.precipitation_mm_hr, "precipitation")?;
        if let Some(c) = self.runoff_coefficient {
            check_runoff_coefficient(c)?;
        }
        Ok(())
    }

    fn size(
        &self,
        config: &SizingConfig,
        climate_factor: Option<f64>,
    ) -> EngineResult<SizingResult> {
        self.validate()?;
        let c = config.runoff_coefficient(self.runoff_coefficient)?;
        let factor = config.climate_factor(climate_factor)?;

        let base_flow = check_finite(
            c * self.precipitation_mm_hr * self.watershed_area_km2 * config.rational_unit_factor,
            "base flow",
        )?;
        let flow_capacity = check_finite(base_flow * factor, "flow capacity")?;

        let culvert_area = check_finite(
            to_m2(m3ps(flow_capacity) / mps(config.design_velocity_ms)),
            "culvert area",
        )?;
        let computed_diameter = diameter_from_area(culvert_area)?;
        let size = round_with_threshold(
            computed_diameter,
            config.professional_design_threshold_mm,
        )?;

        Ok(SizingResult {
            details: MethodDetails::AreaBased {
                runoff_coefficient: c,
                base_flow_m3s: base_flow,
                flow_capacity_m3s: flow_capacity,
                design_velocity_ms: config.design_velocity_ms,
                culvert_area_m2: culvert_area,
            },
            area_based_size_mm: size.size_mm,
            table_based_size_mm: size.size_mm,
            final_size_mm: size.size_mm,
            computed_diameter_mm: computed_diameter,
            climate_projection_factor: factor,
            requires_professional_design: size.requires_professional_design,
        })
    }
}
