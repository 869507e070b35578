//! Culvert sizing engine and the free-function API.

use crate::area_based::AreaBasedInput;
use crate::california::CaliforniaInput;
use crate::config::SizingConfig;
use crate::error::EngineResult;
use crate::hydraulics::flow_capacity_with_roughness;
use crate::result::SizingResult;
use crate::traits::SizingMethod;

/// Stateless calculator bound to one set of design assumptions.
///
/// Cheap to clone and safe to share between threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CulvertSizingEngine {
    config: SizingConfig,
}

impl CulvertSizingEngine {
    pub fn new(config: SizingConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SizingConfig {
        &self.config
    }

    /// Size any measurement set.
    pub fn size(
        &self,
        input: &dyn SizingMethod,
        climate_factor: Option<f64>,
    ) -> EngineResult<SizingResult> {
        input.size(&self.config, climate_factor)
    }

    pub fn california_method(
        &self,
        top_widths_m: &[f64],
        bottom_width_m: f64,
        depths_m: &[f64],
        climate_factor: Option<f64>,
    ) -> EngineResult<SizingResult> {
        let input = CaliforniaInput::new(top_widths_m.to_vec(), bottom_width_m, depths_m.to_vec());
        self.size(&input, climate_factor)
    }

    pub fn area_based_method(
        &self,
        watershed_area_km2: f64,
        precipitation_mm_hr: f64,
        runoff_coefficient: Option<f64>,
        climate_factor: Option<f64>,
    ) -> EngineResult<SizingResult> {
        let input = AreaBasedInput::new(watershed_area_km2, precipitation_mm_hr, runoff_coefficient);
        self.size(&input, climate_factor)
    }

    /// Display flow capacity using the configured Manning roughness.
    pub fn flow_capacity(&self, diameter_mm: f64, slope: f64) -> EngineResult<f64> {
        flow_capacity_with_roughness(diameter_mm, slope, self.config.manning_n)
    }
}

pub fn calculate_california_method(
    top_widths_m: &[f64],
    bottom_width_m: f64,
    depths_m: &[f64],
    climate_factor: Option<f64>,
) -> EngineResult<SizingResult> {
    CulvertSizingEngine::default().california_method(
        top_widths_m,
        bottom_width_m,
        depths_m,
        climate_factor,
    )
}

pub fn calculate_area_based_method(
    watershed_area_km2: f64,
    precipitation_mm_hr: f64,
    runoff_coefficient: Option<f64>,
    climate_factor: Option<f64>,
) -> EngineResult<SizingResult> {
    CulvertSizingEngine::default().area_based_method(
        watershed_area_km2,
        precipitation_mm_hr,
        runoff_coefficient,
        climate_factor,
    )
}

pub fn calculate_flow_capacity(diameter_mm: f64, slope: f64) -> EngineResult<f64> {
    CulvertSizingEngine::default().flow_capacity(diameter_mm, slope)
}
