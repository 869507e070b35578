//! Core trait for sizing methods.

use crate::config::SizingConfig;
use crate::error::EngineResult;
use crate::result::{CalculationMethod, SizingResult};

/// A measurement set that can be turned into a culvert recommendation.
///
/// Implementations are pure functions of their inputs and the config. They
/// never perform I/O and can be evaluated from any thread.
pub trait SizingMethod: Send + Sync {
    /// Method tag recorded in the result.
    fn method(&self) -> CalculationMethod;

    /// Reject malformed inputs before any arithmetic runs.
    ///
    /// # Returns
    /// The first invalid field, wrapped in a validation error
    fn validate(&self) -> EngineResult<()>;

    /// Compute the recommended standard size.
    ///
    /// # Arguments
    /// * `config` - Design assumptions (velocity, multipliers, thresholds)
    /// * `climate_factor` - Optional projection multiplier, `>= 1.0`
    fn size(
        &self,
        config: &SizingConfig,
        climate_factor: Option<f64>,
    ) -> EngineResult<SizingResult>;
}
