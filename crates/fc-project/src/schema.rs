//! Field card schema definitions.

use fc_sizing::{
    AreaBasedInput, CaliforniaInput, CalculationMethod, SizingMethod, SizingResult, WtpAssessment,
};
use serde::{Deserialize, Serialize};

/// A persisted survey record: measurements, their sizing result, and the
/// notes and photos collected on site.
///
/// The card owns its copy of the result; editing notes or photos never
/// changes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldCard {
    #[serde(default)]
    pub version: u32,
    pub id: String,
    pub title: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub site: SiteInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GpsFix>,
    pub measurements: MeasurementSet,
    pub result: SizingResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wtp: Option<WtpAssessment>,
    #[serde(default)]
    pub notes: Vec<FieldNote>,
    #[serde(default)]
    pub photos: Vec<PhotoRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SiteInfo {
    #[serde(default)]
    pub stream_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub road_name: Option<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsFix {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy_m: Option<f64>,
}

/// Inputs that produced the card's result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeasurementSet {
    pub input: MeasurementInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub climate_projection_factor: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "method", rename_all = "kebab-case")]
pub enum MeasurementInput {
    California(CaliforniaInput),
    AreaBased(AreaBasedInput),
}

impl MeasurementSet {
    pub fn method(&self) -> CalculationMethod {
        self.as_sizing_method().method()
    }

    pub fn as_sizing_method(&self) -> &dyn SizingMethod {
        match &self.input {
            MeasurementInput::California(input) => input as &dyn SizingMethod,
            MeasurementInput::AreaBased(input) => input,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldNote {
    pub created_at: String,
    pub text: String,
}

/// Reference to a photo stored on the device; the image itself is not
/// embedded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhotoRef {
    pub path: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taken_at: Option<String>,
    #[serde(default)]
    pub annotations: Vec<PhotoAnnotation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhotoAnnotation {
    pub text: String,
    /// Marker position, normalized to the image (0..=1 on both axes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<MarkerPoint>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MarkerPoint {
    pub x: f64,
    pub y: f64,
}
