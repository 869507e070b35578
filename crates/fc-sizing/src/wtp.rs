//! Water Transport Potential scoring.
//!
//! Three field ratings are summed into a 0-9 score which selects a risk
//! category and an additional sizing margin. The assessment is reported next
//! to a sizing result and never alters it.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Low/medium/high rating used for bankfull width and sediment storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelRating {
    Low,
    Medium,
    High,
}

impl ChannelRating {
    pub fn parse(field: &'static str, value: &str) -> Result<Self, ValidationError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ValidationError::UnknownRating {
                field,
                value: value.to_string(),
            }),
        }
    }

    pub fn score(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }
}

/// Amount of large woody debris observed in the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WoodyDebris {
    None,
    Small,
    Large,
    Logs,
}

impl WoodyDebris {
    pub fn parse(field: &'static str, value: &str) -> Result<Self, ValidationError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "small" => Ok(Self::Small),
            "large" => Ok(Self::Large),
            "logs" => Ok(Self::Logs),
            _ => Err(ValidationError::UnknownRating {
                field,
                value: value.to_string(),
            }),
        }
    }

    pub fn score(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Small => 1,
            Self::Large => 2,
            Self::Logs => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

impl RiskCategory {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=3 => Self::Low,
            4..=6 => Self::Medium,
            _ => Self::High,
        }
    }

    /// Fractional increase suggested for the culvert size.
    pub fn additional_sizing(self) -> f64 {
        match self {
            Self::Low => 0.0,
            Self::Medium => 0.2,
            Self::High => 0.5,
        }
    }

    pub fn recommendations(self) -> &'static [&'static str] {
        match self {
            Self::Low => &[
                "Standard culvert sizing is adequate",
                "Inspect the inlet annually for debris accumulation",
            ],
            Self::Medium => &[
                "Increase culvert size by 20% to pass sediment and debris",
                "Consider a debris rack or trash barrier upstream of the inlet",
                "Inspect after major storm events",
            ],
            Self::High => &[
                "Increase culvert size by 50% or consider a bridge or open-bottom arch",
                "Consult a qualified professional on debris and sediment management",
                "Armour the inlet and outlet against scour",
                "Inspect after every significant storm event",
            ],
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WtpAssessment {
    pub bankfull_width: ChannelRating,
    pub sediment_storage: ChannelRating,
    pub woody_debris: WoodyDebris,
    pub score: u8,
    pub risk_category: RiskCategory,
    pub additional_sizing: f64,
    pub recommendations: Vec<String>,
}

impl WtpAssessment {
    pub fn from_ratings(
        bankfull_width: ChannelRating,
        sediment_storage: ChannelRating,
        woody_debris: WoodyDebris,
    ) -> Self {
        let score = bankfull_width.score() + sediment_storage.score() + woody_debris.score();
        let risk_category = RiskCategory::from_score(score);
        Self {
            bankfull_width,
            sediment_storage,
            woody_debris,
            score,
            risk_category,
            additional_sizing: risk_category.additional_sizing(),
            recommendations: risk_category
                .recommendations()
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Score raw form ratings, e.g. `("high", "medium", "small")`.
pub fn assess_water_transport_potential(
    bankfull_width: &str,
    sediment_storage: &str,
    woody_debris: &str,
) -> Result<WtpAssessment, ValidationError> {
    Ok(WtpAssessment::from_ratings(
        ChannelRating::parse("bankfull_width", bankfull_width)?,
        ChannelRating::parse("sediment_storage", sediment_storage)?,
        WoodyDebris::parse("woody_debris", woody_debris)?,
    ))
}
