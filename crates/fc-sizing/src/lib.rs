//! fc-sizing: culvert sizing engine.
//!
//! Provides the calculations behind a field card:
//! - California Method (surveyed stream cross-sections)
//! - Area-Based Method (Rational Method watershed runoff)
//! - rounding to the standard culvert size table
//! - derived hydraulic metrics for display
//! - Water Transport Potential scoring
//!
//! Every operation is a pure function of its inputs. Nothing here performs
//! I/O or logs; malformed input is rejected with a [`ValidationError`].
//!
//! # Example
//!
//! ```
//! use fc_sizing::calculate_area_based_method;
//!
//! let result = calculate_area_based_method(2.0, 50.0, Some(0.45), None).unwrap();
//! assert_eq!(result.final_size_mm, 400);
//! assert!(!result.requires_professional_design);
//! ```

pub mod area_based;
pub mod california;
pub mod common;
pub mod config;
pub mod engine;
pub mod error;
pub mod hydraulics;
pub mod result;
pub mod standard;
pub mod traits;
pub mod wtp;

// Re-exports
pub use area_based::AreaBasedInput;
pub use california::CaliforniaInput;
pub use common::diameter_from_area;
pub use config::SizingConfig;
pub use engine::{
    CulvertSizingEngine, calculate_area_based_method, calculate_california_method,
    calculate_flow_capacity,
};
pub use error::{EngineResult, SizingError, ValidationError};
pub use hydraulics::{calculate_cross_sectional_area, get_culvert_size_description};
pub use result::{CalculationMethod, MethodDetails, SizingResult};
pub use standard::{STANDARD_SIZES_MM, StandardSize, is_standard_size, round_to_standard_size};
pub use traits::SizingMethod;
pub use wtp::{
    ChannelRating, RiskCategory, WoodyDebris, WtpAssessment, assess_water_transport_potential,
};
