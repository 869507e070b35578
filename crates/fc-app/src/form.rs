//! Form layer: raw text fields into validated measurement sets.

use fc_project::{MeasurementInput, MeasurementSet};
use fc_sizing::{AreaBasedInput, CaliforniaInput, SizingConfig, SizingMethod};

use crate::error::{AppError, AppResult};

/// Parse one numeric field. Surrounding whitespace is ignored.
pub fn parse_number(field: &str, raw: &str) -> AppResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid(field, raw, "a value is required"));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| invalid(field, raw, "not a number"))?;
    if !value.is_finite() {
        return Err(invalid(field, raw, "must be finite"));
    }
    Ok(value)
}

/// Parse an optional numeric field; blank means absent.
pub fn parse_optional(field: &str, raw: &str) -> AppResult<Option<f64>> {
    if raw.trim().is_empty() {
        Ok(None)
    } else {
        parse_number(field, raw).map(Some)
    }
}

/// Parse a list separated by commas, semicolons or whitespace.
pub fn parse_list(field: &str, raw: &str) -> AppResult<Vec<f64>> {
    let values = raw
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| parse_number(field, s))
        .collect::<AppResult<Vec<f64>>>()?;
    if values.is_empty() {
        return Err(invalid(field, raw, "at least one measurement is required"));
    }
    Ok(values)
}

fn invalid(field: &str, raw: &str, reason: &str) -> AppError {
    AppError::InvalidInput {
        field: field.to_string(),
        value: raw.to_string(),
        reason: reason.to_string(),
    }
}

/// Climate adjustment toggle. An enabled toggle with a blank factor uses the
/// configured default.
#[derive(Debug, Clone, Default)]
pub struct ClimateForm {
    pub enabled: bool,
    pub factor: String,
}

impl ClimateForm {
    pub fn resolve(&self, config: &SizingConfig) -> AppResult<Option<f64>> {
        if !self.enabled {
            return Ok(None);
        }
        let factor = parse_optional("climate_projection_factor", &self.factor)?
            .unwrap_or(config.default_climate_factor);
        config.climate_factor(Some(factor))?;
        Ok(Some(factor))
    }
}

#[derive(Debug, Clone, Default)]
pub struct CaliforniaForm {
    pub top_widths: String,
    pub bottom_width: String,
    pub depths: String,
    pub climate: ClimateForm,
}

impl CaliforniaForm {
    pub fn to_measurements(&self, config: &SizingConfig) -> AppResult<MeasurementSet> {
        let input = CaliforniaInput::new(
            parse_list("top_widths", &self.top_widths)?,
            parse_number("bottom_width", &self.bottom_width)?,
            parse_list("depths", &self.depths)?,
        );
        input.validate()?;
        Ok(MeasurementSet {
            input: MeasurementInput::California(input),
            climate_projection_factor: self.climate.resolve(config)?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct AreaBasedForm {
    pub watershed_area: String,
    pub precipitation: String,
    /// Blank uses the configured default coefficient
    pub runoff_coefficient: String,
    pub climate: ClimateForm,
}

impl AreaBasedForm {
    pub fn to_measurements(&self, config: &SizingConfig) -> AppResult<MeasurementSet> {
        let runoff = parse_optional("runoff_coefficient", &self.runoff_coefficient)?
            .unwrap_or(config.default_runoff_coefficient);
        let input = AreaBasedInput::new(
            parse_number("watershed_area", &self.watershed_area)?,
            parse_number("precipitation", &self.precipitation)?,
            Some(runoff),
        );
        input.validate()?;
        Ok(MeasurementSet {
            input: MeasurementInput::AreaBased(input),
            climate_projection_factor: self.climate.resolve(config)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fc_sizing::SizingError;

    #[test]
    fn parses_lists_with_mixed_separators() {
        assert_eq!(
            parse_list("depths", "0.8, 0.9;0.85").unwrap(),
            vec![0.8, 0.9, 0.85]
        );
        assert_eq!(parse_list("depths", " 1 2 ").unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn non_numeric_names_field() {
        let err = parse_list("top_widths", "3.0, abc").unwrap_err();
        match err {
            AppError::InvalidInput { field, value, .. } => {
                assert_eq!(field, "top_widths");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(parse_number("bottom_width", "").is_err());
        assert!(parse_number("bottom_width", "inf").is_err());
        assert!(parse_list("depths", " , ").is_err());
    }

    #[test]
    fn california_form_to_measurements() {
        let form = CaliforniaForm {
            top_widths: "3.0,3.2,2.8".to_string(),
            bottom_width: "1.0".to_string(),
            depths: "0.8,0.9,0.85".to_string(),
            climate: ClimateForm::default(),
        };
        let set = form.to_measurements(&SizingConfig::default()).unwrap();
        assert_eq!(set.climate_projection_factor, None);
        assert!(matches!(set.input, MeasurementInput::California(_)));
    }

    #[test]
    fn mismatched_form_is_validation_error() {
        let form = CaliforniaForm {
            top_widths: "3.0,3.2".to_string(),
            bottom_width: "1.0".to_string(),
            depths: "0.8".to_string(),
            climate: ClimateForm::default(),
        };
        assert!(matches!(
            form.to_measurements(&SizingConfig::default()),
            Err(AppError::Sizing(SizingError::Validation(_)))
        ));
    }

    #[test]
    fn enabled_climate_uses_configured_default() {
        let form = AreaBasedForm {
            watershed_area: "2".to_string(),
            precipitation: "50".to_string(),
            runoff_coefficient: String::new(),
            climate: ClimateForm {
                enabled: true,
                factor: String::new(),
            },
        };
        let set = form.to_measurements(&SizingConfig::default()).unwrap();
        assert_eq!(set.climate_projection_factor, Some(1.2));
        match set.input {
            MeasurementInput::AreaBased(a) => assert_eq!(a.runoff_coefficient, Some(0.45)),
            other => panic!("unexpected input: {other:?}"),
        }
    }

    #[test]
    fn climate_factor_below_one_is_rejected() {
        let climate = ClimateForm {
            enabled: true,
            factor: "0.8".to_string(),
        };
        assert!(climate.resolve(&SizingConfig::default()).is_err());
    }
}
