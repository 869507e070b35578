//! Loading sizing configuration.

use fc_sizing::{CulvertSizingEngine, SizingConfig};
use std::path::Path;

use crate::error::{AppError, AppResult};

/// Load a YAML sizing config. Missing keys take their defaults.
pub fn load_config(path: &Path) -> AppResult<SizingConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> AppResult<SizingConfig> {
    let config: SizingConfig = serde_yaml::from_str(content)
        .map_err(|e| AppError::Config(format!("Failed to parse config YAML: {}", e)))?;
    config
        .validate()
        .map_err(|e| AppError::Config(e.to_string()))?;
    Ok(config)
}

/// Build an engine from an optional config file.
pub fn load_engine(path: Option<&Path>) -> AppResult<CulvertSizingEngine> {
    let config = match path {
        Some(p) => {
            tracing::info!(path = %p.display(), "loading sizing config");
            load_config(p)?
        }
        None => SizingConfig::default(),
    };
    Ok(CulvertSizingEngine::new(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(parse_config("{}").unwrap(), SizingConfig::default());
    }

    #[test]
    fn overrides_single_field() {
        let cfg = parse_config("default_climate_factor: 1.3\n").unwrap();
        assert_eq!(cfg.default_climate_factor, 1.3);
        assert_eq!(cfg.design_velocity_ms, 1.5);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            parse_config("design_velocity_ms: -1.0\n"),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            parse_config("design_velocity_ms: [1, 2]\n"),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, AppError::ConfigRead { .. }));
    }
}
