//! fc-project: canonical field card format and validation.

pub mod migrate;
pub mod schema;
pub mod validate;

pub use migrate::{LATEST_VERSION, migrate_to_latest};
pub use schema::*;
pub use validate::{CardValidationError, is_valid_card_id, validate_card};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] CardValidationError),

    #[error("Migration error: {what}")]
    Migration { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse, migrate and validate a card from JSON text.
pub fn card_from_json(content: &str) -> ProjectResult<FieldCard> {
    let mut card: FieldCard = serde_json::from_str(content)?;
    card = migrate_to_latest(card)?;
    validate_card(&card)?;
    Ok(card)
}

pub fn card_to_json(card: &FieldCard) -> ProjectResult<String> {
    validate_card(card)?;
    Ok(serde_json::to_string_pretty(card)?)
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<FieldCard> {
    let content = std::fs::read_to_string(path)?;
    let mut card: FieldCard = serde_yaml::from_str(&content)?;
    card = migrate_to_latest(card)?;
    validate_card(&card)?;
    Ok(card)
}

pub fn save_yaml(path: &std::path::Path, card: &FieldCard) -> ProjectResult<()> {
    validate_card(card)?;
    let content = serde_yaml::to_string(card)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<FieldCard> {
    let content = std::fs::read_to_string(path)?;
    card_from_json(&content)
}

pub fn save_json(path: &std::path::Path, card: &FieldCard) -> ProjectResult<()> {
    let content = card_to_json(card)?;
    std::fs::write(path, content)?;
    Ok(())
}
