//! Field card validation logic.

use crate::schema::{FieldCard, GpsFix, PhotoRef};
use fc_sizing::is_standard_size;

#[derive(thiserror::Error, Debug)]
pub enum CardValidationError {
    #[error("Missing field: {field}")]
    MissingField { field: String },

    #[error("Invalid card id '{id}': only letters, digits, '-' and '_' are allowed")]
    InvalidId { id: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Inconsistent card: {reason}")]
    Inconsistent { reason: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

/// Card ids double as file names, so they are restricted to a safe alphabet.
pub fn is_valid_card_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= 128
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

pub fn validate_card(card: &FieldCard) -> Result<(), CardValidationError> {
    if card.version > crate::migrate::LATEST_VERSION {
        return Err(CardValidationError::UnsupportedVersion {
            version: card.version,
        });
    }

    if !is_valid_card_id(&card.id) {
        return Err(CardValidationError::InvalidId {
            id: card.id.clone(),
        });
    }

    if card.title.trim().is_empty() {
        return Err(CardValidationError::MissingField {
            field: "title".to_string(),
        });
    }

    if card.created_at.trim().is_empty() {
        return Err(CardValidationError::MissingField {
            field: "created_at".to_string(),
        });
    }

    if let Some(fix) = &card.location {
        validate_location(fix)?;
    }

    card.measurements
        .as_sizing_method()
        .validate()
        .map_err(|e| CardValidationError::InvalidValue {
            field: "measurements".to_string(),
            value: card.measurements.method().to_string(),
            reason: e.to_string(),
        })?;

    if card.result.method() != card.measurements.method() {
        return Err(CardValidationError::Inconsistent {
            reason: format!(
                "result was computed with {} but measurements are {}",
                card.result.method(),
                card.measurements.method()
            ),
        });
    }

    if !is_standard_size(card.result.final_size_mm) {
        return Err(CardValidationError::InvalidValue {
            field: "result.final_size_mm".to_string(),
            value: card.result.final_size_mm.to_string(),
            reason: "not a standard culvert size".to_string(),
        });
    }

    for (idx, photo) in card.photos.iter().enumerate() {
        validate_photo(idx, photo)?;
    }

    for (idx, note) in card.notes.iter().enumerate() {
        if note.text.trim().is_empty() {
            return Err(CardValidationError::MissingField {
                field: format!("notes[{}].text", idx),
            });
        }
    }

    Ok(())
}

fn validate_location(fix: &GpsFix) -> Result<(), CardValidationError> {
    if !(-90.0..=90.0).contains(&fix.latitude) {
        return Err(CardValidationError::InvalidValue {
            field: "location.latitude".to_string(),
            value: fix.latitude.to_string(),
            reason: "must lie in [-90, 90]".to_string(),
        });
    }
    if !(-180.0..=180.0).contains(&fix.longitude) {
        return Err(CardValidationError::InvalidValue {
            field: "location.longitude".to_string(),
            value: fix.longitude.to_string(),
            reason: "must lie in [-180, 180]".to_string(),
        });
    }
    if let Some(acc) = fix.accuracy_m
        && !(acc.is_finite() && acc >= 0.0)
    {
        return Err(CardValidationError::InvalidValue {
            field: "location.accuracy_m".to_string(),
            value: acc.to_string(),
            reason: "must be a non-negative distance".to_string(),
        });
    }
    Ok(())
}

fn validate_photo(idx: usize, photo: &PhotoRef) -> Result<(), CardValidationError> {
    if photo.path.trim().is_empty() {
        return Err(CardValidationError::MissingField {
            field: format!("photos[{}].path", idx),
        });
    }
    for annotation in &photo.annotations {
        if let Some(marker) = annotation.marker {
            let in_frame = (0.0..=1.0).contains(&marker.x) && (0.0..=1.0).contains(&marker.y);
            if !in_frame {
                return Err(CardValidationError::InvalidValue {
                    field: format!("photos[{}].annotations.marker", idx),
                    value: format!("({}, {})", marker.x, marker.y),
                    reason: "marker must lie within the image (0..=1)".to_string(),
                });
            }
        }
    }
    Ok(())
}
