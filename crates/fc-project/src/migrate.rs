//! Schema migration framework.

use crate::ProjectError;
use crate::schema::FieldCard;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut card: FieldCard) -> Result<FieldCard, ProjectError> {
    while card.version < LATEST_VERSION {
        card = migrate_one_version(card)?;
    }
    Ok(card)
}

fn migrate_one_version(card: FieldCard) -> Result<FieldCard, ProjectError> {
    match card.version {
        0 => migrate_v0_to_v1(card),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

/// Version 0 cards had no modification timestamp.
fn migrate_v0_to_v1(mut card: FieldCard) -> Result<FieldCard, ProjectError> {
    if card.updated_at.trim().is_empty() {
        card.updated_at = card.created_at.clone();
    }
    card.version = 1;
    Ok(card)
}
