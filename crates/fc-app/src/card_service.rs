//! Field card lifecycle: form -> engine -> store.

use chrono::{SecondsFormat, Utc};
use fc_project::{
    FieldCard, FieldNote, GpsFix, LATEST_VERSION, MeasurementSet, PhotoRef, SiteInfo,
};
use fc_sizing::{CulvertSizingEngine, SizingResult, WtpAssessment};
use fc_store::{CardRepository, CardSummary};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Everything needed to create a card except its result.
#[derive(Debug, Clone)]
pub struct NewCard {
    pub title: String,
    pub site: SiteInfo,
    pub location: Option<GpsFix>,
    pub measurements: MeasurementSet,
    pub wtp: Option<WtpAssessment>,
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Run the engine without persisting anything.
pub fn calculate(
    engine: &CulvertSizingEngine,
    measurements: &MeasurementSet,
) -> AppResult<SizingResult> {
    Ok(engine.size(
        measurements.as_sizing_method(),
        measurements.climate_projection_factor,
    )?)
}

/// Size the measurements and save them as a new card with a fresh id.
pub fn create_card(
    repo: &dyn CardRepository,
    engine: &CulvertSizingEngine,
    new_card: NewCard,
) -> AppResult<FieldCard> {
    let result = calculate(engine, &new_card.measurements)?;
    let now = now_rfc3339();

    let card = FieldCard {
        version: LATEST_VERSION,
        id: Uuid::new_v4().to_string(),
        title: new_card.title,
        created_at: now.clone(),
        updated_at: now,
        site: new_card.site,
        location: new_card.location,
        measurements: new_card.measurements,
        result,
        wtp: new_card.wtp,
        notes: Vec::new(),
        photos: Vec::new(),
    };

    repo.save(&card)?;
    tracing::info!(
        card_id = %card.id,
        method = %card.result.method(),
        final_size_mm = card.result.final_size_mm,
        professional = card.result.requires_professional_design,
        "created field card"
    );
    Ok(card)
}

/// Edit a card under the store's per-card lock, bumping `updated_at`.
fn update_card(
    repo: &dyn CardRepository,
    card_id: &str,
    edit: impl FnOnce(&mut FieldCard),
) -> AppResult<FieldCard> {
    let mut edit = Some(edit);
    let updated_at = now_rfc3339();
    let card = repo.update(card_id, &mut |card: &mut FieldCard| {
        if let Some(edit) = edit.take() {
            edit(card);
        }
        card.updated_at = updated_at.clone();
    })?;
    Ok(card)
}

pub fn add_note(repo: &dyn CardRepository, card_id: &str, text: &str) -> AppResult<FieldCard> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::InvalidInput {
            field: "note".to_string(),
            value: String::new(),
            reason: "note text is empty".to_string(),
        });
    }
    let card = update_card(repo, card_id, |card| {
        card.notes.push(FieldNote {
            created_at: now_rfc3339(),
            text: text.to_string(),
        });
    })?;
    tracing::debug!(card_id, notes = card.notes.len(), "added note");
    Ok(card)
}

pub fn attach_photo(
    repo: &dyn CardRepository,
    card_id: &str,
    photo: PhotoRef,
) -> AppResult<FieldCard> {
    let card = update_card(repo, card_id, |card| {
        card.photos.push(photo);
    })?;
    tracing::debug!(card_id, photos = card.photos.len(), "attached photo");
    Ok(card)
}

pub fn set_location(repo: &dyn CardRepository, card_id: &str, fix: GpsFix) -> AppResult<FieldCard> {
    update_card(repo, card_id, |card| {
        card.location = Some(fix);
    })
}

pub fn attach_wtp(
    repo: &dyn CardRepository,
    card_id: &str,
    assessment: WtpAssessment,
) -> AppResult<FieldCard> {
    update_card(repo, card_id, |card| {
        card.wtp = Some(assessment);
    })
}

pub fn list_cards(repo: &dyn CardRepository) -> AppResult<Vec<CardSummary>> {
    Ok(repo.list()?)
}

pub fn get_card(repo: &dyn CardRepository, card_id: &str) -> AppResult<FieldCard> {
    Ok(repo.load(card_id)?)
}

pub fn delete_card(repo: &dyn CardRepository, card_id: &str) -> AppResult<()> {
    if !repo.exists(card_id)? {
        return Err(AppError::CardNotFound(card_id.to_string()));
    }
    repo.delete(card_id)?;
    tracing::info!(card_id, "deleted field card");
    Ok(())
}
