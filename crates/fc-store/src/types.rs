//! Listing types.

use fc_project::FieldCard;
use fc_sizing::CalculationMethod;
use serde::{Deserialize, Serialize};

pub type CardId = String;

/// One row of the saved-cards list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardSummary {
    pub id: CardId,
    pub title: String,
    pub created_at: String,
    pub method: CalculationMethod,
    pub final_size_mm: u32,
    pub requires_professional_design: bool,
    pub photo_count: usize,
}

impl From<&FieldCard> for CardSummary {
    fn from(card: &FieldCard) -> Self {
        Self {
            id: card.id.clone(),
            title: card.title.clone(),
            created_at: card.created_at.clone(),
            method: card.result.method(),
            final_size_mm: card.result.final_size_mm,
            requires_professional_design: card.result.requires_professional_design,
            photo_count: card.photos.len(),
        }
    }
}

/// Oldest first, ties broken by id so listings are stable.
pub(crate) fn sort_summaries(summaries: &mut [CardSummary]) {
    summaries.sort_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}
