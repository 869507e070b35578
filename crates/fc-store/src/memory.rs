//! In-memory card storage for tests and previews.

use crate::traits::CardRepository;
use crate::types::{CardSummary, sort_summaries};
use crate::{StoreError, StoreResult};
use fc_project::{FieldCard, validate_card};
use std::collections::BTreeMap;
use std::sync::RwLock;

#[derive(Default)]
pub struct MemoryCardStore {
    cards: RwLock<BTreeMap<String, FieldCard>>,
}

impl MemoryCardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.read().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CardRepository for MemoryCardStore {
    fn save(&self, card: &FieldCard) -> StoreResult<()> {
        validate_card(card).map_err(fc_project::ProjectError::from)?;
        let mut cards = self.cards.write().map_err(|_| StoreError::Poisoned)?;
        cards.insert(card.id.clone(), card.clone());
        Ok(())
    }

    fn load(&self, id: &str) -> StoreResult<FieldCard> {
        let cards = self.cards.read().map_err(|_| StoreError::Poisoned)?;
        cards.get(id).cloned().ok_or_else(|| StoreError::CardNotFound {
            card_id: id.to_string(),
        })
    }

    fn update(
        &self,
        id: &str,
        edit: &mut dyn FnMut(&mut FieldCard),
    ) -> StoreResult<FieldCard> {
        let mut cards = self.cards.write().map_err(|_| StoreError::Poisoned)?;
        let mut card = cards
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::CardNotFound {
                card_id: id.to_string(),
            })?;
        edit(&mut card);
        if card.id != id {
            return Err(StoreError::InvalidId { id: card.id });
        }
        validate_card(&card).map_err(fc_project::ProjectError::from)?;
        cards.insert(card.id.clone(), card.clone());
        Ok(card)
    }

    fn exists(&self, id: &str) -> StoreResult<bool> {
        let cards = self.cards.read().map_err(|_| StoreError::Poisoned)?;
        Ok(cards.contains_key(id))
    }

    fn list(&self) -> StoreResult<Vec<CardSummary>> {
        let cards = self.cards.read().map_err(|_| StoreError::Poisoned)?;
        let mut summaries: Vec<CardSummary> = cards.values().map(CardSummary::from).collect();
        sort_summaries(&mut summaries);
        Ok(summaries)
    }

    fn delete(&self, id: &str) -> StoreResult<()> {
        let mut cards = self.cards.write().map_err(|_| StoreError::Poisoned)?;
        cards.remove(id);
        Ok(())
    }
}
