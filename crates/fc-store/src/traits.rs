//! Storage port for field cards.

use crate::StoreResult;
use crate::types::CardSummary;
use fc_project::FieldCard;

/// Persistence for field cards keyed by card id.
///
/// Passed explicitly to the service layer; implementations must serialize
/// writes to the same card id.
pub trait CardRepository: Send + Sync {
    /// Insert or replace a card. The card is validated first.
    fn save(&self, card: &FieldCard) -> StoreResult<()>;

    /// Load a card, failing with `CardNotFound` when absent.
    fn load(&self, id: &str) -> StoreResult<FieldCard>;

    /// Load, edit and save one card while holding its write lock.
    ///
    /// Concurrent updates to the same id are applied one after another, so
    /// none is lost. The edited card is validated before it replaces the
    /// stored one.
    fn update(
        &self,
        id: &str,
        edit: &mut dyn FnMut(&mut FieldCard),
    ) -> StoreResult<FieldCard>;

    fn exists(&self, id: &str) -> StoreResult<bool>;

    /// Summaries of every stored card, oldest first.
    fn list(&self) -> StoreResult<Vec<CardSummary>>;

    /// Remove a card. Deleting a missing card is not an error.
    fn delete(&self, id: &str) -> StoreResult<()>;
}
