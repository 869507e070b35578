//! fc-store: field card persistence.

pub mod hash;
pub mod memory;
pub mod store;
pub mod traits;
pub mod types;

pub use hash::compute_fingerprint;
pub use memory::MemoryCardStore;
pub use store::FileCardStore;
pub use traits::CardRepository;
pub use types::*;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Card format error: {0}")]
    Project(#[from] fc_project::ProjectError),

    #[error("Card not found: {card_id}")]
    CardNotFound { card_id: String },

    #[error("Invalid card id: '{id}'")]
    InvalidId { id: String },

    #[error("Card store lock poisoned")]
    Poisoned,
}
