//! Shared application service layer for the field-card toolkit.
//!
//! This crate gives the CLI (and any other front end) one interface for
//! form parsing, configuration, the card lifecycle, and report output.
//! Storage is always passed in as a [`fc_store::CardRepository`].

pub mod card_service;
pub mod config_service;
pub mod error;
pub mod form;
pub mod report;

// Re-export key types for convenience
pub use card_service::{
    NewCard, add_note, attach_photo, attach_wtp, calculate, create_card, delete_card, get_card,
    list_cards, set_location,
};
pub use config_service::{load_config, load_engine, parse_config};
pub use error::{AppError, AppResult};
pub use form::{AreaBasedForm, CaliforniaForm, ClimateForm, parse_list, parse_number};
pub use report::{ReportOptions, render_text_report, write_text_report};
