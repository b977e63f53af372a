//! Record Manager Core Library
//!
//! Provides the state behind the record form:
//! - Validators for name, email and phone
//! - Draft fields with per-field error slots
//! - Record store with an edit cursor
//! - Per-row inline edit buffer
//! - Submission state machine (`RecordForm`)
//!
//! Everything here is synchronous and UI-agnostic; the terminal front end
//! drives it from its event loop.

pub mod editor;
pub mod error;
pub mod form;
pub mod store;
pub mod types;
pub mod validation;

// Re-export common types
pub use editor::RowEditBuffer;
pub use error::{CoreError, CoreResult, ValidationError};
pub use form::{FormMode, RecordForm, SubmitOutcome, SubmitReport};
pub use store::RecordStore;
pub use types::{DraftFields, Field, FieldErrors, Gender, Record, SubmitPolicy};
