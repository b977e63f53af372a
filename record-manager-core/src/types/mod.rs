//! Type definitions shared by the form and the record store

mod draft;
mod record;

pub use draft::{DraftFields, Field, FieldErrors, SubmitPolicy};
pub use record::{Gender, Record};
