//! Record form: the submission state machine
//!
//! Owns the page-level draft, its error slots, the record store and the
//! per-row edit buffer. Two data paths write records:
//!
//! - `submit` builds a record from the draft (append while creating,
//!   replace while editing)
//! - `save_row` builds a record from the row edit buffer plus the draft gender

use log::{debug, warn};

use crate::editor::RowEditBuffer;
use crate::error::{CoreError, CoreResult};
use crate::store::RecordStore;
use crate::types::{DraftFields, Field, FieldErrors, Gender, Record, SubmitPolicy};
use crate::validation::validate_field;

/// Which state the form is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Edit cursor is empty; submit appends
    Creating,
    /// Record at this index is being edited; submit replaces it
    Editing(usize),
}

/// Store mutation performed by `submit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new record was appended at this index
    Created(usize),
    /// The record at this index was replaced
    Updated(usize),
    /// Validation failed and the policy blocked the write
    Rejected,
}

/// Result of a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitReport {
    pub outcome: SubmitOutcome,
    /// Whether the "Missing Values" alert should be raised
    pub missing_values: bool,
}

/// State of one mounted record form.
#[derive(Debug, Clone, Default)]
pub struct RecordForm {
    draft: DraftFields,
    errors: FieldErrors,
    store: RecordStore,
    row_editor: Option<RowEditBuffer>,
    policy: SubmitPolicy,
}

impl RecordForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: SubmitPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    // ========== Accessors ==========

    pub fn draft(&self) -> &DraftFields {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn records(&self) -> &[Record] {
        self.store.records()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn row_editor(&self) -> Option<&RowEditBuffer> {
        self.row_editor.as_ref()
    }

    pub fn policy(&self) -> SubmitPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: SubmitPolicy) {
        self.policy = policy;
    }

    pub fn mode(&self) -> FormMode {
        match self.store.edit_cursor() {
            Some(index) => FormMode::Editing(index),
            None => FormMode::Creating,
        }
    }

    /// Label of the submit button
    pub fn submit_label(&self) -> &'static str {
        match self.mode() {
            FormMode::Creating => "Submit",
            FormMode::Editing(_) => "Update",
        }
    }

    // ========== Draft input ==========

    /// Replace a draft field and re-validate it
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.draft.get_mut(field) = value.into();
        self.revalidate(field);
    }

    /// Type one character into a draft field
    pub fn push_char(&mut self, field: Field, ch: char) {
        self.draft.get_mut(field).push(ch);
        self.revalidate(field);
    }

    /// Delete the last character of a draft field
    pub fn pop_char(&mut self, field: Field) {
        self.draft.get_mut(field).pop();
        self.revalidate(field);
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.draft.gender = gender;
    }

    pub fn toggle_gender(&mut self) {
        self.draft.gender = self.draft.gender.toggle();
    }

    fn revalidate(&mut self, field: Field) {
        let result = validate_field(field, self.draft.get(field));
        self.errors.set(field, result);
    }

    /// Re-run every validator against the draft. Returns `true` when all pass.
    pub fn validate_all(&mut self) -> bool {
        for &field in Field::all() {
            self.revalidate(field);
        }
        !self.errors.has_any()
    }

    // ========== Transitions ==========

    /// Submit the draft.
    ///
    /// With [`SubmitPolicy::AlertAndProceed`] a failed validation only sets
    /// `missing_values`; the write still happens.
    pub fn submit(&mut self) -> CoreResult<SubmitReport> {
        let missing_values = !self.validate_all();
        if missing_values {
            warn!("Submit with invalid fields: {:?}", self.errors);
            if self.policy == SubmitPolicy::BlockOnErrors {
                return Ok(SubmitReport {
                    outcome: SubmitOutcome::Rejected,
                    missing_values,
                });
            }
        }

        let outcome = match self.mode() {
            FormMode::Editing(index) => {
                self.store.replace(index, self.draft.to_record())?;
                self.store.end_edit();
                self.row_editor = None;
                debug!("Updated record {index} from draft");
                SubmitOutcome::Updated(index)
            }
            FormMode::Creating => {
                let mut record = self.draft.to_record();
                record.email = record.email.to_lowercase();
                let index = self.store.append(record);
                // error slots from this submit stay visible over the empty draft
                self.draft.reset();
                debug!("Created record {index}");
                SubmitOutcome::Created(index)
            }
        };

        Ok(SubmitReport {
            outcome,
            missing_values,
        })
    }

    /// Put record `index` in edit mode and seed the row editor from it
    pub fn begin_edit(&mut self, index: usize) -> CoreResult<()> {
        let record = self
            .store
            .get(index)
            .ok_or(CoreError::RecordNotFound(index))?;
        self.row_editor = Some(RowEditBuffer::seed(index, record));
        self.store.begin_edit(index)?;
        debug!("Editing record {index}");
        Ok(())
    }

    /// Leave edit mode without writing anything
    pub fn cancel_edit(&mut self) {
        self.store.end_edit();
        self.row_editor = None;
    }

    /// Mutable row-editor buffer of the record being edited
    pub fn row_editor_mut(&mut self) -> CoreResult<&mut RowEditBuffer> {
        self.row_editor.as_mut().ok_or(CoreError::NotEditing)
    }

    /// Write the row editor's values (with the draft gender) back to its record
    pub fn save_row(&mut self) -> CoreResult<usize> {
        let buffer = self.row_editor.as_ref().ok_or(CoreError::NotEditing)?;
        let index = buffer.index();
        self.store.replace(index, buffer.to_record(self.draft.gender))?;
        self.store.end_edit();
        self.row_editor = None;
        debug!("Saved record {index} from row editor");
        Ok(index)
    }

    /// Remove record `index`. Clears any active edit.
    pub fn delete(&mut self, index: usize) -> CoreResult<Record> {
        let removed = self.store.delete(index)?;
        self.row_editor = None;
        debug!("Deleted record {index}");
        Ok(removed)
    }
}
