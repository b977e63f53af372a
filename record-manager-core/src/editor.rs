//! Per-row inline editor
//!
//! Row-local inputs seeded from a record when edit mode begins. They are not
//! bound to the page-level draft; only the gender is taken from the draft on save.

use crate::types::{Field, Gender, Record};

/// Transient edit buffer for the record at `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowEditBuffer {
    index: usize,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl RowEditBuffer {
    /// Seed the buffer with the current values of `record`
    pub fn seed(index: usize, record: &Record) -> Self {
        Self {
            index,
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
        }
    }

    /// Position of the record being edited
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
        }
    }

    /// Replacement record: the buffer's text as-is plus the page-level gender
    pub fn to_record(&self, gender: Gender) -> Record {
        Record::new(&self.name, &self.email, &self.phone, gender)
    }
}
