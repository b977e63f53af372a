//! Record store: the ordered list of submitted records plus the edit cursor

use crate::error::{CoreError, CoreResult};
use crate::types::Record;

/// Ordered records, addressed by index.
///
/// At most one record is in edit mode; `edit_cursor` is `None` otherwise.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    edit_cursor: Option<usize>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the record being edited, if any
    pub fn edit_cursor(&self) -> Option<usize> {
        self.edit_cursor
    }

    /// Append a record, returning its index
    pub fn append(&mut self, record: Record) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    /// Replace the record at `index` wholesale
    pub fn replace(&mut self, index: usize, record: Record) -> CoreResult<()> {
        let slot = self
            .records
            .get_mut(index)
            .ok_or(CoreError::RecordNotFound(index))?;
        *slot = record;
        Ok(())
    }

    /// Remove the record at `index`; later records shift down by one.
    /// Any active edit cursor is cleared.
    pub fn delete(&mut self, index: usize) -> CoreResult<Record> {
        if index >= self.records.len() {
            return Err(CoreError::RecordNotFound(index));
        }
        self.edit_cursor = None;
        Ok(self.records.remove(index))
    }

    /// Put the record at `index` in edit mode
    pub fn begin_edit(&mut self, index: usize) -> CoreResult<()> {
        if index >= self.records.len() {
            return Err(CoreError::RecordNotFound(index));
        }
        self.edit_cursor = Some(index);
        Ok(())
    }

    /// Leave edit mode
    pub fn end_edit(&mut self) {
        self.edit_cursor = None;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::Gender;

    fn record(name: &str) -> Record {
        Record::new(name, format!("{}@x.com", name.to_lowercase()), "12345678901", Gender::Male)
    }

    fn store_with(names: &[&str]) -> RecordStore {
        let mut store = RecordStore::new();
        for name in names {
            store.append(record(name));
        }
        store
    }

    #[test]
    fn append_returns_position() {
        let mut store = RecordStore::new();
        assert_eq!(store.append(record("A")), 0);
        assert_eq!(store.append(record("B")), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn delete_shifts_later_records_down() {
        let mut store = store_with(&["A", "B", "C", "D"]);
        let removed = store.delete(1).unwrap();
        assert_eq!(removed.name, "B");

        let names: Vec<&str> = store.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["A", "C", "D"]);
    }

    #[test]
    fn delete_clears_edit_cursor() {
        let mut store = store_with(&["A", "B", "C"]);
        store.begin_edit(2).unwrap();
        store.delete(0).unwrap();
        assert_eq!(store.edit_cursor(), None);
    }

    #[test]
    fn out_of_range_indices_are_errors() {
        let mut store = store_with(&["A"]);
        assert_eq!(store.delete(1), Err(CoreError::RecordNotFound(1)));
        assert_eq!(store.begin_edit(5), Err(CoreError::RecordNotFound(5)));
        assert_eq!(store.replace(1, record("Z")), Err(CoreError::RecordNotFound(1)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn only_one_record_in_edit_mode() {
        let mut store = store_with(&["A", "B"]);
        store.begin_edit(0).unwrap();
        store.begin_edit(1).unwrap();
        assert_eq!(store.edit_cursor(), Some(1));
        store.end_edit();
        assert_eq!(store.edit_cursor(), None);
    }
}
