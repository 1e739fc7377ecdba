//! One ordered collection of records.
//!
//! Rows keep insertion order. Updates replace a row in place, so a record
//! never moves. Everything handed out is a clone.

use agri_core::Record;

#[derive(Debug, Clone)]
pub(crate) struct Table<T> {
    rows: Vec<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Table { rows: Vec::new() }
    }
}

impl<T: Record> Table<T> {
    pub(crate) fn from_rows(rows: Vec<T>) -> Self {
        Table { rows }
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    /// Copy of every row, in order.
    pub(crate) fn snapshot(&self) -> Vec<T> {
        self.rows.clone()
    }

    pub(crate) fn find(&self, id: &str) -> Option<T> {
        self.rows.iter().find(|row| row.id() == id).cloned()
    }

    pub(crate) fn contains(&self, id: &str) -> bool {
        self.rows.iter().any(|row| row.id() == id)
    }

    pub(crate) fn push(&mut self, row: T) {
        self.rows.push(row);
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.rows.iter_mut().find(|row| row.id() == id)
    }

    /// Removes the row with `id`, keeping the order of the rest.
    pub(crate) fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.rows.iter().position(|row| row.id() == id)?;
        Some(self.rows.remove(index))
    }
}
