//! Ordered list of indirect entries and the edits the user can make on it.
//!
//! Every operation works on a single `Vec<Entry>`, so label and duration of
//! a row always move together. Indices are 0-based; an out-of-range index
//! fails with `AppError::InvalidIndex` and leaves the list untouched.

use crate::errors::{AppError, AppResult};
use crate::models::entry::{Entry, normalize_label};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryList {
    entries: Vec<Entry>,
}

impl EntryList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// The initial rows: Lunch 60, Break 30.
    pub fn seeded() -> Self {
        Self::from_entries(vec![Entry::new("Lunch", "60"), Entry::new("Break", "30")])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Append an empty row and return its index.
    pub fn add(&mut self) -> usize {
        self.entries.push(Entry::default());
        self.entries.len() - 1
    }

    /// Replace the label at `index` (truncated, first character upper-cased).
    pub fn update_label(&mut self, index: usize, value: &str) -> AppResult<&Entry> {
        let entry = self.slot_mut(index)?;
        entry.label = normalize_label(value);
        Ok(entry)
    }

    /// Replace the raw duration at `index`; stored as entered.
    pub fn update_duration(&mut self, index: usize, value: &str) -> AppResult<&Entry> {
        let entry = self.slot_mut(index)?;
        entry.duration = value.to_string();
        Ok(entry)
    }

    pub fn delete(&mut self, index: usize) -> AppResult<Entry> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    /// Splice the row at `from` out and reinsert it at `to`.
    pub fn move_entry(&mut self, from: usize, to: usize) -> AppResult<()> {
        self.check_index(from)?;
        self.check_index(to)?;

        if from != to {
            let moved = self.entries.remove(from);
            self.entries.insert(to, moved);
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> AppResult<()> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(AppError::InvalidIndex {
                index,
                len: self.entries.len(),
            })
        }
    }

    fn slot_mut(&mut self, index: usize) -> AppResult<&mut Entry> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or(AppError::InvalidIndex { index, len })
    }
}

impl From<Vec<Entry>> for EntryList {
    fn from(entries: Vec<Entry>) -> Self {
        Self::from_entries(entries)
    }
}
