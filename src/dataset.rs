/*! Labeled record collection

[Dataset] is an ordered, write-once sequence of rows. For this corpus rows are [Example]s.
!*/
use std::io::Write;
use std::ops::Index;

use serde::Serialize;

use crate::error::Error;

/// One review: its sentiment label and normalized, non-empty text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Example {
    label: String,
    text: String,
}

impl Example {
    pub fn new(label: String, text: String) -> Self {
        Self { label, text }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset<T> {
    rows: Vec<T>,
}

impl<T> Dataset<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&T> {
        self.rows.get(idx)
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.rows
    }
}

impl<T: Serialize> Dataset<T> {
    /// Write rows as JSON lines.
    pub fn write_jsonl<W: Write>(&self, mut w: W) -> Result<(), Error> {
        for row in &self.rows {
            serde_json::to_writer(&mut w, row)?;
            w.write_all(b"\n")?;
        }
        w.flush()?;
        Ok(())
    }
}

impl<T> From<Vec<T>> for Dataset<T> {
    fn from(rows: Vec<T>) -> Self {
        Self::new(rows)
    }
}

impl<T> Index<usize> for Dataset<T> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        &self.rows[idx]
    }
}

impl<'a, T> IntoIterator for &'a Dataset<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl<T> IntoIterator for Dataset<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}
