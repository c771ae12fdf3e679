//! Tabular view of an iteration trace.

use serde::Serialize;

/// Header row plus formatted rows, one per iteration (or per unknown for
/// the direct linear solvers).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IterationTable {
    pub header: Vec<String>,
    pub rows:   Vec<Vec<String>>,
}

impl IterationTable {
    pub fn new<S: Into<String>>(header: impl IntoIterator<Item = S>) -> Self {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows:   Vec::new(),
        }
    }

    /// Appends a row. Rows are expected to have the header's width.
    pub fn push_row(&mut self, cells: Vec<String>) {
        debug_assert_eq!(cells.len(), self.header.len());
        self.rows.push(cells);
    }

    pub fn width(&self) -> usize { self.header.len() }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}
