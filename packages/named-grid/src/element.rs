//! Elements hosted by the panel and their name assignments

use crate::axis::Axis;

/// Handle to an element hosted by a [`NamedGridPanel`](crate::NamedGridPanel).
///
/// Handles are slab keys and are reused after the element is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    pub(crate) fn new(key: usize) -> Self {
        Self(key)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for ElementId {
    fn from(key: usize) -> Self {
        Self(key)
    }
}

impl From<ElementId> for usize {
    fn from(id: ElementId) -> Self {
        id.0
    }
}

/// A start name and an optional extend-to name for one axis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamePair {
    pub start: Option<String>,
    pub extend_to: Option<String>,
}

impl NamePair {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            extend_to: None,
        }
    }

    pub fn spanning(start: impl Into<String>, extend_to: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            extend_to: Some(extend_to.into()),
        }
    }

    pub fn start(&self) -> Option<&str> {
        self.start.as_deref()
    }

    pub fn extend_to(&self) -> Option<&str> {
        self.extend_to.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.extend_to.is_none()
    }
}

/// A child of the panel, placed by column and row names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacedElement {
    columns: NamePair,
    rows: NamePair,
}

impl PlacedElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// An element occupying the cell at `column` and `row`.
    pub fn at(column: impl Into<String>, row: impl Into<String>) -> Self {
        Self {
            columns: NamePair::new(column),
            rows: NamePair::new(row),
        }
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.columns.start = Some(column.into());
        self
    }

    pub fn with_extend_to_column(mut self, column: impl Into<String>) -> Self {
        self.columns.extend_to = Some(column.into());
        self
    }

    pub fn with_row(mut self, row: impl Into<String>) -> Self {
        self.rows.start = Some(row.into());
        self
    }

    pub fn with_extend_to_row(mut self, row: impl Into<String>) -> Self {
        self.rows.extend_to = Some(row.into());
        self
    }

    pub fn column(&self) -> Option<&str> {
        self.columns.start()
    }

    pub fn extend_to_column(&self) -> Option<&str> {
        self.columns.extend_to()
    }

    pub fn row(&self) -> Option<&str> {
        self.rows.start()
    }

    pub fn extend_to_row(&self) -> Option<&str> {
        self.rows.extend_to()
    }

    /// The name pair used on `axis`.
    pub fn names(&self, axis: Axis) -> &NamePair {
        match axis {
            Axis::Column => &self.columns,
            Axis::Row => &self.rows,
        }
    }

    pub(crate) fn names_mut(&mut self, axis: Axis) -> &mut NamePair {
        match axis {
            Axis::Column => &mut self.columns,
            Axis::Row => &mut self.rows,
        }
    }
}
