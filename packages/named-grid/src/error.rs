//! Error handling for the named grid engine
//!
//! Unresolvable names are deliberately not errors (they resolve to `[0, 0]`),
//! so everything here is caller-fixable misuse or a failure reported by the
//! underlying grid.

use thiserror::Error;

use crate::axis::Axis;
use crate::definition::DefinitionProperty;
use crate::element::ElementId;
use crate::length::GridLengthParseError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NamedGridError {
    #[error("Element {id:?} is not hosted by this panel")]
    UnknownElement { id: ElementId },

    #[error("The {axis} definitions are bound to an external source and cannot be mutated directly")]
    ReadOnlyList { axis: Axis },

    #[error("Name maps for the {axis} definitions have not been built")]
    MapsNotBuilt { axis: Axis },

    #[error("Index {index} out of range for definition list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Definition at position {index} has no {property:?} property")]
    PropertyMismatch {
        property: DefinitionProperty,
        index: usize,
    },

    #[error("Alias cycle while resolving {name:?}: {}", .chain.join(" -> "))]
    AliasCycle { name: String, chain: Vec<String> },

    #[error("Grid backend failed during {operation}: {reason}")]
    Backend { operation: String, reason: String },

    #[error(transparent)]
    InvalidLength(#[from] GridLengthParseError),
}

/// Result type alias for consistent error handling
pub type NamedGridResult<T> = Result<T, NamedGridError>;

impl NamedGridError {
    /// Create a backend failure with context
    pub fn backend(operation: impl Into<String>, reason: impl ToString) -> Self {
        Self::Backend {
            operation: operation.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}
