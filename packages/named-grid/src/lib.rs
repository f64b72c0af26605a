//! A grid layout panel addressed by names instead of indices
//!
//! Columns and rows are described by ordered definition lists. A
//! [`PhysicalDefinition`] owns one track of an underlying fixed-index grid; a
//! [`VirtualDefinition`] owns no space and aliases one name, or the range
//! between two names. Elements are placed by naming a start and an optional
//! extend-to column and row, and the panel translates those names into the
//! start index and span the underlying grid understands.
//!
//! The panel never sizes tracks itself. It keeps a [`FixedIndexGrid`] in sync
//! with the definitions and the elements' placements, and delegates measure and
//! arrange to it. [`HeadlessGrid`] records everything in memory; the
//! `named_grid_taffy` crate provides a grid backed by [taffy](https://docs.rs/taffy).
//!
//! ```
//! use named_grid::{Definition, HeadlessGrid, NamedGridPanel, PlacedElement, Axis, Placement};
//!
//! let mut panel = NamedGridPanel::new(HeadlessGrid::new());
//! let mut columns = panel.columns_mut();
//! columns.push(Definition::physical("Left")).unwrap();
//! columns.push(Definition::physical("Center")).unwrap();
//! columns.push(Definition::physical("Right")).unwrap();
//!
//! let id = panel
//!     .add_child(PlacedElement::new().with_column("Left").with_extend_to_column("Right"))
//!     .unwrap();
//! assert_eq!(
//!     panel.grid().placement(id, Axis::Column),
//!     Some(Placement { index: 0, span: 3 })
//! );
//! ```

// ## Feature flags
//  - `default`: Enables the features listed below.
//  - `tracing`: Enables tracing support.

pub mod axis;
mod config;
pub mod definition;
pub mod element;
mod error;
/// The underlying fixed-index grid and an in-memory implementation of it.
pub mod grid;
pub mod length;
pub mod list;
mod panel;
pub mod placement;
pub mod registry;
pub mod resolver;
pub mod source;

pub use axis::Axis;
pub use config::{AliasCyclePolicy, PanelConfig};
pub use definition::{
    Definition, DefinitionProperty, PhysicalDefinition, PropertyChange, VirtualDefinition,
};
pub use element::{ElementId, NamePair, PlacedElement};
pub use error::{NamedGridError, NamedGridResult};
pub use grid::{FixedIndexGrid, HeadlessGrid, LayoutSize, SlotSpec};
pub use length::{GridLength, GridLengthParseError};
pub use list::DefinitionList;
pub use panel::{AxisEditor, NamedGridPanel};
pub use placement::{Placement, resolve_placement};
pub use registry::{DefinitionRegistry, RegistryMaps};
pub use resolver::{GridRange, RangeResolver};
pub use source::{DefinitionSource, ObservableDefinitions, SourceItem};
