//! A Taffy backed grid for the [`named-grid`](named_grid) placement engine
//!
//! [`TaffyGrid`] implements [`FixedIndexGrid`](named_grid::FixedIndexGrid) on
//! top of a [`taffy::TaffyTree`], so a [`NamedGridPanel`](named_grid::NamedGridPanel)
//! can be measured and arranged with Taffy's CSS grid algorithm.

pub mod convert;
mod grid;

#[doc(inline)]
pub use convert::{available_space, grid_placement, track_sizing};
pub use grid::{TaffyGrid, TaffyGridError, TaffyGridResult};
