//! A [`FixedIndexGrid`] backed by a [`TaffyTree`]
//!
//! The grid is a single root node with `display: grid`. Slots become entries
//! of `grid-template-columns` / `grid-template-rows` and every hosted element
//! is a child node whose `grid-column` / `grid-row` lines are rewritten
//! whenever the panel publishes a placement.

use std::collections::HashMap;

use named_grid::{
    Axis, ElementId, FixedIndexGrid, GridLength, LayoutSize, NamedGridError, NamedGridResult,
    Placement, SlotSpec,
};
use taffy::prelude::*;
use taffy::{GridTemplateComponent, Layout, TaffyError, TaffyTree};
use thiserror::Error;

use crate::convert;

/// Error types for Taffy backed grid operations
#[derive(Error, Debug)]
pub enum TaffyGridError {
    #[error("Taffy tree operation failed: {0}")]
    Tree(#[from] TaffyError),

    #[error("Element {0:?} is not attached to the grid")]
    UnknownElement(ElementId),

    #[error("{axis} track {index} out of bounds for track count {count}")]
    TrackOutOfBounds {
        axis: Axis,
        index: usize,
        count: usize,
    },
}

/// Result type for Taffy backed grid operations
pub type TaffyGridResult<T> = Result<T, TaffyGridError>;

fn backend(operation: &'static str) -> impl FnOnce(TaffyGridError) -> NamedGridError {
    move |error| NamedGridError::backend(operation, error)
}

pub struct TaffyGrid {
    tree: TaffyTree<()>,
    root: NodeId,
    columns: Vec<SlotSpec>,
    rows: Vec<SlotSpec>,
    elements: HashMap<ElementId, NodeId>,
}

impl TaffyGrid {
    pub fn new() -> TaffyGridResult<Self> {
        let mut tree = TaffyTree::new();
        let root = tree.new_leaf(Style {
            display: Display::Grid,
            ..Default::default()
        })?;

        Ok(Self {
            tree,
            root,
            columns: Vec::new(),
            rows: Vec::new(),
            elements: HashMap::new(),
        })
    }

    pub fn tree(&self) -> &TaffyTree<()> {
        &self.tree
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn slots(&self, axis: Axis) -> &[SlotSpec] {
        match axis {
            Axis::Column => &self.columns,
            Axis::Row => &self.rows,
        }
    }

    /// The Taffy node hosting `element`.
    pub fn element_node(&self, element: ElementId) -> TaffyGridResult<NodeId> {
        self.elements
            .get(&element)
            .copied()
            .ok_or(TaffyGridError::UnknownElement(element))
    }

    /// Final layout of `element` relative to the grid, valid after
    /// [`arrange`](FixedIndexGrid::arrange).
    pub fn element_layout(&self, element: ElementId) -> TaffyGridResult<&Layout> {
        let node = self.element_node(element)?;
        Ok(self.tree.layout(node)?)
    }

    /// Final layout of the grid itself.
    pub fn layout(&self) -> TaffyGridResult<&Layout> {
        Ok(self.tree.layout(self.root)?)
    }

    /// Replace the style of `element`'s node. Its grid lines are kept.
    pub fn set_element_style(&mut self, element: ElementId, mut style: Style) -> TaffyGridResult<()> {
        let node = self.element_node(element)?;
        let current = self.tree.style(node)?;
        style.grid_column = current.grid_column.clone();
        style.grid_row = current.grid_row.clone();
        self.tree.set_style(node, style)?;
        Ok(())
    }

    /// Gap between adjacent tracks of `axis`.
    pub fn set_gap(&mut self, axis: Axis, gap: f32) -> TaffyGridResult<()> {
        let mut style = self.tree.style(self.root)?.clone();
        match axis {
            Axis::Column => style.gap.width = LengthPercentage::from_length(gap),
            Axis::Row => style.gap.height = LengthPercentage::from_length(gap),
        }
        self.tree.set_style(self.root, style)?;
        Ok(())
    }

    fn slots_mut(&mut self, axis: Axis) -> &mut Vec<SlotSpec> {
        match axis {
            Axis::Column => &mut self.columns,
            Axis::Row => &mut self.rows,
        }
    }

    fn update_slot(
        &mut self,
        axis: Axis,
        index: usize,
        update: impl FnOnce(&mut SlotSpec),
    ) -> TaffyGridResult<()> {
        let slots = self.slots_mut(axis);
        let count = slots.len();
        let slot = slots
            .get_mut(index)
            .ok_or(TaffyGridError::TrackOutOfBounds { axis, index, count })?;
        update(slot);
        self.sync_template(axis)
    }

    // Rewrite the root's track list for `axis` from the slot specs.
    fn sync_template(&mut self, axis: Axis) -> TaffyGridResult<()> {
        let mut style = self.tree.style(self.root)?.clone();
        let tracks = self
            .slots(axis)
            .iter()
            .map(|slot| GridTemplateComponent::Single(convert::track_sizing(slot)))
            .collect();
        match axis {
            Axis::Column => style.grid_template_columns = tracks,
            Axis::Row => style.grid_template_rows = tracks,
        }
        self.tree.set_style(self.root, style)?;
        Ok(())
    }

    fn set_root_size(&mut self, size: Size<Dimension>) -> TaffyGridResult<()> {
        let mut style = self.tree.style(self.root)?.clone();
        style.size = size;
        self.tree.set_style(self.root, style)?;
        Ok(())
    }

    fn try_insert_slot(&mut self, axis: Axis, index: usize) -> TaffyGridResult<()> {
        let slots = self.slots_mut(axis);
        let count = slots.len();
        if index > count {
            return Err(TaffyGridError::TrackOutOfBounds { axis, index, count });
        }
        slots.insert(index, SlotSpec::default());
        self.sync_template(axis)
    }

    fn try_remove_slot(&mut self, axis: Axis, index: usize) -> TaffyGridResult<()> {
        let slots = self.slots_mut(axis);
        let count = slots.len();
        if index >= count {
            return Err(TaffyGridError::TrackOutOfBounds { axis, index, count });
        }
        slots.remove(index);
        self.sync_template(axis)
    }

    fn try_attach(&mut self, element: ElementId) -> TaffyGridResult<()> {
        if self.elements.contains_key(&element) {
            return Ok(());
        }
        let node = self.tree.new_leaf(Style {
            grid_column: convert::grid_placement(Placement::ORIGIN),
            grid_row: convert::grid_placement(Placement::ORIGIN),
            ..Default::default()
        })?;
        self.tree.add_child(self.root, node)?;
        self.elements.insert(element, node);
        Ok(())
    }

    fn try_detach(&mut self, element: ElementId) -> TaffyGridResult<()> {
        if let Some(node) = self.elements.remove(&element) {
            self.tree.remove(node)?;
        }
        Ok(())
    }

    fn try_place(
        &mut self,
        element: ElementId,
        axis: Axis,
        placement: Placement,
    ) -> TaffyGridResult<()> {
        let node = self.element_node(element)?;
        let mut style = self.tree.style(node)?.clone();
        let lines = convert::grid_placement(placement);
        match axis {
            Axis::Column => style.grid_column = lines,
            Axis::Row => style.grid_row = lines,
        }
        self.tree.set_style(node, style)?;
        Ok(())
    }

    fn try_measure(&mut self, available: LayoutSize) -> TaffyGridResult<LayoutSize> {
        self.set_root_size(Size {
            width: Dimension::AUTO,
            height: Dimension::AUTO,
        })?;
        self.tree.compute_layout(
            self.root,
            Size {
                width: convert::available_space(available.width),
                height: convert::available_space(available.height),
            },
        )?;
        let size = self.tree.layout(self.root)?.size;

        tracing::debug!(
            "Measured grid at {}x{} within {}x{}",
            size.width,
            size.height,
            available.width,
            available.height
        );

        Ok(LayoutSize::new(size.width, size.height))
    }

    fn try_arrange(&mut self, final_size: LayoutSize) -> TaffyGridResult<()> {
        self.set_root_size(Size {
            width: Dimension::from_length(final_size.width),
            height: Dimension::from_length(final_size.height),
        })?;
        self.tree.compute_layout(
            self.root,
            Size {
                width: AvailableSpace::Definite(final_size.width),
                height: AvailableSpace::Definite(final_size.height),
            },
        )?;

        tracing::debug!(
            "Arranged grid with {} columns, {} rows and {} elements at {}x{}",
            self.columns.len(),
            self.rows.len(),
            self.elements.len(),
            final_size.width,
            final_size.height
        );

        Ok(())
    }
}

impl FixedIndexGrid for TaffyGrid {
    fn insert_slot(&mut self, axis: Axis, index: usize) -> NamedGridResult<()> {
        self.try_insert_slot(axis, index).map_err(backend("insert_slot"))
    }

    fn remove_slot(&mut self, axis: Axis, index: usize) -> NamedGridResult<()> {
        self.try_remove_slot(axis, index).map_err(backend("remove_slot"))
    }

    fn set_slot_size(&mut self, axis: Axis, index: usize, size: GridLength) -> NamedGridResult<()> {
        self.update_slot(axis, index, |slot| slot.size = size)
            .map_err(backend("set_slot_size"))
    }

    fn set_slot_min_size(
        &mut self,
        axis: Axis,
        index: usize,
        min_size: f32,
    ) -> NamedGridResult<()> {
        self.update_slot(axis, index, |slot| slot.min_size = min_size)
            .map_err(backend("set_slot_min_size"))
    }

    fn set_slot_max_size(
        &mut self,
        axis: Axis,
        index: usize,
        max_size: f32,
    ) -> NamedGridResult<()> {
        self.update_slot(axis, index, |slot| slot.max_size = max_size)
            .map_err(backend("set_slot_max_size"))
    }

    // Recorded only: Taffy has no notion of size sharing across grids.
    fn set_slot_shared_size_group(
        &mut self,
        axis: Axis,
        index: usize,
        group: Option<String>,
    ) -> NamedGridResult<()> {
        self.update_slot(axis, index, |slot| slot.shared_size_group = group)
            .map_err(backend("set_slot_shared_size_group"))
    }

    fn attach_element(&mut self, element: ElementId) -> NamedGridResult<()> {
        self.try_attach(element).map_err(backend("attach_element"))
    }

    fn detach_element(&mut self, element: ElementId) -> NamedGridResult<()> {
        self.try_detach(element).map_err(backend("detach_element"))
    }

    fn set_element_placement(
        &mut self,
        element: ElementId,
        axis: Axis,
        placement: Placement,
    ) -> NamedGridResult<()> {
        self.try_place(element, axis, placement)
            .map_err(backend("set_element_placement"))
    }

    fn measure(&mut self, available: LayoutSize) -> NamedGridResult<LayoutSize> {
        self.try_measure(available).map_err(backend("measure"))
    }

    fn arrange(&mut self, final_size: LayoutSize) -> NamedGridResult<()> {
        self.try_arrange(final_size).map_err(backend("arrange"))
    }
}
