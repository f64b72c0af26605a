//! The underlying fixed-index grid
//!
//! The engine never sizes anything itself. It keeps an implementation of
//! [`FixedIndexGrid`] in sync with the definition lists (one slot per physical
//! definition) and tells it where each element sits, by integer index and
//! span. Measurement and arrangement are entirely the grid's business.

use std::collections::HashMap;

use crate::axis::Axis;
use crate::element::ElementId;
use crate::error::{NamedGridError, NamedGridResult};
use crate::length::GridLength;
use crate::placement::Placement;

/// Width and height in device independent pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutSize {
    pub width: f32,
    pub height: f32,
}

impl LayoutSize {
    pub const ZERO: LayoutSize = LayoutSize {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The extent along `axis`.
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Column => self.width,
            Axis::Row => self.height,
        }
    }
}

/// A conventional grid addressed by integer slot indices.
#[cfg_attr(test, mockall::automock)]
pub trait FixedIndexGrid {
    /// Insert a new slot so that it ends up at `index`.
    fn insert_slot(&mut self, axis: Axis, index: usize) -> NamedGridResult<()>;

    fn remove_slot(&mut self, axis: Axis, index: usize) -> NamedGridResult<()>;

    fn set_slot_size(&mut self, axis: Axis, index: usize, size: GridLength) -> NamedGridResult<()>;

    fn set_slot_min_size(&mut self, axis: Axis, index: usize, min_size: f32)
    -> NamedGridResult<()>;

    fn set_slot_max_size(&mut self, axis: Axis, index: usize, max_size: f32)
    -> NamedGridResult<()>;

    fn set_slot_shared_size_group(
        &mut self,
        axis: Axis,
        index: usize,
        group: Option<String>,
    ) -> NamedGridResult<()>;

    /// Start hosting `element`.
    fn attach_element(&mut self, element: ElementId) -> NamedGridResult<()>;

    fn detach_element(&mut self, element: ElementId) -> NamedGridResult<()>;

    fn set_element_placement(
        &mut self,
        element: ElementId,
        axis: Axis,
        placement: Placement,
    ) -> NamedGridResult<()>;

    /// Compute the desired size of the grid within `available`.
    fn measure(&mut self, available: LayoutSize) -> NamedGridResult<LayoutSize>;

    /// Lay the grid and its elements out within `final_size`.
    fn arrange(&mut self, final_size: LayoutSize) -> NamedGridResult<()>;
}

/// Slot attributes as last pushed by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotSpec {
    pub size: GridLength,
    pub min_size: f32,
    pub max_size: f32,
    pub shared_size_group: Option<String>,
}

impl Default for SlotSpec {
    fn default() -> Self {
        Self {
            size: GridLength::STAR,
            min_size: 0.0,
            max_size: f32::INFINITY,
            shared_size_group: None,
        }
    }
}

impl SlotSpec {
    /// The size this slot contributes to a measure pass: fixed sizes clamped
    /// to the bounds, everything else its minimum.
    pub fn desired_extent(&self) -> f32 {
        match self.size {
            GridLength::Fixed(pixels) => pixels.clamp(self.min_size, self.max_size.max(self.min_size)),
            GridLength::Auto | GridLength::Star(_) => self.min_size,
        }
    }
}

/// An in-memory [`FixedIndexGrid`] with no layout engine behind it.
///
/// It records slots and element placements exactly as published, which makes
/// it suitable for headless hosts and for inspecting the engine's output.
#[derive(Debug, Clone, Default)]
pub struct HeadlessGrid {
    columns: Vec<SlotSpec>,
    rows: Vec<SlotSpec>,
    elements: HashMap<ElementId, [Placement; 2]>,
    arranged_size: Option<LayoutSize>,
}

impl HeadlessGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slots(&self, axis: Axis) -> &[SlotSpec] {
        match axis {
            Axis::Column => &self.columns,
            Axis::Row => &self.rows,
        }
    }

    pub fn slot_count(&self, axis: Axis) -> usize {
        self.slots(axis).len()
    }

    pub fn is_attached(&self, element: ElementId) -> bool {
        self.elements.contains_key(&element)
    }

    /// The placement last published for `element` on `axis`.
    pub fn placement(&self, element: ElementId, axis: Axis) -> Option<Placement> {
        self.elements
            .get(&element)
            .map(|placements| placements[axis_slot(axis)])
    }

    pub fn arranged_size(&self) -> Option<LayoutSize> {
        self.arranged_size
    }

    fn slots_mut(&mut self, axis: Axis) -> &mut Vec<SlotSpec> {
        match axis {
            Axis::Column => &mut self.columns,
            Axis::Row => &mut self.rows,
        }
    }

    fn slot_mut(
        &mut self,
        operation: &str,
        axis: Axis,
        index: usize,
    ) -> NamedGridResult<&mut SlotSpec> {
        let slots = self.slots_mut(axis);
        let count = slots.len();
        slots.get_mut(index).ok_or_else(|| {
            NamedGridError::backend(
                operation,
                format!("{axis} slot {index} out of bounds for slot count {count}"),
            )
        })
    }
}

fn axis_slot(axis: Axis) -> usize {
    match axis {
        Axis::Column => 0,
        Axis::Row => 1,
    }
}

impl FixedIndexGrid for HeadlessGrid {
    fn insert_slot(&mut self, axis: Axis, index: usize) -> NamedGridResult<()> {
        let slots = self.slots_mut(axis);
        if index > slots.len() {
            return Err(NamedGridError::backend(
                "insert_slot",
                format!("{axis} slot {index} out of bounds for slot count {}", slots.len()),
            ));
        }
        slots.insert(index, SlotSpec::default());
        Ok(())
    }

    fn remove_slot(&mut self, axis: Axis, index: usize) -> NamedGridResult<()> {
        self.slot_mut("remove_slot", axis, index)?;
        self.slots_mut(axis).remove(index);
        Ok(())
    }

    fn set_slot_size(&mut self, axis: Axis, index: usize, size: GridLength) -> NamedGridResult<()> {
        self.slot_mut("set_slot_size", axis, index)?.size = size;
        Ok(())
    }

    fn set_slot_min_size(
        &mut self,
        axis: Axis,
        index: usize,
        min_size: f32,
    ) -> NamedGridResult<()> {
        self.slot_mut("set_slot_min_size", axis, index)?.min_size = min_size;
        Ok(())
    }

    fn set_slot_max_size(
        &mut self,
        axis: Axis,
        index: usize,
        max_size: f32,
    ) -> NamedGridResult<()> {
        self.slot_mut("set_slot_max_size", axis, index)?.max_size = max_size;
        Ok(())
    }

    fn set_slot_shared_size_group(
        &mut self,
        axis: Axis,
        index: usize,
        group: Option<String>,
    ) -> NamedGridResult<()> {
        self.slot_mut("set_slot_shared_size_group", axis, index)?
            .shared_size_group = group;
        Ok(())
    }

    fn attach_element(&mut self, element: ElementId) -> NamedGridResult<()> {
        self.elements.insert(element, [Placement::ORIGIN; 2]);
        Ok(())
    }

    fn detach_element(&mut self, element: ElementId) -> NamedGridResult<()> {
        self.elements.remove(&element);
        Ok(())
    }

    fn set_element_placement(
        &mut self,
        element: ElementId,
        axis: Axis,
        placement: Placement,
    ) -> NamedGridResult<()> {
        let placements = self.elements.get_mut(&element).ok_or_else(|| {
            NamedGridError::backend(
                "set_element_placement",
                format!("element {} is not attached", element.index()),
            )
        })?;
        placements[axis_slot(axis)] = placement;
        Ok(())
    }

    fn measure(&mut self, available: LayoutSize) -> NamedGridResult<LayoutSize> {
        let extent = |slots: &[SlotSpec]| slots.iter().map(SlotSpec::desired_extent).sum::<f32>();
        Ok(LayoutSize {
            width: extent(&self.columns).min(available.width),
            height: extent(&self.rows).min(available.height),
        })
    }

    fn arrange(&mut self, final_size: LayoutSize) -> NamedGridResult<()> {
        self.arranged_size = Some(final_size);
        Ok(())
    }
}
