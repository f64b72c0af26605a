//! The named grid panel
//!
//! [`NamedGridPanel`] owns the column and row definition lists, the hosted
//! elements and the underlying grid. All mutations go through the panel (or an
//! [`AxisEditor`] borrowed from it) so that every change to names, aliases or
//! membership is followed by re-placing the affected elements within the same
//! call.

use slab::Slab;

use crate::axis::Axis;
use crate::config::{AliasCyclePolicy, PanelConfig};
use crate::definition::{Definition, PropertyChange};
use crate::element::{ElementId, NamePair, PlacedElement};
use crate::error::{NamedGridError, NamedGridResult};
use crate::grid::{FixedIndexGrid, LayoutSize};
use crate::length::GridLength;
use crate::list::DefinitionList;
use crate::placement::{Placement, place_on_axis};
use crate::resolver::GridRange;
use crate::source::DefinitionSource;

pub struct NamedGridPanel<G: FixedIndexGrid> {
    config: PanelConfig,
    columns: DefinitionList,
    rows: DefinitionList,
    elements: Slab<PlacedElement>,
    grid: G,
}

impl<G: FixedIndexGrid> NamedGridPanel<G> {
    /// A panel over `grid`, which is expected to start without slots or
    /// elements.
    pub fn new(grid: G) -> Self {
        Self::with_config(grid, PanelConfig::default())
    }

    pub fn with_config(grid: G, config: PanelConfig) -> Self {
        Self {
            columns: DefinitionList::new(Axis::Column, config.default_size(Axis::Column)),
            rows: DefinitionList::new(Axis::Row, config.default_size(Axis::Row)),
            elements: Slab::new(),
            grid,
            config,
        }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }

    /// Direct access to the grid, for backend specific settings. Slots and
    /// placements changed through this handle are overwritten by the panel.
    pub fn grid_mut(&mut self) -> &mut G {
        &mut self.grid
    }

    pub fn into_grid(self) -> G {
        self.grid
    }

    pub fn definitions(&self, axis: Axis) -> &DefinitionList {
        match axis {
            Axis::Column => &self.columns,
            Axis::Row => &self.rows,
        }
    }

    pub fn columns(&self) -> &DefinitionList {
        &self.columns
    }

    pub fn rows(&self) -> &DefinitionList {
        &self.rows
    }

    /// Editor for the definitions of `axis`.
    pub fn axis(&mut self, axis: Axis) -> AxisEditor<'_, G> {
        let list = match axis {
            Axis::Column => &mut self.columns,
            Axis::Row => &mut self.rows,
        };
        AxisEditor {
            list,
            grid: &mut self.grid,
            elements: &self.elements,
            policy: self.config.alias_cycle_policy,
        }
    }

    pub fn columns_mut(&mut self) -> AxisEditor<'_, G> {
        self.axis(Axis::Column)
    }

    pub fn rows_mut(&mut self) -> AxisEditor<'_, G> {
        self.axis(Axis::Row)
    }

    /// Host `element` and place it. Nothing stays hosted when placement
    /// fails.
    pub fn add_child(&mut self, element: PlacedElement) -> NamedGridResult<ElementId> {
        let id = ElementId::new(self.elements.vacant_key());
        self.grid.attach_element(id)?;
        self.elements.insert(element);

        #[cfg(feature = "tracing")]
        tracing::debug!("Attached element {}", id.index());

        if let Err(error) = self.update_element_placement(id) {
            self.elements.remove(id.index());
            if let Err(_detach_error) = self.grid.detach_element(id) {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    "Failed to detach element {} after placement error: {}",
                    id.index(),
                    _detach_error
                );
            }
            return Err(error);
        }
        Ok(id)
    }

    pub fn remove_child(&mut self, id: ElementId) -> NamedGridResult<PlacedElement> {
        if !self.elements.contains(id.index()) {
            return Err(NamedGridError::UnknownElement { id });
        }
        self.grid.detach_element(id)?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Detached element {}", id.index());

        Ok(self.elements.remove(id.index()))
    }

    /// Swap the names of a hosted element, returning the previous ones.
    pub fn replace_child(
        &mut self,
        id: ElementId,
        element: PlacedElement,
    ) -> NamedGridResult<PlacedElement> {
        let slot = self
            .elements
            .get_mut(id.index())
            .ok_or(NamedGridError::UnknownElement { id })?;
        let previous = std::mem::replace(slot, element);
        if let Err(error) = self.update_element_placement(id) {
            self.elements[id.index()] = previous;
            self.restore_placement(id);
            return Err(error);
        }
        Ok(previous)
    }

    pub fn child(&self, id: ElementId) -> Option<&PlacedElement> {
        self.elements.get(id.index())
    }

    pub fn children(&self) -> impl Iterator<Item = (ElementId, &PlacedElement)> {
        self.elements
            .iter()
            .map(|(key, element)| (ElementId::new(key), element))
    }

    pub fn child_count(&self) -> usize {
        self.elements.len()
    }

    pub fn set_names(&mut self, id: ElementId, axis: Axis, names: NamePair) -> NamedGridResult<()> {
        self.edit_names(id, axis, |pair| *pair = names)
    }

    pub fn set_column(&mut self, id: ElementId, column: Option<String>) -> NamedGridResult<()> {
        self.edit_names(id, Axis::Column, |pair| pair.start = column)
    }

    pub fn set_extend_to_column(
        &mut self,
        id: ElementId,
        column: Option<String>,
    ) -> NamedGridResult<()> {
        self.edit_names(id, Axis::Column, |pair| pair.extend_to = column)
    }

    pub fn set_row(&mut self, id: ElementId, row: Option<String>) -> NamedGridResult<()> {
        self.edit_names(id, Axis::Row, |pair| pair.start = row)
    }

    pub fn set_extend_to_row(&mut self, id: ElementId, row: Option<String>) -> NamedGridResult<()> {
        self.edit_names(id, Axis::Row, |pair| pair.extend_to = row)
    }

    fn edit_names(
        &mut self,
        id: ElementId,
        axis: Axis,
        edit: impl FnOnce(&mut NamePair),
    ) -> NamedGridResult<()> {
        if !self.elements.contains(id.index()) {
            return Err(NamedGridError::UnknownElement { id });
        }
        self.sync_sources()?;

        let names = self.elements[id.index()].names_mut(axis);
        let previous = names.clone();
        edit(names);

        let list = match axis {
            Axis::Column => &mut self.columns,
            Axis::Row => &mut self.rows,
        };
        let placed = place_on_axis(
            &mut self.grid,
            &list.prepare(),
            id,
            &self.elements[id.index()],
            axis,
            self.config.alias_cycle_policy,
        );
        if let Err(error) = placed {
            *self.elements[id.index()].names_mut(axis) = previous;
            self.restore_placement(id);
            return Err(error);
        }
        Ok(())
    }

    // Re-place an element after its names were rolled back. The restored
    // names were placed successfully before, so a failure here is only logged.
    fn restore_placement(&mut self, id: ElementId) {
        if let Err(_error) = self.update_element_placement(id) {
            #[cfg(feature = "tracing")]
            tracing::warn!("Failed to restore placement of element {}: {}", id.index(), _error);
        }
    }

    /// Resolve and publish the placement of one element on both axes, after
    /// picking up source changes.
    pub fn update_element_placement(&mut self, id: ElementId) -> NamedGridResult<[Placement; 2]> {
        if !self.elements.contains(id.index()) {
            return Err(NamedGridError::UnknownElement { id });
        }
        self.sync_sources()?;

        let element = self
            .elements
            .get(id.index())
            .ok_or(NamedGridError::UnknownElement { id })?;
        let policy = self.config.alias_cycle_policy;

        let column = place_on_axis(
            &mut self.grid,
            &self.columns.prepare(),
            id,
            element,
            Axis::Column,
            policy,
        )?;
        let row = place_on_axis(
            &mut self.grid,
            &self.rows.prepare(),
            id,
            element,
            Axis::Row,
            policy,
        )?;
        Ok([column, row])
    }

    /// Pick up source changes, then re-place every hosted element.
    pub fn update_placement(&mut self) -> NamedGridResult<()> {
        self.sync_bound_lists()?;
        self.place_all()
    }

    /// Resolve `name` against the current definitions of `axis`, after
    /// picking up source changes.
    pub fn resolve_range(&mut self, axis: Axis, name: &str) -> NamedGridResult<GridRange> {
        self.sync_sources()?;
        let list = match axis {
            Axis::Column => &mut self.columns,
            Axis::Row => &mut self.rows,
        };
        Ok(list.prepare().resolve_range(name))
    }

    /// Resynchronize bound lists whose source revision moved and re-place
    /// the elements if anything changed.
    pub fn sync_sources(&mut self) -> NamedGridResult<bool> {
        let changed = self.sync_bound_lists()?;
        if changed {
            self.place_all()?;
        }
        Ok(changed)
    }

    /// Bind the definitions of `axis` to `source`.
    pub fn bind_source<S>(&mut self, axis: Axis, source: S) -> NamedGridResult<()>
    where
        S: DefinitionSource + 'static,
    {
        self.axis(axis).bind(source)
    }

    /// Detach `axis` from its source, leaving it empty.
    pub fn unbind_source(&mut self, axis: Axis) -> NamedGridResult<()> {
        self.axis(axis).unbind()
    }

    pub fn measure(&mut self, available: LayoutSize) -> NamedGridResult<LayoutSize> {
        self.sync_sources()?;
        self.grid.measure(available)
    }

    pub fn arrange(&mut self, final_size: LayoutSize) -> NamedGridResult<()> {
        self.sync_sources()?;
        self.grid.arrange(final_size)
    }

    fn sync_bound_lists(&mut self) -> NamedGridResult<bool> {
        let columns = self.columns.sync_source(&mut self.grid)?;
        let rows = self.rows.sync_source(&mut self.grid)?;
        Ok(columns || rows)
    }

    fn place_all(&mut self) -> NamedGridResult<()> {
        for axis in Axis::ALL {
            self.axis(axis).refresh()?;
        }
        Ok(())
    }
}

/// Mutable access to the definitions of one axis.
///
/// Each operation updates the list and the grid, then re-places every hosted
/// element when names, aliases or membership changed.
pub struct AxisEditor<'p, G: FixedIndexGrid> {
    list: &'p mut DefinitionList,
    grid: &'p mut G,
    elements: &'p Slab<PlacedElement>,
    policy: AliasCyclePolicy,
}

impl<G: FixedIndexGrid> AxisEditor<'_, G> {
    pub fn list(&self) -> &DefinitionList {
        self.list
    }

    pub fn insert(&mut self, index: usize, item: impl Into<Definition>) -> NamedGridResult<()> {
        self.list.insert(&mut *self.grid, index, item)?;
        self.refresh()
    }

    pub fn push(&mut self, item: impl Into<Definition>) -> NamedGridResult<()> {
        self.list.push(&mut *self.grid, item)?;
        self.refresh()
    }

    pub fn set(&mut self, index: usize, item: impl Into<Definition>) -> NamedGridResult<Definition> {
        let previous = self.list.set(&mut *self.grid, index, item)?;
        self.refresh()?;
        Ok(previous)
    }

    pub fn remove_at(&mut self, index: usize) -> NamedGridResult<Definition> {
        let removed = self.list.remove_at(&mut *self.grid, index)?;
        self.refresh()?;
        Ok(removed)
    }

    pub fn clear(&mut self) -> NamedGridResult<()> {
        self.list.clear(&mut *self.grid)?;
        self.refresh()
    }

    pub fn set_name(&mut self, index: usize, name: Option<String>) -> NamedGridResult<()> {
        self.set_property(index, PropertyChange::Name(name))
    }

    pub fn set_start_at(&mut self, index: usize, start_at: Option<String>) -> NamedGridResult<()> {
        self.set_property(index, PropertyChange::StartAt(start_at))
    }

    pub fn set_extend_to(&mut self, index: usize, extend_to: Option<String>) -> NamedGridResult<()> {
        self.set_property(index, PropertyChange::ExtendTo(extend_to))
    }

    pub fn set_size(&mut self, index: usize, size: Option<GridLength>) -> NamedGridResult<()> {
        self.set_property(index, PropertyChange::Size(size))
    }

    pub fn set_min_size(&mut self, index: usize, min_size: f32) -> NamedGridResult<()> {
        self.set_property(index, PropertyChange::MinSize(min_size))
    }

    pub fn set_max_size(&mut self, index: usize, max_size: f32) -> NamedGridResult<()> {
        self.set_property(index, PropertyChange::MaxSize(max_size))
    }

    pub fn set_shared_size_group(
        &mut self,
        index: usize,
        group: Option<String>,
    ) -> NamedGridResult<()> {
        self.set_property(index, PropertyChange::SharedSizeGroup(group))
    }

    pub fn set_property(&mut self, index: usize, change: PropertyChange) -> NamedGridResult<()> {
        if self.list.set_property(&mut *self.grid, index, change)? {
            self.refresh()?;
        }
        Ok(())
    }

    pub fn bind<S: DefinitionSource + 'static>(&mut self, source: S) -> NamedGridResult<()> {
        self.list.bind(&mut *self.grid, source)?;
        self.refresh()
    }

    pub fn unbind(&mut self) -> NamedGridResult<()> {
        self.list.unbind(&mut *self.grid)?;
        self.refresh()
    }

    /// Rebuild stale maps and re-place every hosted element on this axis.
    pub fn refresh(&mut self) -> NamedGridResult<()> {
        let axis = self.list.axis();
        let resolver = self.list.prepare();
        for (key, element) in self.elements.iter() {
            place_on_axis(
                &mut *self.grid,
                &resolver,
                ElementId::new(key),
                element,
                axis,
                self.policy,
            )?;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!("Refreshed {} placement of {} elements", axis, self.elements.len());

        Ok(())
    }
}
