//! Ordered column or row definitions, kept in sync with the underlying grid
//!
//! A [`DefinitionList`] owns the definitions of one axis together with their
//! [`DefinitionRegistry`]. Every membership change is mirrored into the grid
//! (physical definitions own exactly one slot) and invalidates the registry.
//! Re-placing elements afterwards is the caller's job; the panel does it
//! through its [`AxisEditor`](crate::AxisEditor).
//!
//! A list is either edited directly or bound to a [`DefinitionSource`]. Bound
//! lists reject direct membership changes and are rebuilt from the source
//! whenever its revision moves.

use crate::axis::Axis;
use crate::definition::{Definition, DefinitionProperty, PhysicalDefinition, PropertyChange};
use crate::error::{NamedGridError, NamedGridResult};
use crate::grid::FixedIndexGrid;
use crate::length::GridLength;
use crate::registry::{DefinitionRegistry, RegistryMaps};
use crate::resolver::{GridRange, RangeResolver};
use crate::source::DefinitionSource;

#[derive(Debug)]
struct SourceBinding {
    source: Box<dyn DefinitionSource>,
    revision: Option<u64>,
}

#[derive(Debug)]
pub struct DefinitionList {
    axis: Axis,
    default_size: GridLength,
    definitions: Vec<Definition>,
    registry: DefinitionRegistry,
    binding: Option<SourceBinding>,
}

impl DefinitionList {
    /// An empty, unbound list. `default_size` applies to physical
    /// definitions that leave their size unset.
    pub fn new(axis: Axis, default_size: GridLength) -> Self {
        Self {
            axis,
            default_size,
            definitions: Vec::new(),
            registry: DefinitionRegistry::new(),
            binding: None,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn default_size(&self) -> GridLength {
        self.default_size
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Definition> {
        self.definitions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Definition> {
        self.definitions.iter()
    }

    pub fn as_slice(&self) -> &[Definition] {
        &self.definitions
    }

    /// Position of the last definition named `name`.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.definitions
            .iter()
            .rposition(|definition| definition.name() == Some(name))
    }

    /// Number of physical definitions before `position`, which is the slot
    /// index a physical definition at `position` occupies.
    pub fn physical_index_at(&self, position: usize) -> usize {
        self.definitions[..position.min(self.definitions.len())]
            .iter()
            .filter(|definition| definition.is_physical())
            .count()
    }

    pub fn physical_count(&self) -> usize {
        self.physical_index_at(self.definitions.len())
    }

    /// Whether the list mirrors an external source.
    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    pub fn registry(&self) -> &DefinitionRegistry {
        &self.registry
    }

    pub fn invalidate(&mut self) {
        self.registry.invalidate();
    }

    /// Build the name maps if they are stale.
    pub fn ensure_maps(&mut self) -> &RegistryMaps {
        self.registry.ensure_built(&self.definitions)
    }

    /// A resolver over the current maps.
    ///
    /// Fails with [`NamedGridError::MapsNotBuilt`] when the maps are stale;
    /// see [`prepare`](Self::prepare) to build them first.
    pub fn resolver(&self) -> NamedGridResult<RangeResolver<'_>> {
        let maps = self
            .registry
            .maps()
            .ok_or(NamedGridError::MapsNotBuilt { axis: self.axis })?;
        Ok(RangeResolver::new(maps, &self.definitions))
    }

    /// Build the maps if needed and return a resolver over them.
    pub fn prepare(&mut self) -> RangeResolver<'_> {
        let maps = self.registry.ensure_built(&self.definitions);
        RangeResolver::new(maps, &self.definitions)
    }

    pub fn resolve_range(&self, name: &str) -> NamedGridResult<GridRange> {
        Ok(self.resolver()?.resolve_range(name))
    }

    pub fn resolve_pair(
        &self,
        first: Option<&str>,
        second: Option<&str>,
    ) -> NamedGridResult<GridRange> {
        Ok(self.resolver()?.resolve_pair(first, second))
    }

    /// Insert `item` at `index`, creating its grid slot if it is physical.
    pub fn insert<G: FixedIndexGrid + ?Sized>(
        &mut self,
        grid: &mut G,
        index: usize,
        item: impl Into<Definition>,
    ) -> NamedGridResult<()> {
        self.ensure_writable()?;
        if index > self.definitions.len() {
            return Err(NamedGridError::index_out_of_range(index, self.definitions.len()));
        }
        self.attach_at(grid, index, item.into())
    }

    pub fn push<G: FixedIndexGrid + ?Sized>(
        &mut self,
        grid: &mut G,
        item: impl Into<Definition>,
    ) -> NamedGridResult<()> {
        let len = self.definitions.len();
        self.insert(grid, len, item)
    }

    /// Replace the definition at `index`, returning the previous one.
    pub fn set<G: FixedIndexGrid + ?Sized>(
        &mut self,
        grid: &mut G,
        index: usize,
        item: impl Into<Definition>,
    ) -> NamedGridResult<Definition> {
        self.ensure_writable()?;
        self.check_index(index)?;
        let previous = self.detach_at(grid, index)?;
        if let Err(error) = self.attach_at(grid, index, item.into()) {
            self.attach_at(grid, index, previous)?;
            return Err(error);
        }
        Ok(previous)
    }

    pub fn remove_at<G: FixedIndexGrid + ?Sized>(
        &mut self,
        grid: &mut G,
        index: usize,
    ) -> NamedGridResult<Definition> {
        self.ensure_writable()?;
        self.check_index(index)?;
        self.detach_at(grid, index)
    }

    /// Remove every definition. Slots are removed from the highest physical
    /// index down.
    pub fn clear<G: FixedIndexGrid + ?Sized>(&mut self, grid: &mut G) -> NamedGridResult<()> {
        self.ensure_writable()?;
        self.clear_all(grid)
    }

    /// Change one property of the definition at `index`.
    ///
    /// Size related properties are pushed straight to the definition's slot.
    /// Returns `true` when element placement has to be refreshed, which is
    /// the case for name and alias target changes.
    pub fn set_property<G: FixedIndexGrid + ?Sized>(
        &mut self,
        grid: &mut G,
        index: usize,
        change: PropertyChange,
    ) -> NamedGridResult<bool> {
        self.check_index(index)?;
        let property = change.property();
        if !change.apply(&mut self.definitions[index]) {
            return Err(NamedGridError::PropertyMismatch { property, index });
        }

        #[cfg(feature = "tracing")]
        tracing::trace!("{} definition {} changed {:?}", self.axis, index, property);

        match property {
            DefinitionProperty::Name => {
                self.registry.invalidate();
                Ok(true)
            }
            DefinitionProperty::StartAt | DefinitionProperty::ExtendTo => Ok(true),
            DefinitionProperty::Size
            | DefinitionProperty::MinSize
            | DefinitionProperty::MaxSize
            | DefinitionProperty::SharedSizeGroup => {
                let slot = self.physical_index_at(index);
                let Some(physical) = self.definitions[index].as_physical() else {
                    return Err(NamedGridError::PropertyMismatch { property, index });
                };
                let axis = self.axis;
                match property {
                    DefinitionProperty::Size => grid.set_slot_size(
                        axis,
                        slot,
                        physical.size().unwrap_or(self.default_size),
                    )?,
                    DefinitionProperty::MinSize => {
                        grid.set_slot_min_size(axis, slot, physical.min_size())?
                    }
                    DefinitionProperty::MaxSize => {
                        grid.set_slot_max_size(axis, slot, physical.effective_max_size())?
                    }
                    _ => grid.set_slot_shared_size_group(
                        axis,
                        slot,
                        physical.shared_size_group().map(str::to_string),
                    )?,
                }
                Ok(false)
            }
        }
    }

    /// Replace the contents with `source` and stop accepting direct edits.
    pub fn bind<G, S>(&mut self, grid: &mut G, source: S) -> NamedGridResult<()>
    where
        G: FixedIndexGrid + ?Sized,
        S: DefinitionSource + 'static,
    {
        self.binding = Some(SourceBinding {
            source: Box::new(source),
            revision: None,
        });
        self.resync(grid)?;
        Ok(())
    }

    /// Detach from the bound source. The list is left empty and editable.
    pub fn unbind<G: FixedIndexGrid + ?Sized>(&mut self, grid: &mut G) -> NamedGridResult<()> {
        if self.binding.take().is_some() {
            self.clear_all(grid)?;
        }
        Ok(())
    }

    /// Resynchronize with the bound source if its revision moved.
    pub fn sync_source<G: FixedIndexGrid + ?Sized>(
        &mut self,
        grid: &mut G,
    ) -> NamedGridResult<bool> {
        let stale = match &self.binding {
            Some(binding) => match binding.source.revision() {
                Some(revision) => binding.revision != Some(revision),
                None => false,
            },
            None => false,
        };
        if stale { self.resync(grid) } else { Ok(false) }
    }

    /// Rebuild the contents from the bound source unconditionally. Returns
    /// `false` when the list is not bound.
    pub fn resync<G: FixedIndexGrid + ?Sized>(&mut self, grid: &mut G) -> NamedGridResult<bool> {
        let Some(binding) = &self.binding else {
            return Ok(false);
        };
        let items = binding.source.items();
        let revision = binding.source.revision();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Resynchronizing {} definitions from source ({} items, revision {:?})",
            self.axis,
            items.len(),
            revision
        );

        self.clear_all(grid)?;
        for item in items {
            let len = self.definitions.len();
            self.attach_at(grid, len, item.into_definition())?;
        }

        if let Some(binding) = &mut self.binding {
            binding.revision = revision;
        }
        Ok(true)
    }

    fn ensure_writable(&self) -> NamedGridResult<()> {
        if self.is_bound() {
            return Err(NamedGridError::ReadOnlyList { axis: self.axis });
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> NamedGridResult<()> {
        if index >= self.definitions.len() {
            return Err(NamedGridError::index_out_of_range(index, self.definitions.len()));
        }
        Ok(())
    }

    fn attach_at<G: FixedIndexGrid + ?Sized>(
        &mut self,
        grid: &mut G,
        index: usize,
        definition: Definition,
    ) -> NamedGridResult<()> {
        let slot = self.physical_index_at(index);
        if definition.is_physical() {
            grid.insert_slot(self.axis, slot)?;
        }
        self.definitions.insert(index, definition);
        self.registry.invalidate();

        let pushed = match &self.definitions[index] {
            Definition::Physical(physical) => {
                push_slot(grid, self.axis, slot, physical, self.default_size)
            }
            Definition::Virtual(_) => Ok(()),
        };
        // A definition is only kept once its slot is fully published.
        if let Err(error) = pushed {
            self.definitions.remove(index);
            grid.remove_slot(self.axis, slot)?;
            return Err(error);
        }
        Ok(())
    }

    fn detach_at<G: FixedIndexGrid + ?Sized>(
        &mut self,
        grid: &mut G,
        index: usize,
    ) -> NamedGridResult<Definition> {
        if self.definitions[index].is_physical() {
            grid.remove_slot(self.axis, self.physical_index_at(index))?;
        }
        self.registry.invalidate();
        Ok(self.definitions.remove(index))
    }

    fn clear_all<G: FixedIndexGrid + ?Sized>(&mut self, grid: &mut G) -> NamedGridResult<()> {
        let mut slots = self.physical_count();
        self.registry.invalidate();
        while let Some(last) = self.definitions.last() {
            if last.is_physical() {
                slots -= 1;
                grid.remove_slot(self.axis, slots)?;
            }
            self.definitions.pop();
        }
        Ok(())
    }
}

// Publish every slot attribute of a freshly inserted physical definition.
fn push_slot<G: FixedIndexGrid + ?Sized>(
    grid: &mut G,
    axis: Axis,
    slot: usize,
    physical: &PhysicalDefinition,
    default_size: GridLength,
) -> NamedGridResult<()> {
    grid.set_slot_shared_size_group(axis, slot, physical.shared_size_group().map(str::to_string))?;
    grid.set_slot_size(axis, slot, physical.size().unwrap_or(default_size))?;
    grid.set_slot_min_size(axis, slot, physical.min_size())?;
    grid.set_slot_max_size(axis, slot, physical.effective_max_size())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;
    use mockall::predicate::eq;

    use super::*;
    use crate::definition::VirtualDefinition;
    use crate::grid::{HeadlessGrid, MockFixedIndexGrid};
    use crate::source::{ObservableDefinitions, SourceItem};

    fn columns() -> DefinitionList {
        DefinitionList::new(Axis::Column, GridLength::STAR)
    }

    fn expect_slot(grid: &mut MockFixedIndexGrid, seq: &mut Sequence, index: usize) {
        grid.expect_insert_slot()
            .with(eq(Axis::Column), eq(index))
            .times(1)
            .in_sequence(seq)
            .returning(|_, _| Ok(()));
    }

    #[test]
    fn physical_insert_creates_slot_then_applies_attributes() {
        let mut grid = MockFixedIndexGrid::new();
        let mut seq = Sequence::new();

        expect_slot(&mut grid, &mut seq, 0);
        grid.expect_set_slot_shared_size_group()
            .with(eq(Axis::Column), eq(0), eq(Some("labels".to_string())))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(()));
        grid.expect_set_slot_size()
            .with(eq(Axis::Column), eq(0), eq(GridLength::Auto))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(()));
        grid.expect_set_slot_min_size()
            .with(eq(Axis::Column), eq(0), eq(10.0))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(()));
        grid.expect_set_slot_max_size()
            .with(eq(Axis::Column), eq(0), eq(f32::INFINITY))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(()));

        let mut list = columns();
        let track = PhysicalDefinition::named("A")
            .with_size(GridLength::Auto)
            .with_min_size(10.0)
            .with_shared_size_group("labels");
        list.push(&mut grid, track).unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn virtual_insert_leaves_grid_untouched() {
        // no expectations: any grid call panics
        let mut grid = MockFixedIndexGrid::new();
        let mut list = columns();
        list.push(&mut grid, Definition::alias("V", "A")).unwrap();
        assert_eq!(list.physical_count(), 0);
    }

    #[test]
    fn insert_targets_physical_index() {
        let mut grid = HeadlessGrid::new();
        let mut list = columns();
        list.push(&mut grid, Definition::physical("A")).unwrap();
        list.push(&mut grid, Definition::alias("V", "A")).unwrap();
        list.push(&mut grid, PhysicalDefinition::named("C").with_size(GridLength::Fixed(30.0)))
            .unwrap();

        list.insert(&mut grid, 2, PhysicalDefinition::named("B").with_size(GridLength::Fixed(20.0)))
            .unwrap();

        assert_eq!(list.physical_index_at(2), 1);
        let sizes: Vec<_> = grid.slots(Axis::Column).iter().map(|slot| slot.size).collect();
        assert_eq!(
            sizes,
            vec![GridLength::STAR, GridLength::Fixed(20.0), GridLength::Fixed(30.0)]
        );
    }

    #[test]
    fn out_of_range_positions_are_rejected() {
        let mut grid = HeadlessGrid::new();
        let mut list = columns();
        assert_eq!(
            list.insert(&mut grid, 1, Definition::physical("A")),
            Err(NamedGridError::IndexOutOfRange { index: 1, len: 0 })
        );
        assert!(matches!(
            list.remove_at(&mut grid, 0),
            Err(NamedGridError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn clear_removes_slots_in_descending_order() {
        let mut grid = MockFixedIndexGrid::new();
        grid.expect_insert_slot().returning(|_, _| Ok(()));
        grid.expect_set_slot_shared_size_group().returning(|_, _, _| Ok(()));
        grid.expect_set_slot_size().returning(|_, _, _| Ok(()));
        grid.expect_set_slot_min_size().returning(|_, _, _| Ok(()));
        grid.expect_set_slot_max_size().returning(|_, _, _| Ok(()));

        let mut list = columns();
        list.push(&mut grid, Definition::physical("A")).unwrap();
        list.push(&mut grid, Definition::alias("V", "A")).unwrap();
        list.push(&mut grid, Definition::physical("B")).unwrap();
        list.push(&mut grid, Definition::physical("C")).unwrap();

        let mut seq = Sequence::new();
        for index in [2, 1, 0] {
            grid.expect_remove_slot()
                .with(eq(Axis::Column), eq(index))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| Ok(()));
        }

        list.clear(&mut grid).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn set_replaces_slot_of_physical_item() {
        let mut grid = HeadlessGrid::new();
        let mut list = columns();
        list.push(&mut grid, Definition::physical("A")).unwrap();
        list.push(&mut grid, Definition::physical("B")).unwrap();

        let previous = list.set(&mut grid, 0, Definition::alias("A", "B")).unwrap();
        assert_eq!(previous, Definition::physical("A"));
        assert_eq!(grid.slot_count(Axis::Column), 1);

        list.set(&mut grid, 0, PhysicalDefinition::named("Z").with_size(GridLength::Auto))
            .unwrap();
        assert_eq!(grid.slot_count(Axis::Column), 2);
        assert_eq!(grid.slots(Axis::Column)[0].size, GridLength::Auto);
    }

    #[test]
    fn failed_clear_leaves_maps_stale() {
        let mut grid = HeadlessGrid::new();
        let mut list = columns();
        for name in ["A", "B", "C"] {
            list.push(&mut grid, Definition::physical(name)).unwrap();
        }
        list.ensure_maps();

        let mut failing = MockFixedIndexGrid::new();
        let mut seq = Sequence::new();
        failing
            .expect_remove_slot()
            .with(eq(Axis::Column), eq(2))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        failing
            .expect_remove_slot()
            .with(eq(Axis::Column), eq(1))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(NamedGridError::backend("remove_slot", "detached")));

        assert!(list.clear(&mut failing).is_err());
        assert_eq!(list.len(), 2);
        assert!(!list.registry().is_built());
        assert_eq!(list.prepare().resolve_range("B"), GridRange::single(1));
        assert_eq!(list.prepare().resolve_range("C"), GridRange::single(0));
    }

    #[test]
    fn failed_set_restores_the_previous_definition() {
        let mut grid = MockFixedIndexGrid::new();
        let mut inserts = 0;
        grid.expect_insert_slot().returning(move |_, _| {
            inserts += 1;
            if inserts == 2 {
                Err(NamedGridError::backend("insert_slot", "full"))
            } else {
                Ok(())
            }
        });
        grid.expect_remove_slot().times(1).returning(|_, _| Ok(()));
        grid.expect_set_slot_shared_size_group().returning(|_, _, _| Ok(()));
        grid.expect_set_slot_size().returning(|_, _, _| Ok(()));
        grid.expect_set_slot_min_size().returning(|_, _, _| Ok(()));
        grid.expect_set_slot_max_size().returning(|_, _, _| Ok(()));

        let mut list = columns();
        list.push(&mut grid, Definition::physical("A")).unwrap();

        assert!(matches!(
            list.set(&mut grid, 0, Definition::physical("B")),
            Err(NamedGridError::Backend { .. })
        ));
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0), Some(&Definition::physical("A")));
    }

    #[test]
    fn resolution_needs_built_maps() {
        let mut grid = HeadlessGrid::new();
        let mut list = columns();
        list.push(&mut grid, Definition::physical("A")).unwrap();

        assert_eq!(
            list.resolve_range("A"),
            Err(NamedGridError::MapsNotBuilt { axis: Axis::Column })
        );
        list.ensure_maps();
        assert_eq!(list.resolve_range("A"), Ok(GridRange::single(0)));

        list.push(&mut grid, Definition::physical("B")).unwrap();
        assert!(list.resolver().is_err());
        assert_eq!(list.prepare().resolve_range("B"), GridRange::single(1));
    }

    #[test]
    fn size_properties_go_to_the_slot_without_refresh() {
        let mut grid = HeadlessGrid::new();
        let mut list = columns();
        list.push(&mut grid, Definition::physical("A")).unwrap();
        list.push(&mut grid, Definition::alias("V", "A")).unwrap();
        list.push(&mut grid, Definition::physical("B")).unwrap();
        list.ensure_maps();

        let refresh = list
            .set_property(&mut grid, 2, PropertyChange::Size(Some(GridLength::Fixed(64.0))))
            .unwrap();
        assert!(!refresh);
        assert_eq!(grid.slots(Axis::Column)[1].size, GridLength::Fixed(64.0));

        list.set_property(&mut grid, 2, PropertyChange::MaxSize(32.0)).unwrap();
        list.set_property(&mut grid, 2, PropertyChange::MinSize(8.0)).unwrap();
        list.set_property(&mut grid, 0, PropertyChange::SharedSizeGroup(Some("g".into())))
            .unwrap();
        assert_eq!(grid.slots(Axis::Column)[1].max_size, 32.0);
        assert_eq!(grid.slots(Axis::Column)[1].min_size, 8.0);
        assert_eq!(grid.slots(Axis::Column)[0].shared_size_group.as_deref(), Some("g"));

        list.set_property(&mut grid, 2, PropertyChange::Size(None)).unwrap();
        assert_eq!(grid.slots(Axis::Column)[1].size, GridLength::STAR);
        assert!(list.registry().is_built());
    }

    #[test]
    fn name_changes_invalidate_and_alias_changes_do_not() {
        let mut grid = HeadlessGrid::new();
        let mut list = columns();
        list.push(&mut grid, Definition::physical("A")).unwrap();
        list.push(&mut grid, Definition::physical("B")).unwrap();
        list.push(&mut grid, Definition::alias("V", "A")).unwrap();
        list.ensure_maps();

        assert!(list.set_property(&mut grid, 2, PropertyChange::StartAt(Some("B".into()))).unwrap());
        assert!(list.registry().is_built());
        assert_eq!(list.resolve_range("V"), Ok(GridRange::single(1)));

        assert!(list.set_property(&mut grid, 1, PropertyChange::Name(Some("Z".into()))).unwrap());
        assert!(!list.registry().is_built());
    }

    #[test]
    fn mismatched_properties_are_rejected() {
        let mut grid = HeadlessGrid::new();
        let mut list = columns();
        list.push(&mut grid, VirtualDefinition::alias("V", "A")).unwrap();

        assert_eq!(
            list.set_property(&mut grid, 0, PropertyChange::MinSize(4.0)),
            Err(NamedGridError::PropertyMismatch {
                property: DefinitionProperty::MinSize,
                index: 0,
            })
        );
    }

    #[test]
    fn bound_lists_reject_direct_edits() {
        let mut grid = HeadlessGrid::new();
        let mut list = columns();
        list.bind(&mut grid, vec![SourceItem::from("A"), SourceItem::Null]).unwrap();

        assert!(list.is_bound());
        assert_eq!(grid.slot_count(Axis::Column), 2);
        let read_only = Err(NamedGridError::ReadOnlyList { axis: Axis::Column });
        assert_eq!(list.push(&mut grid, Definition::physical("B")), read_only);
        assert_eq!(list.clear(&mut grid), read_only);
        assert!(list.set(&mut grid, 0, Definition::physical("B")).is_err());
        assert!(list.remove_at(&mut grid, 0).is_err());

        list.unbind(&mut grid).unwrap();
        assert!(list.is_empty());
        assert_eq!(grid.slot_count(Axis::Column), 0);
        list.push(&mut grid, Definition::physical("B")).unwrap();
    }

    #[test]
    fn sync_follows_source_revisions() {
        let mut grid = HeadlessGrid::new();
        let source = ObservableDefinitions::from_items(["A", "B"]);
        let mut list = columns();
        list.bind(&mut grid, source.clone()).unwrap();

        assert!(!list.sync_source(&mut grid).unwrap());

        source.insert(0, GridLength::Fixed(12.0)).unwrap();
        assert!(list.sync_source(&mut grid).unwrap());
        assert_eq!(list.len(), 3);
        assert_eq!(list.prepare().resolve_range("A"), GridRange::single(1));
        assert_eq!(grid.slots(Axis::Column)[0].size, GridLength::Fixed(12.0));

        assert!(!list.sync_source(&mut grid).unwrap());
    }
}
