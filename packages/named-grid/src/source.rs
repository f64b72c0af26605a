//! External sources for data-bound definition lists
//!
//! A definition list can be bound to a sequence it does not own. The sequence
//! yields heterogeneous [`SourceItem`]s that are coerced into definitions, and
//! may report a revision so the panel can tell when to resynchronize.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::definition::{Definition, PhysicalDefinition, VirtualDefinition};
use crate::error::{NamedGridError, NamedGridResult};
use crate::length::GridLength;

/// One entry of an external definition source.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceItem {
    /// Used as is.
    Definition(Definition),
    /// An unnamed physical track of this size.
    Size(GridLength),
    /// A named physical track with the default size.
    Name(String),
    /// An unnamed physical track with the default size.
    Null,
}

impl SourceItem {
    pub fn into_definition(self) -> Definition {
        match self {
            SourceItem::Definition(definition) => definition,
            SourceItem::Size(size) => PhysicalDefinition::new().with_size(size).into(),
            SourceItem::Name(name) => PhysicalDefinition::named(name).into(),
            SourceItem::Null => PhysicalDefinition::new().into(),
        }
    }
}

impl From<Definition> for SourceItem {
    fn from(definition: Definition) -> Self {
        SourceItem::Definition(definition)
    }
}

impl From<PhysicalDefinition> for SourceItem {
    fn from(physical: PhysicalDefinition) -> Self {
        SourceItem::Definition(physical.into())
    }
}

impl From<VirtualDefinition> for SourceItem {
    fn from(alias: VirtualDefinition) -> Self {
        SourceItem::Definition(alias.into())
    }
}

impl From<GridLength> for SourceItem {
    fn from(size: GridLength) -> Self {
        SourceItem::Size(size)
    }
}

impl From<String> for SourceItem {
    fn from(name: String) -> Self {
        SourceItem::Name(name)
    }
}

impl From<&str> for SourceItem {
    fn from(name: &str) -> Self {
        SourceItem::Name(name.to_string())
    }
}

impl<T: Into<SourceItem>> From<Option<T>> for SourceItem {
    fn from(item: Option<T>) -> Self {
        item.map_or(SourceItem::Null, Into::into)
    }
}

/// A read-only sequence of definitions a list can be bound to.
pub trait DefinitionSource: fmt::Debug {
    /// The current items, in order.
    fn items(&self) -> Vec<SourceItem>;

    /// A counter that changes whenever `items` would change.
    ///
    /// Sources without change notification return `None`; lists bound to them
    /// only resynchronize when asked to.
    fn revision(&self) -> Option<u64> {
        None
    }
}

impl DefinitionSource for Vec<SourceItem> {
    fn items(&self) -> Vec<SourceItem> {
        self.clone()
    }
}

#[derive(Debug, Default)]
struct ObservableState {
    items: Vec<SourceItem>,
    revision: u64,
}

/// A shared, observable definition source.
///
/// Clones share the same sequence. Every mutation bumps the revision. A bound
/// panel compares revisions at the start of each of its operations (name
/// resolution, placement, name edits, measure and arrange), so a mutation is
/// visible to the next call made on the panel.
#[derive(Debug, Clone, Default)]
pub struct ObservableDefinitions {
    state: Rc<RefCell<ObservableState>>,
}

impl ObservableDefinitions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<SourceItem>,
    {
        let source = Self::new();
        source.state.borrow_mut().items = items.into_iter().map(Into::into).collect();
        source
    }

    pub fn len(&self) -> usize {
        self.state.borrow().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<SourceItem> {
        self.state.borrow().items.get(index).cloned()
    }

    pub fn push(&self, item: impl Into<SourceItem>) {
        self.mutate(|items| items.push(item.into()));
    }

    pub fn insert(&self, index: usize, item: impl Into<SourceItem>) -> NamedGridResult<()> {
        let len = self.len();
        if index > len {
            return Err(NamedGridError::index_out_of_range(index, len));
        }
        self.mutate(|items| items.insert(index, item.into()));
        Ok(())
    }

    pub fn set(&self, index: usize, item: impl Into<SourceItem>) -> NamedGridResult<SourceItem> {
        let len = self.len();
        if index >= len {
            return Err(NamedGridError::index_out_of_range(index, len));
        }
        Ok(self.mutate(|items| std::mem::replace(&mut items[index], item.into())))
    }

    pub fn remove(&self, index: usize) -> NamedGridResult<SourceItem> {
        let len = self.len();
        if index >= len {
            return Err(NamedGridError::index_out_of_range(index, len));
        }
        Ok(self.mutate(|items| items.remove(index)))
    }

    pub fn clear(&self) {
        self.mutate(Vec::clear);
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut Vec<SourceItem>) -> R) -> R {
        let mut state = self.state.borrow_mut();
        state.revision += 1;
        f(&mut state.items)
    }
}

impl DefinitionSource for ObservableDefinitions {
    fn items(&self) -> Vec<SourceItem> {
        self.state.borrow().items.clone()
    }

    fn revision(&self) -> Option<u64> {
        Some(self.state.borrow().revision)
    }
}
