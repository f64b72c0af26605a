//! Column and row definitions
//!
//! A definition list mixes two kinds of entries that share one name space:
//! [`PhysicalDefinition`]s, which own exactly one track of the underlying grid,
//! and [`VirtualDefinition`]s, which own no space and alias the range of one or
//! two other names.

use crate::length::GridLength;

/// A definition that occupies exactly one physical column or row.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalDefinition {
    name: Option<String>,
    size: Option<GridLength>,
    min_size: f32,
    max_size: f32,
    shared_size_group: Option<String>,
}

impl PhysicalDefinition {
    /// An unnamed track that inherits the panel's default size.
    pub fn new() -> Self {
        Self {
            name: None,
            size: None,
            min_size: 0.0,
            max_size: f32::INFINITY,
            shared_size_group: None,
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::new().with_name(name)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_size(mut self, size: GridLength) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_min_size(mut self, min_size: f32) -> Self {
        self.set_min_size(min_size);
        self
    }

    pub fn with_max_size(mut self, max_size: f32) -> Self {
        self.set_max_size(max_size);
        self
    }

    pub fn with_shared_size_group(mut self, group: impl Into<String>) -> Self {
        self.shared_size_group = Some(group.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The explicit size, `None` when the panel default applies.
    pub fn size(&self) -> Option<GridLength> {
        self.size
    }

    pub fn min_size(&self) -> f32 {
        self.min_size
    }

    pub fn max_size(&self) -> f32 {
        self.max_size
    }

    /// The upper bound actually applied to the track, never below `min_size`.
    pub fn effective_max_size(&self) -> f32 {
        self.max_size.max(self.min_size)
    }

    pub fn shared_size_group(&self) -> Option<&str> {
        self.shared_size_group.as_deref()
    }

    pub(crate) fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub(crate) fn set_size(&mut self, size: Option<GridLength>) {
        self.size = size;
    }

    // NaN and negative minimums collapse to zero
    pub(crate) fn set_min_size(&mut self, min_size: f32) {
        self.min_size = if min_size.is_nan() { 0.0 } else { min_size.max(0.0) };
    }

    pub(crate) fn set_max_size(&mut self, max_size: f32) {
        self.max_size = if max_size.is_nan() { f32::INFINITY } else { max_size.max(0.0) };
    }

    pub(crate) fn set_shared_size_group(&mut self, group: Option<String>) {
        self.shared_size_group = group;
    }
}

impl Default for PhysicalDefinition {
    fn default() -> Self {
        Self::new()
    }
}

/// A definition that occupies no space of its own.
///
/// With only `start_at` set (or `extend_to` equal to it) the definition is a
/// synonym for the name it points at. With both set it denotes the union of the
/// two referenced ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VirtualDefinition {
    name: Option<String>,
    start_at: Option<String>,
    extend_to: Option<String>,
}

impl VirtualDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::new().with_name(name)
    }

    /// A named synonym for `target`.
    pub fn alias(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::named(name).with_start_at(target)
    }

    /// A named region covering everything from `start_at` through `extend_to`.
    pub fn spanning(
        name: impl Into<String>,
        start_at: impl Into<String>,
        extend_to: impl Into<String>,
    ) -> Self {
        Self::named(name)
            .with_start_at(start_at)
            .with_extend_to(extend_to)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_start_at(mut self, start_at: impl Into<String>) -> Self {
        self.start_at = Some(start_at.into());
        self
    }

    pub fn with_extend_to(mut self, extend_to: impl Into<String>) -> Self {
        self.extend_to = Some(extend_to.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn start_at(&self) -> Option<&str> {
        self.start_at.as_deref()
    }

    pub fn extend_to(&self) -> Option<&str> {
        self.extend_to.as_deref()
    }

    /// Names this alias expands to: `start_at`, then `extend_to` when it
    /// names something different.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        let start = self.start_at();
        let extend = self.extend_to().filter(|extend| Some(*extend) != start);
        start.into_iter().chain(extend)
    }

    pub(crate) fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub(crate) fn set_start_at(&mut self, start_at: Option<String>) {
        self.start_at = start_at;
    }

    pub(crate) fn set_extend_to(&mut self, extend_to: Option<String>) {
        self.extend_to = extend_to;
    }
}

/// An entry of a column or row definition list.
#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    Physical(PhysicalDefinition),
    Virtual(VirtualDefinition),
}

impl Definition {
    /// A named physical track with the default size.
    pub fn physical(name: impl Into<String>) -> Self {
        Definition::Physical(PhysicalDefinition::named(name))
    }

    /// A named alias for `target`.
    pub fn alias(name: impl Into<String>, target: impl Into<String>) -> Self {
        Definition::Virtual(VirtualDefinition::alias(name, target))
    }

    /// A named virtual region from `start_at` through `extend_to`.
    pub fn spanning(
        name: impl Into<String>,
        start_at: impl Into<String>,
        extend_to: impl Into<String>,
    ) -> Self {
        Definition::Virtual(VirtualDefinition::spanning(name, start_at, extend_to))
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Definition::Physical(physical) => physical.name(),
            Definition::Virtual(alias) => alias.name(),
        }
    }

    pub fn is_physical(&self) -> bool {
        matches!(self, Definition::Physical(_))
    }

    pub fn is_virtual(&self) -> bool {
        matches!(self, Definition::Virtual(_))
    }

    pub fn as_physical(&self) -> Option<&PhysicalDefinition> {
        match self {
            Definition::Physical(physical) => Some(physical),
            Definition::Virtual(_) => None,
        }
    }

    pub fn as_virtual(&self) -> Option<&VirtualDefinition> {
        match self {
            Definition::Physical(_) => None,
            Definition::Virtual(alias) => Some(alias),
        }
    }

    pub(crate) fn set_name(&mut self, name: Option<String>) {
        match self {
            Definition::Physical(physical) => physical.set_name(name),
            Definition::Virtual(alias) => alias.set_name(name),
        }
    }
}

impl From<PhysicalDefinition> for Definition {
    fn from(physical: PhysicalDefinition) -> Self {
        Definition::Physical(physical)
    }
}

impl From<VirtualDefinition> for Definition {
    fn from(alias: VirtualDefinition) -> Self {
        Definition::Virtual(alias)
    }
}

/// Observable properties of a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionProperty {
    Name,
    StartAt,
    ExtendTo,
    Size,
    MinSize,
    MaxSize,
    SharedSizeGroup,
}

impl DefinitionProperty {
    /// Whether `definition` carries this property at all.
    pub fn applies_to(self, definition: &Definition) -> bool {
        match self {
            DefinitionProperty::Name => true,
            DefinitionProperty::StartAt | DefinitionProperty::ExtendTo => definition.is_virtual(),
            DefinitionProperty::Size
            | DefinitionProperty::MinSize
            | DefinitionProperty::MaxSize
            | DefinitionProperty::SharedSizeGroup => definition.is_physical(),
        }
    }
}

/// A new value for one property of a definition.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyChange {
    Name(Option<String>),
    StartAt(Option<String>),
    ExtendTo(Option<String>),
    Size(Option<GridLength>),
    MinSize(f32),
    MaxSize(f32),
    SharedSizeGroup(Option<String>),
}

impl PropertyChange {
    pub fn property(&self) -> DefinitionProperty {
        match self {
            PropertyChange::Name(_) => DefinitionProperty::Name,
            PropertyChange::StartAt(_) => DefinitionProperty::StartAt,
            PropertyChange::ExtendTo(_) => DefinitionProperty::ExtendTo,
            PropertyChange::Size(_) => DefinitionProperty::Size,
            PropertyChange::MinSize(_) => DefinitionProperty::MinSize,
            PropertyChange::MaxSize(_) => DefinitionProperty::MaxSize,
            PropertyChange::SharedSizeGroup(_) => DefinitionProperty::SharedSizeGroup,
        }
    }

    /// Write the value into `definition`. Returns `false` when the property
    /// does not exist on that variant.
    pub(crate) fn apply(self, definition: &mut Definition) -> bool {
        match (self, definition) {
            (PropertyChange::Name(name), definition) => {
                definition.set_name(name);
                true
            }
            (PropertyChange::StartAt(start_at), Definition::Virtual(alias)) => {
                alias.set_start_at(start_at);
                true
            }
            (PropertyChange::ExtendTo(extend_to), Definition::Virtual(alias)) => {
                alias.set_extend_to(extend_to);
                true
            }
            (PropertyChange::Size(size), Definition::Physical(physical)) => {
                physical.set_size(size);
                true
            }
            (PropertyChange::MinSize(min_size), Definition::Physical(physical)) => {
                physical.set_min_size(min_size);
                true
            }
            (PropertyChange::MaxSize(max_size), Definition::Physical(physical)) => {
                physical.set_max_size(max_size);
                true
            }
            (PropertyChange::SharedSizeGroup(group), Definition::Physical(physical)) => {
                physical.set_shared_size_group(group);
                true
            }
            _ => false,
        }
    }
}
