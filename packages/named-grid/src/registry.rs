//! Name lookup tables derived from a definition list
//!
//! The registry caches two maps built in a single ordered pass over the list:
//! name to list position, and name to physical index. Physical indices count
//! only [`PhysicalDefinition`](crate::PhysicalDefinition) entries, so virtual
//! entries never shift the indices of the tracks around them.
//!
//! The maps are treated as stale after any membership or name change and are
//! rebuilt lazily on the next resolution request.

use std::collections::HashMap;

use crate::definition::Definition;

/// The lookup tables for one built registry generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryMaps {
    name_to_definition: HashMap<String, usize>,
    name_to_physical_index: HashMap<String, usize>,
    physical_count: usize,
}

impl RegistryMaps {
    /// Build both maps from `definitions` in list order.
    ///
    /// Duplicate names are tolerated: the later entry wins.
    pub fn build(definitions: &[Definition]) -> Self {
        let mut maps = RegistryMaps {
            name_to_definition: HashMap::with_capacity(definitions.len()),
            name_to_physical_index: HashMap::with_capacity(definitions.len()),
            physical_count: 0,
        };

        for (position, definition) in definitions.iter().enumerate() {
            if let Some(name) = definition.name() {
                let _shadowed = maps.name_to_definition.insert(name.to_string(), position);

                #[cfg(feature = "tracing")]
                {
                    if let Some(previous) = _shadowed {
                        tracing::debug!(
                            "Definition name {:?} at position {} shadows position {}",
                            name,
                            position,
                            previous
                        );
                    }
                }
            }

            if definition.is_physical() {
                if let Some(name) = definition.name() {
                    maps.name_to_physical_index
                        .insert(name.to_string(), maps.physical_count);
                }
                maps.physical_count += 1;
            }
        }

        maps
    }

    /// List position of the definition registered under `name`.
    pub fn definition_position(&self, name: &str) -> Option<usize> {
        self.name_to_definition.get(name).copied()
    }

    /// Physical index of the physical definition registered under `name`.
    pub fn physical_index(&self, name: &str) -> Option<usize> {
        self.name_to_physical_index.get(name).copied()
    }

    /// Number of physical definitions seen while building.
    pub fn physical_count(&self) -> usize {
        self.physical_count
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_to_definition.contains_key(name)
    }
}

/// Lazily built, explicitly invalidated [`RegistryMaps`].
#[derive(Debug, Clone, Default)]
pub struct DefinitionRegistry {
    maps: Option<RegistryMaps>,
    generation: u64,
}

impl DefinitionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_built(&self) -> bool {
        self.maps.is_some()
    }

    /// Number of times the maps have been built.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The current maps, if built.
    pub fn maps(&self) -> Option<&RegistryMaps> {
        self.maps.as_ref()
    }

    /// Drop the maps; the next [`ensure_built`](Self::ensure_built) rebuilds them.
    pub fn invalidate(&mut self) {
        self.maps = None;
    }

    /// Return the maps, building them from `definitions` first if stale.
    pub fn ensure_built(&mut self, definitions: &[Definition]) -> &RegistryMaps {
        if self.maps.is_none() {
            self.generation += 1;

            #[cfg(feature = "tracing")]
            tracing::trace!(
                "Rebuilding definition maps (generation {}, {} definitions)",
                self.generation,
                definitions.len()
            );
        }

        self.maps.get_or_insert_with(|| RegistryMaps::build(definitions))
    }
}
