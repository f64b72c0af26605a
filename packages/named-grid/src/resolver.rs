//! Resolution of column/row names to physical index ranges
//!
//! A name resolves to the inclusive range of physical indices it covers. Names
//! of physical definitions cover exactly their own index; virtual definitions
//! cover the union of whatever their `start_at` and `extend_to` names cover,
//! followed transitively.
//!
//! # Algorithm
//! Breadth-first traversal from the requested name with a visited set:
//! 1. Pop a name; skip it if already visited, otherwise mark it visited
//! 2. If it has a physical index, record it as a min/max candidate
//! 3. Otherwise, if it names a virtual definition, enqueue its targets
//! 4. When the queue is empty, the candidates' min and max form the range
//!
//! Names that never reach a physical index resolve to `[0, 0]`. This keeps
//! partially built or momentarily inconsistent definition lists from failing
//! layout.

use std::collections::{HashSet, VecDeque};

use crate::config::AliasCyclePolicy;
use crate::definition::Definition;
use crate::error::{NamedGridError, NamedGridResult};
use crate::registry::RegistryMaps;

/// An inclusive range of physical indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GridRange {
    pub from: usize,
    pub to: usize,
}

impl GridRange {
    /// The fallback range for names that resolve to nothing.
    pub const ZERO: GridRange = GridRange { from: 0, to: 0 };

    /// A range covering `a` through `b` in either order.
    pub fn new(a: usize, b: usize) -> Self {
        GridRange {
            from: a.min(b),
            to: a.max(b),
        }
    }

    pub fn single(index: usize) -> Self {
        GridRange {
            from: index,
            to: index,
        }
    }

    /// Number of physical slots covered, always at least one.
    pub fn span(&self) -> usize {
        self.to - self.from + 1
    }

    pub fn union(self, other: GridRange) -> GridRange {
        GridRange {
            from: self.from.min(other.from),
            to: self.to.max(other.to),
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.from..=self.to).contains(&index)
    }
}

/// Resolves names against one built set of [`RegistryMaps`].
///
/// Virtual definitions are read live from `definitions`, so alias targets may
/// change without the maps being rebuilt.
#[derive(Debug, Clone, Copy)]
pub struct RangeResolver<'a> {
    maps: &'a RegistryMaps,
    definitions: &'a [Definition],
}

impl<'a> RangeResolver<'a> {
    pub fn new(maps: &'a RegistryMaps, definitions: &'a [Definition]) -> Self {
        Self { maps, definitions }
    }

    fn definition(&self, name: &str) -> Option<&'a Definition> {
        self.maps
            .definition_position(name)
            .and_then(|position| self.definitions.get(position))
    }

    /// The range `name` covers, or `None` when it reaches no physical index.
    pub fn try_resolve(&self, name: &str) -> Option<GridRange> {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut pending: VecDeque<&str> = VecDeque::new();
        let mut resolved: Option<GridRange> = None;

        pending.push_back(name);

        while let Some(current) = pending.pop_front() {
            if !visited.insert(current) {
                continue;
            }

            if let Some(index) = self.maps.physical_index(current) {
                let candidate = GridRange::single(index);
                resolved = Some(match resolved {
                    Some(range) => range.union(candidate),
                    None => candidate,
                });
            } else if let Some(Definition::Virtual(alias)) = self.definition(current) {
                pending.extend(alias.targets());
            }
        }

        resolved
    }

    /// The range `name` covers, `[0, 0]` when unresolvable.
    pub fn resolve_range(&self, name: &str) -> GridRange {
        self.try_resolve(name).unwrap_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::trace!("Name {:?} does not resolve to a physical index", name);
            GridRange::ZERO
        })
    }

    /// The range covered by a start/extend-to name pair.
    ///
    /// Two distinct names yield the union of their ranges, in either order. A
    /// single name (or the same name twice) resolves alone. No names yield
    /// `[0, 0]`.
    pub fn resolve_pair(&self, first: Option<&str>, second: Option<&str>) -> GridRange {
        match self.resolve_pair_with(first, second, |name| Ok(self.resolve_range(name))) {
            Ok(range) => range,
            Err(_) => GridRange::ZERO,
        }
    }

    /// Like [`resolve_pair`](Self::resolve_pair), but applies `policy` to
    /// names that fail to resolve because of an alias cycle.
    pub fn resolve_pair_checked(
        &self,
        first: Option<&str>,
        second: Option<&str>,
        policy: AliasCyclePolicy,
    ) -> NamedGridResult<GridRange> {
        self.resolve_pair_with(first, second, |name| self.resolve_checked(name, policy))
    }

    fn resolve_pair_with<F>(
        &self,
        first: Option<&str>,
        second: Option<&str>,
        mut resolve: F,
    ) -> NamedGridResult<GridRange>
    where
        F: FnMut(&str) -> NamedGridResult<GridRange>,
    {
        match (first, second) {
            (Some(first), Some(second)) if first != second => {
                Ok(resolve(first)?.union(resolve(second)?))
            }
            (Some(name), _) | (None, Some(name)) => resolve(name),
            (None, None) => Ok(GridRange::ZERO),
        }
    }

    /// Resolve `name`, applying `policy` when it is unresolvable because of
    /// an alias cycle.
    pub fn resolve_checked(
        &self,
        name: &str,
        policy: AliasCyclePolicy,
    ) -> NamedGridResult<GridRange> {
        if let Some(range) = self.try_resolve(name) {
            return Ok(range);
        }

        let Some(chain) = self.find_alias_cycle(name) else {
            return Ok(GridRange::ZERO);
        };

        match policy {
            AliasCyclePolicy::Fallback => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    "Alias cycle {} never reaches a physical index; {:?} falls back to [0, 0]",
                    chain.join(" -> "),
                    name
                );
                Ok(GridRange::ZERO)
            }
            AliasCyclePolicy::Reject => Err(NamedGridError::AliasCycle {
                name: name.to_string(),
                chain,
            }),
        }
    }

    /// A chain of virtual names that leads from `name` back into itself,
    /// closing with the repeated name. `None` when no cycle is reachable.
    pub fn find_alias_cycle(&self, name: &str) -> Option<Vec<String>> {
        let mut path = Vec::new();
        let mut finished = HashSet::new();
        self.find_cycle_from(name, &mut path, &mut finished)
    }

    fn find_cycle_from<'n>(
        &self,
        name: &'n str,
        path: &mut Vec<&'n str>,
        finished: &mut HashSet<&'n str>,
    ) -> Option<Vec<String>>
    where
        'a: 'n,
    {
        if let Some(start) = path.iter().position(|entry| *entry == name) {
            let mut chain: Vec<String> = path[start..].iter().map(|n| n.to_string()).collect();
            chain.push(name.to_string());
            return Some(chain);
        }

        if finished.contains(name) || self.maps.physical_index(name).is_some() {
            return None;
        }

        let Some(Definition::Virtual(alias)) = self.definition(name) else {
            return None;
        };

        path.push(name);
        for target in alias.targets() {
            if let Some(chain) = self.find_cycle_from(target, path, finished) {
                return Some(chain);
            }
        }
        path.pop();
        finished.insert(name);

        None
    }
}
