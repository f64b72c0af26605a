//! Physical placement of elements
//!
//! Placement turns an element's name pair into the start index and span that
//! the underlying grid understands. Each element and each axis is placed
//! independently, so the order in which elements are visited never changes
//! the result.

use crate::axis::Axis;
use crate::config::AliasCyclePolicy;
use crate::element::{ElementId, PlacedElement};
use crate::error::NamedGridResult;
use crate::grid::FixedIndexGrid;
use crate::resolver::{GridRange, RangeResolver};

/// Start index and span of an element along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub index: usize,
    pub span: usize,
}

impl Placement {
    /// First slot, single span: where unresolvable names end up.
    pub const ORIGIN: Placement = Placement { index: 0, span: 1 };

    /// One past the last covered slot.
    pub fn end(&self) -> usize {
        self.index + self.span
    }
}

impl Default for Placement {
    fn default() -> Self {
        Placement::ORIGIN
    }
}

impl From<GridRange> for Placement {
    fn from(range: GridRange) -> Self {
        Placement {
            index: range.from,
            span: range.span(),
        }
    }
}

/// Resolve `element`'s names on `axis`.
pub fn resolve_placement(
    resolver: &RangeResolver<'_>,
    element: &PlacedElement,
    axis: Axis,
    policy: AliasCyclePolicy,
) -> NamedGridResult<Placement> {
    let names = element.names(axis);
    let range = resolver.resolve_pair_checked(names.start(), names.extend_to(), policy)?;
    Ok(Placement::from(range))
}

/// Resolve `element`'s names on `axis` and publish the result to `grid`.
pub(crate) fn place_on_axis<G: FixedIndexGrid + ?Sized>(
    grid: &mut G,
    resolver: &RangeResolver<'_>,
    id: ElementId,
    element: &PlacedElement,
    axis: Axis,
    policy: AliasCyclePolicy,
) -> NamedGridResult<Placement> {
    let placement = resolve_placement(resolver, element, axis, policy)?;
    grid.set_element_placement(id, axis, placement)?;

    #[cfg(feature = "tracing")]
    tracing::trace!(
        "Placed element {} on {} {} (span {})",
        id.index(),
        axis,
        placement.index,
        placement.span
    );

    Ok(placement)
}
