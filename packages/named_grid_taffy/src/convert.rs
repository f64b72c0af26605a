//! Conversion functions from named-grid slot and placement types to Taffy types

use named_grid::{GridLength, Placement, SlotSpec};
use taffy::prelude::*;
use taffy::{MaxTrackSizingFunction, MinTrackSizingFunction};

/// Track sizing for one slot.
///
/// Fixed tracks are clamped to their bounds up front. Star tracks keep their
/// minimum as a floor and grow by their share of the free space; Taffy has no
/// ceiling for flexible tracks, so `max_size` does not apply to them. Auto
/// tracks are sized to content, capped by `max_size` when it is finite.
pub fn track_sizing(slot: &SlotSpec) -> taffy::TrackSizingFunction {
    let max_size = slot.max_size.max(slot.min_size);

    match slot.size {
        GridLength::Fixed(pixels) => {
            let pixels = pixels.clamp(slot.min_size, max_size);
            taffy::MinMax {
                min: MinTrackSizingFunction::from_length(pixels),
                max: MaxTrackSizingFunction::from_length(pixels),
            }
        }
        GridLength::Star(share) => taffy::MinMax {
            min: MinTrackSizingFunction::from_length(slot.min_size),
            max: MaxTrackSizingFunction::from_fr(share),
        },
        GridLength::Auto => taffy::MinMax {
            min: if slot.min_size > 0.0 {
                MinTrackSizingFunction::from_length(slot.min_size)
            } else {
                MinTrackSizingFunction::AUTO
            },
            max: if max_size.is_finite() {
                MaxTrackSizingFunction::fit_content(LengthPercentage::from_length(max_size))
            } else {
                MaxTrackSizingFunction::AUTO
            },
        },
    }
}

/// Grid lines for a placement. Taffy lines are 1-based.
pub fn grid_placement(placement: Placement) -> taffy::Line<taffy::GridPlacement> {
    let start = i16::try_from(placement.index + 1).unwrap_or_else(|_| {
        tracing::warn!(
            "Slot index {} exceeds the Taffy line range, clamping",
            placement.index
        );
        i16::MAX
    });
    let span = u16::try_from(placement.span.max(1)).unwrap_or(u16::MAX);

    taffy::Line {
        start: taffy::style_helpers::line(start),
        end: taffy::style_helpers::span(span),
    }
}

/// Available space along one axis; infinite or NaN extents mean unconstrained.
pub fn available_space(extent: f32) -> AvailableSpace {
    if extent.is_finite() {
        AvailableSpace::Definite(extent.max(0.0))
    } else {
        AvailableSpace::MaxContent
    }
}
