//! Layout of named placements through Taffy's grid algorithm

use named_grid::{
    Axis, Definition, ElementId, GridLength, LayoutSize, NamedGridPanel, PhysicalDefinition,
    PlacedElement,
};
use named_grid_taffy::TaffyGrid;

fn init_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn fixed(name: &str, pixels: f32) -> PhysicalDefinition {
    PhysicalDefinition::named(name).with_size(GridLength::Fixed(pixels))
}

/// Columns Left, Center and Right at 100px; rows Top and Bottom at 50px.
fn three_by_two() -> NamedGridPanel<TaffyGrid> {
    init_logging();
    let mut panel = NamedGridPanel::new(TaffyGrid::new().unwrap());
    let mut columns = panel.columns_mut();
    for name in ["Left", "Center", "Right"] {
        columns.push(fixed(name, 100.0)).unwrap();
    }
    let mut rows = panel.rows_mut();
    rows.push(fixed("Top", 50.0)).unwrap();
    rows.push(fixed("Bottom", 50.0)).unwrap();
    panel
}

fn assert_rect(panel: &NamedGridPanel<TaffyGrid>, id: ElementId, expected: [f32; 4]) {
    let layout = panel.grid().element_layout(id).unwrap();
    let actual = [
        layout.location.x,
        layout.location.y,
        layout.size.width,
        layout.size.height,
    ];
    for (got, want) in actual.iter().zip(expected) {
        assert!(
            (got - want).abs() < 0.01,
            "expected rect {expected:?}, got {actual:?}"
        );
    }
}

#[test]
fn spanning_element_covers_its_tracks() {
    let mut panel = three_by_two();
    let banner = panel
        .add_child(
            PlacedElement::new()
                .with_column("Left")
                .with_extend_to_column("Right")
                .with_row("Top"),
        )
        .unwrap();
    let cell = panel.add_child(PlacedElement::at("Center", "Bottom")).unwrap();

    panel.arrange(LayoutSize::new(300.0, 100.0)).unwrap();

    assert_rect(&panel, banner, [0.0, 0.0, 300.0, 50.0]);
    assert_rect(&panel, cell, [100.0, 50.0, 100.0, 50.0]);
}

#[test]
fn virtual_regions_span_their_targets() {
    let mut panel = three_by_two();
    panel
        .columns_mut()
        .push(Definition::spanning("Content", "Center", "Right"))
        .unwrap();
    let id = panel
        .add_child(PlacedElement::new().with_column("Content").with_row("Bottom"))
        .unwrap();

    panel.arrange(LayoutSize::new(300.0, 100.0)).unwrap();

    assert_rect(&panel, id, [100.0, 50.0, 200.0, 50.0]);
}

#[test]
fn star_columns_share_free_space() {
    init_logging();
    let mut panel = NamedGridPanel::new(TaffyGrid::new().unwrap());
    let mut columns = panel.columns_mut();
    columns
        .push(PhysicalDefinition::named("Narrow").with_size(GridLength::Star(1.0)))
        .unwrap();
    columns
        .push(PhysicalDefinition::named("Wide").with_size(GridLength::Star(3.0)))
        .unwrap();
    panel.rows_mut().push(Definition::physical("Only")).unwrap();

    let narrow = panel.add_child(PlacedElement::at("Narrow", "Only")).unwrap();
    let wide = panel.add_child(PlacedElement::at("Wide", "Only")).unwrap();

    panel.arrange(LayoutSize::new(400.0, 100.0)).unwrap();

    assert_rect(&panel, narrow, [0.0, 0.0, 100.0, 100.0]);
    assert_rect(&panel, wide, [100.0, 0.0, 300.0, 100.0]);
}

#[test]
fn inserting_a_track_shifts_elements() {
    let mut panel = three_by_two();
    let id = panel.add_child(PlacedElement::at("Left", "Top")).unwrap();

    panel.columns_mut().insert(0, fixed("Gutter", 20.0)).unwrap();
    panel.arrange(LayoutSize::new(320.0, 100.0)).unwrap();

    assert_eq!(panel.grid().slots(Axis::Column).len(), 4);
    assert_rect(&panel, id, [20.0, 0.0, 100.0, 50.0]);
}

#[test]
fn measure_sums_fixed_tracks() {
    let mut panel = three_by_two();
    let desired = panel
        .measure(LayoutSize::new(f32::INFINITY, f32::INFINITY))
        .unwrap();

    assert!((desired.width - 300.0).abs() < 0.01);
    assert!((desired.height - 100.0).abs() < 0.01);
}

#[test]
fn size_changes_reach_the_template() {
    let mut panel = three_by_two();
    let id = panel.add_child(PlacedElement::at("Right", "Top")).unwrap();

    panel.columns_mut().set_size(0, Some(GridLength::Fixed(40.0))).unwrap();
    panel.arrange(LayoutSize::new(240.0, 100.0)).unwrap();

    assert_rect(&panel, id, [140.0, 0.0, 100.0, 50.0]);
}
