//! End-to-end placement through the panel and the in-memory grid

use named_grid::{
    AliasCyclePolicy, Axis, Definition, ElementId, GridLength, GridRange, HeadlessGrid,
    NamedGridError, NamedGridPanel, ObservableDefinitions, PanelConfig, PhysicalDefinition,
    PlacedElement, Placement, SourceItem, VirtualDefinition,
};
use tracing_subscriber::filter::LevelFilter;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_test_writer()
        .try_init();
}

fn panel_with_columns(names: &[&str]) -> NamedGridPanel<HeadlessGrid> {
    init_logging();
    let mut panel = NamedGridPanel::new(HeadlessGrid::new());
    let mut columns = panel.columns_mut();
    for name in names {
        columns.push(Definition::physical(*name)).unwrap();
    }
    panel
}

fn column_of(panel: &NamedGridPanel<HeadlessGrid>, id: ElementId) -> Placement {
    panel.grid().placement(id, Axis::Column).unwrap()
}

#[test]
fn left_to_right_spans_every_column() {
    let mut panel = panel_with_columns(&["Left", "Center", "Right"]);
    let id = panel
        .add_child(
            PlacedElement::new()
                .with_column("Left")
                .with_extend_to_column("Right"),
        )
        .unwrap();

    assert_eq!(column_of(&panel, id), Placement { index: 0, span: 3 });
}

#[test]
fn physical_indices_ignore_interspersed_virtuals() {
    let mut panel = panel_with_columns(&[]);
    let mut columns = panel.columns_mut();
    columns.push(Definition::alias("Lead", "A")).unwrap();
    columns.push(Definition::physical("A")).unwrap();
    columns.push(PhysicalDefinition::new()).unwrap();
    columns.push(Definition::spanning("Body", "A", "C")).unwrap();
    columns.push(Definition::physical("C")).unwrap();

    assert_eq!(panel.grid().slot_count(Axis::Column), 3);
    assert_eq!(panel.resolve_range(Axis::Column, "A"), Ok(GridRange::single(0)));
    assert_eq!(panel.resolve_range(Axis::Column, "C"), Ok(GridRange::single(2)));
    assert_eq!(panel.resolve_range(Axis::Column, "Lead"), Ok(GridRange::single(0)));
    assert_eq!(panel.resolve_range(Axis::Column, "Body"), Ok(GridRange::new(0, 2)));
}

#[test]
fn insertion_reindexes_and_replaces_elements() {
    let mut panel = panel_with_columns(&["A", "B"]);
    let on_a = panel.add_child(PlacedElement::new().with_column("A")).unwrap();
    let on_b = panel.add_child(PlacedElement::new().with_column("B")).unwrap();
    assert_eq!(column_of(&panel, on_a).index, 0);

    panel.columns_mut().insert(0, Definition::physical("X")).unwrap();

    assert_eq!(column_of(&panel, on_a).index, 1);
    assert_eq!(column_of(&panel, on_b).index, 2);

    panel.columns_mut().remove_at(0).unwrap();
    assert_eq!(column_of(&panel, on_a).index, 0);
}

#[test]
fn virtual_insertion_never_shifts_tracks() {
    let mut panel = panel_with_columns(&["A", "B"]);
    let on_b = panel.add_child(PlacedElement::new().with_column("B")).unwrap();

    panel.columns_mut().insert(0, Definition::alias("First", "A")).unwrap();

    assert_eq!(panel.grid().slot_count(Axis::Column), 2);
    assert_eq!(column_of(&panel, on_b).index, 1);
}

#[test]
fn dangling_and_missing_names_fall_back_to_origin() {
    let mut panel = panel_with_columns(&["A", "B", "C"]);
    panel.columns_mut().push(Definition::alias("Ghost", "Nowhere")).unwrap();

    let missing = panel.add_child(PlacedElement::new().with_column("Missing")).unwrap();
    let ghost = panel.add_child(PlacedElement::new().with_column("Ghost")).unwrap();
    let unnamed = panel.add_child(PlacedElement::new()).unwrap();

    for id in [missing, ghost, unnamed] {
        assert_eq!(column_of(&panel, id), Placement::ORIGIN);
    }
}

#[test]
fn renaming_a_definition_moves_elements_onto_it() {
    let mut panel = panel_with_columns(&["A", "B"]);
    let id = panel.add_child(PlacedElement::new().with_column("Later")).unwrap();
    assert_eq!(column_of(&panel, id), Placement::ORIGIN);

    panel.columns_mut().set_name(1, Some("Later".into())).unwrap();
    assert_eq!(column_of(&panel, id).index, 1);
}

#[test]
fn row_and_column_resolve_independently() {
    let mut panel = panel_with_columns(&["Shared", "Other"]);
    let mut rows = panel.rows_mut();
    rows.push(Definition::physical("Other")).unwrap();
    rows.push(Definition::physical("Shared")).unwrap();

    let id = panel.add_child(PlacedElement::at("Shared", "Shared")).unwrap();

    assert_eq!(column_of(&panel, id).index, 0);
    assert_eq!(panel.grid().placement(id, Axis::Row).map(|p| p.index), Some(1));
}

#[test]
fn clearing_definitions_empties_the_grid() {
    let mut panel = panel_with_columns(&["A", "B", "C"]);
    let id = panel.add_child(PlacedElement::new().with_column("C")).unwrap();

    panel.columns_mut().clear().unwrap();

    assert!(panel.columns().is_empty());
    assert_eq!(panel.grid().slot_count(Axis::Column), 0);
    assert_eq!(column_of(&panel, id), Placement::ORIGIN);
}

#[test]
fn default_sizes_come_from_config() {
    init_logging();
    let config = PanelConfig {
        default_row_size: GridLength::Auto,
        ..PanelConfig::default()
    };
    let mut panel = NamedGridPanel::with_config(HeadlessGrid::new(), config);
    panel.rows_mut().push(Definition::physical("Header")).unwrap();
    panel.columns_mut().push(Definition::physical("Main")).unwrap();
    panel
        .columns_mut()
        .push(VirtualDefinition::alias("Alias", "Main"))
        .unwrap();

    assert_eq!(panel.grid().slots(Axis::Row)[0].size, GridLength::Auto);
    assert_eq!(panel.grid().slots(Axis::Column)[0].size, GridLength::STAR);
}

#[test]
fn bound_lists_follow_their_source() {
    init_logging();
    let mut panel = NamedGridPanel::new(HeadlessGrid::new());
    let source = ObservableDefinitions::from_items(vec![
        SourceItem::from("Nav"),
        SourceItem::from(GridLength::Fixed(20.0)),
        SourceItem::Null,
        SourceItem::from(Definition::alias("Rest", "Nav")),
    ]);
    panel.bind_source(Axis::Column, source.clone()).unwrap();

    assert_eq!(panel.grid().slot_count(Axis::Column), 3);
    assert_eq!(panel.grid().slots(Axis::Column)[1].size, GridLength::Fixed(20.0));
    assert_eq!(
        panel.columns_mut().push(Definition::physical("Extra")),
        Err(NamedGridError::ReadOnlyList { axis: Axis::Column })
    );

    let id = panel.add_child(PlacedElement::new().with_column("Rest")).unwrap();
    assert_eq!(column_of(&panel, id).index, 0);

    source.insert(0, "Gutter").unwrap();
    assert!(panel.sync_sources().unwrap());
    assert_eq!(column_of(&panel, id).index, 1);
    assert!(!panel.sync_sources().unwrap());
}

#[test]
fn static_sources_resync_only_on_request() {
    init_logging();
    let mut panel = NamedGridPanel::new(HeadlessGrid::new());
    panel
        .bind_source(Axis::Row, vec![SourceItem::from("Top"), SourceItem::from("Bottom")])
        .unwrap();

    assert!(!panel.sync_sources().unwrap());
    assert_eq!(panel.rows().len(), 2);
    assert_eq!(panel.resolve_range(Axis::Row, "Bottom"), Ok(GridRange::single(1)));
}

#[test]
fn source_edits_are_resolved_without_an_explicit_sync() {
    init_logging();
    let mut panel = NamedGridPanel::new(HeadlessGrid::new());
    let source = ObservableDefinitions::from_items(["A", "B"]);
    panel.bind_source(Axis::Column, source.clone()).unwrap();
    let id = panel.add_child(PlacedElement::new().with_column("B")).unwrap();

    source.insert(0, "X").unwrap();

    assert_eq!(panel.resolve_range(Axis::Column, "B"), Ok(GridRange::single(2)));
    assert_eq!(column_of(&panel, id), Placement { index: 2, span: 1 });
    assert_eq!(panel.columns().len(), 3);
}

#[test]
fn rejected_cycles_leave_no_element_behind() {
    init_logging();
    let config = PanelConfig {
        alias_cycle_policy: AliasCyclePolicy::Reject,
        ..PanelConfig::default()
    };
    let mut panel = NamedGridPanel::with_config(HeadlessGrid::new(), config);
    let mut columns = panel.columns_mut();
    columns.push(Definition::physical("A")).unwrap();
    columns.push(Definition::alias("V1", "V2")).unwrap();
    columns.push(Definition::alias("V2", "V1")).unwrap();

    let result = panel.add_child(PlacedElement::new().with_column("V1"));

    assert!(matches!(result, Err(NamedGridError::AliasCycle { .. })));
    assert_eq!(panel.child_count(), 0);
    assert!(!panel.grid().is_attached(ElementId::from(0)));
}
