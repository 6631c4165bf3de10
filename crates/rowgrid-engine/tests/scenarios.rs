#![forbid(unsafe_code)]

//! End-to-end behaviour of the row engine on small, fixed fixtures.

use rowgrid_core::{Column, Prop, Row, SortCriterion, SortDirection, SortType, Value};
use rowgrid_engine::{
    PagingMode, SortState, Table, TreeRelation, TreeStatuses, ViewConfig, flatten_tree,
    sort_rows,
};
use rowgrid_layout::{ColumnMode, ForceFillOptions, PinnedWidths, distribute};

fn strings(rows: &[Row], prop: &str) -> Vec<String> {
    rows.iter()
        .map(|r| r.get(&Prop::from(prop)).to_string())
        .collect()
}

#[test]
fn scenario_a_toggle_id_sort() {
    let rows = vec![
        Row::new().with("id", 5),
        Row::new().with("id", 20),
        Row::new().with("id", 12),
    ];
    let columns = vec![Column::new("id")];
    let mut state = SortState::new(SortType::Single);

    state.toggle(&columns[0]);
    let asc = sort_rows(&rows, &columns, state.criteria());
    assert_eq!(strings(&asc, "id"), ["5", "12", "20"]);

    state.toggle(&columns[0]);
    let desc = sort_rows(&rows, &columns, state.criteria());
    assert_eq!(strings(&desc, "id"), ["20", "12", "5"]);
}

fn people() -> Vec<Row> {
    [
        ("sed", "CA"),
        ("dolor", "NY"),
        ("ipsum", "NY"),
        ("foo", "CA"),
        ("bar", "CA"),
        ("cat", "CA"),
        ("sit", "CA"),
        ("man", "CA"),
        ("lorem", "NY"),
        ("amet", "NY"),
        ("maecennas", "NY"),
    ]
    .into_iter()
    .map(|(name, state)| Row::new().with("name", name).with("state", state))
    .collect()
}

#[test]
fn scenario_b_successive_sorts_are_stable() {
    let columns = vec![
        Column::new("name").comparator(|a, b, _, _| {
            a.to_display_string()
                .len()
                .cmp(&b.to_display_string().len())
        }),
        Column::new("state"),
    ];
    let mut sort = SortState::new(SortType::Single);

    // Each sort runs over the previous output, the way a host keeps its rows.
    sort.toggle(&columns[0]);
    let rows = sort_rows(&people(), &columns, sort.criteria());
    sort.toggle(&columns[1]);
    let rows = sort_rows(&rows, &columns, sort.criteria());
    let event = sort.toggle(&columns[1]).unwrap();
    assert_eq!(event.new, Some(SortDirection::Desc));
    assert_eq!(sort.criteria(), &[SortCriterion::desc("state")]);
    let rows = sort_rows(&rows, &columns, sort.criteria());

    assert_eq!(
        strings(&rows, "name"),
        [
            "amet", "dolor", "ipsum", "lorem", "maecennas", "sed", "foo", "bar", "cat", "sit",
            "man"
        ]
    );
}

#[test]
fn scenario_b_as_multi_sort() {
    let columns = vec![
        Column::new("name").comparator(|a, b, _, _| {
            a.to_display_string()
                .len()
                .cmp(&b.to_display_string().len())
        }),
        Column::new("state"),
    ];
    let criteria = [SortCriterion::desc("state"), SortCriterion::asc("name")];
    let rows = sort_rows(&people(), &columns, &criteria);
    assert_eq!(
        strings(&rows, "name")[..5],
        ["amet", "dolor", "ipsum", "lorem", "maecennas"]
    );
}

#[test]
fn scenario_c_force_fill_grows_proportionally() {
    let columns = vec![
        Column::new("name").width(150.0),
        Column::new("gender").width(150.0),
        Column::new("company").width(150.0).max_width(300.0),
    ];
    let widths = distribute(
        ColumnMode::Force,
        &columns,
        500.0,
        &PinnedWidths::new(),
        ForceFillOptions::default(),
    );
    for w in &widths {
        assert!((w - (150.0 + 50.0 / 3.0)).abs() < 1e-9);
    }
    assert!((widths.iter().sum::<f64>() - 500.0).abs() < 1e-9);
}

#[test]
fn scenario_d_tree_levels() {
    let rows = vec![
        Row::new().with("id", "A"),
        Row::new().with("id", "B").with("parent", "A"),
        Row::new().with("id", "C").with("parent", "missing"),
    ];
    let view = flatten_tree(
        &rows,
        &TreeRelation::new("parent", "id"),
        &TreeStatuses::expanded(),
    );
    let shape: Vec<_> = view
        .rows
        .iter()
        .map(|t| (t.row.get(&"id".into()).to_string(), t.level))
        .collect();
    assert_eq!(
        shape,
        vec![("A".to_string(), 0), ("B".to_string(), 1), ("C".to_string(), 0)]
    );
}

#[test]
fn table_pipeline_end_to_end() {
    let rows: Vec<Row> = (1..=30)
        .map(|i| {
            Row::new()
                .with("id", i)
                .with("amount", if i % 5 == 0 { Value::Null } else { Value::from(i * 10) })
        })
        .collect();
    let table = Table::new(
        vec![
            Column::new("id").width(80.0),
            Column::new("amount").width(120.0).min_width(100.0),
        ],
        ViewConfig::default()
            .paging(PagingMode::Limit(8))
            .column_mode(ColumnMode::Force)
            .summary_row(true),
    );
    let mut state = table.state().with_width(500.0);

    let change = state.sort_column(&table, "amount", &rows).unwrap().unwrap();
    assert_eq!(change.page.count, 30);
    let ev = state.set_page(&table, &rows, 3);
    assert_eq!(ev.offset, 3);

    let view = table.view(&rows, &state);
    let page = view.page();
    assert_eq!(page.len(), 6);
    assert_eq!(strings(&page, "amount"), ["230", "240", "260", "270", "280", "290"]);
    assert_eq!(view.pixel_widths.iter().sum::<u32>(), 500);
    assert_eq!(view.pixel_widths, vec![200, 300]);

    let summary = view.summary.as_ref().unwrap();
    assert_eq!(summary[1].value, Value::from(3600));
    state.remember(&view);
    assert_eq!(state.last_pixel_widths.as_deref(), Some(&[200, 300][..]));
}
