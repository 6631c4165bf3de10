//! Force-fill and flex scenarios on realistic column sets.

use rowgrid_core::{Column, Pin};
use rowgrid_layout::{
    ColumnMode, ForceFillOptions, PinnedWidths, distribute, group_widths, round_widths_stable,
};

fn three_columns() -> Vec<Column> {
    vec![
        Column::new("name").width(150.0).max_width(300.0),
        Column::new("gender").width(150.0).max_width(300.0),
        Column::new("company").width(150.0).max_width(300.0),
    ]
}

#[test]
fn extra_space_is_shared_equally_between_equal_columns() {
    let columns = three_columns();
    let widths = distribute(
        ColumnMode::Force,
        &columns,
        500.0,
        &PinnedWidths::new(),
        ForceFillOptions::default(),
    );
    for (col, w) in columns.iter().zip(&widths) {
        assert!((w - 150.0 - 50.0 / 3.0).abs() < 1e-9, "{w}");
        assert!(*w <= col.max_width.unwrap_or(f64::INFINITY));
    }

    let px = round_widths_stable(&widths, 500, None);
    assert_eq!(px.iter().sum::<u32>(), 500);
    assert!(px.iter().all(|&p| p == 166 || p == 167));
}

#[test]
fn growth_stops_at_max_width() {
    let columns = three_columns();
    let widths = distribute(
        ColumnMode::Force,
        &columns,
        2000.0,
        &PinnedWidths::new(),
        ForceFillOptions::default(),
    );
    assert_eq!(widths, vec![300.0, 300.0, 300.0]);
}

#[test]
fn manual_resize_redistributes_later_columns() {
    let columns = three_columns();
    let mut pins = PinnedWidths::new();
    pins.pin("name", 250.0);
    let widths = distribute(
        ColumnMode::Force,
        &columns,
        500.0,
        &pins,
        ForceFillOptions::default().resized_index(Some(0)),
    );
    assert_eq!(widths[0], 250.0);
    assert!((widths[1] - 125.0).abs() < 1e-9);
    assert!((widths[2] - 125.0).abs() < 1e-9);
}

#[test]
fn pin_regions_add_up() {
    let columns = vec![
        Column::new("id").width(60.0).pin(Pin::Left),
        Column::new("name").width(200.0),
        Column::new("actions").width(90.0).pin(Pin::Right),
    ];
    let widths = distribute(
        ColumnMode::Standard,
        &columns,
        0.0,
        &PinnedWidths::new(),
        ForceFillOptions::default(),
    );
    let groups = group_widths(&columns, &widths);
    assert_eq!((groups.left, groups.center, groups.right), (60.0, 200.0, 90.0));
    assert_eq!(groups.total, 350.0);
}
