#![forbid(unsafe_code)]

//! The composed view pipeline.
//!
//! [`Table`] holds the column list and the [`ViewConfig`]; [`TableState`]
//! holds what user interaction changes (sort, page, pinned widths, expansion,
//! selection). [`Table::view`] runs every stage from scratch over a row
//! snapshot:
//!
//! ```text
//! rows ─▶ sort ─▶ group / tree ─▶ count ─▶ page window
//! columns + width + pins ─▶ distribute ─▶ round ─▶ pin groups
//! ```
//!
//! Each stage is also available on its own in the sibling modules.

use crate::compare::NullOrder;
use crate::events::{PageEvent, ReorderEvent, ResizeEvent, SortChange};
use crate::group::{GroupExpansion, GroupItem, Grouping, group_rows_by};
use crate::grouped_sort::sort_grouped_with;
use crate::pager::{PageWindow, PagingMode, RowCountSource, page_size};
use crate::reorder::reorder_columns;
use crate::selection::{RowIdentity, Selection};
use crate::sort::{SortOptions, sort_rows_with};
use crate::sort_state::SortState;
use crate::summary::{SummaryCell, summary_row};
use crate::tree::{TreeRelation, TreeStatus, TreeStatuses, TreeView, flatten_tree};
use rowgrid_core::{Column, GridError, Prop, Row, SortCriterion, SortType, Value};
use rowgrid_layout::{
    ColumnMode, ForceFillOptions, PinGroupWidths, PinnedWidths, distribute, group_widths,
    round_widths_stable,
};

/// Table-level configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewConfig {
    /// Initial sort criteria.
    pub sorts: Vec<SortCriterion>,
    pub sort_type: SortType,
    /// Third activation of a sorted header clears its sort.
    pub clear_sort_after_both: bool,
    pub nulls: NullOrder,
    /// Flat grouping key.
    pub group_by: Option<Prop>,
    /// Tree grouping relation.
    pub tree: Option<TreeRelation>,
    pub paging: PagingMode,
    /// Row count reported by the host when it pages the data itself. The
    /// rows handed to [`Table::view`] are then the current page.
    pub external_count: Option<usize>,
    /// The host sorts the data itself; rows are kept in the order given.
    pub external_sorting: bool,
    pub column_mode: ColumnMode,
    pub allow_bleed: bool,
    /// The header checkbox selects the visible page instead of every row.
    pub select_all_rows_on_page: bool,
    pub summary_row: bool,
    /// Dragging a column swaps it with the drop target instead of shifting.
    pub swap_columns: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            sorts: Vec::new(),
            sort_type: SortType::Single,
            clear_sort_after_both: false,
            nulls: NullOrder::Low,
            group_by: None,
            tree: None,
            paging: PagingMode::Unpaged,
            external_count: None,
            external_sorting: false,
            column_mode: ColumnMode::Standard,
            allow_bleed: false,
            select_all_rows_on_page: false,
            summary_row: false,
            swap_columns: true,
        }
    }
}

impl ViewConfig {
    #[must_use]
    pub fn sorts(mut self, sorts: impl IntoIterator<Item = SortCriterion>) -> Self {
        self.sorts = sorts.into_iter().collect();
        self
    }

    #[must_use]
    pub fn sort_type(mut self, sort_type: SortType) -> Self {
        self.sort_type = sort_type;
        self
    }

    #[must_use]
    pub fn clear_sort_after_both(mut self, on: bool) -> Self {
        self.clear_sort_after_both = on;
        self
    }

    #[must_use]
    pub fn nulls(mut self, nulls: NullOrder) -> Self {
        self.nulls = nulls;
        self
    }

    #[must_use]
    pub fn group_by(mut self, prop: impl Into<Prop>) -> Self {
        self.group_by = Some(prop.into());
        self
    }

    #[must_use]
    pub fn tree(mut self, relation: TreeRelation) -> Self {
        self.tree = Some(relation);
        self
    }

    #[must_use]
    pub fn paging(mut self, paging: PagingMode) -> Self {
        self.paging = paging;
        self
    }

    #[must_use]
    pub fn external_count(mut self, count: Option<usize>) -> Self {
        self.external_count = count;
        self
    }

    #[must_use]
    pub fn external_sorting(mut self, on: bool) -> Self {
        self.external_sorting = on;
        self
    }

    #[must_use]
    pub fn column_mode(mut self, mode: ColumnMode) -> Self {
        self.column_mode = mode;
        self
    }

    #[must_use]
    pub fn allow_bleed(mut self, on: bool) -> Self {
        self.allow_bleed = on;
        self
    }

    #[must_use]
    pub fn select_all_rows_on_page(mut self, on: bool) -> Self {
        self.select_all_rows_on_page = on;
        self
    }

    #[must_use]
    pub fn summary_row(mut self, on: bool) -> Self {
        self.summary_row = on;
        self
    }

    #[must_use]
    pub fn swap_columns(mut self, on: bool) -> Self {
        self.swap_columns = on;
        self
    }

    /// Check for settings that cannot be honoured as written.
    ///
    /// [`Table::view`] never fails: it degrades the same settings with a
    /// warning instead.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.group_by.is_some() && self.tree.is_some() {
            return Err(GridError::ConflictingGrouping);
        }
        if let PagingMode::Virtual { row_height, .. } = self.paging
            && (!row_height.is_finite() || row_height <= 0.0)
        {
            return Err(GridError::InvalidRowHeight { row_height });
        }
        Ok(())
    }

    fn limit(&self) -> Option<usize> {
        match self.paging {
            PagingMode::Limit(n) => Some(n),
            _ => None,
        }
    }
}

/// Rows as shaped by the active grouping.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewRows<R> {
    Flat(Vec<R>),
    Grouped(Grouping<R>),
    Tree(TreeView<R>),
}

impl<R: Clone> ViewRows<R> {
    /// Every row in display order, ignoring paging.
    #[must_use]
    pub fn flatten(&self) -> Vec<R> {
        match self {
            Self::Flat(rows) => rows.clone(),
            Self::Grouped(grouping) => grouping.flatten(),
            Self::Tree(tree) => tree.flatten(),
        }
    }

    fn count_source(&self) -> RowCountSource {
        match self {
            Self::Flat(rows) => RowCountSource::Rows(rows.len()),
            Self::Grouped(grouping) => RowCountSource::Groups(grouping.len()),
            Self::Tree(tree) => RowCountSource::Tree(tree.len()),
        }
    }
}

/// The output of one [`Table::view`] pass.
#[derive(Debug, Clone, PartialEq)]
pub struct View<R> {
    pub rows: ViewRows<R>,
    pub window: PageWindow,
    /// Whether `rows` already is the host-supplied page.
    pub external_paging: bool,
    /// Resolved width per column, in column order.
    pub widths: Vec<f64>,
    /// `widths` rounded to whole pixels.
    pub pixel_widths: Vec<u32>,
    pub pin_groups: PinGroupWidths,
    pub summary: Option<Vec<SummaryCell>>,
}

impl<R: Clone> View<R> {
    /// Rows of the current page.
    ///
    /// Grouped views page over groups; ungrouped rows follow the groups of
    /// the last page.
    #[must_use]
    pub fn page(&self) -> Vec<R> {
        if self.external_paging {
            return self.rows.flatten();
        }
        let range = self.window.row_range();
        match &self.rows {
            ViewRows::Flat(rows) => rows[range].to_vec(),
            ViewRows::Tree(tree) => tree.rows[range].iter().map(|t| t.row.clone()).collect(),
            ViewRows::Grouped(grouping) => {
                let mut out: Vec<R> = grouping.groups[range]
                    .iter()
                    .flat_map(|g| g.members.iter().cloned())
                    .collect();
                if self.window.offset == self.window.max_offset() {
                    out.extend(grouping.ungrouped.iter().cloned());
                }
                out
            }
        }
    }

    /// Header and member items of the current page of a grouped view.
    ///
    /// Empty for views that are not grouped.
    #[must_use]
    pub fn page_items(&self, expansion: &GroupExpansion) -> Vec<GroupItem<R>> {
        let ViewRows::Grouped(grouping) = &self.rows else {
            return Vec::new();
        };
        let range = if self.external_paging {
            0..grouping.len()
        } else {
            self.window.row_range()
        };
        let last = self.external_paging || self.window.offset == self.window.max_offset();
        let page = Grouping {
            groups: grouping.groups[range.clone()].to_vec(),
            ungrouped: if last {
                grouping.ungrouped.clone()
            } else {
                Vec::new()
            },
        };
        page.flatten_with_headers(expansion)
            .into_iter()
            .map(|item| match item {
                GroupItem::Header {
                    key,
                    index,
                    size,
                    expanded,
                } => GroupItem::Header {
                    key,
                    index: index + range.start,
                    size,
                    expanded,
                },
                row => row,
            })
            .collect()
    }
}

/// Columns plus configuration.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
    config: ViewConfig,
}

impl Table {
    /// Build a table. Conflicting settings are tolerated; see
    /// [`ViewConfig::validate`].
    #[must_use]
    pub fn new(columns: Vec<Column>, config: ViewConfig) -> Self {
        Self { columns, config }
    }

    /// Build a table, rejecting a configuration that fails validation.
    pub fn try_new(columns: Vec<Column>, config: ViewConfig) -> Result<Self, GridError> {
        config.validate()?;
        Ok(Self::new(columns, config))
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
    }

    fn column_index(&self, id: &str) -> Result<usize, GridError> {
        self.columns
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| GridError::UnknownColumn { id: id.to_owned() })
    }

    /// Fresh interaction state seeded from the configuration.
    #[must_use]
    pub fn state<R>(&self) -> TableState<R> {
        TableState {
            sort: SortState::new(self.config.sort_type)
                .clear_after_both(self.config.clear_sort_after_both)
                .with_criteria(self.config.sorts.iter().cloned()),
            offset: 0,
            pinned: PinnedWidths::new(),
            tree_statuses: TreeStatuses::default(),
            expansion: GroupExpansion::default(),
            selection: Selection::default(),
            available_width: 0.0,
            resized_column: None,
            last_pixel_widths: None,
        }
    }

    /// Drag the column at `from` to `to`.
    ///
    /// Returns `Ok(None)` when the dragged column is not draggable.
    pub fn reorder_column(
        &mut self,
        from: usize,
        to: usize,
    ) -> Result<Option<ReorderEvent>, GridError> {
        let reordered = reorder_columns(&self.columns, from, to, self.config.swap_columns)?;
        if !self.columns[from].is_draggable() {
            return Ok(None);
        }
        let column = self.columns[from].id.clone();
        self.columns = reordered;
        Ok(Some(ReorderEvent {
            column,
            prev_index: from,
            new_index: to,
        }))
    }

    fn shape<R>(&self, rows: &[R], state: &TableState<R>) -> ViewRows<R>
    where
        R: AsRef<Row> + Clone,
    {
        let options = SortOptions::default().nulls(self.config.nulls);
        let criteria: &[SortCriterion] = if self.config.external_sorting {
            &[]
        } else {
            state.sort.criteria()
        };

        if let Some(prop) = &self.config.group_by {
            if self.config.tree.is_some() {
                rowgrid_core::warn!(group_by = %prop, "group_by and tree both set; using group_by");
            }
            let grouping = group_rows_by(rows, prop);
            return ViewRows::Grouped(sort_grouped_with(
                &grouping,
                prop,
                &self.columns,
                criteria,
                &options,
            ));
        }
        let sorted = sort_rows_with(rows, &self.columns, criteria, &options);
        match &self.config.tree {
            Some(relation) => ViewRows::Tree(flatten_tree(&sorted, relation, &state.tree_statuses)),
            None => ViewRows::Flat(sorted),
        }
    }

    fn window_for(&self, source: RowCountSource, offset: usize) -> PageWindow {
        let source = match self.config.external_count {
            Some(count) => RowCountSource::External(count),
            None => source,
        };
        let count = source.row_count();
        let size = page_size(&self.config.paging, count);
        PageWindow::new(
            size,
            count,
            self.config.limit(),
            i64::try_from(offset).unwrap_or(i64::MAX),
        )
    }

    /// Page window over `rows` for `state`, without building a full view.
    #[must_use]
    pub fn window<R>(&self, rows: &[R], state: &TableState<R>) -> PageWindow
    where
        R: AsRef<Row> + Clone,
    {
        let source = if self.config.external_count.is_some() {
            RowCountSource::Rows(rows.len())
        } else {
            self.shape(rows, state).count_source()
        };
        self.window_for(source, state.offset)
    }

    /// Resolved widths for `state`.
    #[must_use]
    pub fn widths<R>(&self, state: &TableState<R>) -> Vec<f64> {
        let resized_index = state
            .resized_column
            .as_ref()
            .filter(|(_, at)| (at - state.available_width).abs() <= f64::EPSILON)
            .and_then(|(id, _)| self.columns.iter().position(|c| c.id == *id));
        let options = ForceFillOptions::default()
            .allow_bleed(self.config.allow_bleed)
            .resized_index(resized_index);
        distribute(
            self.config.column_mode,
            &self.columns,
            state.available_width,
            &state.pinned,
            options,
        )
    }

    /// Run the whole pipeline over `rows`.
    #[must_use]
    pub fn view<R>(&self, rows: &[R], state: &TableState<R>) -> View<R>
    where
        R: AsRef<Row> + Clone,
    {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "rowgrid.view",
            rows = rows.len(),
            columns = self.columns.len()
        )
        .entered();

        let shaped = self.shape(rows, state);
        let window = self.window_for(shaped.count_source(), state.offset);

        let widths = self.widths(state);
        let total = widths.iter().sum::<f64>().round().clamp(0.0, f64::from(u32::MAX));
        // Clamped into u32 range above.
        let pixel_widths = round_widths_stable(&widths, total as u32, state.last_pixel_widths.as_deref());
        let pin_groups = group_widths(&self.columns, &widths);

        let summary = self
            .config
            .summary_row
            .then(|| summary_row(&self.columns, &shaped.flatten()));

        View {
            rows: shaped,
            window,
            external_paging: self.config.external_count.is_some(),
            widths,
            pixel_widths,
            pin_groups,
            summary,
        }
    }
}

/// Interaction state for a [`Table`].
#[derive(Debug, Clone)]
pub struct TableState<R> {
    pub sort: SortState,
    /// Requested page index; clamped whenever a window is computed.
    pub offset: usize,
    /// Widths the user set by hand.
    pub pinned: PinnedWidths,
    pub tree_statuses: TreeStatuses,
    pub expansion: GroupExpansion,
    pub selection: Selection<R>,
    /// Width the columns are distributed over.
    pub available_width: f64,
    /// Column most recently resized by hand, with the available width at
    /// that moment. Force-fill skips the columns before it only while the
    /// available width is unchanged.
    pub resized_column: Option<(String, f64)>,
    /// Pixel widths of the previous view, used to keep rounding stable.
    pub last_pixel_widths: Option<Vec<u32>>,
}

impl<R: AsRef<Row> + Clone> TableState<R> {
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.available_width = width;
        self
    }

    /// Change the available width, as on a window resize.
    ///
    /// A different width ends the hand-resize pass: every unpinned column
    /// takes part in force-fill again.
    pub fn set_width(&mut self, width: f64) {
        if (width - self.available_width).abs() > f64::EPSILON {
            self.resized_column = None;
        }
        self.available_width = width;
    }

    #[must_use]
    pub fn with_identity(mut self, identity: RowIdentity) -> Self {
        self.selection = Selection::new(identity);
        self
    }

    #[must_use]
    pub fn with_tree_statuses(mut self, statuses: TreeStatuses) -> Self {
        self.tree_statuses = statuses;
        self
    }

    /// Keep the rounded widths of `view` for the next pass.
    pub fn remember(&mut self, view: &View<R>) {
        self.last_pixel_widths = Some(view.pixel_widths.clone());
    }

    /// Activate the header of column `column_id`.
    ///
    /// Returns `Ok(None)` for unsortable columns. A sort change always moves
    /// back to the first page and, with select-all-on-page, clears the
    /// selection.
    pub fn sort_column(
        &mut self,
        table: &Table,
        column_id: &str,
        rows: &[R],
    ) -> Result<Option<SortChange>, GridError> {
        let index = table.column_index(column_id)?;
        let Some(sort) = self.sort.toggle(&table.columns[index]) else {
            return Ok(None);
        };
        self.offset = 0;
        if table.config.select_all_rows_on_page {
            self.selection.clear();
        }
        let window = table.window(rows, self);
        Ok(Some(SortChange {
            page: PageEvent::from_window(&window, self.sort.criteria()),
            sort,
        }))
    }

    /// Move to page `page` (zero-based, clamped).
    pub fn set_page(&mut self, table: &Table, rows: &[R], page: i64) -> PageEvent {
        let mut window = table.window(rows, self);
        window.set_offset(page);
        self.offset = window.offset;
        if table.config.select_all_rows_on_page {
            self.selection.clear();
        }
        PageEvent::from_window(&window, self.sort.criteria())
    }

    /// Set column `column_id` to `width` by hand.
    ///
    /// The width is clamped into the column's bounds and pinned. Returns
    /// `Ok(None)` for columns that are not resizable.
    pub fn resize_column(
        &mut self,
        table: &Table,
        column_id: &str,
        width: f64,
    ) -> Result<Option<ResizeEvent>, GridError> {
        let index = table.column_index(column_id)?;
        let column = &table.columns[index];
        if !column.is_resizable() {
            return Ok(None);
        }
        let prev_width = table.widths(self).get(index).copied().unwrap_or(column.width);
        let new_width = column.clamp_width(width);
        self.pinned.pin(column.id.clone(), new_width);
        self.resized_column = Some((column.id.clone(), self.available_width));
        Ok(Some(ResizeEvent {
            column: column.id.clone(),
            prev_width,
            new_width,
        }))
    }

    /// Expand or collapse a group; returns whether it is now expanded.
    pub fn toggle_group(&mut self, key: &Value) -> bool {
        self.expansion.toggle(key)
    }

    /// Expand or collapse a tree node by its id value.
    pub fn toggle_tree_node(&mut self, id: &Value) -> TreeStatus {
        self.tree_statuses.toggle(id)
    }

    /// The header checkbox.
    ///
    /// With select-all-on-page only the rows of the current page are
    /// considered; otherwise every row not rejected by `disabled`.
    pub fn header_select(
        &mut self,
        table: &Table,
        rows: &[R],
        disabled: Option<&dyn Fn(&Row) -> bool>,
    ) {
        if table.config.select_all_rows_on_page {
            let page = table.view(rows, self).page();
            self.selection.toggle_page(&page);
        } else {
            self.selection.toggle_all(rows, disabled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowgrid_core::SortDirection;

    fn rows() -> Vec<Row> {
        (0..25)
            .map(|i| {
                Row::new()
                    .with("id", i)
                    .with("team", if i % 2 == 0 { "even" } else { "odd" })
                    .with("score", (i * 7) % 10)
            })
            .collect()
    }

    fn ids(rows: &[Row]) -> Vec<i64> {
        rows.iter()
            .filter_map(|r| r.get(&"id".into()).as_f64())
            .map(|n| n as i64)
            .collect()
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("id").width(100.0),
            Column::new("team").width(100.0),
            Column::new("score").width(100.0).sortable(false),
        ]
    }

    #[test]
    fn flat_paging() {
        let table = Table::new(columns(), ViewConfig::default().paging(PagingMode::Limit(10)));
        let mut state = table.state();
        state.offset = 2;
        let view = table.view(&rows(), &state);
        assert_eq!(view.window.page_count(), 3);
        assert_eq!(ids(&view.page()), vec![20, 21, 22, 23, 24]);

        state.offset = 40;
        assert_eq!(table.view(&rows(), &state).window.offset, 2);
    }

    #[test]
    fn sorting_resets_offset_and_reports_events() {
        let table = Table::new(columns(), ViewConfig::default().paging(PagingMode::Limit(10)));
        let rows = rows();
        let mut state = table.state();
        state.offset = 2;
        let change = table_sort(&mut state, &table, "id", &rows).unwrap();
        assert_eq!(change.sort.new, Some(SortDirection::Asc));
        assert_eq!(change.page.offset, 0);
        assert_eq!(change.page.count, 25);
        assert_eq!(change.page.limit, Some(10));
        table_sort(&mut state, &table, "id", &rows);
        let view = table.view(&rows, &state);
        assert_eq!(ids(&view.page())[..3], [24, 23, 22]);

        assert!(state.sort_column(&table, "score", &rows).unwrap().is_none());
        assert_eq!(
            state.sort_column(&table, "nope", &rows).unwrap_err(),
            GridError::UnknownColumn { id: "nope".into() }
        );
    }

    fn table_sort(
        state: &mut TableState<Row>,
        table: &Table,
        id: &str,
        rows: &[Row],
    ) -> Option<SortChange> {
        state.sort_column(table, id, rows).unwrap()
    }

    #[test]
    fn grouped_pages_over_groups() {
        let mut rows = rows();
        rows.push(Row::new().with("id", 99));
        let table = Table::new(
            columns(),
            ViewConfig::default()
                .group_by("team")
                .paging(PagingMode::Limit(1))
                .sorts([SortCriterion::desc("team")]),
        );
        let mut state = table.state();
        let view = table.view(&rows, &state);
        assert_eq!(view.window.row_count, 2);
        let first = view.page();
        assert_eq!(first.len(), 12);
        assert!(first.iter().all(|r| r.get(&"team".into()) == &Value::from("odd")));

        state.offset = 1;
        let view = table.view(&rows, &state);
        let last = view.page();
        assert_eq!(last.len(), 14);
        assert_eq!(ids(&last).last(), Some(&99));
        let items = view.page_items(&state.expansion);
        assert!(matches!(items[0], GroupItem::Header { index: 1, .. }));
    }

    #[test]
    fn tree_pages_over_visible_nodes() {
        let rows = vec![
            Row::new().with("id", "a"),
            Row::new().with("id", "b").with("parent", "a"),
            Row::new().with("id", "c"),
        ];
        let table = Table::new(
            vec![Column::new("id")],
            ViewConfig::default().tree(TreeRelation::new("parent", "id")),
        );
        let mut state = table.state();
        assert_eq!(table.view(&rows, &state).window.row_count, 2);
        assert_eq!(state.toggle_tree_node(&Value::from("a")), TreeStatus::Expanded);
        assert_eq!(table.view(&rows, &state).window.row_count, 3);
    }

    #[test]
    fn conflicting_grouping() {
        let config = ViewConfig::default()
            .group_by("team")
            .tree(TreeRelation::new("parent", "id"));
        assert_eq!(config.validate(), Err(GridError::ConflictingGrouping));
        assert!(Table::try_new(columns(), config.clone()).is_err());
        let table = Table::new(columns(), config);
        let view = table.view(&rows(), &table.state());
        assert!(matches!(view.rows, ViewRows::Grouped(_)));
    }

    #[test]
    fn invalid_row_height() {
        let config = ViewConfig::default().paging(PagingMode::Virtual {
            viewport_height: 300.0,
            row_height: 0.0,
        });
        assert_eq!(
            config.validate(),
            Err(GridError::InvalidRowHeight { row_height: 0.0 })
        );
        let table = Table::new(columns(), config);
        let view = table.view(&rows(), &table.state());
        assert_eq!(view.window.page_count(), 0);
        assert!(view.page().is_empty());
    }

    #[test]
    fn external_paging_keeps_rows() {
        let table = Table::new(
            columns(),
            ViewConfig::default()
                .paging(PagingMode::Limit(5))
                .external_count(Some(500))
                .external_sorting(true)
                .sorts([SortCriterion::desc("id")]),
        );
        let page: Vec<Row> = rows().into_iter().take(5).collect();
        let mut state = table.state();
        let ev = state.set_page(&table, &page, 7);
        assert_eq!((ev.count, ev.offset), (500, 7));
        let view = table.view(&page, &state);
        assert_eq!(ids(&view.page()), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn resize_pins_and_redistributes_after() {
        let table = Table::new(
            columns(),
            ViewConfig::default().column_mode(ColumnMode::Force),
        );
        let mut state: TableState<Row> = table.state().with_width(600.0);
        let ev = state.resize_column(&table, "id", 300.0).unwrap().unwrap();
        assert_eq!(ev.prev_width, 200.0);
        assert_eq!(ev.new_width, 300.0);
        let view = table.view(&[], &state);
        assert_eq!(view.widths, vec![300.0, 150.0, 150.0]);
        assert_eq!(view.pixel_widths, vec![300, 150, 150]);
        assert_eq!(view.pin_groups.total, 600.0);
    }

    #[test]
    fn window_resize_after_column_resize_refills_earlier_columns() {
        let table = Table::new(
            vec![
                Column::new("a").width(100.0),
                Column::new("b").width(100.0),
                Column::new("c").width(100.0),
            ],
            ViewConfig::default().column_mode(ColumnMode::Force),
        );
        let mut state: TableState<Row> = table.state().with_width(300.0);
        state.resize_column(&table, "b", 150.0).unwrap();
        assert_eq!(table.widths(&state), vec![100.0, 150.0, 50.0]);

        state.set_width(900.0);
        assert!(state.resized_column.is_none());
        assert_eq!(table.widths(&state), vec![375.0, 150.0, 375.0]);

        // Writing the field directly also ends the resize pass.
        state.resize_column(&table, "b", 200.0).unwrap();
        state.available_width = 600.0;
        assert_eq!(table.widths(&state), vec![200.0, 200.0, 200.0]);
    }

    #[test]
    fn owned_rows_header_select_toggles() {
        let table = Table::new(columns(), ViewConfig::default());
        let rows: Vec<Row> = rows().into_iter().take(3).collect();
        let mut state: TableState<Row> = table.state();
        state.header_select(&table, &rows, None);
        assert_eq!(state.selection.len(), 3);
        state.header_select(&table, &rows, None);
        assert!(state.selection.is_empty());

        state.selection.select(rows[0].clone());
        state.selection.select(rows[0].clone());
        assert_eq!(state.selection.len(), 1);
    }

    #[test]
    fn reorder_respects_draggable() {
        let mut cols = columns();
        cols[1] = cols[1].clone().draggable(false);
        let mut table = Table::new(cols, ViewConfig::default().swap_columns(false));
        assert!(table.reorder_column(1, 0).unwrap().is_none());
        let ev = table.reorder_column(0, 2).unwrap().unwrap();
        assert_eq!(ev.column, "id");
        let order: Vec<_> = table.columns().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(order, ["team", "score", "id"]);
        assert!(table.reorder_column(0, 3).is_err());
    }

    #[test]
    fn header_select_on_page() {
        let table = Table::new(
            columns(),
            ViewConfig::default()
                .paging(PagingMode::Limit(10))
                .select_all_rows_on_page(true),
        );
        let shared: Vec<std::sync::Arc<Row>> =
            rows().into_iter().map(std::sync::Arc::new).collect();
        let mut state = table.state();
        state.header_select(&table, &shared, None);
        assert_eq!(state.selection.len(), 10);
        state.set_page(&table, &shared, 1);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn summary_over_all_rows() {
        let table = Table::new(
            columns(),
            ViewConfig::default()
                .paging(PagingMode::Limit(5))
                .summary_row(true),
        );
        let view = table.view(&rows(), &table.state());
        let summary = view.summary.unwrap();
        assert_eq!(summary[0].value, Value::from(300));
    }
}
