#![forbid(unsafe_code)]

//! Sorting a flat grouping.

use crate::compare::resolve;
use crate::group::{Group, Grouping};
use crate::sort::{SortOptions, sort_rows_with};
use rowgrid_core::{Column, Prop, Row, SortCriterion};

/// Sort `grouping` with the default options.
#[must_use]
pub fn sort_grouped<R>(
    grouping: &Grouping<R>,
    group_prop: &Prop,
    columns: &[Column],
    criteria: &[SortCriterion],
) -> Grouping<R>
where
    R: AsRef<Row> + Clone,
{
    sort_grouped_with(grouping, group_prop, columns, criteria, &SortOptions::default())
}

/// Sort groups by key and members by the full criteria list.
///
/// Groups move only when an active criterion targets `group_prop`; they are
/// then ordered by key in that criterion's direction, through the group
/// column's comparator when one exists. Each group's first member is handed
/// to that comparator as row context. Without such a criterion groups keep
/// their first-seen order. Members and ungrouped rows are always sorted by
/// every criterion.
#[must_use]
pub fn sort_grouped_with<R>(
    grouping: &Grouping<R>,
    group_prop: &Prop,
    columns: &[Column],
    criteria: &[SortCriterion],
    options: &SortOptions,
) -> Grouping<R>
where
    R: AsRef<Row> + Clone,
{
    let mut groups: Vec<Group<R>> = grouping
        .groups
        .iter()
        .map(|g| Group {
            key: g.key.clone(),
            members: sort_rows_with(&g.members, columns, criteria, options),
        })
        .collect();

    let key_dir = criteria
        .iter()
        .find(|c| &c.prop == group_prop && c.dir.is_some())
        .and_then(|c| c.dir);
    if let Some(dir) = key_dir {
        let column = columns.iter().find(|c| &c.prop == group_prop);
        let cmp = resolve(column, options.nulls);
        let empty = Row::new();
        groups.sort_by(|a, b| {
            cmp.compare_in(
                &a.key,
                &b.key,
                first_member(a, &empty),
                first_member(b, &empty),
                dir,
            )
        });
    }

    Grouping {
        groups,
        ungrouped: sort_rows_with(&grouping.ungrouped, columns, criteria, options),
    }
}

fn first_member<'a, R: AsRef<Row>>(group: &'a Group<R>, empty: &'a Row) -> &'a Row {
    group.members.first().map_or(empty, AsRef::as_ref)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::group_rows_by;
    use rowgrid_core::Value;

    fn rows() -> Vec<Row> {
        vec![
            Row::new().with("n", 3).with("g", "b"),
            Row::new().with("n", 1).with("g", "a"),
            Row::new().with("n", 2).with("g", "b"),
            Row::new().with("n", 4).with("g", "a"),
            Row::new().with("n", 0),
            Row::new().with("n", -1),
        ]
    }

    fn keys(g: &Grouping<Row>) -> Vec<Value> {
        g.keys().cloned().collect()
    }

    fn ns(rows: &[Row]) -> Vec<String> {
        rows.iter().map(|r| r.get(&"n".into()).to_string()).collect()
    }

    #[test]
    fn groups_stay_put_without_key_criterion() {
        let prop = Prop::from("g");
        let g = group_rows_by(&rows(), &prop);
        let out = sort_grouped(&g, &prop, &[], &[SortCriterion::asc("n")]);
        assert_eq!(keys(&out), vec![Value::from("b"), Value::from("a")]);
        assert_eq!(ns(&out.groups[0].members), ["2", "3"]);
        assert_eq!(ns(&out.ungrouped), ["-1", "0"]);
    }

    #[test]
    fn key_criterion_orders_groups() {
        let prop = Prop::from("g");
        let g = group_rows_by(&rows(), &prop);
        let out = sort_grouped(
            &g,
            &prop,
            &[],
            &[SortCriterion::asc("g"), SortCriterion::desc("n")],
        );
        assert_eq!(keys(&out), vec![Value::from("a"), Value::from("b")]);
        assert_eq!(ns(&out.groups[0].members), ["4", "1"]);
        assert_eq!(ns(&out.groups[1].members), ["3", "2"]);
    }

    #[test]
    fn group_column_comparator_is_used() {
        let prop = Prop::from("g");
        let by_len = Column::new("g").comparator(|a, b, _, _| {
            a.to_display_string()
                .len()
                .cmp(&b.to_display_string().len())
        });
        let rows = vec![
            Row::new().with("g", "ccc"),
            Row::new().with("g", "a"),
            Row::new().with("g", "bb"),
        ];
        let g = group_rows_by(&rows, &prop);
        let out = sort_grouped(&g, &prop, &[by_len], &[SortCriterion::desc("g")]);
        assert_eq!(
            keys(&out),
            vec![Value::from("ccc"), Value::from("bb"), Value::from("a")]
        );
    }
}
