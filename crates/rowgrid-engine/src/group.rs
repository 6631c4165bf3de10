#![forbid(unsafe_code)]

//! Flat grouping.
//!
//! Rows are bucketed by a key extracted from each row. Buckets keep the order
//! in which their key was first seen and members keep input order. Grouping
//! is always rebuilt from the full row set.

use rowgrid_core::{Prop, Row, Value, ValueKey};
use std::collections::HashMap;

/// Rows sharing one key value.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<R> {
    pub key: Value,
    pub members: Vec<R>,
}

/// Result of a flat grouping pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Grouping<R> {
    /// Groups in first-seen key order.
    pub groups: Vec<Group<R>>,
    /// Rows for which the key extractor produced nothing.
    pub ungrouped: Vec<R>,
}

impl<R> Default for Grouping<R> {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            ungrouped: Vec::new(),
        }
    }
}

/// One display line of a grouped table.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupItem<R> {
    /// Header line of a group.
    Header {
        key: Value,
        /// Position of the group in the grouping.
        index: usize,
        /// Number of members.
        size: usize,
        expanded: bool,
    },
    /// A member (or ungrouped) row.
    Row(R),
}

impl<R> GroupItem<R> {
    #[must_use]
    pub fn is_header(&self) -> bool {
        matches!(self, Self::Header { .. })
    }

    #[must_use]
    pub fn row(&self) -> Option<&R> {
        match self {
            Self::Row(r) => Some(r),
            Self::Header { .. } => None,
        }
    }
}

/// Which groups show their members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupExpansion {
    default_expanded: bool,
    overrides: HashMap<ValueKey, bool>,
}

impl Default for GroupExpansion {
    fn default() -> Self {
        Self::new(true)
    }
}

impl GroupExpansion {
    /// Every group starts `expanded` unless overridden.
    #[must_use]
    pub fn new(expanded: bool) -> Self {
        Self {
            default_expanded: expanded,
            overrides: HashMap::new(),
        }
    }

    #[must_use]
    pub fn is_expanded(&self, key: &Value) -> bool {
        self.overrides
            .get(&key.key())
            .copied()
            .unwrap_or(self.default_expanded)
    }

    pub fn set(&mut self, key: &Value, expanded: bool) {
        self.overrides.insert(key.key(), expanded);
    }

    /// Flip a group, returning its new state.
    pub fn toggle(&mut self, key: &Value) -> bool {
        let next = !self.is_expanded(key);
        self.set(key, next);
        next
    }

    /// Expand or collapse everything, dropping per-group overrides.
    pub fn set_all(&mut self, expanded: bool) {
        self.default_expanded = expanded;
        self.overrides.clear();
    }
}

impl<R: Clone> Grouping<R> {
    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Rows across all groups plus the ungrouped ones.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.groups.iter().map(|g| g.members.len()).sum::<usize>() + self.ungrouped.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.groups.iter().map(|g| &g.key)
    }

    /// Group members in group order, then the ungrouped rows.
    #[must_use]
    pub fn flatten(&self) -> Vec<R> {
        let mut out = Vec::with_capacity(self.row_count());
        for group in &self.groups {
            out.extend(group.members.iter().cloned());
        }
        out.extend(self.ungrouped.iter().cloned());
        out
    }

    /// Header items with the members of expanded groups, then the ungrouped
    /// rows.
    #[must_use]
    pub fn flatten_with_headers(&self, expansion: &GroupExpansion) -> Vec<GroupItem<R>> {
        let mut out = Vec::with_capacity(self.groups.len() + self.row_count());
        for (index, group) in self.groups.iter().enumerate() {
            let expanded = expansion.is_expanded(&group.key);
            out.push(GroupItem::Header {
                key: group.key.clone(),
                index,
                size: group.members.len(),
                expanded,
            });
            if expanded {
                out.extend(group.members.iter().cloned().map(GroupItem::Row));
            }
        }
        out.extend(self.ungrouped.iter().cloned().map(GroupItem::Row));
        out
    }
}

/// Group `rows` by the key `key_fn` extracts.
///
/// A `None` key leaves the row ungrouped; `Some(Value::Null)` is a regular
/// key.
pub fn group_rows<R, F>(rows: &[R], mut key_fn: F) -> Grouping<R>
where
    R: AsRef<Row> + Clone,
    F: FnMut(&Row) -> Option<Value>,
{
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("rowgrid.group", rows = rows.len()).entered();

    let mut index: HashMap<ValueKey, usize> = HashMap::new();
    let mut out = Grouping::default();
    for row in rows {
        let Some(key) = key_fn(row.as_ref()) else {
            out.ungrouped.push(row.clone());
            continue;
        };
        let slot = *index.entry(key.key()).or_insert_with(|| {
            out.groups.push(Group {
                key,
                members: Vec::new(),
            });
            out.groups.len() - 1
        });
        out.groups[slot].members.push(row.clone());
    }
    out
}

/// Group `rows` by the value of `prop`. Rows lacking the property stay
/// ungrouped.
pub fn group_rows_by<R>(rows: &[R], prop: &Prop) -> Grouping<R>
where
    R: AsRef<Row> + Clone,
{
    let grouping = group_rows(rows, |row| row.lookup(prop).cloned());
    if grouping.groups.is_empty() && !rows.is_empty() {
        rowgrid_core::warn!(prop = %prop, rows = rows.len(), "group key absent from every row");
    }
    grouping
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Row> {
        vec![
            Row::new().with("id", 1).with("team", "red"),
            Row::new().with("id", 2).with("team", "blue"),
            Row::new().with("id", 3),
            Row::new().with("id", 4).with("team", "red"),
            Row::new().with("id", 5).with("team", Value::Null),
        ]
    }

    fn ids(rows: &[Row]) -> Vec<i64> {
        rows.iter()
            .filter_map(|r| r.get(&"id".into()).as_f64())
            .map(|n| n as i64)
            .collect()
    }

    #[test]
    fn first_seen_order_and_ungrouped() {
        let g = group_rows_by(&rows(), &Prop::from("team"));
        let keys: Vec<_> = g.keys().cloned().collect();
        assert_eq!(keys, vec![Value::from("red"), Value::from("blue"), Value::Null]);
        assert_eq!(ids(&g.groups[0].members), vec![1, 4]);
        assert_eq!(ids(&g.ungrouped), vec![3]);
        assert_eq!(ids(&g.flatten()), vec![1, 4, 2, 5, 3]);
        assert_eq!(g.row_count(), 5);
    }

    #[test]
    fn absent_key_means_no_groups() {
        let g = group_rows_by(&rows(), &Prop::from("nope"));
        assert!(g.is_empty());
        assert_eq!(g.ungrouped.len(), 5);
    }

    #[test]
    fn numeric_keys_use_same_value_zero() {
        let rows = vec![
            Row::new().with("k", 0.0),
            Row::new().with("k", -0.0),
            Row::new().with("k", f64::NAN),
            Row::new().with("k", f64::NAN),
        ];
        let g = group_rows_by(&rows, &Prop::from("k"));
        assert_eq!(g.len(), 2);
        assert!(g.groups.iter().all(|grp| grp.members.len() == 2));
    }

    #[test]
    fn headers_respect_expansion() {
        let g = group_rows_by(&rows(), &Prop::from("team"));
        let mut exp = GroupExpansion::default();
        assert!(!exp.toggle(&Value::from("red")));
        let items = g.flatten_with_headers(&exp);
        let headers = items.iter().filter(|i| i.is_header()).count();
        assert_eq!(headers, 3);
        let rows: Vec<Row> = items.iter().filter_map(GroupItem::row).cloned().collect();
        assert_eq!(ids(&rows), vec![2, 5, 3]);
        assert!(matches!(
            items[0],
            GroupItem::Header { size: 2, expanded: false, .. }
        ));

        exp.set_all(false);
        let collapsed = g.flatten_with_headers(&exp);
        assert_eq!(collapsed.len(), 4);
    }

    #[test]
    fn custom_extractor() {
        let g = group_rows(&rows(), |r| {
            r.get(&"id".into())
                .as_f64()
                .map(|n| Value::from(n as i64 % 2 == 0))
        });
        assert_eq!(g.len(), 2);
        assert_eq!(ids(&g.groups[0].members), vec![1, 3, 5]);
    }
}
