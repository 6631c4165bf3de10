#![forbid(unsafe_code)]

//! Tree grouping.
//!
//! Rows are nested through two relation properties: a row whose `from`
//! value equals another row's `to` value is that row's child. The result is
//! a pre-order, depth-first flattening annotated with depth and status.
//!
//! Relations come from caller data and may be cyclic. The walk keeps a
//! visited set, so every row is emitted at most once. Rows that no natural
//! root reaches (cycle members and whatever hangs off them) are promoted to
//! roots in input order and reported in [`TreeView::promoted`].

use rowgrid_core::{Prop, Row, Value, ValueKey};
use std::collections::HashMap;

/// Expansion status of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TreeStatus {
    /// Children hidden.
    #[default]
    Collapsed,
    /// Children shown.
    Expanded,
    /// Children are being fetched by the host.
    Loading,
    /// Node cannot be toggled.
    Disabled,
}

/// The pair of properties linking children to parents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeRelation {
    /// Property holding the parent's id.
    pub from: Prop,
    /// Property holding the row's own id.
    pub to: Prop,
}

impl TreeRelation {
    #[must_use]
    pub fn new(from: impl Into<Prop>, to: impl Into<Prop>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Node statuses keyed by the node's `to` value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStatuses {
    default: TreeStatus,
    by_id: HashMap<ValueKey, TreeStatus>,
}

impl TreeStatuses {
    /// Every node starts with `default`.
    #[must_use]
    pub fn new(default: TreeStatus) -> Self {
        Self {
            default,
            by_id: HashMap::new(),
        }
    }

    /// All nodes expanded.
    #[must_use]
    pub fn expanded() -> Self {
        Self::new(TreeStatus::Expanded)
    }

    #[must_use]
    pub fn get(&self, id: &Value) -> TreeStatus {
        self.by_id.get(&id.key()).copied().unwrap_or(self.default)
    }

    pub fn set(&mut self, id: &Value, status: TreeStatus) {
        self.by_id.insert(id.key(), status);
    }

    /// Flip a node between collapsed and expanded. Disabled and loading nodes
    /// are left alone; the returned value is the status after the call.
    pub fn toggle(&mut self, id: &Value) -> TreeStatus {
        let next = match self.get(id) {
            TreeStatus::Collapsed => TreeStatus::Expanded,
            TreeStatus::Expanded => TreeStatus::Collapsed,
            other => return other,
        };
        self.set(id, next);
        next
    }
}

/// A row placed in the flattened tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRow<R> {
    pub row: R,
    /// Position of the row in the input.
    pub index: usize,
    /// Depth; roots are 0.
    pub level: usize,
    pub status: TreeStatus,
    /// Input index of the parent this row was reached through.
    pub parent: Option<usize>,
    pub has_children: bool,
}

/// Flattened tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeView<R> {
    /// Visible rows in pre-order.
    pub rows: Vec<TreeRow<R>>,
    /// Input indices of rows promoted to roots to break a cycle.
    pub promoted: Vec<usize>,
}

impl<R> Default for TreeView<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            promoted: Vec::new(),
        }
    }
}

impl<R: Clone> TreeView<R> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The visible rows without annotations.
    #[must_use]
    pub fn flatten(&self) -> Vec<R> {
        self.rows.iter().map(|t| t.row.clone()).collect()
    }
}

fn id_of<'r>(row: &'r Row, prop: &Prop) -> Option<&'r Value> {
    row.lookup(prop).filter(|v| !v.is_null())
}

/// Flatten `rows` into a tree through `relation`.
///
/// A row is a root when its `from` value is absent, null, or matches no
/// row's `to` value. When several rows share a `to` value, children attach
/// to the first of them. Children of a node whose status is not
/// [`TreeStatus::Expanded`] are hidden.
pub fn flatten_tree<R>(rows: &[R], relation: &TreeRelation, statuses: &TreeStatuses) -> TreeView<R>
where
    R: AsRef<Row> + Clone,
{
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("rowgrid.tree", rows = rows.len()).entered();

    let n = rows.len();
    let mut by_id: HashMap<ValueKey, usize> = HashMap::new();
    for (i, row) in rows.iter().enumerate() {
        if let Some(id) = id_of(row.as_ref(), &relation.to) {
            by_id.entry(id.key()).or_insert(i);
        }
    }

    let parent_of: Vec<Option<usize>> = rows
        .iter()
        .map(|row| {
            id_of(row.as_ref(), &relation.from).and_then(|v| by_id.get(&v.key()).copied())
        })
        .collect();

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (i, parent) in parent_of.iter().enumerate() {
        if let Some(p) = parent {
            children[*p].push(i);
        }
    }

    let status_of = |i: usize| {
        id_of(rows[i].as_ref(), &relation.to).map_or(statuses.default, |id| statuses.get(id))
    };

    let mut view = TreeView {
        rows: Vec::with_capacity(n),
        promoted: Vec::new(),
    };
    let mut visited = vec![false; n];
    let mut stack: Vec<(usize, usize, Option<usize>, bool)> = Vec::new();

    let mut walk = |root: usize, visited: &mut Vec<bool>, view: &mut TreeView<R>| {
        stack.push((root, 0, None, true));
        while let Some((i, level, parent, visible)) = stack.pop() {
            if visited[i] {
                continue;
            }
            visited[i] = true;
            let status = status_of(i);
            if visible {
                view.rows.push(TreeRow {
                    row: rows[i].clone(),
                    index: i,
                    level,
                    status,
                    parent,
                    has_children: !children[i].is_empty(),
                });
            }
            let show = visible && status == TreeStatus::Expanded;
            for &c in children[i].iter().rev() {
                if !visited[c] {
                    stack.push((c, level + 1, Some(i), show));
                }
            }
        }
    };

    for i in 0..n {
        if parent_of[i].is_none() {
            walk(i, &mut visited, &mut view);
        }
    }
    for i in 0..n {
        if !visited[i] {
            view.promoted.push(i);
            walk(i, &mut visited, &mut view);
        }
    }

    if !view.promoted.is_empty() {
        rowgrid_core::warn!(
            promoted = view.promoted.len(),
            "tree relation is cyclic; promoted rows to roots"
        );
    }
    view
}
