#![forbid(unsafe_code)]

//! Header-driven sort state.
//!
//! Activating a sortable header cycles that column's direction and rewrites
//! the criteria list:
//!
//! | mode   | cycle                    | criteria list                        |
//! |--------|--------------------------|--------------------------------------|
//! | single | none → asc → desc → asc  | replaced by the activated column     |
//! | multi  | none → asc → desc → none | appended, updated in place, removed  |
//!
//! With clear-after-both enabled, the third activation of a column in a row
//! removes its criterion instead of cycling again.

use crate::events::SortEvent;
use rowgrid_core::{Column, Prop, SortCriterion, SortDirection, SortType};
use std::collections::HashMap;

/// Direction following `current` when a header is activated.
#[must_use]
pub fn next_direction(sort_type: SortType, current: Option<SortDirection>) -> Option<SortDirection> {
    match (sort_type, current) {
        (_, None) => Some(SortDirection::Asc),
        (_, Some(SortDirection::Asc)) => Some(SortDirection::Desc),
        (SortType::Single, Some(SortDirection::Desc)) => Some(SortDirection::Asc),
        (SortType::Multi, Some(SortDirection::Desc)) => None,
    }
}

/// The active criteria plus the per-column activation counters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortState {
    criteria: Vec<SortCriterion>,
    sort_type: SortType,
    clear_after_both: bool,
    applied: HashMap<Prop, u8>,
}

impl SortState {
    #[must_use]
    pub fn new(sort_type: SortType) -> Self {
        Self {
            sort_type,
            ..Self::default()
        }
    }

    /// Start from existing criteria. Inactive criteria are dropped.
    #[must_use]
    pub fn with_criteria(mut self, criteria: impl IntoIterator<Item = SortCriterion>) -> Self {
        self.set(criteria);
        self
    }

    /// Clear a column's sort on the activation after it has been sorted both
    /// ways.
    #[must_use]
    pub fn clear_after_both(mut self, on: bool) -> Self {
        self.clear_after_both = on;
        self
    }

    #[must_use]
    pub fn criteria(&self) -> &[SortCriterion] {
        &self.criteria
    }

    #[must_use]
    pub fn sort_type(&self) -> SortType {
        self.sort_type
    }

    /// Current direction for `prop`.
    #[must_use]
    pub fn direction_of(&self, prop: &Prop) -> Option<SortDirection> {
        self.criteria
            .iter()
            .find(|c| &c.prop == prop)
            .and_then(|c| c.dir)
    }

    /// Replace the criteria list, resetting activation counters.
    ///
    /// A property listed twice keeps only its last occurrence, at that
    /// occurrence's position.
    pub fn set(&mut self, criteria: impl IntoIterator<Item = SortCriterion>) {
        self.criteria.clear();
        self.applied.clear();
        for criterion in criteria {
            self.push(criterion);
        }
        if self.sort_type == SortType::Single && self.criteria.len() > 1 {
            rowgrid_core::warn!(
                criteria = self.criteria.len(),
                "single sort configured with several criteria; keeping the first"
            );
            self.criteria.truncate(1);
        }
    }

    /// Remove every criterion.
    pub fn clear(&mut self) {
        self.criteria.clear();
        self.applied.clear();
    }

    /// Append a criterion explicitly (multi-sort). An existing criterion for
    /// the same property is removed first, so the newest one wins its
    /// position at the end of the list.
    pub fn push(&mut self, criterion: SortCriterion) {
        if criterion.dir.is_none() {
            return;
        }
        self.criteria.retain(|c| c.prop != criterion.prop);
        self.criteria.push(criterion);
    }

    /// Activate `column`'s header.
    ///
    /// Returns `None` for columns that are not sortable.
    pub fn toggle(&mut self, column: &Column) -> Option<SortEvent> {
        if !column.is_sortable() {
            return None;
        }
        let prop = column.prop.clone();
        let prev = self.direction_of(&prop);

        let count = self
            .applied
            .entry(prop.clone())
            .or_insert(u8::from(prev.is_some()));
        *count = count.saturating_add(1);
        let mut new = next_direction(self.sort_type, prev);
        if self.clear_after_both && *count >= 3 {
            new = None;
            *count = 0;
        }

        let idx = self.criteria.iter().position(|c| c.prop == prop);
        match (new, idx) {
            (None, Some(i)) => {
                self.criteria.remove(i);
            }
            (None, None) => {}
            (Some(dir), Some(i)) => self.criteria[i].dir = Some(dir),
            (Some(dir), None) => {
                if self.sort_type == SortType::Single {
                    self.criteria.clear();
                }
                self.criteria.push(SortCriterion::new(prop.clone(), dir));
            }
        }
        let active: Vec<&Prop> = self.criteria.iter().map(|c| &c.prop).collect();
        self.applied.retain(|p, _| active.contains(&p));

        Some(SortEvent {
            column: column.id.clone(),
            prop,
            prev,
            new,
            sorts: self.criteria.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SortDirection::{Asc, Desc};

    #[test]
    fn direction_cycles() {
        assert_eq!(next_direction(SortType::Single, None), Some(Asc));
        assert_eq!(next_direction(SortType::Single, Some(Asc)), Some(Desc));
        assert_eq!(next_direction(SortType::Single, Some(Desc)), Some(Asc));
        assert_eq!(next_direction(SortType::Multi, Some(Desc)), None);
    }

    #[test]
    fn single_replaces() {
        let mut s = SortState::new(SortType::Single);
        let a = Column::new("a");
        let b = Column::new("b");
        s.toggle(&a);
        assert_eq!(s.criteria(), &[SortCriterion::asc("a")]);
        let ev = s.toggle(&b).unwrap();
        assert_eq!(ev.prev, None);
        assert_eq!(s.criteria(), &[SortCriterion::asc("b")]);
        s.toggle(&b);
        s.toggle(&b);
        assert_eq!(s.criteria(), &[SortCriterion::asc("b")]);
    }

    #[test]
    fn multi_appends_updates_and_removes() {
        let mut s = SortState::new(SortType::Multi);
        let a = Column::new("a");
        let b = Column::new("b");
        s.toggle(&a);
        s.toggle(&b);
        s.toggle(&a);
        assert_eq!(s.criteria(), &[SortCriterion::desc("a"), SortCriterion::asc("b")]);
        let ev = s.toggle(&a).unwrap();
        assert_eq!((ev.prev, ev.new), (Some(Desc), None));
        assert_eq!(s.criteria(), &[SortCriterion::asc("b")]);
    }

    #[test]
    fn clear_after_both_directions() {
        let mut s = SortState::new(SortType::Single).clear_after_both(true);
        let a = Column::new("a");
        assert_eq!(s.toggle(&a).unwrap().new, Some(Asc));
        assert_eq!(s.toggle(&a).unwrap().new, Some(Desc));
        assert_eq!(s.toggle(&a).unwrap().new, None);
        assert!(s.criteria().is_empty());
        assert_eq!(s.toggle(&a).unwrap().new, Some(Asc));
    }

    #[test]
    fn clear_counter_starts_at_one_for_preset_sort() {
        let mut s = SortState::new(SortType::Single)
            .clear_after_both(true)
            .with_criteria([SortCriterion::asc("a")]);
        let a = Column::new("a");
        assert_eq!(s.toggle(&a).unwrap().new, Some(Desc));
        assert_eq!(s.toggle(&a).unwrap().new, None);
    }

    #[test]
    fn unsortable_is_ignored() {
        let mut s = SortState::new(SortType::Single);
        assert!(s.toggle(&Column::new("a").sortable(false)).is_none());
        assert!(s.criteria().is_empty());
    }

    #[test]
    fn push_moves_duplicate_to_end() {
        let mut s = SortState::new(SortType::Multi)
            .with_criteria([SortCriterion::asc("a"), SortCriterion::asc("b")]);
        s.push(SortCriterion::desc("a"));
        assert_eq!(s.criteria(), &[SortCriterion::asc("b"), SortCriterion::desc("a")]);
    }

    #[test]
    fn preset_duplicates_keep_last_occurrence() {
        let state = SortState::new(SortType::Multi).with_criteria([
            SortCriterion::asc("a"),
            SortCriterion::asc("b"),
            SortCriterion::desc("a"),
        ]);
        assert_eq!(
            state.criteria(),
            &[SortCriterion::asc("b"), SortCriterion::desc("a")]
        );
        assert_eq!(state.direction_of(&"a".into()), Some(SortDirection::Desc));
    }

    #[test]
    fn single_mode_truncates_preset_list() {
        let s = SortState::new(SortType::Single)
            .with_criteria([SortCriterion::asc("a"), SortCriterion::asc("b")]);
        assert_eq!(s.criteria(), &[SortCriterion::asc("a")]);
    }
}
