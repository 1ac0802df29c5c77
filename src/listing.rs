//! Collection Listing State
//!
//! Loading flag plus cached entities, refreshed by merging the
//! authoritative collection keyed by entity identifier.

use std::collections::HashMap;

/// Entity with a stable backend identifier
pub trait Keyed {
    fn key(&self) -> &str;
}

/// What a merge changed, for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub added: usize,
    pub updated: usize,
    pub removed: usize,
}

impl MergeSummary {
    pub fn is_unchanged(&self) -> bool {
        self.added == 0 && self.updated == 0 && self.removed == 0
    }
}

/// Replace `current` with `fresh`, counting adds/updates/removals by key.
///
/// The result follows `fresh` order; entities missing from `fresh` are dropped.
pub fn merge_by_key<T: Keyed + PartialEq>(current: &mut Vec<T>, fresh: Vec<T>) -> MergeSummary {
    let mut previous: HashMap<String, T> = current
        .drain(..)
        .map(|entity| (entity.key().to_string(), entity))
        .collect();
    let mut summary = MergeSummary::default();

    for entity in fresh {
        match previous.remove(entity.key()) {
            Some(old) if old == entity => {}
            Some(_) => summary.updated += 1,
            None => summary.added += 1,
        }
        current.push(entity);
    }

    summary.removed = previous.len();
    summary
}

/// Which table body a listing shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Empty,
    Rows,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub loading: bool,
    pub items: Vec<T>,
}

/// Pages start in the loading state
impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            loading: true,
            items: Vec::new(),
        }
    }
}

impl<T: Keyed + PartialEq> ListState<T> {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Apply a successful fetch
    pub fn settle(&mut self, fresh: Vec<T>) -> MergeSummary {
        let summary = merge_by_key(&mut self.items, fresh);
        self.loading = false;
        summary
    }

    /// Apply a failed fetch; cached items stay as they were
    pub fn fail(&mut self) {
        self.loading = false;
    }

    pub fn list_view(&self) -> ListView {
        if self.loading {
            ListView::Loading
        } else if self.items.is_empty() {
            ListView::Empty
        } else {
            ListView::Rows
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Feature;

    fn feature(id: &str, name: &str, is_active: bool) -> Feature {
        Feature {
            feature_id: id.to_string(),
            name: name.to_string(),
            description: format!("{} description", name),
            is_active,
        }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = ListState::<Feature>::default();
        assert!(state.loading);
        assert_eq!(state.list_view(), ListView::Loading);
    }

    #[test]
    fn test_failed_fetch_leaves_list_empty() {
        let mut state = ListState::<Feature>::default();
        state.fail();
        assert!(!state.loading);
        assert!(state.items.is_empty());
        assert_eq!(state.list_view(), ListView::Empty);
    }

    #[test]
    fn test_failed_refetch_keeps_cached_items() {
        let mut state = ListState::default();
        state.settle(vec![feature("f1", "Export", true)]);

        state.begin_load();
        state.fail();

        assert!(!state.loading);
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_settle_renders_rows() {
        let mut state = ListState::default();
        let summary = state.settle(vec![feature("f1", "X", true)]);

        assert_eq!(summary, MergeSummary { added: 1, updated: 0, removed: 0 });
        assert_eq!(state.list_view(), ListView::Rows);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].status_label(), "Active");
    }

    #[test]
    fn test_merge_by_key() {
        let mut current = vec![
            feature("f1", "Export", true),
            feature("f2", "Import", true),
            feature("f3", "Audit", false),
        ];
        let fresh = vec![
            feature("f3", "Audit", false),
            feature("f1", "Export", false),
            feature("f4", "Billing", true),
        ];

        let summary = merge_by_key(&mut current, fresh);

        assert_eq!(summary, MergeSummary { added: 1, updated: 1, removed: 1 });
        let ids: Vec<&str> = current.iter().map(Keyed::key).collect();
        assert_eq!(ids, vec!["f3", "f1", "f4"]);
        assert!(!current[1].is_active);
    }

    #[test]
    fn test_merge_identical_is_unchanged() {
        let mut current = vec![feature("f1", "Export", true)];
        let summary = merge_by_key(&mut current, vec![feature("f1", "Export", true)]);
        assert!(summary.is_unchanged());
    }
}
