/// Keyed row reconciliation for the pinned and unpinned lists

use crate::tab_data::{TabId, TabSnapshot};
use std::collections::{HashMap, VecDeque};

/// Identity of a rendered row. Stable for as long as the row lives, so the
/// DOM node behind it is reused instead of rebuilt.
pub type RowKey = u64;

#[derive(Debug, Clone, PartialEq)]
pub struct RowSlot {
    pub key: RowKey,
    pub tab: TabSnapshot,
}

/// What one reconciliation pass did to a list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowPatch {
    pub created: usize,
    pub removed: usize,
    pub reused: usize,
    pub moved: usize,
}

impl RowPatch {
    pub fn is_noop(&self) -> bool {
        self.created == 0 && self.removed == 0 && self.moved == 0
    }
}

/// Ordered rows of one list, keyed by tab id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowArena {
    rows: Vec<RowSlot>,
    next_key: RowKey,
}

impl RowArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[RowSlot] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn position(&self, tab_id: TabId) -> Option<usize> {
        self.rows.iter().position(|row| row.tab.id == tab_id)
    }

    /// Brings the rows in line with `tabs`, in order.
    ///
    /// A tab keeps the row it had last time, wherever it moved. Rows whose
    /// tab is gone are handed to new tabs before any row is created, and
    /// only what is left over is removed. Every row that survives gets the
    /// new snapshot.
    pub fn update_tabs(&mut self, tabs: Vec<TabSnapshot>) -> RowPatch {
        let mut patch = RowPatch::default();

        let wanted: HashMap<TabId, usize> = tabs
            .iter()
            .enumerate()
            .map(|(index, tab)| (tab.id, index))
            .collect();

        let old_position: HashMap<RowKey, usize> = self
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| (row.key, index))
            .collect();

        let mut by_tab: HashMap<TabId, RowKey> = HashMap::new();
        let mut pool: VecDeque<RowKey> = VecDeque::new();
        for row in &self.rows {
            if wanted.contains_key(&row.tab.id) && !by_tab.contains_key(&row.tab.id) {
                by_tab.insert(row.tab.id, row.key);
            } else {
                pool.push_back(row.key);
            }
        }

        let mut next = Vec::with_capacity(tabs.len());
        for (index, tab) in tabs.into_iter().enumerate() {
            let reused = by_tab.remove(&tab.id).or_else(|| pool.pop_front());
            let key = match reused {
                Some(key) => {
                    patch.reused += 1;
                    if old_position.get(&key) != Some(&index) {
                        patch.moved += 1;
                    }
                    key
                }
                None => {
                    patch.created += 1;
                    self.mint()
                }
            };
            next.push(RowSlot { key, tab });
        }

        patch.removed = pool.len();
        self.rows = next;
        patch
    }

    fn mint(&mut self) -> RowKey {
        let key = self.next_key;
        self.next_key += 1;
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(ids: &[TabId]) -> Vec<TabSnapshot> {
        ids.iter()
            .map(|id| TabSnapshot::new(*id, &format!("tab {}", id)))
            .collect()
    }

    fn keys(arena: &RowArena) -> Vec<RowKey> {
        arena.rows().iter().map(|row| row.key).collect()
    }

    #[test]
    fn test_first_render_creates_every_row() {
        let mut arena = RowArena::new();

        let patch = arena.update_tabs(tabs(&[1, 2, 3]));

        assert_eq!(patch.created, 3);
        assert_eq!(patch.removed, 0);
        assert_eq!(patch.reused, 0);
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_growing_creates_only_the_difference() {
        for (before, after) in [(0usize, 4usize), (2, 5), (3, 3), (5, 2), (4, 0)] {
            let mut arena = RowArena::new();
            let first: Vec<TabId> = (0..before as TabId).collect();
            // Disjoint ids so nothing matches by id
            let second: Vec<TabId> = (100..100 + after as TabId).collect();
            arena.update_tabs(tabs(&first));
            let old_keys = keys(&arena);

            let patch = arena.update_tabs(tabs(&second));

            assert_eq!(patch.created, after.saturating_sub(before), "{} -> {}", before, after);
            assert_eq!(patch.removed, before.saturating_sub(after), "{} -> {}", before, after);
            assert_eq!(patch.reused, before.min(after));
            assert_eq!(&keys(&arena)[..before.min(after)], &old_keys[..before.min(after)]);
        }
    }

    #[test]
    fn test_rows_follow_their_tab_when_moved() {
        let mut arena = RowArena::new();
        arena.update_tabs(tabs(&[1, 2, 3]));
        let key_of_3 = arena.rows()[2].key;

        let patch = arena.update_tabs(tabs(&[3, 1, 2]));

        assert_eq!(patch.created, 0);
        assert_eq!(patch.removed, 0);
        assert_eq!(patch.moved, 3);
        assert_eq!(arena.rows()[0].key, key_of_3);
        assert_eq!(arena.rows()[0].tab.id, 3);
    }

    #[test]
    fn test_closed_tab_row_recycled_for_new_tab() {
        let mut arena = RowArena::new();
        arena.update_tabs(tabs(&[1, 2, 3]));
        let key_of_2 = arena.rows()[1].key;

        let patch = arena.update_tabs(tabs(&[1, 3, 9]));

        assert_eq!(patch.created, 0);
        assert_eq!(patch.removed, 0);
        assert_eq!(arena.position(9), Some(2));
        assert_eq!(arena.rows()[2].key, key_of_2);
    }

    #[test]
    fn test_removed_rows_are_those_without_tab() {
        let mut arena = RowArena::new();
        arena.update_tabs(tabs(&[1, 2, 3, 4]));
        let kept: Vec<RowKey> = vec![arena.rows()[0].key, arena.rows()[3].key];

        let patch = arena.update_tabs(tabs(&[1, 4]));

        assert_eq!(patch.removed, 2);
        assert_eq!(keys(&arena), kept);
    }

    #[test]
    fn test_reused_rows_take_new_snapshot() {
        let mut arena = RowArena::new();
        arena.update_tabs(tabs(&[1]));

        let mut renamed = TabSnapshot::new(1, "renamed");
        renamed.active = true;
        let patch = arena.update_tabs(vec![renamed]);

        assert!(patch.is_noop());
        assert_eq!(arena.rows()[0].tab.title, "renamed");
        assert!(arena.rows()[0].tab.active);
    }

    #[test]
    fn test_keys_never_repeat() {
        let mut arena = RowArena::new();
        arena.update_tabs(tabs(&[1, 2]));
        let first = keys(&arena);
        arena.update_tabs(vec![]);
        arena.update_tabs(tabs(&[1, 2]));

        for key in keys(&arena) {
            assert!(!first.contains(&key));
        }
    }
}
