/// Per-window panel state: title tracking, visit marks and the context selection

use crate::tab_data::TabId;
use std::collections::{HashMap, HashSet};

/// State the panel keeps about tabs beyond what a snapshot carries.
///
/// Lives as long as the panel is mounted. Entries for a tab are dropped with
/// [`PanelState::forget`] when the host reports the tab gone, so nothing here
/// outlives the tab it describes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelState {
    last_title: HashMap<TabId, String>,
    changed: HashSet<TabId>,
    visited: HashSet<TabId>,
    context: Option<TabId>,
    pin_height: Option<i32>,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tab became active: it is visited, no longer changed, and any open
    /// context menu closes.
    pub fn mark_activated(&mut self, tab_id: TabId) {
        self.visited.insert(tab_id);
        self.changed.remove(&tab_id);
        self.context = None;
    }

    /// Records a title reported by `tabs.onUpdated`.
    ///
    /// Returns true when the tab was flagged as changed. A tab without a
    /// recorded title counts as differing.
    pub fn record_title(&mut self, tab_id: TabId, title: &str, active: bool) -> bool {
        let differs = self
            .last_title
            .get(&tab_id)
            .map_or(true, |last| last != title);

        self.last_title.insert(tab_id, title.to_string());

        if !active && differs {
            self.changed.insert(tab_id);
            true
        } else {
            false
        }
    }

    /// Remembers a title without flagging anything.
    pub fn seed_title(&mut self, tab_id: TabId, title: &str) {
        self.last_title.insert(tab_id, title.to_string());
    }

    /// Drops everything known about a tab. Returns true if anything was held.
    pub fn forget(&mut self, tab_id: TabId) -> bool {
        let had_title = self.last_title.remove(&tab_id).is_some();
        let was_changed = self.changed.remove(&tab_id);
        let was_visited = self.visited.remove(&tab_id);
        let was_context = self.context == Some(tab_id);
        if was_context {
            self.context = None;
        }
        had_title || was_changed || was_visited || was_context
    }

    pub fn is_changed(&self, tab_id: TabId) -> bool {
        self.changed.contains(&tab_id)
    }

    pub fn is_visited(&self, tab_id: TabId) -> bool {
        self.visited.contains(&tab_id)
    }

    pub fn last_title(&self, tab_id: TabId) -> Option<&str> {
        self.last_title.get(&tab_id).map(String::as_str)
    }

    pub fn context(&self) -> Option<TabId> {
        self.context
    }

    /// Right-click on a row: select it, or deselect if it already was.
    pub fn toggle_context(&mut self, tab_id: TabId) {
        self.context = if self.context == Some(tab_id) {
            None
        } else {
            Some(tab_id)
        };
    }

    /// Returns true if a selection was cleared.
    pub fn clear_context(&mut self) -> bool {
        self.context.take().is_some()
    }

    pub fn pin_height(&self) -> Option<i32> {
        self.pin_height
    }

    /// Stores the measured height of the pinned block; true if it changed.
    pub fn set_pin_height(&mut self, height: i32) -> bool {
        if self.pin_height == Some(height) {
            return false;
        }
        self.pin_height = Some(height);
        true
    }
}

#[cfg(test)]
impl PanelState {
    /// Whether any per-tab entry exists for the id
    pub fn tracks(&self, tab_id: TabId) -> bool {
        self.last_title.contains_key(&tab_id)
            || self.changed.contains(&tab_id)
            || self.visited.contains(&tab_id)
    }
}
