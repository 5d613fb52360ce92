/// ViewSync: folds host notifications and query results into panel state

use crate::reconcile::{RowArena, RowPatch};
use crate::tab_data::{HostEvent, TabId, TabList, TabSnapshot};
use crate::view_state::PanelState;

/// Sequence number of one `render()` invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RenderTicket(u64);

/// Hands out render tickets; only results of the latest one are applied.
#[derive(Debug, Default)]
pub struct RenderSequencer {
    issued: u64,
}

impl RenderSequencer {
    pub fn issue(&mut self) -> RenderTicket {
        self.issued += 1;
        RenderTicket(self.issued)
    }

    pub fn is_current(&self, ticket: RenderTicket) -> bool {
        ticket.0 == self.issued
    }
}

/// Everything the panel shows, minus the DOM
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewSync {
    state: PanelState,
    pinned: RowArena,
    unpinned: RowArena,
    tab_count: usize,
}

impl ViewSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn pinned(&self) -> &RowArena {
        &self.pinned
    }

    pub fn unpinned(&self) -> &RowArena {
        &self.unpinned
    }

    pub fn tab_count(&self) -> usize {
        self.tab_count
    }

    /// Applies a host notification. Every notification is followed by a
    /// render; the return value only says whether panel state moved.
    pub fn handle_event(&mut self, event: &HostEvent) -> bool {
        match event {
            HostEvent::Activated { tab_id } => {
                let before = self.state.clone();
                self.state.mark_activated(*tab_id);
                self.state != before
            }
            HostEvent::Updated { tab_id, change_info, tab } => {
                let before = self.state.clone();
                match &change_info.title {
                    Some(title) => {
                        self.state.record_title(*tab_id, title, tab.active);
                    }
                    None => self.state.seed_title(*tab_id, &tab.title),
                }
                self.state != before
            }
            HostEvent::Replaced { removed_tab_id, .. } => self.state.forget(*removed_tab_id),
            HostEvent::Removed { tab_id } | HostEvent::Detached { tab_id } => {
                self.state.forget(*tab_id)
            }
            HostEvent::Created { tab } => {
                if self.state.last_title(tab.id).is_none() {
                    self.state.seed_title(tab.id, &tab.title);
                    true
                } else {
                    false
                }
            }
            HostEvent::Moved { .. } | HostEvent::Attached { .. } => false,
        }
    }

    /// Applies one of the three render query results.
    pub fn apply_snapshot(&mut self, list: TabList, tabs: Vec<TabSnapshot>) -> Option<RowPatch> {
        match list {
            TabList::All => {
                self.tab_count = tabs.len();
                None
            }
            TabList::Pinned => Some(self.pinned.update_tabs(tabs)),
            TabList::Unpinned => Some(self.unpinned.update_tabs(tabs)),
        }
    }

    pub fn toggle_context(&mut self, tab_id: TabId) {
        self.state.toggle_context(tab_id);
    }

    pub fn clear_context(&mut self) -> bool {
        self.state.clear_context()
    }

    /// The context tab, if its row is currently in the unpinned list
    pub fn context_anchor(&self) -> Option<TabId> {
        self.state
            .context()
            .filter(|tab_id| self.unpinned.position(*tab_id).is_some())
    }

    pub fn resize(&mut self, pin_height: i32) -> bool {
        self.state.set_pin_height(pin_height)
    }
}
