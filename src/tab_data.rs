/// Data structures exchanged with the browser's tabs API
use serde::{Deserialize, Serialize};
use std::fmt;

pub type TabId = i32;

/// A tab as reported by `browser.tabs.query`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TabSnapshot {
    pub id: TabId,
    pub active: bool,
    pub pinned: bool,
    pub status: Option<String>,
    pub fav_icon_url: Option<String>,
    pub audible: bool,
    pub muted_info: Option<MutedInfo>,
    pub discarded: bool,
    pub title: String,
}

impl TabSnapshot {
    pub fn new(id: TabId, title: &str) -> TabSnapshot {
        TabSnapshot {
            id,
            title: title.to_string(),
            ..TabSnapshot::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status.as_deref() == Some("loading")
    }

    pub fn is_muted(&self) -> bool {
        self.muted_info.as_ref().map_or(false, |info| info.muted)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MutedInfo {
    pub muted: bool,
}

/// The `changeInfo` argument of `tabs.onUpdated`; only the title matters to the panel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChangeInfo {
    pub title: Option<String>,
}

/// A `browser.tabs` notification, as forwarded by the JS bridge
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum HostEvent {
    #[serde(rename_all = "camelCase")]
    Activated { tab_id: TabId },
    #[serde(rename_all = "camelCase")]
    Updated {
        tab_id: TabId,
        #[serde(default)]
        change_info: ChangeInfo,
        tab: TabSnapshot,
    },
    #[serde(rename_all = "camelCase")]
    Replaced { added_tab_id: TabId, removed_tab_id: TabId },
    #[serde(rename_all = "camelCase")]
    Removed { tab_id: TabId },
    #[serde(rename_all = "camelCase")]
    Detached { tab_id: TabId },
    #[serde(rename_all = "camelCase")]
    Moved { tab_id: TabId },
    #[serde(rename_all = "camelCase")]
    Attached { tab_id: TabId },
    Created { tab: TabSnapshot },
}

/// Which slice of the current window a render query asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabList {
    All,
    Pinned,
    Unpinned,
}

impl TabList {
    pub const ALL: [TabList; 3] = [TabList::All, TabList::Unpinned, TabList::Pinned];

    pub fn query(self) -> TabQuery {
        let pinned = match self {
            TabList::All => None,
            TabList::Pinned => Some(true),
            TabList::Unpinned => Some(false),
        };
        TabQuery {
            current_window: true,
            pinned,
        }
    }
}

impl fmt::Display for TabList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TabList::All => "all",
            TabList::Pinned => "pinned",
            TabList::Unpinned => "unpinned",
        };
        f.write_str(name)
    }
}

/// Query info passed to `browser.tabs.query`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabQuery {
    pub current_window: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
}

/// Update properties passed to `browser.tabs.update`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TabUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,
}

impl TabUpdate {
    pub fn activate() -> TabUpdate {
        TabUpdate {
            active: Some(true),
            ..TabUpdate::default()
        }
    }

    pub fn mute(muted: bool) -> TabUpdate {
        TabUpdate {
            muted: Some(muted),
            ..TabUpdate::default()
        }
    }
}

/// Move properties passed to `browser.tabs.move`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoveProperties {
    pub index: i32,
}
