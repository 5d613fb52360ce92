/// Field sync for rendered rows: classes, favicon, title

use crate::tab_data::{TabId, TabSnapshot};
use crate::view_state::PanelState;

/// Everything a row element shows for one tab
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub tab_id: TabId,
    pub classes: Vec<&'static str>,
    pub favicon: String,
    pub title: String,
    pub has_context: bool,
}

impl RowView {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }

    /// Space-separated value for the `class` attribute
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }
}

/// Fields shared by pinned and unpinned rows.
pub fn update_common(base_class: &'static str, tab: &TabSnapshot, state: &PanelState, empty_icon: &str) -> RowView {
    let mut classes = vec![base_class];
    if tab.active {
        classes.push("active");
    }
    if tab.is_loading() {
        classes.push("loading");
    }
    if state.is_changed(tab.id) {
        classes.push("changed");
    }

    let favicon = match tab.fav_icon_url.as_deref() {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => empty_icon.to_string(),
    };

    RowView {
        tab_id: tab.id,
        classes,
        favicon,
        title: String::new(),
        has_context: false,
    }
}

pub fn update_pin(tab: &TabSnapshot, state: &PanelState, empty_icon: &str) -> RowView {
    update_common("pin", tab, state, empty_icon)
}

/// Unpinned rows add sound state, the unvisited mark, the title and the
/// context menu anchor.
pub fn update_row(tab: &TabSnapshot, state: &PanelState, empty_icon: &str) -> RowView {
    let mut view = update_common("tab", tab, state, empty_icon);

    if tab.audible {
        view.classes.push(if tab.is_muted() { "muted" } else { "audible" });
    }
    if tab.discarded && !state.is_visited(tab.id) {
        view.classes.push("unvisited");
    }

    view.title = tab.title.clone();
    view.has_context = state.context() == Some(tab.id);
    view
}
