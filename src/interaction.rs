/// Mouse dispatch for tab rows and the context menu

use crate::tab_data::TabId;

/// A client-space rectangle, as from `getBoundingClientRect`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Rect {
        Rect { left, top, right, bottom }
    }

    /// Hidden elements report a zero-sized rect at the origin
    pub fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    /// Edges are inclusive.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        !self.is_empty() && x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Other(i16),
}

impl MouseButton {
    /// Maps `MouseEvent.button`
    pub fn from_code(code: i16) -> MouseButton {
        match code {
            0 => MouseButton::Left,
            1 => MouseButton::Middle,
            2 => MouseButton::Right,
            other => MouseButton::Other(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Pin,
    Tab,
}

/// Where the sound icons of a row currently are
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IconRects {
    pub audible: Option<Rect>,
    pub muted: Option<Rect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabCommand {
    Activate(TabId),
    Mute(TabId),
    Unmute(TabId),
    Close(TabId),
    ToggleContext(TabId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    Duplicate,
    MoveToTop,
}

/// Decides what a mouse-up on a row does.
pub fn dispatch_mouse_up(
    kind: RowKind,
    tab_id: TabId,
    button: MouseButton,
    x: f64,
    y: f64,
    icons: &IconRects,
) -> Option<TabCommand> {
    match button {
        MouseButton::Left => {
            let hit = |rect: Option<Rect>| rect.map_or(false, |r| r.contains(x, y));
            if hit(icons.audible) {
                Some(TabCommand::Mute(tab_id))
            } else if hit(icons.muted) {
                Some(TabCommand::Unmute(tab_id))
            } else {
                Some(TabCommand::Activate(tab_id))
            }
        }
        MouseButton::Middle => Some(TabCommand::Close(tab_id)),
        MouseButton::Right => match kind {
            RowKind::Tab => Some(TabCommand::ToggleContext(tab_id)),
            RowKind::Pin => None,
        },
        MouseButton::Other(_) => None,
    }
}

/// Whether a mouse-up that no row or menu claimed closes the context menu
pub fn dismisses_context(button: MouseButton) -> bool {
    button == MouseButton::Left
}

/// Index that places a tab right after the last pinned tab
pub fn move_to_top_index(pinned_count: usize) -> i32 {
    i32::try_from(pinned_count).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icons() -> IconRects {
        IconRects {
            audible: Some(Rect::new(20.0, 0.0, 36.0, 16.0)),
            muted: Some(Rect::new(40.0, 0.0, 56.0, 16.0)),
        }
    }

    #[test]
    fn test_rect_contains_edges() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(rect.contains(10.0, 10.0));
        assert!(rect.contains(20.0, 20.0));
        assert!(!rect.contains(20.5, 15.0));
        assert!(!rect.contains(15.0, 9.0));
    }

    #[test]
    fn test_empty_rect_never_hit() {
        let hidden = Rect::default();
        assert!(hidden.is_empty());
        assert!(!hidden.contains(0.0, 0.0));
    }

    #[test]
    fn test_left_click_on_audible_icon_mutes() {
        let command = dispatch_mouse_up(RowKind::Tab, 7, MouseButton::Left, 25.0, 8.0, &icons());
        assert_eq!(command, Some(TabCommand::Mute(7)));
    }

    #[test]
    fn test_left_click_on_muted_icon_unmutes() {
        let command = dispatch_mouse_up(RowKind::Tab, 7, MouseButton::Left, 50.0, 8.0, &icons());
        assert_eq!(command, Some(TabCommand::Unmute(7)));
    }

    #[test]
    fn test_left_click_elsewhere_activates() {
        let command = dispatch_mouse_up(RowKind::Tab, 7, MouseButton::Left, 100.0, 8.0, &icons());
        assert_eq!(command, Some(TabCommand::Activate(7)));

        let no_icons = IconRects::default();
        let pin = dispatch_mouse_up(RowKind::Pin, 3, MouseButton::Left, 0.0, 0.0, &no_icons);
        assert_eq!(pin, Some(TabCommand::Activate(3)));
    }

    #[test]
    fn test_middle_click_closes() {
        let tab = dispatch_mouse_up(RowKind::Tab, 7, MouseButton::from_code(1), 25.0, 8.0, &icons());
        let pin = dispatch_mouse_up(RowKind::Pin, 3, MouseButton::Middle, 0.0, 0.0, &IconRects::default());
        assert_eq!(tab, Some(TabCommand::Close(7)));
        assert_eq!(pin, Some(TabCommand::Close(3)));
    }

    #[test]
    fn test_right_click_toggles_context_on_tabs_only() {
        let tab = dispatch_mouse_up(RowKind::Tab, 7, MouseButton::Right, 0.0, 0.0, &icons());
        let pin = dispatch_mouse_up(RowKind::Pin, 3, MouseButton::Right, 0.0, 0.0, &IconRects::default());
        assert_eq!(tab, Some(TabCommand::ToggleContext(7)));
        assert_eq!(pin, None);
    }

    #[test]
    fn test_other_buttons_ignored() {
        assert_eq!(MouseButton::from_code(3), MouseButton::Other(3));
        let command = dispatch_mouse_up(RowKind::Tab, 7, MouseButton::Other(4), 0.0, 0.0, &icons());
        assert_eq!(command, None);
    }

    #[test]
    fn test_only_left_release_outside_dismisses_context() {
        assert!(dismisses_context(MouseButton::from_code(0)));
        assert!(!dismisses_context(MouseButton::from_code(1)));
        assert!(!dismisses_context(MouseButton::from_code(2)));
        assert!(!dismisses_context(MouseButton::from_code(4)));
    }

    #[test]
    fn test_move_to_top_index() {
        assert_eq!(move_to_top_index(0), 0);
        assert_eq!(move_to_top_index(3), 3);
    }
}
