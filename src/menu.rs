//! List / Submenu State Machine
//!
//! A list panel shows one frame of items at a time. Entering a submenu
//! pushes the frame being left onto a stack; the submenu's own items arrive
//! asynchronously from the host and replace the visible frame without
//! re-animating the panel. Back-navigation pops the stack and re-renders the
//! previous frame in place.

use crate::models::{ListItem, ListItemKind};

/// One rendered set of list items
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuFrame {
    pub title: String,
    pub items: Vec<ListItem>,
}

/// Current selection (marked on click, dispatched on confirm)
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub index: usize,
    pub item: ListItem,
}

/// What a click on an item leads to
#[derive(Debug, Clone, PartialEq)]
pub enum SelectOutcome {
    /// Disabled or out-of-range: no binding, no effect
    Ignored,
    /// Plain item marked; waits for an explicit confirm
    Marked,
    /// Submenu/back items confirm themselves immediately
    AutoConfirm(ConfirmAction),
}

/// The dispatch decided by confirming the current selection
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmAction {
    /// Close the panel, then emit the selection to the host
    Plain { index: usize, item: ListItem },
    /// Keep the panel open, push the current frame, tell the host
    Submenu { index: usize, item: ListItem },
    /// Pop one frame, tell the host
    Back,
}

/// What the escape key does given the current stack
#[derive(Debug, Clone, PartialEq)]
pub enum EscapeAction {
    /// Inside a submenu with a back item: escape selects it
    SelectBack(usize),
    /// At the root (or no back item): close the panel outright
    Close,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuState {
    stack: Vec<MenuFrame>,
    current: MenuFrame,
    selected: Option<Selection>,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.current.title
    }

    pub fn items(&self) -> &[ListItem] {
        &self.current.items
    }

    pub fn selected(&self) -> Option<&Selection> {
        self.selected.as_ref()
    }

    /// Submenu depth; 0 at the root
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn in_submenu(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Replace the whole stack with a single root frame
    pub fn show_root(&mut self, title: String, items: Vec<ListItem>) {
        self.stack.clear();
        self.current = MenuFrame { title, items };
        self.selected = None;
    }

    /// Replace the visible frame with submenu items arriving from the host.
    /// The frame being left was already pushed when the submenu item was
    /// selected, so this never pushes.
    pub fn show_submenu(&mut self, title: String, items: Vec<ListItem>) {
        self.current = MenuFrame { title, items };
        self.selected = None;
    }

    /// Click on item `index`
    pub fn select(&mut self, index: usize) -> SelectOutcome {
        let Some(item) = self.current.items.get(index) else {
            return SelectOutcome::Ignored;
        };
        if item.disabled {
            return SelectOutcome::Ignored;
        }
        let item = item.clone();
        self.selected = Some(Selection {
            index,
            item: item.clone(),
        });
        match item.kind() {
            ListItemKind::Plain => SelectOutcome::Marked,
            ListItemKind::Submenu | ListItemKind::Back => {
                SelectOutcome::AutoConfirm(self.confirm().unwrap_or(ConfirmAction::Back))
            }
        }
    }

    /// Dispatch the current selection, if any. For submenu selections the
    /// frame being left is pushed here; for back selections one frame is
    /// popped and re-rendered immediately.
    pub fn confirm(&mut self) -> Option<ConfirmAction> {
        let Selection { index, item } = self.selected.take()?;
        match item.kind() {
            ListItemKind::Plain => Some(ConfirmAction::Plain { index, item }),
            ListItemKind::Submenu => {
                self.stack.push(self.current.clone());
                Some(ConfirmAction::Submenu { index, item })
            }
            ListItemKind::Back => {
                self.pop();
                Some(ConfirmAction::Back)
            }
        }
    }

    /// Pop one frame, restoring the previous item set. No-op at the root.
    pub fn pop(&mut self) {
        if let Some(frame) = self.stack.pop() {
            self.current = frame;
            self.selected = None;
        }
    }

    /// Escape semantics: in a submenu whose frame carries a back item the
    /// escape re-targets to that item; otherwise it closes the panel.
    pub fn escape(&self) -> EscapeAction {
        if self.in_submenu() {
            if let Some(index) = self.current.items.iter().position(|i| i.is_back) {
                return EscapeAction::SelectBack(index);
            }
        }
        EscapeAction::Close
    }

    /// Full reset, used whenever the list panel closes for a non-submenu
    /// reason.
    pub fn clear(&mut self) {
        self.stack.clear();
        self.current = MenuFrame::default();
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(label: &str) -> ListItem {
        ListItem {
            label: label.to_string(),
            description: None,
            icon: None,
            disabled: false,
            submenu: false,
            is_back: false,
            price: None,
        }
    }

    fn submenu(label: &str) -> ListItem {
        ListItem {
            submenu: true,
            ..plain(label)
        }
    }

    fn back() -> ListItem {
        ListItem {
            is_back: true,
            ..plain("Back")
        }
    }

    fn disabled(label: &str) -> ListItem {
        ListItem {
            disabled: true,
            ..plain(label)
        }
    }

    #[test]
    fn disabled_items_are_unselectable() {
        let mut menu = MenuState::new();
        menu.show_root("Menu".into(), vec![disabled("off"), plain("on")]);
        assert_eq!(menu.select(0), SelectOutcome::Ignored);
        assert!(menu.selected().is_none());
        assert_eq!(menu.select(1), SelectOutcome::Marked);
        assert_eq!(menu.selected().unwrap().index, 1);
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let mut menu = MenuState::new();
        menu.show_root("Menu".into(), vec![plain("a")]);
        assert_eq!(menu.select(5), SelectOutcome::Ignored);
    }

    #[test]
    fn plain_confirm_reports_index_and_item() {
        let mut menu = MenuState::new();
        menu.show_root("Menu".into(), vec![plain("a"), plain("b")]);
        menu.select(1);
        match menu.confirm() {
            Some(ConfirmAction::Plain { index, item }) => {
                assert_eq!(index, 1);
                assert_eq!(item.label, "b");
            }
            other => panic!("unexpected action: {other:?}"),
        }
        // Selection is consumed
        assert!(menu.confirm().is_none());
    }

    #[test]
    fn submenu_select_auto_confirms_and_pushes() {
        let mut menu = MenuState::new();
        menu.show_root("Root".into(), vec![submenu("A"), plain("C")]);
        match menu.select(0) {
            SelectOutcome::AutoConfirm(ConfirmAction::Submenu { index, .. }) => {
                assert_eq!(index, 0)
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(menu.depth(), 1);
        // Host replies with the submenu contents
        menu.show_submenu("A".into(), vec![plain("B"), back()]);
        assert_eq!(menu.items()[0].label, "B");
        assert_eq!(menu.depth(), 1);
    }

    #[test]
    fn back_pops_and_restores_previous_frame() {
        let mut menu = MenuState::new();
        menu.show_root("Root".into(), vec![submenu("A"), plain("C")]);
        menu.select(0);
        menu.show_submenu("A".into(), vec![plain("B"), back()]);
        match menu.select(1) {
            SelectOutcome::AutoConfirm(ConfirmAction::Back) => {}
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(menu.depth(), 0);
        assert_eq!(menu.title(), "Root");
        assert_eq!(menu.items()[0].label, "A");
        assert_eq!(menu.items()[1].label, "C");
    }

    #[test]
    fn n_enters_then_n_backs_returns_to_root() {
        let mut menu = MenuState::new();
        menu.show_root("Root".into(), vec![submenu("level0")]);
        let root_items = menu.items().to_vec();
        for depth in 0..4 {
            menu.select(0);
            menu.show_submenu(
                format!("level{depth}"),
                vec![submenu(&format!("level{}", depth + 1)), back()],
            );
        }
        assert_eq!(menu.depth(), 4);
        for _ in 0..4 {
            let idx = match menu.escape() {
                EscapeAction::SelectBack(idx) => idx,
                EscapeAction::Close => panic!("expected back item"),
            };
            menu.select(idx);
        }
        assert_eq!(menu.depth(), 0);
        assert_eq!(menu.items(), &root_items[..]);
    }

    #[test]
    fn escape_at_root_closes() {
        let mut menu = MenuState::new();
        menu.show_root("Root".into(), vec![plain("a")]);
        assert_eq!(menu.escape(), EscapeAction::Close);
    }

    #[test]
    fn escape_in_submenu_without_back_item_closes() {
        let mut menu = MenuState::new();
        menu.show_root("Root".into(), vec![submenu("A")]);
        menu.select(0);
        menu.show_submenu("A".into(), vec![plain("B")]);
        assert_eq!(menu.escape(), EscapeAction::Close);
    }

    #[test]
    fn show_root_replaces_stack() {
        let mut menu = MenuState::new();
        menu.show_root("Root".into(), vec![submenu("A")]);
        menu.select(0);
        menu.show_submenu("A".into(), vec![back()]);
        menu.show_root("Fresh".into(), vec![plain("x")]);
        assert_eq!(menu.depth(), 0);
        assert_eq!(menu.title(), "Fresh");
    }

    #[test]
    fn clear_resets_everything() {
        let mut menu = MenuState::new();
        menu.show_root("Root".into(), vec![submenu("A")]);
        menu.select(0);
        menu.clear();
        assert_eq!(menu.depth(), 0);
        assert!(menu.items().is_empty());
        assert!(menu.selected().is_none());
    }
}
