//! Dropdown Session
//!
//! One option picked from a collapsible list. The option list opens and
//! closes independently of the panel; escape collapses the list before it
//! closes the panel.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropdownSession {
    pub title: String,
    pub options: Vec<String>,
    pub selected: Option<usize>,
    pub list_open: bool,
}

impl DropdownSession {
    pub fn open(title: String, options: Vec<String>, selected_index: Option<usize>) -> Self {
        let selected = selected_index.filter(|&i| i < options.len());
        Self {
            title,
            options,
            selected,
            list_open: false,
        }
    }

    /// Label shown on the collapsed control
    pub fn label(&self) -> String {
        self.selected
            .and_then(|i| self.options.get(i).cloned())
            .unwrap_or_else(|| "Select an option".to_string())
    }

    pub fn toggle_list(&mut self) {
        self.list_open = !self.list_open;
    }

    /// Pick an option; collapses the list but keeps the panel open
    pub fn choose(&mut self, index: usize) {
        if index < self.options.len() {
            self.selected = Some(index);
        }
        self.list_open = false;
    }

    /// Escape collapses an open option list first; only a second escape
    /// reaches the panel.
    pub fn escape_collapses_list(&mut self) -> bool {
        if self.list_open {
            self.list_open = false;
            true
        } else {
            false
        }
    }

    /// The confirmed `(index, value)` pair, if any
    pub fn submission(&self) -> Option<(usize, &str)> {
        let index = self.selected?;
        self.options.get(index).map(|v| (index, v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> DropdownSession {
        DropdownSession::open(
            "Pick".into(),
            vec!["a".into(), "b".into(), "c".into()],
            None,
        )
    }

    #[test]
    fn preselected_index_must_be_in_range() {
        let s = DropdownSession::open("Pick".into(), vec!["a".into()], Some(5));
        assert_eq!(s.selected, None);
        assert_eq!(s.label(), "Select an option");
        let s = DropdownSession::open("Pick".into(), vec!["a".into()], Some(0));
        assert_eq!(s.label(), "a");
    }

    #[test]
    fn choosing_collapses_the_list() {
        let mut s = session();
        s.toggle_list();
        assert!(s.list_open);
        s.choose(1);
        assert!(!s.list_open);
        assert_eq!(s.submission(), Some((1, "b")));
    }

    #[test]
    fn escape_collapses_before_closing() {
        let mut s = session();
        s.toggle_list();
        assert!(s.escape_collapses_list());
        assert!(!s.list_open);
        // Second escape falls through to the panel close
        assert!(!s.escape_collapses_list());
    }

    #[test]
    fn submission_requires_a_choice() {
        let s = session();
        assert_eq!(s.submission(), None);
    }
}
