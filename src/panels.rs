//! Panel Registry
//!
//! Tracks which top-level overlay window is active and drives the animated
//! open/close lifecycle. At most one panel is ever opening or open; panels
//! that are mid close-animation are tracked separately until their
//! completion callback fires.

use web_time::Duration;

/// Open/close animation length. `finish_open`/`finish_close` must not be
/// applied before this much time has elapsed.
pub const ANIMATION: Duration = Duration::from_millis(300);

/// Top-level overlay windows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelId {
    Amount,
    List,
    Dropdown,
    Settings,
    Banking,
    Statement,
    Transfer,
    Shop,
}

/// Lifecycle phase of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationPhase {
    Opening,
    Open,
    Closing,
    #[default]
    Closed,
}

impl AnimationPhase {
    /// Whether the panel occupies the screen (rendered at all)
    pub fn is_rendered(self) -> bool {
        self != AnimationPhase::Closed
    }
}

/// Result of a `show` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowOutcome {
    /// The panel is already the active one; nothing to animate
    AlreadyActive,
    /// The panel starts opening. `closing` is the panel displaced by this
    /// show (schedule its `finish_close`); `became_visible` is true when no
    /// panel was visible before (notify the interaction prompt).
    Opened {
        closing: Option<PanelId>,
        became_visible: bool,
    },
}

/// Result of a `begin_close` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The panel was not the active one; silently ignored
    NotActive,
    /// Close animation started; `became_hidden` is true when no other panel
    /// remains visible (notify the interaction prompt).
    Closing { became_hidden: bool },
}

/// Result of a `hide_all` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HideAllOutcome {
    /// Refused: the active window is being dragged
    RejectedDragging,
    /// Nothing was visible
    NothingOpen,
    /// The active panel started closing
    Hidden { closing: PanelId },
}

/// Single-active-panel bookkeeping
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelRegistry {
    active: Option<(PanelId, AnimationPhase)>,
    closing: Vec<PanelId>,
    dragging: bool,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Panel currently opening or open
    pub fn active_id(&self) -> Option<PanelId> {
        self.active.map(|(id, _)| id)
    }

    /// Whether any panel is visible to the user
    pub fn is_visible(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    /// Phase of a panel. The active slot wins over a stale close-animation
    /// entry so a panel reopened mid-close renders as open.
    pub fn phase_of(&self, id: PanelId) -> AnimationPhase {
        match self.active {
            Some((active, phase)) if active == id => phase,
            _ if self.closing.contains(&id) => AnimationPhase::Closing,
            _ => AnimationPhase::Closed,
        }
    }

    /// Activate a panel, displacing whatever is active. Showing the panel
    /// that is already active is a no-op (the submenu re-render case).
    pub fn show(&mut self, id: PanelId) -> ShowOutcome {
        if self.active_id() == Some(id) {
            return ShowOutcome::AlreadyActive;
        }
        let became_visible = self.active.is_none();
        let closing = self.active.take().map(|(prev, _)| prev);
        if let Some(prev) = closing {
            if !self.closing.contains(&prev) {
                self.closing.push(prev);
            }
        }
        self.closing.retain(|&c| c != id);
        self.active = Some((id, AnimationPhase::Opening));
        ShowOutcome::Opened {
            closing,
            became_visible,
        }
    }

    /// Open-animation completion callback
    pub fn finish_open(&mut self, id: PanelId) {
        if let Some((active, phase @ AnimationPhase::Opening)) = &mut self.active {
            if *active == id {
                *phase = AnimationPhase::Open;
            }
        }
    }

    /// Start the close animation of the active panel. Closing a panel that
    /// is not active is a silent no-op.
    pub fn begin_close(&mut self, id: PanelId) -> CloseOutcome {
        if self.active_id() != Some(id) {
            return CloseOutcome::NotActive;
        }
        self.active = None;
        if !self.closing.contains(&id) {
            self.closing.push(id);
        }
        CloseOutcome::Closing {
            became_hidden: true,
        }
    }

    /// Close-animation completion callback; detaches the panel
    pub fn finish_close(&mut self, id: PanelId) {
        self.closing.retain(|&c| c != id);
    }

    /// Close whatever is open. Refused while the active window is dragged so
    /// it cannot vanish under the cursor.
    pub fn hide_all(&mut self) -> HideAllOutcome {
        if self.active.is_some() && self.dragging {
            return HideAllOutcome::RejectedDragging;
        }
        match self.active.take() {
            None => HideAllOutcome::NothingOpen,
            Some((id, _)) => {
                if !self.closing.contains(&id) {
                    self.closing.push(id);
                }
                HideAllOutcome::Hidden { closing: id }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_opens_and_reports_visibility_edge() {
        let mut reg = PanelRegistry::new();
        assert_eq!(
            reg.show(PanelId::List),
            ShowOutcome::Opened {
                closing: None,
                became_visible: true
            }
        );
        assert_eq!(reg.phase_of(PanelId::List), AnimationPhase::Opening);
        reg.finish_open(PanelId::List);
        assert_eq!(reg.phase_of(PanelId::List), AnimationPhase::Open);
    }

    #[test]
    fn show_same_panel_is_noop() {
        let mut reg = PanelRegistry::new();
        reg.show(PanelId::List);
        assert_eq!(reg.show(PanelId::List), ShowOutcome::AlreadyActive);
        assert_eq!(reg.phase_of(PanelId::List), AnimationPhase::Opening);
    }

    #[test]
    fn show_replaces_active_panel() {
        let mut reg = PanelRegistry::new();
        reg.show(PanelId::Amount);
        let outcome = reg.show(PanelId::Settings);
        assert_eq!(
            outcome,
            ShowOutcome::Opened {
                closing: Some(PanelId::Amount),
                became_visible: false
            }
        );
        // Old panel animates out while the new one animates in
        assert_eq!(reg.phase_of(PanelId::Amount), AnimationPhase::Closing);
        assert_eq!(reg.phase_of(PanelId::Settings), AnimationPhase::Opening);
        reg.finish_close(PanelId::Amount);
        assert_eq!(reg.phase_of(PanelId::Amount), AnimationPhase::Closed);
    }

    #[test]
    fn at_most_one_panel_opening_or_open() {
        let mut reg = PanelRegistry::new();
        let panels = [PanelId::Amount, PanelId::List, PanelId::Shop, PanelId::Banking];
        for id in panels {
            reg.show(id);
            let visible = panels
                .iter()
                .filter(|&&p| {
                    matches!(
                        reg.phase_of(p),
                        AnimationPhase::Opening | AnimationPhase::Open
                    )
                })
                .count();
            assert_eq!(visible, 1);
        }
    }

    #[test]
    fn begin_close_of_inactive_panel_is_noop() {
        let mut reg = PanelRegistry::new();
        reg.show(PanelId::List);
        assert_eq!(reg.begin_close(PanelId::Shop), CloseOutcome::NotActive);
        assert_eq!(reg.active_id(), Some(PanelId::List));
    }

    #[test]
    fn close_then_finish_detaches() {
        let mut reg = PanelRegistry::new();
        reg.show(PanelId::Dropdown);
        assert_eq!(
            reg.begin_close(PanelId::Dropdown),
            CloseOutcome::Closing {
                became_hidden: true
            }
        );
        assert!(!reg.is_visible());
        assert_eq!(reg.phase_of(PanelId::Dropdown), AnimationPhase::Closing);
        reg.finish_close(PanelId::Dropdown);
        assert_eq!(reg.phase_of(PanelId::Dropdown), AnimationPhase::Closed);
    }

    #[test]
    fn reopen_while_closing_renders_open() {
        let mut reg = PanelRegistry::new();
        reg.show(PanelId::List);
        reg.begin_close(PanelId::List);
        reg.show(PanelId::List);
        assert_eq!(reg.phase_of(PanelId::List), AnimationPhase::Opening);
        // The stale completion callback must not clobber the reopened panel
        reg.finish_close(PanelId::List);
        assert_eq!(reg.phase_of(PanelId::List), AnimationPhase::Opening);
    }

    #[test]
    fn hide_all_rejected_while_dragging() {
        let mut reg = PanelRegistry::new();
        reg.show(PanelId::Settings);
        reg.set_dragging(true);
        assert_eq!(reg.hide_all(), HideAllOutcome::RejectedDragging);
        assert!(reg.is_visible());
        reg.set_dragging(false);
        assert_eq!(
            reg.hide_all(),
            HideAllOutcome::Hidden {
                closing: PanelId::Settings
            }
        );
        assert!(!reg.is_visible());
    }

    #[test]
    fn hide_all_with_nothing_open() {
        let mut reg = PanelRegistry::new();
        assert_eq!(reg.hide_all(), HideAllOutcome::NothingOpen);
    }
}
