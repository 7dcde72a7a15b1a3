//! Notification Registry
//!
//! Fire-and-forget toast bookkeeping: monotonically increasing ids,
//! per-toast auto-close after `duration_ms`, idempotent close, and a small
//! cap on concurrently live toasts with oldest-first eviction.

use crate::models::NotificationKind;

/// Flood protection: at most this many live toasts; creating more evicts
/// the oldest.
pub const MAX_CONCURRENT: usize = 5;

pub const DEFAULT_DURATION_MS: u32 = 5_000;

/// Exit-animation length before a closed toast detaches
pub const EXIT_ANIMATION_MS: u32 = 350;

/// Payload accepted by `create`; unspecified fields take defaults
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationSpec {
    pub kind: NotificationKind,
    pub title: Option<String>,
    pub message: Option<String>,
    pub duration_ms: Option<u32>,
    pub icon: Option<String>,
    pub closable: Option<bool>,
}

impl NotificationSpec {
    pub fn new(kind: NotificationKind, title: &str, message: &str, duration_ms: u32) -> Self {
        Self {
            kind,
            title: Some(title.to_string()),
            message: Some(message.to_string()),
            duration_ms: Some(duration_ms),
            icon: None,
            closable: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Live,
    Exiting,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub duration_ms: u32,
    pub icon: Option<String>,
    pub closable: bool,
    pub phase: ToastPhase,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationRegistry {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl NotificationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    fn live_count(&self) -> usize {
        self.toasts
            .iter()
            .filter(|t| t.phase == ToastPhase::Live)
            .count()
    }

    /// Register a toast. Returns its id plus the id of an evicted toast
    /// (oldest live one) when the cap is hit; the caller starts the
    /// auto-close timer for the new toast and the exit animation for the
    /// evicted one.
    pub fn create(&mut self, spec: NotificationSpec) -> (u64, Option<u64>) {
        self.next_id += 1;
        let id = self.next_id;
        let evicted = if self.live_count() >= MAX_CONCURRENT {
            let oldest = self
                .toasts
                .iter()
                .find(|t| t.phase == ToastPhase::Live)
                .map(|t| t.id);
            oldest.filter(|&old| self.begin_close(old))
        } else {
            None
        };
        self.toasts.push(Toast {
            id,
            kind: spec.kind,
            title: spec.title.unwrap_or_else(|| "Notification".to_string()),
            message: spec.message.unwrap_or_default(),
            duration_ms: spec.duration_ms.unwrap_or(DEFAULT_DURATION_MS),
            icon: spec.icon,
            closable: spec.closable.unwrap_or(true),
            phase: ToastPhase::Live,
        });
        (id, evicted)
    }

    /// Start the exit animation. Idempotent: closing an unknown or already
    /// exiting toast reports `false` and has no effect, which also makes a
    /// late auto-close timer inert after a manual close.
    pub fn begin_close(&mut self, id: u64) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) if toast.phase == ToastPhase::Live => {
                toast.phase = ToastPhase::Exiting;
                true
            }
            _ => false,
        }
    }

    /// Exit-animation completion: detach the toast
    pub fn finish_close(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(title: &str) -> NotificationSpec {
        NotificationSpec {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn ids_increase_monotonically() {
        let mut reg = NotificationRegistry::new();
        let (a, _) = reg.create(spec("a"));
        let (b, _) = reg.create(spec("b"));
        let (c, _) = reg.create(spec("c"));
        assert!(a < b && b < c);
    }

    #[test]
    fn defaults_applied() {
        let mut reg = NotificationRegistry::new();
        let (id, _) = reg.create(NotificationSpec::default());
        let toast = reg.toasts().iter().find(|t| t.id == id).unwrap();
        assert_eq!(toast.kind, NotificationKind::Info);
        assert_eq!(toast.title, "Notification");
        assert_eq!(toast.duration_ms, DEFAULT_DURATION_MS);
        assert!(toast.closable);
    }

    #[test]
    fn close_is_idempotent() {
        let mut reg = NotificationRegistry::new();
        let (id, _) = reg.create(spec("a"));
        assert!(reg.begin_close(id));
        assert!(!reg.begin_close(id));
        assert!(!reg.begin_close(9999));
        reg.finish_close(id);
        reg.finish_close(id);
        assert!(reg.toasts().is_empty());
    }

    #[test]
    fn cap_evicts_oldest_live_toast() {
        let mut reg = NotificationRegistry::new();
        let (first, _) = reg.create(spec("0"));
        for i in 1..MAX_CONCURRENT {
            let (_, evicted) = reg.create(spec(&i.to_string()));
            assert_eq!(evicted, None);
        }
        let (_, evicted) = reg.create(spec("overflow"));
        assert_eq!(evicted, Some(first));
        let first_toast = reg.toasts().iter().find(|t| t.id == first).unwrap();
        assert_eq!(first_toast.phase, ToastPhase::Exiting);
        assert_eq!(reg.live_count(), MAX_CONCURRENT);
    }

    #[test]
    fn toasts_coexist_independently() {
        let mut reg = NotificationRegistry::new();
        let (a, _) = reg.create(spec("a"));
        let (b, _) = reg.create(spec("b"));
        reg.begin_close(a);
        reg.finish_close(a);
        assert!(reg.toasts().iter().any(|t| t.id == b));
        assert_eq!(reg.toasts().len(), 1);
    }
}
