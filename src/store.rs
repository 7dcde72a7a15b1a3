//! Global Display State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the
//! preferences every rendered surface styles itself from.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::ScreenCorner;
use crate::settings::{SettingsSnapshot, DEFAULT_OPACITY};

/// Display preferences applied to every window and toast
#[derive(Clone, Debug, Store)]
pub struct UiState {
    pub dark_mode: bool,
    /// Window opacity as a fraction in `[0, 1]`
    pub opacity: f64,
    pub free_drag: bool,
    pub notification_position: ScreenCorner,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            dark_mode: false,
            opacity: DEFAULT_OPACITY,
            free_drag: false,
            notification_position: ScreenCorner::default(),
        }
    }
}

impl UiState {
    pub fn from_snapshot(snapshot: &SettingsSnapshot) -> Self {
        Self {
            dark_mode: snapshot.dark_mode,
            opacity: snapshot.opacity,
            free_drag: snapshot.free_drag,
            notification_position: snapshot.notification_position,
        }
    }
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the display store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

/// Capture the current preferences (settings-panel open)
pub fn snapshot_of(store: &UiStore) -> SettingsSnapshot {
    SettingsSnapshot {
        dark_mode: store.dark_mode().get_untracked(),
        opacity: store.opacity().get_untracked(),
        free_drag: store.free_drag().get_untracked(),
        notification_position: store.notification_position().get_untracked(),
    }
}

/// Re-apply a snapshot (settings-panel cancel)
pub fn apply_snapshot(store: &UiStore, snapshot: &SettingsSnapshot) {
    store.dark_mode().set(snapshot.dark_mode);
    store.opacity().set(snapshot.opacity);
    store.free_drag().set(snapshot.free_drag);
    store
        .notification_position()
        .set(snapshot.notification_position);
}

/// Background of a window or toast surface honoring opacity and dark mode
pub fn surface_background(dark_mode: bool, opacity: f64) -> String {
    if dark_mode {
        format!("rgba(28, 28, 30, {opacity})")
    } else {
        format!("rgba(255, 255, 255, {opacity})")
    }
}
