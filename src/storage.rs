//! Preference Persistence
//!
//! Display preferences live in localStorage under fixed keys. They are read
//! once at startup and written only on an explicit settings save (or the
//! host's dark-mode toggle).

use crate::models::ScreenCorner;
use crate::settings::SettingsSnapshot;

const KEY_DARK_MODE: &str = "nui_dark_mode";
const KEY_OPACITY: &str = "nui_window_opacity";
const KEY_FREE_DRAG: &str = "nui_free_drag";
const KEY_NOTIFICATION_POSITION: &str = "nui_notification_position";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn read(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

fn write(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            web_sys::console::warn_1(&format!("failed to persist {key}").into());
        }
    }
}

/// Load saved preferences, falling back to defaults field by field
pub fn load_preferences() -> SettingsSnapshot {
    let defaults = SettingsSnapshot::default();
    SettingsSnapshot {
        dark_mode: read(KEY_DARK_MODE)
            .map(|v| v == "true")
            .unwrap_or(defaults.dark_mode),
        opacity: read(KEY_OPACITY)
            .and_then(|v| v.parse::<f64>().ok())
            .map(|v| v.clamp(0.0, 1.0))
            .unwrap_or(defaults.opacity),
        free_drag: read(KEY_FREE_DRAG)
            .map(|v| v == "true")
            .unwrap_or(defaults.free_drag),
        notification_position: read(KEY_NOTIFICATION_POSITION)
            .and_then(|v| ScreenCorner::from_storage_value(&v))
            .unwrap_or(defaults.notification_position),
    }
}

pub fn save_dark_mode(enabled: bool) {
    write(KEY_DARK_MODE, if enabled { "true" } else { "false" });
}

pub fn save_opacity(fraction: f64) {
    write(KEY_OPACITY, &fraction.to_string());
}

pub fn save_free_drag(enabled: bool) {
    write(KEY_FREE_DRAG, if enabled { "true" } else { "false" });
}

pub fn save_notification_position(corner: ScreenCorner) {
    write(KEY_NOTIFICATION_POSITION, corner.storage_value());
}

/// Persist every preference at once (settings save)
pub fn save_preferences(snapshot: &SettingsSnapshot) {
    save_dark_mode(snapshot.dark_mode);
    save_opacity(snapshot.opacity);
    save_free_drag(snapshot.free_drag);
    save_notification_position(snapshot.notification_position);
}
