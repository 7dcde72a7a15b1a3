//! Settings Callbacks
//!
//! Preference changes mirrored to the host on save.

use serde::Serialize;

use super::post_json;
use crate::models::ScreenCorner;

pub async fn dark_mode_changed(dark_mode: bool) {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Args {
        dark_mode: bool,
    }
    post_json("darkModeChanged", &Args { dark_mode }).await;
}

pub async fn opacity_changed(window_opacity: f64) {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Args {
        window_opacity: f64,
    }
    post_json("opacityChanged", &Args { window_opacity }).await;
}

pub async fn free_drag_changed(free_drag: bool) {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Args {
        free_drag: bool,
    }
    post_json("freeDragChanged", &Args { free_drag }).await;
}

pub async fn notification_position_changed(notification_position: ScreenCorner) {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Args {
        notification_position: ScreenCorner,
    }
    post_json(
        "notificationPositionChanged",
        &Args {
            notification_position,
        },
    )
    .await;
}
