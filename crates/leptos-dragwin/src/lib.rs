//! Leptos Window Dragging
//!
//! Titlebar dragging for overlay windows using mouse events.
//! Uses a movement threshold to distinguish click from drag, and keeps the
//! drag flag raised for a short grace period after drag-stop so a trailing
//! click does not land on a window that is still settling.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long the drag flag stays raised after the mouse button is released
const DRAG_GRACE_MS: i32 = 100;

/// Per-window drag state signals
#[derive(Clone, Copy)]
pub struct WindowDrag {
    /// Window offset applied while free drag is enabled
    pub offset_x: ReadSignal<i32>,
    offset_x_write: WriteSignal<i32>,
    pub offset_y: ReadSignal<i32>,
    offset_y_write: WriteSignal<i32>,
    /// Raised from drag-start until the post-drag grace period ends
    pub dragging: ReadSignal<bool>,
    dragging_write: WriteSignal<bool>,
    /// Pending press (mousedown but not yet past the threshold)
    pending: ReadSignal<bool>,
    pending_write: WriteSignal<bool>,
    /// Whether the pointer actually moved past the threshold
    moving: ReadSignal<bool>,
    moving_write: WriteSignal<bool>,
    start_x: ReadSignal<i32>,
    start_x_write: WriteSignal<i32>,
    start_y: ReadSignal<i32>,
    start_y_write: WriteSignal<i32>,
    grab_x: ReadSignal<i32>,
    grab_x_write: WriteSignal<i32>,
    grab_y: ReadSignal<i32>,
    grab_y_write: WriteSignal<i32>,
}

pub fn create_window_drag() -> WindowDrag {
    let (offset_x, offset_x_write) = signal(0);
    let (offset_y, offset_y_write) = signal(0);
    let (dragging, dragging_write) = signal(false);
    let (pending, pending_write) = signal(false);
    let (moving, moving_write) = signal(false);
    let (start_x, start_x_write) = signal(0);
    let (start_y, start_y_write) = signal(0);
    let (grab_x, grab_x_write) = signal(0);
    let (grab_y, grab_y_write) = signal(0);
    WindowDrag {
        offset_x,
        offset_x_write,
        offset_y,
        offset_y_write,
        dragging,
        dragging_write,
        pending,
        pending_write,
        moving,
        moving_write,
        start_x,
        start_x_write,
        start_y,
        start_y_write,
        grab_x,
        grab_x_write,
        grab_y,
        grab_y_write,
    }
}

/// Reset the window to its resting position (free drag turned off)
pub fn reset_position(drag: &WindowDrag) {
    drag.offset_x_write.set(0);
    drag.offset_y_write.set(0);
}

/// End a drag. The drag flag stays raised for a grace period so a click
/// released a moment after the drag does not close the window.
fn end_drag(drag: &WindowDrag) {
    drag.pending_write.set(false);
    let was_moving = drag.moving.get_untracked();
    drag.moving_write.set(false);
    if !was_moving {
        drag.dragging_write.set(false);
        return;
    }
    if let Some(win) = web_sys::window() {
        let clear = drag.dragging_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            DRAG_GRACE_MS,
        );
        cb.forget();
    } else {
        drag.dragging_write.set(false);
    }
}

/// Create the titlebar mousedown handler. `enabled` gates the whole
/// mechanism on the free-drag preference.
pub fn make_titlebar_mousedown(
    drag: WindowDrag,
    enabled: Signal<bool>,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || !enabled.get_untracked() {
            return;
        }
        // Ignore presses on titlebar controls
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() {
                return;
            }
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() {
                return;
            }
        }
        drag.pending_write.set(true);
        drag.start_x_write.set(ev.client_x());
        drag.start_y_write.set(ev.client_y());
        drag.grab_x_write.set(drag.offset_x.get_untracked());
        drag.grab_y_write.set(drag.offset_y.get_untracked());
    }
}

/// Bind the document-level mousemove/mouseup pair for one window. Called
/// once per window at mount; the handlers dispatch on current signal state
/// instead of being re-bound per drag.
pub fn bind_window_drag<F>(drag: WindowDrag, on_drag_state: F)
where
    F: Fn(bool) + Copy + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if !drag.pending.get_untracked() {
            return;
        }
        let dx = ev.client_x() - drag.start_x.get_untracked();
        let dy = ev.client_y() - drag.start_y.get_untracked();
        if !drag.moving.get_untracked() {
            if dx.abs() <= DRAG_THRESHOLD_PX && dy.abs() <= DRAG_THRESHOLD_PX {
                return;
            }
            drag.moving_write.set(true);
            drag.dragging_write.set(true);
            on_drag_state(true);
        }
        drag.offset_x_write.set(drag.grab_x.get_untracked() + dx);
        drag.offset_y_write.set(drag.grab_y.get_untracked() + dy);
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        if !drag.pending.get_untracked() {
            return;
        }
        let was_moving = drag.moving.get_untracked();
        end_drag(&drag);
        if was_moving {
            // Mirror the grace period to the caller's guard
            if let Some(win) = web_sys::window() {
                let cb = Closure::<dyn FnMut()>::new(move || {
                    on_drag_state(false);
                });
                let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                    cb.as_ref().unchecked_ref(),
                    DRAG_GRACE_MS,
                );
                cb.forget();
            } else {
                on_drag_state(false);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback(
                "mousemove",
                on_mousemove.as_ref().unchecked_ref(),
            );
            let _ = doc
                .add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
    on_mouseup.forget();
}
