//! List Panel Component
//!
//! Renders the current menu frame. Disabled items get no click binding;
//! submenu and back items auto-confirm through the state machine.

use leptos::prelude::*;

use crate::context::UiContext;
use crate::models::ListItem;
use crate::panels::PanelId;
use super::window_frame::WindowFrame;

fn item_view(ctx: UiContext, index: usize, item: ListItem) -> impl IntoView {
    let selected = Memo::new(move |_| {
        ctx.menu
            .get()
            .selected()
            .map(|s| s.index == index)
            .unwrap_or(false)
    });
    let icon = item.icon.clone();
    let label = item.label.clone();
    let description = item.description.clone();
    let has_submenu = item.submenu;
    let disabled = item.disabled;
    let class = move || {
        let mut class = String::from("list-item");
        if disabled {
            class.push_str(" disabled");
        }
        if selected.get() {
            class.push_str(" selected");
        }
        class
    };

    let body = view! {
        <div class=class>
            <div class="list-item-content">
                {icon.map(|icon| view! { <div class="list-item-icon">{icon}</div> })}
                <span>{label}</span>
                {has_submenu.then(|| view! { <div class="submenu-arrow">"›"</div> })}
            </div>
            {description.map(|desc| view! { <div class="list-item-desc">{desc}</div> })}
        </div>
    };

    if disabled {
        body.into_any()
    } else {
        view! { <div class="list-item-hit" on:click=move |_| ctx.list_click(index)>{body}</div> }
            .into_any()
    }
}

#[component]
pub fn ListPanel() -> impl IntoView {
    let ctx = use_context::<UiContext>().expect("UiContext should be provided");

    let title = Signal::derive(move || ctx.menu.get().title().to_string());

    view! {
        <WindowFrame id=PanelId::List title=title on_close=move || ctx.close_ui()>
            <div class="list-items">
                {move || {
                    let items = ctx.menu.get().items().to_vec();
                    let last = items.len().saturating_sub(1);
                    items
                        .into_iter()
                        .enumerate()
                        .map(|(index, item)| {
                            view! {
                                {item_view(ctx, index, item)}
                                {(index < last)
                                    .then(|| view! { <div class="list-divider"></div> })}
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="button-row">
                <button class="button cancel" on:click=move |_| ctx.close_ui()>
                    "Cancel"
                </button>
                <button class="button submit" on:click=move |_| ctx.confirm_list_selection()>
                    "Select"
                </button>
            </div>
        </WindowFrame>
    }
}
