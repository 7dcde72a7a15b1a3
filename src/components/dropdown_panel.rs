//! Dropdown Panel Component

use leptos::prelude::*;

use crate::context::UiContext;
use crate::panels::PanelId;
use super::window_frame::WindowFrame;

#[component]
pub fn DropdownPanel() -> impl IntoView {
    let ctx = use_context::<UiContext>().expect("UiContext should be provided");

    let title = Signal::derive(move || ctx.dropdown.get().title.clone());
    let open = Memo::new(move |_| ctx.dropdown.get().list_open);

    view! {
        <WindowFrame id=PanelId::Dropdown title=title on_close=move || ctx.close_ui()>
            <div
                class=move || if open.get() { "dropdown-label open" } else { "dropdown-label" }
                on:click=move |_| ctx.dropdown_toggle_list()
            >
                <span>{move || ctx.dropdown.get().label()}</span>
                <span class="dropdown-caret">"▾"</span>
            </div>
            <div class=move || if open.get() { "dropdown-list open" } else { "dropdown-list" }>
                {move || {
                    let session = ctx.dropdown.get();
                    let selected = session.selected;
                    session
                        .options
                        .iter()
                        .enumerate()
                        .map(|(index, option)| {
                            let class = if selected == Some(index) {
                                "dropdown-item selected"
                            } else {
                                "dropdown-item"
                            };
                            view! {
                                <div class=class on:click=move |_| ctx.dropdown_choose(index)>
                                    {option.clone()}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="button-row">
                <button class="button cancel" on:click=move |_| ctx.close_ui()>
                    "Cancel"
                </button>
                <button class="button submit" on:click=move |_| ctx.submit_dropdown()>
                    "Confirm"
                </button>
            </div>
        </WindowFrame>
    }
}
