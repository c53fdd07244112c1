//! Top bar variants

use dioxus::prelude::*;

use crate::state::AppState;

/// Main top bar with a centered title and an optional sign-out action.
#[component]
pub fn TopBar(title: String, on_sign_out: Option<EventHandler<()>>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        header {
            style: "
                display: flex;
                align-items: center;
                justify-content: space-between;
                padding: 12px 16px;
                background: {colors.accent};
                color: {colors.accent_text};
            ",

            span { style: "font-size: 18px; font-weight: 600;", "{title}" }

            {on_sign_out.map(|handler| rsx! {
                button {
                    style: "
                        border: none;
                        background: transparent;
                        color: {colors.accent_text};
                        font-size: 13px;
                        cursor: pointer;
                    ",
                    onclick: move |_| handler.call(()),
                    "Sign Out"
                }
            })}
        }
    }
}

/// Top bar for nested screens, with a back affordance on the left.
#[component]
pub fn NestedTopBar(title: String, on_back: EventHandler<()>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        header {
            style: "
                display: flex;
                align-items: center;
                gap: 12px;
                padding: 12px 16px;
                background: {colors.accent};
                color: {colors.accent_text};
            ",

            button {
                style: "
                    border: none;
                    background: transparent;
                    color: {colors.accent_text};
                    font-size: 16px;
                    cursor: pointer;
                ",
                onclick: move |_| on_back.call(()),
                "← Back"
            }

            span { style: "font-size: 18px; font-weight: 600;", "{title}" }
        }
    }
}
