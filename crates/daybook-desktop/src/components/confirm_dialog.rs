//! Delete-confirmation dialog overlay

use dioxus::prelude::*;

use crate::state::AppState;

/// Modal confirmation for a destructive action.
///
/// Clicking the backdrop counts as cancel, same as the Cancel button.
#[component]
pub fn ConfirmDialog(
    title: String,
    confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            style: "
                position: fixed;
                inset: 0;
                background: rgba(0, 0, 0, 0.4);
                display: flex;
                align-items: center;
                justify-content: center;
                z-index: 10;
            ",
            onclick: move |_| on_cancel.call(()),

            div {
                style: "
                    background: {colors.surface};
                    color: {colors.text_primary};
                    border: 1px solid {colors.border};
                    border-radius: 8px;
                    padding: 20px;
                    min-width: 280px;
                ",
                onclick: move |evt| evt.stop_propagation(),

                p {
                    style: "margin: 0 0 16px 0; font-size: 16px; font-weight: 600;",
                    "{title}"
                }

                div {
                    style: "display: flex; justify-content: flex-end; gap: 8px;",

                    button {
                        style: "
                            padding: 8px 14px;
                            border: 1px solid {colors.border};
                            border-radius: 6px;
                            background: {colors.surface};
                            color: {colors.text_primary};
                            cursor: pointer;
                        ",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }

                    button {
                        style: "
                            padding: 8px 14px;
                            border: none;
                            border-radius: 6px;
                            background: {colors.accent};
                            color: {colors.accent_text};
                            cursor: pointer;
                        ",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
