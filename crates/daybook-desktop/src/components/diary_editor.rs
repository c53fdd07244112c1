//! Diary editor dialog

use dioxus::prelude::*;

use daybook_core::Diary;

use crate::state::AppState;

/// Modal editor for a new or existing diary.
///
/// Renders nothing while no draft is armed. Saving clears the draft and
/// hands the edited diary to the parent; the backdrop and Cancel discard it.
#[component]
pub fn DiaryEditorDialog(editing: Signal<Option<Diary>>, on_save: EventHandler<Diary>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let Some(draft) = editing() else {
        return rsx! {};
    };
    let title = draft.title.clone();
    let description = draft.description.clone();

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
            onclick: move |_| editing.set(None),

            div {
                style: "
                    background: {colors.surface};
                    border: 1px solid {colors.border};
                    border-radius: 8px;
                    padding: 20px;
                    width: 360px;
                    display: flex;
                    flex-direction: column;
                    gap: 10px;
                ",
                onclick: move |evt| evt.stop_propagation(),

                p {
                    style: "margin: 0; font-size: 16px; font-weight: 600; color: {colors.text_primary};",
                    "Diary"
                }

                input {
                    placeholder: "Title",
                    value: "{title}",
                    style: "
                        padding: 8px 10px;
                        border: 1px solid {colors.border};
                        border-radius: 6px;
                        background: {colors.bg_primary};
                        color: {colors.text_primary};
                    ",
                    oninput: move |evt| {
                        if let Some(draft) = editing.write().as_mut() {
                            draft.title = evt.value();
                        }
                    },
                }

                textarea {
                    placeholder: "Description",
                    value: "{description}",
                    rows: "4",
                    style: "
                        padding: 8px 10px;
                        border: 1px solid {colors.border};
                        border-radius: 6px;
                        background: {colors.bg_primary};
                        color: {colors.text_primary};
                        resize: vertical;
                    ",
                    oninput: move |evt| {
                        if let Some(draft) = editing.write().as_mut() {
                            draft.description = evt.value();
                        }
                    },
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
                        onclick: move |_| editing.set(None),
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
                        onclick: move |_| {
                            if let Some(diary) = editing() {
                                editing.set(None);
                                on_save.call(diary);
                            }
                        },
                        "Save"
                    }
                }
            }
        }
    }
}
