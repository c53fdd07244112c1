//! Diary card component

use dioxus::prelude::*;

use daybook_core::Diary;

use crate::state::AppState;

/// Card for one diary: title, created date, cover image, description.
///
/// Clicking the card opens the diary's entries; the Edit and Delete
/// affordances forward their intents to the parent screen.
#[component]
pub fn DiaryCard(
    diary: Diary,
    on_open: EventHandler<Diary>,
    on_edit: EventHandler<Diary>,
    on_delete: EventHandler<Diary>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let date_label = diary.created_date_label();
    let title = if diary.title.trim().is_empty() {
        "Untitled diary".to_string()
    } else {
        diary.title.clone()
    };
    let open_target = diary.clone();
    let edit_target = diary.clone();
    let delete_target = diary.clone();

    rsx! {
        article {
            style: "
                background: {colors.surface};
                border: 1px solid {colors.border};
                border-radius: 10px;
                overflow: hidden;
                cursor: pointer;
            ",
            onclick: move |_| on_open.call(open_target.clone()),

            div {
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 10px 14px;
                    border-bottom: 2px solid {colors.border};
                ",

                span {
                    style: "font-size: 16px; font-weight: 700; color: {colors.text_primary};",
                    "{title}"
                }

                div {
                    style: "display: flex; align-items: center; gap: 8px;",

                    span {
                        style: "font-size: 12px; color: {colors.text_secondary};",
                        "{date_label}"
                    }

                    button {
                        style: "
                            border: none;
                            background: transparent;
                            color: {colors.text_secondary};
                            font-size: 13px;
                            cursor: pointer;
                        ",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            on_edit.call(edit_target.clone());
                        },
                        "Edit"
                    }

                    button {
                        style: "
                            border: none;
                            background: transparent;
                            color: {colors.error};
                            font-size: 13px;
                            cursor: pointer;
                        ",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            on_delete.call(delete_target.clone());
                        },
                        "Delete"
                    }
                }
            }

            {diary.image_url.as_ref().map(|image_url| rsx! {
                img {
                    src: "{image_url}",
                    style: "width: 100%; height: 180px; object-fit: cover; display: block;",
                }
            })}

            p {
                style: "
                    margin: 0;
                    padding: 10px 14px;
                    font-size: 14px;
                    color: {colors.text_secondary};
                ",
                "{diary.description}"
            }
        }
    }
}
