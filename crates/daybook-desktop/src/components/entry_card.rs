//! Entry card component

use dioxus::prelude::*;

use daybook_core::Entry;

use crate::state::AppState;

/// Card for one entry: name, date, text, and the mood badge.
#[component]
pub fn EntryCard(entry: Entry, on_delete: EventHandler<Entry>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let date_label = entry.date_label();
    let bucket = entry.mood_bucket();
    let mood_emoji = bucket.emoji();
    let mood_label = bucket.label();
    let name = if entry.name.trim().is_empty() {
        "Untitled entry".to_string()
    } else {
        entry.name.clone()
    };
    let delete_target = entry.clone();

    rsx! {
        article {
            style: "
                flex: 0 0 300px;
                background: {colors.surface};
                border: 1px solid {colors.border};
                border-radius: 10px;
                overflow: hidden;
                display: flex;
                flex-direction: column;
            ",

            {entry.image_url.as_ref().map(|image_url| rsx! {
                img {
                    src: "{image_url}",
                    style: "width: 100%; height: 140px; object-fit: cover; display: block;",
                }
            })}

            div {
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 10px 12px;
                ",

                span {
                    style: "font-size: 15px; font-weight: 700; color: {colors.text_primary};",
                    "{name}"
                }

                span {
                    style: "font-size: 12px; color: {colors.text_secondary};",
                    "{date_label}"
                }
            }

            p {
                style: "
                    margin: 0;
                    padding: 0 12px 10px 12px;
                    font-size: 13px;
                    color: {colors.text_secondary};
                    flex: 1;
                ",
                "{entry.description}"
            }

            div {
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 8px 12px;
                    background: {colors.bg_secondary};
                    border-top: 1px solid {colors.border};
                ",

                span {
                    style: "font-size: 13px; color: {colors.text_primary};",
                    "Mood: {mood_emoji} {mood_label}"
                }

                button {
                    style: "
                        border: none;
                        background: transparent;
                        color: {colors.error};
                        font-size: 13px;
                        cursor: pointer;
                    ",
                    onclick: move |_| on_delete.call(delete_target.clone()),
                    "Delete"
                }
            }
        }
    }
}
