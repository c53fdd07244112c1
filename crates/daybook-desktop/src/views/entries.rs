//! Entries view - the open diary's entry list

use dioxus::prelude::*;

use daybook_core::{Entry, LoadError, Resource};

use crate::components::{ConfirmDialog, EntryCard, NestedTopBar};
use crate::state::{AppState, Screen};

/// Entry list for the diary opened from the home feed or the calendar.
#[component]
pub fn EntriesView() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    // Load whenever a different diary is opened
    use_effect(move || load_entries(&state));

    let entries = (state.entries)();
    let diary_title = (state.open_diary)()
        .map(|diary| diary.title)
        .filter(|title| !title.trim().is_empty())
        .unwrap_or_else(|| "Entries".to_string());

    let body = match entries.resource() {
        Resource::Loading => rsx! {
            div {
                style: "
                    flex: 1;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: {colors.text_muted};
                ",
                "Loading…"
            }
        },
        Resource::Failure { error } => {
            let message = error.display_message().to_string();
            rsx! {
                p {
                    style: "padding: 20px; color: {colors.error};",
                    "{message}"
                }
            }
        }
        Resource::Success { data } => {
            if data.is_empty() {
                rsx! {
                    div {
                        style: "
                            flex: 1;
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            color: {colors.text_muted};
                        ",
                        "No entries yet. Add the first one."
                    }
                }
            } else {
                let items = data.clone();
                rsx! {
                    div {
                        style: "
                            flex: 1;
                            overflow-x: auto;
                            padding: 16px;
                            display: flex;
                            gap: 12px;
                            align-items: stretch;
                        ",

                        for entry in items {
                            EntryCard {
                                key: "{entry.id}",
                                entry: entry.clone(),
                                on_delete: move |entry: Entry| {
                                    state.entries.write().request_delete(entry);
                                },
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        NestedTopBar {
            title: "{diary_title}",
            on_back: move |()| state.screen.set(Screen::Home),
        }

        div {
            style: "padding: 12px 16px;",
            button {
                style: "
                    width: 100%;
                    padding: 10px;
                    border: 1px dashed {colors.border};
                    border-radius: 8px;
                    background: {colors.surface};
                    color: {colors.text_primary};
                    font-size: 14px;
                    cursor: pointer;
                ",
                onclick: move |_| create_entry(&state),
                "+ New entry"
            }
        }

        {body}

        if entries.dialog_visible() {
            ConfirmDialog {
                title: "Delete this Entry?",
                confirm_label: "Delete",
                on_confirm: move |()| {
                    if let Some(entry) = state.entries.write().confirm_delete() {
                        let id = entry.id;
                        state.entries.write().retain(move |kept| kept.id != id);
                        delete_entry(&state, entry);
                    }
                },
                on_cancel: move |()| state.entries.write().dismiss_dialog(),
            }
        }
    }
}

/// Issue a ticketed load for the open diary's entries.
fn load_entries(state: &AppState) {
    let Some(diary) = (state.open_diary)() else {
        return;
    };
    let Some(service) = (state.diary_service)() else {
        return;
    };
    let mut entries = state.entries;
    let ticket = entries.write().begin_load();
    spawn(async move {
        let outcome = service
            .list_entries(&diary.id)
            .await
            .map_err(LoadError::from);
        entries.write().resolve(ticket, outcome);
    });
}

/// Persist a fresh entry, then refresh the list.
fn create_entry(state: &AppState) {
    let Some(diary) = (state.open_diary)() else {
        return;
    };
    let Some(service) = (state.diary_service)() else {
        return;
    };
    let mut entries = state.entries;
    let entry = Entry::new(diary.id, "New entry");
    spawn(async move {
        if let Err(error) = service.upsert_entry(&entry).await {
            tracing::error!("Failed to save entry {}: {}", entry.id, error);
        }
        let ticket = entries.write().begin_load();
        let outcome = service
            .list_entries(&entry.diary_id)
            .await
            .map_err(LoadError::from);
        entries.write().resolve(ticket, outcome);
    });
}

/// Fire-and-forget delete; the list was already updated optimistically.
fn delete_entry(state: &AppState, entry: Entry) {
    let Some(service) = (state.diary_service)() else {
        return;
    };
    spawn(async move {
        if let Err(error) = service.delete_entry(&entry.id).await {
            tracing::error!("Failed to delete entry {}: {}", entry.id, error);
        }
    });
}
