//! Calendar view - date- and title-filtered diary search

use chrono::{Datelike, NaiveDate};
use dioxus::prelude::*;

use daybook_core::screen::{ListScreen, LoadTicket, PickedDate, SearchBar};
use daybook_core::{Diary, LoadError, Resource};

use crate::components::{BottomNav, ConfirmDialog, DiaryCard, DiaryEditorDialog};
use crate::filters::filter_diaries_by_title;
use crate::state::{AppState, Screen};

/// Calendar screen: filter diaries by picked date or title search.
///
/// Until the first search is issued the body shows an idle hint instead of
/// a spinner; after that the usual loading / success / failure rendering
/// applies.
#[component]
pub fn CalendarView() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let mut editing = use_signal(|| None::<Diary>);
    let mut date_dialog_open = use_signal(|| false);
    let mut date_input = use_signal(String::new);

    let calendar = (state.calendar)();

    let top_bar = match calendar.search.bar {
        SearchBar::Closed => rsx! {
            header {
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 12px 16px;
                    background: {colors.accent};
                    color: {colors.accent_text};
                ",

                span { style: "font-size: 18px; font-weight: 600;", "Calendar" }

                div {
                    style: "display: flex; gap: 8px;",

                    button {
                        style: "
                            border: none;
                            background: transparent;
                            color: {colors.accent_text};
                            font-size: 13px;
                            cursor: pointer;
                        ",
                        onclick: move |_| {
                            let ticket = state.calendar.write().open_search();
                            resolve_title_search(&state, ticket);
                        },
                        "Search"
                    }

                    button {
                        style: "
                            border: none;
                            background: transparent;
                            color: {colors.accent_text};
                            font-size: 13px;
                            cursor: pointer;
                        ",
                        onclick: move |_| date_dialog_open.set(true),
                        "Pick a date"
                    }
                }
            }
        },
        SearchBar::Open => rsx! {
            header {
                style: "
                    display: flex;
                    align-items: center;
                    gap: 8px;
                    padding: 12px 16px;
                    background: {colors.accent};
                ",

                input {
                    r#type: "search",
                    placeholder: "Search diaries by title...",
                    value: "{calendar.query}",
                    style: "
                        flex: 1;
                        padding: 8px 12px;
                        border: 1px solid {colors.border};
                        border-radius: 6px;
                        background: {colors.bg_primary};
                        color: {colors.text_primary};
                        outline: none;
                    ",
                    oninput: move |evt| state.calendar.write().set_query(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            run_title_search(&state);
                        }
                    },
                }

                button {
                    style: "
                        border: none;
                        background: transparent;
                        color: {colors.accent_text};
                        font-size: 13px;
                        cursor: pointer;
                    ",
                    onclick: move |_| run_title_search(&state),
                    "Search"
                }

                button {
                    style: "
                        border: none;
                        background: transparent;
                        color: {colors.accent_text};
                        font-size: 13px;
                        cursor: pointer;
                    ",
                    onclick: move |_| state.calendar.write().close_search(),
                    "Close"
                }
            }
        },
    };

    let body = match calendar.list.resource() {
        Resource::Loading => {
            if calendar.search.shows_idle_hint() {
                rsx! {
                    div {
                        style: "
                            flex: 1;
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            color: {colors.text_muted};
                            text-align: center;
                            padding: 20px;
                        ",
                        "Press a top bar button to search!"
                    }
                }
            } else {
                rsx! {
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
                }
            }
        }
        Resource::Failure { error } => {
            let message = error.display_message().to_string();
            tracing::error!("Calendar load failed: {}", message);
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
                        "No Diaries Found!"
                    }
                }
            } else {
                let diaries = data.clone();
                rsx! {
                    div {
                        style: "
                            flex: 1;
                            overflow-y: auto;
                            padding: 16px;
                            display: flex;
                            flex-direction: column;
                            gap: 12px;
                        ",

                        for diary in diaries {
                            DiaryCard {
                                key: "{diary.id}",
                                diary: diary.clone(),
                                on_open: move |diary: Diary| {
                                    state.open_diary.set(Some(diary));
                                    state.entries.set(ListScreen::new());
                                    state.screen.set(Screen::Entries);
                                },
                                on_edit: move |diary: Diary| editing.set(Some(diary)),
                                on_delete: move |diary: Diary| {
                                    state.calendar.write().list.request_delete(diary);
                                },
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        {top_bar}

        {body}

        if calendar.list.dialog_visible() {
            ConfirmDialog {
                title: "Delete this Diary?",
                confirm_label: "Delete",
                on_confirm: move |()| {
                    if let Some(diary) = state.calendar.write().list.confirm_delete() {
                        let id = diary.id;
                        state.calendar.write().list.retain(move |kept| kept.id != id);
                        delete_diary(&state, diary);
                    }
                },
                on_cancel: move |()| state.calendar.write().list.dismiss_dialog(),
            }
        }

        if date_dialog_open() {
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
                onclick: move |_| date_dialog_open.set(false),

                div {
                    style: "
                        background: {colors.surface};
                        border: 1px solid {colors.border};
                        border-radius: 8px;
                        padding: 20px;
                        min-width: 280px;
                        display: flex;
                        flex-direction: column;
                        gap: 12px;
                    ",
                    onclick: move |evt| evt.stop_propagation(),

                    p {
                        style: "margin: 0; font-size: 15px; font-weight: 600; color: {colors.text_primary};",
                        "Choose a date to get diaries from"
                    }

                    input {
                        r#type: "date",
                        value: "{date_input}",
                        style: "
                            padding: 8px 10px;
                            border: 1px solid {colors.border};
                            border-radius: 6px;
                            background: {colors.bg_primary};
                            color: {colors.text_primary};
                        ",
                        oninput: move |evt| date_input.set(evt.value()),
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
                            onclick: move |_| date_dialog_open.set(false),
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
                                if let Some(picked) = parse_picked_date(&date_input()) {
                                    pick_date(&state, picked);
                                }
                                date_dialog_open.set(false);
                            },
                            "Ok"
                        }
                    }
                }
            }
        }

        DiaryEditorDialog {
            editing,
            on_save: move |diary: Diary| save_diary_and_refresh(&state, diary),
        }

        BottomNav {
            active: Screen::Calendar,
            on_home: move |()| state.screen.set(Screen::Home),
            on_calendar: move |()| {},
        }
    }
}

/// Parse the date input's `YYYY-MM-DD` value.
fn parse_picked_date(value: &str) -> Option<PickedDate> {
    let parsed = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()?;
    Some(PickedDate::new(parsed.year(), parsed.month(), parsed.day()))
}

/// Run the title search against a freshly issued ticket.
fn run_title_search(state: &AppState) {
    let ticket = {
        let mut calendar = state.calendar.write();
        calendar.search.mark_searching();
        calendar.list.begin_load()
    };
    resolve_title_search(state, ticket);
}

/// Fetch the user's diaries and resolve `ticket` with the title-filtered
/// result.
fn resolve_title_search(state: &AppState, ticket: LoadTicket) {
    let Some(service) = (state.diary_service)() else {
        return;
    };
    let mut calendar = state.calendar;
    let query = calendar.read().query.clone();
    spawn(async move {
        let outcome = service
            .list_diaries()
            .await
            .map(|diaries| filter_diaries_by_title(&diaries, &query))
            .map_err(LoadError::from);
        calendar.write().list.resolve(ticket, outcome);
    });
}

/// Load the three-day window around the picked date.
fn pick_date(state: &AppState, picked: PickedDate) {
    let Some(service) = (state.diary_service)() else {
        return;
    };
    let mut calendar = state.calendar;
    let Some((ticket, window)) = calendar.write().begin_range_load(picked) else {
        return;
    };
    spawn(async move {
        let outcome = service
            .list_diaries_in_range(window.start_ms(), window.end_ms())
            .await
            .map_err(LoadError::from);
        calendar.write().list.resolve(ticket, outcome);
    });
}

/// Persist an edited diary, then re-run whichever filter is active.
fn save_diary_and_refresh(state: &AppState, diary: Diary) {
    let Some(service) = (state.diary_service)() else {
        return;
    };
    let state = *state;
    spawn(async move {
        if let Err(error) = service.upsert_diary(&diary).await {
            tracing::error!("Failed to save diary {}: {}", diary.id, error);
        }
        if let Some(picked) = (state.calendar)().picked() {
            pick_date(&state, picked);
        } else {
            run_title_search(&state);
        }
    });
}

/// Fire-and-forget delete; the list was already updated optimistically.
fn delete_diary(state: &AppState, diary: Diary) {
    let Some(service) = (state.diary_service)() else {
        return;
    };
    spawn(async move {
        if let Err(error) = service.delete_diary(&diary.id).await {
            tracing::error!("Failed to delete diary {}: {}", diary.id, error);
        }
    });
}
