//! Home view - the diary feed

use dioxus::prelude::*;

use daybook_core::screen::ListScreen;
use daybook_core::{Diary, LoadError, Resource};

use crate::components::{BottomNav, ConfirmDialog, DiaryCard, DiaryEditorDialog, TopBar};
use crate::state::{AppState, Screen};

/// Home screen: the signed-in user's diaries, newest first.
#[component]
pub fn HomeView() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let mut editing = use_signal(|| None::<Diary>);

    // Load the feed as soon as a store client is available
    use_effect(move || load_diaries(&state));

    let home = (state.home)();

    let body = match home.resource() {
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
            let diaries = data.clone();
            let is_empty = diaries.is_empty();
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

                    if is_empty {
                        div {
                            style: "text-align: center; color: {colors.text_muted}; margin-top: 40px;",
                            "No diaries yet. Create your first diary."
                        }
                    }

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
                                state.home.write().request_delete(diary);
                            },
                        }
                    }
                }
            }
        }
    };

    rsx! {
        TopBar {
            title: "Daybook",
            on_sign_out: move |()| {
                if let Some(auth) = (state.auth_service)() {
                    if let Err(error) = auth.sign_out() {
                        tracing::warn!("Sign-out failed: {}", error);
                    }
                }
                state.clear_session();
                state.screen.set(Screen::Login);
            },
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
                onclick: move |_| {
                    if let Some(session) = (state.auth_session)() {
                        editing.set(Some(Diary::new(session.user.id.clone(), "")));
                    }
                },
                "+ New diary"
            }
        }

        {body}

        if home.dialog_visible() {
            ConfirmDialog {
                title: "Delete this Diary?",
                confirm_label: "Delete",
                on_confirm: move |()| {
                    if let Some(diary) = state.home.write().confirm_delete() {
                        let id = diary.id;
                        state.home.write().retain(move |kept| kept.id != id);
                        delete_diary(&state, diary);
                    }
                },
                on_cancel: move |()| state.home.write().dismiss_dialog(),
            }
        }

        DiaryEditorDialog {
            editing,
            on_save: move |diary: Diary| save_diary(&state, diary),
        }

        BottomNav {
            active: Screen::Home,
            on_home: move |()| {},
            on_calendar: move |()| state.screen.set(Screen::Calendar),
        }
    }
}

/// Issue a ticketed feed load against the store client.
fn load_diaries(state: &AppState) {
    let Some(service) = (state.diary_service)() else {
        return;
    };
    let mut home = state.home;
    let ticket = home.write().begin_load();
    spawn(async move {
        let outcome = service.list_diaries().await.map_err(LoadError::from);
        home.write().resolve(ticket, outcome);
    });
}

/// Persist a new or edited diary, then refresh the feed.
fn save_diary(state: &AppState, diary: Diary) {
    let Some(service) = (state.diary_service)() else {
        return;
    };
    let mut home = state.home;
    spawn(async move {
        if let Err(error) = service.upsert_diary(&diary).await {
            tracing::error!("Failed to save diary {}: {}", diary.id, error);
        }
        let ticket = home.write().begin_load();
        let outcome = service.list_diaries().await.map_err(LoadError::from);
        home.write().resolve(ticket, outcome);
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
