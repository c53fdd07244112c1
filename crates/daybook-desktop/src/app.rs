//! Main application component

use std::sync::Arc;

use dioxus::prelude::*;

use daybook_core::models::Settings;
use daybook_core::screen::{CalendarScreen, ListScreen, LoginForm};

use crate::services::{AuthService, DiaryService, PreferencesService};
use crate::state::{AppState, Screen};
use crate::theme::{resolve_theme, ResolvedTheme};
use crate::views::{CalendarView, EntriesView, HomeView, LoginView, SignUpView};

/// Root application component
#[component]
pub fn App() -> Element {
    // State signals
    let mut screen = use_signal(Screen::default);
    let mut auth_service = use_signal(|| None);
    let mut auth_session = use_signal(|| None);
    let mut diary_service = use_signal(|| None);
    let preferences = use_signal(PreferencesService::default);
    let mut settings = use_signal(Settings::default);
    let mut theme = use_signal(ResolvedTheme::default);
    let login_form = use_signal(LoginForm::new);
    let home = use_signal(ListScreen::new);
    let calendar = use_signal(CalendarScreen::new);
    let entries = use_signal(ListScreen::new);
    let open_diary = use_signal(|| None);
    let mut bootstrapped = use_signal(|| false);

    // One-time bootstrap: preferences, auth client, session restore
    use_effect(move || {
        if bootstrapped() {
            return;
        }
        bootstrapped.set(true); // Mark immediately to prevent double init

        let loaded = preferences.peek().load();
        theme.set(resolve_theme(loaded.theme));
        settings.set(loaded);

        match AuthService::new_from_env() {
            Ok(Some(service)) => {
                let service = Arc::new(service);
                auth_service.set(Some(Arc::clone(&service)));

                spawn(async move {
                    match service.restore_session().await {
                        Ok(Some(session)) => {
                            match DiaryService::new(service.project_id(), session.clone()) {
                                Ok(store) => {
                                    diary_service.set(Some(Arc::new(store)));
                                    auth_session.set(Some(session));
                                    screen.set(Screen::Home);
                                }
                                Err(error) => {
                                    tracing::error!("Failed to build store client: {}", error);
                                }
                            }
                        }
                        Ok(None) => {
                            tracing::info!("No persisted session; showing login");
                        }
                        Err(error) => {
                            tracing::warn!("Session restore failed: {}", error);
                        }
                    }
                });
            }
            Ok(None) => {
                tracing::info!("Cloud auth not configured; running signed out");
            }
            Err(error) => {
                tracing::error!("Auth configuration invalid: {}", error);
            }
        }
    });

    // Whenever the session drops, every screen falls back to login
    use_effect(move || {
        let signed_in = auth_session().is_some();
        let current = screen();
        if !signed_in && !matches!(current, Screen::Login | Screen::SignUp) {
            screen.set(Screen::Login);
        }
    });

    use_context_provider(|| AppState {
        screen,
        auth_service,
        auth_session,
        diary_service,
        preferences,
        settings,
        theme,
        login_form,
        home,
        calendar,
        entries,
        open_diary,
    });

    let current_theme = theme();
    let colors = current_theme.palette();
    let theme_attr = if current_theme.is_dark() { "dark" } else { "light" };

    let body = match screen() {
        Screen::Login => rsx! { LoginView {} },
        Screen::SignUp => rsx! { SignUpView {} },
        Screen::Home => rsx! { HomeView {} },
        Screen::Calendar => rsx! { CalendarView {} },
        Screen::Entries => rsx! { EntriesView {} },
    };

    rsx! {
        div {
            class: "app-container",
            "data-theme": "{theme_attr}",
            style: "
                min-height: 100vh;
                display: flex;
                flex-direction: column;
                font-family: Georgia, 'Times New Roman', serif;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",
            {body}
        }
    }
}
