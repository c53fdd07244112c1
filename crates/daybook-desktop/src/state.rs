//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::sync::Arc;

use dioxus::prelude::*;

use daybook_core::models::Settings;
use daybook_core::screen::{CalendarScreen, ListScreen, LoginForm};
use daybook_core::{Diary, Entry};

use crate::services::{AuthService, AuthSession, DiaryService, PreferencesService};
use crate::theme::{resolve_theme, ResolvedTheme};

/// Screens reachable from the navigation bars
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    SignUp,
    Home,
    Calendar,
    Entries,
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Screen currently on display
    pub screen: Signal<Screen>,
    /// Auth service if cloud auth is configured
    pub auth_service: Signal<Option<Arc<AuthService>>>,
    /// Active auth session, if signed in
    pub auth_session: Signal<Option<AuthSession>>,
    /// Store client scoped to the active session
    pub diary_service: Signal<Option<Arc<DiaryService>>>,
    /// Settings persistence
    pub preferences: Signal<PreferencesService>,
    /// Application settings
    pub settings: Signal<Settings>,
    /// Resolved theme
    pub theme: Signal<ResolvedTheme>,
    /// Login / sign-up form state
    pub login_form: Signal<LoginForm>,
    /// Home feed state
    pub home: Signal<ListScreen<Diary>>,
    /// Calendar screen state
    pub calendar: Signal<CalendarScreen>,
    /// Entry list state for the open diary
    pub entries: Signal<ListScreen<Entry>>,
    /// Diary whose entries are on display
    pub open_diary: Signal<Option<Diary>>,
}

impl AppState {
    /// Drop the session and every per-session screen state.
    pub fn clear_session(&mut self) {
        self.auth_session.set(None);
        self.diary_service.set(None);
        self.home.set(ListScreen::new());
        self.calendar.set(CalendarScreen::new());
        self.entries.set(ListScreen::new());
        self.open_diary.set(None);
        self.login_form.set(LoginForm::new());
    }

    /// Flip dark mode and persist the preference.
    pub fn toggle_dark_mode(&mut self) {
        let updated = {
            let mut settings = self.settings.write();
            settings.theme = settings.theme.toggled();
            settings.clone()
        };
        self.theme.set(resolve_theme(updated.theme));

        let preferences = (self.preferences)();
        if let Err(error) = preferences.save(&updated) {
            tracing::warn!("Failed to persist settings: {}", error);
        }
    }
}
