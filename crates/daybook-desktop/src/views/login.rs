//! Login and sign-up screens

use std::sync::Arc;

use dioxus::prelude::*;

use crate::services::DiaryService;
use crate::state::{AppState, Screen};

/// Sign-in screen with the dark-mode switch.
#[component]
pub fn LoginView() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let form = (state.login_form)();

    let theme_emoji = if (state.theme)().is_dark() { "🌙" } else { "☀️" };
    let is_error = form.login_error().is_some();
    let error_text = form.login_error().unwrap_or_default().to_string();
    let input_style = field_style(colors);

    rsx! {
        div {
            style: "
                flex: 1;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 16px;
                padding: 24px;
            ",

            div {
                style: "align-self: flex-end; display: flex; align-items: center; gap: 6px;",
                span { "{theme_emoji}" }
                button {
                    style: "
                        border: 1px solid {colors.border};
                        border-radius: 6px;
                        background: {colors.surface};
                        color: {colors.text_primary};
                        padding: 4px 10px;
                        font-size: 12px;
                        cursor: pointer;
                    ",
                    onclick: move |_| state.toggle_dark_mode(),
                    "Toggle theme"
                }
            }

            h1 {
                style: "margin: 0; font-size: 30px; color: {colors.text_primary};",
                "Daybook"
            }

            if is_error {
                p {
                    style: "margin: 0; color: {colors.error}; text-align: center;",
                    "{error_text}"
                }
            }

            input {
                r#type: "email",
                placeholder: "Email",
                value: "{form.email}",
                style: "{input_style}",
                oninput: move |evt| state.login_form.write().set_email(evt.value()),
            }

            input {
                r#type: "password",
                placeholder: "Password",
                value: "{form.password}",
                style: "{input_style}",
                oninput: move |evt| state.login_form.write().set_password(evt.value()),
            }

            button {
                style: "
                    width: 100%;
                    max-width: 360px;
                    padding: 12px;
                    border: none;
                    border-radius: 6px;
                    background: {colors.accent};
                    color: {colors.accent_text};
                    font-size: 14px;
                    cursor: pointer;
                ",
                onclick: move |_| submit_sign_in(&state),
                "CONTINUE"
            }

            div {
                style: "display: flex; align-items: center; gap: 6px;",
                span {
                    style: "font-size: 13px; color: {colors.text_secondary};",
                    "Don't have an account?"
                }
                button {
                    style: "
                        border: none;
                        background: transparent;
                        color: {colors.text_primary};
                        font-size: 13px;
                        cursor: pointer;
                    ",
                    onclick: move |_| state.screen.set(Screen::SignUp),
                    "Sign Up"
                }
            }

            if form.is_loading() {
                p {
                    style: "margin: 0; color: {colors.text_muted};",
                    "Signing in…"
                }
            }
        }
    }
}

/// Account creation screen.
#[component]
pub fn SignUpView() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let form = (state.login_form)();

    let is_error = form.signup_error().is_some();
    let error_text = form.signup_error().unwrap_or_default().to_string();
    let input_style = field_style(colors);

    rsx! {
        div {
            style: "
                flex: 1;
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 16px;
                padding: 24px;
            ",

            h1 {
                style: "margin: 0; font-size: 26px; color: {colors.text_primary};",
                "Sign Up"
            }

            if is_error {
                p {
                    style: "margin: 0; color: {colors.error}; text-align: center;",
                    "{error_text}"
                }
            }

            input {
                r#type: "email",
                placeholder: "Email",
                value: "{form.signup_email}",
                style: "{input_style}",
                oninput: move |evt| state.login_form.write().set_signup_email(evt.value()),
            }

            input {
                r#type: "password",
                placeholder: "Password",
                value: "{form.signup_password}",
                style: "{input_style}",
                oninput: move |evt| state.login_form.write().set_signup_password(evt.value()),
            }

            input {
                r#type: "password",
                placeholder: "Confirm Password",
                value: "{form.signup_confirm}",
                style: "{input_style}",
                oninput: move |evt| state.login_form.write().set_signup_confirm(evt.value()),
            }

            button {
                style: "
                    width: 100%;
                    max-width: 360px;
                    padding: 12px;
                    border: none;
                    border-radius: 6px;
                    background: {colors.accent};
                    color: {colors.accent_text};
                    font-size: 14px;
                    cursor: pointer;
                ",
                onclick: move |_| submit_sign_up(&state),
                "Sign Up"
            }

            div {
                style: "display: flex; align-items: center; gap: 6px;",
                span {
                    style: "font-size: 13px; color: {colors.text_secondary};",
                    "Already have an account?"
                }
                button {
                    style: "
                        border: none;
                        background: transparent;
                        color: {colors.text_primary};
                        font-size: 13px;
                        cursor: pointer;
                    ",
                    onclick: move |_| state.screen.set(Screen::Login),
                    "Sign In"
                }
            }

            if form.is_loading() {
                p {
                    style: "margin: 0; color: {colors.text_muted};",
                    "Creating account…"
                }
            }
        }
    }
}

fn field_style(colors: &crate::theme::ColorPalette) -> String {
    format!(
        "width: 100%;\
         max-width: 360px;\
         padding: 10px 12px;\
         border: 1px solid {};\
         border-radius: 6px;\
         background: {};\
         color: {};\
         font-size: 14px;\
         outline: none;",
        colors.border, colors.surface, colors.text_primary
    )
}

fn submit_sign_in(state: &AppState) {
    let mut form = state.login_form;
    if let Err(message) = form.read().validate_sign_in() {
        form.write().fail_sign_in(message);
        return;
    }
    let Some(auth) = (state.auth_service)() else {
        form.write().fail_sign_in("Cloud auth is not configured");
        return;
    };

    let (email, password) = {
        let current = form.read();
        (current.email.clone(), current.password.clone())
    };
    form.write().begin_submit();

    let project_id = auth.project_id().to_string();
    let mut auth_session = state.auth_session;
    let mut diary_service = state.diary_service;
    let mut screen = state.screen;
    spawn(async move {
        match auth.sign_in(&email, &password).await {
            Ok(session) => match DiaryService::new(&project_id, session.clone()) {
                Ok(store) => {
                    diary_service.set(Some(Arc::new(store)));
                    auth_session.set(Some(session));
                    form.write().finish_submit();
                    screen.set(Screen::Home);
                }
                Err(error) => form.write().fail_sign_in(error.to_string()),
            },
            Err(error) => form.write().fail_sign_in(error.to_string()),
        }
    });
}

fn submit_sign_up(state: &AppState) {
    let mut form = state.login_form;
    if let Err(message) = form.read().validate_sign_up() {
        form.write().fail_sign_up(message);
        return;
    }
    let Some(auth) = (state.auth_service)() else {
        form.write().fail_sign_up("Cloud auth is not configured");
        return;
    };

    let (email, password) = {
        let current = form.read();
        (current.signup_email.clone(), current.signup_password.clone())
    };
    form.write().begin_submit();

    let project_id = auth.project_id().to_string();
    let mut auth_session = state.auth_session;
    let mut diary_service = state.diary_service;
    let mut screen = state.screen;
    spawn(async move {
        match auth.sign_up(&email, &password).await {
            Ok(session) => match DiaryService::new(&project_id, session.clone()) {
                Ok(store) => {
                    diary_service.set(Some(Arc::new(store)));
                    auth_session.set(Some(session));
                    form.write().finish_submit();
                    screen.set(Screen::Home);
                }
                Err(error) => form.write().fail_sign_up(error.to_string()),
            },
            Err(error) => form.write().fail_sign_up(error.to_string()),
        }
    });
}
