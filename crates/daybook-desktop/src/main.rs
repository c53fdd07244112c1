//! Daybook Desktop Application
//!
//! A cross-platform journaling app backed by a cloud document store.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod filters;
mod services;
mod state;
mod theme;
mod views;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("daybook=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Daybook...");

    dioxus::launch(app::App);
}
