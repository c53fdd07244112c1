//! Bottom navigation bar shared by the home and calendar screens

use dioxus::prelude::*;

use crate::state::{AppState, Screen};

/// Two-tab navigation between the home feed and the calendar.
#[component]
pub fn BottomNav(active: Screen, on_home: EventHandler<()>, on_calendar: EventHandler<()>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let tab_style = |is_active: bool| {
        let weight = if is_active { "600" } else { "400" };
        let color = if is_active {
            colors.accent_text
        } else {
            colors.border
        };
        format!(
            "flex: 1;\
             border: none;\
             background: transparent;\
             color: {color};\
             font-weight: {weight};\
             font-size: 14px;\
             padding: 12px;\
             cursor: pointer;"
        )
    };

    let home_style = tab_style(active == Screen::Home);
    let calendar_style = tab_style(active == Screen::Calendar);

    rsx! {
        nav {
            style: "
                display: flex;
                background: {colors.accent};
                border-top: 1px solid {colors.border};
            ",

            button {
                style: "{home_style}",
                onclick: move |_| on_home.call(()),
                "Home"
            }

            button {
                style: "{calendar_style}",
                onclick: move |_| on_calendar.call(()),
                "Calendar"
            }
        }
    }
}
