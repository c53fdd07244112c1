//! Application screens

mod calendar;
mod entries;
mod home;
mod login;

pub use calendar::CalendarView;
pub use entries::EntriesView;
pub use home::HomeView;
pub use login::{LoginView, SignUpView};
