//! UI Components
//!
//! Reusable UI components for the desktop application.

mod bottom_nav;
mod confirm_dialog;
mod diary_card;
mod diary_editor;
mod entry_card;
mod top_bar;

pub use bottom_nav::BottomNav;
pub use confirm_dialog::ConfirmDialog;
pub use diary_card::DiaryCard;
pub use diary_editor::DiaryEditorDialog;
pub use entry_card::EntryCard;
pub use top_bar::{NestedTopBar, TopBar};
