//! Domain models

mod diary;
mod entry;
mod mood;
mod settings;

pub use diary::{Diary, DiaryId};
pub use entry::{Entry, EntryId, NEUTRAL_MOOD};
pub use mood::MoodBucket;
pub use settings::{Settings, ThemeMode};
