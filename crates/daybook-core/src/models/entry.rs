//! Entry model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::diary::{format_date_label, DiaryId};
use super::mood::MoodBucket;

/// A unique identifier for an entry, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Create a new unique entry ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// The neutral midpoint of the 1-7 mood scale.
pub const NEUTRAL_MOOD: u8 = 4;

/// A single dated entry inside a diary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier
    pub id: EntryId,
    /// Diary this entry belongs to
    pub diary_id: DiaryId,
    /// Entry name shown on the card
    pub name: String,
    /// Free-form entry text
    pub description: String,
    /// Attached image URL, if one was uploaded
    pub image_url: Option<String>,
    /// Date the entry is about (Unix ms)
    pub entry_date: i64,
    /// Raw 1-7 mood rating; out-of-scale values render as the neutral bucket
    pub mood: u8,
}

impl Entry {
    /// Create a new entry dated now with a neutral mood
    #[must_use]
    pub fn new(diary_id: DiaryId, name: impl Into<String>) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            id: EntryId::new(),
            diary_id,
            name: name.into(),
            description: String::new(),
            image_url: None,
            entry_date: now,
            mood: NEUTRAL_MOOD,
        }
    }

    /// Display bucket for this entry's mood rating
    #[must_use]
    pub const fn mood_bucket(&self) -> MoodBucket {
        MoodBucket::from_level(self.mood)
    }

    /// Day/month/year label shown beside the name
    #[must_use]
    pub fn date_label(&self) -> String {
        format_date_label(self.entry_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_id_parse() {
        let id = EntryId::new();
        let parsed: EntryId = id.as_str().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_entry_new_defaults_to_neutral_mood() {
        let entry = Entry::new(DiaryId::new(), "First day");
        assert_eq!(entry.mood, NEUTRAL_MOOD);
        assert_eq!(entry.mood_bucket(), MoodBucket::Ok);
        assert!(entry.entry_date > 0);
    }
}
