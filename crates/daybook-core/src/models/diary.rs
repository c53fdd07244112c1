//! Diary model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A unique identifier for a diary, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiaryId(Uuid);

impl DiaryId {
    /// Create a new unique diary ID using UUID v7
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

impl Default for DiaryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DiaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DiaryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A diary owned by a signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diary {
    /// Unique identifier
    pub id: DiaryId,
    /// Owner user id from the auth provider
    pub user_id: String,
    /// Title shown on the diary card
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Cover image URL, if one was uploaded
    pub image_url: Option<String>,
    /// Creation timestamp (Unix ms)
    pub created_at: i64,
}

impl Diary {
    /// Create a new diary for the given user
    #[must_use]
    pub fn new(user_id: impl Into<String>, title: impl Into<String>) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            id: DiaryId::new(),
            user_id: user_id.into(),
            title: title.into(),
            description: String::new(),
            image_url: None,
            created_at: now,
        }
    }

    /// Day/month/year label shown beside the title
    #[must_use]
    pub fn created_date_label(&self) -> String {
        format_date_label(self.created_at)
    }
}

/// Format a unix-ms timestamp as the d/m/yyyy card label.
pub(crate) fn format_date_label(timestamp_ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(timestamp_ms)
        .map_or_else(|| "-".to_string(), |dt| dt.format("%-d/%-m/%Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diary_id_unique() {
        let id1 = DiaryId::new();
        let id2 = DiaryId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_diary_id_parse() {
        let id = DiaryId::new();
        let parsed: DiaryId = id.as_str().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_diary_new() {
        let diary = Diary::new("user-1", "Travel log");
        assert_eq!(diary.user_id, "user-1");
        assert_eq!(diary.title, "Travel log");
        assert!(diary.description.is_empty());
        assert!(diary.image_url.is_none());
        assert!(diary.created_at > 0);
    }

    #[test]
    fn test_date_label_without_zero_padding() {
        let timestamp = chrono::NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp_millis();
        assert_eq!(format_date_label(timestamp), "5/3/2024");
    }
}
