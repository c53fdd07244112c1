//! Diary list filtering helpers for the calendar search box.

use daybook_core::Diary;

/// Filter diaries by case-insensitive title match.
///
/// An empty or whitespace-only query keeps everything.
#[must_use]
pub fn filter_diaries_by_title(diaries: &[Diary], query: &str) -> Vec<Diary> {
    let normalized = query.trim().to_lowercase();
    if normalized.is_empty() {
        return diaries.to_vec();
    }

    diaries
        .iter()
        .filter(|diary| diary.title.to_lowercase().contains(&normalized))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diaries() -> Vec<Diary> {
        vec![
            Diary::new("user-1", "Travel log"),
            Diary::new("user-1", "Garden notes"),
            Diary::new("user-1", "Night travels"),
        ]
    }

    #[test]
    fn matches_titles_case_insensitively() {
        let filtered = filter_diaries_by_title(&diaries(), "TRAVEL");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|diary| diary
            .title
            .to_lowercase()
            .contains("travel")));
    }

    #[test]
    fn blank_query_keeps_everything() {
        assert_eq!(filter_diaries_by_title(&diaries(), "   ").len(), 3);
    }

    #[test]
    fn unmatched_query_yields_an_empty_list() {
        assert!(filter_diaries_by_title(&diaries(), "recipes").is_empty());
    }
}
