//! Calendar screen state: date picking and the range-filter window.

use chrono::NaiveDate;

use crate::models::Diary;

use super::{ListScreen, LoadTicket, SearchState};

/// A calendar date chosen in the picker, replaced wholesale on each pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickedDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl PickedDate {
    #[must_use]
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

/// Inclusive date range handed to the range-filtered load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Unix-ms lower bound: midnight at the start of the first day.
    #[must_use]
    pub fn start_ms(&self) -> i64 {
        self.start
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis())
            .unwrap_or_default()
    }

    /// Unix-ms upper bound: the last millisecond of the final day.
    #[must_use]
    pub fn end_ms(&self) -> i64 {
        self.end
            .and_hms_milli_opt(23, 59, 59, 999)
            .map(|dt| dt.and_utc().timestamp_millis())
            .unwrap_or_default()
    }
}

/// The 3-day inclusive window centered on a picked day.
///
/// A pick on the first or last day of a month rolls into the neighboring
/// month, the way calendar arithmetic does. `None` for an impossible date
/// or a pick at the representable range's edge.
#[must_use]
pub fn date_window(picked: PickedDate) -> Option<DateWindow> {
    let day = picked.to_naive()?;
    Some(DateWindow {
        start: day.pred_opt()?,
        end: day.succ_opt()?,
    })
}

/// State behind the calendar screen: the filtered diary list plus the
/// search toolbar and the last picked date.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalendarScreen {
    pub list: ListScreen<Diary>,
    pub search: SearchState,
    pub query: String,
    picked: Option<PickedDate>,
}

impl CalendarScreen {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Date the current filter was built from, if any.
    #[must_use]
    pub const fn picked(&self) -> Option<PickedDate> {
        self.picked
    }

    /// Open the search box. The visible result drops back to `Loading`
    /// until the next fetch resolves.
    pub fn open_search(&mut self) -> LoadTicket {
        self.search.open_bar();
        self.list.begin_load()
    }

    /// Restore the regular toolbar.
    pub fn close_search(&mut self) {
        self.search.close_bar();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Record a picked date and start the range-filtered load.
    ///
    /// Returns the ticket and the computed window; `None` for an impossible
    /// calendar date, which leaves the screen untouched.
    pub fn begin_range_load(&mut self, picked: PickedDate) -> Option<(LoadTicket, DateWindow)> {
        let window = date_window(picked)?;
        self.picked = Some(picked);
        self.search.mark_searching();
        let ticket = self.list.begin_load();
        Some((ticket, window))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::error::LoadError;

    use super::*;

    fn naive(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn window_spans_the_day_before_and_after() {
        let window = date_window(PickedDate::new(2024, 3, 15)).unwrap();
        assert_eq!(window.start, naive(2024, 3, 14));
        assert_eq!(window.end, naive(2024, 3, 16));
    }

    #[test]
    fn window_rolls_over_month_and_year_edges() {
        let window = date_window(PickedDate::new(2024, 3, 1)).unwrap();
        assert_eq!(window.start, naive(2024, 2, 29));
        assert_eq!(window.end, naive(2024, 3, 2));

        let window = date_window(PickedDate::new(2023, 12, 31)).unwrap();
        assert_eq!(window.start, naive(2023, 12, 30));
        assert_eq!(window.end, naive(2024, 1, 1));
    }

    #[test]
    fn impossible_dates_produce_no_window() {
        assert_eq!(date_window(PickedDate::new(2023, 2, 30)), None);
        assert_eq!(date_window(PickedDate::new(2024, 13, 1)), None);
    }

    #[test]
    fn window_bounds_cover_three_full_days() {
        let window = date_window(PickedDate::new(2024, 3, 15)).unwrap();
        assert_eq!(window.end_ms() - window.start_ms(), 3 * 86_400_000 - 1);
        assert_eq!(window.start_ms() % 86_400_000, 0);
    }

    #[test]
    fn opening_search_resets_a_displayed_result_to_loading() {
        let mut screen = CalendarScreen::new();
        let ticket = screen.list.begin_load();
        screen
            .list
            .resolve(ticket, Ok(vec![Diary::new("user-1", "Travel log")]));
        assert!(screen.list.resource().is_success());

        screen.open_search();
        assert!(screen.list.resource().is_loading());
        assert!(!screen.search.shows_idle_hint());
    }

    #[test]
    fn picking_a_date_marks_the_searching_phase_and_issues_a_load() {
        let mut screen = CalendarScreen::new();
        assert!(screen.search.shows_idle_hint());

        let (ticket, window) = screen
            .begin_range_load(PickedDate::new(2024, 3, 15))
            .unwrap();
        assert!(screen.list.resource().is_loading());
        assert!(!screen.search.shows_idle_hint());
        assert_eq!(screen.picked(), Some(PickedDate::new(2024, 3, 15)));
        assert_eq!(window.start, naive(2024, 3, 14));

        assert!(screen.list.resolve(ticket, Err(LoadError::new("offline"))));
        assert!(screen.list.resource().is_failure());
    }

    #[test]
    fn an_impossible_pick_leaves_the_screen_untouched() {
        let mut screen = CalendarScreen::new();
        assert!(screen.begin_range_load(PickedDate::new(2023, 2, 30)).is_none());
        assert!(screen.search.shows_idle_hint());
        assert_eq!(screen.picked(), None);
    }
}
