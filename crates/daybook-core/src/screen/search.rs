//! Search toolbar sub-state for the calendar screen.
//!
//! Orthogonal to the main fetch state: it only selects which toolbar and
//! which loading placeholder are rendered, and never blocks a transition
//! of the list itself.

/// Whether the search text box replaces the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchBar {
    #[default]
    Closed,
    Open,
}

/// Which placeholder a loading screen shows: the idle hint before any
/// search was issued, or a spinner once one is underway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Initial,
    Searching,
}

/// Combined toolbar + placeholder state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchState {
    pub bar: SearchBar,
    pub phase: SearchPhase,
}

impl SearchState {
    /// Swap the toolbar for the search box and leave the idle hint behind.
    pub fn open_bar(&mut self) {
        self.bar = SearchBar::Open;
        self.phase = SearchPhase::Searching;
    }

    /// Restore the regular toolbar; the phase is untouched.
    pub fn close_bar(&mut self) {
        self.bar = SearchBar::Closed;
    }

    /// A search was issued through some other control (the date picker).
    pub fn mark_searching(&mut self) {
        self.phase = SearchPhase::Searching;
    }

    /// Back to the idle hint.
    pub fn reset(&mut self) {
        self.phase = SearchPhase::Initial;
    }

    /// Render the idle hint instead of a spinner while the result is still
    /// loading.
    #[must_use]
    pub const fn shows_idle_hint(self) -> bool {
        matches!(self.phase, SearchPhase::Initial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_with_the_idle_hint() {
        let state = SearchState::default();
        assert_eq!(state.bar, SearchBar::Closed);
        assert!(state.shows_idle_hint());
    }

    #[test]
    fn opening_the_bar_switches_to_the_spinner_placeholder() {
        let mut state = SearchState::default();
        state.open_bar();
        assert_eq!(state.bar, SearchBar::Open);
        assert!(!state.shows_idle_hint());
    }

    #[test]
    fn closing_the_bar_keeps_the_phase() {
        let mut state = SearchState::default();
        state.open_bar();
        state.close_bar();
        assert_eq!(state.bar, SearchBar::Closed);
        assert!(!state.shows_idle_hint());

        state.reset();
        assert!(state.shows_idle_hint());
    }
}
