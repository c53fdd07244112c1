//! Generic list screen state: fetch outcome, pending delete, dialog flow.

use crate::error::LoadError;
use crate::resource::Resource;

/// Identifies one issued fetch, so a late response can be told apart from
/// the most recent request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// State behind a list screen.
///
/// Owns the current fetch outcome plus the delete-confirmation flow. All
/// mutations happen on the UI event loop; background work resolves through
/// [`ListScreen::resolve`] with the ticket [`ListScreen::begin_load`]
/// issued for it.
///
/// Invariant: an armed selection exists only while the dialog is visible,
/// and both clear in the same transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListScreen<T> {
    resource: Resource<Vec<T>>,
    selection: Option<T>,
    dialog_visible: bool,
    latest_ticket: u64,
}

impl<T> ListScreen<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            resource: Resource::Loading,
            selection: None,
            dialog_visible: false,
            latest_ticket: 0,
        }
    }

    /// Current fetch outcome
    #[must_use]
    pub const fn resource(&self) -> &Resource<Vec<T>> {
        &self.resource
    }

    /// Item armed for deletion while the confirmation dialog is up
    #[must_use]
    pub fn selection(&self) -> Option<&T> {
        self.selection.as_ref()
    }

    /// Whether the confirmation dialog is showing
    #[must_use]
    pub const fn dialog_visible(&self) -> bool {
        self.dialog_visible
    }

    /// Whether the last fetch succeeded with no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resource.is_empty_success()
    }

    /// Start a new fetch. The screen renders `Loading` until the returned
    /// ticket resolves.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_ticket += 1;
        self.resource = Resource::Loading;
        LoadTicket(self.latest_ticket)
    }

    /// Install a settled fetch outcome.
    ///
    /// Returns `false` (and changes nothing) when a newer load was issued
    /// after this ticket: a slow early response must not overwrite the
    /// result of a faster later one.
    pub fn resolve(&mut self, ticket: LoadTicket, outcome: Result<Vec<T>, LoadError>) -> bool {
        if ticket.0 != self.latest_ticket {
            return false;
        }
        self.resource = match outcome {
            Ok(data) => Resource::Success { data },
            Err(error) => Resource::Failure { error },
        };
        true
    }

    /// Arm the delete-confirmation dialog for `item`.
    ///
    /// Only honored while a successful result is on screen.
    pub fn request_delete(&mut self, item: T) -> bool {
        if !self.resource.is_success() {
            return false;
        }
        self.selection = Some(item);
        self.dialog_visible = true;
        true
    }

    /// Confirm the pending delete.
    ///
    /// Hands the armed item back for the caller to issue the actual delete,
    /// and clears the dialog and the selection in the same transition so a
    /// stale selection can never be acted on.
    pub fn confirm_delete(&mut self) -> Option<T> {
        if !self.dialog_visible {
            return None;
        }
        self.dialog_visible = false;
        self.selection.take()
    }

    /// Dismiss the dialog without acting on the selection.
    pub fn dismiss_dialog(&mut self) {
        self.dialog_visible = false;
        self.selection = None;
    }

    /// Optimistically drop items from a successful result, after a
    /// fire-and-forget delete was issued.
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        if let Resource::Success { data } = &mut self.resource {
            data.retain(keep);
        }
    }
}

impl<T> Default for ListScreen<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn loaded(items: Vec<u32>) -> ListScreen<u32> {
        let mut screen = ListScreen::new();
        let ticket = screen.begin_load();
        assert!(screen.resolve(ticket, Ok(items)));
        screen
    }

    #[test]
    fn starts_loading_with_no_dialog() {
        let screen: ListScreen<u32> = ListScreen::new();
        assert!(screen.resource().is_loading());
        assert!(screen.selection().is_none());
        assert!(!screen.dialog_visible());
    }

    #[test]
    fn resolve_installs_terminal_variants() {
        let mut screen: ListScreen<u32> = ListScreen::new();
        let ticket = screen.begin_load();
        assert!(screen.resolve(ticket, Ok(vec![1])));
        assert_eq!(screen.resource().data(), Some(&vec![1]));

        let ticket = screen.begin_load();
        assert!(screen.resource().is_loading());
        assert!(screen.resolve(ticket, Err(LoadError::new("offline"))));
        assert!(screen.resource().is_failure());
    }

    #[test]
    fn stale_response_does_not_overwrite_newer_request() {
        let mut screen: ListScreen<u32> = ListScreen::new();
        let slow = screen.begin_load();
        let fast = screen.begin_load();

        assert!(screen.resolve(fast, Ok(vec![2])));
        assert!(!screen.resolve(slow, Ok(vec![1])));
        assert_eq!(screen.resource().data(), Some(&vec![2]));

        // The stale failure path is discarded the same way.
        assert!(!screen.resolve(slow, Err(LoadError::new("late timeout"))));
        assert!(screen.resource().is_success());
    }

    #[test]
    fn begin_load_resets_a_settled_result_to_loading() {
        let mut screen = loaded(vec![1, 2]);
        screen.begin_load();
        assert!(screen.resource().is_loading());
    }

    #[test]
    fn empty_success_is_distinguishable_from_loading() {
        let screen = loaded(Vec::new());
        assert!(screen.is_empty());
        assert!(!screen.resource().is_loading());
    }

    #[test]
    fn arming_delete_requires_a_successful_result() {
        let mut screen: ListScreen<u32> = ListScreen::new();
        assert!(!screen.request_delete(1));
        assert!(!screen.dialog_visible());

        let mut screen = loaded(vec![1]);
        assert!(screen.request_delete(1));
        assert!(screen.dialog_visible());
        assert_eq!(screen.selection(), Some(&1));
    }

    #[test]
    fn confirm_returns_the_armed_item_and_clears_both_fields() {
        let mut screen = loaded(vec![1, 2]);
        screen.request_delete(2);

        assert_eq!(screen.confirm_delete(), Some(2));
        assert!(!screen.dialog_visible());
        assert!(screen.selection().is_none());

        // A second confirm has nothing left to act on.
        assert_eq!(screen.confirm_delete(), None);
    }

    #[test]
    fn confirm_without_a_dialog_is_a_no_op() {
        let mut screen = loaded(vec![1]);
        assert_eq!(screen.confirm_delete(), None);
        assert!(screen.selection().is_none());
    }

    #[test]
    fn dismiss_clears_the_selection_with_the_dialog() {
        let mut screen = loaded(vec![1]);
        screen.request_delete(1);
        screen.dismiss_dialog();
        assert!(!screen.dialog_visible());
        assert!(screen.selection().is_none());
    }

    #[test]
    fn retain_drops_items_only_from_success() {
        let mut screen = loaded(vec![1, 2, 3]);
        screen.retain(|item| *item != 2);
        assert_eq!(screen.resource().data(), Some(&vec![1, 3]));

        let mut loading: ListScreen<u32> = ListScreen::new();
        loading.retain(|_| false);
        assert!(loading.resource().is_loading());
    }
}
