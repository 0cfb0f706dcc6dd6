// SPDX-License-Identifier: MPL-2.0
//! Front page state: the fetched edition, the selection, and the scroll lock.
//!
//! Control flow:
//!
//! ```text
//! Loading --finish_fetch(Ok)--> Ready(edition) --select--> modal open, scroll locked
//!    |                                             <--close-- modal closed, unlocked
//!    +--finish_fetch(Err)--> Failed(error) --reload--> Loading
//! ```
//!
//! A failed fetch never exposes a layout; [`EditionState::front_page`] only
//! returns one when the state is `Ready`.

use crate::error::FetchError;
use crate::news::{Edition, FrontPage, NewsId, NewsItem};

/// Outcome of the edition fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(Edition),
    Failed(FetchError),
}

/// Mirrors the article selection onto page scrolling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollLock {
    locked: bool,
}

impl ScrollLock {
    /// Locks when an article is selected, unlocks otherwise.
    ///
    /// Returns `true` when the lock state changed.
    pub fn sync(&mut self, selection_present: bool) -> bool {
        let changed = self.locked != selection_present;
        self.locked = selection_present;
        changed
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

#[derive(Debug)]
pub struct EditionState {
    load: LoadState,
    selected: Option<NewsId>,
    scroll_lock: ScrollLock,
    fetch_in_flight: bool,
    archive_open: bool,
    show_error_details: bool,
}

impl Default for EditionState {
    fn default() -> Self {
        Self {
            load: LoadState::Loading,
            selected: None,
            scroll_lock: ScrollLock::default(),
            fetch_in_flight: false,
            archive_open: false,
            show_error_details: false,
        }
    }
}

impl EditionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters the loading state and reports whether a fetch must be started.
    ///
    /// Returns `false` while a previous fetch is still running, so at most
    /// one request is ever in flight. Any open article is closed and the
    /// previous edition is discarded.
    pub fn begin_fetch(&mut self) -> bool {
        if self.fetch_in_flight {
            return false;
        }
        self.fetch_in_flight = true;
        self.load = LoadState::Loading;
        self.archive_open = false;
        self.show_error_details = false;
        self.close();
        true
    }

    /// Reload is a full refetch from scratch.
    pub fn reload(&mut self) -> bool {
        self.begin_fetch()
    }

    /// Stores the fetch result.
    pub fn finish_fetch(&mut self, result: Result<Vec<NewsItem>, FetchError>) {
        self.fetch_in_flight = false;
        self.load = match result {
            Ok(items) => {
                let edition = Edition::new(items);
                tracing::info!(stories = edition.len(), "edition ready");
                LoadState::Ready(edition)
            }
            Err(error) => {
                tracing::warn!(%error, "edition fetch failed");
                LoadState::Failed(error)
            }
        };
    }

    /// Opens `id` in the modal. Ignored unless it belongs to the current edition.
    pub fn select(&mut self, id: &NewsId) -> bool {
        let known = self.edition().is_some_and(|edition| edition.contains(id));
        if known {
            self.selected = Some(id.clone());
            self.scroll_lock.sync(true);
        }
        known
    }

    /// Clears the selection and unlocks scrolling.
    pub fn close(&mut self) {
        self.selected = None;
        self.scroll_lock.sync(false);
    }

    /// The article shown in the modal, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&NewsItem> {
        let id = self.selected.as_ref()?;
        self.edition()?.get(id)
    }

    #[must_use]
    pub fn edition(&self) -> Option<&Edition> {
        match &self.load {
            LoadState::Ready(edition) => Some(edition),
            LoadState::Loading | LoadState::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn front_page(&self) -> Option<FrontPage<'_>> {
        self.edition().map(Edition::front_page)
    }

    #[must_use]
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    #[must_use]
    pub fn error(&self) -> Option<&FetchError> {
        match &self.load {
            LoadState::Failed(error) => Some(error),
            LoadState::Loading | LoadState::Ready(_) => None,
        }
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }

    pub fn toggle_archive(&mut self) {
        self.archive_open = !self.archive_open;
    }

    #[must_use]
    pub fn archive_open(&self) -> bool {
        self.archive_open
    }

    pub fn toggle_error_details(&mut self) {
        self.show_error_details = !self.show_error_details;
    }

    #[must_use]
    pub fn error_details_visible(&self) -> bool {
        self.show_error_details
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::test_support::{item, items};

    fn ready(count: usize) -> EditionState {
        let mut state = EditionState::new();
        assert!(state.begin_fetch());
        state.finish_fetch(Ok(items(count)));
        state
    }

    #[test]
    fn starts_loading_without_layout() {
        let state = EditionState::new();
        assert!(state.is_loading());
        assert!(state.front_page().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn only_one_fetch_in_flight() {
        let mut state = EditionState::new();
        assert!(state.begin_fetch());
        assert!(!state.begin_fetch());
        state.finish_fetch(Ok(items(2)));
        assert!(state.begin_fetch());
    }

    #[test]
    fn success_exposes_partitioned_layout() {
        let state = ready(10);
        let page = state.front_page().unwrap();
        assert_eq!(page.hero().unwrap().id, item(0).id);
        assert_eq!(page.side().len(), 3);
        assert_eq!(page.daily_strip().len(), 4);
        assert_eq!(page.archive().len(), 2);
    }

    #[test]
    fn failure_suppresses_layout() {
        let mut state = EditionState::new();
        state.begin_fetch();
        state.finish_fetch(Err(FetchError::AllSourcesFailed));

        assert!(!state.is_loading());
        assert!(state.front_page().is_none());
        assert_eq!(state.error(), Some(&FetchError::AllSourcesFailed));
    }

    #[test]
    fn selection_drives_scroll_lock() {
        let mut state = ready(5);
        let target = item(2).id;

        assert!(state.select(&target));
        assert_eq!(state.selected().map(|i| &i.id), Some(&target));
        assert!(state.is_scroll_locked());

        state.close();
        assert!(state.selected().is_none());
        assert!(!state.is_scroll_locked());
    }

    #[test]
    fn selecting_another_story_keeps_lock() {
        let mut state = ready(5);
        state.select(&item(1).id);
        state.select(&item(4).id);
        assert_eq!(state.selected().unwrap().title, "Story 4");
        assert!(state.is_scroll_locked());
    }

    #[test]
    fn unknown_selection_is_ignored() {
        let mut state = ready(3);
        assert!(!state.select(&item(7).id));
        assert!(state.selected().is_none());
        assert!(!state.is_scroll_locked());
    }

    #[test]
    fn selection_is_ignored_while_loading() {
        let mut state = EditionState::new();
        state.begin_fetch();
        assert!(!state.select(&item(0).id));
    }

    #[test]
    fn reload_clears_selection_and_unlocks() {
        let mut state = ready(6);
        state.select(&item(0).id);
        state.toggle_archive();

        assert!(state.reload());
        assert!(state.is_loading());
        assert!(state.selected().is_none());
        assert!(!state.is_scroll_locked());
        assert!(!state.archive_open());
    }

    #[test]
    fn scroll_lock_reports_changes() {
        let mut lock = ScrollLock::default();
        assert!(lock.sync(true));
        assert!(!lock.sync(true));
        assert!(lock.sync(false));
        assert!(!lock.is_locked());
    }

    #[test]
    fn error_details_toggle() {
        let mut state = EditionState::new();
        state.begin_fetch();
        state.finish_fetch(Err(FetchError::Parse("bad xml".into())));
        assert!(!state.error_details_visible());
        state.toggle_error_details();
        assert!(state.error_details_visible());
        state.reload();
        assert!(!state.error_details_visible());
    }
}
