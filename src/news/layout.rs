// SPDX-License-Identifier: MPL-2.0
//! Fixed index partition of an edition into page slots.
//!
//! | Slot          | Indices       |
//! |---------------|---------------|
//! | Hero          | 0             |
//! | Side stories  | 1..=3         |
//! | Daily strip   | 4..=7         |
//! | Archive       | 8..           |
//!
//! Every accessor clamps to the available length, so short editions simply
//! leave later slots empty.

use super::NewsItem;

/// Number of stories in the sidebar after the hero.
pub const SIDE_STORY_COUNT: usize = 3;

/// Number of grid stories shown before the archive.
pub const DAILY_STRIP_COUNT: usize = 4;

const SIDE_START: usize = 1;
const GRID_START: usize = SIDE_START + SIDE_STORY_COUNT;

/// Borrowed view over an edition's items, split into page slots.
#[derive(Debug, Clone, Copy)]
pub struct FrontPage<'a> {
    items: &'a [NewsItem],
}

impl<'a> FrontPage<'a> {
    #[must_use]
    pub fn new(items: &'a [NewsItem]) -> Self {
        Self { items }
    }

    /// The first item, if any.
    #[must_use]
    pub fn hero(&self) -> Option<&'a NewsItem> {
        self.items.first()
    }

    /// Items 1 through 3.
    #[must_use]
    pub fn side(&self) -> &'a [NewsItem] {
        slice(self.items, SIDE_START, GRID_START)
    }

    /// Everything from index 4 on.
    #[must_use]
    pub fn grid(&self) -> &'a [NewsItem] {
        slice(self.items, GRID_START, self.items.len())
    }

    /// The visible part of the grid.
    #[must_use]
    pub fn daily_strip(&self) -> &'a [NewsItem] {
        let grid = self.grid();
        &grid[..grid.len().min(DAILY_STRIP_COUNT)]
    }

    /// Grid stories past the daily strip.
    #[must_use]
    pub fn archive(&self) -> &'a [NewsItem] {
        let grid = self.grid();
        &grid[grid.len().min(DAILY_STRIP_COUNT)..]
    }

    /// The archive section only exists when the grid overflows the strip.
    #[must_use]
    pub fn has_archive(&self) -> bool {
        self.grid().len() > DAILY_STRIP_COUNT
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn slice(items: &[NewsItem], start: usize, end: usize) -> &[NewsItem] {
    let end = end.min(items.len());
    let start = start.min(end);
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::test_support::items;

    fn ids(slice: &[NewsItem]) -> Vec<&str> {
        slice.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn empty_edition_has_no_slots() {
        let page = FrontPage::new(&[]);
        assert!(page.hero().is_none());
        assert!(page.side().is_empty());
        assert!(page.grid().is_empty());
        assert!(!page.has_archive());
    }

    #[test]
    fn single_item_is_hero_only() {
        let all = items(1);
        let page = FrontPage::new(&all);
        assert_eq!(page.hero().map(|i| i.id.as_str()), Some("story-0"));
        assert!(page.side().is_empty());
        assert!(page.grid().is_empty());
    }

    #[test]
    fn partial_sidebar_is_clamped() {
        let all = items(3);
        let page = FrontPage::new(&all);
        assert_eq!(ids(page.side()), ["story-1", "story-2"]);
        assert!(page.grid().is_empty());
    }

    #[test]
    fn full_page_without_archive() {
        let all = items(8);
        let page = FrontPage::new(&all);
        assert_eq!(ids(page.side()), ["story-1", "story-2", "story-3"]);
        assert_eq!(
            ids(page.daily_strip()),
            ["story-4", "story-5", "story-6", "story-7"]
        );
        assert!(page.archive().is_empty());
        assert!(!page.has_archive());
    }

    #[test]
    fn archive_appears_past_eight_items() {
        let all = items(9);
        let page = FrontPage::new(&all);
        assert!(page.has_archive());
        assert_eq!(ids(page.archive()), ["story-8"]);
    }

    #[test]
    fn every_item_lands_in_exactly_one_slot() {
        for n in 0..20 {
            let all = items(n);
            let page = FrontPage::new(&all);
            let placed = usize::from(page.hero().is_some())
                + page.side().len()
                + page.daily_strip().len()
                + page.archive().len();
            assert_eq!(placed, n, "n = {n}");
            assert_eq!(page.grid().len(), n.saturating_sub(GRID_START));
        }
    }

    #[test]
    fn slots_preserve_fetch_order() {
        let all = items(12);
        let page = FrontPage::new(&all);
        let mut flattened: Vec<&str> = page.hero().into_iter().map(|i| i.id.as_str()).collect();
        flattened.extend(ids(page.side()));
        flattened.extend(ids(page.daily_strip()));
        flattened.extend(ids(page.archive()));
        assert_eq!(flattened, ids(&all));
    }
}
