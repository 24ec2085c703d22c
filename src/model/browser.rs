//! Paging state for the interactive collection browser.
//!
//! A browser is created when a user opens a collection and is owned by the task serving
//! that message. It never touches the ledger: it is built from a snapshot of the
//! collection and then only changes in response to navigation events.

use std::fmt;

use crate::model::{
    collection::Collection, overview::CollectionOverview, rarity::Rarity, toof_pic::ToofPic,
};

/// A page of the browser: the overview, or the pics of one rarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Overview,
    Tier(Rarity),
}

impl Page {
    /// Pages offered in the page select menu, in display order.
    pub fn all() -> Vec<Page> {
        std::iter::once(Page::Overview)
            .chain(Rarity::list().iter().copied().map(Page::Tier))
            .collect()
    }

    /// Parses a select menu value by its first letter, the same way pic ids are parsed.
    /// Unrecognized values map to the `Unknown` tier page.
    pub fn from_value(value: &str) -> Self {
        match value.chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('O') => Page::Overview,
            Some(code) => Page::Tier(Rarity::from_code(code)),
            None => Page::Tier(Rarity::Unknown),
        }
    }

    /// Select menu value for this page.
    pub fn value(self) -> &'static str {
        match self {
            Page::Overview => "overview",
            Page::Tier(rarity) => rarity.name(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::Tier(rarity) => rarity.label(),
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Page::Overview => "🔎",
            Page::Tier(rarity) => rarity.emoji(),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Page::Overview => "Shows an overview of your entire ToofPic collection.",
            Page::Tier(rarity) => rarity.description(),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// What the browser currently shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BrowserView<'a> {
    /// Aggregate statistics for the whole collection.
    Overview(&'a CollectionOverview),
    /// The pic at the current index of a tier page.
    Pic(&'a ToofPic),
    /// A tier page for which the owner has no pics.
    Empty(Rarity),
}

/// Ephemeral `(page, index)` state over a snapshot of one user's collection.
#[derive(Debug, Clone)]
pub struct CollectionBrowser {
    pics: Collection,
    overview: CollectionOverview,
    page: Page,
    index: usize,
    current: Vec<ToofPic>,
}

impl CollectionBrowser {
    /// Opens a browser on the Overview page at index 0.
    ///
    /// # Arguments
    /// - `collection` - Snapshot of the owner's collection
    /// - `catalog` - Full catalog, used for the overview statistics
    pub fn new(collection: Collection, catalog: &[ToofPic]) -> Self {
        let overview = CollectionOverview::new(&collection.pics(), catalog);
        Self {
            pics: collection,
            overview,
            page: Page::Overview,
            index: 0,
            current: Vec::new(),
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn owner_id(&self) -> u64 {
        self.pics.owner_id
    }

    pub fn overview(&self) -> &CollectionOverview {
        &self.overview
    }

    /// Pics on the current page; empty on the Overview page.
    pub fn current_pics(&self) -> &[ToofPic] {
        &self.current
    }

    /// Switches to `page` and resets the index.
    ///
    /// Returns `false` without changing anything if `page` is already selected.
    pub fn select_page(&mut self, page: Page) -> bool {
        if page == self.page {
            return false;
        }

        self.page = page;
        self.index = 0;
        self.current = match page {
            Page::Overview => Vec::new(),
            Page::Tier(rarity) => self.pics.of_rarity(rarity),
        };

        true
    }

    /// Whether previous/next do anything: the current page needs at least two pics.
    pub fn can_navigate(&self) -> bool {
        self.current.len() >= 2
    }

    /// Whether there is something to share: the overview or a pic.
    pub fn can_share(&self) -> bool {
        self.page == Page::Overview || !self.current.is_empty()
    }

    /// Moves to the next pic, wrapping to the first. Returns `false` when disabled.
    pub fn next(&mut self) -> bool {
        if !self.can_navigate() {
            return false;
        }
        self.index = (self.index + 1) % self.current.len();
        true
    }

    /// Moves to the previous pic, wrapping to the last. Returns `false` when disabled.
    pub fn previous(&mut self) -> bool {
        if !self.can_navigate() {
            return false;
        }
        let len = self.current.len();
        self.index = (self.index + len - 1) % len;
        true
    }

    /// What the browser renders in its current state.
    pub fn view(&self) -> BrowserView<'_> {
        match self.page {
            Page::Overview => BrowserView::Overview(&self.overview),
            Page::Tier(rarity) => match self.current.get(self.index) {
                Some(pic) => BrowserView::Pic(pic),
                None => BrowserView::Empty(rarity),
            },
        }
    }

    /// What the Share button posts publicly, if anything. Does not change state.
    pub fn share(&self) -> Option<BrowserView<'_>> {
        match self.view() {
            BrowserView::Empty(_) => None,
            view => Some(view),
        }
    }
}
