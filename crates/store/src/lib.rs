//! In-memory landing page collection.
//!
//! The application keeps every landing page for the lifetime of the
//! process. This crate owns that collection: ordered listing, sequential
//! id assignment, replace-in-place saves, and deletion.

pub mod seed;

use veranda_core::page::LandingPage;

/// Outcome of a [`PageStore::save`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The page was new: it received a fresh id and was prepended.
    Created,
    /// An existing page with the same id was replaced in place.
    Replaced,
}

/// The page collection, newest first.
///
/// Ids are `LP` plus a zero-padded sequence number. The counter only
/// moves forward, so an id is never handed out twice even after
/// deletions.
#[derive(Debug)]
pub struct PageStore {
    pages: Vec<LandingPage>,
    next_page_number: u32,
}

impl PageStore {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            next_page_number: 1,
        }
    }

    /// Create a collection from existing pages, continuing the id
    /// sequence past the highest `LP`-numbered id present.
    pub fn with_pages(pages: Vec<LandingPage>) -> Self {
        let next_page_number = pages
            .iter()
            .filter_map(|page| parse_page_number(&page.id))
            .max()
            .map_or(1, |highest| highest + 1);

        Self {
            pages,
            next_page_number,
        }
    }

    /// Create a collection pre-loaded with the demo campaign pages.
    pub fn seeded() -> Self {
        Self::with_pages(seed::demo_pages())
    }

    /// All pages in collection order.
    pub fn list(&self) -> &[LandingPage] {
        &self.pages
    }

    /// Look up a page by id.
    pub fn get(&self, id: &str) -> Option<&LandingPage> {
        self.pages.iter().find(|page| page.id == id)
    }

    /// Number of stored pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Save a page: replace in place when its id matches a stored page,
    /// otherwise assign the next sequential id and prepend.
    ///
    /// On replace the stored save date wins over whatever the incoming
    /// page carries; `created_at` never changes after the first save. A
    /// non-empty id that no longer resolves (the page was deleted while
    /// being edited) falls back to a create. Returns the stored page
    /// alongside the outcome.
    pub fn save(&mut self, mut page: LandingPage) -> (SaveOutcome, LandingPage) {
        if !page.id.is_empty() {
            if let Some(existing) = self.pages.iter_mut().find(|p| p.id == page.id) {
                page.created_at = existing.created_at;
                *existing = page.clone();
                return (SaveOutcome::Replaced, page);
            }
        }

        page.id = self.mint_page_id();
        self.pages.insert(0, page.clone());
        (SaveOutcome::Created, page)
    }

    /// Remove a page by id. Returns `false` when no page had that id.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.pages.len();
        self.pages.retain(|page| page.id != id);
        self.pages.len() < before
    }

    fn mint_page_id(&mut self) -> String {
        let id = format!("LP{:03}", self.next_page_number);
        self.next_page_number += 1;
        id
    }
}

impl Default for PageStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the numeric suffix of an `LP`-prefixed page id.
fn parse_page_number(id: &str) -> Option<u32> {
    id.strip_prefix("LP")?.parse().ok()
}

// ===========================================================================
// Tests
// ===========================================================================
