//! Editor session state for the landing page canvas.
//!
//! A session is the working copy of one page while it is being edited:
//! title, status, block sequence, and the currently selected block.
//! Every operation runs synchronously to completion, and the working
//! state is invisible to the page collection until it is finalized.
//!
//! Operations addressed to a block id that is not in the sequence leave
//! the session untouched. The canvas routinely races stale ids (a block
//! removed while its properties panel is open), so those are silently
//! ignored rather than rejected.

use chrono::{NaiveDate, Utc};

use crate::block::{Block, BlockKind};
use crate::edit::{self, BlockEdit};
use crate::error::CoreError;
use crate::factory;
use crate::page::{LandingPage, PageStatus};
use crate::types::{BlockId, PageId};

/// Title given to a page draft that has not been renamed yet.
pub const DEFAULT_PAGE_TITLE: &str = "New Landing Page";

/// Working state of one open page editor.
#[derive(Debug, Clone)]
pub struct EditorSession {
    /// Id of the page being edited, `None` for a brand new draft.
    pub page_id: Option<PageId>,
    /// Original save date when editing an existing page.
    pub created_at: Option<NaiveDate>,
    pub title: String,
    pub status: PageStatus,
    pub content: Vec<Block>,
    /// Id of the block whose properties panel is open, if any.
    pub selected_block_id: Option<BlockId>,
}

impl EditorSession {
    /// Start a session for a brand new draft.
    pub fn new_page() -> Self {
        Self {
            page_id: None,
            created_at: None,
            title: DEFAULT_PAGE_TITLE.to_string(),
            status: PageStatus::Draft,
            content: Vec::new(),
            selected_block_id: None,
        }
    }

    /// Start a session editing an existing page.
    pub fn edit(page: &LandingPage) -> Self {
        Self {
            page_id: Some(page.id.clone()),
            created_at: Some(page.created_at),
            title: page.title.clone(),
            status: page.status,
            content: page.content.clone(),
            selected_block_id: None,
        }
    }

    /// Handle a drop from the component palette.
    ///
    /// A recognised kind payload appends a freshly built default block at
    /// the end of the sequence and selects it; anything else is ignored.
    /// Returns the id of the added block, if one was added.
    pub fn accept_drop(&mut self, payload: &str) -> Option<BlockId> {
        let kind = BlockKind::from_payload(payload)?;
        let block = factory::new_block(kind);
        let id = block.id.clone();

        self.content.push(block);
        self.selected_block_id = Some(id.clone());
        Some(id)
    }

    /// Select a block, or clear the selection with `None`.
    ///
    /// The id is not required to match a block in the sequence; a stale
    /// selection simply resolves to no block.
    pub fn select(&mut self, block_id: Option<BlockId>) {
        self.selected_block_id = block_id;
    }

    /// The currently selected block, if the selection resolves.
    pub fn selected_block(&self) -> Option<&Block> {
        let id = self.selected_block_id.as_deref()?;
        self.content.iter().find(|b| b.id == id)
    }

    /// Replace a block wholesale, matched by the replacement's id.
    ///
    /// The block keeps its position. Changing a block's kind through
    /// replacement is a validation error.
    pub fn apply_update(&mut self, updated: Block) -> Result<(), CoreError> {
        let Some(slot) = self.content.iter_mut().find(|b| b.id == updated.id) else {
            return Ok(());
        };

        if slot.kind() != updated.kind() {
            return Err(CoreError::Validation(format!(
                "Block {} is a {} block and cannot become {}",
                updated.id,
                slot.kind().as_str(),
                updated.kind().as_str()
            )));
        }

        *slot = updated;
        Ok(())
    }

    /// Apply a property edit to the block with the given id.
    pub fn edit_block(&mut self, block_id: &str, edit: &BlockEdit) -> Result<(), CoreError> {
        let Some(pos) = self.content.iter().position(|b| b.id == block_id) else {
            return Ok(());
        };

        self.content[pos] = edit::apply_edit(&self.content[pos], edit)?;
        Ok(())
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub fn set_status(&mut self, status: PageStatus) {
        self.status = status;
    }

    /// Remove a block from the sequence, clearing the selection when the
    /// removed block was selected.
    pub fn remove_block(&mut self, block_id: &str) {
        let Some(pos) = self.content.iter().position(|b| b.id == block_id) else {
            return;
        };

        self.content.remove(pos);
        if self.selected_block_id.as_deref() == Some(block_id) {
            self.selected_block_id = None;
        }
    }

    /// Move a block to a new position, clamping an out-of-range target to
    /// the end of the sequence.
    pub fn move_block(&mut self, block_id: &str, new_index: usize) {
        let Some(from) = self.content.iter().position(|b| b.id == block_id) else {
            return;
        };

        let block = self.content.remove(from);
        let to = new_index.min(self.content.len());
        self.content.insert(to, block);
    }

    /// Produce the page aggregate for saving.
    ///
    /// An existing page keeps its id and original save date; a new draft
    /// gets an empty id (the collection assigns one) and today's date.
    pub fn finalize(&self) -> LandingPage {
        LandingPage {
            id: self.page_id.clone().unwrap_or_default(),
            title: self.title.clone(),
            status: self.status,
            content: self.content.clone(),
            created_at: self.created_at.unwrap_or_else(|| Utc::now().date_naive()),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
