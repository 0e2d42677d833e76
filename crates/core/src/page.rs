//! The landing page aggregate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::types::PageId;

/// Publication state of a landing page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageStatus {
    #[default]
    Draft,
    Published,
}

/// A landing page: identity, display metadata, and the ordered block
/// sequence that makes up its content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingPage {
    /// Collection-assigned id, empty for an unsaved draft.
    #[serde(default)]
    pub id: PageId,
    pub title: String,
    pub status: PageStatus,
    /// Content blocks in render order.
    pub content: Vec<Block>,
    /// Set when the page is first saved; never changes afterwards.
    pub created_at: NaiveDate,
}

// ===========================================================================
// Tests
// ===========================================================================
