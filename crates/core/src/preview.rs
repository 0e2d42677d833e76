//! Read-only page projections for list cards and the preview surface.

use chrono::NaiveDate;
use serde::Serialize;

use crate::block::{Block, BlockBody, BlockKind, HeroBlock};
use crate::page::{LandingPage, PageStatus};

/// Display fields of a page's first hero block, used as the card backdrop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroSnippet {
    pub title: String,
    pub subtitle: String,
    pub image_url: String,
}

/// One line per block in the preview's content outline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockSummary {
    pub id: String,
    pub block_type: BlockKind,
    pub title: String,
    pub detail: String,
}

/// Everything the preview surface shows for a page.
#[derive(Debug, Clone, Serialize)]
pub struct PagePreview {
    /// Notification line announced when the preview opens.
    pub message: String,
    pub title: String,
    pub status: PageStatus,
    pub created_at: NaiveDate,
    pub hero: Option<HeroSnippet>,
    pub blocks: Vec<BlockSummary>,
}

/// The first hero block of a page, if it has one.
pub fn first_hero(page: &LandingPage) -> Option<&HeroBlock> {
    page.content.iter().find_map(|block| match &block.body {
        BlockBody::Hero(hero) => Some(hero),
        _ => None,
    })
}

/// Summarize a single block for the content outline.
pub fn block_summary(block: &Block) -> BlockSummary {
    let detail = match &block.body {
        BlockBody::Hero(hero) => hero.subtitle.clone(),
        BlockBody::Gallery(gallery) => format!("{} images", gallery.images.len()),
        BlockBody::Features(features) => format!("{} features", features.features.len()),
        BlockBody::ContactForm(form) => form.button_text.clone(),
    };

    BlockSummary {
        id: block.id.clone(),
        block_type: block.kind(),
        title: block.title().to_string(),
        detail,
    }
}

/// Build the full preview projection for a page.
pub fn page_preview(page: &LandingPage) -> PagePreview {
    PagePreview {
        message: format!("Previewing: {}", page.title),
        title: page.title.clone(),
        status: page.status,
        created_at: page.created_at,
        hero: first_hero(page).map(|hero| HeroSnippet {
            title: hero.title.clone(),
            subtitle: hero.subtitle.clone(),
            image_url: hero.image_url.clone(),
        }),
        blocks: page.content.iter().map(block_summary).collect(),
    }
}

// ===========================================================================
// Tests
// ===========================================================================
