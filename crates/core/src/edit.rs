//! Property edits for content blocks.
//!
//! Each block kind accepts a closed set of field edits mirroring the
//! inputs of the properties panel. Applying an edit is a pure
//! transformation: the result is a complete replacement block with the
//! same id and kind.

use serde::{Deserialize, Serialize};

use crate::block::{Block, BlockBody, BlockKind};
use crate::error::CoreError;
use crate::factory;

// ---------------------------------------------------------------------------
// Edit sets
// ---------------------------------------------------------------------------

/// Edits accepted by hero blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum HeroEdit {
    Title { value: String },
    Subtitle { value: String },
    ImageUrl { value: String },
    ButtonText { value: String },
}

/// Edits accepted by gallery blocks.
///
/// Indexed variants address an image by its position in the gallery; an
/// out-of-range index leaves the block unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum GalleryEdit {
    Title { value: String },
    ImageUrl { index: usize, value: String },
    ImageAlt { index: usize, value: String },
    AddImage,
    RemoveImage { index: usize },
}

/// Edits accepted by features blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum FeaturesEdit {
    Title { value: String },
    FeatureIcon { index: usize, value: String },
    FeatureTitle { index: usize, value: String },
    FeatureDescription { index: usize, value: String },
    AddFeature,
    RemoveFeature { index: usize },
}

/// Edits accepted by contact form blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum ContactFormEdit {
    Title { value: String },
    ButtonText { value: String },
}

/// A property edit addressed to one block kind.
///
/// The outer `type` tag names the kind the edit belongs to; applying it
/// to a block of any other kind is a validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockEdit {
    Hero(HeroEdit),
    Gallery(GalleryEdit),
    Features(FeaturesEdit),
    ContactForm(ContactFormEdit),
}

impl BlockEdit {
    /// The block kind this edit addresses.
    pub fn kind(&self) -> BlockKind {
        match self {
            Self::Hero(_) => BlockKind::Hero,
            Self::Gallery(_) => BlockKind::Gallery,
            Self::Features(_) => BlockKind::Features,
            Self::ContactForm(_) => BlockKind::ContactForm,
        }
    }
}

// ---------------------------------------------------------------------------
// Application
// ---------------------------------------------------------------------------

/// Apply a property edit to a block, yielding the replacement block.
///
/// The result always keeps the original id and kind. Addressing a block
/// of a different kind than the edit is a validation error; an
/// out-of-range image or feature index leaves the block unchanged.
pub fn apply_edit(block: &Block, edit: &BlockEdit) -> Result<Block, CoreError> {
    let body = match (&block.body, edit) {
        (BlockBody::Hero(hero), BlockEdit::Hero(edit)) => {
            let mut hero = hero.clone();
            match edit {
                HeroEdit::Title { value } => hero.title = value.clone(),
                HeroEdit::Subtitle { value } => hero.subtitle = value.clone(),
                HeroEdit::ImageUrl { value } => hero.image_url = value.clone(),
                HeroEdit::ButtonText { value } => hero.button_text = value.clone(),
            }
            BlockBody::Hero(hero)
        }
        (BlockBody::Gallery(gallery), BlockEdit::Gallery(edit)) => {
            let mut gallery = gallery.clone();
            match edit {
                GalleryEdit::Title { value } => gallery.title = value.clone(),
                GalleryEdit::ImageUrl { index, value } => {
                    if let Some(image) = gallery.images.get_mut(*index) {
                        image.url = value.clone();
                    }
                }
                GalleryEdit::ImageAlt { index, value } => {
                    if let Some(image) = gallery.images.get_mut(*index) {
                        image.alt = value.clone();
                    }
                }
                GalleryEdit::AddImage => gallery.images.push(factory::new_gallery_image()),
                GalleryEdit::RemoveImage { index } => {
                    if *index < gallery.images.len() {
                        gallery.images.remove(*index);
                    }
                }
            }
            BlockBody::Gallery(gallery)
        }
        (BlockBody::Features(features), BlockEdit::Features(edit)) => {
            let mut features = features.clone();
            match edit {
                FeaturesEdit::Title { value } => features.title = value.clone(),
                FeaturesEdit::FeatureIcon { index, value } => {
                    if let Some(item) = features.features.get_mut(*index) {
                        item.icon = value.clone();
                    }
                }
                FeaturesEdit::FeatureTitle { index, value } => {
                    if let Some(item) = features.features.get_mut(*index) {
                        item.title = value.clone();
                    }
                }
                FeaturesEdit::FeatureDescription { index, value } => {
                    if let Some(item) = features.features.get_mut(*index) {
                        item.description = value.clone();
                    }
                }
                FeaturesEdit::AddFeature => features.features.push(factory::new_feature_item()),
                FeaturesEdit::RemoveFeature { index } => {
                    if *index < features.features.len() {
                        features.features.remove(*index);
                    }
                }
            }
            BlockBody::Features(features)
        }
        (BlockBody::ContactForm(form), BlockEdit::ContactForm(edit)) => {
            let mut form = form.clone();
            match edit {
                ContactFormEdit::Title { value } => form.title = value.clone(),
                ContactFormEdit::ButtonText { value } => form.button_text = value.clone(),
            }
            BlockBody::ContactForm(form)
        }
        (body, edit) => {
            return Err(CoreError::Validation(format!(
                "Cannot apply a {} edit to a {} block",
                edit.kind().as_str(),
                body.kind().as_str()
            )));
        }
    };

    Ok(Block {
        id: block.id.clone(),
        body,
    })
}

// ===========================================================================
// Tests
// ===========================================================================
