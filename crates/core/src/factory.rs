//! Default block construction.
//!
//! Dropping a palette entry onto the canvas creates a block through this
//! factory. Every kind gets a fully populated default body and a fresh id,
//! so a just-dropped block renders meaningfully before any editing.

use uuid::Uuid;

use crate::block::{
    Block, BlockBody, BlockKind, ContactFormBlock, FeatureItem, FeaturesBlock, GalleryBlock,
    GalleryImage, HeroBlock,
};

/// Build a default-populated block of the given kind with a fresh id.
pub fn new_block(kind: BlockKind) -> Block {
    let body = match kind {
        BlockKind::Hero => BlockBody::Hero(HeroBlock {
            title: "Headline Title".into(),
            subtitle: "Supporting subtitle text.".into(),
            image_url: "https://picsum.photos/seed/hero/1200/600".into(),
            button_text: "Call to Action".into(),
        }),
        BlockKind::Gallery => BlockBody::Gallery(GalleryBlock {
            title: "Image Gallery".into(),
            images: vec![
                GalleryImage {
                    id: item_id("img"),
                    url: "https://picsum.photos/seed/gallery1/800/600".into(),
                    alt: "Placeholder 1".into(),
                },
                GalleryImage {
                    id: item_id("img"),
                    url: "https://picsum.photos/seed/gallery2/800/600".into(),
                    alt: "Placeholder 2".into(),
                },
            ],
        }),
        BlockKind::Features => BlockBody::Features(FeaturesBlock {
            title: "Key Features".into(),
            features: vec![
                FeatureItem {
                    id: item_id("feat"),
                    icon: "Bed".into(),
                    title: "Bedrooms".into(),
                    description: "3".into(),
                },
                FeatureItem {
                    id: item_id("feat"),
                    icon: "Bath".into(),
                    title: "Bathrooms".into(),
                    description: "2".into(),
                },
                FeatureItem {
                    id: item_id("feat"),
                    icon: "Area".into(),
                    title: "Area".into(),
                    description: "250m²".into(),
                },
            ],
        }),
        BlockKind::ContactForm => BlockBody::ContactForm(ContactFormBlock {
            title: "Contact Us".into(),
            button_text: "Submit Inquiry".into(),
        }),
    };

    Block {
        id: item_id("blk"),
        body,
    }
}

/// Default image appended by the gallery editor's "add image" action.
pub fn new_gallery_image() -> GalleryImage {
    GalleryImage {
        id: item_id("img"),
        url: "https://picsum.photos/800/600".into(),
        alt: "New Image".into(),
    }
}

/// Default item appended by the features editor's "add feature" action.
pub fn new_feature_item() -> FeatureItem {
    FeatureItem {
        id: item_id("feat"),
        icon: "Star".into(),
        title: "New Feature".into(),
        description: "Description".into(),
    }
}

/// Generate a prefixed unique id, e.g. `blk_6f2a...`.
fn item_id(prefix: &str) -> String {
    format!("{prefix}_{}", Uuid::new_v4().simple())
}

// ===========================================================================
// Tests
// ===========================================================================
