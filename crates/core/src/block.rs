//! Landing page content blocks.
//!
//! A landing page body is an ordered sequence of content blocks. Each block
//! is one of a closed set of kinds (hero, gallery, features, contact form)
//! with its own field set. Blocks carry stable ids assigned at creation;
//! the id and kind of a block never change afterwards.

use serde::{Deserialize, Serialize};

use crate::types::BlockId;

// ---------------------------------------------------------------------------
// Block kinds
// ---------------------------------------------------------------------------

/// The closed set of content block kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Hero,
    Gallery,
    Features,
    ContactForm,
}

impl BlockKind {
    /// Every kind, in palette display order.
    pub const ALL: [BlockKind; 4] = [
        BlockKind::Hero,
        BlockKind::Gallery,
        BlockKind::Features,
        BlockKind::ContactForm,
    ];

    /// Wire name of the kind, matching the serialized `type` tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Gallery => "gallery",
            Self::Features => "features",
            Self::ContactForm => "contact_form",
        }
    }

    /// Parse a drag-and-drop payload into a block kind.
    ///
    /// Returns `None` for anything that is not a recognised kind name;
    /// callers treat that as an inert drop.
    pub fn from_payload(payload: &str) -> Option<Self> {
        match payload {
            "hero" => Some(Self::Hero),
            "gallery" => Some(Self::Gallery),
            "features" => Some(Self::Features),
            "contact_form" => Some(Self::ContactForm),
            _ => None,
        }
    }

    /// Label shown on the palette entry.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Hero Section",
            Self::Gallery => "Image Gallery",
            Self::Features => "Feature List",
            Self::ContactForm => "Contact Form",
        }
    }

    /// Icon name shown next to the palette label.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Hero => "square",
            Self::Gallery => "image",
            Self::Features => "list",
            Self::ContactForm => "mail",
        }
    }
}

// ---------------------------------------------------------------------------
// Component palette
// ---------------------------------------------------------------------------

/// One draggable entry in the component palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    pub block_type: BlockKind,
    pub label: &'static str,
    pub icon: &'static str,
}

/// The component palette offered to the editor: one entry per block kind.
pub fn palette() -> Vec<PaletteEntry> {
    BlockKind::ALL
        .iter()
        .map(|&kind| PaletteEntry {
            block_type: kind,
            label: kind.label(),
            icon: kind.icon(),
        })
        .collect()
}

/// Suggested icon names for feature items.
///
/// Advisory only: feature icons are free-form strings and values outside
/// this list are accepted as-is.
pub const FEATURE_ICONS: &[&str] = &["Bed", "Bath", "Area", "Car", "Pool", "Star"];

// ---------------------------------------------------------------------------
// Block bodies
// ---------------------------------------------------------------------------

/// Full-width banner with a headline, supporting text, and call to action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroBlock {
    pub title: String,
    pub subtitle: String,
    pub image_url: String,
    pub button_text: String,
}

/// One image inside a gallery block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: String,
    pub url: String,
    pub alt: String,
}

/// Titled collection of images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryBlock {
    pub title: String,
    pub images: Vec<GalleryImage>,
}

/// One feature line: icon, name, and description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureItem {
    pub id: String,
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Titled list of property features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturesBlock {
    pub title: String,
    pub features: Vec<FeatureItem>,
}

/// Inquiry form with a title and a submit button label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactFormBlock {
    pub title: String,
    pub button_text: String,
}

/// Kind-specific fields of a content block.
///
/// Serialized with an internal `type` tag so the wire format carries the
/// kind name alongside the fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockBody {
    Hero(HeroBlock),
    Gallery(GalleryBlock),
    Features(FeaturesBlock),
    ContactForm(ContactFormBlock),
}

impl BlockBody {
    /// The kind this body belongs to.
    pub fn kind(&self) -> BlockKind {
        match self {
            Self::Hero(_) => BlockKind::Hero,
            Self::Gallery(_) => BlockKind::Gallery,
            Self::Features(_) => BlockKind::Features,
            Self::ContactForm(_) => BlockKind::ContactForm,
        }
    }

    /// The block's own display title. Every kind carries one.
    pub fn title(&self) -> &str {
        match self {
            Self::Hero(hero) => &hero.title,
            Self::Gallery(gallery) => &gallery.title,
            Self::Features(features) => &features.title,
            Self::ContactForm(form) => &form.title,
        }
    }
}

/// A content block: a stable id plus kind-specific fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    #[serde(flatten)]
    pub body: BlockBody,
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        self.body.kind()
    }

    pub fn title(&self) -> &str {
        self.body.title()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -- Kind parsing --

    #[test]
    fn payload_parses_every_kind() {
        for kind in BlockKind::ALL {
            assert_eq!(BlockKind::from_payload(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn unknown_payload_is_rejected() {
        assert_eq!(BlockKind::from_payload("video"), None);
        assert_eq!(BlockKind::from_payload("Hero"), None);
        assert_eq!(BlockKind::from_payload(""), None);
    }

    // -- Palette --

    #[test]
    fn palette_offers_every_kind_once() {
        let entries = palette();
        assert_eq!(entries.len(), BlockKind::ALL.len());

        for (entry, kind) in entries.iter().zip(BlockKind::ALL) {
            assert_eq!(entry.block_type, kind);
            assert!(!entry.label.is_empty());
            assert!(!entry.icon.is_empty());
        }
    }

    #[test]
    fn palette_labels_match_the_editor_sidebar() {
        let labels: Vec<&str> = palette().iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            vec!["Hero Section", "Image Gallery", "Feature List", "Contact Form"]
        );
    }

    // -- Wire format --

    #[test]
    fn hero_block_serializes_with_type_tag() {
        let block = Block {
            id: "h1".into(),
            body: BlockBody::Hero(HeroBlock {
                title: "Sea View Villas".into(),
                subtitle: "Move-in ready".into(),
                image_url: "https://example.com/hero.jpg".into(),
                button_text: "Inquire".into(),
            }),
        };

        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["id"], "h1");
        assert_eq!(json["type"], "hero");
        assert_eq!(json["title"], "Sea View Villas");
        assert_eq!(json["button_text"], "Inquire");
    }

    #[test]
    fn gallery_block_round_trips_through_json() {
        let block = Block {
            id: "g1".into(),
            body: BlockBody::Gallery(GalleryBlock {
                title: "Gallery".into(),
                images: vec![GalleryImage {
                    id: "img1".into(),
                    url: "https://example.com/1.jpg".into(),
                    alt: "Pool".into(),
                }],
            }),
        };

        let json = serde_json::to_string(&block).unwrap();
        let back: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);
    }

    #[test]
    fn unknown_type_tag_fails_to_deserialize() {
        let result: Result<Block, _> =
            serde_json::from_value(serde_json::json!({ "id": "x1", "type": "video" }));
        assert!(result.is_err());
    }
}
