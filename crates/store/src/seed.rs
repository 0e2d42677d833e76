//! Demo campaign pages loaded into a fresh collection.

use chrono::NaiveDate;

use veranda_core::block::{
    Block, BlockBody, FeatureItem, FeaturesBlock, GalleryBlock, GalleryImage, HeroBlock,
};
use veranda_core::page::{LandingPage, PageStatus};

/// The three demo campaign pages shown on first run.
pub fn demo_pages() -> Vec<LandingPage> {
    vec![
        LandingPage {
            id: "LP001".into(),
            title: "Riyadh Villa Launch Campaign".into(),
            status: PageStatus::Published,
            content: vec![
                Block {
                    id: "h1".into(),
                    body: BlockBody::Hero(HeroBlock {
                        title: "Luxury Villas in the Heart of Riyadh".into(),
                        subtitle: "Discover your new home".into(),
                        image_url: "https://picsum.photos/seed/lp1-hero/1200/600".into(),
                        button_text: "Inquire Now".into(),
                    }),
                },
                Block {
                    id: "g1".into(),
                    body: BlockBody::Gallery(GalleryBlock {
                        title: "Photo Gallery".into(),
                        images: vec![
                            GalleryImage {
                                id: "img1".into(),
                                url: "https://picsum.photos/seed/lp1-g1/800/600".into(),
                                alt: "Living Room".into(),
                            },
                            GalleryImage {
                                id: "img2".into(),
                                url: "https://picsum.photos/seed/lp1-g2/800/600".into(),
                                alt: "Bedroom".into(),
                            },
                        ],
                    }),
                },
            ],
            created_at: date(2023, 11, 10),
        },
        LandingPage {
            id: "LP002".into(),
            title: "Jeddah Waterfront Open House".into(),
            status: PageStatus::Draft,
            content: vec![Block {
                id: "h2".into(),
                body: BlockBody::Hero(HeroBlock {
                    title: "Jeddah Waterfront Apartments".into(),
                    subtitle: "Breathtaking sea views await.".into(),
                    image_url: "https://picsum.photos/seed/lp2-hero/1200/600".into(),
                    button_text: "Register for Open House".into(),
                }),
            }],
            created_at: date(2023, 11, 15),
        },
        LandingPage {
            id: "LP003".into(),
            title: "NEOM Investment Opportunities".into(),
            status: PageStatus::Published,
            content: vec![
                Block {
                    id: "h3".into(),
                    body: BlockBody::Hero(HeroBlock {
                        title: "Invest in the Future: NEOM".into(),
                        subtitle: "Groundbreaking opportunities in the city of tomorrow.".into(),
                        image_url: "https://picsum.photos/seed/lp3-hero/1200/600".into(),
                        button_text: "Learn More".into(),
                    }),
                },
                Block {
                    id: "f1".into(),
                    body: BlockBody::Features(FeaturesBlock {
                        title: "Key Features".into(),
                        features: vec![
                            FeatureItem {
                                id: "feat1".into(),
                                icon: "Area".into(),
                                title: "Vast Lands".into(),
                                description: "Large plots available for development.".into(),
                            },
                            FeatureItem {
                                id: "feat2".into(),
                                icon: "Tech".into(),
                                title: "Smart City".into(),
                                description: "Integrated with the latest technology.".into(),
                            },
                        ],
                    }),
                },
            ],
            created_at: date(2023, 10, 28),
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid demo date")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_pages_match_the_campaign_fixtures() {
        let pages = demo_pages();
        assert_eq!(pages.len(), 3);

        let neom = &pages[2];
        assert_eq!(neom.id, "LP003");
        assert_eq!(neom.content.len(), 2);

        let BlockBody::Features(features) = &neom.content[1].body else {
            panic!("expected the NEOM features block");
        };
        // "Tech" is not on the suggested icon list; free-form icons stay as-is.
        assert_eq!(features.features[1].icon, "Tech");
    }
}
