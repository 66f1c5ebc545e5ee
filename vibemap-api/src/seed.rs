//! Static seed data
//!
//! Six Hamilton cafés used until live provider data is available, and as
//! the fallback when the provider is unreachable or unconfigured.

use std::collections::BTreeMap;
use vibemap_common::model::{PriceTier, VenueDraft};

fn hours(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(day, span)| (day.to_string(), span.to_string()))
        .collect()
}

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The built-in venue set, unscored
pub fn seed_drafts() -> Vec<VenueDraft> {
    vec![
        VenueDraft {
            id: "cafe-1".to_string(),
            name: "The Grind Coffee Co.".to_string(),
            address: "123 King Street W, Hamilton, ON".to_string(),
            neighborhood: "Downtown Hamilton".to_string(),
            latitude: 43.2557,
            longitude: -79.8711,
            rating: 4.6,
            review_count: 128,
            price_level: Some(PriceTier::Moderate),
            tags: tags(&["Single Origin", "Pour Over", "WiFi"]),
            image_url: Some(
                "https://images.unsplash.com/photo-1554118811-1e0d58224f24?auto=format&fit=crop&w=400&h=300"
                    .to_string(),
            ),
            phone: Some("(905) 123-4567".to_string()),
            website: None,
            opening_hours: hours(&[
                ("Monday", "7:00 AM - 8:00 PM"),
                ("Tuesday", "7:00 AM - 8:00 PM"),
                ("Wednesday", "7:00 AM - 8:00 PM"),
                ("Thursday", "7:00 AM - 8:00 PM"),
                ("Friday", "7:00 AM - 9:00 PM"),
                ("Saturday", "8:00 AM - 9:00 PM"),
                ("Sunday", "8:00 AM - 6:00 PM"),
            ]),
        },
        VenueDraft {
            id: "cafe-2".to_string(),
            name: "Mulberry Coffee House".to_string(),
            address: "456 King Street W, Hamilton, ON".to_string(),
            neighborhood: "Westdale Village".to_string(),
            latitude: 43.2601,
            longitude: -79.9311,
            rating: 4.4,
            review_count: 95,
            price_level: Some(PriceTier::Moderate),
            tags: tags(&["Local Roaster", "Study Friendly", "Quiet"]),
            image_url: Some(
                "https://images.unsplash.com/photo-1501339847302-ac426a4a7cbb?auto=format&fit=crop&w=400&h=300"
                    .to_string(),
            ),
            phone: Some("(905) 234-5678".to_string()),
            website: None,
            opening_hours: hours(&[
                ("Monday", "6:30 AM - 7:00 PM"),
                ("Tuesday", "6:30 AM - 7:00 PM"),
                ("Wednesday", "6:30 AM - 7:00 PM"),
                ("Thursday", "6:30 AM - 7:00 PM"),
                ("Friday", "6:30 AM - 8:00 PM"),
                ("Saturday", "7:00 AM - 8:00 PM"),
                ("Sunday", "7:00 AM - 6:00 PM"),
            ]),
        },
        VenueDraft {
            id: "cafe-3".to_string(),
            name: "Sunrise Specialty Coffee".to_string(),
            address: "789 James Street N, Hamilton, ON".to_string(),
            neighborhood: "James Street North".to_string(),
            latitude: 43.2565,
            longitude: -79.8693,
            rating: 4.8,
            review_count: 203,
            price_level: Some(PriceTier::Upscale),
            tags: tags(&["Artisan Roasted", "Specialty Drinks", "Instagram Worthy"]),
            image_url: Some(
                "https://images.unsplash.com/photo-1559056199-641a0ac8b55e?auto=format&fit=crop&w=400&h=300"
                    .to_string(),
            ),
            phone: Some("(905) 345-6789".to_string()),
            website: None,
            opening_hours: hours(&[
                ("Monday", "7:00 AM - 6:00 PM"),
                ("Tuesday", "7:00 AM - 6:00 PM"),
                ("Wednesday", "7:00 AM - 6:00 PM"),
                ("Thursday", "7:00 AM - 6:00 PM"),
                ("Friday", "7:00 AM - 7:00 PM"),
                ("Saturday", "8:00 AM - 7:00 PM"),
                ("Sunday", "8:00 AM - 5:00 PM"),
            ]),
        },
        VenueDraft {
            id: "cafe-4".to_string(),
            name: "Bean & Brew Collective".to_string(),
            address: "321 Locke Street S, Hamilton, ON".to_string(),
            neighborhood: "Locke Street".to_string(),
            latitude: 43.2523,
            longitude: -79.8794,
            rating: 4.3,
            review_count: 76,
            price_level: Some(PriceTier::Moderate),
            tags: tags(&["Neighborhood Feel", "Outdoor Patio"]),
            image_url: Some(
                "https://images.unsplash.com/photo-1509042239860-f550ce710b93?auto=format&fit=crop&w=400&h=300"
                    .to_string(),
            ),
            phone: Some("(905) 456-7890".to_string()),
            website: None,
            opening_hours: hours(&[
                ("Monday", "7:00 AM - 5:00 PM"),
                ("Tuesday", "7:00 AM - 5:00 PM"),
                ("Wednesday", "7:00 AM - 5:00 PM"),
                ("Thursday", "7:00 AM - 5:00 PM"),
                ("Friday", "7:00 AM - 6:00 PM"),
                ("Saturday", "8:00 AM - 6:00 PM"),
                ("Sunday", "8:00 AM - 4:00 PM"),
            ]),
        },
        VenueDraft {
            id: "cafe-5".to_string(),
            name: "Steam Whistle Café".to_string(),
            address: "654 Barton Street E, Hamilton, ON".to_string(),
            neighborhood: "International Village".to_string(),
            latitude: 43.2489,
            longitude: -79.8653,
            rating: 4.5,
            review_count: 164,
            price_level: Some(PriceTier::Moderate),
            tags: tags(&["Espresso Bar", "Industrial Vibe", "Open Late"]),
            image_url: Some(
                "https://images.unsplash.com/photo-1442512595331-e89e73853f31?auto=format&fit=crop&w=400&h=300"
                    .to_string(),
            ),
            phone: Some("(905) 567-8901".to_string()),
            website: None,
            opening_hours: hours(&[
                ("Monday", "6:00 AM - 10:00 PM"),
                ("Tuesday", "6:00 AM - 10:00 PM"),
                ("Wednesday", "6:00 AM - 10:00 PM"),
                ("Thursday", "6:00 AM - 10:00 PM"),
                ("Friday", "6:00 AM - 11:00 PM"),
                ("Saturday", "7:00 AM - 11:00 PM"),
                ("Sunday", "7:00 AM - 9:00 PM"),
            ]),
        },
        VenueDraft {
            id: "cafe-6".to_string(),
            name: "Retro Roasters".to_string(),
            address: "987 King Street E, Hamilton, ON".to_string(),
            neighborhood: "King Street East".to_string(),
            latitude: 43.2590,
            longitude: -79.8590,
            rating: 4.2,
            review_count: 89,
            price_level: Some(PriceTier::Moderate),
            tags: tags(&["Vintage Vibe", "Board Games", "Comfy Seating"]),
            image_url: Some(
                "https://images.unsplash.com/photo-1521017432531-fbd92d768814?auto=format&fit=crop&w=400&h=300"
                    .to_string(),
            ),
            phone: Some("(905) 678-9012".to_string()),
            website: None,
            opening_hours: hours(&[
                ("Monday", "7:00 AM - 7:00 PM"),
                ("Tuesday", "7:00 AM - 7:00 PM"),
                ("Wednesday", "7:00 AM - 7:00 PM"),
                ("Thursday", "7:00 AM - 7:00 PM"),
                ("Friday", "7:00 AM - 8:00 PM"),
                ("Saturday", "8:00 AM - 8:00 PM"),
                ("Sunday", "8:00 AM - 6:00 PM"),
            ]),
        },
    ]
}
