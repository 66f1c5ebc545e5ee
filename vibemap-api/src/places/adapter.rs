//! Provider-to-model mapping
//!
//! Converts raw provider venues into validated drafts. Malformed records
//! (blank id or name, missing coordinates) are rejected here so they
//! never reach the scoring core; recoverable gaps are coerced instead.

use super::types::{RawCategory, RawVenue};
use chrono::DateTime;
use vibemap_common::error::{Error, Result};
use vibemap_common::model::{
    HoursPeriod, Photo, PriceTier, ReviewExcerpt, StructuredHours, Venue, VenueDetails, VenueDraft,
};
use vibemap_common::score::{compute_vibe_score, ScorePolicy};

/// Build a validated draft from a raw provider venue
pub fn draft_from_raw(raw: &RawVenue) -> Result<VenueDraft> {
    if raw.id.trim().is_empty() {
        return Err(Error::InvalidInput("provider venue has no id".into()));
    }
    if raw.name.trim().is_empty() {
        return Err(Error::InvalidInput(format!(
            "provider venue {} has no name",
            raw.id
        )));
    }
    let (Some(latitude), Some(longitude)) = (raw.location.lat, raw.location.lng) else {
        return Err(Error::InvalidInput(format!(
            "provider venue {} has no coordinates",
            raw.id
        )));
    };

    let address = formatted_address(raw);
    let neighborhood = neighborhood_for_address(&address);

    let review_count = raw
        .stats
        .as_ref()
        .and_then(|s| s.checkins_count.or(s.users_count))
        .unwrap_or(0)
        .max(0) as u32;

    // Provider tier 2 and missing/unknown tiers both land on "$$"
    let price_level = raw
        .price
        .as_ref()
        .and_then(|p| p.tier)
        .and_then(PriceTier::from_provider_tier)
        .or(Some(PriceTier::Moderate));

    Ok(VenueDraft {
        id: raw.id.clone(),
        name: raw.name.clone(),
        address,
        neighborhood,
        latitude,
        longitude,
        rating: raw.rating.unwrap_or(0.0).max(0.0),
        review_count,
        price_level,
        tags: tags_from_categories(&raw.categories),
        image_url: first_photo_url(raw, "300x300"),
        phone: raw
            .contact
            .as_ref()
            .and_then(|c| c.formatted_phone.clone().or_else(|| c.phone.clone())),
        website: raw.url.clone(),
        opening_hours: raw
            .hours
            .as_ref()
            .and_then(|h| h.status.clone())
            .map(|status| [("General".to_string(), status)].into_iter().collect())
            .unwrap_or_default(),
    })
}

/// Build the detail record for a venue, merging provider extras onto the
/// stored base record
pub fn details_from_raw(raw: &RawVenue, base: Venue) -> VenueDetails {
    let photos: Vec<Photo> = raw
        .photos
        .iter()
        .flat_map(|p| &p.groups)
        .flat_map(|g| &g.items)
        .filter_map(|item| {
            let (prefix, suffix) = (item.prefix.as_ref()?, item.suffix.as_ref()?);
            Some(Photo {
                id: item.id.clone(),
                url: format!("{}original{}", prefix, suffix),
                width: item.width,
                height: item.height,
            })
        })
        .collect();

    let reviews: Vec<ReviewExcerpt> = raw
        .tips
        .iter()
        .flat_map(|t| &t.groups)
        .flat_map(|g| &g.items)
        .filter(|tip| !tip.text.trim().is_empty())
        .map(|tip| ReviewExcerpt {
            text: tip.text.clone(),
            date: tip
                .created_at
                .and_then(|secs| DateTime::from_timestamp(secs, 0))
                .map(|ts| ts.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        })
        .collect();

    let hours = raw.hours.as_ref().map(|h| StructuredHours {
        display: h.status.clone(),
        open_now: h.is_open,
        periods: Vec::<HoursPeriod>::new(),
    });

    let description = raw
        .description
        .clone()
        .or_else(|| Some(synthesized_description(&base)));

    VenueDetails {
        venue: base,
        photos,
        description,
        reviews,
        hours,
    }
}

/// Detail view for a venue when no provider data is available
pub fn synthesized_details(base: Venue) -> VenueDetails {
    let description = synthesized_description(&base);
    VenueDetails {
        venue: base,
        photos: Vec::new(),
        description: Some(description),
        reviews: Vec::new(),
        hours: None,
    }
}

/// Re-score a detail record using its social signals (photo count, review
/// text), for policies that weigh them
pub fn score_with_details(details: &mut VenueDetails, policy: &ScorePolicy) {
    let review_text = details
        .reviews
        .iter()
        .map(|r| r.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let mut inputs = details.venue.score_inputs();
    inputs.photo_count = Some(details.photos.len() as u32);
    inputs.review_text = Some(&review_text);
    details.venue.vibe_score = compute_vibe_score(&inputs, policy);
}

fn synthesized_description(venue: &Venue) -> String {
    format!("Coffee shop in {}, Hamilton", venue.neighborhood)
}

fn formatted_address(raw: &RawVenue) -> String {
    if !raw.location.formatted_address.is_empty() {
        return raw.location.formatted_address.join(", ");
    }
    [
        raw.location.address.as_deref(),
        raw.location.city.as_deref(),
        raw.location.state.as_deref(),
    ]
    .iter()
    .flatten()
    .copied()
    .collect::<Vec<_>>()
    .join(", ")
}

/// Hamilton neighborhood heuristics keyed off address fragments
fn neighborhood_for_address(address: &str) -> String {
    let address = address.to_lowercase();
    let neighborhood = if address.contains("james") || address.contains("downtown") {
        "Downtown"
    } else if address.contains("westdale") {
        "Westdale"
    } else if address.contains("barton") {
        "Barton"
    } else if address.contains("stinson") {
        "Stinson"
    } else if address.contains("locke") {
        "Locke Street"
    } else {
        "Hamilton"
    };
    neighborhood.to_string()
}

/// Category names reduced to tags; every venue gets at least one
fn tags_from_categories(categories: &[RawCategory]) -> Vec<String> {
    let mut tags = Vec::new();
    for category in categories {
        let name = category.name.to_lowercase();
        if name.contains("coffee") {
            tags.push("Coffee".to_string());
        }
        if name.contains("caf") {
            tags.push("Café".to_string());
        }
        if name.contains("espresso") {
            tags.push("Espresso".to_string());
        }
    }
    tags.dedup();
    if tags.is_empty() {
        tags.push("Coffee".to_string());
    }
    tags
}

fn first_photo_url(raw: &RawVenue, size: &str) -> Option<String> {
    let item = raw.photos.as_ref()?.groups.first()?.items.first()?;
    let (prefix, suffix) = (item.prefix.as_ref()?, item.suffix.as_ref()?);
    Some(format!("{}{}{}", prefix, size, suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vibemap_common::score::ScorePolicy;

    fn raw_venue() -> RawVenue {
        serde_json::from_value(json!({
            "id": "fsq-123",
            "name": "James Street Espresso",
            "location": {
                "address": "12 James Street N",
                "city": "Hamilton",
                "state": "ON",
                "lat": 43.2571,
                "lng": -79.8690
            },
            "categories": [{ "name": "Coffee Shop" }, { "name": "Café" }],
            "rating": 8.8,
            "stats": { "checkinsCount": 412, "usersCount": 230 },
            "price": { "tier": 3 },
            "url": "https://jamesstreetespresso.example",
            "contact": { "formattedPhone": "(905) 111-2222" },
            "hours": { "status": "Open until 9:00 PM", "isOpen": true },
            "photos": {
                "count": 2,
                "groups": [{
                    "items": [
                        { "id": "p1", "prefix": "https://img.example/", "suffix": "/a.jpg", "width": 800, "height": 600 },
                        { "id": "p2", "prefix": "https://img.example/", "suffix": "/b.jpg", "width": 800, "height": 600 }
                    ]
                }]
            },
            "tips": {
                "groups": [{
                    "items": [
                        { "text": "Packed on weekends, great vibe", "createdAt": 1717200000 },
                        { "text": "", "createdAt": 1717200000 }
                    ]
                }]
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_draft_from_raw_full_mapping() {
        let draft = draft_from_raw(&raw_venue()).unwrap();
        assert_eq!(draft.id, "fsq-123");
        assert_eq!(draft.name, "James Street Espresso");
        assert_eq!(draft.address, "12 James Street N, Hamilton, ON");
        assert_eq!(draft.neighborhood, "Downtown");
        assert_eq!(draft.latitude, 43.2571);
        assert_eq!(draft.rating, 8.8);
        assert_eq!(draft.review_count, 412);
        assert_eq!(draft.price_level, Some(PriceTier::Upscale));
        assert_eq!(draft.tags, vec!["Coffee", "Café"]);
        assert_eq!(
            draft.image_url.as_deref(),
            Some("https://img.example/300x300/a.jpg")
        );
        assert_eq!(draft.phone.as_deref(), Some("(905) 111-2222"));
        assert_eq!(
            draft.opening_hours.get("General").map(String::as_str),
            Some("Open until 9:00 PM")
        );
    }

    #[test]
    fn test_draft_from_raw_rejects_missing_coordinates() {
        let mut raw = raw_venue();
        raw.location.lat = None;
        assert!(draft_from_raw(&raw).is_err());
    }

    #[test]
    fn test_draft_from_raw_rejects_blank_identity() {
        let mut raw = raw_venue();
        raw.id = "  ".to_string();
        assert!(draft_from_raw(&raw).is_err());

        let mut raw = raw_venue();
        raw.name = String::new();
        assert!(draft_from_raw(&raw).is_err());
    }

    #[test]
    fn test_draft_from_raw_coerces_gaps() {
        let raw: RawVenue = serde_json::from_value(json!({
            "id": "fsq-9",
            "name": "Bare Minimum Beans",
            "location": { "lat": 43.25, "lng": -79.87 }
        }))
        .unwrap();

        let draft = draft_from_raw(&raw).unwrap();
        assert_eq!(draft.rating, 0.0);
        assert_eq!(draft.review_count, 0);
        // Missing tier coerces to the moderate default
        assert_eq!(draft.price_level, Some(PriceTier::Moderate));
        assert_eq!(draft.tags, vec!["Coffee"]);
        assert_eq!(draft.neighborhood, "Hamilton");
        assert!(draft.image_url.is_none());
    }

    #[test]
    fn test_negative_review_count_coerced_to_zero() {
        let raw: RawVenue = serde_json::from_value(json!({
            "id": "fsq-10",
            "name": "Glitch Coffee",
            "location": { "lat": 43.25, "lng": -79.87 },
            "stats": { "checkinsCount": -5 }
        }))
        .unwrap();
        assert_eq!(draft_from_raw(&raw).unwrap().review_count, 0);
    }

    #[test]
    fn test_neighborhood_inference() {
        assert_eq!(neighborhood_for_address("12 James Street N"), "Downtown");
        assert_eq!(neighborhood_for_address("88 Westdale Ave"), "Westdale");
        assert_eq!(neighborhood_for_address("9 Barton St E"), "Barton");
        assert_eq!(neighborhood_for_address("4 Stinson St"), "Stinson");
        assert_eq!(neighborhood_for_address("7 Locke St S"), "Locke Street");
        assert_eq!(neighborhood_for_address("1 Main St W"), "Hamilton");
    }

    #[test]
    fn test_details_from_raw() {
        let policy = ScorePolicy::classic_coffee();
        let base = Venue::from_draft(draft_from_raw(&raw_venue()).unwrap(), &policy).unwrap();
        let details = details_from_raw(&raw_venue(), base);

        assert_eq!(details.photos.len(), 2);
        assert_eq!(details.photos[0].url, "https://img.example/original/a.jpg");
        // Blank tips are dropped
        assert_eq!(details.reviews.len(), 1);
        assert_eq!(details.reviews[0].date, "2024-06-01");
        assert_eq!(details.hours.as_ref().unwrap().open_now, Some(true));
        assert!(details.description.is_some());
    }

    #[test]
    fn test_synthesized_details() {
        let policy = ScorePolicy::classic_coffee();
        let base = Venue::from_draft(draft_from_raw(&raw_venue()).unwrap(), &policy).unwrap();
        let details = synthesized_details(base);

        assert!(details.photos.is_empty());
        assert!(details.reviews.is_empty());
        assert!(details.hours.is_none());
        assert_eq!(
            details.description.as_deref(),
            Some("Coffee shop in Downtown, Hamilton")
        );
    }

    #[test]
    fn test_score_with_details_applies_social_signals() {
        let policy = ScorePolicy::nightlife();
        let base = Venue::from_draft(draft_from_raw(&raw_venue()).unwrap(), &policy).unwrap();
        let before = base.vibe_score;

        let mut details = details_from_raw(&raw_venue(), base);
        score_with_details(&mut details, &policy);
        // "Packed ... great vibe" review text and photos add points
        assert!(details.venue.vibe_score > before);
    }

    #[test]
    fn test_score_with_details_noop_for_classic_policy() {
        let policy = ScorePolicy::classic_coffee();
        let base = Venue::from_draft(draft_from_raw(&raw_venue()).unwrap(), &policy).unwrap();
        let before = base.vibe_score;

        let mut details = details_from_raw(&raw_venue(), base);
        score_with_details(&mut details, &policy);
        assert_eq!(details.venue.vibe_score, before);
    }
}
