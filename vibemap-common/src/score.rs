//! Vibe score engine
//!
//! Maps a venue's raw signals to a single bounded 0-100 score via a
//! weighted additive model with per-component caps and a final clamp.
//! Every weight, vocabulary, and bonus lives in a named [`ScorePolicy`]
//! injected by the caller, so scoring variants swap without touching the
//! algorithm.
//!
//! The computation is pure: no I/O, no state, same inputs always produce
//! the same output. Missing optional inputs and unrecognized price tiers
//! contribute zero; nothing here returns an error.

use crate::model::PriceTier;
use once_cell::sync::Lazy;

/// The compiled-in default policy
pub static DEFAULT_POLICY: Lazy<ScorePolicy> = Lazy::new(ScorePolicy::classic_coffee);

/// Raw signals consumed by the engine
///
/// `name`, `photo_count`, and `review_text` are optional social signals;
/// absent values contribute zero to their components.
#[derive(Debug, Clone)]
pub struct ScoreInputs<'a> {
    pub rating: f64,
    pub review_count: u32,
    pub price_level: Option<PriceTier>,
    pub tags: &'a [String],
    pub name: Option<&'a str>,
    pub photo_count: Option<u32>,
    pub review_text: Option<&'a str>,
}

/// Per-tier score contributions, peaking at the sweet-spot tier
#[derive(Debug, Clone, Copy)]
pub struct PricePoints {
    pub budget: f64,
    pub moderate: f64,
    pub upscale: f64,
    pub top_shelf: f64,
}

impl PricePoints {
    pub fn points_for(&self, tier: PriceTier) -> f64 {
        match tier {
            PriceTier::Budget => self.budget,
            PriceTier::Moderate => self.moderate,
            PriceTier::Upscale => self.upscale,
            PriceTier::TopShelf => self.top_shelf,
        }
    }
}

/// Photo-count component: linear with a cap, plus a high-count bonus
#[derive(Debug, Clone, Copy)]
pub struct PhotoSignals {
    pub per_photo: f64,
    pub cap: f64,
    pub high_count: u32,
    pub high_count_bonus: f64,
}

/// Review-text component: vocabulary scan with a cap plus fixed bonuses
/// for specific high-signal phrases
#[derive(Debug, Clone)]
pub struct ReviewTextSignals {
    pub vocabulary: Vec<String>,
    pub per_match: f64,
    pub cap: f64,
    pub phrase_bonuses: Vec<(String, f64)>,
}

/// Name-based specialty bonus; a strong match supersedes a moderate one
#[derive(Debug, Clone)]
pub struct NameSignals {
    pub strong: Vec<String>,
    pub strong_bonus: f64,
    pub moderate: Vec<String>,
    pub moderate_bonus: f64,
}

/// Named scoring configuration: weight table, vocabularies, and bonuses
#[derive(Debug, Clone)]
pub struct ScorePolicy {
    pub name: &'static str,
    /// Point budget for the normalized rating component
    pub rating_weight: f64,
    /// Raw rating (10-point scale) at or above which the bonus applies
    pub high_rating_threshold: f64,
    pub high_rating_bonus: f64,
    /// Review count at which the review component saturates
    pub review_ceiling: u32,
    pub review_weight: f64,
    pub price_points: PricePoints,
    pub tag_vocabulary: Vec<String>,
    pub tag_match_points: f64,
    pub tag_points_cap: f64,
    pub photo_signals: Option<PhotoSignals>,
    pub review_text_signals: Option<ReviewTextSignals>,
    pub name_signals: Option<NameSignals>,
    /// Unconditional addition before the final clamp
    pub flat_boost: f64,
}

impl ScorePolicy {
    /// The canonical coffee-shop policy
    ///
    /// Rating 50 pts, reviews 20 pts saturating at 200, price peaking at
    /// "$$", coffee vocabulary at 5 pts/match capped at 15. No optional
    /// signals, no flat boost.
    pub fn classic_coffee() -> Self {
        Self {
            name: "classic-coffee",
            rating_weight: 50.0,
            high_rating_threshold: 9.0,
            high_rating_bonus: 0.0,
            review_ceiling: 200,
            review_weight: 20.0,
            price_points: PricePoints {
                budget: 10.0,
                moderate: 15.0,
                upscale: 10.0,
                top_shelf: 5.0,
            },
            tag_vocabulary: [
                "Single Origin",
                "Pour Over",
                "Artisan Roasted",
                "Specialty Drinks",
                "Local Roaster",
                "Espresso Bar",
                "French Press",
                "Cold Brew",
                "Organic",
                "Fair Trade",
                "Third Wave",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            tag_match_points: 5.0,
            tag_points_cap: 15.0,
            photo_signals: None,
            review_text_signals: None,
            name_signals: None,
            flat_boost: 0.0,
        }
    }

    /// The bar-venue policy from the system's later history
    ///
    /// Lower rating weight with a high-end bonus, a longer review runway,
    /// social photo/review-text signals, name specialty bonuses, and the
    /// unconditional +10 excitement boost.
    pub fn nightlife() -> Self {
        Self {
            name: "nightlife",
            rating_weight: 45.0,
            high_rating_threshold: 9.0,
            high_rating_bonus: 5.0,
            review_ceiling: 500,
            review_weight: 15.0,
            price_points: PricePoints {
                budget: 8.0,
                moderate: 12.0,
                upscale: 10.0,
                top_shelf: 6.0,
            },
            tag_vocabulary: [
                "Craft Cocktails",
                "Live Music",
                "Happy Hour",
                "Rooftop",
                "Late Night",
                "Craft Beer",
                "Dance Floor",
                "Speakeasy",
                "Wine Bar",
                "Trivia Night",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            tag_match_points: 4.0,
            tag_points_cap: 12.0,
            photo_signals: Some(PhotoSignals {
                per_photo: 0.1,
                cap: 5.0,
                high_count: 100,
                high_count_bonus: 3.0,
            }),
            review_text_signals: Some(ReviewTextSignals {
                vocabulary: [
                    "lively", "buzzing", "packed", "energetic", "great vibe", "fun crowd",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
                per_match: 2.0,
                cap: 8.0,
                phrase_bonuses: vec![
                    ("great vibe".to_string(), 2.0),
                    ("packed".to_string(), 2.0),
                ],
            }),
            name_signals: Some(NameSignals {
                strong: vec!["speakeasy".to_string(), "cocktail".to_string()],
                strong_bonus: 4.0,
                moderate: vec![
                    "taproom".to_string(),
                    "lounge".to_string(),
                    "brewery".to_string(),
                ],
                moderate_bonus: 2.0,
            }),
            flat_boost: 10.0,
        }
    }

    /// Look up a built-in policy by name
    ///
    /// Accepts dashed, underscored, and short aliases.
    pub fn by_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic-coffee" | "classic_coffee" | "coffee" => Some(Self::classic_coffee()),
            "nightlife" | "bar" => Some(Self::nightlife()),
            _ => None,
        }
    }
}

impl Default for ScorePolicy {
    fn default() -> Self {
        Self::classic_coffee()
    }
}

/// Compute the vibe score for the given inputs under the given policy
///
/// Returns an integer in [0, 100]. Rating normalization: raw values above
/// 5 are assumed to be on a 10-point scale and divided by 10, otherwise
/// divided by 5.
pub fn compute_vibe_score(inputs: &ScoreInputs<'_>, policy: &ScorePolicy) -> u8 {
    let mut total = policy.flat_boost;

    // Rating component
    let rating = if inputs.rating.is_finite() {
        inputs.rating.clamp(0.0, 10.0)
    } else {
        0.0
    };
    let normalized = if rating > 5.0 {
        rating / 10.0
    } else {
        rating / 5.0
    };
    total += normalized * policy.rating_weight;
    if rating >= policy.high_rating_threshold {
        total += policy.high_rating_bonus;
    }

    // Review-count component saturates at the ceiling
    if policy.review_ceiling > 0 {
        let fraction = (f64::from(inputs.review_count) / f64::from(policy.review_ceiling)).min(1.0);
        total += fraction * policy.review_weight;
    }

    // Price-tier lookup; absent or unrecognized tiers contribute zero
    if let Some(tier) = inputs.price_level {
        total += policy.price_points.points_for(tier);
    }

    // Tag vocabulary matches, capped
    let tag_matches = inputs
        .tags
        .iter()
        .filter(|tag| {
            let tag = tag.to_lowercase();
            policy
                .tag_vocabulary
                .iter()
                .any(|keyword| tag.contains(&keyword.to_lowercase()))
        })
        .count();
    total += (tag_matches as f64 * policy.tag_match_points).min(policy.tag_points_cap);

    // Optional photo-count signal
    if let (Some(signals), Some(count)) = (&policy.photo_signals, inputs.photo_count) {
        total += (f64::from(count) * signals.per_photo).min(signals.cap);
        if count >= signals.high_count {
            total += signals.high_count_bonus;
        }
    }

    // Optional review-text scan
    if let (Some(signals), Some(text)) = (&policy.review_text_signals, inputs.review_text) {
        let text = text.to_lowercase();
        let matches = signals
            .vocabulary
            .iter()
            .filter(|keyword| text.contains(&keyword.to_lowercase()))
            .count();
        total += (matches as f64 * signals.per_match).min(signals.cap);
        for (phrase, bonus) in &signals.phrase_bonuses {
            if text.contains(&phrase.to_lowercase()) {
                total += bonus;
            }
        }
    }

    // Optional name-based specialty bonus; strong supersedes moderate
    if let (Some(signals), Some(name)) = (&policy.name_signals, inputs.name) {
        let name = name.to_lowercase();
        if signals
            .strong
            .iter()
            .any(|keyword| name.contains(&keyword.to_lowercase()))
        {
            total += signals.strong_bonus;
        } else if signals
            .moderate
            .iter()
            .any(|keyword| name.contains(&keyword.to_lowercase()))
        {
            total += signals.moderate_bonus;
        }
    }

    total.clamp(0.0, 100.0).round() as u8
}

/// Human-readable quality band for a score
pub fn score_label(score: u8) -> &'static str {
    match score {
        90..=u8::MAX => "Exceptional",
        80..=89 => "Excellent",
        70..=79 => "Great",
        60..=69 => "Good",
        _ => "Fair",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(rating: f64, reviews: u32, tier: Option<PriceTier>, tags: &[String]) -> ScoreInputs<'_> {
        ScoreInputs {
            rating,
            review_count: reviews,
            price_level: tier,
            tags,
            name: None,
            photo_count: None,
            review_text: None,
        }
    }

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_canonical_scenario() {
        // rating 4.6 -> 46.0, reviews 128/200 -> 12.8, "$$" -> 15.0,
        // two vocabulary tags (Single Origin, Pour Over) -> 10.0; 83.8 -> 84
        let policy = ScorePolicy::classic_coffee();
        let t = tags(&["Single Origin", "Pour Over", "WiFi"]);
        let score = compute_vibe_score(&inputs(4.6, 128, Some(PriceTier::Moderate), &t), &policy);
        assert_eq!(score, 84);
    }

    #[test]
    fn test_zero_inputs_classic() {
        let policy = ScorePolicy::classic_coffee();
        let score = compute_vibe_score(&inputs(0.0, 0, None, &[]), &policy);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_zero_inputs_nightlife_flat_boost() {
        // Nightlife carries an unconditional +10 boost
        let policy = ScorePolicy::nightlife();
        let score = compute_vibe_score(&inputs(0.0, 0, None, &[]), &policy);
        assert_eq!(score, 10);
    }

    #[test]
    fn test_score_always_in_bounds() {
        let many_tags = tags(&[
            "Single Origin",
            "Pour Over",
            "Artisan Roasted",
            "Specialty Drinks",
            "Local Roaster",
            "Espresso Bar",
            "Cold Brew",
            "Craft Cocktails",
            "Live Music",
            "Speakeasy",
        ]);
        for policy in [ScorePolicy::classic_coffee(), ScorePolicy::nightlife()] {
            let maxed = ScoreInputs {
                rating: 10.0,
                review_count: u32::MAX,
                price_level: Some(PriceTier::Moderate),
                tags: &many_tags,
                name: Some("Speakeasy Cocktail Lounge"),
                photo_count: Some(10_000),
                review_text: Some("packed, lively, buzzing, energetic, great vibe, fun crowd"),
            };
            let score = compute_vibe_score(&maxed, &policy);
            assert!(score <= 100, "{}: {}", policy.name, score);

            let empty = compute_vibe_score(&inputs(0.0, 0, None, &[]), &policy);
            assert!(empty <= 100);
        }
    }

    #[test]
    fn test_rating_monotonic_on_five_point_scale() {
        let policy = ScorePolicy::classic_coffee();
        let mut last = 0;
        for tenths in 0..=50 {
            let rating = f64::from(tenths) / 10.0;
            let score = compute_vibe_score(&inputs(rating, 50, Some(PriceTier::Budget), &[]), &policy);
            assert!(score >= last, "score dropped at rating {}", rating);
            last = score;
        }
    }

    #[test]
    fn test_rating_monotonic_on_ten_point_scale() {
        let policy = ScorePolicy::nightlife();
        let mut last = 0;
        for tenths in 51..=100 {
            let rating = f64::from(tenths) / 10.0;
            let score = compute_vibe_score(&inputs(rating, 0, None, &[]), &policy);
            assert!(score >= last, "score dropped at rating {}", rating);
            last = score;
        }
    }

    #[test]
    fn test_ten_point_normalization_matches_five_point() {
        // 9.2 on a 10-point scale normalizes the same as 4.6 on a 5-point scale
        let policy = ScorePolicy::classic_coffee();
        let five = compute_vibe_score(&inputs(4.6, 0, None, &[]), &policy);
        let ten = compute_vibe_score(&inputs(9.2, 0, None, &[]), &policy);
        assert_eq!(five, ten);
    }

    #[test]
    fn test_high_rating_bonus() {
        let policy = ScorePolicy::nightlife();
        // 9.5/10 * 45 + 5 + 10 = 57.75 -> 58
        assert_eq!(compute_vibe_score(&inputs(9.5, 0, None, &[]), &policy), 58);
        // 8.9/10 * 45 + 10 = 50.05 -> 50 (no bonus below threshold)
        assert_eq!(compute_vibe_score(&inputs(8.9, 0, None, &[]), &policy), 50);
    }

    #[test]
    fn test_review_count_monotonic_then_capped() {
        let policy = ScorePolicy::classic_coffee();
        let mut last = 0;
        for count in [0u32, 10, 50, 100, 150, 200] {
            let score = compute_vibe_score(&inputs(3.0, count, None, &[]), &policy);
            assert!(score >= last, "score dropped at count {}", count);
            last = score;
        }
        // Beyond the ceiling the component is flat
        let at_cap = compute_vibe_score(&inputs(3.0, 200, None, &[]), &policy);
        let beyond = compute_vibe_score(&inputs(3.0, 100_000, None, &[]), &policy);
        assert_eq!(at_cap, beyond);
    }

    #[test]
    fn test_price_tier_ordering() {
        for policy in [ScorePolicy::classic_coffee(), ScorePolicy::nightlife()] {
            let score_for = |tier| compute_vibe_score(&inputs(4.0, 100, Some(tier), &[]), &policy);
            let moderate = score_for(PriceTier::Moderate);
            let budget = score_for(PriceTier::Budget);
            let upscale = score_for(PriceTier::Upscale);
            let top_shelf = score_for(PriceTier::TopShelf);
            assert!(moderate >= budget, "{}", policy.name);
            assert!(moderate >= upscale, "{}", policy.name);
            assert!(budget >= top_shelf, "{}", policy.name);
            assert!(upscale >= top_shelf, "{}", policy.name);
        }
    }

    #[test]
    fn test_unrecognized_price_contributes_zero() {
        let policy = ScorePolicy::classic_coffee();
        let none = compute_vibe_score(&inputs(4.0, 100, None, &[]), &policy);
        let budget = compute_vibe_score(&inputs(4.0, 100, Some(PriceTier::Budget), &[]), &policy);
        assert_eq!(f64::from(budget) - f64::from(none), 10.0);
    }

    #[test]
    fn test_keyword_matches_capped() {
        let policy = ScorePolicy::classic_coffee();
        // Four matching tags would be 20 points uncapped; cap is 15
        let four = tags(&["Single Origin", "Pour Over", "Cold Brew", "Organic"]);
        let three = tags(&["Single Origin", "Pour Over", "Cold Brew"]);
        let a = compute_vibe_score(&inputs(0.0, 0, None, &four), &policy);
        let b = compute_vibe_score(&inputs(0.0, 0, None, &three), &policy);
        assert_eq!(a, 15);
        assert_eq!(b, 15);
    }

    #[test]
    fn test_keyword_match_case_insensitive_substring() {
        let policy = ScorePolicy::classic_coffee();
        let t = tags(&["best pour over in town"]);
        let score = compute_vibe_score(&inputs(0.0, 0, None, &t), &policy);
        assert_eq!(score, 5);
    }

    #[test]
    fn test_photo_signals_cap_and_bonus() {
        let policy = ScorePolicy::nightlife();
        let base = compute_vibe_score(&inputs(0.0, 0, None, &[]), &policy);

        let with_photos = |count| {
            let mut i = inputs(0.0, 0, None, &[]);
            i.photo_count = Some(count);
            compute_vibe_score(&i, &policy)
        };
        // 20 photos * 0.1 = 2 points
        assert_eq!(with_photos(20), base + 2);
        // 80 photos would be 8 points uncapped; cap is 5
        assert_eq!(with_photos(80), base + 5);
        // Past the high-count threshold: cap 5 + bonus 3
        assert_eq!(with_photos(150), base + 8);
    }

    #[test]
    fn test_review_text_signals() {
        let policy = ScorePolicy::nightlife();
        let base = compute_vibe_score(&inputs(0.0, 0, None, &[]), &policy);

        let with_text = |text: &str| {
            let mut i = inputs(0.0, 0, None, &[]);
            i.review_text = Some(text);
            compute_vibe_score(&i, &policy)
        };
        // One vocabulary match
        assert_eq!(with_text("Very lively spot"), base + 2);
        // "packed" is a vocabulary match (+2) and a phrase bonus (+2)
        assert_eq!(with_text("It was PACKED on Friday"), base + 4);
        // Absent text contributes nothing
        assert_eq!(with_text(""), base);
    }

    #[test]
    fn test_name_signals_strong_supersedes_moderate() {
        let policy = ScorePolicy::nightlife();
        let base = compute_vibe_score(&inputs(0.0, 0, None, &[]), &policy);

        let with_name = |name: &str| {
            let mut i = inputs(0.0, 0, None, &[]);
            i.name = Some(name);
            compute_vibe_score(&i, &policy)
        };
        assert_eq!(with_name("The Velvet Speakeasy"), base + 4);
        assert_eq!(with_name("Barton Taproom"), base + 2);
        // Both strong and moderate indicators: strong only, no stacking
        assert_eq!(with_name("Speakeasy Lounge"), base + 4);
        assert_eq!(with_name("Corner Diner"), base);
    }

    #[test]
    fn test_referential_transparency() {
        let policy = ScorePolicy::nightlife();
        let t = tags(&["Craft Cocktails", "Live Music"]);
        let i = ScoreInputs {
            rating: 8.7,
            review_count: 340,
            price_level: Some(PriceTier::Upscale),
            tags: &t,
            name: Some("Harbor Lounge"),
            photo_count: Some(42),
            review_text: Some("buzzing and fun crowd"),
        };
        assert_eq!(compute_vibe_score(&i, &policy), compute_vibe_score(&i, &policy));
    }

    #[test]
    fn test_policy_by_name() {
        assert_eq!(ScorePolicy::by_name("classic-coffee").unwrap().name, "classic-coffee");
        assert_eq!(ScorePolicy::by_name("COFFEE").unwrap().name, "classic-coffee");
        assert_eq!(ScorePolicy::by_name("nightlife").unwrap().name, "nightlife");
        assert_eq!(ScorePolicy::by_name("bar").unwrap().name, "nightlife");
        assert!(ScorePolicy::by_name("unknown").is_none());
    }

    #[test]
    fn test_default_policy_is_canonical() {
        assert_eq!(DEFAULT_POLICY.name, "classic-coffee");
        assert_eq!(ScorePolicy::default().name, "classic-coffee");
    }

    #[test]
    fn test_score_labels() {
        assert_eq!(score_label(95), "Exceptional");
        assert_eq!(score_label(90), "Exceptional");
        assert_eq!(score_label(89), "Excellent");
        assert_eq!(score_label(80), "Excellent");
        assert_eq!(score_label(79), "Great");
        assert_eq!(score_label(70), "Great");
        assert_eq!(score_label(60), "Good");
        assert_eq!(score_label(59), "Fair");
        assert_eq!(score_label(0), "Fair");
    }
}
