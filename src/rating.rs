//! The fixed five-point sentiment scale and its category names.

/// Sentinel score for words and reviews the store knows nothing about.
pub const UNKNOWN: f64 = -1.0;
/// Most negative rating on the scale.
pub const NEGATIVE: f64 = 0.0;
pub const SOMEWHAT_NEGATIVE: f64 = 1.0;
pub const NEUTRAL: f64 = 2.0;
pub const SOMEWHAT_POSITIVE: f64 = 3.0;
/// Most positive rating on the scale.
pub const POSITIVE: f64 = 4.0;

/// Inclusive bounds of a valid review rating.
pub const MIN_RATING: i32 = 0;
pub const MAX_RATING: i32 = 4;

/// Ordered (rating value, category label) pairs. Lookup is by exact integer
/// match on the half-up-rounded sentiment.
const CATEGORIES: &[(i64, &str)] = &[
    (-1, "unknown"),
    (0, "negative"),
    (1, "somewhat negative"),
    (2, "neutral"),
    (3, "somewhat positive"),
    (4, "positive"),
];

/// Round a sentiment score half-up to the nearest integer.
///
/// `0.5` rounds to `1`, `-0.5` rounds to `0`. Matches the rounding used when
/// classifying review sentiment into a category.
pub fn round_half_up(score: f64) -> i64 {
    (score + 0.5).floor() as i64
}

/// Map a sentiment score to its category name.
///
/// The score is rounded half-up and matched against the fixed scale; anything
/// outside `-1..=4` falls back to `"unknown"`.
pub fn category_name(score: f64) -> &'static str {
    let rounded = round_half_up(score);
    CATEGORIES
        .iter()
        .find(|(value, _)| *value == rounded)
        .map(|(_, name)| *name)
        .unwrap_or("unknown")
}
