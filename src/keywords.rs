use rand::seq::SliceRandom;
use rand::Rng;

/// Terms searched for when the query is empty
pub const FALLBACK_KEYWORDS: [&str; 9] = [
    "pasta", "pizza", "salad", "burger", "dessert", "rice", "fish", "soup", "sandwich",
];

/// Resolves the term actually sent to the API.
///
/// An empty query is replaced by a keyword drawn uniformly from
/// [`FALLBACK_KEYWORDS`]. The draw happens on every call, so two fetches for
/// the same empty query can search for different terms. Anything else,
/// whitespace included, is sent unchanged.
pub fn effective_query<R: Rng + ?Sized>(query: &str, rng: &mut R) -> String {
    if !query.is_empty() {
        return query.to_string();
    }

    FALLBACK_KEYWORDS
        .choose(rng)
        .copied()
        .unwrap_or(FALLBACK_KEYWORDS[0])
        .to_string()
}
