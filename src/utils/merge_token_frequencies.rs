use crate::types::TokenFrequencyMap;

/// Sums two frequency maps key by key, treating absent keys as zero.
///
/// Keys keep the order of `a`, followed by keys only present in `b` in their order in `b`.
///
/// # Example
/// ```
/// use tweet_cloud::{merge_token_frequencies, TokenFrequencyMap};
///
/// let a = TokenFrequencyMap::from([("a".to_string(), 2), ("b".to_string(), 1)]);
/// let b = TokenFrequencyMap::from([("b".to_string(), 3), ("c".to_string(), 1)]);
///
/// let merged = merge_token_frequencies(&a, &b);
/// assert_eq!(merged.get("a"), Some(&2));
/// assert_eq!(merged.get("b"), Some(&4));
/// assert_eq!(merged.get("c"), Some(&1));
/// ```
pub fn merge_token_frequencies(a: &TokenFrequencyMap, b: &TokenFrequencyMap) -> TokenFrequencyMap {
    let mut merged = a.clone();

    for (token, frequency) in b {
        *merged.entry(token.clone()).or_insert(0) += frequency;
    }

    merged
}
