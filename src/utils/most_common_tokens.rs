use crate::types::{Token, TokenFrequency, TokenFrequencyMap};

/// Returns up to `n` of the most frequent tokens.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** Tokens with equal frequency keep their insertion order in the map, i.e. the
///   order in which they were first counted. The sort is stable, so this needs no explicit
///   comparison.
///
/// ### Example:
/// ```rust
/// use tweet_cloud::{count_token_frequencies, most_common_tokens};
///
/// let tokens: Vec<String> = ["b", "a", "c", "a"].iter().map(|t| t.to_string()).collect();
/// let frequencies = count_token_frequencies(&tokens);
///
/// assert_eq!(
///     most_common_tokens(&frequencies, 2),
///     vec![("a".to_string(), 2), ("b".to_string(), 1)]
/// );
/// ```
pub fn most_common_tokens(
    frequencies: &TokenFrequencyMap,
    n: usize,
) -> Vec<(Token, TokenFrequency)> {
    let mut sorted_results: Vec<(Token, TokenFrequency)> = frequencies
        .iter()
        .map(|(token, frequency)| (token.to_owned(), *frequency))
        .collect();

    sorted_results.sort_by(|a, b| b.1.cmp(&a.1));
    sorted_results.truncate(n);

    sorted_results
}
