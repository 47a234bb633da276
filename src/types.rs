use indexmap::IndexMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the normalized words counted by the
/// aggregator (English stems, Korean nouns and dictionary-form adjectives).
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Represents the total number of occurrences of a token within a token stream.
pub type TokenFrequency = usize;

/// Represents a map of tokens to their frequency counts.
///
/// The map preserves insertion order: keys appear in the order of their first occurrence in
/// the token stream they were counted from. Ranking ties are broken by this order.
pub type TokenFrequencyMap = IndexMap<Token, TokenFrequency>;

/// Represents the raw text body of a post.
pub type PostText = String;

/// Represents a dataset title, e.g. "MapleStory Tweets". Used as the word-cloud title and to
/// derive output file names.
pub type DatasetTitle = String;
