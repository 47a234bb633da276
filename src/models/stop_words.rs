use crate::constants::{ENGLISH_STOP_WORDS, KOREAN_STOP_WORDS};
use crate::models::Language;
use crate::types::TokenRef;
use std::collections::HashSet;

/// An immutable set of words excluded from frequency analysis.
///
/// Built once at startup and shared by reference with the analyzers.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The built-in list for the given language.
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::English => Self::from_list(ENGLISH_STOP_WORDS),
            Language::Korean => Self::from_list(KOREAN_STOP_WORDS),
        }
    }

    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|word| word.to_string()).collect(),
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn contains(&self, word: &TokenRef) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns a copy extended with additional words.
    pub fn with_words<I, S>(&self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut extended = self.words.clone();
        extended.extend(words.into_iter().map(Into::into));

        Self { words: extended }
    }
}
