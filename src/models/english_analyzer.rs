use crate::models::{Language, StopWords, TextAnalyzer};
use crate::types::Token;
use crate::utils::word_tokenize;
use crate::Error;
use porter_stemmer::stem;

/// English text analysis: lowercase, word-tokenize, keep alphabetic non-stop-words, then
/// apply Porter's stemming algorithm.
pub struct EnglishAnalyzer<'a> {
    stop_words: &'a StopWords,
}

impl<'a> EnglishAnalyzer<'a> {
    pub fn new(stop_words: &'a StopWords) -> Self {
        Self { stop_words }
    }

    fn is_alphabetic(word: &str) -> bool {
        !word.is_empty() && word.chars().all(|c| c.is_alphabetic())
    }
}

impl TextAnalyzer for EnglishAnalyzer<'_> {
    fn language(&self) -> Language {
        Language::English
    }

    fn analyze(&self, text: &str) -> Result<Vec<Token>, Error> {
        let tokens = word_tokenize(&text.to_lowercase())
            .into_iter()
            .filter(|word| Self::is_alphabetic(word))
            .filter(|word| !self.stop_words.contains(word))
            .map(|word| stem(&word))
            .collect();

        Ok(tokens)
    }
}
