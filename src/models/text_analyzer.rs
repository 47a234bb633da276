use crate::models::Language;
use crate::types::{PostText, Token};
use crate::Error;

/// Turns raw post text into normalized tokens for one language.
pub trait TextAnalyzer {
    fn language(&self) -> Language;

    /// Tokenizes and normalizes a single text, keeping token order and duplicates.
    fn analyze(&self, text: &str) -> Result<Vec<Token>, Error>;

    /// Analyzes each text in order and concatenates the resulting token streams.
    fn analyze_all(&self, texts: &[PostText]) -> Result<Vec<Token>, Error> {
        let mut tokens = Vec::new();

        for text in texts {
            tokens.extend(self.analyze(text)?);
        }

        Ok(tokens)
    }
}
