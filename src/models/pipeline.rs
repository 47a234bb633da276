use crate::models::{Dataset, Language, Post, TextAnalyzer};
use crate::types::{DatasetTitle, Token, TokenFrequency, TokenFrequencyMap};
use crate::utils::{
    count_token_frequencies, filter_posts_by_language, load_posts, merge_token_frequencies,
    most_common_tokens,
};
use crate::Error;
use log::{debug, info};

/// Outcome of analyzing one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetReport {
    pub title: DatasetTitle,
    /// Number of tokens produced per language, in analysis order.
    pub token_counts: Vec<(Language, usize)>,
    /// Frequencies of all languages merged into one table.
    pub frequencies: TokenFrequencyMap,
}

impl DatasetReport {
    pub fn top_tokens(&self, n: usize) -> Vec<(Token, TokenFrequency)> {
        most_common_tokens(&self.frequencies, n)
    }

    pub fn total_tokens(&self) -> usize {
        self.token_counts.iter().map(|(_, count)| count).sum()
    }
}

/// Load, filter, tokenize and count, parameterized by dataset.
///
/// Holds one analyzer per language. Asking for a language without an analyzer fails with
/// `Error::UnsupportedLanguage`.
pub struct Pipeline<'a> {
    analyzers: Vec<Box<dyn TextAnalyzer + 'a>>,
}

impl<'a> Pipeline<'a> {
    pub fn new() -> Self {
        Self {
            analyzers: Vec::new(),
        }
    }

    /// Registers an analyzer, replacing any previous one for the same language.
    pub fn with_analyzer(mut self, analyzer: Box<dyn TextAnalyzer + 'a>) -> Self {
        self.analyzers
            .retain(|existing| existing.language() != analyzer.language());
        self.analyzers.push(analyzer);
        self
    }

    pub fn languages(&self) -> Vec<Language> {
        self.analyzers
            .iter()
            .map(|analyzer| analyzer.language())
            .collect()
    }

    pub fn analyzer_for(&self, language: Language) -> Result<&(dyn TextAnalyzer + 'a), Error> {
        self.analyzers
            .iter()
            .find(|analyzer| analyzer.language() == language)
            .map(|analyzer| analyzer.as_ref())
            .ok_or_else(|| Error::UnsupportedLanguage(language.code().to_string()))
    }

    /// Loads the dataset file and analyzes it.
    pub fn analyze_dataset(&self, dataset: &Dataset) -> Result<DatasetReport, Error> {
        info!("Analyzing dataset \"{}\"", dataset.title);

        let posts = load_posts(&dataset.path)?;
        self.analyze_posts(&dataset.title, &posts, &dataset.languages)
    }

    /// Analyzes already loaded posts. Languages are processed in the given order and their
    /// tables merged left to right.
    pub fn analyze_posts(
        &self,
        title: &str,
        posts: &[Post],
        languages: &[Language],
    ) -> Result<DatasetReport, Error> {
        let mut token_counts = Vec::with_capacity(languages.len());
        let mut frequencies = TokenFrequencyMap::new();

        for &language in languages {
            let analyzer = self.analyzer_for(language)?;

            let texts = filter_posts_by_language(posts, language)?;
            debug!("{} {} posts in \"{}\"", texts.len(), language, title);

            let tokens = analyzer.analyze_all(&texts)?;
            info!(
                "{} {} tokens in \"{}\"",
                tokens.len(),
                language,
                title
            );

            token_counts.push((language, tokens.len()));
            frequencies = merge_token_frequencies(&frequencies, &count_token_frequencies(&tokens));
        }

        Ok(DatasetReport {
            title: title.to_string(),
            token_counts,
            frequencies,
        })
    }
}

impl Default for Pipeline<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EnglishAnalyzer, StopWords};
    use crate::utils::parse_posts;

    /// Splits on whitespace, tagging itself as Korean.
    struct WhitespaceAnalyzer;

    impl TextAnalyzer for WhitespaceAnalyzer {
        fn language(&self) -> Language {
            Language::Korean
        }

        fn analyze(&self, text: &str) -> Result<Vec<Token>, Error> {
            Ok(text.split_whitespace().map(str::to_string).collect())
        }
    }

    #[test]
    fn test_english_scenario() {
        let stop_words = StopWords::for_language(Language::English);
        let pipeline = Pipeline::new().with_analyzer(Box::new(EnglishAnalyzer::new(&stop_words)));
        let posts = parse_posts(r#"[{"text":"I love RT games!!","lang":"en"}]"#).unwrap();

        let report = pipeline
            .analyze_posts("Test", &posts, &[Language::English])
            .unwrap();

        let expected: TokenFrequencyMap =
            [("love".to_string(), 1), ("game".to_string(), 1)].into_iter().collect();
        assert_eq!(report.frequencies, expected);
        assert_eq!(report.token_counts, vec![(Language::English, 2)]);
    }

    #[test]
    fn test_merges_languages_in_order() {
        let stop_words = StopWords::for_language(Language::English);
        let pipeline = Pipeline::new()
            .with_analyzer(Box::new(EnglishAnalyzer::new(&stop_words)))
            .with_analyzer(Box::new(WhitespaceAnalyzer));
        let posts = parse_posts(
            r#"[
                {"text":"게임 게임 game","lang":"ko"},
                {"text":"games and events","lang":"en"},
                {"text":"ignored","lang":"ja"}
            ]"#,
        )
        .unwrap();

        let report = pipeline
            .analyze_posts("Mixed", &posts, &[Language::English, Language::Korean])
            .unwrap();

        assert_eq!(
            report.frequencies.into_iter().collect::<Vec<_>>(),
            vec![
                ("game".to_string(), 2),
                ("event".to_string(), 1),
                ("게임".to_string(), 2),
            ]
        );
        assert_eq!(report.token_counts.len(), 2);
    }

    #[test]
    fn test_missing_analyzer_is_unsupported_language() {
        let pipeline = Pipeline::new().with_analyzer(Box::new(WhitespaceAnalyzer));
        let posts = parse_posts(r#"[{"text":"hello","lang":"en"}]"#).unwrap();

        assert!(matches!(
            pipeline.analyze_posts("Test", &posts, &[Language::English]),
            Err(Error::UnsupportedLanguage(code)) if code == "en"
        ));
    }

    #[test]
    fn test_top_tokens_and_total() {
        let pipeline = Pipeline::new().with_analyzer(Box::new(WhitespaceAnalyzer));
        let posts = parse_posts(r#"[{"text":"b a b c a b","lang":"ko"}]"#).unwrap();

        let report = pipeline
            .analyze_posts("Test", &posts, &[Language::Korean])
            .unwrap();

        assert_eq!(report.total_tokens(), 6);
        assert_eq!(
            report.top_tokens(2),
            vec![("b".to_string(), 3), ("a".to_string(), 2)]
        );
    }

    #[test]
    fn test_replacing_analyzer_keeps_one_per_language() {
        let pipeline = Pipeline::new()
            .with_analyzer(Box::new(WhitespaceAnalyzer))
            .with_analyzer(Box::new(WhitespaceAnalyzer));

        assert_eq!(pipeline.languages(), vec![Language::Korean]);
    }
}
