mod config;
mod constants;
pub mod models;
pub mod types;
mod utils;

pub use config::{
    DEFAULT_FONT_PATH, DEFAULT_KOREAN_DICTIONARY_URI, DEFAULT_OUTPUT_DIRECTORY,
    DEFAULT_PIPELINE_CONFIG, DEFAULT_TOP_N, DEFAULT_WORD_CLOUD_CONFIG,
};
pub use models::{
    Dataset, DatasetReport, EnglishAnalyzer, Error, KoreanAnalyzer, Language, Pipeline,
    PipelineConfig, Post, StopWords, TextAnalyzer, WordCloud, WordCloudConfig, WordCloudLayout,
};
pub use types::{DatasetTitle, PostText, Token, TokenFrequency, TokenFrequencyMap, TokenRef};
pub use utils::{
    count_token_frequencies, filter_posts_by_language, load_posts, merge_token_frequencies,
    most_common_tokens, parse_posts, slugify_title, word_tokenize, write_frequencies_csv,
    write_frequencies_csv_file,
};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

use constants::DEFAULT_DATASETS;

/// The datasets analyzed when none are named explicitly.
pub fn default_datasets() -> Vec<Dataset> {
    DEFAULT_DATASETS
        .iter()
        .map(|(title, path)| Dataset::new(title, path))
        .collect()
}

/// Tokenizes English text with the built-in stop words.
///
/// # Example
/// ```
/// use tweet_cloud::tokenize_english;
///
/// assert_eq!(tokenize_english("I love RT games!!").unwrap(), vec!["love", "game"]);
/// ```
pub fn tokenize_english(text: &str) -> Result<Vec<Token>, Error> {
    let stop_words = StopWords::for_language(Language::English);
    EnglishAnalyzer::new(&stop_words).analyze(text)
}

/// Builds a pipeline with one analyzer per requested language.
///
/// The Korean dictionary is only loaded when Korean is requested.
///
/// # Errors
/// * `Error::ResourceError` if Korean is requested and the dictionary cannot be loaded.
pub fn build_pipeline<'a>(
    english_stop_words: &'a StopWords,
    korean_stop_words: &'a StopWords,
    korean_dictionary_uri: &str,
    languages: &[Language],
) -> Result<Pipeline<'a>, Error> {
    let mut pipeline = Pipeline::new();

    for language in languages {
        pipeline = match language {
            Language::English => {
                pipeline.with_analyzer(Box::new(EnglishAnalyzer::new(english_stop_words)))
            }
            Language::Korean => pipeline.with_analyzer(Box::new(
                KoreanAnalyzer::from_dictionary_uri(korean_stop_words, korean_dictionary_uri)?,
            )),
        };
    }

    Ok(pipeline)
}

/// Analyzes a dataset with the built-in stop words.
pub fn analyze_dataset(
    dataset: &Dataset,
    korean_dictionary_uri: &str,
) -> Result<DatasetReport, Error> {
    let english_stop_words = StopWords::for_language(Language::English);
    let korean_stop_words = StopWords::for_language(Language::Korean);

    let pipeline = build_pipeline(
        &english_stop_words,
        &korean_stop_words,
        korean_dictionary_uri,
        &dataset.languages,
    )?;

    pipeline.analyze_dataset(dataset)
}
