use crate::models::{KoreanMorpheme, Language, StopWords, TextAnalyzer};
use crate::types::Token;
use crate::Error;
use lindera::dictionary::load_dictionary;
use lindera::mode::Mode;
use lindera::segmenter::Segmenter;
use log::{debug, info};
use std::borrow::Cow;
use std::path::Path;

const URI_SCHEME_SEPARATOR: &str = "://";

/// Korean text analysis: morphological analysis, noun/adjective selection, stop word removal.
pub struct KoreanAnalyzer<'a> {
    stop_words: &'a StopWords,
    segmenter: Segmenter,
}

impl<'a> KoreanAnalyzer<'a> {
    /// Loads mecab-ko-dic from a directory path or a lindera URI (e.g. `embedded://ko-dic`).
    ///
    /// # Errors
    /// * `Error::ResourceError` if the dictionary is missing or cannot be loaded.
    pub fn from_dictionary_uri(stop_words: &'a StopWords, uri: &str) -> Result<Self, Error> {
        if !uri.contains(URI_SCHEME_SEPARATOR) && !Path::new(uri).is_dir() {
            return Err(Error::ResourceError(format!(
                "Korean dictionary not found at {}",
                uri
            )));
        }

        info!("Loading Korean dictionary from {}", uri);

        let dictionary = load_dictionary(uri).map_err(|err| {
            Error::ResourceError(format!("Failed to load Korean dictionary {}: {}", uri, err))
        })?;

        Ok(Self {
            stop_words,
            segmenter: Segmenter::new(Mode::Normal, dictionary, None),
        })
    }

    /// Runs morphological analysis, returning every morpheme in order.
    pub fn morphemes(&self, text: &str) -> Result<Vec<KoreanMorpheme>, Error> {
        let mut tokens = self
            .segmenter
            .segment(Cow::Borrowed(text))
            .map_err(|err| Error::ParserError(format!("Morphological analysis failed: {}", err)))?;

        let morphemes = tokens
            .iter_mut()
            .map(|token| {
                let surface = token.surface.to_string();
                KoreanMorpheme::from_details(&surface, &token.details())
            })
            .collect();

        Ok(morphemes)
    }

    /// Keeps nouns and adjectives in dictionary form, minus stop words.
    ///
    /// A root followed by an adjective-deriving suffix counts as one adjective
    /// (`깨끗` + `하` -> `깨끗하다`).
    pub fn select_tokens(stop_words: &StopWords, morphemes: &[KoreanMorpheme]) -> Vec<Token> {
        Self::merge_derived_adjectives(morphemes)
            .iter()
            .filter(|morpheme| morpheme.word_class().is_some())
            .map(|morpheme| morpheme.normalized_form())
            .filter(|token| !stop_words.contains(token))
            .collect()
    }
}

impl KoreanAnalyzer<'_> {
    fn merge_derived_adjectives(morphemes: &[KoreanMorpheme]) -> Vec<KoreanMorpheme> {
        let mut merged = Vec::with_capacity(morphemes.len());
        let mut rest = morphemes;

        while let Some((morpheme, tail)) = rest.split_first() {
            let derived = tail
                .first()
                .and_then(|next| KoreanMorpheme::derived_adjective(morpheme, next));

            match derived {
                Some(adjective) => {
                    merged.push(adjective);
                    rest = &tail[1..];
                }
                None => {
                    merged.push(morpheme.clone());
                    rest = tail;
                }
            }
        }

        merged
    }
}

impl TextAnalyzer for KoreanAnalyzer<'_> {
    fn language(&self) -> Language {
        Language::Korean
    }

    fn analyze(&self, text: &str) -> Result<Vec<Token>, Error> {
        let morphemes = self.morphemes(text)?;
        debug!("Analyzed {} Korean morphemes", morphemes.len());

        Ok(Self::select_tokens(self.stop_words, &morphemes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selects_nouns_and_adjectives_without_stop_words() {
        let stop_words = StopWords::for_language(Language::Korean);

        // 오늘 날씨가 좋다
        let morphemes = vec![
            KoreanMorpheme::new("오늘", "NNG"),
            KoreanMorpheme::new("날씨", "NNG"),
            KoreanMorpheme::new("가", "JKS"),
            KoreanMorpheme::new("좋", "VA"),
            KoreanMorpheme::new("다", "EF"),
        ];

        assert_eq!(
            KoreanAnalyzer::select_tokens(&stop_words, &morphemes),
            vec!["날씨", "좋다"]
        );
    }

    #[test]
    fn test_stop_words_apply_to_dictionary_form() {
        let stop_words = StopWords::for_language(Language::Korean);

        let morphemes = vec![
            KoreanMorpheme::new("같", "VA"),
            KoreanMorpheme::new("게임", "NNG"),
            KoreanMorpheme::new("게임", "NNG"),
        ];

        assert_eq!(
            KoreanAnalyzer::select_tokens(&stop_words, &morphemes),
            vec!["게임", "게임"]
        );
    }

    #[test]
    fn test_root_and_deriving_suffix_form_one_adjective() {
        let stop_words = StopWords::for_language(Language::Korean);

        // 방이 깨끗하다, 행복한 하루
        let morphemes = vec![
            KoreanMorpheme::new("방", "NNG"),
            KoreanMorpheme::new("이", "JKS"),
            KoreanMorpheme::new("깨끗", "XR"),
            KoreanMorpheme::new("하", "XSA"),
            KoreanMorpheme::new("다", "EF"),
            KoreanMorpheme::new("행복", "NNG"),
            KoreanMorpheme::from_details(
                "한",
                &["XSA+ETM", "*", "T", "한", "Inflect", "XSA", "ETM", "하/XSA/*+ᆫ/ETM/*"],
            ),
            KoreanMorpheme::new("하루", "NNG"),
        ];

        assert_eq!(
            KoreanAnalyzer::select_tokens(&stop_words, &morphemes),
            vec!["방", "깨끗하다", "행복하다", "하루"]
        );
    }

    #[test]
    fn test_noun_before_other_suffix_stays_a_noun() {
        let stop_words = StopWords::for_language(Language::Korean);

        // 공부하다: 하 is a verb-deriving suffix here
        let morphemes = vec![
            KoreanMorpheme::new("공부", "NNG"),
            KoreanMorpheme::new("하", "XSV"),
            KoreanMorpheme::new("다", "EF"),
        ];

        assert_eq!(
            KoreanAnalyzer::select_tokens(&stop_words, &morphemes),
            vec!["공부"]
        );
    }

    #[test]
    #[cfg(feature = "embed-ko-dic")]
    fn test_analyzes_with_embedded_dictionary() {
        let stop_words = StopWords::for_language(Language::Korean);
        let analyzer =
            KoreanAnalyzer::from_dictionary_uri(&stop_words, crate::DEFAULT_KOREAN_DICTIONARY_URI)
                .unwrap();

        let tokens = analyzer.analyze("오늘 날씨가 좋다").unwrap();

        assert!(tokens.contains(&"날씨".to_string()));
        assert!(tokens.contains(&"좋다".to_string()));
        assert!(!tokens.contains(&"오늘".to_string()));
    }

    #[test]
    fn test_missing_dictionary_is_resource_error() {
        let stop_words = StopWords::for_language(Language::Korean);

        assert!(matches!(
            KoreanAnalyzer::from_dictionary_uri(&stop_words, "does/not/exist/ko-dic"),
            Err(Error::ResourceError(_))
        ));
    }
}
