use crate::constants::{
    KOREAN_ADJECTIVE_ROOT_TAGS, KOREAN_ADJECTIVE_SUFFIX_TAGS, KOREAN_ADJECTIVE_TAGS,
    KOREAN_DERIVED_ADJECTIVE_TAG, KOREAN_DICTIONARY_FORM_SUFFIX, KOREAN_NOUN_TAGS,
};
use crate::types::Token;

// Field positions within a mecab-ko-dic entry
const DETAIL_POS_TAG: usize = 0;
const DETAIL_ENTRY_TYPE: usize = 4;
const DETAIL_EXPRESSION: usize = 7;

const INFLECT_ENTRY_TYPE: &str = "Inflect";
const EMPTY_DETAIL: &str = "*";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KoreanWordClass {
    Noun,
    Adjective,
}

/// A single unit of Korean morphological analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KoreanMorpheme {
    pub surface: String,
    /// Part-of-speech tag; compound entries join tags with `+` (e.g. `VA+EP`).
    pub tag: String,
    /// Decomposition of inflected entries, e.g. `좋/VA/*+았/EP/*`.
    pub expression: Option<String>,
}

impl KoreanMorpheme {
    pub fn new(surface: &str, tag: &str) -> Self {
        Self {
            surface: surface.to_string(),
            tag: tag.to_string(),
            expression: None,
        }
    }

    /// Builds a morpheme from a token surface and its mecab-ko-dic detail fields.
    pub fn from_details(surface: &str, details: &[&str]) -> Self {
        let tag = details
            .get(DETAIL_POS_TAG)
            .copied()
            .unwrap_or(EMPTY_DETAIL);

        let is_inflected = details.get(DETAIL_ENTRY_TYPE).copied() == Some(INFLECT_ENTRY_TYPE);

        let expression = details
            .get(DETAIL_EXPRESSION)
            .filter(|expression| is_inflected && **expression != EMPTY_DETAIL)
            .map(|expression| expression.to_string());

        Self {
            surface: surface.to_string(),
            tag: tag.to_string(),
            expression,
        }
    }

    /// Joins a root and a following adjective-deriving suffix into one adjective, e.g.
    /// `깨끗/XR` + `하/XSA` -> `깨끗하/VA`. Returns `None` if the pair does not form one.
    pub fn derived_adjective(root: &Self, suffix: &Self) -> Option<Self> {
        if !KOREAN_ADJECTIVE_ROOT_TAGS.contains(&root.leading_tag())
            || !KOREAN_ADJECTIVE_SUFFIX_TAGS.contains(&suffix.leading_tag())
        {
            return None;
        }

        Some(Self::new(
            &format!("{}{}", root.surface, suffix.stem()),
            KOREAN_DERIVED_ADJECTIVE_TAG,
        ))
    }

    /// The tag of the leading morpheme (`VA` for `VA+EP`).
    pub fn leading_tag(&self) -> &str {
        self.tag.split('+').next().unwrap_or(self.tag.as_str())
    }

    pub fn word_class(&self) -> Option<KoreanWordClass> {
        let leading_tag = self.leading_tag();

        if KOREAN_NOUN_TAGS.contains(&leading_tag) {
            Some(KoreanWordClass::Noun)
        } else if KOREAN_ADJECTIVE_TAGS.contains(&leading_tag) {
            Some(KoreanWordClass::Adjective)
        } else {
            None
        }
    }

    /// The dictionary form of the morpheme.
    ///
    /// Nouns are returned as-is. Adjectives are reduced to their stem and suffixed with `다`,
    /// so that `좋`, `좋았` and `좋은` all normalize to `좋다`.
    pub fn normalized_form(&self) -> Token {
        match self.word_class() {
            Some(KoreanWordClass::Adjective) => {
                format!("{}{}", self.stem(), KOREAN_DICTIONARY_FORM_SUFFIX)
            }
            _ => self.surface.clone(),
        }
    }

    fn stem(&self) -> &str {
        self.expression
            .as_deref()
            .and_then(|expression| expression.split('+').next())
            .and_then(|head| head.split('/').next())
            .filter(|stem| !stem.is_empty())
            .unwrap_or(self.surface.as_str())
    }
}
