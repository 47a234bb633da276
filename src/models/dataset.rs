use crate::constants::DATASET_ARG_SEPARATOR;
use crate::models::Language;
use crate::types::DatasetTitle;
use crate::utils::slugify_title;
use crate::Error;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// A titled input file and the languages to analyze in it.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub title: DatasetTitle,
    pub path: PathBuf,
    pub languages: Vec<Language>,
}

impl Dataset {
    /// Creates a dataset covering every supported language.
    pub fn new(title: &str, path: impl AsRef<Path>) -> Self {
        Self {
            title: title.to_string(),
            path: path.as_ref().to_path_buf(),
            languages: Language::ALL.to_vec(),
        }
    }

    pub fn with_languages(mut self, languages: &[Language]) -> Self {
        self.languages = languages.to_vec();
        self
    }

    /// File stem used for the exported image and CSV.
    pub fn output_stem(&self) -> String {
        slugify_title(&self.title)
    }
}

impl FromStr for Dataset {
    type Err = Error;

    /// Parses `TITLE=PATH`. The first separator splits, so paths may contain `=`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (title, path) = value.split_once(DATASET_ARG_SEPARATOR).ok_or_else(|| {
            Error::ParserError(format!(
                "Expected TITLE{}PATH for dataset, got \"{}\"",
                DATASET_ARG_SEPARATOR, value
            ))
        })?;

        let (title, path) = (title.trim(), path.trim());
        if title.is_empty() || path.is_empty() {
            return Err(Error::ParserError(format!(
                "Dataset title and path must not be empty: \"{}\"",
                value
            )));
        }

        Ok(Dataset::new(title, path))
    }
}
