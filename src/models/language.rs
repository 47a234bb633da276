use crate::Error;
use std::fmt;
use std::str::FromStr;

/// The languages the pipeline knows how to analyze.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Korean,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Korean];

    /// Two-letter code as found in the `lang` field of a post.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Korean => "ko",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Korean => "korean",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Language {
    type Err = Error;

    /// Accepts either the two-letter code or the long name, case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "ko" | "korean" => Ok(Language::Korean),
            _ => Err(Error::UnsupportedLanguage(value.to_string())),
        }
    }
}
