pub mod config;
pub use config::{PipelineConfig, WordCloudConfig};

pub mod dataset;
pub use dataset::Dataset;

pub mod english_analyzer;
pub use english_analyzer::EnglishAnalyzer;

pub mod error;
pub use error::Error;

pub mod korean_analyzer;
pub use korean_analyzer::KoreanAnalyzer;

pub mod korean_morpheme;
pub use korean_morpheme::{KoreanMorpheme, KoreanWordClass};

pub mod language;
pub use language::Language;

pub mod occupancy_grid;
pub use occupancy_grid::OccupancyGrid;

pub mod pipeline;
pub use pipeline::{DatasetReport, Pipeline};

pub mod post;
pub use post::Post;

pub mod stop_words;
pub use stop_words::StopWords;

pub mod text_analyzer;
pub use text_analyzer::TextAnalyzer;

pub mod word_cloud;
pub use word_cloud::WordCloud;

pub mod word_cloud_layout;
pub use word_cloud_layout::{PlacedWord, WordCloudLayout, WordMeasurer};
