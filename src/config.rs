use crate::models::{Language, PipelineConfig, WordCloudConfig};
use image::Rgb;

pub const DEFAULT_FONT_PATH: &str = "/System/Library/Fonts/Supplemental/AppleGothic.ttf";

#[cfg(feature = "embed-ko-dic")]
pub const DEFAULT_KOREAN_DICTIONARY_URI: &str = "embedded://ko-dic";

/// A lindera-format mecab-ko-dic directory; not shipped, see the README.
#[cfg(not(feature = "embed-ko-dic"))]
pub const DEFAULT_KOREAN_DICTIONARY_URI: &str = "resources/ko-dic";

pub const DEFAULT_OUTPUT_DIRECTORY: &str = "output";

pub const DEFAULT_TOP_N: usize = 300;

pub const DEFAULT_WORD_CLOUD_CONFIG: WordCloudConfig = WordCloudConfig {
    width: 800,
    height: 800,
    background_color: Rgb([255, 255, 255]),
    title_color: Rgb([0, 0, 0]),
    title_band_height: 48,
    title_font_size: 28.0,
    min_font_size: 10.0,
    max_font_size: None,
    font_step: 1.0,
    max_words: 200,
    relative_scaling: 0.5,
    prefer_horizontal: 0.9,
    margin: 2,
    grid_cell_size: 4,
    random_seed: None,
};

pub const DEFAULT_PIPELINE_CONFIG: PipelineConfig<'static> = PipelineConfig {
    languages: &[Language::English, Language::Korean],
    top_n: DEFAULT_TOP_N,
};
