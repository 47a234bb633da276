use crate::models::Language;
use image::Rgb;

#[derive(Debug, Clone)]
pub struct WordCloudConfig {
    pub width: u32,
    pub height: u32,
    pub background_color: Rgb<u8>,
    pub title_color: Rgb<u8>,
    /// Height of the band above the cloud holding the title. Zero disables the title.
    pub title_band_height: u32,
    pub title_font_size: f32,
    pub min_font_size: f32,
    /// Size of the most frequent word. `None` estimates it from a trial layout of the top two.
    pub max_font_size: Option<f32>,
    pub font_step: f32,
    pub max_words: usize,
    /// Blend between rank-based (0.0) and frequency-proportional (1.0) font sizing.
    pub relative_scaling: f32,
    /// Probability of laying a word out horizontally.
    pub prefer_horizontal: f32,
    pub margin: u32,
    /// Resolution of the occupancy grid, in pixels.
    pub grid_cell_size: u32,
    /// Fixed seed for placement and colors. `None` draws a fresh seed per render.
    pub random_seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct PipelineConfig<'a> {
    pub languages: &'a [Language],
    pub top_n: usize,
}
