use crate::models::{OccupancyGrid, WordCloudConfig};
use crate::types::{Token, TokenFrequency, TokenFrequencyMap, TokenRef};
use crate::utils::most_common_tokens;
use image::Rgb;
use log::debug;
use rand::Rng;

/// Measures the pixel extent of a word drawn horizontally at a given font size.
pub trait WordMeasurer {
    fn measure(&self, word: &TokenRef, font_size: f32) -> (u32, u32);
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub token: Token,
    pub frequency: TokenFrequency,
    pub font_size: f32,
    /// Top-left corner of the word's box on the cloud canvas.
    pub x: u32,
    pub y: u32,
    /// Extent of the box as drawn (already swapped for vertical words).
    pub width: u32,
    pub height: u32,
    /// Rotated 90 degrees counter-clockwise.
    pub vertical: bool,
    pub color: Rgb<u8>,
}

/// Positions of every word that fit on the canvas, largest first.
#[derive(Debug, Clone, PartialEq)]
pub struct WordCloudLayout {
    pub width: u32,
    pub height: u32,
    pub words: Vec<PlacedWord>,
}

impl WordCloudLayout {
    /// Lays out the most frequent words.
    ///
    /// Font sizes follow the relative-scaling rule: each word's size is derived from the size of
    /// the previous word, scaled by the ratio of their frequencies. A word that fits nowhere is
    /// retried in the other orientation and then at decreasing sizes; once the size drops below
    /// `min_font_size` the layout stops.
    ///
    /// Without a `max_font_size` the starting size is estimated from a trial layout of the top
    /// two words.
    pub fn compute<M: WordMeasurer, R: Rng>(
        config: &WordCloudConfig,
        frequencies: &TokenFrequencyMap,
        measurer: &M,
        rng: &mut R,
    ) -> Self {
        let ranked = most_common_tokens(frequencies, config.max_words);

        let start_font_size = match config.max_font_size {
            Some(font_size) => font_size,
            None => Self::estimate_start_font_size(config, &ranked, measurer, rng),
        };

        Self::place_words(config, &ranked, start_font_size.round(), measurer, rng)
    }

    /// Harmonic mean of the sizes the top two words get when laid out alone.
    ///
    /// The trial starts at the canvas height. While the first word leaves no room for the
    /// second, the bound is halved and the trial repeated.
    fn estimate_start_font_size<M: WordMeasurer, R: Rng>(
        config: &WordCloudConfig,
        ranked: &[(Token, TokenFrequency)],
        measurer: &M,
        rng: &mut R,
    ) -> f32 {
        let mut bound = config.height as f32;
        if ranked.len() < 2 {
            return bound;
        }

        while bound >= config.min_font_size {
            let trial = Self::place_words(config, &ranked[..2], bound, measurer, rng);

            if let [first, second] = trial.words.as_slice() {
                let (a, b) = (first.font_size, second.font_size);
                debug!("Trial layout at bound {} placed sizes {} and {}", bound, a, b);
                return (2.0 * a * b / (a + b)).floor();
            }

            bound = (bound / 2.0).floor();
        }

        config.min_font_size
    }

    fn place_words<M: WordMeasurer, R: Rng>(
        config: &WordCloudConfig,
        ranked: &[(Token, TokenFrequency)],
        start_font_size: f32,
        measurer: &M,
        rng: &mut R,
    ) -> Self {
        let mut layout = Self {
            width: config.width,
            height: config.height,
            words: Vec::new(),
        };

        let max_frequency = match ranked.first() {
            Some((_, frequency)) if *frequency > 0 => *frequency as f32,
            _ => return layout,
        };

        let mut grid = OccupancyGrid::new(config.width, config.height, config.grid_cell_size);
        let mut font_size = start_font_size;
        let mut last_frequency = 1.0_f32;

        for (token, frequency) in ranked {
            let normalized_frequency = *frequency as f32 / max_frequency;
            if normalized_frequency <= 0.0 {
                continue;
            }

            if config.relative_scaling != 0.0 {
                font_size = ((config.relative_scaling * (normalized_frequency / last_frequency)
                    + (1.0 - config.relative_scaling))
                    * font_size)
                    .round();
            }

            let mut vertical = rng.gen::<f32>() >= config.prefer_horizontal;
            let mut tried_other_orientation = false;
            let mut placement = None;

            while font_size >= config.min_font_size {
                let (text_width, text_height) = measurer.measure(token, font_size);
                if text_width == 0 || text_height == 0 {
                    break;
                }

                let (width, height) = if vertical {
                    (text_height, text_width)
                } else {
                    (text_width, text_height)
                };

                let width_cells = grid.cells_for(width + config.margin);
                let height_cells = grid.cells_for(height + config.margin);

                if let Some((col, row)) = grid.sample_position(width_cells, height_cells, rng) {
                    grid.occupy(col, row, width_cells, height_cells);
                    placement = Some((col, row, width, height));
                    break;
                }

                if !tried_other_orientation && config.prefer_horizontal < 1.0 {
                    vertical = !vertical;
                    tried_other_orientation = true;
                } else {
                    font_size -= config.font_step;
                    vertical = false;
                }
            }

            if font_size < config.min_font_size {
                debug!("Canvas full after {} words", layout.words.len());
                break;
            }

            let Some((col, row, width, height)) = placement else {
                // Word has no drawable glyphs
                continue;
            };

            layout.words.push(PlacedWord {
                token: token.clone(),
                frequency: *frequency,
                font_size,
                x: col as u32 * grid.cell_size() + config.margin / 2,
                y: row as u32 * grid.cell_size() + config.margin / 2,
                width,
                height,
                vertical,
                color: random_color(rng),
            });

            last_frequency = normalized_frequency;
        }

        layout
    }
}

/// Random hue at 80% saturation and 50% lightness.
fn random_color<R: Rng>(rng: &mut R) -> Rgb<u8> {
    let hue = rng.gen_range(0.0..360.0_f32);
    hsl_to_rgb(hue, 0.8, 0.5)
}

fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Rgb<u8> {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());

    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let m = lightness - chroma / 2.0;
    let to_channel = |value: f32| ((value + m) * 255.0).round().clamp(0.0, 255.0) as u8;

    Rgb([to_channel(r), to_channel(g), to_channel(b)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_WORD_CLOUD_CONFIG;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Every character is a square of the font size.
    struct MonospaceMeasurer;

    impl WordMeasurer for MonospaceMeasurer {
        fn measure(&self, word: &TokenRef, font_size: f32) -> (u32, u32) {
            let size = font_size as u32;
            (word.chars().count() as u32 * size, size)
        }
    }

    fn frequencies(entries: &[(&str, usize)]) -> TokenFrequencyMap {
        entries
            .iter()
            .map(|(token, frequency)| (token.to_string(), *frequency))
            .collect()
    }

    fn overlaps(a: &PlacedWord, b: &PlacedWord) -> bool {
        a.x < b.x + b.width && b.x < a.x + a.width && a.y < b.y + b.height && b.y < a.y + a.height
    }

    #[test]
    fn test_words_do_not_overlap_and_stay_on_canvas() {
        let config = DEFAULT_WORD_CLOUD_CONFIG;
        let table = frequencies(&[
            ("game", 40),
            ("maplestori", 25),
            ("boss", 12),
            ("event", 9),
            ("게임", 7),
            ("좋다", 5),
            ("raid", 3),
            ("level", 1),
        ]);

        let mut rng = StdRng::seed_from_u64(42);
        let layout = WordCloudLayout::compute(&config, &table, &MonospaceMeasurer, &mut rng);

        assert_eq!(layout.words.len(), 8);
        for (i, a) in layout.words.iter().enumerate() {
            assert!(a.x + a.width <= config.width && a.y + a.height <= config.height);
            for b in &layout.words[i + 1..] {
                assert!(!overlaps(a, b), "{} overlaps {}", a.token, b.token);
            }
        }
    }

    #[test]
    fn test_font_sizes_do_not_grow_with_rank() {
        let config = DEFAULT_WORD_CLOUD_CONFIG;
        let table = frequencies(&[("a", 10), ("b", 10), ("c", 5), ("d", 2), ("e", 1)]);

        let mut rng = StdRng::seed_from_u64(1);
        let layout = WordCloudLayout::compute(&config, &table, &MonospaceMeasurer, &mut rng);

        let sizes: Vec<f32> = layout.words.iter().map(|word| word.font_size).collect();
        assert!(sizes.windows(2).all(|pair| pair[0] >= pair[1]), "{:?}", sizes);
        assert!(sizes.iter().all(|size| *size >= config.min_font_size));
    }

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let config = DEFAULT_WORD_CLOUD_CONFIG;
        let table = frequencies(&[("love", 3), ("game", 2), ("날씨", 1)]);

        let first = WordCloudLayout::compute(
            &config,
            &table,
            &MonospaceMeasurer,
            &mut StdRng::seed_from_u64(99),
        );
        let second = WordCloudLayout::compute(
            &config,
            &table,
            &MonospaceMeasurer,
            &mut StdRng::seed_from_u64(99),
        );

        assert_eq!(first, second);
    }

    #[test]
    fn test_respects_max_words() {
        let mut config = DEFAULT_WORD_CLOUD_CONFIG;
        config.max_words = 2;
        let table = frequencies(&[("a", 3), ("b", 2), ("c", 1)]);

        let layout = WordCloudLayout::compute(
            &config,
            &table,
            &MonospaceMeasurer,
            &mut StdRng::seed_from_u64(5),
        );

        assert_eq!(
            layout
                .words
                .iter()
                .map(|word| word.token.as_str())
                .collect::<Vec<_>>(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_top_word_leaves_room_for_the_rest() {
        let config = DEFAULT_WORD_CLOUD_CONFIG;
        let table = frequencies(&[("a", 3), ("b", 2), ("c", 1)]);

        let layout = WordCloudLayout::compute(
            &config,
            &table,
            &MonospaceMeasurer,
            &mut StdRng::seed_from_u64(11),
        );

        assert_eq!(layout.words.len(), 3);
        assert!(layout.words[0].font_size < config.height as f32 / 2.0);
    }

    #[test]
    fn test_single_word_starts_at_canvas_height() {
        let config = DEFAULT_WORD_CLOUD_CONFIG;
        let table = frequencies(&[("a", 1)]);

        let layout = WordCloudLayout::compute(
            &config,
            &table,
            &MonospaceMeasurer,
            &mut StdRng::seed_from_u64(3),
        );

        assert_eq!(layout.words.len(), 1);
        assert!(layout.words[0].font_size > config.height as f32 / 2.0);
    }

    #[test]
    fn test_fixed_max_font_size_skips_estimation() {
        let mut config = DEFAULT_WORD_CLOUD_CONFIG;
        config.max_font_size = Some(60.0);
        let table = frequencies(&[("ab", 2), ("cd", 1)]);

        let layout = WordCloudLayout::compute(
            &config,
            &table,
            &MonospaceMeasurer,
            &mut StdRng::seed_from_u64(4),
        );

        assert_eq!(layout.words[0].font_size, 60.0);
        assert_eq!(layout.words[1].font_size, 45.0);
    }

    #[test]
    fn test_empty_table_yields_empty_layout() {
        let layout = WordCloudLayout::compute(
            &DEFAULT_WORD_CLOUD_CONFIG,
            &TokenFrequencyMap::new(),
            &MonospaceMeasurer,
            &mut StdRng::seed_from_u64(0),
        );

        assert!(layout.words.is_empty());
    }

    #[test]
    fn test_hsl_primary_hues() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Rgb([255, 0, 0]));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), Rgb([0, 255, 0]));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), Rgb([0, 0, 255]));
    }
}
