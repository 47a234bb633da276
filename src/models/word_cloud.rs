use crate::models::{PlacedWord, WordCloudConfig, WordCloudLayout, WordMeasurer};
use crate::types::{TokenFrequencyMap, TokenRef};
use crate::Error;
use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::imageops::rotate270;
use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::Path;

/// Renders frequency tables as word-cloud images.
///
/// The font must cover every script that appears in the tokens (Latin and Hangul for the
/// default datasets); glyphs missing from the font are drawn as blanks.
pub struct WordCloud<'a> {
    config: &'a WordCloudConfig,
    font: FontVec,
}

impl<'a> WordCloud<'a> {
    /// # Errors
    /// * `Error::ResourceError` if the font file is missing or is not a usable font.
    pub fn from_font_path(config: &'a WordCloudConfig, font_path: &Path) -> Result<Self, Error> {
        if !font_path.is_file() {
            return Err(Error::ResourceError(format!(
                "Font not found at {}",
                font_path.display()
            )));
        }

        let bytes = fs::read(font_path)?;
        Self::from_font_bytes(config, bytes)
    }

    pub fn from_font_bytes(config: &'a WordCloudConfig, bytes: Vec<u8>) -> Result<Self, Error> {
        let font = FontVec::try_from_vec(bytes)
            .map_err(|err| Error::ResourceError(format!("Invalid font data: {}", err)))?;

        Ok(Self { config, font })
    }

    /// Computes word positions. A fixed `random_seed` in the config makes this deterministic.
    pub fn layout(&self, frequencies: &TokenFrequencyMap) -> WordCloudLayout {
        let mut rng = match self.config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        WordCloudLayout::compute(self.config, frequencies, self, &mut rng)
    }

    /// Renders the cloud with the title drawn in a band above it.
    pub fn render(&self, frequencies: &TokenFrequencyMap, title: &str) -> RgbImage {
        let layout = self.layout(frequencies);
        debug!("Placed {} of {} words", layout.words.len(), frequencies.len());

        self.render_layout(&layout, title)
    }

    pub fn render_layout(&self, layout: &WordCloudLayout, title: &str) -> RgbImage {
        let band_height = self.config.title_band_height;
        let mut canvas = RgbImage::from_pixel(
            layout.width,
            layout.height + band_height,
            self.config.background_color,
        );

        if band_height > 0 && !title.is_empty() {
            let scale = PxScale::from(self.config.title_font_size);
            let (title_width, title_height) = self.measure(title, self.config.title_font_size);
            let x = (layout.width as i32 - title_width as i32) / 2;
            let y = (band_height as i32 - title_height as i32) / 2;

            draw_text_mut(
                &mut canvas,
                self.config.title_color,
                x.max(0),
                y.max(0),
                scale,
                &self.font,
                title,
            );
        }

        for word in &layout.words {
            self.draw_word(&mut canvas, word, band_height);
        }

        canvas
    }

    /// Renders and writes the image. The format follows the file extension.
    pub fn render_to_file(
        &self,
        frequencies: &TokenFrequencyMap,
        title: &str,
        path: &Path,
    ) -> Result<(), Error> {
        let image = self.render(frequencies, title);
        image.save(path)?;

        info!("Saved word cloud \"{}\" to {}", title, path.display());

        Ok(())
    }

    fn draw_word(&self, canvas: &mut RgbImage, word: &PlacedWord, y_offset: u32) {
        let mut mask = self.word_mask(&word.token, word.font_size);
        if word.vertical {
            mask = rotate270(&mask);
        }

        for (mask_x, mask_y, Luma([coverage])) in mask.enumerate_pixels() {
            if *coverage == 0 {
                continue;
            }

            let x = word.x + mask_x;
            let y = word.y + mask_y + y_offset;
            if x >= canvas.width() || y >= canvas.height() {
                continue;
            }

            let alpha = *coverage as f32 / 255.0;
            let background = *canvas.get_pixel(x, y);
            canvas.put_pixel(x, y, blend(background, word.color, alpha));
        }
    }

    /// Horizontal grayscale coverage mask of a word.
    fn word_mask(&self, word: &TokenRef, font_size: f32) -> GrayImage {
        let (width, height) = self.measure(word, font_size);
        let mut mask = GrayImage::new(width.max(1), height.max(1));

        draw_text_mut(
            &mut mask,
            Luma([255]),
            0,
            0,
            PxScale::from(font_size),
            &self.font,
            word,
        );

        mask
    }
}

impl WordMeasurer for WordCloud<'_> {
    /// Advance width of the word and the full line height (ascent to descent), so that text
    /// drawn at the box origin stays inside the box.
    fn measure(&self, word: &TokenRef, font_size: f32) -> (u32, u32) {
        let scale = PxScale::from(font_size);
        let (width, _) = text_size(scale, &self.font, word);
        let height = self.font.as_scaled(scale).height().ceil() as u32;

        (width, height)
    }
}

fn blend(background: Rgb<u8>, foreground: Rgb<u8>, alpha: f32) -> Rgb<u8> {
    let mix = |b: u8, f: u8| (b as f32 * (1.0 - alpha) + f as f32 * alpha).round() as u8;

    Rgb([
        mix(background[0], foreground[0]),
        mix(background[1], foreground[1]),
        mix(background[2], foreground[2]),
    ])
}
