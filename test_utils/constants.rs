use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

pub static SAMPLE_POSTS_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files", "sample_posts.json"));

/// Latin-only font for rendering tests. Hangul draws as missing-glyph boxes.
pub static TEST_FONT_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files", "fonts", "DejaVuSansMono.ttf"));
