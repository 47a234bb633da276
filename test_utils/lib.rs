use flate2::write::GzEncoder;
use flate2::Compression;
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;
use tweet_cloud::{load_posts, Post};
pub mod constants;
use constants::SAMPLE_POSTS_FILE_PATH;

/// Loads the shared fixture of mixed-language posts.
pub fn load_sample_posts() -> Vec<Post> {
    load_posts(&SAMPLE_POSTS_FILE_PATH).expect("Failed to load sample posts")
}

/// Builds a JSON array of posts from `(text, lang)` pairs.
pub fn posts_json(posts: &[(&str, &str)]) -> String {
    let records: Vec<_> = posts
        .iter()
        .map(|(text, lang)| json!({ "text": text, "lang": lang }))
        .collect();

    serde_json::Value::Array(records).to_string()
}

/// Writes JSON to a temporary `.json` file, deleted when the handle drops.
pub fn write_posts_file(json: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("Failed to create temp file");

    file.write_all(json.as_bytes())
        .expect("Failed to write temp file");

    file
}

/// Writes gzip-compressed JSON to a temporary `.json.gz` file.
pub fn write_gzipped_posts_file(json: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".json.gz")
        .tempfile()
        .expect("Failed to create temp file");

    let handle = file.reopen().expect("Failed to reopen temp file");
    let mut encoder = GzEncoder::new(handle, Compression::default());
    encoder
        .write_all(json.as_bytes())
        .expect("Failed to compress posts");
    encoder.finish().expect("Failed to finish gzip stream");

    file
}
