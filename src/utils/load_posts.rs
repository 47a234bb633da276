use crate::models::Post;
use crate::Error;
use flate2::read::GzDecoder;
use log::{debug, info};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Loads post records from a JSON file containing an array of objects.
///
/// Files ending in `.gz` are decompressed before parsing.
///
/// # Errors
/// * `Error::FileNotFound` if the path does not exist.
/// * `Error::ParserError` if the content is not a JSON array of objects.
/// * `Error::IoError` for read or decompression failures.
pub fn load_posts(path: &Path) -> Result<Vec<Post>, Error> {
    if !path.is_file() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    info!("Loading posts from {}", path.display());

    let file = File::open(path)?;
    let mut reader: Box<dyn Read> = if is_gzipped(path) {
        Box::new(GzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    let mut json = String::new();
    reader.read_to_string(&mut json)?;

    let posts = parse_posts(&json)?;
    debug!("Loaded {} posts from {}", posts.len(), path.display());

    Ok(posts)
}

/// Parses post records from an in-memory JSON string.
pub fn parse_posts(json: &str) -> Result<Vec<Post>, Error> {
    let value: Value = serde_json::from_str(json)?;

    let records = match value {
        Value::Array(records) => records,
        other => {
            return Err(Error::ParserError(format!(
                "Expected a JSON array of post objects, found {}",
                json_type_name(&other)
            )))
        }
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| match record {
            Value::Object(fields) => Ok(Post::new(index, fields)),
            other => Err(Error::ParserError(format!(
                "Expected record {} to be an object, found {}",
                index,
                json_type_name(&other)
            ))),
        })
        .collect()
}

fn is_gzipped(path: &Path) -> bool {
    path.extension()
        .map_or(false, |extension| extension.eq_ignore_ascii_case("gz"))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_posts_keeps_records_unchanged() {
        let posts =
            parse_posts(r#"[{"text":"a","lang":"en","id":1},{"text":"b","lang":"ko"}]"#).unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].fields().get("id"), Some(&Value::from(1)));
        assert_eq!(posts[1].index(), 1);
        assert_eq!(posts[1].text().unwrap(), "b");
    }

    #[test]
    fn test_parse_posts_rejects_non_array() {
        assert!(matches!(
            parse_posts(r#"{"text":"a","lang":"en"}"#),
            Err(Error::ParserError(_))
        ));
    }

    #[test]
    fn test_parse_posts_rejects_non_object_records() {
        assert!(matches!(
            parse_posts(r#"[{"text":"a","lang":"en"}, "b"]"#),
            Err(Error::ParserError(_))
        ));
    }

    #[test]
    fn test_parse_posts_rejects_malformed_json() {
        assert!(matches!(parse_posts("[{"), Err(Error::ParserError(_))));
    }

    #[test]
    fn test_parse_posts_accepts_empty_array() {
        assert!(parse_posts("[]").unwrap().is_empty());
    }
}
