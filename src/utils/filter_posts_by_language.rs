use crate::models::{Language, Post};
use crate::types::PostText;
use crate::Error;

/// Collects the `text` of every post whose `lang` equals the language code exactly.
///
/// Every record must carry a string `lang`; matching records must also carry a string `text`.
/// The first violation aborts with `Error::SchemaError`.
pub fn filter_posts_by_language(posts: &[Post], language: Language) -> Result<Vec<PostText>, Error> {
    let mut texts = Vec::new();

    for post in posts {
        if post.lang()? == language.code() {
            texts.push(post.text()?.to_string());
        }
    }

    Ok(texts)
}
