/// Derives a file-name-safe slug from a dataset title.
///
/// Letters (of any script) and digits are lowercased and kept; runs of anything else collapse
/// into a single underscore.
///
/// # Example
/// ```
/// use tweet_cloud::slugify_title;
///
/// assert_eq!(slugify_title("MapleStory Tweets"), "maplestory_tweets");
/// assert_eq!(slugify_title("메이플 트윗!"), "메이플_트윗");
/// ```
pub fn slugify_title(title: &str) -> String {
    let mut slug = String::new();

    for c in title.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('_') {
            slug.push('_');
        }
    }

    let slug = slug.trim_end_matches('_');

    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug.to_string()
    }
}
