pub mod count_token_frequencies;
pub use count_token_frequencies::count_token_frequencies;

pub mod filter_posts_by_language;
pub use filter_posts_by_language::filter_posts_by_language;

pub mod load_posts;
pub use load_posts::{load_posts, parse_posts};

pub mod merge_token_frequencies;
pub use merge_token_frequencies::merge_token_frequencies;

pub mod most_common_tokens;
pub use most_common_tokens::most_common_tokens;

pub mod slugify_title;
pub use slugify_title::slugify_title;

pub mod word_tokenize;
pub use word_tokenize::word_tokenize;

pub mod write_frequencies_csv;
pub use write_frequencies_csv::{write_frequencies_csv, write_frequencies_csv_file};
