use log::error;
use std::io::{self, Read};
use tweet_cloud::{count_token_frequencies, most_common_tokens, tokenize_english};

/// Reads English text from stdin and prints its token frequencies.
fn main() {
    env_logger::init();

    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read from stdin: {}", e);
        std::process::exit(1);
    }

    match tokenize_english(&input) {
        Ok(tokens) => {
            let frequencies = count_token_frequencies(&tokens);

            for (token, frequency) in most_common_tokens(&frequencies, frequencies.len()) {
                println!("{}: {}", token, frequency);
            }
        }
        Err(e) => {
            error!("Error tokenizing input: {}", e);
            std::process::exit(1);
        }
    }
}
