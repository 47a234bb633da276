use tweet_cloud::{
    tokenize_english, word_tokenize, EnglishAnalyzer, Language, StopWords, TextAnalyzer,
};

#[cfg(test)]
mod english_tokenizer_tests {
    use super::*;

    #[test]
    fn test_retweet_marker_is_removed_regardless_of_case() {
        assert_eq!(tokenize_english("RT rt Rt games").unwrap(), vec!["game"]);
    }

    #[test]
    fn test_output_is_lowercase_alphabetic_and_not_stop_words() {
        let stop_words = StopWords::for_language(Language::English);
        let analyzer = EnglishAnalyzer::new(&stop_words);

        let text = "RT @Nexon: The NEW Boss is LIVE!!! Don't miss it... 2x EXP until 9pm \
                    https://t.co/abc #MapleStory";
        let tokens = analyzer.analyze(text).unwrap();

        assert!(!tokens.is_empty());
        for token in &tokens {
            assert!(!token.is_empty());
            assert!(token.chars().all(|c| c.is_alphabetic()), "{}", token);
            assert_eq!(token, &token.to_lowercase());
            assert!(!stop_words.contains(token), "{}", token);
        }
    }

    #[test]
    fn test_stems_inflections_together() {
        assert_eq!(
            tokenize_english("playing played plays").unwrap(),
            vec!["play", "play", "play"]
        );
    }

    #[test]
    fn test_drops_numbers_and_dotted_words() {
        assert_eq!(
            tokenize_english("2024 t.co/x level 250").unwrap(),
            vec!["level"]
        );
    }

    #[test]
    fn test_custom_stop_words() {
        let stop_words = StopWords::for_language(Language::English).with_words(["game"]);
        let analyzer = EnglishAnalyzer::new(&stop_words);

        assert_eq!(analyzer.analyze("I love games").unwrap(), vec!["love", "game"]);
        assert_eq!(analyzer.analyze("game night").unwrap(), vec!["night"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(tokenize_english("").unwrap().is_empty());
    }
}

#[cfg(test)]
mod word_tokenize_tests {
    use super::*;

    #[test]
    fn test_sentence_final_period() {
        assert_eq!(word_tokenize("gg wp."), vec!["gg", "wp", "."]);
    }

    #[test]
    fn test_preserves_case() {
        assert_eq!(word_tokenize("New Boss"), vec!["New", "Boss"]);
    }
}
