use crate::types::Token;
use regex::Regex;
use std::sync::LazyLock;

/// Rewrite rules applied in order. Each rule pads the pieces it separates with spaces so that
/// the final whitespace split yields Penn Treebank style tokens.
static REWRITE_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        // Sentence boundaries: a period followed by whitespace ends a sentence
        (r"([^.\s])(\.)(\s+)", "$1 $2$3"),
        // Starting quotes
        (r#"^""#, "``"),
        (r"(``)", " $1 "),
        (r#"([ (\[{<])("|'{2})"#, "$1 `` "),
        // Punctuation
        (r#"([^.])(\.)([\])}>"']*)\s*$"#, "$1 $2 $3 "),
        (r"([:,])([^\d])", " $1 $2"),
        (r"([:,])$", " $1 "),
        (r"\.{2,}", " $0 "),
        (r"[;@#$%&]", " $0 "),
        (r"[?!]", " $0 "),
        (r"([^'])' ", "$1 ' "),
        // Parens, brackets and double dashes
        (r"[\]\[(){}<>]", " $0 "),
        (r"--", " -- "),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (compile(pattern), replacement))
    .collect()
});

/// Rules that need the text padded with a leading and trailing space.
static PADDED_REWRITE_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        // Ending quotes
        (r#"""#, " '' "),
        (r"(\S)('')", "$1 $2 "),
        // Clitics
        (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "$1 $2 "),
        (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "$1 $2 "),
        // Fused contractions
        (r"(?i)\b(can)(not)\b", " $1 $2 "),
        (r"(?i)\b(d)('ye)\b", " $1 $2 "),
        (r"(?i)\b(gim)(me)\b", " $1 $2 "),
        (r"(?i)\b(gon)(na)\b", " $1 $2 "),
        (r"(?i)\b(got)(ta)\b", " $1 $2 "),
        (r"(?i)\b(lem)(me)\b", " $1 $2 "),
        (r"(?i)\b(more)('n)\b", " $1 $2 "),
        (r"(?i)\b(wan)(na)\s", " $1 $2 "),
        (r"(?i) ('t)(is)\b", " $1 $2 "),
        (r"(?i) ('t)(was)\b", " $1 $2 "),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (compile(pattern), replacement))
    .collect()
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("Invalid tokenizer rule {}: {}", pattern, err))
}

/// Splits text into word tokens following Penn Treebank conventions.
///
/// Punctuation, brackets and quotes become separate tokens, clitics are split from their host
/// word (`don't` -> `do`, `n't`) and a period is split from the word ending a sentence.
/// Hyphenated and dotted words (`e-mail`, `t.co`) are kept intact.
///
/// Note: This does not modify the case of the text.
pub fn word_tokenize(text: &str) -> Vec<Token> {
    let mut text = text.to_string();

    for (pattern, replacement) in REWRITE_RULES.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }

    text = format!(" {} ", text);

    for (pattern, replacement) in PADDED_REWRITE_RULES.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }

    text.split_whitespace().map(|token| token.to_string()).collect()
}
