use regex::Regex;
use std::sync::LazyLock;

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence pattern is valid"));

#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub tokens: Vec<String>,
    pub word_count: usize,
    pub sentence_count: usize,
}

pub struct Tokenizer;

impl Tokenizer {
    const MAX_KEY_POINTS: usize = 10;

    pub fn tokenize(input: &str) -> TokenInfo {
        let tokens: Vec<String> = input
            .split_whitespace()
            .map(|token| token.to_lowercase())
            .collect();

        let sentence_count = Self::sentences(input)
            .filter(|s| !s.trim().is_empty())
            .count()
            .max(1);

        TokenInfo {
            word_count: tokens.len(),
            sentence_count,
            tokens,
        }
    }

    /// Raw fragments between runs of `.`, `!` and `?`.
    pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
        SENTENCE_END.split(text)
    }

    /// Sentences longer than 20 characters, at most ten.
    pub fn key_points(text: &str) -> Vec<String> {
        Self::sentences(text)
            .map(str::trim)
            .filter(|s| s.chars().count() > 20)
            .take(Self::MAX_KEY_POINTS)
            .map(str::to_string)
            .collect()
    }

    /// Sentences longer than 10 characters holding 5 to 30 words, at most ten.
    pub fn document_key_points(text: &str) -> Vec<String> {
        Self::sentences(text)
            .map(str::trim)
            .filter(|s| s.chars().count() > 10)
            .filter(|s| (5..=30).contains(&s.split_whitespace().count()))
            .take(Self::MAX_KEY_POINTS)
            .map(str::to_string)
            .collect()
    }
}
