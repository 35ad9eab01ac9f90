use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CleanerError {
    #[error("Input is empty after cleaning")]
    EmptyInput,
    #[error("Input exceeds maximum length: {0}")]
    TooLong(usize),
}

pub struct Cleaner;

impl Cleaner {
    const MAX_LENGTH: usize = 10000;

    /// Trims a chat message and joins its non-blank lines.
    pub fn clean(input: &str) -> Result<String, CleanerError> {
        let cleaned = input
            .trim()
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if cleaned.is_empty() {
            return Err(CleanerError::EmptyInput);
        }

        let len = cleaned.chars().count();
        if len > Self::MAX_LENGTH {
            return Err(CleanerError::TooLong(len));
        }

        Ok(cleaned)
    }

    /// Collapses every whitespace run into one space.
    pub fn normalize(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// First `max_chars` characters, never splitting a code point.
    pub fn truncate(text: &str, max_chars: usize) -> &str {
        match text.char_indices().nth(max_chars) {
            Some((idx, _)) => &text[..idx],
            None => text,
        }
    }

    /// Like [`Cleaner::truncate`], marking the cut with `...`.
    pub fn truncate_marked(text: &str, max_chars: usize) -> String {
        let cut = Self::truncate(text, max_chars);
        if cut.len() < text.len() {
            format!("{}...", cut)
        } else {
            text.to_string()
        }
    }
}
