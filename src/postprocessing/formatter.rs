//! Cleans and trims the raw generated text.

pub fn clean(raw: &str) -> String {
    let trimmed = raw.trim();
    // Remove code-fence markers if the model wrapped the answer.
    trimmed
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
        .to_string()
}

/// Inference endpoints often echo the prompt ahead of the continuation.
pub fn strip_echo(raw: &str, prompt: &str) -> String {
    let body = raw.strip_prefix(prompt).unwrap_or(raw);
    clean(body)
}
