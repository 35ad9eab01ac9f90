//! Decoding of generation endpoint responses.
//!
//! The inference endpoint answers either with a batch (`[{"generated_text": ..}]`)
//! or a single object (`{"generated_text": ..}`). Both are accepted; anything
//! else is reported as [`GenerationError::UnrecognizedShape`].

use super::error::GenerationError;
use serde::Deserialize;
use tracing::debug;

#[derive(Deserialize, Debug)]
struct Generated {
    generated_text: String,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum InferenceResponse {
    Batch(Vec<Generated>),
    Single(Generated),
}

#[derive(Deserialize, Debug)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize, Debug)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Extracts text from a text-generation inference response body.
pub fn decode_inference(body: &[u8]) -> Result<String, GenerationError> {
    let parsed: InferenceResponse =
        serde_json::from_slice(body).map_err(|_| GenerationError::UnrecognizedShape)?;

    let text = match parsed {
        InferenceResponse::Batch(items) => {
            debug!(items = items.len(), "Decoded batch inference response");
            items
                .into_iter()
                .next()
                .map(|g| g.generated_text)
                .ok_or(GenerationError::UnrecognizedShape)?
        }
        InferenceResponse::Single(item) => item.generated_text,
    };

    non_empty(text)
}

/// Extracts the first choice of a chat-completion response body.
pub fn decode_chat_completion(body: &[u8]) -> Result<String, GenerationError> {
    let parsed: ChatCompletion =
        serde_json::from_slice(body).map_err(|_| GenerationError::UnrecognizedShape)?;

    let content = parsed
        .choices
        .into_iter()
        .next()
        .ok_or(GenerationError::UnrecognizedShape)?
        .message
        .content
        .unwrap_or_default();

    non_empty(content)
}

fn non_empty(text: String) -> Result<String, GenerationError> {
    if text.trim().is_empty() {
        Err(GenerationError::EmptyText)
    } else {
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_batch_shape() {
        let body = br#"[{"generated_text": "Photosynthesis converts light."}]"#;
        assert_eq!(
            decode_inference(body).unwrap(),
            "Photosynthesis converts light."
        );
    }

    #[test]
    fn accepts_single_object_shape() {
        let body = br#"{"generated_text": "Hello there"}"#;
        assert_eq!(decode_inference(body).unwrap(), "Hello there");
    }

    #[test]
    fn rejects_unknown_shapes() {
        assert!(matches!(
            decode_inference(br#"{"error": "Model is loading"}"#),
            Err(GenerationError::UnrecognizedShape)
        ));
        assert!(matches!(
            decode_inference(b"[]"),
            Err(GenerationError::UnrecognizedShape)
        ));
        assert!(matches!(
            decode_inference(b"not json"),
            Err(GenerationError::UnrecognizedShape)
        ));
    }

    #[test]
    fn blank_text_is_not_usable() {
        assert!(matches!(
            decode_inference(br#"[{"generated_text": "   "}]"#),
            Err(GenerationError::EmptyText)
        ));
    }

    #[test]
    fn chat_completion_first_choice() {
        let body = br#"{"choices": [{"message": {"role": "assistant", "content": "42"}}]}"#;
        assert_eq!(decode_chat_completion(body).unwrap(), "42");
        assert!(matches!(
            decode_chat_completion(br#"{"choices": []}"#),
            Err(GenerationError::UnrecognizedShape)
        ));
    }
}
