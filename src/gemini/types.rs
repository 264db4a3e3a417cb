use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Text returned to the client when the upstream answer carries no text.
pub const FALLBACK_TEXT: &str = "Sorry, I couldn't generate a response.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl GenerateContentRequest {
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
        }
    }
}

/// Walks `candidates[0].content.parts[0].text`.
///
/// Any missing link, a non-string leaf or an empty string yields `None`;
/// a malformed answer is never an error here.
pub fn extract_text(response: &Value) -> Option<&str> {
    response
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
        .filter(|text| !text.is_empty())
}

/// Generated text, or [`FALLBACK_TEXT`] when the answer has none.
pub fn text_or_fallback(response: &Value) -> String {
    extract_text(response).unwrap_or(FALLBACK_TEXT).to_string()
}
