use serde::{Deserialize, Serialize};

/// Request payload for POST /ask.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// Employee question. Absent and `null` are both accepted and treated as
    /// an empty question.
    #[serde(default)]
    pub message: Option<String>,
}

impl AskRequest {
    /// Question to answer, or `None` when there is nothing but whitespace.
    pub fn question(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }
}

/// Response payload for POST /ask.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct AskResponse {
    pub response: String,
}

impl AskResponse {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}
