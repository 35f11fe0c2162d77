use serde::{Deserialize, Serialize};

/// Body the backing API attaches to failed responses. Every field is
/// optional; non-JSON bodies are treated as an empty `ErrorBody`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorBody {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
        }
    }

    /// Parses a raw response body, falling back to an empty body on anything
    /// that is not a JSON object with a string `detail`.
    pub fn from_slice(raw: &[u8]) -> Self {
        serde_json::from_slice(raw).unwrap_or_default()
    }

    /// The detail text, if present and not blank.
    pub fn message(&self) -> Option<&str> {
        self.detail
            .as_deref()
            .map(str::trim)
            .filter(|detail| !detail.is_empty())
    }
}
