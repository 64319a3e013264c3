//! Public types for the contact API
use serde::{Deserialize, Serialize};

/// Contact form submission as posted by the browser client. Unknown
/// fields are ignored; anything missing decodes to `None` so a
/// malformed body can be treated as an empty submission.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ContactRequest {
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    /// Honeypot field, must stay empty for a legitimate submission
    #[serde(rename = "_hp")]
    pub honeypot: Option<String>,
}

/// Envelope for every contact API response
#[derive(Debug, Deserialize, Serialize)]
pub struct ContactResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    pub fn accepted() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    pub fn rejected(error: &str) -> Self {
        Self {
            ok: false,
            error: Some(error.to_string()),
        }
    }
}
