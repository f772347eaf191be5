use serde::{Deserialize, Serialize};

/// Request body for the transactional email-delivery API.
#[derive(Debug, Clone, Serialize)]
pub struct EmailRequest {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

/// Delivery receipt; providers return at least an opaque id on success.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmailReceipt {
    #[serde(default)]
    pub id: Option<String>,
}
