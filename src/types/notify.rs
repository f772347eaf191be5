use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::models::Lead;
use crate::types::lead::Industry;

/// Lead fields handed to the confirmation notifier. This is the payload of
/// the standalone function endpoint and the in-process call alike.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConfirmationRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(email(message = "is not a valid address"))]
    pub email: String,
    pub industry: Industry,
}

impl From<&Lead> for ConfirmationRequest {
    fn from(lead: &Lead) -> Self {
        Self {
            name: lead.name.clone(),
            email: lead.email.clone(),
            industry: lead.industry,
        }
    }
}

/// Response body of the function endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ConfirmationSent {
    pub status: &'static str,
    /// True when static fallback copy was substituted for AI output.
    pub fallback: bool,
}
