use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum LeadError {
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("invalid or missing service key")]
    Unauthorized,

    #[error("Upstream error with status: {0}")]
    UpstreamStatus(StatusCode),
}

impl From<validator::ValidationErrors> for LeadError {
    fn from(e: validator::ValidationErrors) -> Self {
        let mut parts: Vec<String> = e
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| match &err.message {
                    Some(msg) => format!("{field} {msg}"),
                    None => format!("{field} is invalid"),
                })
            })
            .collect();
        // field_errors iterates a HashMap; sort for a stable message
        parts.sort();
        LeadError::Validation(parts.join("; "))
    }
}

impl IntoResponse for LeadError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            LeadError::Validation(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".to_string(),
                    message: msg,
                },
            ),
            LeadError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "UNAUTHORIZED".to_string(),
                    message: "Invalid or missing service key.".to_string(),
                },
            ),
            LeadError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                },
            ),
            LeadError::Reqwest(_) | LeadError::UrlParse(_) | LeadError::Json(_) => (
                StatusCode::BAD_GATEWAY,
                ApiErrorBody {
                    code: "BAD_GATEWAY".to_string(),
                    message: "Upstream service is unavailable.".to_string(),
                },
            ),
            LeadError::UpstreamStatus(code) => {
                let (err_code, msg) = match code {
                    StatusCode::TOO_MANY_REQUESTS => {
                        ("RATE_LIMIT", "Upstream rate limit exceeded.")
                    }
                    StatusCode::UNAUTHORIZED => ("UNAUTHORIZED", "Upstream authentication failed."),
                    StatusCode::FORBIDDEN => ("FORBIDDEN", "Upstream permission denied."),
                    StatusCode::NOT_FOUND => ("NOT_FOUND", "Upstream resource not found."),
                    _ => ("UPSTREAM_ERROR", "An upstream error occurred."),
                };

                (
                    code,
                    ApiErrorBody {
                        code: err_code.to_string(),
                        message: msg.to_string(),
                    },
                )
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::lead::{Industry, LeadSubmission};
    use validator::Validate;

    #[test]
    fn validation_errors_flatten_to_one_stable_message() {
        let s = LeadSubmission {
            name: String::new(),
            email: "nope".to_string(),
            industry: Industry::Other,
            submitted_at: None,
            session_id: None,
        };
        let err: LeadError = s.validate().unwrap_err().into();
        match err {
            LeadError::Validation(msg) => {
                assert_eq!(msg, "email is not a valid address; name must not be empty");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
