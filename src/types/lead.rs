use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;
use validator::Validate;

/// Industry categories offered by the capture form. Closed list; anything
/// else is rejected at deserialization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Technology,
    Healthcare,
    Finance,
    Retail,
    Manufacturing,
    Education,
    Other,
}

#[derive(Debug, ThisError)]
#[error("unknown industry: {0}")]
pub struct UnknownIndustry(pub String);

impl Industry {
    pub const ALL: [Industry; 7] = [
        Industry::Technology,
        Industry::Healthcare,
        Industry::Finance,
        Industry::Retail,
        Industry::Manufacturing,
        Industry::Education,
        Industry::Other,
    ];

    /// Wire/storage form, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Technology => "technology",
            Industry::Healthcare => "healthcare",
            Industry::Finance => "finance",
            Industry::Retail => "retail",
            Industry::Manufacturing => "manufacturing",
            Industry::Education => "education",
            Industry::Other => "other",
        }
    }

    /// Human-readable form used in generated email copy.
    pub fn label(&self) -> &'static str {
        match self {
            Industry::Technology => "Technology",
            Industry::Healthcare => "Healthcare",
            Industry::Finance => "Finance",
            Industry::Retail => "Retail",
            Industry::Manufacturing => "Manufacturing",
            Industry::Education => "Education",
            Industry::Other => "Other",
        }
    }
}

impl std::str::FromStr for Industry {
    type Err = UnknownIndustry;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Industry::ALL
            .iter()
            .copied()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| UnknownIndustry(s.to_string()))
    }
}

/// Payload posted by the capture form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LeadSubmission {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(email(message = "is not a valid address"))]
    pub email: String,
    pub industry: Industry,
    /// Client-side submission timestamp; server time is used when absent.
    pub submitted_at: Option<DateTime<Utc>>,
    /// Opaque analytics correlation id, passed through untouched.
    pub session_id: Option<String>,
}

impl LeadSubmission {
    /// Trim user-entered fields before validation; blank session ids
    /// collapse to None.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_string();
        if let Some(sid) = self.session_id.take() {
            let sid = sid.trim();
            if !sid.is_empty() {
                self.session_id = Some(sid.to_string());
            }
        }
        self
    }
}

/// Response body for an accepted submission.
#[derive(Debug, Clone, Serialize)]
pub struct LeadAccepted {
    pub id: uuid::Uuid,
    pub status: &'static str,
}
