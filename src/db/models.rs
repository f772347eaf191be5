use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::lead::{Industry, LeadSubmission};

/// A lead ready to be inserted. The id is minted here; the server-side
/// timestamps come from the DDL defaults on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLead {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub industry: Industry,
    pub submitted_at: DateTime<Utc>,
    pub session_id: Option<String>,
}

impl NewLead {
    /// Expects an already-normalized, validated submission.
    pub fn from_submission(s: LeadSubmission) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: s.name,
            email: s.email,
            industry: s.industry,
            submitted_at: s.submitted_at.unwrap_or_else(Utc::now),
            session_id: s.session_id,
        }
    }
}

/// A stored lead row. Create-once; nothing in this application updates or
/// deletes rows after insert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub industry: Industry,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub submitted_at: DateTime<Utc>,
    pub session_id: Option<String>,
}
