use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fallback id used when a client references a category that no longer
/// exists. Reserved; never assigned to a user-created category.
pub const UNKNOWN_CATEGORY_ID: &str = "unknown";

const UNKNOWN_CATEGORY_COLOR: &str = "#6B7280";

/// Groups clients for display and reporting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(name: impl Into<String>, color: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            color: color.into(),
            created_at: now,
        }
    }

    /// The neutral category resolved for dangling references.
    pub fn unknown(now: DateTime<Utc>) -> Self {
        Self {
            id: UNKNOWN_CATEGORY_ID.into(),
            name: "Unknown".into(),
            color: UNKNOWN_CATEGORY_COLOR.into(),
            created_at: now,
        }
    }
}
