use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "scheduledDate")]
    pub scheduled_date: Option<DateTime<Utc>>,
}

/// Partial entry accepted by create and update. Timestamps left out are
/// re-derived on every write: `createdAt` falls back to the current time,
/// `scheduledDate` to absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryPayload {
    pub title: String,
    pub description: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "scheduledDate", default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<DateTime<Utc>>,
}

impl EntryPayload {
    /// Resolve the payload into a full entry under the given id, applying
    /// the write-time defaults.
    pub fn into_entry(self, id: String) -> Entry {
        Entry {
            id,
            title: self.title,
            description: self.description,
            created_at: self.created_at.unwrap_or_else(Utc::now),
            scheduled_date: self.scheduled_date,
        }
    }
}
