use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A work shift definition. Shift names are unique case-insensitively; the
/// import path skips rows that would collide instead of rejecting them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Shift {
    #[serde(skip_deserializing)]
    pub id: Option<String>,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
    pub in_grace_minutes: Option<i64>,
    pub out_grace_minutes: Option<i64>,
    pub start_reminder: Option<String>,
    pub end_reminder: Option<String>,
}

impl Shift {
    pub fn new(name: String, start_time: String, end_time: String) -> Self {
        Shift {
            id: Some(Uuid::new_v4().to_string()),
            name: name.trim().to_string(),
            start_time: start_time.trim().to_string(),
            end_time: end_time.trim().to_string(),
            status: "Active".to_string(),
            in_grace_minutes: None,
            out_grace_minutes: None,
            start_reminder: None,
            end_reminder: None,
        }
    }

    /// The uniqueness key: trimmed, case-folded name.
    pub fn name_key(&self) -> String {
        normalized_name(&self.name)
    }
}

pub fn normalized_name(name: &str) -> String {
    name.trim().to_lowercase()
}
