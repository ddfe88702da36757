use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A LinkedIn contact the user reached out to. `message_sent` stores the
/// connection request once one has been generated for this person.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactRow {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub company: String,
    pub message_sent: Option<String>,
    pub created_at: DateTime<Utc>,
}
