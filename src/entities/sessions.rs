use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize)]
pub struct Session {
    pub session_id: Uuid,
    pub person_id: i64,
    pub community_id: i64,
    pub username: String,
    pub updated_at: DateTime<Utc>,
}
