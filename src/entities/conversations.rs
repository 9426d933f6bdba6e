use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Conversation {
    pub id: i64,
    pub community_id: i64,
    #[sqlx(default)]
    pub last_message_at: Option<DateTime<Utc>>,
}

/// A participation joined with the participating person.
#[derive(Debug, FromRow)]
pub struct Participant {
    pub person_id: i64,
    pub username: String,
    #[sqlx(default)]
    pub given_name: Option<String>,
    #[sqlx(default)]
    pub family_name: Option<String>,
    pub is_read: bool,
    pub is_starter: bool,
}
