use crate::entities::sessions::Session as SessionEntity;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Session {
    pub session_id: Uuid,
    pub person_id: i64,
    pub community_id: i64,
    pub username: String,
    pub updated_at: DateTime<Utc>,
}

impl From<SessionEntity> for Session {
    fn from(value: SessionEntity) -> Self {
        Self {
            session_id: value.session_id,
            person_id: value.person_id,
            community_id: value.community_id,
            username: value.username,
            updated_at: value.updated_at,
        }
    }
}

impl From<Session> for SessionEntity {
    fn from(value: Session) -> Self {
        Self {
            session_id: value.session_id,
            person_id: value.person_id,
            community_id: value.community_id,
            username: value.username,
            updated_at: value.updated_at,
        }
    }
}
