use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::sessions::Session;
use crate::repositories::sessions;
use uuid::Uuid;

pub async fn fetch_one<C: Context>(ctx: &C, session_id: Uuid) -> ServiceResult<Session> {
    match sessions::fetch_one(ctx, session_id).await {
        Ok(Some(session)) => Ok(Session::from(session)),
        Ok(None) => Err(AppError::SessionsNotFound),
        Err(e) => unexpected(e),
    }
}

pub async fn extend<C: Context>(ctx: &C, mut session: Session) -> ServiceResult<Session> {
    session.updated_at = chrono::Utc::now();
    match sessions::update(ctx, session.into()).await {
        Ok(session) => Ok(Session::from(session)),
        Err(e) => unexpected(e),
    }
}
