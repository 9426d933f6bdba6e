use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::communities::Community;
use crate::repositories::communities;

pub async fn fetch_one<C: Context>(ctx: &C, community_id: i64) -> ServiceResult<Community> {
    match communities::fetch_one(ctx, community_id).await {
        Ok(community) => Ok(Community::from(community)),
        Err(sqlx::Error::RowNotFound) => Err(AppError::CommunitiesNotFound),
        Err(e) => unexpected(e),
    }
}
