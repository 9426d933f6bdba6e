use crate::common::context::Context;
use crate::entities::communities::Community;

const TABLE_NAME: &str = "communities";
const READ_FIELDS: &str = "id, ident, default_locale";

pub async fn fetch_one<C: Context>(ctx: &C, community_id: i64) -> sqlx::Result<Community> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(community_id)
        .fetch_one(ctx.db())
        .await
}
