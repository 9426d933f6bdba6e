use crate::common::context::Context;
use crate::entities::transactions::Transaction;

pub async fn fetch_by_conversation<C: Context>(
    ctx: &C,
    conversation_id: i64,
) -> sqlx::Result<Option<Transaction>> {
    const QUERY: &str = const_str::concat!(
        "SELECT id, conversation_id, listing_title, current_state, ",
        "unit_price_cents, currency, quantity ",
        "FROM transactions WHERE conversation_id = ? ",
        "ORDER BY id DESC LIMIT 1"
    );
    sqlx::query_as(QUERY)
        .bind(conversation_id)
        .fetch_optional(ctx.db())
        .await
}
