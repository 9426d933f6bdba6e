use crate::common::context::Context;
use crate::entities::messages::Message;
use chrono::Utc;

const TABLE_NAME: &str = "messages";
const READ_FIELDS: &str = "id, conversation_id, sender_id, content, created_at";

pub async fn fetch_for_conversation<C: Context>(
    ctx: &C,
    conversation_id: i64,
) -> sqlx::Result<Vec<Message>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE conversation_id = ? ORDER BY created_at ASC, id ASC"
    );
    sqlx::query_as(QUERY)
        .bind(conversation_id)
        .fetch_all(ctx.db())
        .await
}

/// Stores a message and moves the conversation's read state along with it:
/// the sender has read it, everyone else has not.
pub async fn create<C: Context>(
    ctx: &C,
    conversation_id: i64,
    sender_id: i64,
    content: &str,
) -> sqlx::Result<u64> {
    const INSERT_MESSAGE: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (conversation_id, sender_id, content, created_at) VALUES (?, ?, ?, ?)"
    );
    const UPDATE_SENDER: &str = const_str::concat!(
        "UPDATE participations SET is_read = TRUE, last_sent_at = ? ",
        "WHERE conversation_id = ? AND person_id = ?"
    );
    const UPDATE_RECIPIENTS: &str = const_str::concat!(
        "UPDATE participations SET is_read = FALSE, last_received_at = ? ",
        "WHERE conversation_id = ? AND person_id <> ?"
    );
    const UPDATE_CONVERSATION: &str = "UPDATE conversations SET last_message_at = ? WHERE id = ?";

    let now = Utc::now();
    let mut tx = ctx.db().begin().await?;
    let inserted = sqlx::query(INSERT_MESSAGE)
        .bind(conversation_id)
        .bind(sender_id)
        .bind(content)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    sqlx::query(UPDATE_SENDER)
        .bind(now)
        .bind(conversation_id)
        .bind(sender_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query(UPDATE_RECIPIENTS)
        .bind(now)
        .bind(conversation_id)
        .bind(sender_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query(UPDATE_CONVERSATION)
        .bind(now)
        .bind(conversation_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(inserted.last_insert_id())
}
