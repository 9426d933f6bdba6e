use crate::common::context::Context;
use crate::entities::conversations::{Conversation, Participant};

const READ_FIELDS: &str = "c.id, c.community_id, c.last_message_at";

/// Fetches a conversation only when `person_id` participates in it within the community.
pub async fn fetch_one_for_person<C: Context>(
    ctx: &C,
    conversation_id: i64,
    person_id: i64,
    community_id: i64,
) -> sqlx::Result<Option<Conversation>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM conversations c ",
        "INNER JOIN participations p ON p.conversation_id = c.id ",
        "WHERE c.id = ? AND c.community_id = ? AND p.person_id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(conversation_id)
        .bind(community_id)
        .bind(person_id)
        .fetch_optional(ctx.db())
        .await
}

pub async fn fetch_participants<C: Context>(
    ctx: &C,
    conversation_id: i64,
) -> sqlx::Result<Vec<Participant>> {
    const QUERY: &str = const_str::concat!(
        "SELECT p.person_id, people.username, people.given_name, people.family_name, ",
        "p.is_read, p.is_starter ",
        "FROM participations p INNER JOIN people ON people.id = p.person_id ",
        "WHERE p.conversation_id = ? ",
        "ORDER BY p.is_starter DESC, p.person_id"
    );
    sqlx::query_as(QUERY)
        .bind(conversation_id)
        .fetch_all(ctx.db())
        .await
}

pub async fn mark_as_read<C: Context>(
    ctx: &C,
    conversation_id: i64,
    person_id: i64,
) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "UPDATE participations SET is_read = TRUE ",
        "WHERE conversation_id = ? AND person_id = ?"
    );
    sqlx::query(QUERY)
        .bind(conversation_id)
        .bind(person_id)
        .execute(ctx.db())
        .await?;
    Ok(())
}
