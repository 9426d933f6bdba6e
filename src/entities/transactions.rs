use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Transaction {
    pub id: i64,
    pub conversation_id: i64,
    pub listing_title: String,
    pub current_state: String,
    pub unit_price_cents: i64,
    pub currency: String,
    pub quantity: i32,
}
