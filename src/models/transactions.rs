use crate::common::money::Money;
use crate::entities::transactions::Transaction as TransactionEntity;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct Transaction {
    pub transaction_id: i64,
    pub listing_title: String,
    pub state: String,
    pub quantity: i64,
    pub unit_price: Money,
}

#[derive(Debug, Serialize)]
pub struct TransactionView {
    pub id: i64,
    pub listing_title: String,
    pub state: String,
    pub quantity: i64,
    pub unit_price: String,
    pub total: Option<String>,
}

impl From<TransactionEntity> for Transaction {
    fn from(value: TransactionEntity) -> Self {
        Self {
            transaction_id: value.id,
            listing_title: value.listing_title,
            state: value.current_state,
            quantity: value.quantity.into(),
            unit_price: Money::new(value.unit_price_cents, value.currency),
        }
    }
}

impl Transaction {
    pub fn total(&self) -> Option<Money> {
        self.unit_price.times(self.quantity)
    }

    pub fn to_view(&self) -> TransactionView {
        TransactionView {
            id: self.transaction_id,
            listing_title: self.listing_title.clone(),
            state: self.state.clone(),
            quantity: self.quantity,
            unit_price: self.unit_price.humanized_with_symbol(),
            total: self.total().map(|total| total.humanized_with_symbol()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Transaction;
    use crate::common::money::Money;

    fn transaction(cents: i64, quantity: i64) -> Transaction {
        Transaction {
            transaction_id: 1,
            listing_title: "Canoe".to_owned(),
            state: "paid".to_owned(),
            quantity,
            unit_price: Money::new(cents, "EUR"),
        }
    }

    #[test]
    fn view_shows_total() {
        let view = transaction(1250, 4).to_view();
        assert_eq!(view.unit_price, "€12.50");
        assert_eq!(view.total.as_deref(), Some("€50"));
    }

    #[test]
    fn view_leaves_out_overflowing_total() {
        let view = transaction(i64::MAX, 2).to_view();
        assert_eq!(view.total, None);
    }
}
