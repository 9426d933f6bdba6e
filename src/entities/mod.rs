pub mod communities;
pub mod conversations;
pub mod messages;
pub mod sessions;
pub mod transactions;
