pub mod communities;
pub mod conversations;
pub mod sessions;
