pub mod context;
pub mod cookies;
pub mod env;
pub mod error;
pub mod flash;
pub mod i18n;
pub mod init;
pub mod money;
pub mod paths;
pub mod redis_json;
pub mod redis_pool;
pub mod state;
