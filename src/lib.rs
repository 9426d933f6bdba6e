pub mod api;
pub mod common;
pub mod deploy;
pub mod entities;
pub mod models;
pub mod repositories;
pub mod settings;
pub mod usecases;
