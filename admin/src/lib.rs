pub mod auth;
pub mod config;
pub mod index_store;
pub mod indexes;
pub mod seed;
pub mod store;
