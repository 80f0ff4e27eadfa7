pub mod config;
pub mod database;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod probe;
pub mod repositories;
pub mod requests;
pub mod storage;
