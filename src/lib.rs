pub mod client;
pub mod database;
pub mod handlers;
pub mod models;
pub mod utils;
