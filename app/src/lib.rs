pub mod config;
pub mod core;
pub mod database;
pub mod handlers;
pub mod models;
pub mod repos;
pub mod routes;
pub mod utils;
