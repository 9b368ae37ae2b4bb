pub mod config;
pub mod routes;
