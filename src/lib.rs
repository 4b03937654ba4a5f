//! HTTP service exposing list, create and get-by-id over a PostgreSQL `users` table.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
