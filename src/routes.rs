pub mod routes;
pub mod users;
