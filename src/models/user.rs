use sqlx::FromRow;
use serde::{Deserialize, Serialize};

// `username` and `bio` are nullable TEXT columns; NULL serializes as JSON null
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: Option<String>,
    pub bio: Option<String>,
}

// Column values for a row that storage has not assigned an id to yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub bio: String,
}
