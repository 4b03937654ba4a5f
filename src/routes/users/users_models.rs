use serde::Deserialize;

use crate::models::user::NewUser;

// Create user request; the response is the stored `User` row
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub user: String,
    pub bio: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser {
            username: req.user,
            bio: req.bio,
        }
    }
}
