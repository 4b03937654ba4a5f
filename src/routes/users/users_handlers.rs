use actix_web::{web, HttpResponse};
use log::info;

use super::users_models::CreateUserRequest;
use crate::error::ApiError;
use crate::models::user::NewUser;
use crate::store::UserStore;

// List every user row
pub async fn list_users(store: web::Data<dyn UserStore>) -> Result<HttpResponse, ApiError> {
    info!("Received request to list users");
    let users = store.list_users().await?;

    info!("Returning {} users", users.len());
    Ok(HttpResponse::Ok().json(users))
}

// Insert a user and return the stored row
pub async fn create_user(
    store: web::Data<dyn UserStore>,
    req: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let new_user = NewUser::from(req.into_inner());
    info!("Received request to create user: {}", new_user.username);

    let user = store.create_user(&new_user).await?;

    info!("User {} created with id {}", new_user.username, user.id);
    Ok(HttpResponse::Ok().json(user))
}

// Fetch a single user by id
pub async fn get_user(
    store: web::Data<dyn UserStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_user_id(&path)?;
    info!("Received request for user {}", id);

    match store.find_user(id).await? {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => Err(ApiError::NotFound(format!("User {} not found", id))),
    }
}

/// Parse the `{id}` path segment; anything other than a plain integer is rejected
/// before it can reach a query.
pub fn parse_user_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>()
        .map_err(|_| ApiError::Validation(format!("Invalid user id: {}", raw)))
}
