use actix_web::error::JsonPayloadError;
use actix_web::{web, HttpRequest};

use crate::error::ApiError;

use super::users::users_handlers;

// Body parse failures answer with the same JSON error shape as the handlers
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Validation(format!("Invalid request body: {}", err)).into()
}

pub fn users_configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/users")
                .route("", web::get().to(users_handlers::list_users))
                .route("", web::post().to(users_handlers::create_user))
                .route("/{id}", web::get().to(users_handlers::get_user)),
        );
}
