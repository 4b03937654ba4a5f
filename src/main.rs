use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};

use social_media_users::config::AppConfig;
use social_media_users::routes;
use social_media_users::store::{PgUserStore, UserStore};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let pg_store = PgUserStore::connect(&config.database_url, config.max_connections)
        .await
        .map_err(|e| {
            error!("Failed to create pool: {}", e);
            io::Error::from(e)
        })?;
    let store: Arc<dyn UserStore> = Arc::new(pg_store.clone());

    info!("Server running at http://{}", config.server_address);

    let result = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::from(store.clone()))
            .configure(routes::routes::users_configure)
    })
    .bind(&config.server_address)?
    .run()
    .await;

    pg_store.close().await;
    result
}
