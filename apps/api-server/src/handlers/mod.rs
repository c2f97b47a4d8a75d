//! HTTP handlers and route configuration.

mod health;
mod users;

use actix_web::web;

use crate::middleware::error::{json_error_handler, path_error_handler};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/users")
                .route("", web::get().to(users::list_users))
                .route("", web::post().to(users::create_user))
                // Registered before "/{id}" so it is never read as an id.
                .route("/authenticate", web::post().to(users::authenticate))
                .route("/{id}", web::get().to(users::get_user))
                .route("/{id}", web::patch().to(users::patch_user))
                .route("/{id}", web::delete().to(users::delete_user)),
        );
}
