use actix_web::web;

use crate::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Health check
            .route("/health", web::get().to(health_check))
            // User routes
            .service(
                web::scope("/users")
                    // List all users
                    .route("", web::get().to(handlers::get_users))
                    // Create a user
                    .route("", web::post().to(handlers::create_user))
                    // Get specific user by ID
                    .route("/{id}", web::get().to(handlers::get_user))
                    // Delete user by ID
                    .route("/{id}", web::delete().to(handlers::delete_user)),
            ),
    );
}

async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(serde_json::json!({
        "status": "OK",
        "message": "Server is running"
    }))
}
