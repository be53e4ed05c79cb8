use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod game;
pub mod health;
pub mod summary;

/// Register every route. Shared by `main.rs` and the integration tests so
/// both serve the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Root and health: /, /health
    health::configure_routes(cfg);

    // Live game: /api/game/**
    game::configure_routes(cfg);

    // Stateless summary: /api/summarize
    summary::configure_routes(cfg);

    // Anything else: Problem Details 404
    cfg.default_service(web::to(not_found));
}

async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(
        ErrorCode::NotFound,
        format!("No route for {} {}", req.method(), req.path()),
    ))
}
