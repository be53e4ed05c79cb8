use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::summary::{summarize, SummaryRequest};

/// POST /api/summarize
///
/// Stateless: summarizes whatever frames and scores the client sends.
async fn summarize_game(body: ValidatedJson<SummaryRequest>) -> Result<HttpResponse, AppError> {
    let response = summarize(&body)?;
    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/summarize").route(web::post().to(summarize_game)));
}
