//! Live game HTTP routes.

use actix_web::http::header::{ETAG, IF_MATCH, IF_NONE_MATCH};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::Deserialize;

use crate::domain::snapshot::GameSnapshot;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::ValidatedJson;
use crate::http::etag::{game_etag, if_none_match_hits, parse_game_version_from_etag};
use crate::services::game::GameService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct RollRequest {
    /// Raw pin count; range is checked by the domain.
    pub pins: i64,
}

/// Version named by an `If-Match` header, if the client sent one.
fn expected_version(http_req: &HttpRequest) -> Result<Option<u64>, AppError> {
    let Some(value) = http_req.headers().get(IF_MATCH) else {
        return Ok(None);
    };
    let raw = value.to_str().map_err(|_| {
        AppError::bad_request(
            ErrorCode::InvalidHeader,
            "If-Match header must be visible ASCII",
        )
    })?;
    parse_game_version_from_etag(raw).map(Some)
}

fn snapshot_response(snapshot: GameSnapshot) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((ETAG, game_etag(snapshot.version)))
        .json(snapshot)
}

/// GET /api/game
///
/// Returns the current snapshot with an ETag carrying the game version.
/// Supports `If-None-Match`: a matching version yields `304 Not Modified`.
async fn get_game(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let snapshot = GameService::from_state(&app_state).snapshot();

    if let Some(if_none_match) = http_req.headers().get(IF_NONE_MATCH) {
        if let Ok(client_etag) = if_none_match.to_str() {
            if if_none_match_hits(client_etag, snapshot.version) {
                return Ok(HttpResponse::build(StatusCode::NOT_MODIFIED)
                    .insert_header((ETAG, game_etag(snapshot.version)))
                    .finish());
            }
        }
    }

    Ok(snapshot_response(snapshot))
}

/// POST /api/game/rolls
///
/// Records one roll. An `If-Match` header makes the write conditional on the
/// game version.
async fn submit_roll(
    http_req: HttpRequest,
    body: ValidatedJson<RollRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let expected = expected_version(&http_req)?;
    let snapshot = GameService::from_state(&app_state).submit_roll(body.pins, expected)?;
    Ok(snapshot_response(snapshot))
}

/// POST /api/game/reset
async fn reset_game(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let expected = expected_version(&http_req)?;
    let snapshot = GameService::from_state(&app_state).reset(expected)?;
    Ok(snapshot_response(snapshot))
}

/// POST /api/game/summary
///
/// Summary of the live game; 409 until the game is over.
async fn game_summary(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let summary = GameService::from_state(&app_state).summary()?;
    Ok(HttpResponse::Ok().json(summary))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/game").route(web::get().to(get_game)));
    cfg.service(web::resource("/api/game/rolls").route(web::post().to(submit_roll)));
    cfg.service(web::resource("/api/game/reset").route(web::post().to(reset_game)));
    cfg.service(web::resource("/api/game/summary").route(web::post().to(game_summary)));
}
