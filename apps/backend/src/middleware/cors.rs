use actix_cors::Cors;
use actix_web::http::header;

/// Build CORS middleware from the already-validated origin list in `Config`.
///
/// Only the methods and headers the game API uses are allowed; `ETag` and
/// `x-trace-id` are exposed so browser clients can do conditional requests
/// and report errors.
pub fn cors_middleware(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::IF_MATCH,
            header::IF_NONE_MATCH,
        ])
        .expose_headers(vec![
            header::HeaderName::from_static("x-trace-id"),
            header::ETAG,
        ])
        .max_age(3600);

    for origin in allowed_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
