use actix_web::{web, App, HttpServer};
use bowling_backend::config::Config;
use bowling_backend::extractors::JsonLimit;
use bowling_backend::infra::state::build_state;
use bowling_backend::middleware::cors::cors_middleware;
use bowling_backend::middleware::request_trace::RequestTrace;
use bowling_backend::middleware::security_headers::SecurityHeaders;
use bowling_backend::middleware::structured_logger::StructuredLogger;
use bowling_backend::middleware::trace_span::TraceSpan;
use bowling_backend::routes;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or `set -a; . ./.env; set +a` locally).
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let app_state = match build_state().build() {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    info!(
        host = %config.host,
        port = config.port,
        origins = ?config.cors_allowed_origins,
        "starting bowling backend"
    );

    let data = web::Data::new(app_state);
    let json_limit = JsonLimit(config.max_json_payload_size);
    let origins = config.cors_allowed_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(StructuredLogger)
            .wrap(SecurityHeaders)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .app_data(json_limit)
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
