#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use bowling_backend::{build_state, AppState, Pins};
use serde_json::Value;

pub mod proptest_prelude;

// Logging is auto-installed for every test binary that declares `mod common;`
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Initialized Actix test service with the production middleware stack and
/// routes. Optional second argument overrides the JSON body limit.
#[macro_export]
macro_rules! test_app {
    ($state:expr) => {
        $crate::test_app!($state, bowling_backend::JsonLimit::default())
    };
    ($state:expr, $limit:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(bowling_backend::cors_middleware(
                    &bowling_backend::Config::default().cors_allowed_origins,
                ))
                .wrap(bowling_backend::StructuredLogger)
                .wrap(bowling_backend::SecurityHeaders)
                .wrap(bowling_backend::TraceSpan)
                .wrap(bowling_backend::RequestTrace)
                .app_data(actix_web::web::Data::new($state))
                .app_data($limit)
                .configure(bowling_backend::routes::configure),
        )
    };
}

/// AppState whose live game already holds `rolls`.
pub fn state_with(rolls: &[Pins]) -> AppState {
    build_state()
        .with_rolls(rolls.to_vec())
        .build()
        .expect("rolls should form a legal ledger")
}

pub async fn read_json<B: MessageBody>(resp: ServiceResponse<B>) -> Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).expect("response body should be JSON")
}

pub fn header<B>(resp: &ServiceResponse<B>, name: &str) -> Option<String> {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Frame-by-frame example game totalling 133.
pub const SAMPLE_133: [Pins; 19] = [1, 4, 4, 5, 6, 4, 5, 5, 10, 0, 1, 7, 3, 6, 4, 10, 2, 8, 6];
