//! Task-local trace context for web requests.
//!
//! `RequestTrace` opens the scope; `AppError` reads it when rendering
//! Problem Details so the body and the `x-trace-id` header agree.
//! Part of the web boundary: domain and service code must not import it.

use std::cell::RefCell;

use tokio::task_local;

/// Request extension carrying the trace id assigned by `RequestTrace`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceId(pub String);

task_local! {
    static TRACE_ID: RefCell<Option<String>>;
}

/// Trace id of the current task, or "unknown" outside a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|cell| cell.borrow().clone())
        .ok()
        .flatten()
        .unwrap_or_else(|| "unknown".to_string())
}

/// Run `future` with `trace_id` installed as the task-local trace id.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(RefCell::new(Some(trace_id)), future).await
}
