use axum::{
    extract::State,
    http::HeaderName,
    response::{Html, IntoResponse},
};

use crate::cors::AppState;

static TRACE_HEADER: HeaderName = HeaderName::from_static("x-example-trace");

/// Answers cross-origin callers; `X-Example-Trace` is readable by scripts
/// because the policy lists it in `expose_headers`.
pub async fn greet(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(TRACE_HEADER.clone(), "greet")],
        Html(format!("<h1>{}</h1>", state.greeting)),
    )
}
