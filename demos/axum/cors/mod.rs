use std::sync::Arc;
use std::time::Duration;

use cors_gate::{Cors, CorsOptions};

pub type SharedCors = Arc<Cors>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

pub fn build_state() -> AppState {
    let options = CorsOptions::new()
        .origins(["http://localhost:3000", "http://api.example.com"])
        .methods(["GET", "POST", "OPTIONS"])
        .headers(["Content-Type", "X-Requested-With", "X-Example-Trace"])
        .expose_headers(["X-Example-Trace"])
        .credentials(true)
        .max_age(Duration::from_secs(600));

    AppState {
        cors: Arc::new(Cors::new(options)),
        greeting: "Welcome to the Axum CORS example!",
    }
}

pub mod middleware;
