use std::sync::Arc;

use cors_gate::{Cors, CorsOptions, PatternError};

pub type SharedCors = Arc<Cors>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub server_origin: &'static str,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<AppState, PatternError> {
    let options = CorsOptions {
        allowed_origins: vec![
            "http://app.example.com".into(),
            "http://*.preview.example.com".into(),
        ],
        allowed_methods: vec!["GET".into(), "POST".into(), "OPTIONS".into()],
        allowed_headers: vec![
            "Content-Type".into(),
            "X-Requested-With".into(),
            "X-Example-Trace".into(),
        ],
        exposed_headers: vec!["X-Example-Trace".into()],
        max_age: Some(600),
        supports_credentials: true,
        ..CorsOptions::default()
    };

    let cors = Arc::new(Cors::new(options)?);

    Ok(AppState {
        cors,
        server_origin: "http://127.0.0.1:5001",
        greeting: "Welcome to the axum CORS example!",
    })
}

pub mod middleware;
