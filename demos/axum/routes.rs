use axum::{
    extract::State,
    response::{Html, IntoResponse},
};

use crate::cors::AppState;

pub async fn greet(State(state): State<AppState>) -> impl IntoResponse {
    Html(format!(
        "<h1>{}</h1><p>Call this endpoint from another origin to see the CORS headers.</p>",
        state.greeting
    ))
}
