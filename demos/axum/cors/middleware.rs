use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use cors_gate::constants::header;
use cors_gate::{CorsDecision, Headers, RequestContext, RequestHeaders};

use super::AppState;

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().as_str().to_string();
    let request_headers = collect_headers(request.headers());

    let decision = {
        let context = RequestContext {
            method: &method,
            headers: &request_headers,
            server_origin: state.server_origin,
        };
        state.cors.evaluate(&context)
    };

    match decision {
        CorsDecision::Preflight(result) => {
            let status = StatusCode::from_u16(result.status).unwrap_or(StatusCode::NO_CONTENT);
            let mut response = Response::builder()
                .status(status)
                .body(Body::empty())
                .unwrap();
            apply_headers(response.headers_mut(), &result.headers);
            response
        }
        CorsDecision::Simple(result) => {
            let mut response = next.run(request).await;
            if !response
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            {
                apply_headers(response.headers_mut(), &result.headers);
            }
            response
        }
    }
}

fn collect_headers(map: &HeaderMap) -> RequestHeaders {
    let mut headers = RequestHeaders::new();
    for (name, value) in map {
        if let Ok(value) = value.to_str() {
            headers.insert(name.as_str(), value);
        }
    }
    headers
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if name.eq_ignore_ascii_case(header::VARY) {
            append_vary(map, value);
            continue;
        }
        if let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            map.insert(header_name, header_value);
        }
    }
}

fn append_vary(map: &mut HeaderMap, tokens: &str) {
    let merged = match map.get(header::VARY).and_then(|value| value.to_str().ok()) {
        Some(existing) => {
            let mut value = existing.to_string();
            for token in tokens.split(", ") {
                if !value.split(", ").any(|present| present == token) {
                    value.push_str(", ");
                    value.push_str(token);
                }
            }
            value
        }
        None => tokens.to_string(),
    };

    if let Ok(header_value) = HeaderValue::from_str(&merged) {
        map.insert(header::VARY, header_value);
    }
}
