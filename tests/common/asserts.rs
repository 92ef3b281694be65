use super::headers::vary_values;
use cors_gate::{CorsDecision, Headers};
use std::collections::HashSet;

pub fn assert_simple(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Simple(result) => result.headers,
        other => panic!("expected simple decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> (Headers, u16) {
    match decision {
        CorsDecision::Preflight(result) => (result.headers, result.status),
        other => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_vary_eq<const N: usize>(headers: &Headers, expected: [&str; N]) {
    let expected: HashSet<String> = expected.iter().map(|name| name.to_string()).collect();
    assert_eq!(vary_values(headers), expected);
}

pub fn assert_vary_contains(headers: &Headers, name: &str) {
    assert!(
        vary_values(headers).contains(name),
        "expected Vary to contain {name}, got {:?}",
        vary_values(headers)
    );
}

pub fn assert_vary_not_contains(headers: &Headers, name: &str) {
    assert!(
        !vary_values(headers).contains(name),
        "expected Vary to not contain {name}, got {:?}",
        vary_values(headers)
    );
}
