use super::headers::header_value;
use cors_gate::{CorsDecision, CorsError, Headers};

pub fn assert_simple(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::SimpleAccepted { headers } => headers,
        other => panic!("expected simple decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::PreflightAccepted { headers } => headers,
        other => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_simple_rejected(decision: CorsDecision) -> (Headers, CorsError) {
    match decision {
        CorsDecision::SimpleRejected(rejection) => (rejection.headers, rejection.reason),
        other => panic!("expected simple rejection, got {:?}", other),
    }
}

pub fn assert_preflight_rejected(decision: CorsDecision) -> (Headers, CorsError) {
    match decision {
        CorsDecision::PreflightRejected(rejection) => (rejection.headers, rejection.reason),
        other => panic!("expected preflight rejection, got {:?}", other),
    }
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(
        header_value(headers, name),
        Some(expected),
        "header {name} mismatch",
    );
}
