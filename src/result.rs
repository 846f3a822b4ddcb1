use crate::constants::status;
use crate::headers::Headers;
use thiserror::Error;

/// Overall decision returned by the policy engine.
#[derive(Debug, Clone)]
pub enum CorsDecision {
    /// Preflight passed: answer with the headers and a `204` without running
    /// the route handler.
    PreflightAccepted { headers: Headers },
    PreflightRejected(Rejection),
    /// Actual request passed: add the headers and let the pipeline continue.
    SimpleAccepted { headers: Headers },
    SimpleRejected(Rejection),
    /// No `Origin` header, the request is not cross-origin.
    NotApplicable,
}

impl CorsDecision {
    pub fn headers(&self) -> Option<&Headers> {
        match self {
            Self::PreflightAccepted { headers } | Self::SimpleAccepted { headers } => Some(headers),
            Self::PreflightRejected(rejection) | Self::SimpleRejected(rejection) => {
                Some(&rejection.headers)
            }
            Self::NotApplicable => None,
        }
    }
}

/// A refused request together with the headers decided before the refusal.
#[derive(Debug, Clone)]
pub struct Rejection {
    pub headers: Headers,
    pub reason: CorsError,
}

/// Reasons a cross-origin request is refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CorsError {
    #[error("origin '{origin}' is not allowed")]
    OriginNotAllowed { origin: String },
    #[error("method '{requested_method}' is not allowed")]
    MethodNotAllowed { requested_method: String },
    #[error("headers '{requested_headers}' are not allowed")]
    HeadersNotAllowed { requested_headers: String },
}

impl CorsError {
    /// Stable machine-readable code for the failure.
    pub fn code(&self) -> &'static str {
        match self {
            Self::OriginNotAllowed { .. } => "ORIGIN_NOT_ALLOWED",
            Self::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
            Self::HeadersNotAllowed { .. } => "HEADERS_NOT_ALLOWED",
        }
    }

    pub fn status(&self) -> u16 {
        status::FORBIDDEN
    }
}

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;
