use crate::constants::{header, method};

/// Borrowed view of the request fields the CORS decision reads.
///
/// Header values that are present but empty are treated the same as absent
/// ones, matching hosts that report a missing header as an empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    /// Collects the request fields through a header lookup function.
    pub fn from_lookup<F>(method: &'a str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        Self {
            method,
            origin: lookup(header::ORIGIN),
            access_control_request_method: lookup(header::ACCESS_CONTROL_REQUEST_METHOD),
            access_control_request_headers: lookup(header::ACCESS_CONTROL_REQUEST_HEADERS),
        }
    }

    pub fn origin(&self) -> Option<&'a str> {
        non_empty(self.origin)
    }

    pub fn requested_method(&self) -> Option<&'a str> {
        non_empty(self.access_control_request_method)
    }

    pub fn requested_headers(&self) -> Option<&'a str> {
        non_empty(self.access_control_request_headers)
    }

    pub fn is_preflight(&self) -> bool {
        self.method == method::OPTIONS
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
