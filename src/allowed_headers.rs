use crate::constants::{LIST_SEPARATOR, header};
use crate::headers::join_values;
use std::collections::HashSet;

/// Request headers accepted on preflight and advertised in
/// `Access-Control-Allow-Headers`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AllowedHeaders(Vec<String>);

impl AllowedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(values.into_iter().map(Into::into).collect())
    }

    /// Checks an `Access-Control-Request-Headers` value against the list.
    ///
    /// The value is split on `", "` and every entry must match an allowed
    /// header exactly. A request naming more entries than the list holds is
    /// refused outright.
    pub fn allows_headers(&self, request_headers: &str) -> bool {
        let requested: Vec<&str> = request_headers.split(LIST_SEPARATOR).collect();
        if self.0.len() < requested.len() {
            return false;
        }

        let allowed: HashSet<&str> = self.0.iter().map(String::as_str).collect();
        requested.iter().all(|header| allowed.contains(header))
    }

    pub fn header_value(&self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(join_values(&self.0))
        }
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }
}

impl Default for AllowedHeaders {
    fn default() -> Self {
        Self::list([header::CONTENT_TYPE])
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
