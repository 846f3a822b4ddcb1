use crate::constants::LIST_SEPARATOR;
use indexmap::IndexMap;
use std::borrow::Borrow;

/// Response headers in emission order.
pub type Headers = IndexMap<String, String>;

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::with_estimate(4)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    /// Sets `name`, replacing an earlier value while keeping its position.
    pub(crate) fn push(&mut self, name: &str, value: String) {
        self.headers.insert(name.to_string(), value);
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        for (name, value) in other.headers {
            self.headers.insert(name, value);
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

/// Joins a list-valued header with the comma-space separator.
pub fn join_values<S: Borrow<str>>(values: &[S]) -> String {
    values.join(LIST_SEPARATOR)
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
