use crate::constants::method;
use crate::headers::join_values;

/// Methods accepted on preflight and advertised in `Access-Control-Allow-Methods`.
///
/// Names are case-sensitive and kept in the order the caller declared them.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AllowedMethods(Vec<String>);

impl AllowedMethods {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(values.into_iter().map(Into::into).collect())
    }

    pub fn allows_method(&self, requested: &str) -> bool {
        self.0.iter().any(|allowed| allowed == requested)
    }

    /// Header value, or `None` when no method is configured.
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

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([
            method::GET,
            method::POST,
            method::PUT,
            method::DELETE,
            method::OPTIONS,
            method::HEAD,
            method::PATCH,
        ])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
