use crate::constants::WILDCARD;
use indexmap::IndexSet;

/// Set of origins permitted to make cross-origin requests.
///
/// Membership is an exact, case-sensitive string comparison. Whether the list
/// contains the `*` wildcard is decided once, when the set is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllowedOrigins {
    origins: IndexSet<String>,
    allows_any: bool,
}

impl AllowedOrigins {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let origins: IndexSet<String> = values.into_iter().map(Into::into).collect();
        let allows_any = origins.contains(WILDCARD);
        Self {
            origins,
            allows_any,
        }
    }

    /// The wildcard list `["*"]`.
    pub fn any() -> Self {
        Self::list([WILDCARD])
    }

    pub fn allows_any(&self) -> bool {
        self.allows_any
    }

    pub fn allows(&self, origin: &str) -> bool {
        self.allows_any || self.origins.contains(origin)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.origins.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }
}

impl Default for AllowedOrigins {
    fn default() -> Self {
        Self::any()
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
