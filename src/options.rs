use std::time::Duration;

/// Caller-supplied CORS configuration.
///
/// `origins`, `methods`, `headers` and `max_age` may be left unset (`None`,
/// or a zero `max_age`) to take the value from the defaults during
/// resolution. An empty but present list is kept as is and allows nothing.
/// `expose_headers` and `credentials` are always used literally.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct CorsOptions {
    pub origins: Option<Vec<String>>,
    pub methods: Option<Vec<String>>,
    pub headers: Option<Vec<String>>,
    pub expose_headers: Vec<String>,
    pub credentials: bool,
    #[cfg_attr(feature = "serde", serde(with = "max_age_seconds"))]
    pub max_age: Option<Duration>,
}

impl CorsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origins = Some(collect(values));
        self
    }

    pub fn methods<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(collect(values));
        self
    }

    pub fn headers<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = Some(collect(values));
        self
    }

    pub fn expose_headers<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expose_headers = collect(values);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = enabled;
        self
    }

    pub fn max_age(mut self, value: Duration) -> Self {
        self.max_age = Some(value);
        self
    }

    /// Max age that counts as configured; zero is treated as unset.
    pub(crate) fn configured_max_age(&self) -> Option<Duration> {
        self.max_age.filter(|value| !value.is_zero())
    }
}

fn collect<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

/// `maxAge` is written as whole seconds in configuration files.
#[cfg(feature = "serde")]
mod max_age_seconds {
    use serde::{Deserialize, Deserializer};
    use std::time::Duration;

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seconds = Option::<u64>::deserialize(deserializer)?;
        Ok(seconds.map(Duration::from_secs))
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
