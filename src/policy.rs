use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::exposed_headers::ExposedHeaders;
use crate::options::CorsOptions;
use crate::origin::AllowedOrigins;
use std::time::Duration;

const DEFAULT_MAX_AGE: Duration = Duration::from_secs(60 * 60);

/// Fully resolved CORS policy used for every request on one [`crate::Cors`].
///
/// Built once by [`CorsPolicy::resolve`] and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsPolicy {
    pub origins: AllowedOrigins,
    pub methods: AllowedMethods,
    pub headers: AllowedHeaders,
    pub expose_headers: ExposedHeaders,
    pub credentials: bool,
    pub max_age: Duration,
}

impl CorsPolicy {
    /// Fills every unset field of `options` from `defaults`.
    ///
    /// Lists are taken whole: a caller list is never merged with the default
    /// one. `expose_headers` and `credentials` always come from `options`.
    pub fn resolve(options: CorsOptions, defaults: &CorsPolicy) -> Self {
        let max_age = options.configured_max_age().unwrap_or(defaults.max_age);
        let CorsOptions {
            origins,
            methods,
            headers,
            expose_headers,
            credentials,
            ..
        } = options;

        Self {
            origins: origins
                .map(AllowedOrigins::list)
                .unwrap_or_else(|| defaults.origins.clone()),
            methods: methods
                .map(AllowedMethods::list)
                .unwrap_or_else(|| defaults.methods.clone()),
            headers: headers
                .map(AllowedHeaders::list)
                .unwrap_or_else(|| defaults.headers.clone()),
            expose_headers: ExposedHeaders::list(expose_headers),
            credentials,
            max_age,
        }
    }

    /// `Access-Control-Max-Age` value in whole seconds, `None` for a zero
    /// duration. Sub-second durations round down to `"0"`.
    pub fn max_age_header_value(&self) -> Option<String> {
        if self.max_age.is_zero() {
            None
        } else {
            Some(self.max_age.as_secs().to_string())
        }
    }
}

impl Default for CorsPolicy {
    /// Any origin, the seven common methods, `Content-Type`, no credentials
    /// and a one hour preflight cache.
    fn default() -> Self {
        Self {
            origins: AllowedOrigins::default(),
            methods: AllowedMethods::default(),
            headers: AllowedHeaders::default(),
            expose_headers: ExposedHeaders::default(),
            credentials: false,
            max_age: DEFAULT_MAX_AGE,
        }
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
