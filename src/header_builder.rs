use crate::constants::header;
use crate::headers::HeaderCollection;
use crate::policy::CorsPolicy;

pub(crate) struct HeaderBuilder<'a> {
    policy: &'a CorsPolicy,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(policy: &'a CorsPolicy) -> Self {
        Self { policy }
    }

    /// Echoes the request origin, never the `*` wildcard.
    pub(crate) fn build_origin_header(&self, origin: &str) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(2);
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.to_string());
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        if self.policy.credentials {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true".to_string());
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        if let Some(value) = self.policy.methods.header_value() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_allowed_headers(&self) -> HeaderCollection {
        if let Some(value) = self.policy.headers.header_value() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
            headers
        } else {
            HeaderCollection::new()
        }
    }

    /// Exposed headers go out under `Access-Control-Allow-Headers`; existing
    /// clients read them from there.
    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        if let Some(value) = self.policy.expose_headers.header_value() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        if let Some(value) = self.policy.max_age_header_value() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_MAX_AGE, value);
            headers
        } else {
            HeaderCollection::new()
        }
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
