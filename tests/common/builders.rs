use super::exchange::MockExchange;
use cors_gate::constants::{header, method};
use cors_gate::{Cors, CorsDecision, CorsOptions, RequestContext};
use std::time::Duration;

#[derive(Default)]
pub struct CorsBuilder {
    options: CorsOptions,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.origins(origins);
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.methods(methods);
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.headers(headers);
        self
    }

    pub fn expose_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.expose_headers(headers);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.options = self.options.credentials(enabled);
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.options = self.options.max_age(Duration::from_secs(seconds));
        self
    }

    pub fn build(self) -> Cors {
        Cors::new(self.options)
    }
}

pub struct SimpleRequestBuilder {
    method: String,
    origin: Option<String>,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let ctx = RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: None,
            access_control_request_headers: None,
        };
        cors.check(&ctx)
    }

    pub fn exchange(self) -> MockExchange {
        let exchange = MockExchange::new(self.method);
        match self.origin {
            Some(origin) => exchange.with_header(header::ORIGIN, origin),
            None => exchange,
        }
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let ctx = RequestContext {
            method: method::OPTIONS,
            origin: self.origin.as_deref(),
            access_control_request_method: self.request_method.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
        };
        cors.check(&ctx)
    }

    pub fn exchange(self) -> MockExchange {
        let mut exchange = MockExchange::options();
        if let Some(origin) = self.origin {
            exchange = exchange.with_header(header::ORIGIN, origin);
        }
        if let Some(method) = self.request_method {
            exchange = exchange.with_header(header::ACCESS_CONTROL_REQUEST_METHOD, method);
        }
        if let Some(headers) = self.request_headers {
            exchange = exchange.with_header(header::ACCESS_CONTROL_REQUEST_HEADERS, headers);
        }
        exchange
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
