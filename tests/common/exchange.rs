use cors_gate::Exchange;
use cors_gate::constants::method;

/// In-memory exchange recording everything the middleware writes.
#[derive(Debug, Clone)]
pub struct MockExchange {
    pub method: String,
    pub request_headers: Vec<(String, String)>,
    pub response_headers: Vec<(String, String)>,
    pub status: Option<u16>,
    pub body: Option<String>,
    pub ended: bool,
}

impl MockExchange {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            request_headers: Vec::new(),
            response_headers: Vec::new(),
            status: None,
            body: None,
            ended: false,
        }
    }

    pub fn get() -> Self {
        Self::new(method::GET)
    }

    pub fn options() -> Self {
        Self::new(method::OPTIONS)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request_headers.push((name.into(), value.into()));
        self
    }

    pub fn response_header(&self, name: &str) -> Option<&str> {
        self.response_headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn is_untouched(&self) -> bool {
        self.response_headers.is_empty()
            && self.status.is_none()
            && self.body.is_none()
            && !self.ended
    }
}

impl Exchange for MockExchange {
    fn method(&self) -> &str {
        &self.method
    }

    fn request_header(&self, name: &str) -> Option<&str> {
        self.request_headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn set_response_header(&mut self, name: &str, value: &str) {
        self.response_headers.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
        self.response_headers.push((name.to_string(), value.to_string()));
    }

    fn set_status(&mut self, status: u16) {
        self.status = Some(status);
    }

    fn set_body(&mut self, body: &str) {
        self.body = Some(body.to_string());
    }

    fn end(&mut self) {
        self.ended = true;
    }
}
