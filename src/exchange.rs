use crate::context::RequestContext;
use crate::headers::Headers;

/// Per-request capability the host hands to [`crate::Cors::handle`].
///
/// One exchange wraps one inbound request and the response being built for
/// it. Header lookups are expected to be case-insensitive, as HTTP header
/// names are.
pub trait Exchange {
    fn method(&self) -> &str;

    /// Value of a request header, `None` when absent.
    fn request_header(&self, name: &str) -> Option<&str>;

    fn set_response_header(&mut self, name: &str, value: &str);

    fn set_status(&mut self, status: u16);

    fn set_body(&mut self, body: &str);

    /// Stops the pipeline; no later stage runs for this request.
    fn end(&mut self);

    fn request_context(&self) -> RequestContext<'_> {
        RequestContext::from_lookup(self.method(), |name| self.request_header(name))
    }
}

pub(crate) fn apply_headers<E: Exchange + ?Sized>(exchange: &mut E, headers: &Headers) {
    for (name, value) in headers {
        exchange.set_response_header(name, value);
    }
}

#[cfg(test)]
#[path = "exchange_test.rs"]
mod exchange_test;
