use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use cors_gate::Exchange;

use super::AppState;

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let output = {
        let mut exchange = AxumExchange::new(&request);
        if let Err(err) = state.cors.handle(&mut exchange) {
            tracing::warn!(code = err.code(), %err, "cors request refused");
            exchange.set_body(&err.to_string());
        }
        exchange.finish()
    };

    if output.ended {
        let mut response = Response::new(Body::from(output.body.unwrap_or_default()));
        *response.status_mut() = output.status.unwrap_or(StatusCode::NO_CONTENT);
        response.headers_mut().extend(output.headers);
        return response;
    }

    let mut response = next.run(request).await;
    response.headers_mut().extend(output.headers);
    response
}

/// What the middleware decided for one request, detached from the request.
struct ExchangeOutput {
    headers: HeaderMap,
    status: Option<StatusCode>,
    body: Option<String>,
    ended: bool,
}

struct AxumExchange<'a> {
    request: &'a Request,
    headers: HeaderMap,
    status: Option<StatusCode>,
    body: Option<String>,
    ended: bool,
}

impl<'a> AxumExchange<'a> {
    fn new(request: &'a Request) -> Self {
        Self {
            request,
            headers: HeaderMap::new(),
            status: None,
            body: None,
            ended: false,
        }
    }

    fn finish(self) -> ExchangeOutput {
        ExchangeOutput {
            headers: self.headers,
            status: self.status,
            body: self.body,
            ended: self.ended,
        }
    }
}

impl Exchange for AxumExchange<'_> {
    fn method(&self) -> &str {
        self.request.method().as_str()
    }

    fn request_header(&self, name: &str) -> Option<&str> {
        self.request
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
    }

    fn set_response_header(&mut self, name: &str, value: &str) {
        if let (Ok(name), Ok(value)) = (HeaderName::try_from(name), HeaderValue::from_str(value)) {
            self.headers.insert(name, value);
        }
    }

    fn set_status(&mut self, status: u16) {
        self.status = StatusCode::from_u16(status).ok();
    }

    fn set_body(&mut self, body: &str) {
        self.body = Some(body.to_string());
    }

    fn end(&mut self) {
        self.ended = true;
    }
}
