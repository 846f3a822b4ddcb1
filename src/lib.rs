//! CORS decision middleware.
//!
//! [`Cors`] owns a resolved [`CorsPolicy`] and answers, per request, whether a
//! cross-origin call is allowed and which `Access-Control-*` headers to send.
//! Hosts either call [`Cors::check`] and apply the [`CorsDecision`]
//! themselves, or implement [`Exchange`] and let [`Cors::handle`] write the
//! response.

mod allowed_headers;
mod allowed_methods;
pub mod constants;
mod context;
mod cors;
mod exchange;
mod exposed_headers;
mod header_builder;
mod headers;
mod options;
mod origin;
mod policy;
mod result;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use context::RequestContext;
pub use cors::Cors;
pub use exchange::Exchange;
pub use exposed_headers::ExposedHeaders;
pub use headers::{Headers, join_values};
pub use options::CorsOptions;
pub use origin::AllowedOrigins;
pub use policy::CorsPolicy;
pub use result::{CorsDecision, CorsError, Rejection};
