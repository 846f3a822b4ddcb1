use crate::constants::status;
use crate::context::RequestContext;
use crate::exchange::{Exchange, apply_headers};
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::policy::CorsPolicy;
use crate::result::{CorsDecision, CorsError, Rejection};
use tracing::{debug, trace};

/// CORS middleware bound to one resolved [`CorsPolicy`].
///
/// Built once per installation and shared by every request; it holds no
/// mutable state, so a single instance can serve concurrent requests.
#[derive(Clone, Debug)]
pub struct Cors {
    policy: CorsPolicy,
}

impl Cors {
    /// Resolves `options` against [`CorsPolicy::default`].
    pub fn new(options: CorsOptions) -> Self {
        Self::with_defaults(options, &CorsPolicy::default())
    }

    /// Resolves `options` against caller-provided defaults.
    pub fn with_defaults(options: CorsOptions, defaults: &CorsPolicy) -> Self {
        Self::from_policy(CorsPolicy::resolve(options, defaults))
    }

    pub fn from_policy(policy: CorsPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &CorsPolicy {
        &self.policy
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let Some(origin) = request.origin() else {
            trace!(method = request.method, "no origin header, skipping cors");
            return CorsDecision::NotApplicable;
        };

        let is_preflight = request.is_preflight();

        if !self.policy.origins.allows(origin) {
            debug!(origin, "cors origin rejected");
            let rejection = Rejection {
                headers: Default::default(),
                reason: CorsError::OriginNotAllowed {
                    origin: origin.to_string(),
                },
            };
            return if is_preflight {
                CorsDecision::PreflightRejected(rejection)
            } else {
                CorsDecision::SimpleRejected(rejection)
            };
        }

        let builder = HeaderBuilder::new(&self.policy);
        let mut headers = HeaderCollection::new();
        headers.extend(builder.build_origin_header(origin));
        headers.extend(builder.build_credentials_header());

        if is_preflight {
            self.process_preflight(request, &builder, headers)
        } else {
            headers.extend(builder.build_exposed_headers());
            trace!(origin, method = request.method, "cors simple request accepted");
            CorsDecision::SimpleAccepted {
                headers: headers.into_headers(),
            }
        }
    }

    fn process_preflight(
        &self,
        request: &RequestContext<'_>,
        builder: &HeaderBuilder<'_>,
        mut headers: HeaderCollection,
    ) -> CorsDecision {
        if let Some(requested_method) = request.requested_method() {
            if !self.policy.methods.allows_method(requested_method) {
                debug!(requested_method, "cors preflight method rejected");
                return CorsDecision::PreflightRejected(Rejection {
                    headers: headers.into_headers(),
                    reason: CorsError::MethodNotAllowed {
                        requested_method: requested_method.to_string(),
                    },
                });
            }
        }

        if let Some(requested_headers) = request.requested_headers() {
            if !self.policy.headers.allows_headers(requested_headers) {
                debug!(requested_headers, "cors preflight headers rejected");
                return CorsDecision::PreflightRejected(Rejection {
                    headers: headers.into_headers(),
                    reason: CorsError::HeadersNotAllowed {
                        requested_headers: requested_headers.to_string(),
                    },
                });
            }
        }

        headers.extend(builder.build_methods_header());
        headers.extend(builder.build_allowed_headers());
        headers.extend(builder.build_max_age_header());

        trace!(origin = request.origin, "cors preflight accepted");
        CorsDecision::PreflightAccepted {
            headers: headers.into_headers(),
        }
    }

    /// Runs the decision for one exchange and writes the outcome to it.
    ///
    /// Accepted preflights answer `204` with an empty body and end the
    /// exchange. Rejections answer `403`, end the exchange and return the
    /// reason. Requests without an `Origin` leave the exchange untouched.
    pub fn handle<E: Exchange + ?Sized>(&self, exchange: &mut E) -> Result<(), CorsError> {
        let decision = self.check(&exchange.request_context());

        match decision {
            CorsDecision::NotApplicable => Ok(()),
            CorsDecision::SimpleAccepted { headers } => {
                apply_headers(exchange, &headers);
                Ok(())
            }
            CorsDecision::PreflightAccepted { headers } => {
                apply_headers(exchange, &headers);
                exchange.set_status(status::NO_CONTENT);
                exchange.set_body("");
                exchange.end();
                Ok(())
            }
            CorsDecision::PreflightRejected(rejection)
            | CorsDecision::SimpleRejected(rejection) => {
                apply_headers(exchange, &rejection.headers);
                exchange.set_status(rejection.reason.status());
                exchange.end();
                Err(rejection.reason)
            }
        }
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
