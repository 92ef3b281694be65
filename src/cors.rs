use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::{header, method};
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::origin::{AllowedOrigins, PatternError};
use crate::policy::CorsPolicy;
use crate::result::{CorsDecision, PreflightResult, SimpleResult};
use crate::util::normalize_upper;

const PREFLIGHT_STATUS: u16 = 204;

/// Core CORS decision engine, evaluating requests against a normalized
/// [`CorsPolicy`].
pub struct Cors {
    policy: CorsPolicy,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, PatternError> {
        Ok(Self::from_policy(CorsPolicy::normalize(options)?))
    }

    pub fn from_policy(policy: CorsPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &CorsPolicy {
        &self.policy
    }

    /// A request is cross-origin when it carries an `Origin` header whose
    /// value differs from the server's own origin.
    pub fn is_cors_request(&self, request: &RequestContext<'_>) -> bool {
        match request.headers.get(header::ORIGIN) {
            Some(origin) => origin != request.server_origin,
            None => false,
        }
    }

    /// A preflight is an `OPTIONS` request announcing the method it asks
    /// permission for.
    pub fn is_preflight_request(&self, request: &RequestContext<'_>) -> bool {
        request.method.eq_ignore_ascii_case(method::OPTIONS)
            && request
                .headers
                .contains(header::ACCESS_CONTROL_REQUEST_METHOD)
    }

    pub fn is_origin_allowed(&self, request: &RequestContext<'_>) -> bool {
        let origin = request.headers.get(header::ORIGIN).unwrap_or_default();
        self.policy.allowed_origins.allows(origin)
    }

    /// Classifies the request and produces the header mutations for it.
    ///
    /// Intended as the filter boundary: short-circuit with the
    /// [`CorsDecision::Preflight`] response before route dispatch, merge the
    /// [`CorsDecision::Simple`] headers into the actual response after it.
    pub fn evaluate(&self, request: &RequestContext<'_>) -> CorsDecision {
        if self.is_preflight_request(request) {
            CorsDecision::Preflight(self.handle_preflight_request(request))
        } else {
            let mut response = HeaderCollection::new();
            self.add_actual_request_headers(&mut response, request);
            CorsDecision::Simple(SimpleResult {
                headers: response.into_headers(),
            })
        }
    }

    /// Builds the short-circuit preflight response: status 204, no body,
    /// CORS headers only.
    ///
    /// `Access-Control-Request-Method` is always appended to `Vary`;
    /// preflight responses are never safely cacheable across differing
    /// requested methods.
    pub fn handle_preflight_request(&self, request: &RequestContext<'_>) -> PreflightResult {
        let mut response = HeaderCollection::new();
        self.add_preflight_request_headers(&mut response, request);
        response.add_vary(header::ACCESS_CONTROL_REQUEST_METHOD);

        PreflightResult {
            headers: response.into_headers(),
            status: PREFLIGHT_STATUS,
        }
    }

    /// Applies the preflight header set to `response`.
    ///
    /// Everything is gated on the allowed-origin step having produced an
    /// `Access-Control-Allow-Origin` entry: a disallowed origin yields no
    /// CORS grant at all.
    pub fn add_preflight_request_headers(
        &self,
        response: &mut HeaderCollection,
        request: &RequestContext<'_>,
    ) {
        self.configure_allowed_origin(response, request);

        if response.contains(header::ACCESS_CONTROL_ALLOW_ORIGIN) {
            self.configure_credentials(response);
            self.configure_allowed_methods(response, request);
            self.configure_allowed_headers(response, request);
            self.configure_max_age(response);
        }
    }

    /// Applies the actual-request header set to `response`, with the same
    /// origin gating as the preflight path.
    pub fn add_actual_request_headers(
        &self,
        response: &mut HeaderCollection,
        request: &RequestContext<'_>,
    ) {
        self.configure_allowed_origin(response, request);

        if response.contains(header::ACCESS_CONTROL_ALLOW_ORIGIN) {
            self.configure_credentials(response);
            self.configure_exposed_headers(response);
        }
    }

    fn configure_allowed_origin(
        &self,
        response: &mut HeaderCollection,
        request: &RequestContext<'_>,
    ) {
        match &self.policy.allowed_origins {
            // Safe to share and cache: no credentials are at stake.
            AllowedOrigins::Any if !self.policy.supports_credentials => {
                response.set(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
            }
            AllowedOrigins::Single(origin) => {
                response.set(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.as_str());
            }
            // Dynamic: the decision depends on the incoming Origin header,
            // so the response varies by it whether or not a grant is made.
            _ => {
                if self.is_cors_request(request) && self.is_origin_allowed(request) {
                    if let Some(origin) = request.headers.get(header::ORIGIN) {
                        response.set(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
                    }
                }
                response.add_vary(header::ORIGIN);
            }
        }
    }

    fn configure_credentials(&self, response: &mut HeaderCollection) {
        // Absence means false; "false" is never emitted.
        if self.policy.supports_credentials {
            response.set(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
    }

    fn configure_allowed_methods(
        &self,
        response: &mut HeaderCollection,
        request: &RequestContext<'_>,
    ) {
        match &self.policy.allowed_methods {
            AllowedMethods::Any => {
                let requested = request
                    .headers
                    .get(header::ACCESS_CONTROL_REQUEST_METHOD)
                    .unwrap_or_default();
                response.add_vary(header::ACCESS_CONTROL_REQUEST_METHOD);
                response.set(
                    header::ACCESS_CONTROL_ALLOW_METHODS,
                    normalize_upper(requested),
                );
            }
            AllowedMethods::List(methods) => {
                response.set(header::ACCESS_CONTROL_ALLOW_METHODS, methods.join(", "));
            }
        }
    }

    fn configure_allowed_headers(
        &self,
        response: &mut HeaderCollection,
        request: &RequestContext<'_>,
    ) {
        match &self.policy.allowed_headers {
            AllowedHeaders::Any => {
                let requested = request
                    .headers
                    .get(header::ACCESS_CONTROL_REQUEST_HEADERS)
                    .unwrap_or_default();
                response.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);
                response.set(header::ACCESS_CONTROL_ALLOW_HEADERS, requested);
            }
            AllowedHeaders::List(headers) => {
                response.set(header::ACCESS_CONTROL_ALLOW_HEADERS, headers.join(", "));
            }
        }
    }

    fn configure_exposed_headers(&self, response: &mut HeaderCollection) {
        if !self.policy.exposed_headers.is_empty() {
            response.set(
                header::ACCESS_CONTROL_EXPOSE_HEADERS,
                self.policy.exposed_headers.join(", "),
            );
        }
    }

    fn configure_max_age(&self, response: &mut HeaderCollection) {
        // Zero is a valid, explicitly configured value; only absence
        // suppresses the header.
        if let Some(seconds) = self.policy.max_age {
            response.set(header::ACCESS_CONTROL_MAX_AGE, seconds.to_string());
        }
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
