use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::options::CorsOptions;
use crate::origin::{AllowedOrigins, PatternError};

/// Query-ready form of [`CorsOptions`], computed once and never mutated.
///
/// Shared read-only across concurrently handled requests; construction is the
/// only place any of this is written.
#[derive(Clone, Debug, PartialEq)]
pub struct CorsPolicy {
    pub allowed_origins: AllowedOrigins,
    pub allowed_methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: Vec<String>,
    pub max_age: Option<u64>,
    pub supports_credentials: bool,
}

impl CorsPolicy {
    /// Normalizes the raw configuration into its query-ready form.
    ///
    /// Pure and deterministic: the same options always produce an equal
    /// policy. Methods are uppercased, header entries trimmed and
    /// deduplicated, `"*"` sentinels resolved into the `Any` variants, and
    /// wildcard origin entries compiled into anchored patterns. A `max_age`
    /// that is not a non-negative integer is treated as absent rather than
    /// rejected.
    pub fn normalize(options: CorsOptions) -> Result<Self, PatternError> {
        let CorsOptions {
            allowed_origins,
            allowed_origins_patterns,
            allowed_methods,
            allowed_headers,
            exposed_headers,
            max_age,
            supports_credentials,
        } = options;

        Ok(Self {
            allowed_origins: AllowedOrigins::normalize(allowed_origins, allowed_origins_patterns)?,
            allowed_methods: AllowedMethods::normalize(allowed_methods),
            allowed_headers: AllowedHeaders::normalize(allowed_headers),
            exposed_headers,
            max_age: max_age
                .filter(|seconds| *seconds >= 0)
                .map(|seconds| seconds as u64),
            supports_credentials,
        })
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
