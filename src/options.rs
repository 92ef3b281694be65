/// Raw CORS configuration as supplied by the host application.
///
/// Lists may contain the literal `"*"` sentinel; it is resolved into the
/// dedicated wildcard variants during normalization, see
/// [`CorsPolicy::normalize`](crate::CorsPolicy::normalize).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsOptions {
    /// Exact origins, the literal `"*"`, or entries containing `*` wildcard
    /// segments (e.g. `https://*.example.com`).
    pub allowed_origins: Vec<String>,
    /// Regex sources matched against the request origin, in addition to any
    /// patterns derived from wildcard entries in `allowed_origins`. Used
    /// as-is: anchor them yourself if a full match is intended.
    pub allowed_origins_patterns: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    /// Emitted verbatim in `Access-Control-Expose-Headers`.
    pub exposed_headers: Vec<String>,
    /// Seconds for `Access-Control-Max-Age`. `None` suppresses the header;
    /// an explicit zero is emitted. Negative values are treated as absent.
    pub max_age: Option<i64>,
    pub supports_credentials: bool,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".into()],
            allowed_origins_patterns: Vec::new(),
            allowed_methods: vec!["*".into()],
            allowed_headers: vec!["*".into()],
            exposed_headers: Vec::new(),
            max_age: Some(0),
            supports_credentials: false,
        }
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
