use cors_gate::constants::{header, method};
use cors_gate::{Cors, CorsDecision, CorsOptions, RequestContext, RequestHeaders};

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS)
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}

#[derive(Default)]
pub struct CorsBuilder {
    origins: Option<Vec<String>>,
    origin_patterns: Option<Vec<String>>,
    methods: Option<Vec<String>>,
    allowed_headers: Option<Vec<String>>,
    exposed_headers: Option<Vec<String>>,
    max_age: Option<Option<i64>>,
    credentials: Option<bool>,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origins = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn origin_patterns<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origin_patterns = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn methods<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn allowed_headers<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_headers = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn exposed_headers<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exposed_headers = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn max_age(mut self, seconds: i64) -> Self {
        self.max_age = Some(Some(seconds));
        self
    }

    pub fn no_max_age(mut self) -> Self {
        self.max_age = Some(None);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn build(self) -> Cors {
        let defaults = CorsOptions::default();

        Cors::new(CorsOptions {
            allowed_origins: self.origins.unwrap_or(defaults.allowed_origins),
            allowed_origins_patterns: self
                .origin_patterns
                .unwrap_or(defaults.allowed_origins_patterns),
            allowed_methods: self.methods.unwrap_or(defaults.allowed_methods),
            allowed_headers: self.allowed_headers.unwrap_or(defaults.allowed_headers),
            exposed_headers: self.exposed_headers.unwrap_or(defaults.exposed_headers),
            max_age: self.max_age.unwrap_or(defaults.max_age),
            supports_credentials: self.credentials.unwrap_or(defaults.supports_credentials),
        })
        .expect("valid CORS configuration")
    }
}

pub struct RequestBuilder {
    method: String,
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
    server_origin: String,
    extra_headers: Vec<(String, String)>,
}

impl RequestBuilder {
    fn new(method: &str) -> Self {
        Self {
            method: method.to_string(),
            origin: None,
            request_method: None,
            request_headers: None,
            server_origin: String::new(),
            extra_headers: Vec::new(),
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

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn server_origin(mut self, origin: impl Into<String>) -> Self {
        self.server_origin = origin.into();
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.push((name.into(), value.into()));
        self
    }

    pub fn evaluate(&self, cors: &Cors) -> CorsDecision {
        self.with_context(|context| cors.evaluate(context))
    }

    pub fn with_context<R>(&self, f: impl FnOnce(&RequestContext<'_>) -> R) -> R {
        let headers = self.build_headers();
        f(&RequestContext {
            method: &self.method,
            headers: &headers,
            server_origin: &self.server_origin,
        })
    }

    fn build_headers(&self) -> RequestHeaders {
        let mut headers = RequestHeaders::new();
        if let Some(origin) = &self.origin {
            headers.insert(header::ORIGIN, origin.clone());
        }
        if let Some(request_method) = &self.request_method {
            headers.insert(header::ACCESS_CONTROL_REQUEST_METHOD, request_method.clone());
        }
        if let Some(request_headers) = &self.request_headers {
            headers.insert(
                header::ACCESS_CONTROL_REQUEST_HEADERS,
                request_headers.clone(),
            );
        }
        for (name, value) in &self.extra_headers {
            headers.insert(name.clone(), value.clone());
        }
        headers
    }
}
