use crate::headers::RequestHeaders;

/// Borrowed view of the parts of an HTTP request that CORS evaluation reads.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub headers: &'a RequestHeaders,
    /// The origin the server itself is served from. A request whose `Origin`
    /// header equals this value is same-host and never treated as
    /// cross-origin. Compared by strict string equality; pass `""` to skip
    /// same-host detection.
    pub server_origin: &'a str,
}
