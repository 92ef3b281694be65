pub mod constants;

mod allowed_headers;
mod allowed_methods;
mod context;
mod cors;
mod headers;
mod options;
mod origin;
mod policy;
mod result;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use context::RequestContext;
pub use cors::Cors;
pub use headers::{HeaderCollection, Headers, RequestHeaders};
pub use options::CorsOptions;
pub use origin::{AllowedOrigins, OriginList, OriginPattern, PatternError};
pub use policy::CorsPolicy;
pub use result::{CorsDecision, PreflightResult, SimpleResult};
