//! HTTP middleware applied around the whole router.

pub mod request_id;
pub mod security_headers;

pub use request_id::request_id_middleware;
pub use security_headers::{security_headers_middleware, SecurityHeadersConfig};
