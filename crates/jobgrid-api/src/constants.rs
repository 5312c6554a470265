//! API-level constants.

/// Current API version segment.
pub const API_VERSION: &str = "v1";

/// Prefix every versioned route is mounted under.
pub const API_PREFIX: &str = "/api/v1";

/// Headroom added to the request body limit on top of the largest allowed
/// upload, covering multipart framing and form fields.
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;
