//! HTTP constants for `$metadata` requests

/// User agent sent with every request
pub fn user_agent() -> String {
    format!("odata-typegen/{}", env!("CARGO_PKG_VERSION"))
}

/// Connection timeout, separate from the configurable request timeout
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Standard headers for metadata requests
pub mod headers {
    /// Metadata documents are CSDL XML
    pub const ACCEPT_XML: &str = "application/xml";

    /// Highest OData protocol version we can read
    pub const ODATA_MAX_VERSION: &str = "4.0";
}
