//! HTTP header name and value constants.
//!
//! Every API request carries `Accept: application/json` and, once one has been
//! acquired, the session cookie.

/// Accept header value sent on every API request
pub const ACCEPT_JSON: &str = "application/json";

/// Set-Cookie attribute separator; only the `name=value` pair before it is replayed
pub const COOKIE_ATTRIBUTE_SEPARATOR: char = ';';
