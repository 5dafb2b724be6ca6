//! Request plumbing.
//!
//! This module provides:
//! - `RequestContext`: per-call cancellation and deadline
//! - `RequestParams`: per-call query parameter assembly
//! - Session cookie extraction
//! - `Transport`: the GET round trip with cookie acquisition and one throttle retry

mod context;
mod cookie;
mod request;
mod transport;

pub use context::RequestContext;
pub use request::RequestParams;

pub(crate) use request::endpoint_url;
pub(crate) use transport::Transport;
