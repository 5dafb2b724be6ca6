//! Response decoding.
//!
//! Every Trends API body starts with a short non-JSON guard. This module strips
//! the guard each endpoint emits and decodes the rest with `serde_json`.

mod endpoint;
mod sentinel;

pub use endpoint::{decode, Endpoint};
pub use sentinel::strip_sentinel;
