//! Raw failure input for the classifier.
//!
//! A [`RawFailure`] is built directly or converted from whatever the
//! surrounding code caught: `std::io::Error`, any `std::error::Error`, a
//! panic payload, a status/body pair, or (feature `reqwest`) a
//! `reqwest::Error` / `reqwest::Response`.

#[cfg(feature = "reqwest")]
mod http;
mod raw;

pub use raw::{OpaqueFailure, RawFailure, ResponseFailure, TransportFailure};
