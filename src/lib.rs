//! # marketguard
//!
//! Failure classification and trust-level access gating for marketplace
//! clients.
//!
//! ## Quick Start
//!
//! ```rust
//! use marketguard::prelude::*;
//!
//! // Classify a failed response
//! let raw = RawFailure::from_status_body(403, r#"{"detail":"quota exceeded"}"#);
//! let err = classify(&raw);
//! assert_eq!(err.category(), ErrorCategory::Auth);
//! assert_eq!(err.message(), "You do not have permission to access this resource.");
//! assert!(!err.is_retryable());
//!
//! // Gate an operation on trust level
//! let decision = can_access(TrustLevel::Standard, TrustLevel::Trusted);
//! assert_eq!(decision.unmet_level(), Some(TrustLevel::Trusted));
//! ```
//!
//! ## Key Concepts
//!
//! - **Total classification**: `classify()` never fails; every [`RawFailure`]
//!   maps to exactly one [`ClassifiedError`]
//! - **Single-sourced retry policy**: read `is_retryable()`, never infer it
//!   from status codes
//! - **User-safe vs technical**: only `message()` may be shown to users
//! - **Denial ≠ Error**: `can_access()` returns a decision for both outcomes;
//!   `require()` turns a denial into [`AccessDenied`]
//!
//! ## Features
//!
//! - `reqwest`: conversions from `reqwest::Error` and `reqwest::Response`
//! - `tracing`: emit `tracing` events for classifications and denials

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod access;
pub mod classify;
pub mod config;
pub mod error;
pub mod failure;

// Testing utilities
pub mod testing;

// Prelude for convenient imports
pub mod prelude;

// Re-export main types at crate root for convenience
pub use access::{AccessDecision, AccessPolicy, TrustLevel, TrustScale, can_access};
pub use classify::{
    ClassifiedError, Classifier, Classify, ErrorCategory, catch_classified, classify,
    is_auth_error, is_network_error,
};
pub use config::ClassifierConfig;
pub use error::{AccessDenied, Error, ErrorKind, Result};
pub use failure::{OpaqueFailure, RawFailure, ResponseFailure, TransportFailure};
