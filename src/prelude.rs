//! Prelude module for convenient imports.
//!
//! ```rust
//! use marketguard::prelude::*;
//! ```
//!
//! This provides access to:
//! - Classification entry points and types
//! - Access gate types
//! - Error types

pub use crate::{
    access::{AccessDecision, AccessPolicy, TrustLevel, TrustScale, can_access},
    classify::{
        ClassifiedError, Classifier, Classify, ErrorCategory, catch_classified, classify,
        is_auth_error, is_network_error,
    },
    config::ClassifierConfig,
    error::{AccessDenied, Error, ErrorKind, Result},
    failure::RawFailure,
};
