//! Ready-made raw failures, one per classification branch.

use serde_json::json;

use crate::failure::RawFailure;

/// A transport timeout.
pub fn timeout() -> RawFailure {
    RawFailure::timeout("timeout of 10000ms exceeded")
}

/// A refused connection (backend offline).
pub fn offline() -> RawFailure {
    RawFailure::transport("connect ECONNREFUSED 127.0.0.1:8000")
}

/// A response with `status` and a `{"detail": ...}` body.
pub fn with_detail(status: u16, detail: &str) -> RawFailure {
    RawFailure::response(status, Some(json!({ "detail": detail })))
}

/// A 401 with no body.
pub fn unauthorized() -> RawFailure {
    RawFailure::response(401, None)
}

/// A 403 with no body.
pub fn forbidden() -> RawFailure {
    RawFailure::response(403, None)
}

/// A 404 with no body.
pub fn not_found() -> RawFailure {
    RawFailure::response(404, None)
}

/// A 500 with no body.
pub fn server_error() -> RawFailure {
    RawFailure::response(500, None)
}

/// A failure that carries a message but no transport or status.
pub fn opaque() -> RawFailure {
    RawFailure::opaque("Cannot read properties of undefined")
}

/// Every fixture above, covering each classification branch once.
pub fn all() -> Vec<RawFailure> {
    vec![
        timeout(),
        offline(),
        unauthorized(),
        forbidden(),
        not_found(),
        server_error(),
        with_detail(418, "short and stout"),
        opaque(),
        RawFailure::unrecognized("[object Object]"),
    ]
}
