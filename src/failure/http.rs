//! Conversions from `reqwest` failures.

use super::RawFailure;

impl RawFailure {
    /// Converts a `reqwest` error into a raw failure.
    ///
    /// Errors that carry a status (from `error_for_status()`) become response
    /// failures without a payload. Timeouts and connect errors become
    /// transport failures, and so do `is_request()` errors: reqwest reports
    /// those when the connection broke while the request was in flight and no
    /// response head arrived, which is a network fault rather than a malformed
    /// request (builder errors report `is_builder()` instead). Anything else
    /// (body decoding, redirects, builder errors) is opaque.
    pub fn from_reqwest(err: &::reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return RawFailure::response(status.as_u16(), None);
        }

        if err.is_timeout() {
            RawFailure::timeout(err.to_string())
        } else if err.is_connect() || err.is_request() {
            RawFailure::transport(err.to_string())
        } else {
            RawFailure::from_error(err)
        }
    }

    /// Converts a failed response into a raw failure, reading its body.
    ///
    /// If the body cannot be read the payload is absent; the status is kept.
    pub async fn from_response(response: ::reqwest::Response) -> Self {
        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => RawFailure::from_status_body(status, &body),
            Err(_) => RawFailure::response(status, None),
        }
    }
}

impl From<::reqwest::Error> for RawFailure {
    fn from(err: ::reqwest::Error) -> Self {
        RawFailure::from_reqwest(&err)
    }
}
