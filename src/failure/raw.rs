//! The raw failure shapes the classifier accepts.

use std::any::Any;
use std::error::Error as StdError;
use std::io;

use serde_json::Value;

/// A failure that already happened, described by where it came from.
///
/// Exactly one variant applies per failure:
///
/// | Variant     | Meaning                                   |
/// |-------------|-------------------------------------------|
/// | `Transport` | No response was received                  |
/// | `Response`  | A response arrived with a failure status  |
/// | `Opaque`    | Anything else (a foreign error, a panic)  |
///
/// ```rust
/// use marketguard::RawFailure;
///
/// let timeout = RawFailure::timeout("deadline of 5s exceeded");
/// let offline = RawFailure::transport("connection refused");
/// let server = RawFailure::from_status_body(500, r#"{"detail":"db down"}"#);
/// let other = RawFailure::opaque("unexpected token in JSON");
/// # let _ = (timeout, offline, server, other);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RawFailure {
    /// No response was received.
    Transport(TransportFailure),

    /// A response was received with a failure status.
    Response(ResponseFailure),

    /// Anything not recognized as a transport or response failure.
    Opaque(OpaqueFailure),
}

/// A failure where no response was received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportFailure {
    /// Whether the request hit a timeout or deadline.
    pub timed_out: bool,

    /// Human-readable description from the transport, if any.
    pub message: Option<String>,
}

/// A failure where the backend responded.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseFailure {
    /// The HTTP status code.
    pub status: u16,

    /// The decoded response body, if it was JSON.
    pub payload: Option<Value>,
}

/// A failure that is neither a transport nor a response failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpaqueFailure {
    /// A message carried by the failure, if it had one.
    pub message: Option<String>,

    /// Best-effort rendering of the failure value.
    pub rendering: String,
}

impl ResponseFailure {
    /// Returns the `detail` field of an object payload, coerced to a string.
    ///
    /// Non-object payloads, a missing field, `null`, and empty strings all
    /// yield `None`. Non-string values render as their JSON text.
    pub fn detail(&self) -> Option<String> {
        let detail = self.payload.as_ref()?.as_object()?.get("detail")?;
        let text = match detail {
            Value::Null => return None,
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        (!text.is_empty()).then_some(text)
    }
}

impl RawFailure {
    /// A transport failure that timed out.
    pub fn timeout(message: impl Into<String>) -> Self {
        RawFailure::Transport(TransportFailure {
            timed_out: true,
            message: Some(message.into()),
        })
    }

    /// A transport failure that did not time out (refused, reset, DNS, TLS).
    pub fn transport(message: impl Into<String>) -> Self {
        RawFailure::Transport(TransportFailure {
            timed_out: false,
            message: Some(message.into()),
        })
    }

    /// A response failure with an already-decoded payload.
    pub fn response(status: u16, payload: Option<Value>) -> Self {
        RawFailure::Response(ResponseFailure { status, payload })
    }

    /// A response failure from a status and a raw body.
    ///
    /// The body is decoded leniently: an empty or non-JSON body becomes an
    /// absent payload rather than an error.
    pub fn from_status_body(status: u16, body: &str) -> Self {
        let payload = serde_json::from_str::<Value>(body).ok();
        Self::response(status, payload)
    }

    /// An opaque failure carrying a message.
    pub fn opaque(message: impl Into<String>) -> Self {
        let message = message.into();
        RawFailure::Opaque(OpaqueFailure {
            rendering: message.clone(),
            message: Some(message),
        })
    }

    /// An opaque failure with no message, only a rendering of the value.
    pub fn unrecognized(rendering: impl Into<String>) -> Self {
        RawFailure::Opaque(OpaqueFailure {
            message: None,
            rendering: rendering.into(),
        })
    }

    /// An opaque failure from any error value.
    ///
    /// The error's `Display` text becomes the message; its `Debug` form is
    /// kept as the rendering.
    pub fn from_error(err: &(dyn StdError + 'static)) -> Self {
        let message = err.to_string();
        RawFailure::Opaque(OpaqueFailure {
            message: (!message.is_empty()).then_some(message),
            rendering: format!("{:?}", err),
        })
    }

    /// An opaque failure from a caught panic payload.
    ///
    /// `&str` and `String` payloads become the message. Anything else has no
    /// recognizable message.
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        if let Some(message) = payload.downcast_ref::<&str>() {
            Self::opaque(*message)
        } else if let Some(message) = payload.downcast_ref::<String>() {
            Self::opaque(message.as_str())
        } else {
            Self::unrecognized("Box<dyn Any>")
        }
    }

    /// Returns the HTTP status if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            RawFailure::Response(response) => Some(response.status),
            _ => None,
        }
    }
}

impl From<TransportFailure> for RawFailure {
    fn from(failure: TransportFailure) -> Self {
        RawFailure::Transport(failure)
    }
}

impl From<ResponseFailure> for RawFailure {
    fn from(failure: ResponseFailure) -> Self {
        RawFailure::Response(failure)
    }
}

impl From<OpaqueFailure> for RawFailure {
    fn from(failure: OpaqueFailure) -> Self {
        RawFailure::Opaque(failure)
    }
}

impl From<&io::Error> for RawFailure {
    fn from(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::TimedOut => Self::timeout(err.to_string()),
            io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::NotConnected
            | io::ErrorKind::AddrNotAvailable
            | io::ErrorKind::BrokenPipe
            | io::ErrorKind::HostUnreachable
            | io::ErrorKind::NetworkUnreachable
            | io::ErrorKind::NetworkDown => Self::transport(err.to_string()),
            _ => Self::from_error(err),
        }
    }
}

impl From<io::Error> for RawFailure {
    fn from(err: io::Error) -> Self {
        Self::from(&err)
    }
}
