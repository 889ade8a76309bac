//! Client error taxonomy.
//!
//! Every failure is local to the single attempted operation; nothing here is
//! fatal to the process and nothing triggers an automatic retry.

use std::fmt;

use pdk_lifecycle::TransitionError;

#[derive(Debug)]
pub enum ApiError {
    /// Network or transport failure (connect, TLS, body read).
    Transport(String),
    /// The server answered with a non-success HTTP status.
    Status { status: u16, message: String },
    /// The server answered 2xx but the envelope reported `success: false`.
    Envelope { message: String },
    /// A response body could not be decoded into the expected shape.
    Decode(String),
    /// Input rejected locally; no request was sent.
    Validation(String),
    /// An order advance was requested from a terminal status; no request was
    /// sent. Callers consulting the policy first never see this.
    Transition(TransitionError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport error: {msg}"),
            ApiError::Status { status, message } => {
                write!(f, "api error status={status}: {message}")
            }
            ApiError::Envelope { message } => write!(f, "api refused: {message}"),
            ApiError::Decode(msg) => write!(f, "decode error: {msg}"),
            ApiError::Validation(msg) => write!(f, "validation error: {msg}"),
            ApiError::Transition(e) => write!(f, "transition refused: {e}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transition(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TransitionError> for ApiError {
    fn from(e: TransitionError) -> Self {
        ApiError::Transition(e)
    }
}
