//! Error types shared by the validation helpers, plus the membership check.
//!
//! Every helper in [`crate::utils`] reports failures through
//! [`ValidationError`]. Callers that only care about the category of a
//! failure can use [`ValidationError::kind`].

use std::collections::HashSet;
use std::num::ParseIntError;
use std::time::Duration;

/// Broad category of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input could not be parsed (malformed duration, non-numeric port)
    Parse,
    /// Numeric input outside its permitted range
    Range,
    /// Input parsed but violates a semantic rule
    Constraint,
}

/// Errors raised while checking a single port literal
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("failed to parse port as number: {source}")]
    Format {
        port: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Port is either below 0 or greater than 65535: {port}")]
    OutOfRange { port: String },
}

impl PortError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PortError::Format { .. } => ErrorKind::Parse,
            PortError::OutOfRange { .. } => ErrorKind::Range,
        }
    }

    /// The offending port literal
    pub fn port(&self) -> &str {
        match self {
            PortError::Format { port, .. } | PortError::OutOfRange { port } => port,
        }
    }
}

/// Errors returned by the interval, duration and port helpers
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("failed to parse interval: {0}")]
    Interval(#[source] humantime::DurationError),

    #[error("failed to parse duration: {0}")]
    Duration(#[source] humantime::DurationError),

    #[error("undefined duration")]
    UndefinedDuration,

    #[error("duration must be shorter than interval")]
    DurationNotShorterThanInterval { duration: Duration, interval: Duration },

    #[error("invalid port specified: {0}")]
    InvalidPort(#[from] PortError),
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::Interval(_) | ValidationError::Duration(_) => ErrorKind::Parse,
            ValidationError::UndefinedDuration
            | ValidationError::DurationNotShorterThanInterval { .. } => ErrorKind::Constraint,
            ValidationError::InvalidPort(err) => err.kind(),
        }
    }
}

/// Check whether `item` appears in `slice`
///
/// # Examples
/// ```
/// use netchaos::utils::validation::slice_contains;
///
/// assert!(slice_contains(&["delay", "loss"], "loss"));
/// assert!(!slice_contains(&["delay", "loss"], "Loss"));
/// ```
pub fn slice_contains<S: AsRef<str>>(slice: &[S], item: &str) -> bool {
    let set: HashSet<&str> = slice.iter().map(AsRef::as_ref).collect();
    set.contains(item)
}
