//! Immutable failure payload: a message plus the optional originating fault.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// A raised runtime error, shared so it can be preserved verbatim.
///
/// The `Arc` lets a captured fault travel inside cloneable failure values
/// and still be handed back out as the *same* underlying object when a
/// boundary escalates it.
pub type Fault = Arc<dyn Error + Send + Sync + 'static>;

/// An immutable record of a failure: a human-readable message and, when the
/// failure originated from a raised fault, that fault — preserved verbatim,
/// never re-wrapped.
#[derive(Debug, Clone)]
pub struct FailureInfo {
    message: String,
    cause: Option<Fault>,
}

impl FailureInfo {
    /// A failure described by a message alone, with no originating fault.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Capture a fault together with a caller-supplied context message.
    pub fn from_fault<E>(fault: E, message: impl Into<String>) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            cause: Some(Arc::new(fault)),
        }
    }

    /// Capture a fault, using the fault's own rendering as the message.
    pub fn wrapping<E>(fault: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            message: fault.to_string(),
            cause: Some(Arc::new(fault)),
        }
    }

    /// Capture an already-shared fault without re-wrapping it.
    pub fn from_shared(fault: Fault, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: Some(fault),
        }
    }

    /// The human-readable description of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The originating fault, if the failure captured one.
    pub fn cause(&self) -> Option<&Fault> {
        self.cause.as_ref()
    }
}

impl fmt::Display for FailureInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for FailureInfo {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| &**cause as &(dyn Error + 'static))
    }
}

impl From<&str> for FailureInfo {
    fn from(message: &str) -> Self {
        Self::with_message(message)
    }
}

impl From<String> for FailureInfo {
    fn from(message: String) -> Self {
        Self::with_message(message)
    }
}
