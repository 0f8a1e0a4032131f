//! Two-state result carrier: success, or a captured failure.

use std::error::Error;
use std::sync::Arc;

use crate::failure_info::{FailureInfo, Fault};

/// Context message attached when a chained action raises a fault.
const ACTION_FAULTED: &str = "Action threw an exception";

/// A result that either signifies success (no payload) or failure with
/// diagnostic context.
///
/// Instances are immutable once constructed: [`then`](Self::then) produces
/// a new value rather than mutating its receiver, and the read-only
/// resolutions ([`resolve`](Self::resolve), [`catch`](Self::catch),
/// [`escalate`](Self::escalate)) yield the same outcome no matter how often
/// they are repeated. Construction, chaining and resolution are all
/// synchronous and reentrant — independent instances may be resolved on
/// any number of threads with no coordination.
///
/// Async work must be fully awaited before its outcome is handed to this
/// type: the fault-capture guarantee of `then` covers exactly the
/// synchronous invocation of the action.
#[derive(Debug, Clone)]
#[must_use = "a FailureOrNothing carries a possible failure that should be resolved or chained"]
pub enum FailureOrNothing {
    /// The operation completed; success carries no diagnostic data.
    Success,
    /// The operation failed; the payload describes how.
    Failure(FailureInfo),
}

impl FailureOrNothing {
    /// A value signifying success.
    pub fn success() -> Self {
        Self::Success
    }

    /// A value signifying failure.
    ///
    /// Accepts a ready-made [`FailureInfo`] or a plain message (which
    /// builds one with no cause).
    pub fn failure(info: impl Into<FailureInfo>) -> Self {
        Self::Failure(info.into())
    }

    /// Capture an already-raised fault as a failure, keeping the fault's
    /// own rendering as the message.
    pub fn wrap<E>(fault: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Failure(FailureInfo::wrapping(fault))
    }

    /// Capture an already-raised fault as a failure under a caller-supplied
    /// context message. The fault is preserved verbatim as the cause.
    pub fn wrap_with<E>(fault: E, message: impl Into<String>) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Failure(FailureInfo::from_fault(fault, message))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Run `action` if the receiver is a success; short-circuit otherwise.
    ///
    /// Once a chain has failed, no further action ever executes: a failed
    /// receiver is returned unchanged. Otherwise the action runs exactly
    /// once; `Ok(())` yields a success and `Err` is captured as a failure
    /// whose cause is the raised fault. This is the single point where
    /// faults are converted into values — downstream steps never observe a
    /// raw fault from a previously-chained action.
    pub fn then<F, E>(self, action: F) -> Self
    where
        F: FnOnce() -> Result<(), E>,
        E: Error + Send + Sync + 'static,
    {
        if self.is_failure() {
            return self;
        }

        match action() {
            Ok(()) => Self::Success,
            Err(fault) => {
                tracing::debug!(fault = %fault, "chained action raised a fault");
                Self::Failure(FailureInfo::from_fault(fault, ACTION_FAULTED))
            }
        }
    }

    /// Resolve by pattern match: exactly one branch runs, and both produce
    /// the same result type. This is the primary exit from value-based
    /// handling into ordinary control flow.
    pub fn resolve<'a, T>(
        &'a self,
        on_success: impl FnOnce() -> T,
        on_failure: impl FnOnce(&'a FailureInfo) -> T,
    ) -> T {
        match self {
            Self::Success => on_success(),
            Self::Failure(info) => on_failure(info),
        }
    }

    /// Side-effect-only resolution: run `action` with the failure payload
    /// if the receiver is a failure, otherwise do nothing. Read-only — the
    /// receiver's state is unchanged.
    pub fn catch(&self, action: impl FnOnce(&FailureInfo)) {
        if let Self::Failure(info) = self {
            action(info);
        }
    }

    /// Escalate back into fault-based control flow.
    ///
    /// - Success: `Ok(())`.
    /// - Failure with a captured cause: `Err` carrying that exact fault
    ///   object (a shared handle to the original, not a re-wrap).
    /// - Failure without a cause: `Err` carrying a fresh generic fault that
    ///   renders as the failure's message.
    ///
    /// Designed for code paths that must integrate with fault-style
    /// handling at a system boundary, while the rest of the pipeline stays
    /// in value form.
    pub fn escalate(&self) -> Result<(), Fault> {
        match self {
            Self::Success => Ok(()),
            Self::Failure(info) => match info.cause() {
                Some(cause) => Err(Arc::clone(cause)),
                None => Err(Arc::new(info.clone()) as Fault),
            },
        }
    }

    /// The failure payload, if the receiver is a failure.
    pub fn failure_info(&self) -> Option<&FailureInfo> {
        match self {
            Self::Success => None,
            Self::Failure(info) => Some(info),
        }
    }
}

impl<E> From<Result<(), E>> for FailureOrNothing
where
    E: Error + Send + Sync + 'static,
{
    /// Boundary interop: fold an ordinary `Result` into the monad,
    /// capturing an `Err` the same way [`FailureOrNothing::wrap`] does.
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::Success,
            Err(fault) => Self::wrap(fault),
        }
    }
}

impl From<FailureInfo> for FailureOrNothing {
    fn from(info: FailureInfo) -> Self {
        Self::Failure(info)
    }
}
