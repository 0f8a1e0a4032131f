//! `groundwork-outcome` — value-based success/failure propagation.
//!
//! A pipeline of fallible steps composes through [`FailureOrNothing`]
//! without letting unexpected faults escape: faults raised inside chained
//! actions are captured as values ([`FailureInfo`]), carried through the
//! pipeline, and only become raised faults again at an explicit boundary
//! call ([`FailureOrNothing::escalate`]).

pub mod failure_info;
pub mod failure_or_nothing;

pub use failure_info::{FailureInfo, Fault};
pub use failure_or_nothing::FailureOrNothing;
