//! Error types. None of these escape a view: adapters turn them into
//! notifications or fallback renders.

use thiserror::Error;

use crate::contact::ContactField;
use crate::ids::{CarouselId, RevealId, TiltId};

/// Failure reported by the external email relay.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RelayError {
    #[error("relay rejected the message: {0}")]
    Rejected(String),
    #[error("relay unreachable: {0}")]
    Transport(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("required field '{0}' is empty")]
    MissingField(ContactField),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("a submission is already in flight")]
    SubmissionInFlight,
    #[error("no submission is pending")]
    NoSubmissionPending,
    #[error("email relay is not configured")]
    RelayNotConfigured,
}

/// Lookups against controllers that were never added or already removed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StageError {
    #[error("unknown reveal controller {0:?}")]
    UnknownReveal(RevealId),
    #[error("unknown tilt controller {0:?}")]
    UnknownTilt(TiltId),
    #[error("unknown carousel {0:?}")]
    UnknownCarousel(CarouselId),
}
