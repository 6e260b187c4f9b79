//! The distinguishable outcomes of submitting a finished book.

use serde::{Deserialize, Serialize};

/// What the catalog creation service said about a submission.
///
/// Only `Accepted` (HTTP 201) finishes the wizard; every other response
/// status and transport-level failure is retained as a distinct state so
/// callers can tell them apart, even though the wizard surfaces no error of
/// its own for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionOutcome {
    /// The service created the book (201).
    Accepted,
    /// The service answered with any status other than 201.
    Rejected { status: u16 },
    /// The request never produced a response.
    TransportError,
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}
