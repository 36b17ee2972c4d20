// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors reported synchronously when a toast request is submitted.
///
/// Everything that can go wrong after submission (a vanished requesting
/// context, for instance) is reported through the request's completion
/// callback as a [`crate::DismissalReason::Dropped`] outcome instead, so the
/// queue never stops draining.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The toast was configured with a zero-length display duration.
    InvalidDuration,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDuration => {
                write!(f, "toast display duration must be greater than zero")
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
