// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

/// The category of a rewrite failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A required argument was empty or can never match a URI component.
    InvalidArgument,
    /// The rewritten text could not be parsed back into a structured URI.
    MalformedInput,
}

impl fmt::Display for ErrorKind {
    #[cfg_attr(test, mutants::skip)] // Do not mutate display output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => f.write_str("invalid argument"),
            Self::MalformedInput => f.write_str("malformed uri"),
        }
    }
}

/// Represents errors that occur while rewriting a URI.
///
/// Inspect [`Error::kind`] to tell a bad call apart from a URI that no longer parses after the
/// rewrite. When the failure came from the `http` crate, it is exposed through `source()`.
#[ohno::error]
#[display("{kind}")]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn invalid_argument(reason: &'static str) -> Self {
        Self::caused_by(ErrorKind::InvalidArgument, reason)
    }

    /// Returns the category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::caused_by(ErrorKind::MalformedInput, http::Error::from(err))
    }
}

/// A specialized [`Result`] type for rewrite operations.
pub type Result<T> = std::result::Result<T, Error>;
