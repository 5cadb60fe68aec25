// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// An error from a parallel operation.
///
/// Carries the position of the lowest-index work item that failed together with how many
/// items failed in total. The failure of that item, including a panic, is the source of this
/// error.
#[ohno::error]
#[display("work item {index} failed ({failures} of {total} items failed)")]
pub struct Error {
    index: usize,
    failures: usize,
    total: usize,
}

impl Error {
    /// The position, in input order, of the first failed work item.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The number of work items that failed.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// The number of work items that were started.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }
}

/// A specialized [`Result`] type for parallel operations.
pub type Result<T> = std::result::Result<T, Error>;
