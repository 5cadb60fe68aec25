// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Running a function over every element of a collection concurrently.
//!
//! Each element becomes its own Tokio task. The helpers wait for every task to finish, then
//! hand back the results in input order or the failure of the lowest-index item. Tasks do not
//! observe each other and no ordering is guaranteed between their executions.
//!
//! All helpers must be awaited inside a Tokio runtime.

mod error;

use std::convert::Infallible;
use std::error::Error as StdError;

use futures_util::future::join_all;

pub use error::{Error, Result};

type BoxError = Box<dyn StdError + Send + Sync>;

/// Maps every item concurrently and returns the outputs in input order.
///
/// # Errors
///
/// Returns an [`Error`] if a task panicked; the panic is the source of the error.
///
/// # Examples
///
/// ```
/// # #[tokio::main]
/// # async fn main() -> handy::par::Result<()> {
/// let lengths = handy::par::par_map(["a", "bb", "ccc"], |s| async move { s.len() }).await?;
/// assert_eq!(lengths, [1, 2, 3]);
/// # Ok(())
/// # }
/// ```
pub async fn par_map<I, F, Fut>(items: I, mut f: F) -> Result<Vec<Fut::Output>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future + Send + 'static,
    Fut::Output: Send + 'static,
{
    par_try_map(items, |item| {
        let work = f(item);
        async move { Ok::<_, Infallible>(work.await) }
    })
    .await
}

/// Maps every item concurrently with fallible work.
///
/// Every task runs to completion even when some of them fail. On success the outputs are
/// returned in input order.
///
/// # Errors
///
/// Returns an [`Error`] describing the lowest-index item that failed or panicked. Further
/// failures are counted in [`Error::failures`] and, with the `logs` feature, logged.
///
/// # Examples
///
/// ```
/// # #[tokio::main]
/// # async fn main() {
/// use handy::par::par_try_map;
///
/// let parsed = par_try_map(["1", "x", "3"], |s| async move { s.parse::<u32>() }).await;
/// assert_eq!(parsed.unwrap_err().index(), 1);
/// # }
/// ```
pub async fn par_try_map<I, F, Fut, T, E>(items: I, mut f: F) -> Result<Vec<T>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = std::result::Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Into<BoxError> + Send + 'static,
{
    let handles: Vec<_> = items.into_iter().map(|item| tokio::spawn(f(item))).collect();
    let total = handles.len();
    emit_fan_out(total);

    let outcomes: Vec<std::result::Result<T, BoxError>> = join_all(handles)
        .await
        .into_iter()
        .map(|joined| match joined {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(e.into()),
            Err(join_error) => Err(join_error.into()),
        })
        .collect();

    let failures = outcomes.iter().filter(|outcome| outcome.is_err()).count();
    let mut results = Vec::with_capacity(total - failures);
    let mut first_failure = None;

    for (index, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok(value) => results.push(value),
            Err(cause) if first_failure.is_none() => first_failure = Some((index, cause)),
            Err(cause) => emit_further_failure(index, cause.as_ref()),
        }
    }

    match first_failure {
        Some((index, cause)) => Err(Error::caused_by(index, failures, total, cause)),
        None => Ok(results),
    }
}

/// Runs fallible work for every item concurrently and waits for all of it.
///
/// # Errors
///
/// Returns an [`Error`] describing the lowest-index item that failed or panicked.
pub async fn par_for_each<I, F, Fut, E>(items: I, f: F) -> Result<()>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = std::result::Result<(), E>> + Send + 'static,
    E: Into<BoxError> + Send + 'static,
{
    par_try_map(items, f).await.map(|_| ())
}

#[cfg_attr(
    not(any(feature = "logs", test)),
    expect(unused_variables, reason = "unused when logs feature not used")
)]
fn emit_fan_out(total: usize) {
    #[cfg(any(feature = "logs", test))]
    tracing::event!(name: "handy.par.fan_out", tracing::Level::DEBUG, par.total = total);
}

#[cfg_attr(
    not(any(feature = "logs", test)),
    expect(unused_variables, reason = "unused when logs feature not used")
)]
fn emit_further_failure(index: usize, cause: &(dyn StdError + Send + Sync)) {
    #[cfg(any(feature = "logs", test))]
    tracing::event!(
        name: "handy.par.failure",
        tracing::Level::WARN,
        par.index = index,
        error = %cause,
    );
}
