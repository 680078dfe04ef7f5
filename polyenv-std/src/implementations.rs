//! Standard implementations.

use polyenv_core::BoxError;
use thiserror::Error;

/// The error produced by [`failing`] implementations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct Failure(pub String);

/// Ignores the arguments and returns a clone of `value`.
pub fn constant<A, R>(value: R) -> impl Fn(&A) -> R + Clone + Send + Sync + 'static
where
    A: ?Sized + 'static,
    R: Clone + Send + Sync + 'static,
{
    move |_: &A| value.clone()
}

/// Returns a clone of the argument list.
pub fn identity<A>() -> impl Fn(&A) -> A + Clone + Send + Sync + 'static
where
    A: Clone + 'static,
{
    |args: &A| args.clone()
}

/// Always fails with a [`Failure`] carrying `message`.
///
/// Useful for registrations that must never be selected.
pub fn failing<A, T>(
    message: impl Into<String>,
) -> impl Fn(&A) -> Result<T, BoxError> + Clone + Send + Sync + 'static
where
    A: ?Sized + 'static,
    T: 'static,
{
    let message = message.into();
    move |_: &A| Err(Failure(message.clone()).into())
}
