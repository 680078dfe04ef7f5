//! # Dispatch
//!
//! A [`Multimethod`] is the callable face of one method name. Calling it scans
//! the registrations in trial order and runs the first implementation whose
//! predicate accepts the arguments. There is no specificity ranking: ties go to
//! the earliest registration, and predicates after the winner are never
//! evaluated.

use crate::{error::EnvironmentError, registration::Registration};
use std::fmt;

/// A callable view of one method name and its registrations.
///
/// Obtained from [`Environment::multimethod`]. Taking a handle has no side
/// effects, and calling it never changes the environment it came from.
///
/// [`Environment::multimethod`]: crate::Environment::multimethod
pub struct Multimethod<'a, K, A: ?Sized, R> {
    name: &'a K,
    registrations: &'a [Registration<A, R>],
}

impl<'a, K, A: ?Sized, R> Multimethod<'a, K, A, R> {
    pub(crate) fn new(name: &'a K, registrations: &'a [Registration<A, R>]) -> Self {
        Self {
            name,
            registrations,
        }
    }

    /// The method name.
    pub fn name(&self) -> &'a K {
        self.name
    }

    /// Registrations in trial order.
    pub fn registrations(&self) -> &'a [Registration<A, R>] {
        self.registrations
    }

    /// Number of registered implementations.
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Whether no implementation is registered.
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Find the registration that would handle `args`, without running it.
    pub fn resolve(&self, args: &A) -> Option<&'a Registration<A, R>> {
        self.registrations
            .iter()
            .find(|registration| registration.accepts(args))
    }
}

impl<K: fmt::Display, A: ?Sized, R> Multimethod<'_, K, A, R> {
    /// Dispatch `args` to the first accepting implementation.
    pub fn call(&self, args: &A) -> Result<R, EnvironmentError> {
        let Some(registration) = self.resolve(args) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                method = %self.name,
                candidates = self.registrations.len(),
                "no registration accepted the arguments"
            );
            return Err(EnvironmentError::NotImplemented {
                name: self.name.to_string(),
            });
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(method = %self.name, "dispatching");

        Ok(registration.apply(args))
    }
}

impl<K, A: ?Sized, R> Clone for Multimethod<'_, K, A, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, A: ?Sized, R> Copy for Multimethod<'_, K, A, R> {}

impl<K: fmt::Debug, A: ?Sized, R> fmt::Debug for Multimethod<'_, K, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Multimethod")
            .field("name", self.name)
            .field("registrations", &self.registrations.len())
            .finish()
    }
}
