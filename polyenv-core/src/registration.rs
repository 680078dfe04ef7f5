//! # Registrations
//!
//! A registration pairs a predicate with the implementation it guards. Both
//! receive the call's argument list by reference; the predicate decides
//! whether the implementation applies to those arguments.
//!
//! Registrations are type-erased behind `Arc`, so cloning one (and therefore
//! copying a method table during a derivation) never clones the closures.

use std::{fmt, sync::Arc};

/// A predicate-guarded implementation of a multimethod.
pub struct Registration<A: ?Sized, R> {
    predicate: Arc<dyn Fn(&A) -> bool + Send + Sync>,
    implementation: Arc<dyn Fn(&A) -> R + Send + Sync>,
}

impl<A: ?Sized, R> Registration<A, R> {
    /// Pair a predicate with an implementation.
    pub fn new<P, I>(predicate: P, implementation: I) -> Self
    where
        P: Fn(&A) -> bool + Send + Sync + 'static,
        I: Fn(&A) -> R + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            implementation: Arc::new(implementation),
        }
    }

    /// Whether the implementation applies to `args`.
    pub fn accepts(&self, args: &A) -> bool {
        (self.predicate)(args)
    }

    /// Run the implementation without consulting the predicate.
    pub fn apply(&self, args: &A) -> R {
        (self.implementation)(args)
    }

    /// Returns `true` if both registrations share the same closures.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.predicate, &other.predicate)
            && Arc::ptr_eq(&self.implementation, &other.implementation)
    }
}

impl<A: ?Sized, R> Clone for Registration<A, R> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            implementation: Arc::clone(&self.implementation),
        }
    }
}

impl<A: ?Sized, R> fmt::Debug for Registration<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration").finish_non_exhaustive()
    }
}
