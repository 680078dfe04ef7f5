//! Logging wrappers for predicates and implementations.
//!
//! With the `tracing` feature enabled, [`traced`] runs each call inside a
//! `debug` span and [`traced_predicate`] emits a `trace` event with the
//! verdict. Without it both are transparent.

/// Wraps an implementation so every call runs inside a span named after `label`.
pub fn traced<A, R, I>(
    label: &'static str,
    implementation: I,
) -> impl Fn(&A) -> R + Send + Sync + 'static
where
    A: ?Sized + 'static,
    R: 'static,
    I: Fn(&A) -> R + Send + Sync + 'static,
{
    move |args: &A| {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("implementation", label).entered();
        #[cfg(not(feature = "tracing"))]
        let _ = label;

        implementation(args)
    }
}

/// Wraps a predicate so every evaluation logs its verdict.
pub fn traced_predicate<A, P>(
    label: &'static str,
    predicate: P,
) -> impl Fn(&A) -> bool + Send + Sync + 'static
where
    A: ?Sized + 'static,
    P: Fn(&A) -> bool + Send + Sync + 'static,
{
    move |args: &A| {
        let verdict = predicate(args);

        #[cfg(feature = "tracing")]
        tracing::trace!(label, verdict, "predicate evaluated");
        #[cfg(not(feature = "tracing"))]
        let _ = label;

        verdict
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::less_than;
    use polyenv_core::Environment;

    #[test]
    fn test_traced_passthrough() {
        let implementation = traced("negate", |n: &i64| -n);
        assert_eq!(implementation(&4), -4);

        let predicate = traced_predicate("small", less_than(5i64));
        assert!(predicate(&4));
        assert!(!predicate(&6));
    }

    #[test]
    fn test_traced_members_dispatch() {
        let env = Environment::<&str, i64, i64>::new()
            .method(
                "negate",
                traced_predicate("small", less_than(5i64)),
                traced("negate", |n: &i64| -n),
            )
            .unwrap();

        assert_eq!(env.invoke("negate", &3).unwrap(), -3);
        assert!(env.invoke("negate", &9).is_err());
    }
}
