//! Standard predicates.
//!
//! Each function returns a closure that can be handed to
//! [`Environment::method`] as the predicate of a registration. The
//! combinators ([`not`], [`and`], [`or`], [`on`]) build new predicates out of
//! existing ones.
//!
//! [`Environment::method`]: polyenv_core::Environment::method

/// Accepts every argument list.
pub fn always<A>() -> impl Fn(&A) -> bool + Clone + Send + Sync + 'static
where
    A: ?Sized + 'static,
{
    |_: &A| true
}

/// Rejects every argument list.
pub fn never<A>() -> impl Fn(&A) -> bool + Clone + Send + Sync + 'static
where
    A: ?Sized + 'static,
{
    |_: &A| false
}

/// Accepts values strictly below `bound`.
pub fn less_than<T>(bound: T) -> impl Fn(&T) -> bool + Clone + Send + Sync + 'static
where
    T: PartialOrd + Clone + Send + Sync + 'static,
{
    move |value: &T| value < &bound
}

/// Accepts values strictly above `bound`.
pub fn greater_than<T>(bound: T) -> impl Fn(&T) -> bool + Clone + Send + Sync + 'static
where
    T: PartialOrd + Clone + Send + Sync + 'static,
{
    move |value: &T| value > &bound
}

/// Accepts values equal to `expected`.
pub fn equal_to<T>(expected: T) -> impl Fn(&T) -> bool + Clone + Send + Sync + 'static
where
    T: PartialEq + Clone + Send + Sync + 'static,
{
    move |value: &T| value == &expected
}

/// Inverts a predicate.
pub fn not<A, P>(predicate: P) -> impl Fn(&A) -> bool + Clone + Send + Sync + 'static
where
    A: ?Sized + 'static,
    P: Fn(&A) -> bool + Clone + Send + Sync + 'static,
{
    move |args: &A| !predicate(args)
}

/// Accepts when both predicates accept. `second` is skipped if `first` rejects.
pub fn and<A, P, Q>(first: P, second: Q) -> impl Fn(&A) -> bool + Clone + Send + Sync + 'static
where
    A: ?Sized + 'static,
    P: Fn(&A) -> bool + Clone + Send + Sync + 'static,
    Q: Fn(&A) -> bool + Clone + Send + Sync + 'static,
{
    move |args: &A| first(args) && second(args)
}

/// Accepts when either predicate accepts. `second` is skipped if `first` accepts.
pub fn or<A, P, Q>(first: P, second: Q) -> impl Fn(&A) -> bool + Clone + Send + Sync + 'static
where
    A: ?Sized + 'static,
    P: Fn(&A) -> bool + Clone + Send + Sync + 'static,
    Q: Fn(&A) -> bool + Clone + Send + Sync + 'static,
{
    move |args: &A| first(args) || second(args)
}

/// Tests a value extracted from the argument list.
///
/// ```rust,ignore
/// // Dispatch on the first element of a pair.
/// let first_is_small = on(|args: &(i64, i64)| args.0, less_than(5));
/// ```
pub fn on<A, T, F, P>(
    project: F,
    predicate: P,
) -> impl Fn(&A) -> bool + Clone + Send + Sync + 'static
where
    A: ?Sized + 'static,
    T: 'static,
    F: Fn(&A) -> T + Clone + Send + Sync + 'static,
    P: Fn(&T) -> bool + Clone + Send + Sync + 'static,
{
    move |args: &A| predicate(&project(args))
}
