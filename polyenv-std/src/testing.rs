//! Testing utilities for polyenv.
//!
//! Spies that make dispatch observable: how often a predicate was evaluated,
//! which arguments reached an implementation, and in what order.
//!
//! # Features
//!
//! - [`CallCounter`]: counts evaluations of the closures it hands out
//! - [`CallRecorder`]: records the arguments of every evaluation

use std::sync::{
    Arc, Mutex, MutexGuard, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Call Counter
// ============================================================================

/// Counts calls to the predicates and implementations it produces.
///
/// All closures produced by one counter (and its clones) share the count.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CallCounter::new();
/// let env = Environment::<&str, i64, i64>::new()
///     .method("a", counter.predicate(false), |_| 0)?;
///
/// let _ = env.invoke("a", &1);
/// assert_eq!(counter.count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    count: Arc<AtomicUsize>,
}

impl CallCounter {
    /// Create a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of calls so far.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the count to zero.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }

    /// A predicate that counts and answers `verdict`.
    pub fn predicate<A>(
        &self,
        verdict: bool,
    ) -> impl Fn(&A) -> bool + Send + Sync + 'static + use<A>
    where
        A: ?Sized + 'static,
    {
        self.wrap(move |_: &A| verdict)
    }

    /// An implementation that counts and returns a clone of `value`.
    pub fn implementation<A, R>(
        &self,
        value: R,
    ) -> impl Fn(&A) -> R + Send + Sync + 'static + use<A, R>
    where
        A: ?Sized + 'static,
        R: Clone + Send + Sync + 'static,
    {
        self.wrap(move |_: &A| value.clone())
    }

    /// Counts every call, then delegates to `inner`.
    pub fn wrap<A, T, F>(
        &self,
        inner: F,
    ) -> impl Fn(&A) -> T + Send + Sync + 'static + use<A, T, F>
    where
        A: ?Sized + 'static,
        T: 'static,
        F: Fn(&A) -> T + Send + Sync + 'static,
    {
        let count = Arc::clone(&self.count);
        move |args: &A| {
            count.fetch_add(1, Ordering::SeqCst);
            inner(args)
        }
    }
}

// ============================================================================
// Call Recorder
// ============================================================================

/// Records the arguments of every call to the closures it produces.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = CallRecorder::<i64>::new();
/// let env = Environment::<&str, i64, i64>::new()
///     .method("a", recorder.predicate(true), |n| *n)?;
///
/// env.invoke("a", &7)?;
/// assert_eq!(recorder.calls(), vec![7]);
/// ```
#[derive(Debug)]
pub struct CallRecorder<T> {
    calls: Arc<Mutex<Vec<T>>>,
}

impl<T> CallRecorder<T>
where
    T: Clone + Send + 'static,
{
    /// Create a recorder with no calls.
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A clone of the recorded arguments, oldest first.
    pub fn calls(&self) -> Vec<T> {
        self.lock().clone()
    }

    /// Number of recorded calls.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Forget all recorded calls.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// A predicate that records its arguments and answers `verdict`.
    pub fn predicate(
        &self,
        verdict: bool,
    ) -> impl Fn(&T) -> bool + Send + Sync + 'static + use<T> {
        self.wrap(move |_: &T| verdict)
    }

    /// Records every call, then delegates to `inner`.
    pub fn wrap<U, F>(
        &self,
        inner: F,
    ) -> impl Fn(&T) -> U + Send + Sync + 'static + use<T, U, F>
    where
        U: 'static,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        let calls = Arc::clone(&self.calls);
        move |args: &T| {
            calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(args.clone());
            inner(args)
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<T>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for CallRecorder<T>
where
    T: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for CallRecorder<T> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}
