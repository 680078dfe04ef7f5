//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use polyenv::{BoxError, Environment};
use tracing_subscriber::EnvFilter;

// ============================================================================
// Environment Shapes
// ============================================================================

/// Zero-argument methods returning numbers; numeric properties.
pub type Nullary = Environment<&'static str, (), f64>;

/// Single integer argument, labelled results.
pub type Unary = Environment<&'static str, i64, &'static str, i64>;

/// Implementations that may fail with their own error.
pub type Fallible = Environment<&'static str, i64, Result<bool, BoxError>>;

/// Two-argument calls, as a tuple.
pub type Binary = Environment<String, (i64, i64), i64>;

// ============================================================================
// Helpers
// ============================================================================

/// Route `tracing` output to the test harness. Filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Every result a `Unary` environment produces for `inputs`, in order.
pub fn outcomes(env: &Unary, name: &str, inputs: &[i64]) -> Vec<Option<&'static str>> {
    inputs
        .iter()
        .map(|input| env.invoke(name, input).ok())
        .collect()
}
