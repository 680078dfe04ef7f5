//! # polyenv-std
//!
//! Standard building blocks for polyenv environments.
//!
//! This crate provides:
//! - **Predicates**: [`predicates::always`], [`predicates::less_than`] and the
//!   `not` / `and` / `or` / `on` combinators
//! - **Implementations**: [`implementations::constant`],
//!   [`implementations::failing`]
//! - **Logging**: [`logging::traced`] and [`logging::traced_predicate`]
//!   (active with the `tracing` feature)
//! - **Testing**: [`testing::CallCounter`], [`testing::CallRecorder`]

#![deny(clippy::pub_use, clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use polyenv_core;

// Modules
pub mod implementations;
pub mod logging;
pub mod predicates;
pub mod testing;
