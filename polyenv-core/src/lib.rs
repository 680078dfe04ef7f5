//! # polyenv-core
//!
//! Immutable environments of predicate-dispatched multimethods and plain
//! properties.
//!
//! This crate has minimal dependencies and holds the whole dispatch mechanism.
//! Ready-made predicates and test spies live in `polyenv-std`.
//!
//! # Building Blocks
//!
//! ## [`Registration`]
//!
//! A predicate paired with the implementation it guards. Both are plain
//! closures over the call's argument list.
//!
//! ## [`Multimethod`]
//!
//! The callable face of one method name. Calling it runs the first
//! registration whose predicate accepts the arguments (first match wins).
//!
//! ## [`Environment`]
//!
//! An immutable value holding methods and properties under names.
//!
//! - **Builders**: `method`, `property`, `env_concat` and `env_append` return
//!   new environments; the receiver never changes
//! - **Lookup**: `get`, `invoke` and `property_value` expose members by name
//! - **Layering**: `env_append` and `layered` stack environments with a
//!   documented priority
//!
//! # Name Types
//!
//! Lookups only need `K: Eq + Hash`. Building and invoking also need
//! `K: Clone + Display`, because every [`EnvironmentError`] carries the
//! rendered name. Key types without `Display` (tuples, field-less enums) can
//! be wrapped in a newtype that implements it.
//!
//! # Error Types
//!
//! - [`EnvironmentError`] - name collisions and dispatch misses
//!
//! # Features
//!
//! - `tracing`: emit `tracing` events for dispatch and name collisions. The
//!   integration suite checks them with
//!   `cargo test -p polyenv --features tracing`.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod environment;
mod error;
mod member;
mod multimethod;
mod registration;

// Re-exports
pub use environment::{Environment, MethodTable, PropertyTable};
pub use error::{BoxError, EnvironmentError};
pub use member::{Member, MemberKind};
pub use multimethod::Multimethod;
pub use registration::Registration;
