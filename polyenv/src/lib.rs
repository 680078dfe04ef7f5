//! # polyenv - Predicate-Dispatched Environments
//!
//! `polyenv` builds immutable environments of multimethods and properties.
//! Each method name owns an ordered list of predicate-guarded
//! implementations; a call runs the first implementation whose predicate
//! accepts the arguments. It is a declarative alternative to type-based
//! overloading.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use polyenv::prelude::*;
//!
//! let env = Environment::<&str, i64, i64>::new()
//!     .method("negate", always(), |n| -n)?
//!     .property("name", 7)?;
//!
//! assert_eq!(env.invoke("negate", &100)?, -100);
//! assert_eq!(env.property_value("name"), Some(&7));
//! ```
//!
//! ## Layering
//!
//! `env_append` stacks one environment over another. The argument wins:
//! its registrations are tried first and its property values replace the
//! receiver's.
//!
//! ```rust,ignore
//! let defaults = Environment::<&str, i64, &str>::new()
//!     .method("describe", always(), |_| "number")?;
//! let overrides = Environment::new()
//!     .method("describe", equal_to(0), |_| "zero")?;
//!
//! let env = defaults.env_append(&overrides);
//! assert_eq!(env.invoke("describe", &0)?, "zero");
//! assert_eq!(env.invoke("describe", &1)?, "number");
//! ```

#![deny(clippy::pub_use, clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use polyenv_core::{
    // Error types
    BoxError,
    // Environment
    Environment,
    EnvironmentError,
    // Members
    Member,
    MemberKind,
    MethodTable,
    Multimethod,
    PropertyTable,
    // Registration
    Registration,
};

/// Standard predicates.
pub mod predicates {
    #![allow(clippy::wildcard_imports)]
    pub use polyenv_std::predicates::*;
}

/// Standard implementations.
pub mod implementations {
    #![allow(clippy::wildcard_imports)]
    pub use polyenv_std::implementations::*;
}

/// Logging wrappers.
pub mod logging {
    #![allow(clippy::wildcard_imports)]
    pub use polyenv_std::logging::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use polyenv_std::testing::*;
}

/// Prelude module - common imports for polyenv.
///
/// # Usage
///
/// ```rust,ignore
/// use polyenv::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Environment, EnvironmentError, Member, MemberKind, Multimethod, Registration,
        implementations::{constant, failing},
        predicates::{always, and, equal_to, greater_than, less_than, never, not, on, or},
    };
}
