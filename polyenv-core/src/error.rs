//! Error types for polyenv.
//!
//! Every failure raised by the environment itself is an [`EnvironmentError`]:
//!
//! - [`EnvironmentError::NameCollision`] - a method and a property competed for one name
//! - [`EnvironmentError::NotImplemented`] - no predicate accepted the call's arguments
//! - [`EnvironmentError::UnknownMethod`] - the name has no method at all
//!
//! Errors produced by caller-supplied implementations never pass through this
//! type; they travel inside the implementation's own result value.

use crate::member::MemberKind;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while building or dispatching an environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentError {
    /// A member of the other kind already occupies the name.
    #[error("{attempted} `{name}` is already in environment.")]
    NameCollision {
        /// The contested name.
        name: String,
        /// The kind of member that was being added.
        attempted: MemberKind,
        /// The kind of member already registered under the name.
        existing: MemberKind,
    },

    /// Every registered predicate rejected the arguments.
    #[error("Method `{name}` not implemented for this input")]
    NotImplemented {
        /// The method that was invoked.
        name: String,
    },

    /// Invoked a name that has no method registrations.
    #[error("Method `{name}` is not in environment.")]
    UnknownMethod {
        /// The requested name.
        name: String,
    },
}

impl EnvironmentError {
    pub(crate) fn collision(
        name: &impl std::fmt::Display,
        attempted: MemberKind,
        existing: MemberKind,
    ) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(%name, %attempted, %existing, "member name collision");

        EnvironmentError::NameCollision {
            name: name.to_string(),
            attempted,
            existing,
        }
    }

    /// The member name this error refers to.
    pub fn name(&self) -> &str {
        match self {
            EnvironmentError::NameCollision { name, .. }
            | EnvironmentError::NotImplemented { name }
            | EnvironmentError::UnknownMethod { name } => name,
        }
    }

    /// Returns `true` for a method/property name collision.
    pub fn is_name_collision(&self) -> bool {
        matches!(self, EnvironmentError::NameCollision { .. })
    }

    /// Returns `true` when dispatch found no accepting predicate.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, EnvironmentError::NotImplemented { .. })
    }
}
