//! Members exposed by an environment.

use crate::multimethod::Multimethod;
use std::fmt;

/// The two kinds of member an environment can hold under a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// A predicate-dispatched multimethod.
    Method,
    /// A plain value.
    Property,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberKind::Method => f.write_str("Method"),
            MemberKind::Property => f.write_str("Property"),
        }
    }
}

/// A member looked up by name: either a callable multimethod or a bound value.
pub enum Member<'a, K, A: ?Sized, R, V> {
    /// A callable multimethod.
    Method(Multimethod<'a, K, A, R>),
    /// The value bound to a property.
    Property(&'a V),
}

impl<'a, K, A: ?Sized, R, V> Member<'a, K, A, R, V> {
    /// The kind of this member.
    pub fn kind(&self) -> MemberKind {
        match self {
            Member::Method(_) => MemberKind::Method,
            Member::Property(_) => MemberKind::Property,
        }
    }

    /// The multimethod, if this member is one.
    pub fn as_method(&self) -> Option<Multimethod<'a, K, A, R>> {
        match self {
            Member::Method(method) => Some(*method),
            Member::Property(_) => None,
        }
    }

    /// The property value, if this member is one.
    pub fn as_property(&self) -> Option<&'a V> {
        match self {
            Member::Method(_) => None,
            Member::Property(value) => Some(*value),
        }
    }
}

impl<K, A: ?Sized, R, V> Clone for Member<'_, K, A, R, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, A: ?Sized, R, V> Copy for Member<'_, K, A, R, V> {}

impl<K: fmt::Debug, A: ?Sized, R, V: fmt::Debug> fmt::Debug for Member<'_, K, A, R, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Member::Method(method) => f.debug_tuple("Method").field(method).finish(),
            Member::Property(value) => f.debug_tuple("Property").field(value).finish(),
        }
    }
}
