//! # Environment
//!
//! An environment holds methods and properties under names.
//!
//! Methods are multimethods: each name owns an ordered list of
//! [`Registration`]s, and a call runs the first implementation whose predicate
//! accepts the arguments. Registering again under the same name appends, so
//! earlier registrations keep priority.
//!
//! Properties are plain values. Setting one again replaces the old value.
//!
//! Environments are immutable. Every builder returns a new environment and
//! leaves the receiver usable and unchanged:
//!
//! ```rust,ignore
//! let env = Environment::<&str, i64, i64>::new()
//!     .method("negate", |n| *n != 0, |n| -n)?;
//! let env2 = env.method("negate", |_| true, |_| 0)?;
//!
//! assert!(env.invoke("negate", &0).is_err());
//! assert_eq!(env2.invoke("negate", &0)?, 0);
//! ```

use crate::{
    error::EnvironmentError,
    member::{Member, MemberKind},
    multimethod::Multimethod,
    registration::Registration,
};
use std::{borrow::Borrow, collections::HashMap, fmt, hash::Hash, sync::Arc};

/// Method name to registrations, in trial order.
pub type MethodTable<K, A, R> = HashMap<K, Vec<Registration<A, R>>>;

/// Property name to value.
pub type PropertyTable<K, V> = HashMap<K, V>;

/// An immutable bundle of multimethods and properties.
///
/// - `K`: member name
/// - `A`: argument list handed to predicates and implementations
/// - `R`: implementation result; use `Result<T, E>` for fallible implementations
/// - `V`: property value; defaults to `R`. Name it explicitly when `R` is not
///   `Clone` (e.g. `Result<T, BoxError>`) and properties are needed, since
///   the property builders clone the table.
pub struct Environment<K, A: ?Sized, R, V = R> {
    methods: Arc<MethodTable<K, A, R>>,
    properties: Arc<PropertyTable<K, V>>,
}

impl<K, A: ?Sized, R, V> Environment<K, A, R, V> {
    /// Create an environment with no methods and no properties.
    pub fn new() -> Self {
        Self::from_parts(HashMap::new(), HashMap::new())
    }

    /// Wrap existing tables without checking them.
    ///
    /// A name may end up in both tables; see [`Environment::try_from_parts`]
    /// for the checked version.
    pub fn from_parts(methods: MethodTable<K, A, R>, properties: PropertyTable<K, V>) -> Self {
        Self {
            methods: Arc::new(methods),
            properties: Arc::new(properties),
        }
    }

    /// Read-only view of the method table.
    pub fn methods(&self) -> &MethodTable<K, A, R> {
        &self.methods
    }

    /// Read-only view of the property table.
    pub fn properties(&self) -> &PropertyTable<K, V> {
        &self.properties
    }

    /// Method names, in no particular order.
    pub fn method_names(&self) -> impl Iterator<Item = &K> {
        self.methods.keys()
    }

    /// Property names, in no particular order.
    pub fn property_names(&self) -> impl Iterator<Item = &K> {
        self.properties.keys()
    }

    /// Number of method entries plus number of property entries.
    ///
    /// A name present in both tables (see [`Environment::env_concat`]) counts
    /// twice.
    pub fn len(&self) -> usize {
        self.methods.len() + self.properties.len()
    }

    /// Whether nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty() && self.properties.is_empty()
    }
}

impl<K, A: ?Sized, R, V> Environment<K, A, R, V>
where
    K: Eq + Hash,
{
    /// Look up a member by name.
    ///
    /// If the name is in both tables (only possible through
    /// [`Environment::env_concat`] or [`Environment::from_parts`]), the method
    /// shadows the property.
    pub fn get<Q>(&self, name: &Q) -> Option<Member<'_, K, A, R, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        match self.multimethod(name) {
            Some(method) => Some(Member::Method(method)),
            None => self.properties.get(name).map(Member::Property),
        }
    }

    /// The callable handle for a method name.
    pub fn multimethod<Q>(&self, name: &Q) -> Option<Multimethod<'_, K, A, R>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.methods
            .get_key_value(name)
            .map(|(name, registrations)| Multimethod::new(name, registrations))
    }

    /// The value bound to a property name.
    pub fn property_value<Q>(&self, name: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.properties.get(name)
    }

    /// Registrations for a method name, in trial order.
    pub fn registrations<Q>(&self, name: &Q) -> Option<&[Registration<A, R>]>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.methods.get(name).map(Vec::as_slice)
    }

    /// Whether the name is bound to a method or a property.
    pub fn contains<Q>(&self, name: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.methods.contains_key(name) || self.properties.contains_key(name)
    }

    /// The kind of member bound to the name.
    pub fn kind_of<Q>(&self, name: &Q) -> Option<MemberKind>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.get(name).map(|member| member.kind())
    }
}

impl<K, A: ?Sized, R, V> Environment<K, A, R, V>
where
    K: Eq + Hash + fmt::Display,
{
    /// Call the method bound to `name` with `args`.
    ///
    /// Fails with [`EnvironmentError::UnknownMethod`] if the name has no
    /// method, and with [`EnvironmentError::NotImplemented`] if no predicate
    /// accepts `args`.
    pub fn invoke<Q>(&self, name: &Q, args: &A) -> Result<R, EnvironmentError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq + Hash + fmt::Display,
    {
        let method = self
            .multimethod(name)
            .ok_or_else(|| EnvironmentError::UnknownMethod {
                name: name.to_string(),
            })?;
        method.call(args)
    }
}

impl<K, A: ?Sized, R, V> Environment<K, A, R, V>
where
    K: Eq + Hash + Clone + fmt::Display,
{
    /// Add an implementation for `name`, guarded by `predicate`.
    ///
    /// The registration is appended, so it is only tried after every earlier
    /// registration for `name` has rejected the arguments.
    pub fn method<P, I>(
        &self,
        name: K,
        predicate: P,
        implementation: I,
    ) -> Result<Self, EnvironmentError>
    where
        P: Fn(&A) -> bool + Send + Sync + 'static,
        I: Fn(&A) -> R + Send + Sync + 'static,
    {
        self.with_registration(name, Registration::new(predicate, implementation))
    }

    /// Append a prebuilt registration for `name`.
    pub fn with_registration(
        &self,
        name: K,
        registration: Registration<A, R>,
    ) -> Result<Self, EnvironmentError> {
        if self.properties.contains_key(&name) {
            return Err(EnvironmentError::collision(
                &name,
                MemberKind::Method,
                MemberKind::Property,
            ));
        }

        let mut methods = self.methods.as_ref().clone();
        methods.entry(name).or_default().push(registration);

        Ok(Self {
            methods: Arc::new(methods),
            properties: Arc::clone(&self.properties),
        })
    }
}

impl<K, A: ?Sized, R, V> Environment<K, A, R, V>
where
    K: Eq + Hash + Clone + fmt::Display,
    V: Clone,
{
    /// Check that no name is used by both tables, then wrap them.
    pub fn try_from_parts(
        methods: MethodTable<K, A, R>,
        properties: PropertyTable<K, V>,
    ) -> Result<Self, EnvironmentError> {
        if let Some(name) = properties.keys().find(|name| methods.contains_key(*name)) {
            return Err(EnvironmentError::collision(
                name,
                MemberKind::Property,
                MemberKind::Method,
            ));
        }
        Ok(Self::from_parts(methods, properties))
    }

    /// Bind `name` to `value`, replacing any previous value.
    pub fn property(&self, name: K, value: V) -> Result<Self, EnvironmentError> {
        if self.methods.contains_key(&name) {
            return Err(EnvironmentError::collision(
                &name,
                MemberKind::Property,
                MemberKind::Method,
            ));
        }

        let mut properties = self.properties.as_ref().clone();
        properties.insert(name, value);

        Ok(Self {
            methods: Arc::clone(&self.methods),
            properties: Arc::new(properties),
        })
    }

    /// Merge raw tables into this environment.
    ///
    /// Shared method names keep this environment's registrations first, with
    /// the extra registrations appended. Property values from
    /// `extra_properties` replace this environment's on shared names.
    ///
    /// Unlike [`Environment::method`] and [`Environment::property`], no
    /// method/property collision check is made.
    pub fn env_concat(
        &self,
        extra_methods: &MethodTable<K, A, R>,
        extra_properties: &PropertyTable<K, V>,
    ) -> Self {
        let methods = concat_methods(&*self.methods, extra_methods);

        let mut properties = self.properties.as_ref().clone();
        properties.extend(
            extra_properties
                .iter()
                .map(|(name, value)| (name.clone(), value.clone())),
        );

        Self::from_parts(methods, properties)
    }

    /// Combine with `other`, giving `other` priority.
    ///
    /// On a shared method name `other`'s registrations are tried first; on a
    /// shared property name `other`'s value wins.
    ///
    /// This is not `other.env_concat(self.methods(), self.properties())`:
    /// that call orders the methods the same way but keeps this
    /// environment's property values. Here properties follow the same
    /// priority as methods.
    pub fn env_append(&self, other: &Self) -> Self {
        let methods = concat_methods(&*other.methods, &*self.methods);

        let mut properties = self.properties.as_ref().clone();
        properties.extend(
            other
                .properties
                .iter()
                .map(|(name, value)| (name.clone(), value.clone())),
        );

        Self::from_parts(methods, properties)
    }

    /// Fold [`Environment::env_append`] over `layers`, so later layers take
    /// priority over earlier ones.
    pub fn layered<I>(layers: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        layers
            .into_iter()
            .fold(Self::new(), |base, layer| base.env_append(&layer))
    }
}

/// `base`'s registrations first, then `extra`'s, per name.
fn concat_methods<K, A: ?Sized, R>(
    base: &MethodTable<K, A, R>,
    extra: &MethodTable<K, A, R>,
) -> MethodTable<K, A, R>
where
    K: Eq + Hash + Clone,
{
    let mut methods = HashMap::with_capacity(base.len() + extra.len());

    for (name, registrations) in base {
        let mut merged = registrations.clone();
        if let Some(more) = extra.get(name) {
            merged.extend(more.iter().cloned());
        }
        methods.insert(name.clone(), merged);
    }
    for (name, registrations) in extra {
        methods
            .entry(name.clone())
            .or_insert_with(|| registrations.clone());
    }

    methods
}

impl<K, A: ?Sized, R, V> Default for Environment<K, A, R, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, A: ?Sized, R, V> Clone for Environment<K, A, R, V> {
    fn clone(&self) -> Self {
        Self {
            methods: Arc::clone(&self.methods),
            properties: Arc::clone(&self.properties),
        }
    }
}

impl<K, A: ?Sized, R, V> FromIterator<Self> for Environment<K, A, R, V>
where
    K: Eq + Hash + Clone + fmt::Display,
    V: Clone,
{
    fn from_iter<I: IntoIterator<Item = Self>>(layers: I) -> Self {
        Self::layered(layers)
    }
}

impl<K: fmt::Debug, A: ?Sized, R, V: fmt::Debug> fmt::Debug for Environment<K, A, R, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("methods", &self.methods)
            .field("properties", &self.properties)
            .finish()
    }
}
