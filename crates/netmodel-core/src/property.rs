//! Generic string-keyed attribute bags. Every entity of the model carries one.

use std::collections::BTreeMap;

/// A mutable mapping from property names to opaque string values.
///
/// Cloning a container produces an independent copy: mutating the copy never affects the source
/// and vice versa.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PropertyContainer {
    inner: BTreeMap<String, String>,
}

impl PropertyContainer {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of property `name`, if set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(name).map(String::as_str)
    }

    /// Sets property `name`, returning the value it replaces.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.inner.insert(name.into(), value.into())
    }

    /// Removes property `name`, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.inner.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    /// Get an iterator over all property names.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.keys().map(String::as_str)
    }

    /// Get an iterator over all `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    delegate::delegate! {
        to self.inner {
            pub fn len(&self) -> usize;

            pub fn is_empty(&self) -> bool;

            pub fn clear(&mut self);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for PropertyContainer
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for PropertyContainer
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.inner
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

/// An entity carrying a [`PropertyContainer`].
///
/// Implementors only provide access to their container; the property operations come for free.
pub trait HasProperties {
    fn properties(&self) -> &PropertyContainer;

    fn properties_mut(&mut self) -> &mut PropertyContainer;

    fn property(&self, name: &str) -> Option<&str> {
        self.properties().get(name)
    }

    fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String>
    where
        Self: Sized,
    {
        self.properties_mut().set(name, value)
    }

    fn remove_property(&mut self, name: &str) -> Option<String> {
        self.properties_mut().remove(name)
    }

    fn property_names(&self) -> Vec<&str> {
        self.properties().names().collect()
    }
}

impl HasProperties for PropertyContainer {
    fn properties(&self) -> &PropertyContainer {
        self
    }

    fn properties_mut(&mut self) -> &mut PropertyContainer {
        self
    }
}

// Every entity keeps its properties in a field called `props`
macro_rules! properties_impl {
    ($name: ty) => {
        impl $crate::property::HasProperties for $name {
            fn properties(&self) -> &$crate::property::PropertyContainer {
                &self.props
            }

            fn properties_mut(&mut self) -> &mut $crate::property::PropertyContainer {
                &mut self.props
            }
        }
    };
}

/// A [`PropertyContainer`] carrying an identifying name.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NamedPropertyContainer {
    name: String,
    #[serde(default, skip_serializing_if = "PropertyContainer::is_empty")]
    props: PropertyContainer,
}

properties_impl!(NamedPropertyContainer);

impl NamedPropertyContainer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            props: PropertyContainer::new(),
        }
    }

    /// Get a reference to the container's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the container's name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

/// The protocol stack deployed on a [`Node`](crate::Node).
pub type ProtocolStack = NamedPropertyContainer;

/// An application deployed on a [`Node`](crate::Node).
pub type Application = NamedPropertyContainer;
