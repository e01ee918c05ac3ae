//! Parameter bindings for candidate items.
//!
//! A parametrized test declaration is instantiated once per combination of
//! declared argument values. The concrete values chosen for one
//! instantiation are its bindings. Values are heterogeneous, so the map
//! stores them type-erased behind [`BindingValue`].

use std::{
    any::Any,
    borrow::Cow,
    collections::HashMap,
    fmt::{Debug, Display},
    ops::Deref,
};

pub type BoxedValue = Box<dyn BindingValue>;

/// A type-erased parameter value.
///
/// Blanket-implemented for every `Clone + Eq` type that is also
/// `Debug + Display`, which covers the usual parametrization inputs
/// (integers, strings, bools, user enums).
pub trait BindingValue: Any + Debug + Display + Send + Sync + 'static {
    fn clone_value(&self) -> BoxedValue;
    fn eq_value(&self, other: &dyn BindingValue) -> bool;
}

impl<T> BindingValue for T
where
    T: Any + Debug + Display + Clone + Eq + Send + Sync,
{
    fn clone_value(&self) -> BoxedValue {
        Box::new(self.clone())
    }

    fn eq_value(&self, other: &dyn BindingValue) -> bool {
        (other as &dyn Any)
            .downcast_ref::<T>()
            .map(|other| other == self)
            .unwrap_or(false)
    }
}

impl Clone for BoxedValue {
    fn clone(&self) -> Self {
        self.clone_value()
    }
}

impl PartialEq for BoxedValue {
    fn eq(&self, other: &Self) -> bool {
        self.eq_value(other.deref())
    }
}

impl Eq for BoxedValue {}

/// The concrete argument values resolved for one parametrized
/// instantiation, keyed by parameter name.
///
/// Predicates always receive the full map and must tolerate keys they do
/// not inspect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings(HashMap<Cow<'static, str>, BoxedValue>);

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<Cow<'static, str>>, value: impl BindingValue) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<Cow<'static, str>>, value: impl BindingValue) {
        self.0.insert(name.into(), Box::new(value));
    }

    pub fn get(&self, name: &str) -> Option<&dyn BindingValue> {
        self.0.get(name).map(|value| value.deref())
    }

    /// The value bound to `name`, downcast to a concrete type.
    pub fn value<T: BindingValue>(&self, name: &str) -> Option<&T> {
        (self.get(name)? as &dyn Any).downcast_ref()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn BindingValue)> {
        self.0.iter().map(|(name, value)| (name.as_ref(), value.deref()))
    }
}
