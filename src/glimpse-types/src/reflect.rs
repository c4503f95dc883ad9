//! The capability interface through which live objects are inspected.

use std::{any::Any, borrow::Cow, fmt};

use thiserror::Error;

use crate::ClassDescriptor;

/// Failed attempt to read a property from an instance.
///
/// Accessors are attached statically, so the only way a read can fail is a
/// descriptor wired to the wrong concrete type. This is a configuration
/// error and aborts the whole formatting call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("instance of '{actual}' cannot be read as '{expected}'")]
pub struct ReadError {
    /// The concrete type the accessor expected.
    pub expected: &'static str,
    /// The descriptor name of the instance that was actually passed.
    pub actual: &'static str,
}

/// A type whose instances can be rendered through declarative configuration.
///
/// The `Debug` supertrait stands in for a plain `toString`: it is what
/// values are stringified with when policy says to use them as-is without
/// expansion.
pub trait Formattable: Any + fmt::Debug {
    /// The static descriptor of the instance's runtime type.
    ///
    /// Every instance of a given type must return the same descriptor;
    /// descriptor identity is what the metadata cache keys on.
    fn descriptor(&self) -> &'static ClassDescriptor;
}

/// Signature of a property accessor stored in a
/// [`PropertyDescriptor`](crate::PropertyDescriptor).
pub type PropertyGetter = fn(&dyn Formattable) -> Result<PropertyValue<'_>, ReadError>;

/// Borrows the concrete type back out of a `dyn Formattable` instance.
///
/// The usual first line of every property accessor.
pub fn downcast<T: Formattable>(instance: &dyn Formattable) -> Result<&T, ReadError> {
    let actual = instance.descriptor().name;
    (instance as &dyn Any)
        .downcast_ref::<T>()
        .ok_or(ReadError {
            expected: std::any::type_name::<T>(),
            actual,
        })
}

/// The raw value an accessor reads out of an instance, before any policy
/// is applied.
#[derive(Clone, Debug)]
pub enum PropertyValue<'a> {
    /// The property holds no value (`Option::None` and friends).
    Null,
    Bool(bool),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Text(Cow<'a, str>),
    /// A compound value, subject to the transitivity policies.
    Nested(&'a dyn Formattable),
}

impl<'a> PropertyValue<'a> {
    pub fn nested(value: &'a dyn Formattable) -> Self {
        Self::Nested(value)
    }

    /// Maps an optional compound reference, turning `None` into
    /// [`PropertyValue::Null`].
    pub fn nested_opt<T: Formattable>(value: Option<&'a T>) -> Self {
        match value {
            Some(v) => Self::Nested(v),
            None => Self::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for PropertyValue<'_> {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<'a> From<&'a str> for PropertyValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for PropertyValue<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for PropertyValue<'_> {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

macro_rules! property_value_from_int {
    ($variant:ident => $($ty:ty),*) => {
        $(impl From<$ty> for PropertyValue<'_> {
            fn from(value: $ty) -> Self {
                Self::$variant(value.into())
            }
        })*
    };
}

property_value_from_int!(Signed => i8, i16, i32, i64);
property_value_from_int!(Unsigned => u8, u16, u32, u64);
property_value_from_int!(Float => f32, f64);

impl<'a, T: Into<PropertyValue<'a>>> From<Option<T>> for PropertyValue<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
