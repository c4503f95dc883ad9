use std::{fmt, hash::Hash, hash::Hasher, ptr};

use crate::{PropertyConfig, PropertyGetter, TypeConfig};

/// Static reflection metadata for one class level of a formattable type.
///
/// Descriptors form a chain through [`parent`](Self::parent), most-derived
/// level first. Ancestor levels belong to the concrete type they were
/// declared for: their property accessors read through the concrete
/// instance, the way generated reflection metadata would.
pub struct ClassDescriptor {
    /// Simple name of the class, used as the group label in output.
    pub name: &'static str,
    /// The next ancestor level, if any.
    pub parent: Option<&'static ClassDescriptor>,
    /// Formatting configuration attached to the type itself.
    pub config: Option<TypeConfig>,
    /// Formatting configuration attached to the type's render entry point,
    /// consulted only when [`config`](Self::config) is absent. A missing
    /// entry point is an expected negative, not an error.
    pub entry_config: Option<TypeConfig>,
    /// The properties declared directly on this class level, in
    /// declaration order.
    pub properties: &'static [PropertyDescriptor],
}

impl ClassDescriptor {
    /// The configuration this type carries, resolving the entry-point
    /// fallback. `None` means the type does not opt into formatting.
    pub fn formatting_config(&self) -> Option<&TypeConfig> {
        self.config.as_ref().or(self.entry_config.as_ref())
    }
}

impl fmt::Debug for ClassDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Descriptor graphs may be cyclic, so never recurse here.
        f.debug_struct("ClassDescriptor")
            .field("name", &self.name)
            .field("properties", &self.properties.len())
            .finish_non_exhaustive()
    }
}

/// The declared (static) type of a property.
#[derive(Clone, Copy)]
pub enum DeclaredType {
    /// A platform type that is inherently safe to stringify directly,
    /// such as a number, boolean or text type.
    Foundational(&'static str),
    /// A user-defined compound type, subject to transitivity policies.
    Compound(&'static ClassDescriptor),
}

impl DeclaredType {
    /// Display name of the declared type.
    pub fn name(&self) -> &'static str {
        match *self {
            Self::Foundational(name) => name,
            Self::Compound(descriptor) => descriptor.name,
        }
    }

    pub fn is_foundational(&self) -> bool {
        matches!(self, Self::Foundational(_))
    }
}

impl PartialEq for DeclaredType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Foundational(a), Self::Foundational(b)) => a == b,
            (Self::Compound(a), Self::Compound(b)) => ptr::eq(*a, *b),
            _ => false,
        }
    }
}

impl Eq for DeclaredType {}

impl fmt::Debug for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static facts about one property declared on a class level.
pub struct PropertyDescriptor {
    /// Property name, unique within its declaring class. Names starting
    /// with `__` mark synthetic storage that is not part of the logical
    /// data model and is skipped during metadata computation.
    pub name: &'static str,
    /// The property's declared type.
    pub declared: DeclaredType,
    /// Per-property formatting configuration, if any was declared.
    pub config: Option<PropertyConfig>,
    /// Reads the property's current value from an instance without
    /// mutating it.
    pub get: PropertyGetter,
}

impl fmt::Debug for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.name)
            .field("declared", &self.declared)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Opaque identity of a formattable type.
///
/// Two tokens are equal exactly when they refer to the same static
/// descriptor, which makes the token usable as a cache key and as the unit
/// of configuration lookup.
#[derive(Clone, Copy)]
pub struct TypeToken(&'static ClassDescriptor);

impl TypeToken {
    pub fn of(descriptor: &'static ClassDescriptor) -> Self {
        Self(descriptor)
    }

    pub fn descriptor(&self) -> &'static ClassDescriptor {
        self.0
    }

    pub fn name(&self) -> &'static str {
        self.0.name
    }
}

impl PartialEq for TypeToken {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.0, other.0)
    }
}

impl Eq for TypeToken {}

impl Hash for TypeToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ptr::hash(self.0, state);
    }
}

impl fmt::Debug for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeToken({})", self.0.name)
    }
}
