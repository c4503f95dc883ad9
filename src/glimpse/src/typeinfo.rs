//! Resolved type metadata for formattable types.
//!
//! A [`TypeInfo`] is the full picture for one type: one [`ClassInfo`] per
//! level of the descriptor chain (the type itself first, then each
//! ancestor) plus the type's resolved inclusion and transitive policies.
//! Metadata is a pure function of the type's descriptor and is memoized by
//! [`TypeInfoCache`].

use std::sync::Arc;

use glimpse_types::{
    DeclaredType, Formattable, IncludePolicy, PropertyGetter, PropertyInclude, PropertyValue,
    ReadError, TransitivePolicy, TypeToken,
};

mod cache;
pub use cache::TypeInfoCache;

mod filter;

/// One property of one class level, with every policy fully resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyInfo {
    name: &'static str,
    declared: DeclaredType,
    include: PropertyInclude,
    include_nested: PropertyInclude,
    transitive: TransitivePolicy,
    explicit_transitive: bool,
    get: PropertyGetter,
}

impl PropertyInfo {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn declared(&self) -> DeclaredType {
        self.declared
    }

    /// Inclusion of this property when its owner is formatted directly.
    pub fn include(&self) -> PropertyInclude {
        self.include
    }

    /// Inclusion of this property when its owner is a nested value.
    pub fn include_nested(&self) -> PropertyInclude {
        self.include_nested
    }

    /// The resolved transitive policy for this property's value.
    pub fn transitive(&self) -> TransitivePolicy {
        self.transitive
    }

    /// Whether the policy came from an explicit per-property declaration
    /// rather than from the declared type or a default.
    pub fn has_explicit_transitive(&self) -> bool {
        self.explicit_transitive
    }

    /// Reads the property's current value from an instance.
    pub fn read<'a>(&self, instance: &'a dyn Formattable) -> Result<PropertyValue<'a>, ReadError> {
        (self.get)(instance)
    }
}

/// Property metadata scoped to exactly one class in a hierarchy, never
/// including inherited properties.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassInfo {
    declaring: TypeToken,
    properties: Vec<PropertyInfo>,
}

impl ClassInfo {
    /// The class this level describes.
    pub fn declaring(&self) -> TypeToken {
        self.declaring
    }

    pub fn name(&self) -> &'static str {
        self.declaring.name()
    }

    /// The class's own properties, in declaration order.
    pub fn properties(&self) -> &[PropertyInfo] {
        &self.properties
    }
}

/// Resolved metadata for a formattable type.
///
/// Immutable once built; the class list is shared, so deriving a variant
/// with a different transitive policy through [`with_transitive`] is a
/// cheap copy.
///
/// [`with_transitive`]: Self::with_transitive
#[derive(Clone, Debug, PartialEq)]
pub struct TypeInfo {
    subject: TypeToken,
    classes: Arc<[ClassInfo]>,
    include: IncludePolicy,
    transitive: TransitivePolicy,
}

impl TypeInfo {
    /// The type this metadata describes.
    pub fn subject(&self) -> TypeToken {
        self.subject
    }

    /// Class levels in self-to-ancestor order.
    pub fn classes(&self) -> &[ClassInfo] {
        &self.classes
    }

    /// Which of this type's properties are included when an instance is
    /// formatted.
    pub fn include(&self) -> IncludePolicy {
        self.include
    }

    /// How instances of this type behave when referenced from elsewhere.
    pub fn transitive(&self) -> TransitivePolicy {
        self.transitive
    }

    /// The same metadata with only the transitive policy replaced.
    pub fn with_transitive(&self, transitive: TransitivePolicy) -> TypeInfo {
        TypeInfo {
            subject: self.subject,
            classes: self.classes.clone(),
            include: self.include,
            transitive,
        }
    }
}
