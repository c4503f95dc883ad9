use crate::{IncludePolicy, PropertyInclude, TransitivePolicy};

/// Formatting configuration attached to a type.
///
/// Carried either by the type itself or by its render entry point; types
/// without any attached configuration fall back to [`IncludePolicy::All`]
/// and [`TransitivePolicy::Never`] during resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeConfig {
    /// Which of the type's own properties make it into output.
    pub include: IncludePolicy,
    /// How instances of this type behave when referenced from another
    /// object's property.
    pub transitive: TransitivePolicy,
}

impl TypeConfig {
    pub const fn new(include: IncludePolicy, transitive: TransitivePolicy) -> Self {
        Self {
            include,
            transitive,
        }
    }
}

impl Default for TypeConfig {
    fn default() -> Self {
        Self::new(IncludePolicy::All, TransitivePolicy::Never)
    }
}

/// Formatting configuration attached to a single property declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyConfig {
    /// Inclusion of the property when its owner is formatted directly.
    pub include: PropertyInclude,
    /// Inclusion of the property when its owner appears as a nested value
    /// of another object.
    pub include_nested: PropertyInclude,
    /// Explicit transitive policy for the property's value, overriding
    /// whatever its declared type would resolve to.
    pub transitive: Option<TransitivePolicy>,
}

impl PropertyConfig {
    pub const fn new(include: PropertyInclude, include_nested: PropertyInclude) -> Self {
        Self {
            include,
            include_nested,
            transitive: None,
        }
    }

    pub const fn with_transitive(mut self, transitive: TransitivePolicy) -> Self {
        self.transitive = Some(transitive);
        self
    }
}
