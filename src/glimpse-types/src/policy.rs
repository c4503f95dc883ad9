//! The three policy enumerations shared by all configuration sources.

/// Governs which of a type's own properties are included when an instance
/// of the type is formatted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IncludePolicy {
    /// Include every declared property.
    #[default]
    All,
    /// Include only properties explicitly opted in through their
    /// [`PropertyConfig`](crate::PropertyConfig).
    Annotated,
    /// Include no properties at all.
    None,
}

/// Governs whether a property's compound value is expanded into a nested
/// value tree or abbreviated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitivePolicy {
    /// Use the value directly; the render strategy stringifies it.
    Always,
    /// Expand the value only when its runtime type opts into formatting,
    /// otherwise abbreviate it.
    IfOptedIn,
    /// Never expand; non-null values become the abbreviation marker.
    #[default]
    Never,
}

/// Per-property inclusion marker, used once for direct output and once for
/// output in which the owning object is itself a nested value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PropertyInclude {
    /// Include the property whenever its owner is formatted.
    Default,
    /// Include the property only in exhaustive output, which nested
    /// expansion never is.
    Verbose,
    /// Do not include the property.
    #[default]
    Never,
}
