use std::sync::Arc;

use glimpse_types::{
    Formattable, IncludePolicy, PropertyInclude, PropertyValue, TransitivePolicy, TypeToken,
};

use super::{ObjectValues, Value, ValueEntry};
use crate::{
    typeinfo::{PropertyInfo, TypeInfo, TypeInfoCache},
    Error,
};

/// Upper bound for nested expansion. Transitively-expanded object graphs
/// have no cycle detection, so a reference cycle that opts in on every
/// edge would otherwise recurse without bound.
const DEFAULT_RECURSION_LIMIT: usize = 128;

/// The acceptance predicate applied to a property's nested-inclusion
/// marker. Starts as accept-everything and narrows on recursion.
type AcceptNested = fn(PropertyInclude) -> bool;

fn accept_all(_: PropertyInclude) -> bool {
    true
}

fn accept_default(include: PropertyInclude) -> bool {
    include == PropertyInclude::Default
}

/// Walks a live instance with its resolved [`TypeInfo`] and produces the
/// class-grouped [`ObjectValues`] tree.
pub struct ObjectValuesCompiler {
    type_info_cache: Arc<TypeInfoCache>,
    recursion_limit: usize,
}

impl ObjectValuesCompiler {
    pub fn new() -> Self {
        Self::with_cache(Arc::new(TypeInfoCache::new()))
    }

    /// Creates a compiler sharing an existing metadata cache.
    pub fn with_cache(type_info_cache: Arc<TypeInfoCache>) -> Self {
        Self {
            type_info_cache,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }

    /// Compiles one instance into its value tree.
    pub fn compile(
        &self,
        type_info: &TypeInfo,
        instance: &dyn Formattable,
    ) -> Result<ObjectValues, Error> {
        self.compile_filtered(type_info, instance, accept_all, self.recursion_limit)
    }

    fn compile_filtered(
        &self,
        type_info: &TypeInfo,
        instance: &dyn Formattable,
        accept: AcceptNested,
        depth: usize,
    ) -> Result<ObjectValues, Error> {
        let mut values = ObjectValues::new(type_info.subject());

        for class in type_info.classes() {
            let mut group = Vec::new();

            for property in class.properties() {
                if !accept(property.include_nested()) {
                    continue;
                }

                log::debug!(
                    "Compiling value for property '{}.{}'",
                    class.name(),
                    property.name()
                );
                let raw = property.read(instance).map_err(|source| Error::PropertyRead {
                    class: class.name(),
                    property: property.name(),
                    source,
                })?;

                let value = self.resolve_value(property, raw, depth)?;
                log::trace!("Got '{value:?}'");

                match type_info.include() {
                    IncludePolicy::All => group.push(Self::entry(property, value)),
                    IncludePolicy::Annotated => {
                        if property.include() == PropertyInclude::Default {
                            group.push(Self::entry(property, value));
                        }
                    }
                    IncludePolicy::None => {}
                }
            }

            values.push_group(class.name(), group);
        }

        Ok(values)
    }

    /// Applies the property's resolved transitive policy to a freshly read
    /// raw value.
    fn resolve_value(
        &self,
        property: &PropertyInfo,
        raw: PropertyValue<'_>,
        depth: usize,
    ) -> Result<Value, Error> {
        // Null short-circuits every policy.
        if raw.is_null() {
            return Ok(Value::Null);
        }

        match property.transitive() {
            TransitivePolicy::Always => Ok(Value::from_scalar(raw)),
            TransitivePolicy::Never => Ok(Value::Abbreviated),
            TransitivePolicy::IfOptedIn => match raw {
                PropertyValue::Nested(nested) => self.expand_opted_in(property, nested, depth),
                scalar => Ok(Value::from_scalar(scalar)),
            },
        }
    }

    fn expand_opted_in(
        &self,
        property: &PropertyInfo,
        nested: &dyn Formattable,
        depth: usize,
    ) -> Result<Value, Error> {
        let runtime = nested.descriptor();

        // The target opts in through configuration on its runtime type (or
        // its render entry point); an explicit declaration on the
        // referencing property opts it in as well.
        let opted_in = runtime.formatting_config().is_some() || property.has_explicit_transitive();
        if !opted_in {
            return Ok(Value::Abbreviated);
        }

        let depth = depth.checked_sub(1).ok_or(Error::Recursion)?;

        let type_info = self
            .type_info_cache
            .type_info_with(TypeToken::of(runtime), property.transitive());
        let values = self.compile_filtered(&type_info, nested, accept_default, depth)?;

        // An expansion with zero entries would render as a visually empty
        // group; abbreviate instead.
        if values.is_empty() {
            Ok(Value::Abbreviated)
        } else {
            Ok(Value::Object(Box::new(values)))
        }
    }

    fn entry(property: &PropertyInfo, value: Value) -> ValueEntry {
        ValueEntry {
            name: property.name(),
            value,
            declared_type: property.declared().name(),
        }
    }
}

impl Default for ObjectValuesCompiler {
    fn default() -> Self {
        Self::new()
    }
}
