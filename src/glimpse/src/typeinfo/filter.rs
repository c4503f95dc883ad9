use glimpse_types::{ClassDescriptor, DeclaredType, PropertyInclude, TransitivePolicy};

use super::{PropertyInfo, TypeInfoCache};

/// Marks synthetic storage that is not part of the logical data model.
const SYNTHETIC_PREFIX: &str = "__";

/// Builds the resolved property list for the properties declared directly
/// on one class level, in declaration order.
///
/// The transitive policy of each property resolves by precedence:
/// an explicit per-property declaration, then `Always` for foundational
/// declared types, then the declared target type's own type-level policy
/// as answered by the cache.
pub(super) fn filter_properties(
    descriptor: &'static ClassDescriptor,
    cache: &TypeInfoCache,
) -> Vec<PropertyInfo> {
    descriptor
        .properties
        .iter()
        .filter(|property| !property.name.starts_with(SYNTHETIC_PREFIX))
        .map(|property| {
            let (include, include_nested) = property
                .config
                .map(|config| (config.include, config.include_nested))
                .unwrap_or((PropertyInclude::Never, PropertyInclude::Never));

            let (transitive, explicit_transitive) =
                match property.config.and_then(|config| config.transitive) {
                    Some(policy) => (policy, true),
                    None => match property.declared {
                        DeclaredType::Foundational(_) => (TransitivePolicy::Always, false),
                        DeclaredType::Compound(target) => (cache.transitive_policy_of(target), false),
                    },
                };

            PropertyInfo {
                name: property.name,
                declared: property.declared,
                include,
                include_nested,
                transitive,
                explicit_transitive,
                get: property.get,
            }
        })
        .collect()
}
