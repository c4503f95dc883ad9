use std::collections::HashMap;

use glimpse_types::{ClassDescriptor, IncludePolicy, TransitivePolicy, TypeToken};
use parking_lot::RwLock;

use super::{filter, ClassInfo, TypeInfo};

/// Memoizes [`TypeInfo`] per type token.
///
/// Metadata is a deterministic pure function of the descriptor chain, so
/// concurrent callers racing to compute the same unseen type is benign:
/// the computations yield equivalent results and the first finished insert
/// wins. Callers need no external locking.
pub struct TypeInfoCache {
    cached: RwLock<HashMap<TypeToken, TypeInfo>>,
}

impl TypeInfoCache {
    pub fn new() -> Self {
        Self {
            cached: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the metadata for a type, computing it on first access only.
    pub fn type_info_for(&self, token: TypeToken) -> TypeInfo {
        if let Some(info) = self.cached.read().get(&token) {
            return info.clone();
        }

        let info = self.create_type_info(token);
        self.cached
            .write()
            .entry(token)
            .or_insert(info)
            .clone()
    }

    /// Returns the metadata for a type with only the transitive policy
    /// replaced, leaving the shared cached entry untouched.
    ///
    /// Used when a referencing property declares an explicit transitive
    /// policy for its target type.
    pub fn type_info_with(&self, token: TypeToken, transitive: TransitivePolicy) -> TypeInfo {
        self.type_info_for(token).with_transitive(transitive)
    }

    /// The type-level transitive policy a declared target type carries.
    ///
    /// Reads the attached configuration directly rather than computing the
    /// target's full metadata, so self-referential types resolve without
    /// unbounded recursion.
    pub(crate) fn transitive_policy_of(
        &self,
        descriptor: &'static ClassDescriptor,
    ) -> TransitivePolicy {
        descriptor
            .formatting_config()
            .map(|config| config.transitive)
            .unwrap_or_default()
    }

    fn create_type_info(&self, token: TypeToken) -> TypeInfo {
        log::debug!("Computing type info for '{}'", token.name());

        let mut classes = Vec::new();
        let mut current = Some(token.descriptor());
        while let Some(descriptor) = current {
            classes.push(ClassInfo {
                declaring: TypeToken::of(descriptor),
                properties: filter::filter_properties(descriptor, self),
            });
            current = descriptor.parent;
        }

        let config = token.descriptor().formatting_config();
        TypeInfo {
            subject: token,
            classes: classes.into(),
            include: config.map(|c| c.include).unwrap_or(IncludePolicy::All),
            transitive: config
                .map(|c| c.transitive)
                .unwrap_or(TransitivePolicy::Never),
        }
    }
}

impl Default for TypeInfoCache {
    fn default() -> Self {
        Self::new()
    }
}
