//! Policy-driven object formatting.
//!
//! Glimpse renders an object graph into a string without hand-written
//! formatting code. Which properties show up and how nested objects are
//! expanded is resolved from the declarative configuration carried by
//! [`ClassDescriptor`](glimpse_types::ClassDescriptor)s:
//!
//! 1. [`TypeInfoCache`] turns a type's descriptor chain into memoized
//!    [`TypeInfo`] metadata, resolving every property's inclusion and
//!    transitivity policy.
//! 2. [`ObjectValuesCompiler`] walks a live instance with that metadata and
//!    produces a class-grouped [`ObjectValues`] tree.
//! 3. A [`StringFormatter`] strategy turns the tree into text.
//!
//! [`FormattedStringGenerator`] wires the three together, and the free
//! [`format`] function applies the process-wide generator configured via
//! [`configure_generator`].

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use thiserror::Error;

pub mod formatter;
pub use formatter::{SimpleStringFormatter, StringFormatter};

pub mod typeinfo;
pub use typeinfo::{TypeInfo, TypeInfoCache};

pub mod values;
pub use values::{ObjectValues, ObjectValuesCompiler};

pub use glimpse_types as types;
use glimpse_types::{Formattable, ReadError, TypeToken};

/// Errors that may occur while compiling an object into a value tree.
///
/// There is no recoverable category: every variant aborts the `format`
/// call as a whole.
#[derive(Debug, Error)]
pub enum Error {
    /// A property accessor could not read its value from the instance.
    /// This indicates broken descriptor wiring, not a transient condition.
    #[error("cannot read property '{class}.{property}': {source}")]
    PropertyRead {
        class: &'static str,
        property: &'static str,
        source: ReadError,
    },

    /// Nested expansion exceeded the configured recursion limit, which
    /// happens when transitively-expanded object graphs contain a cycle.
    #[error("recursion limit exceeded while expanding nested values")]
    Recursion,
}

/// Generates formatted strings for [`Formattable`] instances.
///
/// Owns a metadata cache shared with its value compiler and the render
/// strategy applied to compiled trees. Cheap to share behind an [`Arc`];
/// all methods take `&self`.
pub struct FormattedStringGenerator {
    type_info_cache: Arc<TypeInfoCache>,
    compiler: ObjectValuesCompiler,
    formatter: Box<dyn StringFormatter>,
}

impl FormattedStringGenerator {
    /// Creates a generator using the given render strategy.
    pub fn new(formatter: Box<dyn StringFormatter>) -> Self {
        let type_info_cache = Arc::new(TypeInfoCache::new());
        Self {
            compiler: ObjectValuesCompiler::with_cache(type_info_cache.clone()),
            type_info_cache,
            formatter,
        }
    }

    /// Formats a single instance.
    ///
    /// Metadata for the instance's type is computed on first use and
    /// reused afterwards; the value tree is built fresh for every call.
    pub fn format(&self, instance: &dyn Formattable) -> Result<String, Error> {
        let token = TypeToken::of(instance.descriptor());
        let type_info = self.type_info_cache.type_info_for(token);
        let values = self.compiler.compile(&type_info, instance)?;

        Ok(self.formatter.format(&values))
    }
}

impl Default for FormattedStringGenerator {
    fn default() -> Self {
        Self::new(Box::new(SimpleStringFormatter))
    }
}

static GENERATOR: Lazy<RwLock<Arc<FormattedStringGenerator>>> =
    Lazy::new(|| RwLock::new(Arc::new(FormattedStringGenerator::default())));

/// Formats an instance with the process-wide generator.
pub fn format(instance: &dyn Formattable) -> Result<String, Error> {
    let generator = GENERATOR.read().clone();
    generator.format(instance)
}

/// Replaces the process-wide generator used by [`format`].
///
/// The swap is atomic and visible to subsequent calls on any thread; when
/// several threads race, the last writer wins. Calls already running keep
/// the generator they started with.
pub fn configure_generator(generator: FormattedStringGenerator) {
    *GENERATOR.write() = Arc::new(generator);
}
