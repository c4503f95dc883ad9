//! Declarative formatting configuration for the Glimpse project.
//!
//! Formatting behavior is never written by hand per type. Instead, every
//! formattable type carries a static [`ClassDescriptor`] describing its
//! properties and, optionally, the policies that govern which properties
//! show up in formatted output and how nested objects are expanded.
//!
//! This crate only defines the declaration surface: policies, configuration
//! structs, descriptors and the [`Formattable`] capability trait. Resolving
//! the policies against defaults and walking live objects is the job of the
//! `glimpse` crate.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod config;
pub use config::*;

mod descriptor;
pub use descriptor::*;

mod policy;
pub use policy::*;

mod reflect;
pub use reflect::*;
