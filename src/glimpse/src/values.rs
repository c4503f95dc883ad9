//! Compiled value trees.
//!
//! An [`ObjectValues`] tree is built fresh for every formatting call and
//! discarded after rendering. Entries live in one flat, ordered vector;
//! the per-class groups are label-plus-range views into it, appended in
//! self-to-ancestor class order.

use std::{fmt, ops::Range};

pub use smartstring::alias::String;

use glimpse_types::{PropertyValue, TypeToken};

mod compiler;
pub use compiler::ObjectValuesCompiler;

/// Fixed sentinel standing in for a non-null value that policy forbids
/// expanding.
pub const ABBREVIATED: &str = "[not null]";

/// A single resolved property value inside the tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The property held no value.
    Null,
    Bool(bool),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
    /// Present but not expanded; renders as [`ABBREVIATED`].
    Abbreviated,
    /// A transitively expanded nested tree.
    Object(Box<ObjectValues>),
}

impl Value {
    /// Converts a raw scalar read into its owned tree value. Compound
    /// values fall back to their `Debug` representation, the policy for
    /// values that are used as-is without expansion.
    pub(crate) fn from_scalar(value: PropertyValue<'_>) -> Self {
        match value {
            PropertyValue::Null => Self::Null,
            PropertyValue::Bool(v) => Self::Bool(v),
            PropertyValue::Signed(v) => Self::Signed(v),
            PropertyValue::Unsigned(v) => Self::Unsigned(v),
            PropertyValue::Float(v) => Self::Float(v),
            PropertyValue::Text(v) => Self::Text(v.as_ref().into()),
            PropertyValue::Nested(v) => Self::Text(format!("{v:?}").into()),
        }
    }
}

/// Renders the scalar representation of a value.
///
/// Render strategies expand [`Value::Object`] themselves before they get
/// here, so `Display` falls back to the abbreviation marker for it.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Signed(v) => write!(f, "{v}"),
            Self::Unsigned(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Abbreviated | Self::Object(_) => f.write_str(ABBREVIATED),
        }
    }
}

/// One property's entry in the compiled tree.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueEntry {
    name: &'static str,
    value: Value,
    declared_type: &'static str,
}

impl ValueEntry {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Display name of the property's declared type.
    pub fn declared_type(&self) -> &'static str {
        self.declared_type
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Group {
    label: &'static str,
    entries: Range<usize>,
}

/// A borrowed view of one class's group of entries.
#[derive(Clone, Copy, Debug)]
pub struct GroupView<'a> {
    pub label: &'static str,
    pub values: &'a [ValueEntry],
}

/// All values of one compiled object, grouped by declaring class.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValues {
    subject: TypeToken,
    entries: Vec<ValueEntry>,
    groups: Vec<Group>,
}

impl ObjectValues {
    fn new(subject: TypeToken) -> Self {
        Self {
            subject,
            entries: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// The type of the compiled object.
    pub fn subject(&self) -> TypeToken {
        self.subject
    }

    pub fn type_name(&self) -> &'static str {
        self.subject.name()
    }

    /// Every entry across all groups, in group order.
    pub fn entries(&self) -> &[ValueEntry] {
        &self.entries
    }

    /// The per-class groups, self-to-ancestor order. Groups may be empty.
    pub fn groups(&self) -> impl ExactSizeIterator<Item = GroupView<'_>> {
        self.groups.iter().map(|group| GroupView {
            label: group.label,
            values: &self.entries[group.entries.clone()],
        })
    }

    /// True when no group produced any entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push_group(&mut self, label: &'static str, values: Vec<ValueEntry>) {
        let start = self.entries.len();
        self.entries.extend(values);
        self.groups.push(Group {
            label,
            entries: start..self.entries.len(),
        });
    }
}
