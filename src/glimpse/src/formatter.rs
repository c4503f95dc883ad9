//! Render strategies that turn compiled value trees into text.
//!
//! A strategy only ever sees a read-only [`ObjectValues`] tree; policy has
//! already been applied by the compiler. Nested trees are rendered by
//! re-invoking the strategy's own [`format`](StringFormatter::format) and
//! substituting the resulting string as if it were a scalar.

use crate::values::{GroupView, ObjectValues, Value, ValueEntry};

mod configurable;
pub use configurable::{ConfigurableStringFormatter, FormatTokens};

mod json;
pub use json::JsonStringFormatter;

mod simple;
pub use simple::SimpleStringFormatter;

/// Converts an [`ObjectValues`] tree into a formatted string.
///
/// Implementations must be total over any well-formed tree, including
/// trees with zero groups or zero entries.
pub trait StringFormatter: Send + Sync {
    fn format(&self, info: &ObjectValues) -> String;
}

/// Whether a strategy renders values in per-class groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatGrouped {
    /// One flat sequence of values.
    No,
    /// One group per declaring class.
    ByClass,
}

/// When a strategy prepends the subject's class name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayClassName {
    Never,
    /// Only when the output is not already grouped by class.
    WhenNotGroupedByClass,
    Always,
}

impl DisplayClassName {
    /// Resolves the display decision against a grouping mode.
    pub fn applies_with(self, grouping: FormatGrouped) -> bool {
        match self {
            Self::Never => false,
            Self::WhenNotGroupedByClass => grouping != FormatGrouped::ByClass,
            Self::Always => true,
        }
    }
}

/// Template for strategies that assemble output from separators and
/// delimiter hooks. A blanket [`StringFormatter`] impl drives the walk;
/// implementors only fill in the hooks they care about.
pub trait SegmentedFormatter: Send + Sync {
    fn grouping(&self) -> FormatGrouped {
        FormatGrouped::ByClass
    }

    fn value_separator(&self) -> &str {
        ", "
    }

    fn group_separator(&self) -> &str {
        self.value_separator()
    }

    fn start_string(&self, _out: &mut String, _info: &ObjectValues) {}

    fn end_string(&self, _out: &mut String, _info: &ObjectValues) {}

    fn start_group(&self, _out: &mut String, _group: &GroupView<'_>) {}

    fn end_group(&self, _out: &mut String) {}

    /// Appends one value. `nested` carries the pre-rendered text of a
    /// transitively expanded tree, if this entry holds one.
    fn append_value(&self, out: &mut String, entry: &ValueEntry, nested: Option<&str>);

    fn render(&self, info: &ObjectValues) -> String {
        let mut out = String::new();

        self.start_string(&mut out, info);
        match self.grouping() {
            FormatGrouped::ByClass => {
                for (i, group) in info.groups().enumerate() {
                    if i > 0 {
                        out.push_str(self.group_separator());
                    }

                    self.start_group(&mut out, &group);
                    self.append_values(&mut out, group.values);
                    self.end_group(&mut out);
                }
            }
            FormatGrouped::No => self.append_values(&mut out, info.entries()),
        }
        self.end_string(&mut out, info);

        out
    }

    fn append_values(&self, out: &mut String, values: &[ValueEntry]) {
        for (i, entry) in values.iter().enumerate() {
            if i > 0 {
                out.push_str(self.value_separator());
            }

            match entry.value() {
                Value::Object(nested) => {
                    let rendered = self.render(nested);
                    self.append_value(out, entry, Some(&rendered));
                }
                _ => self.append_value(out, entry, None),
            }
        }
    }
}

impl<T: SegmentedFormatter> StringFormatter for T {
    fn format(&self, info: &ObjectValues) -> String {
        self.render(info)
    }
}
