use super::{FormatGrouped, SegmentedFormatter};
use crate::values::{ObjectValues, ValueEntry};

/// The default strategy: flat `name=value` pairs between braces.
///
/// Example output:
///
/// ```text
/// { firstName=Jane, lastName=Doe, address=[not null] }
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleStringFormatter;

impl SegmentedFormatter for SimpleStringFormatter {
    fn grouping(&self) -> FormatGrouped {
        FormatGrouped::No
    }

    fn start_string(&self, out: &mut String, _info: &ObjectValues) {
        out.push_str("{ ");
    }

    fn end_string(&self, out: &mut String, _info: &ObjectValues) {
        out.push_str(" }");
    }

    fn append_value(&self, out: &mut String, entry: &ValueEntry, nested: Option<&str>) {
        out.push_str(entry.name());
        out.push('=');
        match nested {
            Some(rendered) => out.push_str(rendered),
            None => {
                use std::fmt::Write;
                let _ = write!(out, "{}", entry.value());
            }
        }
    }
}
