use super::{DisplayClassName, FormatGrouped, SegmentedFormatter};
use crate::values::{GroupView, ObjectValues, ValueEntry};

/// The literal tokens a [`ConfigurableStringFormatter`] assembles its
/// output from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatTokens {
    pub before_class_name: &'static str,
    pub after_class_name: &'static str,
    pub end_of_string: &'static str,
    pub value_separator: &'static str,
    pub start_of_group: &'static str,
    pub end_of_group: &'static str,
    pub before_value: &'static str,
    pub after_value: &'static str,
}

/// A fully token-driven strategy.
///
/// Every delimiter is supplied by the caller, which makes this the escape
/// hatch for output shapes the simple and JSON strategies do not cover.
#[derive(Clone, Copy, Debug)]
pub struct ConfigurableStringFormatter {
    tokens: FormatTokens,
    grouping: FormatGrouped,
    display_class_name: DisplayClassName,
}

impl ConfigurableStringFormatter {
    /// `Person{firstName="Jane", lastName="Doe"}`
    pub const UNGROUPED_BRACED_WITH_CLASS_NAME: Self = Self::new(
        FormatTokens {
            before_class_name: "",
            after_class_name: "{",
            end_of_string: "}",
            value_separator: ", ",
            start_of_group: "",
            end_of_group: "",
            before_value: "=\"",
            after_value: "\"",
        },
        FormatGrouped::No,
        DisplayClassName::Always,
    );

    /// `Person{firstName="Jane"}, Base{id="1"}`
    pub const GROUPED_BRACED: Self = Self::new(
        FormatTokens {
            before_class_name: "",
            after_class_name: "",
            end_of_string: "",
            value_separator: ", ",
            start_of_group: "{",
            end_of_group: "}",
            before_value: "=\"",
            after_value: "\"",
        },
        FormatGrouped::ByClass,
        DisplayClassName::Never,
    );

    pub const fn new(
        tokens: FormatTokens,
        grouping: FormatGrouped,
        display_class_name: DisplayClassName,
    ) -> Self {
        Self {
            tokens,
            grouping,
            display_class_name,
        }
    }
}

impl SegmentedFormatter for ConfigurableStringFormatter {
    fn grouping(&self) -> FormatGrouped {
        self.grouping
    }

    fn value_separator(&self) -> &str {
        self.tokens.value_separator
    }

    fn start_string(&self, out: &mut String, info: &ObjectValues) {
        if self.display_class_name.applies_with(self.grouping) {
            out.push_str(self.tokens.before_class_name);
            out.push_str(info.type_name());
        }
        out.push_str(self.tokens.after_class_name);
    }

    fn end_string(&self, out: &mut String, _info: &ObjectValues) {
        out.push_str(self.tokens.end_of_string);
    }

    fn start_group(&self, out: &mut String, group: &GroupView<'_>) {
        out.push_str(group.label);
        out.push_str(self.tokens.start_of_group);
    }

    fn end_group(&self, out: &mut String) {
        out.push_str(self.tokens.end_of_group);
    }

    fn append_value(&self, out: &mut String, entry: &ValueEntry, nested: Option<&str>) {
        out.push_str(entry.name());
        out.push_str(self.tokens.before_value);
        match nested {
            Some(rendered) => out.push_str(rendered),
            None => {
                use std::fmt::Write;
                let _ = write!(out, "{}", entry.value());
            }
        }
        out.push_str(self.tokens.after_value);
    }
}
