use serde_json::{Map, Value as Json};

use super::{DisplayClassName, FormatGrouped, StringFormatter};
use crate::values::{ObjectValues, Value, ABBREVIATED};

/// Renders trees with a JSON syntax.
///
/// Example output:
///
/// ```text
/// {"Person":{"firstName":"Jane","lastName":"Doe","address":"[not null]"}}
/// ```
///
/// Numbers and booleans stay unquoted; nested trees are rendered through
/// the strategy itself and embedded as strings. Key order follows the
/// compiled tree.
#[derive(Clone, Copy, Debug)]
pub struct JsonStringFormatter {
    grouping: FormatGrouped,
    display_class_name: DisplayClassName,
}

impl JsonStringFormatter {
    pub fn new() -> Self {
        Self::with_config(FormatGrouped::ByClass, DisplayClassName::WhenNotGroupedByClass)
    }

    /// Keeps the class-name display at its default.
    pub fn with_grouping(grouping: FormatGrouped) -> Self {
        Self::with_config(grouping, DisplayClassName::WhenNotGroupedByClass)
    }

    pub fn with_config(grouping: FormatGrouped, display_class_name: DisplayClassName) -> Self {
        Self {
            grouping,
            display_class_name,
        }
    }

    fn json_value(&self, value: &Value) -> Json {
        match value {
            Value::Null => Json::Null,
            Value::Bool(v) => (*v).into(),
            Value::Signed(v) => (*v).into(),
            Value::Unsigned(v) => (*v).into(),
            Value::Float(v) => serde_json::Number::from_f64(*v)
                .map(Json::Number)
                .unwrap_or_else(|| v.to_string().into()),
            Value::Text(v) => v.as_str().into(),
            Value::Abbreviated => ABBREVIATED.into(),
            Value::Object(nested) => self.format(nested).into(),
        }
    }
}

impl Default for JsonStringFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl StringFormatter for JsonStringFormatter {
    fn format(&self, info: &ObjectValues) -> String {
        let mut root = Map::new();

        if self.display_class_name.applies_with(self.grouping) {
            root.insert("class".into(), info.type_name().into());
        }

        match self.grouping {
            FormatGrouped::ByClass => {
                for group in info.groups() {
                    let entries = group
                        .values
                        .iter()
                        .map(|entry| (entry.name().into(), self.json_value(entry.value())))
                        .collect();
                    root.insert(group.label.into(), Json::Object(entries));
                }
            }
            FormatGrouped::No => {
                for entry in info.entries() {
                    root.insert(entry.name().into(), self.json_value(entry.value()));
                }
            }
        }

        Json::Object(root).to_string()
    }
}
