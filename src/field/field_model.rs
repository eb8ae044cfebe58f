use serde::Serialize;

pub use crate::page::page_model::ControlRef;

/// Key given to controls that expose no usable text at all.
pub const UNKNOWN_KEY: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlTag {
    Input,
    Textarea,
    Select,
}

impl ControlTag {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "input" => Some(ControlTag::Input),
            "textarea" => Some(ControlTag::Textarea),
            "select" => Some(ControlTag::Select),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ControlTag::Input => "input",
            ControlTag::Textarea => "textarea",
            ControlTag::Select => "select",
        }
    }
}

/// One fillable control, as seen by the resolver. Rebuilt on every scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub key: String,
    pub input_type: String,
    pub tag: ControlTag,
    pub control: ControlRef,
    /// Raw `name` attribute; radios sharing it form one group.
    pub group: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl FieldDescriptor {
    pub fn is_radio(&self) -> bool {
        self.input_type == "radio"
    }

    /// Name used to dedupe radio groups: the `name` attribute, else the key.
    pub fn group_name(&self) -> &str {
        self.group
            .as_deref()
            .filter(|g| !g.is_empty())
            .unwrap_or(&self.key)
    }
}
