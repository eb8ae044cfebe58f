use serde::{Deserialize, Serialize};

/// Opaque handle to one control of a page, stable for the lifetime of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ControlRef(pub usize);

impl ControlRef {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A form control as the DOM extractor reports it.
///
/// Attribute values are kept raw (untrimmed, original case); the collector does all
/// normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageControl {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(rename = "ariaLabel", skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(rename = "dataLabel", skip_serializing_if = "Option::is_none")]
    pub data_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<String>,
    /// Text of a `<label for=...>` pointing at this control's id.
    #[serde(rename = "labelFor", skip_serializing_if = "Option::is_none")]
    pub label_for: Option<String>,
    /// Text nodes of the enclosing `<label>`, in order.
    #[serde(rename = "parentLabel", skip_serializing_if = "Vec::is_empty")]
    pub parent_label: Vec<LabelFragment>,
    /// Legend of the enclosing `<fieldset>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<String>,
    /// Inline `style` attributes: the control's own first, then each ancestor's.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<String>,
    pub disabled: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
    pub value: String,
    pub checked: bool,
}

impl PageControl {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn input(input_type: &str) -> Self {
        Self {
            tag: "input".into(),
            r#type: Some(input_type.to_string()),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn with_options(mut self, options: &[(&str, &str)]) -> Self {
        self.options = options
            .iter()
            .map(|(value, text)| SelectOption {
                value: value.to_string(),
                text: text.to_string(),
            })
            .collect();
        self
    }

    pub fn with_bounds(mut self, min: &str, max: &str) -> Self {
        self.min = Some(min.to_string());
        self.max = Some(max.to_string());
        self
    }

    pub fn tag_lower(&self) -> String {
        self.tag.to_lowercase()
    }

    /// Lowercased `type` attribute, or the tag name when the attribute is absent or empty.
    pub fn effective_type(&self) -> String {
        match self.r#type.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_lowercase(),
            _ => self.tag_lower(),
        }
    }

    /// Whether this control or one of its ancestors is hidden with `display: none`.
    pub fn is_display_none(&self) -> bool {
        self.styles.iter().any(|style| {
            let compact: String = style
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>()
                .to_lowercase();
            compact.contains("display:none")
        })
    }
}

/// One text node inside an enclosing `<label>`. `control` marks text that belongs to a
/// nested form control (e.g. a `<select>`'s option text) rather than to the label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelFragment {
    pub text: String,
    pub control: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
}

/// Notifications raised on a control after its value changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlEvent {
    Input,
    Change,
}
