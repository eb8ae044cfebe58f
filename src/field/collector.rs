use crate::{
    field::field_model::{ControlTag, FieldDescriptor, UNKNOWN_KEY},
    page::{adapter::PageAdapter, page_model::PageControl},
};

/// Input types that never receive a value.
pub const EXCLUDED_TYPES: &[&str] = &["submit", "reset", "button", "image", "file", "hidden"];

/// Enumerate the fillable controls of a page, in document order.
pub fn collect(page: &dyn PageAdapter) -> Vec<FieldDescriptor> {
    let fields: Vec<FieldDescriptor> = page
        .controls()
        .into_iter()
        .filter(|(_, control)| is_fillable(control))
        .filter_map(|(handle, control)| {
            let tag = ControlTag::parse(&control.tag)?;
            Some(FieldDescriptor {
                key: derive_key(&control),
                input_type: control.effective_type(),
                tag,
                control: handle,
                group: control.name.clone(),
                min: parse_bound(control.min.as_deref()),
                max: parse_bound(control.max.as_deref()),
            })
        })
        .collect();

    tracing::debug!(count = fields.len(), "collected fields");
    fields
}

pub fn is_fillable(control: &PageControl) -> bool {
    if ControlTag::parse(&control.tag).is_none() {
        return false;
    }

    if control.tag_lower() == "input" {
        let declared = control
            .r#type
            .as_deref()
            .map(|t| t.trim().to_lowercase())
            .unwrap_or_default();
        if EXCLUDED_TYPES.contains(&declared.as_str()) {
            return false;
        }
    }

    !control.disabled && !control.is_display_none()
}

/// Normalized key: the first non-empty text source, lowercased.
///
/// Order: name, id, placeholder, aria-label, data-label, `label[for]` text, enclosing
/// label text without nested control text, fieldset legend, autocomplete.
pub fn derive_key(control: &PageControl) -> String {
    if let Some(name) = non_empty(control.name.as_deref()) {
        return name.to_lowercase().replace(['[', ']'], "_");
    }

    let attributes = [
        control.id.as_deref(),
        control.placeholder.as_deref(),
        control.aria_label.as_deref(),
        control.data_label.as_deref(),
        control.label_for.as_deref(),
    ];
    if let Some(text) = attributes.into_iter().find_map(non_empty) {
        return text.to_lowercase();
    }

    let label = parent_label_text(control);
    if let Some(text) = non_empty(Some(label.as_str())) {
        return text.to_lowercase();
    }

    [control.legend.as_deref(), control.autocomplete.as_deref()]
        .into_iter()
        .find_map(non_empty)
        .map(str::to_lowercase)
        .unwrap_or_else(|| UNKNOWN_KEY.to_string())
}

/// Enclosing label text with text of nested controls removed.
fn parent_label_text(control: &PageControl) -> String {
    control
        .parent_label
        .iter()
        .filter(|fragment| !fragment.control)
        .map(|fragment| fragment.text.as_str())
        .collect::<String>()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_bound(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
