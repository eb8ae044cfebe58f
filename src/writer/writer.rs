use rand::{Rng, seq::SliceRandom};

use crate::{
    field::field_model::{ControlTag, FieldDescriptor},
    page::{
        adapter::PageAdapter,
        error::PageError,
        page_model::{ControlEvent, ControlRef},
    },
    resolve::resolver::{DEFAULT_RANGE_MAX, DEFAULT_RANGE_MIN},
};

/// What actually landed in the control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written(String),
    /// Nothing to write into (a select without usable options).
    Untouched,
}

/// Writes resolved values into controls and raises the notifications a host
/// application listens for.
pub struct ValueWriter;

impl ValueWriter {
    pub fn apply<R: Rng + ?Sized>(
        page: &mut dyn PageAdapter,
        field: &FieldDescriptor,
        value: &str,
        rng: &mut R,
    ) -> Result<WriteOutcome, PageError> {
        let control = field.control;

        match field.input_type.as_str() {
            "checkbox" => {
                let checked = !value.trim().eq_ignore_ascii_case("false");
                page.set_checked(control, checked)?;
                page.dispatch(control, ControlEvent::Change)?;
                return Ok(WriteOutcome::Written(checked.to_string()));
            }
            "range" => {
                let clamped = clamp_range(value, field.min, field.max);
                page.set_value(control, &clamped)?;
                notify_input_change(page, control)?;
                return Ok(WriteOutcome::Written(clamped));
            }
            "color" => {
                page.set_value(control, value)?;
                notify_input_change(page, control)?;
                return Ok(WriteOutcome::Written(value.to_string()));
            }
            _ => {}
        }

        match field.tag {
            ControlTag::Select => write_select(page, control, value, rng),
            ControlTag::Textarea => {
                page.set_value(control, value)?;
                notify_input_change(page, control)?;
                Ok(WriteOutcome::Written(value.to_string()))
            }
            ControlTag::Input => {
                page.set_native_value(control, value)?;
                notify_input_change(page, control)?;
                Ok(WriteOutcome::Written(value.to_string()))
            }
        }
    }
}

fn notify_input_change(page: &mut dyn PageAdapter, control: ControlRef) -> Result<(), PageError> {
    page.dispatch(control, ControlEvent::Input)?;
    page.dispatch(control, ControlEvent::Change)
}

/// Match by option value or text (case-insensitive), else a random usable option.
fn write_select<R: Rng + ?Sized>(
    page: &mut dyn PageAdapter,
    control: ControlRef,
    value: &str,
    rng: &mut R,
) -> Result<WriteOutcome, PageError> {
    let options: Vec<_> = page
        .options(control)?
        .into_iter()
        .filter(|o| !o.value.is_empty())
        .collect();

    let wanted = value.to_lowercase();
    let chosen = options
        .iter()
        .find(|o| o.value.to_lowercase() == wanted || o.text.to_lowercase() == wanted)
        .or_else(|| options.choose(rng));

    let Some(option) = chosen else {
        tracing::debug!(control = control.index(), "select has no usable option");
        return Ok(WriteOutcome::Untouched);
    };

    let selected = option.value.clone();
    page.set_value(control, &selected)?;
    page.dispatch(control, ControlEvent::Change)?;
    Ok(WriteOutcome::Written(selected))
}

/// Parse and clamp a range value to the control's bounds; unparseable input lands on
/// the midpoint.
pub fn clamp_range(value: &str, min: Option<f64>, max: Option<f64>) -> String {
    let min = min.unwrap_or(DEFAULT_RANGE_MIN);
    let max = max.unwrap_or(DEFAULT_RANGE_MAX).max(min);

    let parsed = value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(((min + max) / 2.0).floor());

    format_number(parsed.clamp(min, max))
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
