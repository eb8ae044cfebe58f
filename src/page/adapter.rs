use crate::page::{
    error::PageError,
    page_model::{ControlEvent, ControlRef, PageControl, SelectOption},
};

/// Everything the collector and writer need from a page.
///
/// Implementations own the controls; callers address them through [`ControlRef`]
/// handles handed out by [`PageAdapter::controls`].
pub trait PageAdapter {
    /// All form controls in document order.
    fn controls(&self) -> Vec<(ControlRef, PageControl)>;

    /// Radio inputs sharing `name`, in document order.
    fn radio_group(&self, name: &str) -> Vec<ControlRef>;

    /// Options of a `<select>`.
    fn options(&self, control: ControlRef) -> Result<Vec<SelectOption>, PageError>;

    fn set_value(&mut self, control: ControlRef, value: &str) -> Result<(), PageError>;

    /// Assign through the element prototype's value setter, bypassing instance-level
    /// overrides installed by view frameworks. Pages without that distinction fall back
    /// to [`PageAdapter::set_value`].
    fn set_native_value(&mut self, control: ControlRef, value: &str) -> Result<(), PageError> {
        self.set_value(control, value)
    }

    /// Checking a radio unchecks the rest of its group.
    fn set_checked(&mut self, control: ControlRef, checked: bool) -> Result<(), PageError>;

    fn dispatch(&mut self, control: ControlRef, event: ControlEvent) -> Result<(), PageError>;
}
