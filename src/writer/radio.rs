use rand::{Rng, seq::SliceRandom};

use crate::{
    field::collector::is_fillable,
    page::{
        adapter::PageAdapter,
        error::PageError,
        page_model::{ControlEvent, ControlRef},
    },
};

/// Check one fillable radio of `group`, chosen uniformly, and raise a single `change`.
///
/// Disabled and hidden radios are never picked. Returns the checked radio, or `None`
/// when the group has no fillable member.
pub fn fill_radio_group<R: Rng + ?Sized>(
    page: &mut dyn PageAdapter,
    group: &str,
    rng: &mut R,
) -> Result<Option<ControlRef>, PageError> {
    let fillable: Vec<ControlRef> = page
        .controls()
        .into_iter()
        .filter(|(_, control)| is_fillable(control))
        .map(|(handle, _)| handle)
        .collect();
    let radios: Vec<ControlRef> = page
        .radio_group(group)
        .into_iter()
        .filter(|radio| fillable.contains(radio))
        .collect();

    let Some(&pick) = radios.choose(rng) else {
        tracing::debug!(group, "radio group has no fillable radio");
        return Ok(None);
    };

    page.set_checked(pick, true)?;
    page.dispatch(pick, ControlEvent::Change)?;
    Ok(Some(pick))
}
