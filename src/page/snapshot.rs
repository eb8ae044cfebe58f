use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::page::{
    adapter::PageAdapter,
    error::PageError,
    page_model::{ControlEvent, ControlRef, PageControl, SelectOption},
};

/// Serialized form of a page: the shape the DOM extractor emits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSnapshot {
    pub url: String,
    pub title: String,
    pub controls: Vec<PageControl>,
}

/// Every mutation applied to a [`SnapshotPage`], in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PageEvent {
    ValueSet { control: ControlRef, native: bool },
    CheckedSet { control: ControlRef, checked: bool },
    Dispatched { control: ControlRef, event: ControlEvent },
}

/// In-memory page backed by a [`PageSnapshot`].
#[derive(Debug, Clone, Default)]
pub struct SnapshotPage {
    snapshot: PageSnapshot,
    journal: Vec<PageEvent>,
}

impl SnapshotPage {
    pub fn new(snapshot: PageSnapshot) -> Self {
        Self {
            snapshot,
            journal: Vec::new(),
        }
    }

    pub fn from_controls(controls: Vec<PageControl>) -> Self {
        Self::new(PageSnapshot {
            controls,
            ..PageSnapshot::default()
        })
    }

    pub fn from_json(json: &str) -> Result<Self, PageError> {
        let snapshot = serde_json::from_str(json).map_err(|source| PageError::Json {
            context: "parse page snapshot".into(),
            source,
        })?;
        Ok(Self::new(snapshot))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PageError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| PageError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, PageError> {
        serde_json::to_string_pretty(&self.snapshot).map_err(|source| PageError::Json {
            context: "serialize page snapshot".into(),
            source,
        })
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PageError> {
        let path = path.as_ref();
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| PageError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn snapshot(&self) -> &PageSnapshot {
        &self.snapshot
    }

    pub fn control(&self, control: ControlRef) -> Option<&PageControl> {
        self.snapshot.controls.get(control.index())
    }

    pub fn value_of(&self, control: ControlRef) -> Option<&str> {
        self.control(control).map(|c| c.value.as_str())
    }

    pub fn is_checked(&self, control: ControlRef) -> bool {
        self.control(control).is_some_and(|c| c.checked)
    }

    pub fn journal(&self) -> &[PageEvent] {
        &self.journal
    }

    /// Notifications dispatched on one control, in order.
    pub fn events(&self, control: ControlRef) -> Vec<ControlEvent> {
        self.journal
            .iter()
            .filter_map(|e| match e {
                PageEvent::Dispatched { control: c, event } if *c == control => Some(*event),
                _ => None,
            })
            .collect()
    }

    fn control_mut(&mut self, control: ControlRef) -> Result<&mut PageControl, PageError> {
        self.snapshot
            .controls
            .get_mut(control.index())
            .ok_or(PageError::UnknownControl(control.index()))
    }

    fn assign(&mut self, control: ControlRef, value: &str, native: bool) -> Result<(), PageError> {
        self.control_mut(control)?.value = value.to_string();
        self.journal.push(PageEvent::ValueSet { control, native });
        Ok(())
    }
}

fn is_radio(control: &PageControl) -> bool {
    control.tag_lower() == "input" && control.effective_type() == "radio"
}

impl PageAdapter for SnapshotPage {
    fn controls(&self) -> Vec<(ControlRef, PageControl)> {
        self.snapshot
            .controls
            .iter()
            .enumerate()
            .map(|(i, c)| (ControlRef(i), c.clone()))
            .collect()
    }

    fn radio_group(&self, name: &str) -> Vec<ControlRef> {
        self.snapshot
            .controls
            .iter()
            .enumerate()
            .filter(|(_, c)| is_radio(c) && c.name.as_deref() == Some(name))
            .map(|(i, _)| ControlRef(i))
            .collect()
    }

    fn options(&self, control: ControlRef) -> Result<Vec<SelectOption>, PageError> {
        let c = self
            .control(control)
            .ok_or(PageError::UnknownControl(control.index()))?;
        if c.tag_lower() != "select" {
            return Err(PageError::WrongKind {
                index: control.index(),
                expected: "select",
            });
        }
        Ok(c.options.clone())
    }

    fn set_value(&mut self, control: ControlRef, value: &str) -> Result<(), PageError> {
        self.assign(control, value, false)
    }

    fn set_native_value(&mut self, control: ControlRef, value: &str) -> Result<(), PageError> {
        self.assign(control, value, true)
    }

    fn set_checked(&mut self, control: ControlRef, checked: bool) -> Result<(), PageError> {
        let target = self.control_mut(control)?;
        target.checked = checked;

        let group = if checked && is_radio(target) {
            target.name.clone()
        } else {
            None
        };

        if let Some(name) = group {
            for (i, sibling) in self.snapshot.controls.iter_mut().enumerate() {
                if i != control.index() && is_radio(sibling) && sibling.name.as_deref() == Some(name.as_str()) {
                    sibling.checked = false;
                }
            }
        }

        self.journal.push(PageEvent::CheckedSet { control, checked });
        Ok(())
    }

    fn dispatch(&mut self, control: ControlRef, event: ControlEvent) -> Result<(), PageError> {
        self.control_mut(control)?;
        self.journal.push(PageEvent::Dispatched { control, event });
        Ok(())
    }
}
