//! Label entity and the shapes it takes on its way through the dialog.
//!
//! The same wire entity represents both flat labels and exclusive folders;
//! `Exclusive` decides which one a given record is.

use serde::{Deserialize, Serialize};

/// Label as returned by the remote API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Color")]
    pub color: String,
    #[serde(rename = "Display", default = "default_display")]
    pub display: i32,
    #[serde(rename = "Exclusive", default)]
    pub exclusive: i32,
    #[serde(rename = "Notify", default)]
    pub notify: i32,
    #[serde(rename = "Order", default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(rename = "Path", default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

fn default_display() -> i32 {
    1
}

impl Label {
    pub fn kind(&self) -> LabelKind {
        LabelKind::from_exclusive(self.exclusive)
    }
}

/// Flat label or exclusive folder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelKind {
    Label,
    Folder,
}

impl LabelKind {
    /// Any non-zero `Exclusive` value marks a folder.
    pub fn from_exclusive(exclusive: i32) -> Self {
        if exclusive != 0 {
            Self::Folder
        } else {
            Self::Label
        }
    }

    pub fn exclusive(self) -> i32 {
        match self {
            Self::Label => 0,
            Self::Folder => 1,
        }
    }

    pub fn is_folder(self) -> bool {
        self == Self::Folder
    }
}

/// Whether the dialog creates a new record or edits an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModalMode {
    Create,
    Edit,
}

/// Partial label handed to the dialog when it opens.
///
/// Every field is optional: an empty draft opens a "create" dialog, a draft
/// built from an existing [`Label`] opens an "edit" dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelDraft {
    pub id: Option<String>,
    pub name: Option<String>,
    pub color: Option<String>,
    pub exclusive: Option<i32>,
    pub notify: Option<i32>,
}

impl LabelDraft {
    /// Empty draft for a new flat label
    pub fn new_label() -> Self {
        Self::default()
    }

    /// Empty draft for a new folder
    pub fn new_folder() -> Self {
        Self {
            exclusive: Some(1),
            ..Self::default()
        }
    }

    /// An empty ID is treated the same as a missing one.
    pub fn mode(&self) -> ModalMode {
        match self.id.as_deref() {
            Some(id) if !id.is_empty() => ModalMode::Edit,
            _ => ModalMode::Create,
        }
    }

    pub fn kind(&self) -> LabelKind {
        LabelKind::from_exclusive(self.exclusive.unwrap_or(0))
    }

    /// Notify toggle default: the explicit value when given, otherwise on for folders.
    pub fn default_notify(&self) -> bool {
        match self.notify {
            Some(notify) => notify != 0,
            None => self.kind().is_folder(),
        }
    }
}

impl From<&Label> for LabelDraft {
    fn from(label: &Label) -> Self {
        Self {
            id: Some(label.id.clone()),
            name: Some(label.name.clone()),
            color: Some(label.color.clone()),
            exclusive: Some(label.exclusive),
            notify: Some(label.notify),
        }
    }
}

/// Body sent to the create and update endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelPayload {
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Color")]
    pub color: String,
    #[serde(rename = "Display")]
    pub display: i32,
    #[serde(rename = "Exclusive")]
    pub exclusive: i32,
    #[serde(rename = "Notify")]
    pub notify: i32,
}

impl LabelPayload {
    pub fn mode(&self) -> ModalMode {
        match self.id.as_deref() {
            Some(id) if !id.is_empty() => ModalMode::Edit,
            _ => ModalMode::Create,
        }
    }
}
