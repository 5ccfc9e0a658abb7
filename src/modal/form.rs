//! Editable field state of the label dialog and its form-level validation.

use crate::constants::NAME_MAX_LENGTH;
use crate::palette::Palette;

/// Focusable fields, in tab order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Color,
    Notify,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Color,
            Self::Color => Self::Notify,
            Self::Notify => Self::Name,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Name => Self::Notify,
            Self::Color => Self::Name,
            Self::Notify => Self::Color,
        }
    }
}

/// Field-level problems surfaced next to the offending input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,

    #[error("Name must be at most {max} characters")]
    NameTooLong { max: usize },

    #[error("Choose a color")]
    InvalidColor,
}

impl FieldError {
    pub fn field(&self) -> FormField {
        match self {
            Self::NameRequired | Self::NameTooLong { .. } => FormField::Name,
            Self::InvalidColor => FormField::Color,
        }
    }
}

/// `#rgb` or `#rrggbb`
pub fn is_swatch(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Current values of the dialog inputs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelForm {
    pub name: String,
    pub color: String,
    pub notify: bool,
    focused: Option<FormField>,
}

impl LabelForm {
    pub fn new(name: impl Into<String>, color: impl Into<String>, notify: bool) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            notify,
            focused: None,
        }
    }

    /// Every failing constraint, in field order
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::NameRequired);
        } else if self.name.chars().count() > NAME_MAX_LENGTH {
            errors.push(FieldError::NameTooLong { max: NAME_MAX_LENGTH });
        }

        // Stored colors from older clients may not be swatches; only require one
        if self.color.trim().is_empty() {
            errors.push(FieldError::InvalidColor);
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    pub fn error_for(&self, field: FormField) -> Option<FieldError> {
        self.validate().into_iter().find(|e| e.field() == field)
    }

    pub fn focused(&self) -> Option<FormField> {
        self.focused
    }

    pub fn focus(&mut self, field: FormField) {
        self.focused = Some(field);
    }

    pub fn focus_next(&mut self) {
        self.focused = Some(self.focused.map_or(FormField::Name, FormField::next));
    }

    pub fn focus_previous(&mut self) {
        self.focused = Some(self.focused.map_or(FormField::Notify, FormField::previous));
    }

    /// Typed characters only land in the name field.
    pub fn insert_char(&mut self, c: char) -> bool {
        if self.focused == Some(FormField::Name) && !c.is_control() {
            self.name.push(c);
            true
        } else {
            false
        }
    }

    pub fn backspace(&mut self) -> bool {
        self.focused == Some(FormField::Name) && self.name.pop().is_some()
    }

    pub fn step_color(&mut self, palette: &Palette, offset: isize) {
        self.color = palette.step(&self.color, offset);
    }

    pub fn toggle_notify(&mut self) {
        self.notify = !self.notify;
    }
}
