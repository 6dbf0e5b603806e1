use std::fmt;

use crate::domain::FormFields;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    /// Class list the status region carries while showing a message of this kind.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusKind::Success => "form__message form__message--success",
            StatusKind::Error => "form__message form__message--error",
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusKind::Success => write!(f, "success"),
            StatusKind::Error => write!(f, "error"),
        }
    }
}

/// The single element showing one validation or submission outcome at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusRegion {
    pub text: String,
    pub kind: Option<StatusKind>,
    pub visible: bool,
}

impl StatusRegion {
    pub fn show(&mut self, message: &str, kind: StatusKind) {
        self.text = message.to_string();
        self.kind = Some(kind);
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn css_class(&self) -> &'static str {
        self.kind.map(|k| k.css_class()).unwrap_or("form__message")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: String,
    pub enabled: bool,
}

impl SubmitControl {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: true,
        }
    }

    /// Disables the control and swaps its label. Returns the label it had.
    pub fn disable(&mut self, busy_label: &str) -> String {
        self.enabled = false;
        std::mem::replace(&mut self.label, busy_label.to_string())
    }

    pub fn restore(&mut self, label: String) {
        self.label = label;
        self.enabled = true;
    }
}

/// The parts of the contact form page the controller reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub fields: FormFields,
    pub submit_control: SubmitControl,
    pub status_region: StatusRegion,
}

impl FormView {
    pub fn new(submit_label: impl Into<String>) -> Self {
        Self {
            fields: FormFields::new(),
            submit_control: SubmitControl::new(submit_label),
            status_region: StatusRegion::default(),
        }
    }

    pub fn reset(&mut self) {
        self.fields.clear_values();
    }
}
