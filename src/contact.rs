//! Contact form model: field values, per-field error flags and the
//! simulated submission.

use std::rc::Rc;

use serde::Serialize;
use yew::functional::Reducible;

use crate::validation::{validate_field, FieldKind, ValidationResult};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
}

pub const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        label: "Full Name",
        kind: FieldKind::Text,
        required: true,
        placeholder: "Your name",
    },
    FieldSpec {
        name: "email",
        label: "Email Address",
        kind: FieldKind::Email,
        required: true,
        placeholder: "you@example.com",
    },
    FieldSpec {
        name: "phone",
        label: "Phone Number",
        kind: FieldKind::Tel,
        required: false,
        placeholder: "10-digit mobile number",
    },
    FieldSpec {
        name: "service",
        label: "Service Required",
        kind: FieldKind::Select,
        required: false,
        placeholder: "Select a service",
    },
    FieldSpec {
        name: "message",
        label: "Message",
        kind: FieldKind::TextArea,
        required: true,
        placeholder: "Tell us about your project",
    },
];

pub const SERVICE_OPTIONS: &[&str] = &[
    "Electrical Contracting",
    "Transformer Repair",
    "Substation Maintenance",
    "Other",
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldState {
    pub value: String,
    pub error: bool,
}

/// Collected values, logged on submit.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormPhase {
    Editing,
    Submitted(ContactSubmission),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ContactAction {
    Input { index: usize, value: String },
    Blur(usize),
    Submit,
    Reset,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactFormState {
    pub fields: Vec<FieldState>,
    pub phase: FormPhase,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self {
            fields: vec![FieldState::default(); CONTACT_FIELDS.len()],
            phase: FormPhase::Editing,
        }
    }
}

impl ContactFormState {
    fn validate(&mut self, index: usize) -> Option<ValidationResult> {
        let spec = CONTACT_FIELDS.get(index)?;
        let field = self.fields.get_mut(index)?;
        let result = validate_field(spec.kind, &field.value, spec.required);
        field.error = !result.is_valid();
        Some(result)
    }

    pub fn blur(&mut self, index: usize) -> Option<ValidationResult> {
        self.validate(index)
    }

    /// Stores the value; a field already marked invalid is re-checked as the
    /// user types so the error clears as soon as it is fixed.
    pub fn input(&mut self, index: usize, value: String) {
        let Some(field) = self.fields.get_mut(index) else {
            return;
        };
        field.value = value;
        if field.error {
            self.validate(index);
        }
    }

    /// Validates every field. On success moves to `Submitted`; otherwise
    /// returns the names of the offending fields.
    pub fn submit(&mut self) -> Result<ContactSubmission, Vec<&'static str>> {
        let mut invalid = Vec::new();
        for (index, spec) in CONTACT_FIELDS.iter().enumerate() {
            if let Some(result) = self.validate(index) {
                if !result.is_valid() {
                    invalid.push(spec.name);
                }
            }
        }
        if !invalid.is_empty() {
            return Err(invalid);
        }

        let submission = self.submission();
        self.phase = FormPhase::Submitted(submission.clone());
        Ok(submission)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn value(&self, name: &str) -> &str {
        CONTACT_FIELDS
            .iter()
            .position(|spec| spec.name == name)
            .and_then(|index| self.fields.get(index))
            .map(|field| field.value.trim())
            .unwrap_or("")
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, FormPhase::Submitted(_))
    }

    fn submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.value("name").to_string(),
            email: self.value("email").to_string(),
            phone: self.value("phone").to_string(),
            service: self.value("service").to_string(),
            message: self.value("message").to_string(),
        }
    }
}

impl Reducible for ContactFormState {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Input { index, value } => next.input(index, value),
            ContactAction::Blur(index) => {
                if let Some(reason) = next.blur(index).and_then(|r| r.reason()) {
                    log::debug!("field {} invalid: {:?}", index, reason);
                }
            }
            ContactAction::Submit => {
                if let Err(fields) = next.submit() {
                    log::debug!("contact form blocked, invalid fields: {:?}", fields);
                }
            }
            ContactAction::Reset => next.reset(),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
