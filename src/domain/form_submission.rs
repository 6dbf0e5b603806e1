use uuid::Uuid;

use super::{ContactEmail, FormFields};

pub const REQUIRED_FIELDS: [&str; 3] = ["name", "email", "status"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingRequiredFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// The required fields of a submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission {
    pub name: String,
    pub email: ContactEmail,
    pub status: String,
}

/// Presence check first, then the email shape check. Both run; a malformed
/// email replaces the missing-field reason, a missing email is only reported
/// as missing.
pub fn validate(fields: &FormFields) -> Result<ValidatedSubmission, ValidationError> {
    let mut error = REQUIRED_FIELDS
        .iter()
        .any(|field| !fields.is_filled(field))
        .then_some(ValidationError::MissingRequiredFields);

    let email = match fields.get("email").filter(|e| !e.is_empty()) {
        Some(raw) => match ContactEmail::parse(raw.to_string()) {
            Ok(email) => Some(email),
            Err(_) => {
                error = Some(ValidationError::InvalidEmail);
                None
            }
        },
        None => None,
    };

    if let Some(error) = error {
        return Err(error);
    }
    let email = email.ok_or(ValidationError::MissingRequiredFields)?;
    let required = |name: &str| {
        fields
            .get(name)
            .map(str::to_string)
            .ok_or(ValidationError::MissingRequiredFields)
    };
    Ok(ValidatedSubmission {
        name: required("name")?,
        email,
        status: required("status")?,
    })
}

/// One user attempt. Lives from submit intent until the attempt resolves.
#[derive(Debug, Clone)]
pub struct FormSubmission {
    pub id: Uuid,
    fields: FormFields,
    validation: Result<ValidatedSubmission, ValidationError>,
}

impl FormSubmission {
    pub fn new(fields: FormFields) -> Self {
        let validation = validate(&fields);
        Self {
            id: Uuid::new_v4(),
            fields,
            validation,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validation.is_ok()
    }

    pub fn error(&self) -> Option<ValidationError> {
        self.validation.as_ref().err().copied()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error().map(|e| e.to_string())
    }

    pub fn validated(&self) -> Result<&ValidatedSubmission, ValidationError> {
        self.validation.as_ref().map_err(|e| *e)
    }

    /// The full payload as the user entered it, not only the validated subset.
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }
}
