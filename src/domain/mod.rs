mod contact_email;
mod form_fields;
mod form_submission;
mod submission_status;

pub use contact_email::ContactEmail;
pub use form_fields::FormFields;
pub use form_submission::{
    validate, FormSubmission, ValidatedSubmission, ValidationError, REQUIRED_FIELDS,
};
pub use submission_status::SubmissionStatus;
