use std::fmt;

/// Where a form is in its submit cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed(String),
}

impl SubmissionStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Sending => write!(f, "sending"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}
