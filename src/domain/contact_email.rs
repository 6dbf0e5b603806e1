use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// An address shaped like `local@domain.tld`. Deliverability is the endpoint's problem.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ContactEmail(String);

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ContactEmail {
    pub fn parse(s: String) -> Result<Self, String> {
        if EMAIL_SHAPE.is_match(&s) {
            Ok(Self(s))
        } else {
            Err(format!("{s} is not a valid contact email."))
        }
    }
}
