//! Purpose a passcode was requested for

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Label classifying why a passcode was requested
///
/// The purpose only appears in the notification subject; it does not scope
/// verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    Login,
    Lab1,
    Lab2,
}

impl Purpose {
    /// Every accepted purpose
    pub const ALL: [Purpose; 3] = [Purpose::Login, Purpose::Lab1, Purpose::Lab2];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Purpose::Login => "login",
            Purpose::Lab1 => "lab1",
            Purpose::Lab2 => "lab2",
        }
    }

    /// Upper-cased label used in email subjects
    pub fn label(&self) -> String {
        self.as_str().to_ascii_uppercase()
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Purpose {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "login" => Ok(Purpose::Login),
            "lab1" => Ok(Purpose::Lab1),
            "lab2" => Ok(Purpose::Lab2),
            _ => Err(DomainError::InvalidPurpose { value: s.to_string() }),
        }
    }
}
