use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Body of a 200 response from the ping / validate endpoints.
///
/// A non-empty `error` means the check ran and failed: bad credentials,
/// unreachable host, missing replication permissions, etc.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
    #[serde(default)]
    pub error: Option<String>,
}

/// Result of a connectivity check or pipeline validation that reached the
/// server and got an answer.
///
/// Kept separate from [`Error`] so that a check which *failed* is not
/// confused with a check that could not be *performed*.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Passed,
    Failed { message: String },
}

impl ValidationOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Collapse into the crate error type, mapping a failure to
    /// [`Error::Validation`].
    pub fn into_result(self) -> Result<(), Error> {
        match self {
            Self::Passed => Ok(()),
            Self::Failed { message } => Err(Error::Validation { message }),
        }
    }
}

impl From<ValidationResponse> for ValidationOutcome {
    fn from(resp: ValidationResponse) -> Self {
        match resp.error {
            Some(message) if !message.is_empty() => Self::Failed { message },
            _ => Self::Passed,
        }
    }
}
