// ── Core error types ──
//
// Errors from translating between domain and wire models, plus API errors
// passed through untouched. The API error keeps its variant so callers can
// still tell "not found" from "rejected" from "unreachable".

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── API errors (passed through) ──────────────────────────────────
    #[error(transparent)]
    Api(#[from] artie_api::Error),

    // ── Translation errors ───────────────────────────────────────────
    /// A discriminator string did not match any known variant.
    #[error("Unknown {kind} type: {value:?}")]
    Translation { kind: &'static str, value: String },

    /// A field's contents could not be carried over to the wire format.
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// The operation needs a server-assigned UUID the model does not have yet.
    #[error("{resource} has no UUID; create it before calling {operation}")]
    MissingUuid {
        resource: &'static str,
        operation: &'static str,
    },

    // ── Business rules ───────────────────────────────────────────────
    #[error("Validation failed: {message}")]
    Validation { message: String },
}

impl CoreError {
    pub(crate) fn unknown_type(kind: &'static str, value: impl Into<String>) -> Self {
        Self::Translation {
            kind,
            value: value.into(),
        }
    }

    /// `true` for the API's 404 sentinel.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api(e) if e.is_not_found())
    }

    /// `true` if the API could not be reached.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Api(e) if e.is_transport())
    }

    /// `true` for logical validation failures, local or server-side.
    pub fn is_validation(&self) -> bool {
        match self {
            Self::Validation { .. } => true,
            Self::Api(e) => e.is_validation(),
            _ => false,
        }
    }

    /// `true` for translation failures (unknown discriminators, bad fields).
    pub fn is_translation(&self) -> bool {
        matches!(self, Self::Translation { .. } | Self::InvalidField { .. })
    }
}
