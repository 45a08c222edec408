// ── Domain <-> wire conversions ──
//
// Bridges `artie_api::types` and `crate::model` in both directions:
//
// - wire -> domain: `From` / `TryFrom<wire::X> for X`. Fallible only where
//   a discriminator string has to be parsed.
// - domain -> wire: `From<&X> for wire::BaseX` for create bodies, and
//   `TryFrom<&X> for wire::X` for update bodies, which need the UUID.
//
// The API treats empty strings and zero ports as "unset", so outgoing
// required fields go through `non_empty` / `non_zero` and come back via
// `text` / `number`.

mod connector;
mod deployment;
mod network;
mod pipeline;
mod source_reader;

use uuid::Uuid;

use crate::error::CoreError;

// ── Helpers ────────────────────────────────────────────────────────

/// `None` for an empty string, so it is left out of the request.
fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

/// `None` for port 0, so it is left out of the request.
fn non_zero(value: u16) -> Option<u16> {
    (value != 0).then_some(value)
}

fn text(value: Option<String>) -> String {
    value.unwrap_or_default()
}

fn number(value: Option<u16>) -> u16 {
    value.unwrap_or_default()
}

/// Server-populated strings come back as `""` when unset.
fn present(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

/// The UUID a full wire model needs. Only created resources have one.
fn require_uuid(uuid: Option<Uuid>, resource: &'static str) -> Result<Uuid, CoreError> {
    uuid.ok_or(CoreError::MissingUuid {
        resource,
        operation: "update",
    })
}
