use secrecy::{ExposeSecret, SecretString};

use crate::error::Error;

/// Every Artie API key starts with this prefix.
pub const API_KEY_PREFIX: &str = "arsk_";

/// A validated Artie API key.
///
/// Construction checks the credential prefix locally, so a malformed key
/// is rejected before the client ever talks to the network.
#[derive(Debug, Clone)]
pub struct ApiKey(SecretString);

impl ApiKey {
    /// Validate a raw secret as an Artie API key.
    pub fn parse(raw: SecretString) -> Result<Self, Error> {
        let exposed = raw.expose_secret();
        if !exposed.starts_with(API_KEY_PREFIX) || exposed.len() == API_KEY_PREFIX.len() {
            return Err(Error::Configuration {
                message: format!("API key must start with {API_KEY_PREFIX:?}"),
            });
        }
        Ok(Self(raw))
    }

    /// The `Authorization` header value for this key.
    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.0.expose_secret())
    }

    pub fn secret(&self) -> &SecretString {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn accepts_prefixed_key() {
        let key = ApiKey::parse(SecretString::from("arsk_abc123".to_string())).unwrap();
        assert_eq!(key.bearer(), "Bearer arsk_abc123");
    }

    #[test]
    fn rejects_key_without_prefix() {
        let err = ApiKey::parse(SecretString::from("sk_live_abc".to_string())).unwrap_err();
        assert!(err.is_configuration(), "got {err:?}");
    }

    #[test]
    fn rejects_bare_prefix() {
        assert!(ApiKey::parse(SecretString::from("arsk_".to_string())).is_err());
    }

    #[test]
    fn debug_output_hides_secret() {
        let key = ApiKey::parse(SecretString::from("arsk_topsecret".to_string())).unwrap();
        assert!(!format!("{key:?}").contains("topsecret"));
    }
}
