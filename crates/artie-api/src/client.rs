// Async HTTP client for the Artie control-plane API.
//
// Auth: `Authorization: Bearer arsk_...` on every request.
// One call is one request/response cycle: nothing is retried, cached or
// paginated. Resource-specific sub-clients live in `crate::resources` and
// are thin wrappers over `execute`.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};
use url::Url;

use crate::auth::ApiKey;
use crate::config::ClientConfig;
use crate::error::Error;

// ── Error response shape ─────────────────────────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    error: String,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the Artie control-plane API.
///
/// Holds only immutable configuration and a `reqwest::Client` (which pools
/// connections internally), so one instance can be shared freely across
/// tasks without locking.
#[derive(Debug, Clone)]
pub struct ArtieClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ArtieClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client from a [`ClientConfig`].
    ///
    /// Fails with [`Error::Configuration`] if the API key does not carry the
    /// `arsk_` prefix. No request is made.
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let api_key = ApiKey::parse(config.api_key.clone())?;

        let mut headers = HeaderMap::new();
        let mut auth_value =
            HeaderValue::from_str(&api_key.bearer()).map_err(|e| Error::Configuration {
                message: format!("invalid API key header value: {e}"),
            })?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);

        let http = config.transport.build_client_with_headers(headers)?;
        let base_url = Self::normalize_base_url(config.endpoint.clone());

        Ok(Self { http, base_url })
    }

    /// Make sure the base path ends with `/` so `join` appends rather than
    /// replacing the last segment (`https://host/v1` + `connectors`).
    fn normalize_base_url(mut url: Url) -> Url {
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url
    }

    /// The normalized endpoint every path is joined onto.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    // ── Dispatch ─────────────────────────────────────────────────────

    /// Perform one authenticated request and decode a 200 body into `T`.
    ///
    /// `body`, when present, is serialized before anything touches the
    /// network; a serialization failure returns [`Error::Encoding`].
    pub async fn execute<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let resp = self.send(method, path, body).await?;
        decode(resp).await
    }

    /// Like [`execute`](Self::execute) but discards the response body.
    pub async fn execute_discard<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), Error>
    where
        B: Serialize + ?Sized,
    {
        let resp = self.send(method, path, body).await?;
        trace!(status = %resp.status(), "discarding response body");
        Ok(())
    }

    /// Like [`execute`](Self::execute), aborting with [`Error::Cancelled`]
    /// as soon as `cancel` fires.
    pub async fn execute_with_cancel<T, B>(
        &self,
        cancel: &CancellationToken,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                debug!(path, "request cancelled");
                Err(Error::Cancelled)
            }
            result = self.execute(method, path, body) => result,
        }
    }

    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, Error>
    where
        B: Serialize + ?Sized,
    {
        // Encode first: a bad body must never produce a request.
        let encoded = body
            .map(|b| serde_json::to_vec(b).map_err(Error::Encoding))
            .transpose()?;
        let url = self.url(path)?;
        debug!("{method} {url}");

        let mut request = self.http.request(method, url);
        if let Some(bytes) = encoded {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(bytes);
        }

        let resp = request.send().await?;
        classify(resp).await
    }

    // ── Convenience verbs ────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.execute::<T, ()>(Method::GET, path, None).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn post_empty(&self, path: &str) -> Result<(), Error> {
        self.execute_discard::<()>(Method::POST, path, None).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        self.execute_discard::<()>(Method::DELETE, path, None).await
    }
}

// ── Response handling ────────────────────────────────────────────────

/// Map a response to `Ok` only for HTTP 200; everything else becomes an error.
async fn classify(resp: reqwest::Response) -> Result<reqwest::Response, Error> {
    let status = resp.status();
    if status == StatusCode::OK {
        return Ok(resp);
    }

    if status == StatusCode::NOT_FOUND {
        return Err(Error::NotFound);
    }

    // Only client errors carry a structured `{"error": ...}` body.
    if status.is_client_error() {
        let raw = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&raw)
            .map(|e| e.error)
            .unwrap_or_default();
        return Err(Error::Http {
            status: status.as_u16(),
            message,
        });
    }

    Err(Error::Http {
        status: status.as_u16(),
        message: String::new(),
    })
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        let preview: String = body.chars().take(200).collect();
        Error::Decoding {
            message: format!("{e} (body preview: {preview:?})"),
            body,
        }
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    fn config(endpoint: &str, key: &str) -> ClientConfig {
        ClientConfig::new(SecretString::from(key.to_owned()))
            .with_endpoint(Url::parse(endpoint).unwrap())
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let client = ArtieClient::new(&config("https://api.artie.com/v1", "arsk_x")).unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.artie.com/v1/");
        assert_eq!(
            client.url("connectors/abc").unwrap().as_str(),
            "https://api.artie.com/v1/connectors/abc"
        );
    }

    #[test]
    fn leading_slash_in_path_is_ignored() {
        let client = ArtieClient::new(&config("https://api.artie.com", "arsk_x")).unwrap();
        assert_eq!(
            client.url("/pipelines/1/start").unwrap().as_str(),
            "https://api.artie.com/pipelines/1/start"
        );
    }

    #[test]
    fn bad_key_fails_before_any_request() {
        let err = ArtieClient::new(&config("http://127.0.0.1:1", "not-a-key")).unwrap_err();
        assert!(err.is_configuration(), "got {err:?}");
    }
}
