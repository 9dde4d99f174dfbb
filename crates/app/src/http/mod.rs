//! HTTP client for the storefront REST API.
//!
//! Every request goes to `base_url + path` and carries `Authorization: Bearer <token>` while
//! a token is held. Failures are handed back unchanged; there is no retry or timeout policy,
//! each caller decides what a status code means at its call site.

use std::{fmt, sync::Arc};

use parking_lot::RwLock;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;
use zeroize::Zeroizing;

mod errors;

pub use errors::ApiError;

use errors::error_message;

/// Empty query string.
pub const NO_QUERY: &[(&str, &str)] = &[];

/// Bearer token shared by every clone of an [`ApiClient`].
#[derive(Clone, Default)]
pub struct BearerToken(Arc<RwLock<Option<Zeroizing<String>>>>);

impl BearerToken {
    /// Attach `token` to subsequent requests.
    pub fn set(&self, token: &str) {
        *self.0.write() = Some(Zeroizing::new(token.to_string()));
    }

    /// Stop sending a bearer header.
    pub fn clear(&self) {
        *self.0.write() = None;
    }

    /// Whether a token is currently held.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.read().is_some()
    }

    fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self.0.read().as_ref() {
            Some(token) => request.bearer_auth(token.as_str()),
            None => request,
        }
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_set() {
            f.write_str("BearerToken(**redacted**)")
        } else {
            f.write_str("BearerToken(None)")
        }
    }
}

/// Thin wrapper over [`reqwest::Client`] bound to the API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: Client,
    bearer: BearerToken,
}

impl ApiClient {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] when `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut base_url = base_url.trim().to_string();

        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let base_url =
            Url::parse(&base_url).map_err(|source| ApiError::InvalidUrl(source.to_string()))?;

        Ok(Self {
            base_url,
            http: Client::new(),
            bearer: BearerToken::default(),
        })
    }

    /// The token slot shared with every clone of this client.
    #[must_use]
    pub fn bearer(&self) -> &BearerToken {
        &self.bearer
    }

    /// Resolve `path` against the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] when the joined URL is invalid.
    pub fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|source| ApiError::InvalidUrl(source.to_string()))
    }

    fn request<Q>(&self, method: Method, path: &str, query: &Q) -> Result<RequestBuilder, ApiError>
    where
        Q: Serialize + ?Sized,
    {
        let url = self.url(path)?;

        debug!(%method, %url, "sending request");

        Ok(self.bearer.apply(self.http.request(method, url).query(query)))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();

        debug!(%status, "request failed");

        Err(ApiError::Status {
            status,
            message: error_message(&body),
        })
    }

    /// `GET` a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status or an undecodable body.
    pub async fn get<Q, T>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::GET, path, query)?;

        Ok(self.send(request).await?.json().await?)
    }

    /// `GET` a binary document.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or non-2xx status.
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let request = self.request(Method::GET, path, NO_QUERY)?;

        Ok(self.send(request).await?.bytes().await?.to_vec())
    }

    /// `POST` with query parameters and no body, decoding a JSON response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status or an undecodable body.
    pub async fn post<Q, T>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path, query)?;

        Ok(self.send(request).await?.json().await?)
    }

    /// `POST` a JSON body, decoding a JSON response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status or an undecodable body.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path, NO_QUERY)?.json(body);

        Ok(self.send(request).await?.json().await?)
    }

    /// `POST` with query parameters, discarding the response body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or non-2xx status.
    pub async fn post_unit<Q>(&self, path: &str, query: &Q) -> Result<(), ApiError>
    where
        Q: Serialize + ?Sized,
    {
        let request = self.request(Method::POST, path, query)?;

        self.send(request).await?;

        Ok(())
    }

    /// `PUT` with query parameters, discarding the response body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or non-2xx status.
    pub async fn put<Q>(&self, path: &str, query: &Q) -> Result<(), ApiError>
    where
        Q: Serialize + ?Sized,
    {
        let request = self.request(Method::PUT, path, query)?;

        self.send(request).await?;

        Ok(())
    }

    /// `DELETE` with query parameters, discarding the response body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or non-2xx status.
    pub async fn delete<Q>(&self, path: &str, query: &Q) -> Result<(), ApiError>
    where
        Q: Serialize + ?Sized,
    {
        let request = self.request(Method::DELETE, path, query)?;

        self.send(request).await?;

        Ok(())
    }
}
