use reqwest::blocking::{Body, Client, Response};
use reqwest::{Method, StatusCode};

use crate::error::{Error, Result};
use crate::headers::{Headers, request_headers};
use crate::setting::ClientSetting;

/// Blocking HTTP client for JSON endpoints.
///
/// Every request carries `Accept: application/json`; POST adds
/// `Content-Type: application/json`. Caller headers override those
/// defaults, and an empty value list drops one. A dropped `Accept` goes out
/// as reqwest's `*/*`. Any status other than `200 OK` is an
/// [`Error::Status`].
///
/// Clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Client with reqwest's defaults.
    pub fn new() -> Result<Self> {
        ClientSetting::default().build()
    }

    /// Client configured from `SATCHEL_HTTP_*` environment variables.
    pub fn from_env() -> Result<Self> {
        ClientSetting::from_env().build()
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    pub fn get(&self, url: &str, headers: &Headers) -> Result<Response> {
        self.send(Method::GET, url, None, headers)
    }

    pub fn post(&self, url: &str, body: impl Into<Body>, headers: &Headers) -> Result<Response> {
        self.send(Method::POST, url, Some(body.into()), headers)
    }

    fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<Body>,
        headers: &Headers,
    ) -> Result<Response> {
        let headers = request_headers(&method, headers)?;

        let mut request = self.client.request(method.clone(), url).headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }

        tracing::debug!(%method, url, "sending request");
        let response = request.send().map_err(Error::Request)?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(%method, url, %status, "unexpected response status");
            return Err(Error::Status {
                method,
                url: url.to_string(),
                status,
            });
        }

        Ok(response)
    }
}

/// GET `url` on a freshly built client.
pub fn get(url: &str, headers: &Headers) -> Result<Response> {
    HttpClient::new()?.get(url, headers)
}

/// POST `body` to `url` on a freshly built client.
pub fn post(url: &str, body: impl Into<Body>, headers: &Headers) -> Result<Response> {
    HttpClient::new()?.post(url, body, headers)
}
