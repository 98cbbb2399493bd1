use bytes::Bytes;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE},
    Method, Response,
};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::{Configuration, Error, Result};
use std::collections::HashMap;

pub type Headers = HashMap<String, String>;

pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Looked up with an exact, case-sensitive comparison against caller keys.
const CONTENT_TYPE_KEY: &str = "Content-Type";

/// Thin wrapper over a shared [`reqwest::Client`].
///
/// Every request gets `Content-Type: application/json` unless the caller
/// passes a `Content-Type` header. Responses are handed back untouched,
/// whatever their status, and the caller owns reading the body.
#[derive(Debug, Clone)]
pub struct RequestClient {
    config: Configuration,
    client: reqwest::Client,
}

impl RequestClient {
    pub fn new() -> Result<Self> {
        Self::with_config(Configuration::DEFAULT)
    }

    /// Uses [`Configuration::DEFAULT`] when `config` is `None`.
    pub fn from_config(config: Option<Configuration>) -> Result<Self> {
        Self::with_config(config.unwrap_or_default())
    }

    pub fn with_config(config: Configuration) -> Result<Self> {
        if !config.insecure_skip_verify {
            warn!(
                "insecure_skip_verify = false is not honoured, certificates are never verified"
            );
        }
        let mut builder = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .no_proxy();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(Error::ClientBuild)?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub async fn get(&self, url: &str, headers: &Headers) -> Result<Response> {
        self.request(Method::GET, url, headers, None).await
    }

    pub async fn post(
        &self,
        url: &str,
        headers: &Headers,
        body: Option<Bytes>,
    ) -> Result<Response> {
        self.request(Method::POST, url, headers, body).await
    }

    pub async fn put(
        &self,
        url: &str,
        headers: &Headers,
        body: Option<Bytes>,
    ) -> Result<Response> {
        self.request(Method::PUT, url, headers, body).await
    }

    pub async fn patch(
        &self,
        url: &str,
        headers: &Headers,
        body: Option<Bytes>,
    ) -> Result<Response> {
        self.request(Method::PATCH, url, headers, body).await
    }

    pub async fn delete(&self, url: &str, headers: &Headers) -> Result<Response> {
        self.request(Method::DELETE, url, headers, None).await
    }

    /// Sends `body` as given. With no body, methods that expect one
    /// (POST, PUT, PATCH) send an empty body and the rest send none.
    #[instrument(skip(self, headers, body))]
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        headers: &Headers,
        body: Option<Bytes>,
    ) -> Result<Response> {
        let url = parse_url(url)?;
        let headers = build_headers(headers)?;

        let body = match body {
            Some(body) => Some(body),
            None if expects_body(&method) => Some(Bytes::new()),
            None => None,
        };

        let mut builder = self.client.request(method, url).headers(headers);
        if let Some(body) = body {
            debug!(len = body.len(), "attaching request body");
            builder = builder.body(body);
        }
        let response = builder.send().await?;
        debug!(status = %response.status(), "received response");
        Ok(response)
    }
}

/// Only absolute `http`/`https` URLs with a host can be dispatched.
fn parse_url(url: &str) -> Result<Url> {
    let parsed =
        Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{} for {:?}", e, url)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::InvalidUrl(format!(
            "unsupported scheme {:?} in {:?}",
            parsed.scheme(),
            url
        )));
    }
    if parsed.host_str().is_none() {
        return Err(Error::InvalidUrl(format!("no host in {:?}", url)));
    }
    Ok(parsed)
}

fn expects_body(method: &Method) -> bool {
    *method == Method::POST || *method == Method::PUT || *method == Method::PATCH
}

fn build_headers(headers: &Headers) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len() + 1);
    let mut has_content_type = false;
    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|e| Error::InvalidHeader(format!("{} for {:?}", e, key)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| Error::InvalidHeader(format!("{} for value of {:?}", e, key)))?;
        map.append(name, value);
        if key == CONTENT_TYPE_KEY {
            has_content_type = true;
        }
    }
    if !has_content_type {
        map.append(CONTENT_TYPE, HeaderValue::from_static(DEFAULT_CONTENT_TYPE));
    }
    Ok(map)
}
