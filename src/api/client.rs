//
//  starr
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport for Servarr APIs
//!
//! This module provides the transport every service wrapper is built on.
//! It handles URL construction, API key injection, body handling, and the
//! mapping of non-2xx statuses to typed errors.
//!
//! ## Features
//!
//! - `X-Api-Key` header on every request
//! - `<base>/api/<version>/<uri>` URL layout, with `feed/` URIs left untouched
//! - Raw-response and decode-into-type variants of every method
//! - Per-request timeout and optional TLS verification bypass from [`Config`]
//! - Optional request/response logging via [`LoggingMiddleware`]
//!
//! ## Cancellation
//!
//! Every operation is an `async fn`. Dropping the returned future (for example
//! by losing a `tokio::select!` race or hitting a `tokio::time::timeout`)
//! aborts the in-flight request.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use serde::de::DeserializeOwned;

use super::common::{Error, ResponseError, Result};
use super::logging::LoggingMiddleware;
use super::request::Request;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Timeout applied when the caller does not pick one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection parameters for one Servarr service.
///
/// Built once per remote service and turned into a [`Client`] with
/// [`Config::build`]. The base URL never keeps a trailing slash.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use starr::api::Config;
///
/// let config = Config::new("http://localhost:8989/", "0123456789abcdef")
///     .timeout(Duration::from_secs(10))
///     .valid_ssl(false);
///
/// assert_eq!(config.url(), "http://localhost:8989");
/// let client = config.build()?;
/// # Ok::<(), starr::Error>(())
/// ```
#[derive(Clone)]
pub struct Config {
    url: String,
    api_key: String,
    timeout: Duration,
    valid_ssl: bool,
    http: Option<reqwest::Client>,
    logging: Option<LoggingMiddleware>,
}

impl Config {
    /// Creates a configuration for the service at `url`.
    ///
    /// Trailing slashes are stripped from `url`. TLS verification is on and
    /// the timeout is [`DEFAULT_TIMEOUT`].
    pub fn new(url: impl AsRef<str>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.as_ref().trim().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
            valid_ssl: true,
            http: None,
            logging: None,
        }
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets whether TLS certificates must verify.
    ///
    /// Passing `false` accepts self-signed and otherwise invalid certificates.
    pub fn valid_ssl(mut self, valid_ssl: bool) -> Self {
        self.valid_ssl = valid_ssl;
        self
    }

    /// Uses a caller-built `reqwest` client.
    ///
    /// The client's own timeout and TLS settings win over [`Config::timeout`]
    /// and [`Config::valid_ssl`]. Logging still applies.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Routes every request through the given logging middleware.
    pub fn logging(mut self, logging: LoggingMiddleware) -> Self {
        self.logging = Some(logging);
        self
    }

    /// The base URL, without a trailing slash.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The key sent as `X-Api-Key`.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The per-request timeout.
    pub fn timeout_duration(&self) -> Duration {
        self.timeout
    }

    /// Whether TLS certificates must verify.
    pub fn verify_tls(&self) -> bool {
        self.valid_ssl
    }

    fn http_builder(&self) -> reqwest::ClientBuilder {
        reqwest::Client::builder()
            .user_agent(format!("starr/{}", crate::VERSION))
            .timeout(self.timeout)
            .danger_accept_invalid_certs(!self.valid_ssl)
    }

    /// Validates the configuration and builds the transport.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if the base URL does not parse or is not http(s)
    /// - [`Error::RequestConstruction`] if the HTTP client cannot be built
    pub fn build(self) -> Result<Client> {
        let parsed = url::Url::parse(&self.url)
            .map_err(|e| Error::InvalidArgument(format!("invalid base URL {:?}: {e}", self.url)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::InvalidArgument(format!(
                "invalid base URL {:?}: scheme must be http or https",
                self.url
            )));
        }

        let http = match &self.http {
            Some(client) => client.clone(),
            None => self
                .http_builder()
                .build()
                .map_err(|e| Error::RequestConstruction(e.to_string()))?,
        };

        let mut builder = ClientBuilder::new(http);
        if let Some(logging) = self.logging {
            builder = builder.with(logging);
        }

        Ok(Client {
            base: self.url,
            api_key: self.api_key,
            http: builder.build(),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("valid_ssl", &self.valid_ssl)
            .field("custom_client", &self.http.is_some())
            .field("logging", &self.logging)
            .finish()
    }
}

/// A fully read response.
///
/// The body has been consumed and the connection released by the time a
/// caller sees this value.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// The URL that was requested.
    pub url: String,
    pub body: Bytes,
}

impl Response {
    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] naming the URL when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|source| Error::Decode {
            url: self.url.clone(),
            source,
        })
    }

    /// The body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// The transport every service wrapper calls.
///
/// Only [`Apier::send`] is required; the verb methods are provided on top of
/// it. Decoding variants live on [`ApierExt`], which every `Apier` gets for
/// free. The trait is object safe so wrappers can hold `Arc<dyn Apier>`.
#[async_trait]
pub trait Apier: Send + Sync {
    /// Performs one call. `json` marks decoding calls, which send
    /// `Accept: application/json`.
    ///
    /// Any status outside 200-299 must surface as [`Error::Response`].
    async fn send(&self, method: Method, req: Request, json: bool) -> Result<Response>;

    async fn get(&self, req: Request) -> Result<Response> {
        self.send(Method::GET, req, false).await
    }

    /// # Errors
    ///
    /// [`Error::InvalidArgument`] when `req` has no body.
    async fn post(&self, req: Request) -> Result<Response> {
        require_body(&Method::POST, &req)?;
        self.send(Method::POST, req, false).await
    }

    /// # Errors
    ///
    /// [`Error::InvalidArgument`] when `req` has no body.
    async fn put(&self, req: Request) -> Result<Response> {
        require_body(&Method::PUT, &req)?;
        self.send(Method::PUT, req, false).await
    }

    async fn delete(&self, req: Request) -> Result<Response> {
        self.send(Method::DELETE, req, false).await
    }

    /// Deletes and discards whatever the service answered.
    async fn delete_any(&self, req: Request) -> Result<()> {
        self.send(Method::DELETE, req, false).await.map(|_| ())
    }
}

/// Decode-into-type variants of the [`Apier`] verbs.
#[async_trait]
pub trait ApierExt: Apier {
    async fn get_into<T: DeserializeOwned + Send>(&self, req: Request) -> Result<T>;
    async fn post_into<T: DeserializeOwned + Send>(&self, req: Request) -> Result<T>;
    async fn put_into<T: DeserializeOwned + Send>(&self, req: Request) -> Result<T>;
    async fn delete_into<T: DeserializeOwned + Send>(&self, req: Request) -> Result<T>;
}

#[async_trait]
impl<A: Apier + ?Sized> ApierExt for A {
    async fn get_into<T: DeserializeOwned + Send>(&self, req: Request) -> Result<T> {
        self.send(Method::GET, req, true).await?.json()
    }

    async fn post_into<T: DeserializeOwned + Send>(&self, req: Request) -> Result<T> {
        require_body(&Method::POST, &req)?;
        self.send(Method::POST, req, true).await?.json()
    }

    async fn put_into<T: DeserializeOwned + Send>(&self, req: Request) -> Result<T> {
        require_body(&Method::PUT, &req)?;
        self.send(Method::PUT, req, true).await?.json()
    }

    async fn delete_into<T: DeserializeOwned + Send>(&self, req: Request) -> Result<T> {
        self.send(Method::DELETE, req, true).await?.json()
    }
}

fn require_body(method: &Method, req: &Request) -> Result<()> {
    if req.body.is_none() {
        return Err(Error::InvalidArgument(format!(
            "{} requires a request body",
            req.describe(method)
        )));
    }
    Ok(())
}

/// The HTTP transport for one Servarr service.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct Client {
    base: String,
    api_key: String,
    http: ClientWithMiddleware,
}

impl Client {
    /// Shorthand for [`Config::build`].
    pub fn new(config: Config) -> Result<Self> {
        config.build()
    }

    /// The base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Builds the full URL for `req`.
    ///
    /// URIs whose first segment is `api` or `feed` are joined as-is; every
    /// other URI gets `api/` prepended.
    ///
    /// ```rust
    /// use starr::api::{Config, Request};
    ///
    /// let client = Config::new("http://mock/", "key").build()?;
    /// assert_eq!(client.url_for(&Request::new("v3/series/2")), "http://mock/api/v3/series/2");
    /// assert_eq!(
    ///     client.url_for(&Request::new("feed/v3/calendar/sonarr.ics")),
    ///     "http://mock/feed/v3/calendar/sonarr.ics"
    /// );
    /// # Ok::<(), starr::Error>(())
    /// ```
    pub fn url_for(&self, req: &Request) -> String {
        let path = req.uri.trim_start_matches('/');
        let first = path.split(['/', '?']).next().unwrap_or_default();
        let prefix = if first == "api" || first == "feed" { "" } else { "api/" };

        let mut url = format!("{}/{}{}", self.base, prefix, path);
        if !req.query.is_empty() {
            url.push('?');
            url.push_str(&req.query.encode());
        }
        url
    }
}

#[async_trait]
impl Apier for Client {
    async fn send(&self, method: Method, req: Request, json: bool) -> Result<Response> {
        let url = self.url_for(&req);
        tracing::debug!("{} {}", method, url);

        let mut builder = self
            .http
            .request(method.clone(), &url)
            .header(API_KEY_HEADER, &self.api_key);
        if json {
            builder = builder.header(ACCEPT, "application/json");
        }
        if let Some(body) = req.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        if !status.is_success() {
            tracing::debug!("{} {} returned {}", method, url, status);
            return Err(ResponseError {
                status,
                method,
                url,
                body: String::from_utf8_lossy(&body).into_owned(),
            }
            .into());
        }

        Ok(Response {
            status,
            headers,
            url,
            body,
        })
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client").field("base", &self.base).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::ErrorKind;
    use crate::api::request::Params;

    fn client(url: &str) -> Client {
        Config::new(url, "mockAPIkey").build().unwrap()
    }

    #[test]
    fn test_trailing_slashes_are_stripped() {
        assert_eq!(Config::new("http://mock/", "k").url(), "http://mock");
        assert_eq!(Config::new("http://mock//", "k").url(), "http://mock");
        assert_eq!(Config::new("http://mock/sonarr/", "k").url(), "http://mock/sonarr");
    }

    #[test]
    fn test_url_has_one_api_segment() {
        for base in ["http://mock", "http://mock/"] {
            let c = client(base);
            assert_eq!(c.url_for(&Request::new("v3/series")), "http://mock/api/v3/series");
            assert_eq!(c.url_for(&Request::new("/v3/series")), "http://mock/api/v3/series");
            assert_eq!(c.url_for(&Request::new("api/v3/series")), "http://mock/api/v3/series");
        }
    }

    #[test]
    fn test_url_with_base_path_and_query() {
        let c = client("https://host/sonarr/");
        let mut query = Params::new();
        query.set("unmonitored", "true");
        query.set("start", "2024-01-01T00:00:00.000Z");
        let req = Request::new("feed/v3/calendar/sonarr.ics").with_query(query);
        assert_eq!(
            c.url_for(&req),
            "https://host/sonarr/feed/v3/calendar/sonarr.ics?start=2024-01-01T00%3A00%3A00.000Z&unmonitored=true"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = Config::new("not a url", "k").build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = Config::new("ftp://mock", "k").build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_tls_and_timeout_reach_the_http_client() {
        let config = Config::new("https://mock", "k")
            .timeout(Duration::from_millis(1500))
            .valid_ssl(false);
        assert!(!config.verify_tls());
        assert_eq!(config.timeout_duration(), Duration::from_millis(1500));

        let builder = format!("{:?}", config.http_builder());
        assert!(builder.contains("danger_accept_invalid_certs"), "{builder}");
        assert!(builder.contains("1.5s"), "{builder}");
        assert!(config.build().is_ok());

        let strict = Config::new("https://mock", "k");
        assert!(strict.verify_tls());
        assert_eq!(strict.timeout_duration(), DEFAULT_TIMEOUT);
        assert!(!format!("{:?}", strict.http_builder()).contains("danger_accept_invalid_certs"));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config::new("http://mock", "supersecret");
        assert!(!format!("{config:?}").contains("supersecret"));
    }

    #[tokio::test]
    async fn test_post_requires_body() {
        let c = client("http://mock");
        let err = c.post(Request::new("v3/command")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = c
            .put_into::<serde_json::Value>(Request::new("v3/series/1"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
