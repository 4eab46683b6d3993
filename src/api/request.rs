//
//  starr
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Request descriptors.
//!
//! A [`Request`] describes one call to a Servarr service: the URI suffix
//! (which already carries the API version, e.g. `v3/series/42`), the query
//! parameters, and an optional pre-encoded JSON body. The transport in
//! [`client`](super::client) turns it into an HTTP request.
//!
//! Query parameters live in [`Params`], an ordered multi-map. Keys render in
//! sorted order, multi-valued keys repeat (`bookId=1&bookId=2`), and values
//! are percent-encoded per RFC 3986.
//!
//! ```rust
//! use starr::api::{Params, Request};
//!
//! let mut params = Params::new();
//! params.add("bookId", "2");
//! params.add("bookId", "1");
//! params.set_bool("includeAuthor", true);
//!
//! let req = Request::new("v1/book").with_query(params);
//! assert_eq!(req.to_string(), "v1/book?bookId=2&bookId=1&includeAuthor=true");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Method;
use serde::Serialize;

use super::common::{Error, Result};

/// Everything except RFC 3986 unreserved characters gets encoded.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Wire format for time filters: `YYYY-MM-DDTHH:MM:SS.sssZ`.
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Ordered query parameters, one key to many values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, Vec<String>>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value to `key`, keeping any existing values.
    pub fn add(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.0.entry(key.into()).or_default().push(value.to_string());
        self
    }

    /// Replaces every value of `key` with `value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.0.insert(key.into(), vec![value.to_string()]);
        self
    }

    /// Sets a boolean as the lowercase words `true` / `false`.
    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) -> &mut Self {
        self.set(key, if value { "true" } else { "false" })
    }

    /// Sets a UTC timestamp in the fixed wire format.
    pub fn set_time(&mut self, key: impl Into<String>, value: DateTime<Utc>) -> &mut Self {
        self.set(key, value.format(TIME_FORMAT))
    }

    /// Appends each value as a repeated key.
    pub fn add_all<I, V>(&mut self, key: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        for value in values {
            self.add(key, value);
        }
        self
    }

    /// Returns the first value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.first()).map(String::as_str)
    }

    /// Returns every value of `key`.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.0.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.0.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(key, value)` pairs in encoding order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .flat_map(|(k, vs)| vs.iter().map(move |v| (k.as_str(), v.as_str())))
    }

    /// Merges `other` into `self`, appending values.
    pub fn extend(&mut self, other: Params) {
        for (key, values) in other.0 {
            self.0.entry(key).or_default().extend(values);
        }
    }

    /// Renders the query string without a leading `?`.
    pub fn encode(&self) -> String {
        self.iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(k, QUERY_ENCODE_SET),
                    utf8_percent_encode(v, QUERY_ENCODE_SET)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.add(k, v);
        }
        params
    }
}

/// One call to a Servarr service.
///
/// Built per call and consumed by the transport. The body, when present, is
/// already-encoded JSON; the transport never marshals.
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// Version-prefixed path fragment, e.g. `v3/series/42`.
    pub uri: String,
    /// Query parameters.
    pub query: Params,
    /// Pre-encoded JSON body.
    pub body: Option<Bytes>,
}

impl Request {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Default::default()
        }
    }

    /// Replaces the query parameters.
    pub fn with_query(mut self, query: Params) -> Self {
        self.query = query;
        self
    }

    /// Sets a single query parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.set(key, value);
        self
    }

    /// Attaches an already-encoded JSON body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Encodes `value` as JSON and attaches it as the body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if `value` cannot be serialized.
    pub fn with_json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self> {
        let body = serde_json::to_vec(value).map_err(Error::Encode)?;
        Ok(self.with_body(body))
    }

    /// Renders `METHOD uri?query` for logs and error messages.
    pub fn describe(&self, method: &Method) -> String {
        format!("{method} {self}")
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query.is_empty() {
            f.write_str(&self.uri)
        } else {
            write!(f, "{}?{}", self.uri, self.query.encode())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_encode_sorts_keys() {
        let mut params = Params::new();
        params.set("sortKey", "date");
        params.set("page", 1);
        params.set("pageSize", 50);
        assert_eq!(params.encode(), "page=1&pageSize=50&sortKey=date");
    }

    #[test]
    fn test_encode_rfc3986() {
        let mut params = Params::new();
        params.set("term", "the expanse & more/1");
        params.set("tilde", "a~b-c_d.e");
        assert_eq!(
            params.encode(),
            "term=the%20expanse%20%26%20more%2F1&tilde=a~b-c_d.e"
        );
    }

    #[test]
    fn test_repeated_keys() {
        let mut params = Params::new();
        params.add_all("bookId", [1, 2]);
        assert_eq!(params.encode(), "bookId=1&bookId=2");
        assert_eq!(params.get("bookId"), Some("1"));
        assert_eq!(params.get_all("bookId").len(), 2);

        params.set("bookId", 3);
        assert_eq!(params.encode(), "bookId=3");
    }

    #[test]
    fn test_time_and_bool_formats() {
        let mut params = Params::new();
        let start = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        params.set_time("start", start);
        params.set_bool("unmonitored", false);
        assert_eq!(params.get("start"), Some("2024-03-09T07:05:01.000Z"));
        assert_eq!(params.get("unmonitored"), Some("false"));
    }

    #[test]
    fn test_display_without_query() {
        let req = Request::new("v3/series/2");
        assert_eq!(req.to_string(), "v3/series/2");
        assert_eq!(req.describe(&Method::DELETE), "DELETE v3/series/2");
    }

    #[test]
    fn test_display_with_query() {
        let req = Request::new("v3/series/2").with_param("deleteFiles", true);
        assert_eq!(req.describe(&Method::DELETE), "DELETE v3/series/2?deleteFiles=true");
    }

    #[test]
    fn test_with_json() {
        let req = Request::new("v3/tag")
            .with_json(&serde_json::json!({"label": "hd"}))
            .unwrap();
        assert_eq!(req.body.as_deref(), Some(br#"{"label":"hd"}"#.as_slice()));
    }
}
