//
//  starr
//  api/logging.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request/Response Logging
//!
//! A [`reqwest_middleware`] layer that writes one line per completed call,
//! with the request body, response status, response headers and response
//! body, and reports byte counts to an optional callback.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use starr::api::{Config, LoggingMiddleware};
//!
//! let received = Arc::new(AtomicUsize::new(0));
//! let counter = received.clone();
//!
//! let logging = LoggingMiddleware::new(1024)
//!     .with_sink(|line| eprintln!("{line}"))
//!     .with_counter(move |_sent, rcvd| {
//!         counter.fetch_add(rcvd, Ordering::Relaxed);
//!     });
//!
//! let client = Config::new("http://localhost:7878", "key").logging(logging).build()?;
//! # Ok::<(), starr::Error>(())
//! ```
//!
//! ## Notes
//!
//! - The response body is read in full before the caller sees it, then handed
//!   back unchanged in a rebuilt response
//! - The rebuilt response no longer reports the final URL after redirects;
//!   the transport keeps the requested URL itself

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use http::Extensions;
use reqwest::header::HeaderMap;
use reqwest::{Method, Request, Response, StatusCode};
use reqwest_middleware::{Middleware, Next};

/// Receives each rendered log line.
pub type LogSink = Arc<dyn Fn(&str) + Send + Sync>;

/// Receives `(sent, received)` body byte counts for each call.
pub type ByteCounter = Arc<dyn Fn(usize, usize) + Send + Sync>;

const DATA_TRUNCATED: &str = "<data truncated>";
const BODY_TRUNCATED: &str = "<body truncated>";

/// Logs every request/response pair passing through the client.
///
/// `max_body` caps how many bytes of each body go into the log line; 0 logs
/// bodies whole. Counts passed to the counter are always the full sizes.
#[derive(Clone, Default)]
pub struct LoggingMiddleware {
    max_body: usize,
    sink: Option<LogSink>,
    counter: Option<ByteCounter>,
}

impl LoggingMiddleware {
    pub fn new(max_body: usize) -> Self {
        Self {
            max_body,
            ..Default::default()
        }
    }

    /// Sends log lines to `sink` instead of `tracing::debug!`.
    pub fn with_sink<F>(mut self, sink: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Calls `counter` with the request and response body sizes of each call.
    pub fn with_counter<F>(mut self, counter: F) -> Self
    where
        F: Fn(usize, usize) + Send + Sync + 'static,
    {
        self.counter = Some(Arc::new(counter));
        self
    }

    pub fn max_body(&self) -> usize {
        self.max_body
    }

    fn emit(&self, line: &str) {
        match &self.sink {
            Some(sink) => sink(line),
            None => tracing::debug!("{}", line),
        }
    }
}

impl fmt::Debug for LoggingMiddleware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingMiddleware")
            .field("max_body", &self.max_body)
            .field("sink", &self.sink.is_some())
            .field("counter", &self.counter.is_some())
            .finish()
    }
}

#[async_trait]
impl Middleware for LoggingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let method = req.method().clone();
        let url = req.url().to_string();
        let sent = req
            .body()
            .and_then(|b| b.as_bytes())
            .map(Bytes::copy_from_slice)
            .unwrap_or_default();

        let response = next.run(req, extensions).await?;

        let status = response.status();
        let version = response.version();
        let headers = response.headers().clone();
        let received = response.bytes().await?;

        self.emit(&render(&method, &url, &sent, status, &headers, &received, self.max_body));
        if let Some(counter) = &self.counter {
            counter(sent.len(), received.len());
        }

        let mut rebuilt = http::Response::new(received);
        *rebuilt.status_mut() = status;
        *rebuilt.version_mut() = version;
        *rebuilt.headers_mut() = headers;
        Ok(Response::from(rebuilt))
    }
}

fn render(
    method: &Method,
    url: &str,
    sent: &[u8],
    status: StatusCode,
    headers: &HeaderMap,
    received: &[u8],
    max_body: usize,
) -> String {
    let mut header_lines = String::new();
    for (name, value) in headers {
        header_lines.push_str(name.as_str());
        header_lines.push_str(": ");
        header_lines.push_str(&String::from_utf8_lossy(value.as_bytes()));
        header_lines.push('\n');
    }

    format!(
        "Sent ({}) {} bytes to {}: {}\n Response: {} {} bytes\n{}{}",
        method,
        sent.len(),
        url,
        clip(sent, max_body, DATA_TRUNCATED),
        status,
        received.len(),
        header_lines,
        clip(received, max_body, BODY_TRUNCATED),
    )
}

fn clip(body: &[u8], max_body: usize, marker: &str) -> String {
    if max_body > 0 && body.len() > max_body {
        format!("{} {}", String::from_utf8_lossy(&body[..max_body]), marker)
    } else {
        String::from_utf8_lossy(body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, CONTENT_TYPE, SET_COOKIE};

    #[test]
    fn test_render_truncates_both_bodies() {
        let sent = b"0123456789abcdefghij";
        let received = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let line = render(&Method::POST, "http://mock/api/v3/command", sent, StatusCode::OK, &headers, received, 16);

        assert!(line.starts_with("Sent (POST) 20 bytes to http://mock/api/v3/command: 0123456789abcdef <data truncated>\n"));
        assert!(line.contains(" Response: 200 OK 26 bytes\n"));
        assert!(line.contains("content-type: application/json\n"));
        assert!(line.ends_with("ABCDEFGHIJKLMNOP <body truncated>"));
    }

    #[test]
    fn test_render_unlimited() {
        let line = render(&Method::GET, "http://mock/api/v1/tag", b"", StatusCode::NOT_FOUND, &HeaderMap::new(), b"[]", 0);
        assert_eq!(line, "Sent (GET) 0 bytes to http://mock/api/v1/tag: \n Response: 404 Not Found 2 bytes\n[]");
    }

    #[test]
    fn test_render_repeats_multi_valued_headers() {
        let mut headers = HeaderMap::new();
        headers.append(SET_COOKIE, HeaderValue::from_static("a=1"));
        headers.append(SET_COOKIE, HeaderValue::from_static("b=2"));
        let line = render(&Method::GET, "u", b"", StatusCode::OK, &headers, b"", 0);
        assert!(line.contains("set-cookie: a=1\nset-cookie: b=2\n"));
    }

    #[test]
    fn test_clip_exact_length_is_untouched() {
        assert_eq!(clip(b"1234", 4, DATA_TRUNCATED), "1234");
        assert_eq!(clip(b"12345", 4, DATA_TRUNCATED), "1234 <data truncated>");
    }
}
