//
//  starr
//  cli/api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Direct API access command
//!
//! Sends a request to any endpoint of a configured instance, with the API
//! key and URL rules of the SDK applied. Useful for endpoints that have no
//! dedicated command, or for debugging.
//!
//! ## Examples
//!
//! ```bash
//! # Version prefix is added for you: GET /api/v3/system/status
//! starr api system/status
//!
//! # Explicit version and query parameters
//! starr api v3/episode -q seriesId=12
//!
//! # Trigger a command with POST
//! starr api -X POST command -F name=RefreshSeries -F seriesId=12
//!
//! # Every page of a paged endpoint
//! starr api history --paginate
//!
//! # iCal feed
//! starr api feed/v3/calendar/sonarr.ics
//! ```

use std::fs;

use anyhow::{bail, Context, Result};
use clap::Args;
use console::style;
use reqwest::Method;
use serde_json::Value;

use crate::api::common::{App, Error, Page, PageReq};
use crate::api::servarr::get_all_pages;
use crate::api::{Apier, Params, Request};

use super::{Connection, GlobalOptions};

/// Make direct API requests
#[derive(Args, Debug)]
pub struct ApiCommand {
    /// API endpoint (e.g., system/status, v3/series, feed/v3/calendar/sonarr.ics)
    pub endpoint: String,

    /// HTTP method (GET, POST, PUT, DELETE)
    #[arg(long, short = 'X', default_value = "GET")]
    pub method: String,

    /// Query parameters as key=value (repeatable)
    #[arg(long, short = 'q', action = clap::ArgAction::Append)]
    pub query: Vec<String>,

    /// Request body fields as JSON (key=value, can be nested with dots)
    #[arg(long, short = 'F', action = clap::ArgAction::Append)]
    pub field: Vec<String>,

    /// Raw field values (not JSON-encoded, strings only)
    #[arg(long, action = clap::ArgAction::Append)]
    pub raw_field: Vec<String>,

    /// Read request body from file (- for stdin)
    #[arg(long, short = 'f')]
    pub input: Option<String>,

    /// Fetch every page of a paged endpoint
    #[arg(long)]
    pub paginate: bool,

    /// Include response status and headers in output
    #[arg(long, short = 'I')]
    pub include: bool,

    /// Suppress output (only report failures)
    #[arg(long)]
    pub silent: bool,
}

impl ApiCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let conn = Connection::open(global, None)?;
        let client = conn.client()?;
        let method = self.parse_method()?;
        let path = resolve_path(conn.app(), &self.endpoint);
        let query = self.build_query()?;

        if self.paginate {
            if method != Method::GET {
                bail!("--paginate only works with GET");
            }
            let mut base = PageReq::default();
            base.params = query;
            let page: Page<Value> = get_all_pages(&client, &path, &base, 0, 0).await?;
            if !self.silent {
                println!("{}", serde_json::to_string_pretty(&page)?);
            }
            return Ok(());
        }

        let mut req = Request::new(path).with_query(query);
        if let Some(body) = self.build_body()? {
            req = req.with_json(&body)?;
        }

        let response = match client.send(method, req, true).await {
            Ok(response) => response,
            Err(Error::Response(err)) => {
                if !self.silent && !err.body.is_empty() {
                    eprintln!("{}", err.body);
                }
                bail!("Request failed with status {}", err.status);
            }
            Err(err) => return Err(err).context("Request failed"),
        };

        if self.include {
            println!("{} {}", style("HTTP").dim(), response.status);
            for (name, value) in response.headers.iter() {
                println!("{}: {}", name, value.to_str().unwrap_or(""));
            }
            println!();
        }

        if self.silent {
            return Ok(());
        }

        let text = response.text();
        match serde_json::from_str::<Value>(&text) {
            Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
            Err(_) => println!("{}", text),
        }
        Ok(())
    }

    fn parse_method(&self) -> Result<Method> {
        match self.method.to_uppercase().as_str() {
            "GET" => Ok(Method::GET),
            "POST" => Ok(Method::POST),
            "PUT" => Ok(Method::PUT),
            "DELETE" => Ok(Method::DELETE),
            _ => bail!("Unsupported HTTP method: {}", self.method),
        }
    }

    fn build_query(&self) -> Result<Params> {
        let mut params = Params::new();
        for pair in &self.query {
            let (key, value) = split_pair(pair)?;
            params.add(key, value);
        }
        Ok(params)
    }

    fn build_body(&self) -> Result<Option<Value>> {
        if let Some(input) = &self.input {
            let content = if input == "-" {
                std::io::read_to_string(std::io::stdin())?
            } else {
                fs::read_to_string(input).with_context(|| format!("Failed to read {input}"))?
            };
            let value: Value = serde_json::from_str(&content).context("Request body is not valid JSON")?;
            return Ok(Some(value));
        }

        if self.field.is_empty() && self.raw_field.is_empty() {
            return Ok(None);
        }

        let mut body = serde_json::Map::new();
        for field in &self.field {
            let (key, value) = split_pair(field)?;
            set_nested_value(&mut body, key, parse_value(value));
        }
        for field in &self.raw_field {
            let (key, value) = split_pair(field)?;
            set_nested_value(&mut body, key, Value::String(value.to_string()));
        }
        Ok(Some(Value::Object(body)))
    }
}

/// Adds the service's API version unless the path already names a version,
/// `api/` or `feed/`.
fn resolve_path(app: App, endpoint: &str) -> String {
    let path = endpoint.trim_start_matches('/');
    let first = path.split('/').next().unwrap_or_default();
    let versioned = first.len() > 1
        && first.starts_with('v')
        && first[1..].chars().all(|c| c.is_ascii_digit());
    if versioned || first == "api" || first == "feed" {
        path.to_string()
    } else {
        format!("{}/{}", app.api_version(), path)
    }
}

fn split_pair(pair: &str) -> Result<(&str, &str)> {
    match pair.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => bail!("Invalid field format: {}. Expected key=value", pair),
    }
}

/// Reads a `-F` value as JSON where it parses, else as a string.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn set_nested_value(obj: &mut serde_json::Map<String, Value>, key: &str, value: Value) {
    match key.split_once('.') {
        None => {
            obj.insert(key.to_string(), value);
        }
        Some((first, rest)) => {
            let entry = obj
                .entry(first.to_string())
                .or_insert_with(|| Value::Object(serde_json::Map::new()));
            if let Value::Object(nested) = entry {
                set_nested_value(nested, rest, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_path() {
        assert_eq!(resolve_path(App::Sonarr, "/system/status"), "v3/system/status");
        assert_eq!(resolve_path(App::Lidarr, "artist"), "v1/artist");
        assert_eq!(resolve_path(App::Sonarr, "v5/series"), "v5/series");
        assert_eq!(resolve_path(App::Sonarr, "feed/v3/calendar/sonarr.ics"), "feed/v3/calendar/sonarr.ics");
        assert_eq!(resolve_path(App::Radarr, "api/v3/movie"), "api/v3/movie");
        assert_eq!(resolve_path(App::Radarr, "version"), "v3/version");
    }

    #[test]
    fn test_nested_fields() {
        let mut body = serde_json::Map::new();
        set_nested_value(&mut body, "name", parse_value("RefreshSeries"));
        set_nested_value(&mut body, "seriesId", parse_value("12"));
        set_nested_value(&mut body, "options.monitor", parse_value("true"));
        assert_eq!(
            Value::Object(body),
            json!({"name": "RefreshSeries", "seriesId": 12, "options": {"monitor": true}})
        );
    }

    #[test]
    fn test_split_pair() {
        assert_eq!(split_pair("a=b=c").unwrap(), ("a", "b=c"));
        assert!(split_pair("novalue").is_err());
        assert!(split_pair("=x").is_err());
    }
}
