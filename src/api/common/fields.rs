//
//  starr
//  api/common/fields.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Provider configuration fields.
//!
//! Indexers, download clients, notifications, import lists and Prowlarr
//! applications carry their implementation-specific settings as an array of
//! `{name, value, ...}` rows. The `value` is dynamically typed on the wire, so
//! it is modelled here as the [`FieldValue`] sum type with typed accessors.
//!
//! ```rust
//! use starr::api::common::{FieldInput, FieldValue};
//!
//! let field: FieldInput = serde_json::from_str(r#"{"name":"apiKey","value":"abc"}"#).unwrap();
//! assert_eq!(field.value.as_ref().unwrap().as_str().unwrap(), "abc");
//! assert!(field.value.unwrap().as_i64().is_err());
//! ```

use serde::{Deserialize, Serialize};

use super::{Error, Result};

/// The value held by a provider field.
///
/// Deserialization tries the variants in declaration order, so `3` decodes as
/// [`FieldValue::Int`] and `3.5` as [`FieldValue::Float`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<FieldValue>),
}

impl FieldValue {
    fn variant(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "list",
        }
    }

    fn mismatch(&self, expected: &'static str) -> Error {
        Error::FieldType {
            expected,
            found: self.variant(),
        }
    }

    /// Returns the string value.
    pub fn as_str(&self) -> Result<&str> {
        match self {
            Self::String(s) => Ok(s),
            other => Err(other.mismatch("string")),
        }
    }

    /// Returns the integer value.
    pub fn as_i64(&self) -> Result<i64> {
        match self {
            Self::Int(i) => Ok(*i),
            other => Err(other.mismatch("int")),
        }
    }

    /// Returns the numeric value, widening integers.
    pub fn as_f64(&self) -> Result<f64> {
        match self {
            Self::Float(f) => Ok(*f),
            Self::Int(i) => Ok(*i as f64),
            other => Err(other.mismatch("float")),
        }
    }

    /// Returns the boolean value.
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            other => Err(other.mismatch("bool")),
        }
    }

    /// Returns the list value.
    pub fn as_list(&self) -> Result<&[FieldValue]> {
        match self {
            Self::List(items) => Ok(items),
            other => Err(other.mismatch("list")),
        }
    }

    /// Returns a list of integers, such as selected category IDs.
    pub fn as_i64_list(&self) -> Result<Vec<i64>> {
        self.as_list()?.iter().map(FieldValue::as_i64).collect()
    }

    /// Returns a list of strings, such as tracker URLs.
    pub fn as_string_list(&self) -> Result<Vec<String>> {
        self.as_list()?
            .iter()
            .map(|v| v.as_str().map(str::to_string))
            .collect()
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<i64>> for FieldValue {
    fn from(v: Vec<i64>) -> Self {
        Self::List(v.into_iter().map(Self::Int).collect())
    }
}

/// A field as sent when adding or updating a provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,
}

impl FieldInput {
    /// Creates a field with the given name and value.
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }
}

/// A field as returned by the service, with its UI metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOutput {
    #[serde(default)]
    pub order: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    #[serde(default)]
    pub advanced: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub select_options: Vec<SelectOption>,
}

/// One choice of a select-style field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOption {
    pub value: i64,
    pub name: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_value: Option<i64>,
}

/// Looks up a field by name.
pub fn find_field<'a>(fields: &'a [FieldOutput], name: &str) -> Option<&'a FieldOutput> {
    fields.iter().find(|f| f.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::ErrorKind;

    #[test]
    fn test_decode_variants() {
        let json = r#"[
            {"name": "a", "value": true},
            {"name": "b", "value": 3},
            {"name": "c", "value": 2.5},
            {"name": "d", "value": "x"},
            {"name": "e", "value": [1, 2, 3]},
            {"name": "f"}
        ]"#;
        let fields: Vec<FieldInput> = serde_json::from_str(json).unwrap();

        assert_eq!(fields[0].value, Some(FieldValue::Bool(true)));
        assert_eq!(fields[1].value, Some(FieldValue::Int(3)));
        assert_eq!(fields[2].value, Some(FieldValue::Float(2.5)));
        assert_eq!(fields[3].value, Some(FieldValue::String("x".into())));
        assert_eq!(
            fields[4].value.as_ref().unwrap().as_i64_list().unwrap(),
            vec![1, 2, 3]
        );
        assert_eq!(fields[5].value, None);
    }

    #[test]
    fn test_wrong_variant_is_field_type_error() {
        let value = FieldValue::from("https://indexer.example");
        let err = value.as_i64().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FieldType);
        assert_eq!(err.to_string(), "field value is string, not int");
        assert!(FieldValue::Int(2).as_str().is_err());
    }

    #[test]
    fn test_int_widens_to_float() {
        assert_eq!(FieldValue::Int(4).as_f64().unwrap(), 4.0);
        assert!(FieldValue::Float(4.0).as_i64().is_err());
    }

    #[test]
    fn test_serialize_omits_missing_value() {
        let field = FieldInput {
            name: "seedRatio".into(),
            value: None,
        };
        assert_eq!(serde_json::to_string(&field).unwrap(), r#"{"name":"seedRatio"}"#);

        let field = FieldInput::new("categories", vec![5030_i64, 5040]);
        assert_eq!(
            serde_json::to_string(&field).unwrap(),
            r#"{"name":"categories","value":[5030,5040]}"#
        );
    }

    #[test]
    fn test_find_field() {
        let fields = vec![FieldOutput {
            name: "baseUrl".into(),
            value: Some("https://nzb.example".into()),
            ..Default::default()
        }];
        assert!(find_field(&fields, "baseUrl").is_some());
        assert!(find_field(&fields, "apiKey").is_none());
    }
}
